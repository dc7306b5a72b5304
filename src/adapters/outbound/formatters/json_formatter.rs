use crate::application::read_models::{BoqMetadataView, BoqReadModel, BoqRowView};
use crate::ports::outbound::BoqFormatter;
use crate::shared::Result;
use rust_decimal::Decimal;
use serde::Serialize;

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct BoqDocument<'a> {
    document_id: &'a str,
    generated_at: &'a str,
    tool: Tool<'a>,
    summary: Summary,
    lines: Vec<Line<'a>>,
}

#[derive(Debug, Serialize)]
struct Tool<'a> {
    name: &'a str,
    version: &'a str,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Summary {
    main_items: usize,
    dependency_lines: usize,
    stale_lines: usize,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "lowercase")]
enum LineKind {
    Main,
    Dependency,
}

#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
struct Line<'a> {
    depth: usize,
    item_id: &'a str,
    name: &'a str,
    kind: LineKind,
    quantity: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit: Option<&'a str>,
    #[serde(skip_serializing_if = "Option::is_none")]
    unit_price: Option<Decimal>,
    #[serde(skip_serializing_if = "Option::is_none")]
    required_by: Option<&'a str>,
    in_catalog: bool,
}

/// JsonFormatter adapter rendering the BOQ as a pretty-printed JSON document
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }

    fn build_line(row: &BoqRowView) -> Line<'_> {
        Line {
            depth: row.depth,
            item_id: &row.item_id,
            name: &row.name,
            kind: if row.is_dependency {
                LineKind::Dependency
            } else {
                LineKind::Main
            },
            quantity: row.quantity,
            unit: row.unit.as_deref(),
            unit_price: row.unit_price,
            required_by: row.required_by.as_deref(),
            in_catalog: row.in_catalog,
        }
    }

    fn build_tool(metadata: &BoqMetadataView) -> Tool<'_> {
        Tool {
            name: &metadata.tool_name,
            version: &metadata.tool_version,
        }
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl BoqFormatter for JsonFormatter {
    fn format(&self, model: &BoqReadModel) -> Result<String> {
        let document = BoqDocument {
            document_id: &model.metadata.document_id,
            generated_at: &model.metadata.generated_at,
            tool: Self::build_tool(&model.metadata),
            summary: Summary {
                main_items: model.main_count(),
                dependency_lines: model.dependency_count(),
                stale_lines: model.stale_rows().count(),
            },
            lines: model.rows.iter().map(Self::build_line).collect(),
        };

        serde_json::to_string_pretty(&document).map_err(Into::into)
    }
}
