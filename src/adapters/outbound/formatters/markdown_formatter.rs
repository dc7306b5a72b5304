use crate::application::read_models::{BoqMetadataView, BoqReadModel, BoqRowView};
use crate::ports::outbound::BoqFormatter;
use crate::shared::Result;

/// Markdown table header for BOQ lines
const TABLE_HEADER: &str = "| Item | Name | Qty | Unit | Unit Price | Required By |\n";

/// Markdown table separator line
const TABLE_SEPARATOR: &str = "|------|------|----:|------|-----------:|-------------|\n";

/// Per-level indent inside the Item column (table cells collapse plain spaces)
const INDENT: &str = "&nbsp;&nbsp;";

/// MarkdownFormatter adapter rendering the BOQ as an indented Markdown table
///
/// Dependency lines sit directly below their parent, indented by depth.
/// Lines whose item has left the catalog are marked and listed again at
/// the end so they are not missed.
pub struct MarkdownFormatter;

impl MarkdownFormatter {
    pub fn new() -> Self {
        Self
    }

    /// Escapes pipe characters and newlines for safe Markdown table rendering
    fn escape_markdown_table_cell(text: &str) -> String {
        text.replace('|', "\\|").replace('\n', " ")
    }

    fn item_cell(row: &BoqRowView) -> String {
        let id = format!("`{}`", Self::escape_markdown_table_cell(&row.item_id));
        let marker = if row.in_catalog { "" } else { " ⚠️" };
        if row.depth == 0 {
            format!("**{}**{}", id, marker)
        } else {
            format!("{}↳ {}{}", INDENT.repeat(row.depth - 1), id, marker)
        }
    }
}

impl Default for MarkdownFormatter {
    fn default() -> Self {
        Self::new()
    }
}

/// Helper methods for rendering sections
impl MarkdownFormatter {
    fn render_header(&self, output: &mut String, metadata: &BoqMetadataView) {
        output.push_str("# Bill of Quantities\n\n");
        output.push_str(&format!(
            "Generated {} by {} {} (`{}`)\n\n",
            metadata.generated_at, metadata.tool_name, metadata.tool_version, metadata.document_id
        ));
    }

    fn render_lines(&self, output: &mut String, model: &BoqReadModel) {
        output.push_str("## Line Items\n\n");

        if model.rows.is_empty() {
            output.push_str("*The BOQ is empty*\n\n");
            return;
        }

        output.push_str(&format!(
            "{} main item(s), {} dependency line(s).\n\n",
            model.main_count(),
            model.dependency_count()
        ));
        output.push_str(TABLE_HEADER);
        output.push_str(TABLE_SEPARATOR);

        for row in &model.rows {
            output.push_str(&format!(
                "| {} | {} | {} | {} | {} | {} |\n",
                Self::item_cell(row),
                Self::escape_markdown_table_cell(&row.name),
                row.quantity,
                row.unit.as_deref().unwrap_or("N/A"),
                row.unit_price
                    .map(|price| price.to_string())
                    .unwrap_or_else(|| "N/A".to_string()),
                row.required_by
                    .as_deref()
                    .map(Self::escape_markdown_table_cell)
                    .unwrap_or_default(),
            ));
        }
        output.push('\n');
    }

    fn render_stale(&self, output: &mut String, model: &BoqReadModel) {
        let stale: Vec<&BoqRowView> = model.stale_rows().collect();
        if stale.is_empty() {
            return;
        }

        output.push_str("## Stale References\n\n");
        output.push_str("These lines reference items that are no longer in the catalog.\n\n");
        for row in stale {
            output.push_str(&format!(
                "- `{}` ({})\n",
                Self::escape_markdown_table_cell(&row.item_id),
                Self::escape_markdown_table_cell(&row.name)
            ));
        }
        output.push('\n');
    }
}

impl BoqFormatter for MarkdownFormatter {
    fn format(&self, model: &BoqReadModel) -> Result<String> {
        let mut output = String::new();

        self.render_header(&mut output, &model.metadata);
        self.render_lines(&mut output, model);
        self.render_stale(&mut output, model);

        Ok(output)
    }
}
