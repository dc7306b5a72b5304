//! Builder for constructing BoqReadModel from domain objects

use super::boq_read_model::{BoqMetadataView, BoqReadModel, BoqRowView};
use crate::boq_engine::domain::{BoqMetadata, CatalogIndex};
use crate::boq_engine::services::PresentedLine;

/// Builder for constructing BoqReadModel from presented lines
///
/// Catalog data (unit, price) is joined in here. Lines whose item is gone
/// from the catalog keep their stored name and are flagged instead of dropped.
pub struct BoqReadModelBuilder;

impl BoqReadModelBuilder {
    /// Builds a BoqReadModel from presenter output
    ///
    /// # Arguments
    /// * `presented` - Lines in display order, as returned by `BoqPresenter::present`
    /// * `catalog` - Catalog snapshot used for units and prices
    /// * `metadata` - Document metadata (timestamp, tool info, document id)
    pub fn build<C>(
        presented: &[PresentedLine<'_>],
        catalog: &C,
        metadata: &BoqMetadata,
    ) -> BoqReadModel
    where
        C: CatalogIndex + ?Sized,
    {
        BoqReadModel {
            metadata: Self::build_metadata(metadata),
            rows: presented
                .iter()
                .map(|presented| Self::build_row(presented, catalog))
                .collect(),
        }
    }

    fn build_metadata(metadata: &BoqMetadata) -> BoqMetadataView {
        BoqMetadataView {
            generated_at: metadata.generated_at().to_string(),
            tool_name: metadata.tool_name().to_string(),
            tool_version: metadata.tool_version().to_string(),
            document_id: metadata.document_id().to_string(),
        }
    }

    fn build_row<C>(presented: &PresentedLine<'_>, catalog: &C) -> BoqRowView
    where
        C: CatalogIndex + ?Sized,
    {
        let line = presented.line;
        let entry = catalog.lookup(line.item_id());

        BoqRowView {
            depth: presented.depth,
            item_id: line.item_id().to_string(),
            name: line.name().to_string(),
            unit: entry.map(|item| item.unit().to_string()),
            unit_price: entry.map(|item| item.unit_price()),
            quantity: line.quantity(),
            is_dependency: line.is_dependency(),
            required_by: line.required_by().map(|parent| parent.to_string()),
            in_catalog: entry.is_some(),
        }
    }
}
