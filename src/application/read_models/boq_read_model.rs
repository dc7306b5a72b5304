//! BOQ read model for query operations
//!
//! This module provides the main read model struct that aggregates
//! a BOQ in display order, ready for the formatters.

use rust_decimal::Decimal;

/// Main read model for a rendered BOQ
///
/// Rows are already in presentation order (main line, then its subtree)
/// and carry their nesting depth.
#[derive(Debug, Clone)]
pub struct BoqReadModel {
    pub metadata: BoqMetadataView,
    pub rows: Vec<BoqRowView>,
}

impl BoqReadModel {
    pub fn main_count(&self) -> usize {
        self.rows.iter().filter(|row| !row.is_dependency).count()
    }

    pub fn dependency_count(&self) -> usize {
        self.rows.iter().filter(|row| row.is_dependency).count()
    }

    /// Rows referencing items that are no longer in the catalog
    pub fn stale_rows(&self) -> impl Iterator<Item = &BoqRowView> {
        self.rows.iter().filter(|row| !row.in_catalog)
    }
}

/// View representation of document metadata
#[derive(Debug, Clone)]
pub struct BoqMetadataView {
    /// RFC 3339 timestamp of rendering
    pub generated_at: String,
    pub tool_name: String,
    pub tool_version: String,
    /// `urn:uuid:` identifier of this rendering
    pub document_id: String,
}

/// View representation of one BOQ line
#[derive(Debug, Clone)]
pub struct BoqRowView {
    /// Nesting depth, 0 for main lines
    pub depth: usize,
    pub item_id: String,
    pub name: String,
    /// Unit of measure, when the item is still in the catalog
    pub unit: Option<String>,
    pub unit_price: Option<Decimal>,
    pub quantity: u64,
    pub is_dependency: bool,
    pub required_by: Option<String>,
    pub in_catalog: bool,
}
