use crate::boq_engine::domain::Catalog;
use crate::shared::Result;
use std::path::Path;

/// CatalogReader port for loading a catalog snapshot
///
/// This port abstracts the catalog collaborator. The engine only needs a
/// fully materialised, read-only snapshot for the duration of one command.
pub trait CatalogReader {
    /// Reads and validates the catalog stored at `path`
    ///
    /// # Errors
    /// Returns an error if:
    /// - The catalog file does not exist or cannot be read
    /// - The content is not valid JSON, YAML or TOML
    /// - The catalog contains duplicate ids or zero per-unit quantities
    fn read_catalog(&self, path: &Path) -> Result<Catalog>;
}
