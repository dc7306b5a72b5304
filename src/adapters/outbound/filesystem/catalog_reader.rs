use crate::boq_engine::domain::{Catalog, CatalogItem, DependencyEdge, ItemId};
use crate::ports::outbound::CatalogReader;
use crate::shared::security::read_guarded;
use crate::shared::{BoqError, Result};
use rust_decimal::Decimal;
use serde::Deserialize;
use std::path::Path;
use tracing::{debug, warn};

/// On-disk catalog shape shared by the JSON, YAML and TOML encodings
#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogDocument {
    #[serde(default)]
    items: Vec<CatalogItemRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct CatalogItemRecord {
    id: ItemId,
    name: String,
    unit: Option<String>,
    unit_price: Option<Decimal>,
    #[serde(default)]
    dependencies: Vec<DependencyRecord>,
}

#[derive(Debug, Deserialize)]
#[serde(deny_unknown_fields)]
struct DependencyRecord {
    item_id: ItemId,
    quantity: u64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum CatalogEncoding {
    Json,
    Yaml,
    Toml,
}

impl CatalogEncoding {
    /// Picks the encoding from the file extension; JSON when unknown
    fn from_path(path: &Path) -> Self {
        match path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase())
            .as_deref()
        {
            Some("yml") | Some("yaml") => CatalogEncoding::Yaml,
            Some("toml") => CatalogEncoding::Toml,
            _ => CatalogEncoding::Json,
        }
    }
}

/// FileSystemReader adapter for reading catalog snapshots from disk
///
/// This adapter implements the CatalogReader port. The file is read through
/// the shared security guard (no symlinks, size limit) before parsing.
pub struct FileSystemReader;

impl FileSystemReader {
    pub fn new() -> Self {
        Self
    }

    fn parse_document(path: &Path, content: &str) -> Result<CatalogDocument> {
        let parsed = match CatalogEncoding::from_path(path) {
            CatalogEncoding::Json => serde_json::from_str(content).map_err(|e| e.to_string()),
            CatalogEncoding::Yaml => serde_yaml_ng::from_str(content).map_err(|e| e.to_string()),
            CatalogEncoding::Toml => toml::from_str(content).map_err(|e| e.to_string()),
        };

        parsed.map_err(|details| {
            BoqError::CatalogParseError {
                path: path.to_path_buf(),
                details,
            }
            .into()
        })
    }

    fn into_catalog(document: CatalogDocument) -> Result<Catalog> {
        let mut items = Vec::with_capacity(document.items.len());

        for record in document.items {
            let mut item = CatalogItem::new(record.id, record.name);
            if let Some(unit) = record.unit {
                item = item.with_unit(unit);
            }
            if let Some(price) = record.unit_price {
                item = item.with_unit_price(price);
            }
            for dependency in record.dependencies {
                let edge = DependencyEdge::new(dependency.item_id, dependency.quantity).map_err(
                    |e| BoqError::InvalidCatalog {
                        reason: format!("item '{}': {}", item.id(), e),
                    },
                )?;
                item = item.with_dependency(edge);
            }
            items.push(item);
        }

        Ok(Catalog::from_items(items)?)
    }
}

impl Default for FileSystemReader {
    fn default() -> Self {
        Self::new()
    }
}

impl CatalogReader for FileSystemReader {
    fn read_catalog(&self, path: &Path) -> Result<Catalog> {
        if !path.exists() {
            return Err(BoqError::CatalogNotFound {
                path: path.to_path_buf(),
            }
            .into());
        }

        let content = read_guarded(path, "catalog")?;
        let document = Self::parse_document(path, &content)?;
        let catalog = Self::into_catalog(document)?;

        for (parent, missing) in catalog.dangling_references() {
            warn!(item = %parent, dependency = %missing, "catalog references an unknown item");
        }
        debug!(path = %path.display(), items = catalog.len(), "loaded catalog");

        Ok(catalog)
    }
}
