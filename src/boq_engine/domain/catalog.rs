use super::{CatalogItem, ItemId};
use crate::shared::{BoqError, EngineResult};
use std::collections::HashMap;

/// Read-only lookup from item identifier to catalog record.
///
/// The engine never mutates the catalog; implementations are expected to be a
/// fully materialised snapshot for the duration of one mutation.
pub trait CatalogIndex {
    fn lookup(&self, id: &ItemId) -> Option<&CatalogItem>;
}

/// In-memory catalog snapshot
#[derive(Debug, Clone, Default)]
pub struct Catalog {
    items: HashMap<ItemId, CatalogItem>,
}

impl Catalog {
    /// Builds a catalog, rejecting duplicate identifiers.
    ///
    /// Dangling dependency edges are accepted here; the resolver reports them
    /// as warnings when they are traversed.
    pub fn from_items(items: impl IntoIterator<Item = CatalogItem>) -> EngineResult<Self> {
        let mut map = HashMap::new();
        for item in items {
            let id = item.id().clone();
            if map.insert(id.clone(), item).is_some() {
                return Err(BoqError::InvalidCatalog {
                    reason: format!("duplicate item id '{}'", id),
                });
            }
        }
        Ok(Self { items: map })
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Identifiers referenced by dependency edges but missing from the catalog
    pub fn dangling_references(&self) -> Vec<(ItemId, ItemId)> {
        let mut dangling: Vec<(ItemId, ItemId)> = self
            .items
            .values()
            .flat_map(|item| {
                item.dependencies()
                    .iter()
                    .filter(|edge| !self.items.contains_key(edge.item_id()))
                    .map(|edge| (item.id().clone(), edge.item_id().clone()))
            })
            .collect();
        dangling.sort();
        dangling
    }
}

impl CatalogIndex for Catalog {
    fn lookup(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.items.get(id)
    }
}

impl CatalogIndex for HashMap<ItemId, CatalogItem> {
    fn lookup(&self, id: &ItemId) -> Option<&CatalogItem> {
        self.get(id)
    }
}
