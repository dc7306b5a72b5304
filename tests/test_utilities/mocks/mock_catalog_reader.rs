use boq_builder::prelude::*;
use std::path::Path;

/// Mock CatalogReader serving an in-memory catalog
pub struct MockCatalogReader {
    pub catalog: Catalog,
    pub should_fail: bool,
}

impl MockCatalogReader {
    pub fn new(catalog: Catalog) -> Self {
        Self {
            catalog,
            should_fail: false,
        }
    }

    /// Builds the catalog from `(id, [(dependency, per_unit)])` rows
    pub fn from_rows(rows: &[(&str, &[(&str, u64)])]) -> Self {
        let items = rows.iter().map(|(id, deps)| {
            deps.iter().fold(
                CatalogItem::new(ItemId::new(*id).unwrap(), id.to_uppercase()),
                |item, (dep, qty)| {
                    item.with_dependency(DependencyEdge::new(ItemId::new(*dep).unwrap(), *qty).unwrap())
                },
            )
        });
        Self::new(Catalog::from_items(items).unwrap())
    }

    pub fn with_failure() -> Self {
        Self {
            catalog: Catalog::default(),
            should_fail: true,
        }
    }
}

impl CatalogReader for MockCatalogReader {
    fn read_catalog(&self, _path: &Path) -> Result<Catalog> {
        if self.should_fail {
            anyhow::bail!("Mock catalog read failure");
        }
        Ok(self.catalog.clone())
    }
}
