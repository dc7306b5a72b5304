use super::ItemId;
use std::fmt;

/// Non-fatal findings raised while expanding a dependency graph.
///
/// Warnings travel alongside successful results so that a single broken
/// catalog edge never blocks building a BOQ.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ResolutionWarning {
    /// An edge pointed back at an item already on the current expansion path.
    /// The edge was dropped and that branch stopped there.
    CycleDetected { path: Vec<ItemId>, item_id: ItemId },
    /// An edge referenced an identifier absent from the catalog
    DanglingDependency { required_by: ItemId, item_id: ItemId },
    /// Expansion was cut at the configured maximum depth
    DepthLimitReached { item_id: ItemId, max_depth: usize },
    /// A main line references an item no longer present in the catalog
    MissingCatalogEntry { item_id: ItemId },
}

impl ResolutionWarning {
    /// Item the warning is about
    pub fn item_id(&self) -> &ItemId {
        match self {
            ResolutionWarning::CycleDetected { item_id, .. }
            | ResolutionWarning::DanglingDependency { item_id, .. }
            | ResolutionWarning::DepthLimitReached { item_id, .. }
            | ResolutionWarning::MissingCatalogEntry { item_id } => item_id,
        }
    }
}

impl fmt::Display for ResolutionWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResolutionWarning::CycleDetected { path, item_id } => {
                let chain: Vec<&str> = path.iter().map(ItemId::as_str).collect();
                write!(
                    f,
                    "Dependency cycle: {} -> {} (edge dropped)",
                    chain.join(" -> "),
                    item_id
                )
            }
            ResolutionWarning::DanglingDependency {
                required_by,
                item_id,
            } => write!(
                f,
                "'{}' requires '{}', which is not in the catalog (edge skipped)",
                required_by, item_id
            ),
            ResolutionWarning::DepthLimitReached { item_id, max_depth } => write!(
                f,
                "Maximum dependency depth ({}) reached below '{}'; expansion truncated",
                max_depth, item_id
            ),
            ResolutionWarning::MissingCatalogEntry { item_id } => {
                write!(f, "'{}' is no longer in the catalog", item_id)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s).unwrap()
    }

    #[test]
    fn test_cycle_display() {
        let warning = ResolutionWarning::CycleDetected {
            path: vec![id("x"), id("y")],
            item_id: id("x"),
        };
        assert_eq!(warning.to_string(), "Dependency cycle: x -> y -> x (edge dropped)");
        assert_eq!(warning.item_id(), &id("x"));
    }

    #[test]
    fn test_dangling_display() {
        let warning = ResolutionWarning::DanglingDependency {
            required_by: id("cam"),
            item_id: id("ghost"),
        };
        assert!(warning.to_string().contains("'cam' requires 'ghost'"));
    }
}
