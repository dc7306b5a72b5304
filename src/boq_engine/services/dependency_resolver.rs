use crate::boq_engine::domain::{BoqLine, CatalogIndex, CatalogItem, ItemId, ResolutionWarning};
use crate::shared::{BoqError, EngineResult};
use tracing::debug;

/// Dependency lines produced by one expansion, plus the warnings raised on the way
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Resolution {
    pub lines: Vec<BoqLine>,
    pub warnings: Vec<ResolutionWarning>,
}

/// DependencyResolver service expanding a catalog item into quantity-scaled lines
///
/// This service contains pure business logic for dependency graph traversal.
/// It has no I/O dependencies and works only with domain objects.
#[derive(Debug, Clone, Copy, Default)]
pub struct DependencyResolver {
    max_depth: Option<usize>,
}

/// One item on the traversal stack and the index of its next edge
struct Frame<'a> {
    item: &'a CatalogItem,
    multiplier: u64,
    next_edge: usize,
}

impl DependencyResolver {
    /// Resolver without a depth cap; the cycle rule alone bounds the walk
    pub fn new() -> Self {
        Self { max_depth: None }
    }

    /// Resolver that stops expanding below `max_depth` levels
    pub fn with_max_depth(max_depth: usize) -> Self {
        Self {
            max_depth: Some(max_depth.max(1)),
        }
    }

    pub fn max_depth(&self) -> Option<usize> {
        self.max_depth
    }

    /// Expands `item`'s dependency graph, scaling every edge by `multiplier`
    ///
    /// Lines come out in depth-first pre-order: each line precedes its own
    /// descendants, and siblings keep the catalog's edge order. Every line is
    /// rooted at `item`. The walk uses an explicit stack, so arbitrarily long
    /// acyclic chains are expanded in full unless a depth cap was configured
    /// with [`Self::with_max_depth`].
    ///
    /// # Arguments
    /// * `item` - The catalog item being expanded (it is not emitted itself)
    /// * `multiplier` - Quantity of `item`
    /// * `catalog` - Catalog snapshot used to look up dependencies
    ///
    /// # Errors
    /// Returns [`BoqError::ResolutionOverflow`] if any cumulative quantity does
    /// not fit in a `u64`, and [`BoqError::InvalidQuantity`] for a zero multiplier.
    pub fn resolve<C>(
        &self,
        item: &CatalogItem,
        multiplier: u64,
        catalog: &C,
    ) -> EngineResult<Resolution>
    where
        C: CatalogIndex + ?Sized,
    {
        if multiplier == 0 {
            return Err(BoqError::InvalidQuantity {
                item_id: item.id().to_string(),
                reason: "resolution multiplier must be greater than zero".to_string(),
            });
        }

        let mut resolution = Resolution::default();
        self.walk(item, multiplier, catalog, &mut resolution)?;

        debug!(
            item = %item.id(),
            multiplier,
            lines = resolution.lines.len(),
            warnings = resolution.warnings.len(),
            "resolved dependency graph"
        );
        Ok(resolution)
    }

    /// Emits one line per edge, descending into each child before its siblings.
    ///
    /// `path` mirrors the frame stack: an identifier is pushed when its frame
    /// is entered and popped when its edges are exhausted, so sibling branches
    /// never see each other's entries.
    fn walk<C>(
        &self,
        root: &CatalogItem,
        multiplier: u64,
        catalog: &C,
        out: &mut Resolution,
    ) -> EngineResult<()>
    where
        C: CatalogIndex + ?Sized,
    {
        let mut path = vec![root.id().clone()];
        let mut frames = vec![Frame {
            item: root,
            multiplier,
            next_edge: 0,
        }];

        while let Some(frame) = frames.last_mut() {
            let parent = frame.item;
            let multiplier = frame.multiplier;
            let Some(edge) = parent.dependencies().get(frame.next_edge) else {
                frames.pop();
                path.pop();
                continue;
            };
            frame.next_edge += 1;

            let dep_id = edge.item_id();

            if path.contains(dep_id) {
                debug!(item = %dep_id, parent = %parent.id(), "dropping cyclic edge");
                out.warnings.push(ResolutionWarning::CycleDetected {
                    path: path.clone(),
                    item_id: dep_id.clone(),
                });
                continue;
            }

            let Some(dependency) = catalog.lookup(dep_id) else {
                debug!(item = %dep_id, parent = %parent.id(), "skipping dangling edge");
                out.warnings.push(ResolutionWarning::DanglingDependency {
                    required_by: parent.id().clone(),
                    item_id: dep_id.clone(),
                });
                continue;
            };

            let quantity = multiplier
                .checked_mul(edge.quantity_per_unit())
                .ok_or_else(|| BoqError::ResolutionOverflow {
                    item_id: dep_id.to_string(),
                    context: format!("required by '{}'", parent.id()),
                })?;

            out.lines.push(BoqLine::dependency(
                dep_id.clone(),
                dependency.name(),
                quantity,
                parent.id().clone(),
                root.id().clone(),
            ));

            if dependency.dependencies().is_empty() {
                continue;
            }

            if let Some(max_depth) = self.max_depth.filter(|&max| path.len() >= max) {
                debug!(item = %dep_id, max_depth, "depth limit reached");
                out.warnings.push(ResolutionWarning::DepthLimitReached {
                    item_id: dep_id.clone(),
                    max_depth,
                });
                continue;
            }

            path.push(dep_id.clone());
            frames.push(Frame {
                item: dependency,
                multiplier: quantity,
                next_edge: 0,
            });
        }

        Ok(())
    }
}
