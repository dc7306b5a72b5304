use super::DependencyResolver;
use crate::boq_engine::domain::{
    BoqLine, BoqList, CatalogIndex, CatalogItem, ItemId, LineOrigin, ResolutionWarning,
};
use crate::shared::{BoqError, EngineResult};
use std::collections::HashMap;
use tracing::debug;

/// Result of a BOQ mutation: the new list plus any resolution warnings
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Mutation {
    pub list: BoqList,
    pub warnings: Vec<ResolutionWarning>,
}

impl Mutation {
    fn unchanged(list: &BoqList) -> Self {
        Self {
            list: list.clone(),
            warnings: Vec::new(),
        }
    }
}

/// BoqMutator service implementing the three BOQ state transitions
///
/// Every operation takes the current list by reference and returns a new
/// one. A failed operation leaves no partial result behind.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoqMutator {
    resolver: DependencyResolver,
}

impl BoqMutator {
    pub fn new(resolver: DependencyResolver) -> Self {
        Self { resolver }
    }

    pub fn resolver(&self) -> &DependencyResolver {
        &self.resolver
    }

    /// Adds `quantity` units of `item`, accumulating onto an existing main line
    ///
    /// The freshly resolved dependency lines are merged by key: an existing
    /// line with the same item, parent and owner is incremented, anything
    /// else is appended. Lines owned by other main items are untouched.
    /// A zero quantity is a no-op.
    ///
    /// # Errors
    /// Returns [`BoqError::ResolutionOverflow`] if a quantity would exceed `u64`.
    pub fn add_item<C>(
        &self,
        list: &BoqList,
        item: &CatalogItem,
        quantity: u64,
        catalog: &C,
    ) -> EngineResult<Mutation>
    where
        C: CatalogIndex + ?Sized,
    {
        if quantity == 0 {
            return Ok(Mutation::unchanged(list));
        }

        let resolution = self.resolver.resolve(item, quantity, catalog)?;
        let mut lines = list.lines().to_vec();

        match list.main_position(item.id()) {
            Some(position) => {
                let current = &lines[position];
                let total = current.quantity().checked_add(quantity).ok_or_else(|| {
                    BoqError::ResolutionOverflow {
                        item_id: item.id().to_string(),
                        context: "main line accumulation".to_string(),
                    }
                })?;
                lines[position] = current.with_quantity(total);
            }
            None => lines.push(BoqLine::main(item.id().clone(), item.name(), quantity)),
        }

        Self::merge(&mut lines, resolution.lines)?;

        debug!(item = %item.id(), quantity, lines = lines.len(), "added item");
        Ok(Mutation {
            list: BoqList::from_lines_unchecked(lines),
            warnings: resolution.warnings,
        })
    }

    /// Replaces the quantity of the main line for `item_id` and rebuilds its subtree
    ///
    /// The whole previous subtree is discarded, at every depth, and a fresh
    /// expansion is inserted directly after the main line, merged by key the
    /// same way [`Self::add_item`] merges it. Setting the
    /// quantity to zero removes the item exactly like [`Self::remove_item`].
    /// If the item has vanished from the catalog, the main line keeps the new
    /// quantity with an empty subtree and a
    /// [`ResolutionWarning::MissingCatalogEntry`] is returned.
    ///
    /// # Errors
    /// * [`BoqError::NotFound`] - no main line for `item_id`
    /// * [`BoqError::ResolutionOverflow`] - a quantity would exceed `u64`
    pub fn set_quantity<C>(
        &self,
        list: &BoqList,
        item_id: &ItemId,
        new_quantity: u64,
        catalog: &C,
    ) -> EngineResult<Mutation>
    where
        C: CatalogIndex + ?Sized,
    {
        let position = list.main_position(item_id).ok_or_else(|| BoqError::NotFound {
            item_id: item_id.to_string(),
        })?;

        if new_quantity == 0 {
            return Ok(Mutation {
                list: Self::remove_item(list, item_id),
                warnings: Vec::new(),
            });
        }

        let (fresh, warnings) = match catalog.lookup(item_id) {
            Some(item) => {
                let resolution = self.resolver.resolve(item, new_quantity, catalog)?;
                (resolution.lines, resolution.warnings)
            }
            None => (
                Vec::new(),
                vec![ResolutionWarning::MissingCatalogEntry {
                    item_id: item_id.clone(),
                }],
            ),
        };

        let mut merged = Vec::with_capacity(fresh.len());
        Self::merge(&mut merged, fresh)?;

        let mut fresh = Some(merged);
        let mut lines = Vec::with_capacity(list.len());
        for (index, line) in list.iter().enumerate() {
            if index == position {
                lines.push(line.with_quantity(new_quantity));
                lines.extend(fresh.take().unwrap_or_default());
            } else if !Self::owned_by(line, item_id) {
                lines.push(line.clone());
            }
        }

        debug!(item = %item_id, new_quantity, lines = lines.len(), "replaced quantity");
        Ok(Mutation {
            list: BoqList::from_lines_unchecked(lines),
            warnings,
        })
    }

    /// Removes the main line for `item_id` together with its complete subtree
    ///
    /// Returns the list unchanged when there is no such main line.
    pub fn remove_item(list: &BoqList, item_id: &ItemId) -> BoqList {
        if list.main_line(item_id).is_none() {
            return list.clone();
        }

        let lines: Vec<BoqLine> = list
            .iter()
            .filter(|line| {
                let is_target_main = !line.is_dependency() && line.item_id() == item_id;
                !is_target_main && !Self::owned_by(line, item_id)
            })
            .cloned()
            .collect();

        debug!(item = %item_id, removed = list.len() - lines.len(), "removed item");
        BoqList::from_lines_unchecked(lines)
    }

    fn owned_by(line: &BoqLine, root: &ItemId) -> bool {
        matches!(line.origin(), LineOrigin::Dependency { root: owner, .. } if owner == root)
    }

    /// Adds each incoming line onto an existing line with the same key, or appends it
    fn merge(lines: &mut Vec<BoqLine>, incoming: Vec<BoqLine>) -> EngineResult<()> {
        let mut index: HashMap<(ItemId, LineOrigin), usize> = lines
            .iter()
            .enumerate()
            .map(|(i, line)| ((line.item_id().clone(), line.origin().clone()), i))
            .collect();

        for line in incoming {
            let key = (line.item_id().clone(), line.origin().clone());
            match index.get(&key) {
                Some(&i) => {
                    let total = lines[i].quantity().checked_add(line.quantity()).ok_or_else(|| {
                        BoqError::ResolutionOverflow {
                            item_id: line.item_id().to_string(),
                            context: "dependency line accumulation".to_string(),
                        }
                    })?;
                    lines[i] = lines[i].with_quantity(total);
                }
                None => {
                    index.insert(key, lines.len());
                    lines.push(line);
                }
            }
        }
        Ok(())
    }
}
