use crate::boq_engine::domain::{BoqLine, BoqList, ItemId};
use std::collections::HashMap;

/// A BOQ line paired with its nesting depth (0 for main lines)
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PresentedLine<'a> {
    pub line: &'a BoqLine,
    pub depth: usize,
}

/// BoqPresenter service flattening a BoqList into display order
///
/// Pure view: it neither validates nor repairs. Stale or orphaned lines are
/// rendered as they are so that inconsistencies stay visible.
pub struct BoqPresenter;

impl BoqPresenter {
    /// Orders the list as main line followed by its subtree
    ///
    /// Each subtree is walked depth-first through `required_by` chains, with
    /// siblings in list order. Every line is emitted exactly once. Lines that
    /// cannot be reached from any main line are appended at the end, starting
    /// at depth 1, with their own descendants nested below them.
    pub fn present(list: &BoqList) -> Vec<PresentedLine<'_>> {
        let lines = list.lines();
        let children = Self::index_children(lines);
        let mut emitted = vec![false; lines.len()];
        let mut presented = Vec::with_capacity(lines.len());

        for (index, line) in lines.iter().enumerate() {
            if line.is_dependency() || emitted[index] {
                continue;
            }
            emitted[index] = true;
            Self::walk(lines, &children, index, 0, &mut emitted, &mut presented);
        }

        for index in 0..lines.len() {
            if !emitted[index] {
                emitted[index] = true;
                Self::walk(lines, &children, index, 1, &mut emitted, &mut presented);
            }
        }

        presented
    }

    /// Dependency line indices grouped by (owning root, immediate parent)
    fn index_children(lines: &[BoqLine]) -> HashMap<(&ItemId, &ItemId), Vec<usize>> {
        let mut children: HashMap<(&ItemId, &ItemId), Vec<usize>> = HashMap::new();
        for (index, line) in lines.iter().enumerate() {
            if let Some(parent) = line.required_by() {
                children.entry((line.root(), parent)).or_default().push(index);
            }
        }
        children
    }

    /// Pre-order walk from `start` using an explicit stack
    fn walk<'a>(
        lines: &'a [BoqLine],
        children: &HashMap<(&'a ItemId, &'a ItemId), Vec<usize>>,
        start: usize,
        start_depth: usize,
        emitted: &mut [bool],
        presented: &mut Vec<PresentedLine<'a>>,
    ) {
        let mut stack = vec![(start, start_depth)];

        while let Some((index, depth)) = stack.pop() {
            let line = &lines[index];
            presented.push(PresentedLine { line, depth });

            let Some(kids) = children.get(&(line.root(), line.item_id())) else {
                continue;
            };
            let pending: Vec<usize> = kids.iter().copied().filter(|&k| !emitted[k]).collect();
            for &kid in &pending {
                emitted[kid] = true;
            }
            stack.extend(pending.into_iter().rev().map(|kid| (kid, depth + 1)));
        }
    }
}
