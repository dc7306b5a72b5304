use super::{BoqLine, ItemId};
use crate::shared::{BoqError, EngineResult};

/// BoqList aggregate - an ordered forest of main lines and their derived lines
///
/// The list is treated as an immutable value: mutator services return a new
/// list rather than editing one in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BoqList {
    lines: Vec<BoqLine>,
}

impl BoqList {
    pub fn new() -> Self {
        Self::default()
    }

    /// Wraps existing lines, rejecting zero quantities
    pub fn from_lines(lines: Vec<BoqLine>) -> EngineResult<Self> {
        if let Some(line) = lines.iter().find(|line| line.quantity() == 0) {
            return Err(BoqError::InvalidQuantity {
                item_id: line.item_id().to_string(),
                reason: "BOQ line quantity must be greater than zero".to_string(),
            });
        }
        Ok(Self { lines })
    }

    pub(crate) fn from_lines_unchecked(lines: Vec<BoqLine>) -> Self {
        Self { lines }
    }

    pub fn lines(&self) -> &[BoqLine] {
        &self.lines
    }

    pub fn into_lines(self) -> Vec<BoqLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, BoqLine> {
        self.lines.iter()
    }

    pub fn main_lines(&self) -> impl Iterator<Item = &BoqLine> {
        self.lines.iter().filter(|line| !line.is_dependency())
    }

    pub fn main_line(&self, item_id: &ItemId) -> Option<&BoqLine> {
        self.main_lines().find(|line| line.item_id() == item_id)
    }

    /// Position of the main line for `item_id`
    pub fn main_position(&self, item_id: &ItemId) -> Option<usize> {
        self.lines
            .iter()
            .position(|line| !line.is_dependency() && line.item_id() == item_id)
    }

    /// Every dependency line owned by the main item `root`, at any depth
    pub fn subtree_of<'a>(&'a self, root: &ItemId) -> impl Iterator<Item = &'a BoqLine> + 'a {
        let root = root.clone();
        self.lines
            .iter()
            .filter(move |line| line.is_dependency() && *line.root() == root)
    }

    /// Dependency lines whose owning main line is missing from the list
    pub fn orphaned_lines(&self) -> impl Iterator<Item = &BoqLine> {
        self.lines
            .iter()
            .filter(|line| line.is_dependency() && self.main_line(line.root()).is_none())
    }
}

impl<'a> IntoIterator for &'a BoqList {
    type Item = &'a BoqLine;
    type IntoIter = std::slice::Iter<'a, BoqLine>;

    fn into_iter(self) -> Self::IntoIter {
        self.lines.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(s: &str) -> ItemId {
        ItemId::new(s).unwrap()
    }

    fn sample() -> BoqList {
        BoqList::from_lines(vec![
            BoqLine::main(id("a"), "A", 1),
            BoqLine::dependency(id("b"), "B", 1, id("a"), id("a")),
            BoqLine::dependency(id("c"), "C", 1, id("b"), id("a")),
            BoqLine::main(id("x"), "X", 2),
            BoqLine::dependency(id("b"), "B", 2, id("x"), id("x")),
        ])
        .unwrap()
    }

    #[test]
    fn test_from_lines_rejects_zero_quantity() {
        let result = BoqList::from_lines(vec![BoqLine::main(id("a"), "A", 0)]);
        assert!(matches!(result, Err(BoqError::InvalidQuantity { .. })));
    }

    #[test]
    fn test_main_lines() {
        let list = sample();
        let mains: Vec<&str> = list.main_lines().map(|l| l.item_id().as_str()).collect();
        assert_eq!(mains, vec!["a", "x"]);
        assert_eq!(list.main_position(&id("x")), Some(3));
        assert!(list.main_line(&id("b")).is_none());
    }

    #[test]
    fn test_subtree_of_follows_root() {
        let list = sample();
        let subtree: Vec<&str> = list.subtree_of(&id("a")).map(|l| l.item_id().as_str()).collect();
        assert_eq!(subtree, vec!["b", "c"]);
        assert_eq!(list.subtree_of(&id("x")).count(), 1);
    }

    #[test]
    fn test_subtree_of_outlives_root_argument() {
        let list = sample();
        let subtree = {
            let root = id("a");
            list.subtree_of(&root)
        };
        assert_eq!(subtree.count(), 2);
    }

    #[test]
    fn test_orphaned_lines() {
        let list = BoqList::from_lines(vec![BoqLine::dependency(
            id("b"),
            "B",
            1,
            id("a"),
            id("a"),
        )])
        .unwrap();
        assert_eq!(list.orphaned_lines().count(), 1);
        assert_eq!(sample().orphaned_lines().count(), 0);
    }
}
