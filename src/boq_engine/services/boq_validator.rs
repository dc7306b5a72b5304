use super::DependencyResolver;
use crate::boq_engine::domain::{BoqList, CatalogIndex, ItemId, ResolutionWarning};
use std::collections::{HashMap, HashSet};
use std::fmt;

/// What a validation finding is about
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FindingKind {
    /// The catalog requires a line that the BOQ does not contain
    MissingLine { expected: u64 },
    /// The line exists but its quantity differs from the catalog expansion
    QuantityMismatch { expected: u64, actual: u64 },
    /// The BOQ holds a derived line the catalog no longer produces
    UnexpectedLine { actual: u64 },
    /// A dependency line survived the removal of its main line
    OrphanedLine,
    /// The same item appears twice as a main line
    DuplicateMainLine,
    /// The main item could not be expanded at all
    ResolutionFailed { reason: String },
    /// A warning raised while re-expanding the main item
    Resolution(ResolutionWarning),
}

/// One discrepancy between a BOQ and its catalog
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationFinding {
    pub item_id: ItemId,
    pub root: ItemId,
    pub required_by: Option<ItemId>,
    pub kind: FindingKind,
}

impl fmt::Display for ValidationFinding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parent = self
            .required_by
            .as_ref()
            .map(|p| format!(" required by '{}'", p))
            .unwrap_or_default();

        match &self.kind {
            FindingKind::MissingLine { expected } => write!(
                f,
                "[{}] missing line '{}'{} (expected quantity {})",
                self.root, self.item_id, parent, expected
            ),
            FindingKind::QuantityMismatch { expected, actual } => write!(
                f,
                "[{}] '{}'{} has quantity {}, catalog expects {}",
                self.root, self.item_id, parent, actual, expected
            ),
            FindingKind::UnexpectedLine { actual } => write!(
                f,
                "[{}] '{}'{} (quantity {}) is no longer produced by the catalog",
                self.root, self.item_id, parent, actual
            ),
            FindingKind::OrphanedLine => write!(
                f,
                "'{}'{} belongs to '{}', which has no main line",
                self.item_id, parent, self.root
            ),
            FindingKind::DuplicateMainLine => {
                write!(f, "'{}' appears more than once as a main line", self.item_id)
            }
            FindingKind::ResolutionFailed { reason } => {
                write!(f, "[{}] cannot be expanded: {}", self.root, reason)
            }
            FindingKind::Resolution(warning) => write!(f, "[{}] {}", self.root, warning),
        }
    }
}

/// Outcome of [`BoqValidator::validate`]
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ValidationReport {
    /// Hard inconsistencies
    pub errors: Vec<ValidationFinding>,
    /// Soft drift, usually a catalog that changed after the BOQ was built
    pub warnings: Vec<ValidationFinding>,
}

impl ValidationReport {
    pub fn is_valid(&self) -> bool {
        self.errors.is_empty()
    }
}

type LineKey = (ItemId, ItemId);

/// BoqValidator service recomputing expected dependency lines from the catalog
///
/// Ordering is not compared; lines are matched by item and immediate parent
/// within each main item's subtree.
#[derive(Debug, Clone, Copy, Default)]
pub struct BoqValidator {
    resolver: DependencyResolver,
}

impl BoqValidator {
    pub fn new(resolver: DependencyResolver) -> Self {
        Self { resolver }
    }

    pub fn validate<C>(&self, list: &BoqList, catalog: &C) -> ValidationReport
    where
        C: CatalogIndex + ?Sized,
    {
        let mut report = ValidationReport::default();
        let mut seen_mains: HashSet<&ItemId> = HashSet::new();

        for main in list.main_lines() {
            let root = main.item_id();
            if !seen_mains.insert(root) {
                report.errors.push(ValidationFinding {
                    item_id: root.clone(),
                    root: root.clone(),
                    required_by: None,
                    kind: FindingKind::DuplicateMainLine,
                });
                continue;
            }
            self.validate_subtree(list, root, main.quantity(), catalog, &mut report);
        }

        for line in list.orphaned_lines() {
            report.errors.push(ValidationFinding {
                item_id: line.item_id().clone(),
                root: line.root().clone(),
                required_by: line.required_by().cloned(),
                kind: FindingKind::OrphanedLine,
            });
        }

        report
    }

    fn validate_subtree<C>(
        &self,
        list: &BoqList,
        root: &ItemId,
        quantity: u64,
        catalog: &C,
        report: &mut ValidationReport,
    ) where
        C: CatalogIndex + ?Sized,
    {
        let finding = |item_id: &ItemId, required_by: Option<&ItemId>, kind| ValidationFinding {
            item_id: item_id.clone(),
            root: root.clone(),
            required_by: required_by.cloned(),
            kind,
        };

        let Some(item) = catalog.lookup(root) else {
            report.warnings.push(finding(
                root,
                None,
                FindingKind::Resolution(ResolutionWarning::MissingCatalogEntry {
                    item_id: root.clone(),
                }),
            ));
            return;
        };

        let resolution = match self.resolver.resolve(item, quantity, catalog) {
            Ok(resolution) => resolution,
            Err(e) => {
                report.errors.push(finding(
                    root,
                    None,
                    FindingKind::ResolutionFailed {
                        reason: e.to_string(),
                    },
                ));
                return;
            }
        };

        for warning in resolution.warnings {
            let item_id = warning.item_id().clone();
            report
                .warnings
                .push(finding(&item_id, None, FindingKind::Resolution(warning)));
        }

        let expected = Self::aggregate(
            resolution
                .lines
                .iter()
                .filter_map(|l| Some((l.item_id(), l.required_by()?, l.quantity()))),
        );
        let actual = Self::aggregate(
            list.subtree_of(root)
                .filter_map(|l| Some((l.item_id(), l.required_by()?, l.quantity()))),
        );
        let ((expected_order, expected), (actual_order, actual)) = match (expected, actual) {
            (Ok(expected), Ok(actual)) => (expected, actual),
            (Err(key), _) | (_, Err(key)) => {
                report.errors.push(finding(
                    &key.0,
                    Some(&key.1),
                    FindingKind::ResolutionFailed {
                        reason: format!(
                            "total quantity of '{}' required by '{}' exceeds the maximum",
                            key.0, key.1
                        ),
                    },
                ));
                return;
            }
        };

        for key in &expected_order {
            let expected_qty = expected[key];
            match actual.get(key) {
                None => report.errors.push(finding(
                    &key.0,
                    Some(&key.1),
                    FindingKind::MissingLine {
                        expected: expected_qty,
                    },
                )),
                Some(&actual_qty) if actual_qty != expected_qty => {
                    report.warnings.push(finding(
                        &key.0,
                        Some(&key.1),
                        FindingKind::QuantityMismatch {
                            expected: expected_qty,
                            actual: actual_qty,
                        },
                    ))
                }
                Some(_) => {}
            }
        }

        for key in actual_order.iter().filter(|key| !expected.contains_key(*key)) {
            report.warnings.push(finding(
                &key.0,
                Some(&key.1),
                FindingKind::UnexpectedLine {
                    actual: actual[key],
                },
            ));
        }
    }

    /// Sums quantities per (item, parent) key, keeping first-seen order
    ///
    /// Fails with the offending key when a sum overflows.
    fn aggregate<'a>(
        lines: impl Iterator<Item = (&'a ItemId, &'a ItemId, u64)>,
    ) -> Result<(Vec<LineKey>, HashMap<LineKey, u64>), LineKey> {
        let mut order = Vec::new();
        let mut totals: HashMap<LineKey, u64> = HashMap::new();
        for (item_id, parent, quantity) in lines {
            let key = (item_id.clone(), parent.clone());
            match totals.get_mut(&key) {
                Some(total) => *total = total.checked_add(quantity).ok_or_else(|| key.clone())?,
                None => {
                    order.push(key.clone());
                    totals.insert(key, quantity);
                }
            }
        }
        Ok((order, totals))
    }
}
