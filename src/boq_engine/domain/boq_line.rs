use super::ItemId;
use serde::{Deserialize, Serialize};

/// Why a line exists in the BOQ
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum LineOrigin {
    /// Chosen explicitly by the estimator
    Main,
    /// Derived from a catalog dependency edge
    Dependency {
        /// Immediate governing item on the expansion path
        required_by: ItemId,
        /// Main item whose expansion produced this line
        root: ItemId,
    },
}

/// One row of the working Bill of Quantities
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BoqLine {
    item_id: ItemId,
    name: String,
    quantity: u64,
    #[serde(flatten)]
    origin: LineOrigin,
}

impl BoqLine {
    pub fn main(item_id: ItemId, name: impl Into<String>, quantity: u64) -> Self {
        Self {
            item_id,
            name: name.into(),
            quantity,
            origin: LineOrigin::Main,
        }
    }

    pub fn dependency(
        item_id: ItemId,
        name: impl Into<String>,
        quantity: u64,
        required_by: ItemId,
        root: ItemId,
    ) -> Self {
        Self {
            item_id,
            name: name.into(),
            quantity,
            origin: LineOrigin::Dependency { required_by, root },
        }
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    pub fn origin(&self) -> &LineOrigin {
        &self.origin
    }

    pub fn is_dependency(&self) -> bool {
        matches!(self.origin, LineOrigin::Dependency { .. })
    }

    /// Immediate governing item; `None` for main lines
    pub fn required_by(&self) -> Option<&ItemId> {
        match &self.origin {
            LineOrigin::Main => None,
            LineOrigin::Dependency { required_by, .. } => Some(required_by),
        }
    }

    /// Main item owning this line (the line's own id for main lines)
    pub fn root(&self) -> &ItemId {
        match &self.origin {
            LineOrigin::Main => &self.item_id,
            LineOrigin::Dependency { root, .. } => root,
        }
    }

    /// Identity used when merging lines
    pub fn key(&self) -> (&ItemId, &LineOrigin) {
        (&self.item_id, &self.origin)
    }

    pub(crate) fn with_quantity(&self, quantity: u64) -> Self {
        Self {
            quantity,
            ..self.clone()
        }
    }
}
