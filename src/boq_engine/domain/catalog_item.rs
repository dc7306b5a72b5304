use crate::shared::{BoqError, EngineResult};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Maximum length for item identifiers (prevents DoS via huge keys)
const MAX_ITEM_ID_LENGTH: usize = 128;

/// NewType wrapper for catalog item identifiers with validation
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct ItemId(String);

impl ItemId {
    pub fn new(id: impl Into<String>) -> EngineResult<Self> {
        let id = id.into();
        let trimmed = id.trim();

        if trimmed.is_empty() {
            return Err(BoqError::Validation {
                message: "Item id cannot be empty".to_string(),
            });
        }

        if trimmed.len() > MAX_ITEM_ID_LENGTH {
            return Err(BoqError::Validation {
                message: format!(
                    "Item id is too long ({} bytes). Maximum allowed: {} bytes",
                    trimmed.len(),
                    MAX_ITEM_ID_LENGTH
                ),
            });
        }

        if trimmed.chars().any(char::is_control) {
            return Err(BoqError::Validation {
                message: format!("Item id '{}' contains control characters", trimmed.escape_debug()),
            });
        }

        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl TryFrom<String> for ItemId {
    type Error = BoqError;

    fn try_from(value: String) -> EngineResult<Self> {
        Self::new(value)
    }
}

impl From<ItemId> for String {
    fn from(id: ItemId) -> Self {
        id.0
    }
}

impl std::fmt::Display for ItemId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// One declared "requires" edge of a catalog item
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DependencyEdge {
    item_id: ItemId,
    quantity_per_unit: u64,
}

impl DependencyEdge {
    pub fn new(item_id: ItemId, quantity_per_unit: u64) -> EngineResult<Self> {
        if quantity_per_unit == 0 {
            return Err(BoqError::InvalidQuantity {
                item_id: item_id.to_string(),
                reason: "dependency quantity per unit must be greater than zero".to_string(),
            });
        }
        Ok(Self {
            item_id,
            quantity_per_unit,
        })
    }

    pub fn item_id(&self) -> &ItemId {
        &self.item_id
    }

    pub fn quantity_per_unit(&self) -> u64 {
        self.quantity_per_unit
    }
}

/// CatalogItem value object - an immutable, externally owned catalog record
#[derive(Debug, Clone, PartialEq)]
pub struct CatalogItem {
    id: ItemId,
    name: String,
    unit: String,
    unit_price: Decimal,
    dependencies: Vec<DependencyEdge>,
}

impl CatalogItem {
    pub fn new(id: ItemId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            unit: "pcs".to_string(),
            unit_price: Decimal::ZERO,
            dependencies: Vec::new(),
        }
    }

    pub fn with_unit(mut self, unit: impl Into<String>) -> Self {
        self.unit = unit.into();
        self
    }

    pub fn with_unit_price(mut self, unit_price: Decimal) -> Self {
        self.unit_price = unit_price;
        self
    }

    /// Appends a dependency edge; edge order is preserved for resolution
    pub fn with_dependency(mut self, edge: DependencyEdge) -> Self {
        self.dependencies.push(edge);
        self
    }

    pub fn id(&self) -> &ItemId {
        &self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn unit(&self) -> &str {
        &self.unit
    }

    pub fn unit_price(&self) -> Decimal {
        self.unit_price
    }

    pub fn dependencies(&self) -> &[DependencyEdge] {
        &self.dependencies
    }
}
