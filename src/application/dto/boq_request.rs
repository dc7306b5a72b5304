use crate::boq_engine::domain::ItemId;
use std::path::PathBuf;

/// Locations of the catalog snapshot and the working BOQ
#[derive(Debug, Clone)]
pub struct BoqRequest {
    /// Catalog file (JSON, YAML or TOML)
    pub catalog_path: PathBuf,
    /// BOQ file; created on first save
    pub boq_path: PathBuf,
}

impl BoqRequest {
    pub fn new(catalog_path: PathBuf, boq_path: PathBuf) -> Self {
        Self {
            catalog_path,
            boq_path,
        }
    }
}

/// One state transition of the BOQ
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoqEdit {
    Add { item_id: ItemId, quantity: u64 },
    SetQuantity { item_id: ItemId, quantity: u64 },
    Remove { item_id: ItemId },
}

impl BoqEdit {
    pub fn item_id(&self) -> &ItemId {
        match self {
            BoqEdit::Add { item_id, .. }
            | BoqEdit::SetQuantity { item_id, .. }
            | BoqEdit::Remove { item_id } => item_id,
        }
    }
}

/// EditRequest - apply one edit to the BOQ stored at `location.boq_path`
#[derive(Debug, Clone)]
pub struct EditRequest {
    pub location: BoqRequest,
    pub edit: BoqEdit,
}

impl EditRequest {
    pub fn new(location: BoqRequest, edit: BoqEdit) -> Self {
        Self { location, edit }
    }
}

/// ResolveRequest - expand one catalog item without touching any BOQ
#[derive(Debug, Clone)]
pub struct ResolveRequest {
    pub catalog_path: PathBuf,
    pub item_id: ItemId,
    pub quantity: u64,
}

impl ResolveRequest {
    pub fn new(catalog_path: PathBuf, item_id: ItemId, quantity: u64) -> Self {
        Self {
            catalog_path,
            item_id,
            quantity,
        }
    }
}
