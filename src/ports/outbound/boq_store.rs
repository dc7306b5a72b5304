use crate::boq_engine::domain::BoqList;
use crate::shared::Result;
use std::path::Path;

/// BoqStore port for persisting the working Bill of Quantities
///
/// The engine has no persistence of its own; this port loads the list before
/// a mutation and stores whatever list the mutation produced.
pub trait BoqStore {
    /// Loads the BOQ at `path`. A missing file is an empty BOQ.
    fn load(&self, path: &Path) -> Result<BoqList>;

    /// Stores `list` at `path`, replacing any previous content
    fn save(&self, path: &Path, list: &BoqList) -> Result<()>;
}
