use boq_builder::prelude::*;
use std::path::Path;
use std::sync::{Arc, Mutex};

/// Mock BoqStore keeping the list in memory
///
/// Clones share storage, so a test can hand one clone to a use case and
/// inspect the other afterwards.
#[derive(Default, Clone)]
pub struct MockBoqStore {
    pub list: Arc<Mutex<BoqList>>,
    pub saves: Arc<Mutex<usize>>,
}

impl MockBoqStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_list(list: BoqList) -> Self {
        let store = Self::new();
        *store.list.lock().unwrap() = list;
        store
    }

    pub fn current(&self) -> BoqList {
        self.list.lock().unwrap().clone()
    }

    pub fn save_count(&self) -> usize {
        *self.saves.lock().unwrap()
    }
}

impl BoqStore for MockBoqStore {
    fn load(&self, _path: &Path) -> Result<BoqList> {
        Ok(self.current())
    }

    fn save(&self, _path: &Path, list: &BoqList) -> Result<()> {
        *self.list.lock().unwrap() = list.clone();
        *self.saves.lock().unwrap() += 1;
        Ok(())
    }
}
