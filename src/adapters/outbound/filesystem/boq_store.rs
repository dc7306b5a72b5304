use crate::boq_engine::domain::{BoqLine, BoqList};
use crate::ports::outbound::BoqStore;
use crate::shared::security::{ensure_writable_target, read_guarded};
use crate::shared::{BoqError, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use tracing::debug;

const BOQ_FORMAT_VERSION: u32 = 1;

#[derive(Debug, Serialize, Deserialize)]
struct BoqDocument {
    version: u32,
    lines: Vec<BoqLine>,
}

/// FileSystemBoqStore adapter persisting a BOQ as pretty-printed JSON
pub struct FileSystemBoqStore;

impl FileSystemBoqStore {
    pub fn new() -> Self {
        Self
    }
}

impl Default for FileSystemBoqStore {
    fn default() -> Self {
        Self::new()
    }
}

impl BoqStore for FileSystemBoqStore {
    fn load(&self, path: &Path) -> Result<BoqList> {
        if !path.exists() {
            debug!(path = %path.display(), "no BOQ file yet, starting empty");
            return Ok(BoqList::new());
        }

        let content = read_guarded(path, "BOQ")?;
        let parse_error = |details: String| BoqError::BoqParseError {
            path: path.to_path_buf(),
            details,
        };

        let document: BoqDocument =
            serde_json::from_str(&content).map_err(|e| parse_error(e.to_string()))?;
        if document.version != BOQ_FORMAT_VERSION {
            return Err(parse_error(format!(
                "unsupported BOQ format version {} (expected {})",
                document.version, BOQ_FORMAT_VERSION
            ))
            .into());
        }

        let list = BoqList::from_lines(document.lines).map_err(|e| parse_error(e.to_string()))?;
        debug!(path = %path.display(), lines = list.len(), "loaded BOQ");
        Ok(list)
    }

    fn save(&self, path: &Path, list: &BoqList) -> Result<()> {
        ensure_writable_target(path)?;

        let document = BoqDocument {
            version: BOQ_FORMAT_VERSION,
            lines: list.lines().to_vec(),
        };
        let mut json = serde_json::to_string_pretty(&document)?;
        json.push('\n');

        fs::write(path, json).map_err(|e| BoqError::FileWriteError {
            path: path.to_path_buf(),
            details: e.to_string(),
        })?;

        debug!(path = %path.display(), lines = list.len(), "saved BOQ");
        Ok(())
    }
}
