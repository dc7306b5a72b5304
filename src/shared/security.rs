use crate::shared::error::BoqError;
use std::fs;
use std::path::Path;

/// Maximum size of a catalog or BOQ file (100 MB)
pub const MAX_FILE_SIZE: u64 = 100 * 1024 * 1024;

/// Reads a user-supplied file after guarding against symlinks, non-regular
/// files and oversized input.
///
/// # Arguments
/// * `path` - The file to read
/// * `description` - Human readable file role ("catalog", "BOQ") for messages
///
/// # Errors
/// Returns [`BoqError::FileReadError`] when any guard fails or the read itself fails.
pub fn read_guarded(path: &Path, description: &str) -> Result<String, BoqError> {
    let fail = |details: String| BoqError::FileReadError {
        path: path.to_path_buf(),
        details,
    };

    let metadata = fs::symlink_metadata(path)
        .map_err(|e| fail(format!("Failed to read {} metadata: {}", description, e)))?;

    if metadata.is_symlink() {
        return Err(fail(format!(
            "Security: {} file is a symbolic link. For security reasons, symbolic links are not allowed.",
            description
        )));
    }

    if !metadata.is_file() {
        return Err(fail(format!("{} path is not a regular file", description)));
    }

    if metadata.len() > MAX_FILE_SIZE {
        return Err(fail(format!(
            "Security: {} file is too large ({} bytes). Maximum allowed size is {} bytes.",
            description,
            metadata.len(),
            MAX_FILE_SIZE
        )));
    }

    fs::read_to_string(path).map_err(|e| fail(format!("Failed to read {}: {}", description, e)))
}

/// Rejects writing through a symbolic link at `path`, if anything exists there.
pub fn ensure_writable_target(path: &Path) -> Result<(), BoqError> {
    let Ok(metadata) = fs::symlink_metadata(path) else {
        return Ok(());
    };

    if metadata.is_symlink() {
        return Err(BoqError::FileWriteError {
            path: path.to_path_buf(),
            details: "Security: Output path is a symbolic link. For security reasons, writing to symbolic links is not allowed.".to_string(),
        });
    }

    if metadata.is_dir() {
        return Err(BoqError::FileWriteError {
            path: path.to_path_buf(),
            details: "Output path is a directory".to_string(),
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;
    use tempfile::TempDir;

    #[test]
    fn test_read_guarded_regular_file() {
        let temp_dir = TempDir::new().unwrap();
        let file_path = temp_dir.path().join("catalog.json");
        fs::write(&file_path, "{}").unwrap();

        let content = read_guarded(&file_path, "catalog").unwrap();
        assert_eq!(content, "{}");
    }

    #[test]
    fn test_read_guarded_nonexistent() {
        let path = PathBuf::from("/nonexistent/catalog.json");
        let result = read_guarded(&path, "catalog");
        assert!(matches!(result, Err(BoqError::FileReadError { .. })));
    }

    #[test]
    fn test_read_guarded_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = read_guarded(temp_dir.path(), "catalog");
        assert!(result
            .unwrap_err()
            .to_string()
            .contains("not a regular file"));
    }

    #[cfg(unix)]
    #[test]
    fn test_read_guarded_rejects_symlink() {
        let temp_dir = TempDir::new().unwrap();
        let target = temp_dir.path().join("real.json");
        let link = temp_dir.path().join("link.json");
        fs::write(&target, "{}").unwrap();
        std::os::unix::fs::symlink(&target, &link).unwrap();

        let result = read_guarded(&link, "catalog");
        assert!(result.unwrap_err().to_string().contains("symbolic link"));
    }

    #[test]
    fn test_ensure_writable_target_missing_file_is_ok() {
        let temp_dir = TempDir::new().unwrap();
        assert!(ensure_writable_target(&temp_dir.path().join("new.json")).is_ok());
    }

    #[test]
    fn test_ensure_writable_target_directory() {
        let temp_dir = TempDir::new().unwrap();
        let result = ensure_writable_target(temp_dir.path());
        assert!(matches!(result, Err(BoqError::FileWriteError { .. })));
    }
}
