use std::fmt;
use std::path::PathBuf;
use thiserror::Error;

/// Exit codes for the `boq` command line.
///
/// These codes let scripts tell a failed consistency check apart from
/// a usage mistake or an I/O failure.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(i32)]
pub enum ExitCode {
    /// Success - command completed, BOQ consistent
    Success = 0,
    /// Validation found hard errors (or warnings in strict mode)
    ValidationFailed = 1,
    /// Invalid command-line arguments (clap parsing errors)
    InvalidArguments = 2,
    /// Application error (missing item, unreadable catalog, overflow, file I/O error, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to i32 for use with std::process::exit
    pub fn as_i32(self) -> i32 {
        self as i32
    }
}

impl fmt::Display for ExitCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ExitCode::Success => write!(f, "Success (0)"),
            ExitCode::ValidationFailed => write!(f, "Validation Failed (1)"),
            ExitCode::InvalidArguments => write!(f, "Invalid Arguments (2)"),
            ExitCode::ApplicationError => write!(f, "Application Error (3)"),
        }
    }
}

/// Errors raised while building or persisting a Bill of Quantities.
///
/// The first group is produced by the pure engine (resolver and mutator) and is
/// returned through [`EngineResult`]. The second group comes from the
/// filesystem adapters and always carries the offending path.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BoqError {
    #[error("No main line for item '{item_id}' in the BOQ\n\n💡 Hint: Add the item first with `boq add {item_id}`")]
    NotFound { item_id: String },

    #[error("Quantity overflow for '{item_id}' ({context})\n\n💡 Hint: Check the catalog for runaway per-unit quantities")]
    ResolutionOverflow { item_id: String, context: String },

    #[error("Item '{item_id}' is not in the catalog\n\n💡 Hint: Check the item id against the catalog file")]
    UnknownCatalogItem { item_id: String },

    #[error("Invalid quantity for '{item_id}': {reason}")]
    InvalidQuantity { item_id: String, reason: String },

    #[error("Invalid catalog: {reason}")]
    InvalidCatalog { reason: String },

    #[error("Catalog file not found: {path}\n\n💡 Hint: Pass --catalog or set `catalog:` in boq.config.yml")]
    CatalogNotFound { path: PathBuf },

    #[error("Failed to parse catalog file: {path}\nDetails: {details}\n\n💡 Hint: Supported formats are JSON, YAML (.yml/.yaml) and TOML")]
    CatalogParseError { path: PathBuf, details: String },

    #[error("Failed to parse BOQ file: {path}\nDetails: {details}\n\n💡 Hint: The BOQ file is written by `boq`; restore it from a backup or delete it to start over")]
    BoqParseError { path: PathBuf, details: String },

    #[error("Failed to read file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the file exists and you have read permissions")]
    FileReadError { path: PathBuf, details: String },

    #[error("Failed to write to file: {path}\nDetails: {details}\n\n💡 Hint: Please verify that the directory exists and you have write permissions")]
    FileWriteError { path: PathBuf, details: String },

    /// Validation error for value objects and builders
    #[error("Validation error: {message}")]
    Validation { message: String },
}

/// Result type returned by the pure engine services.
pub type EngineResult<T> = std::result::Result<T, BoqError>;
