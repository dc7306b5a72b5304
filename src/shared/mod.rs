/// Shared kernel - error types, result aliases and file guards used across layers
pub mod error;
pub mod result;
pub mod security;

pub use error::{BoqError, EngineResult, ExitCode};
pub use result::Result;
