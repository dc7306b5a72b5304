use crate::application::read_models::BoqReadModel;
use crate::shared::Result;

/// BoqFormatter port for rendering a BOQ
///
/// This port abstracts the formatting logic for different output formats
/// (Markdown, JSON, etc.).
pub trait BoqFormatter {
    /// Formats the BOQ read model
    ///
    /// # Errors
    /// Returns an error if formatting or serialization fails
    fn format(&self, model: &BoqReadModel) -> Result<String>;
}
