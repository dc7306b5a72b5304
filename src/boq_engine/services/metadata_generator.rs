use crate::boq_engine::domain::BoqMetadata;
use chrono::Utc;
use uuid::Uuid;

/// MetadataGenerator service stamping rendered BOQ documents
pub struct MetadataGenerator;

impl MetadataGenerator {
    /// Generates metadata with the current timestamp and a fresh document id
    pub fn generate_metadata(tool_name: &str, tool_version: &str) -> BoqMetadata {
        let generated_at = Utc::now().to_rfc3339();
        let document_id = format!("urn:uuid:{}", Uuid::new_v4());

        BoqMetadata::new(
            generated_at,
            tool_name.to_string(),
            tool_version.to_string(),
            document_id,
        )
    }

    /// Generates metadata naming this tool, with the compile-time crate version
    pub fn generate_default_metadata() -> BoqMetadata {
        Self::generate_metadata("boq", env!("CARGO_PKG_VERSION"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_generate_metadata() {
        let metadata = MetadataGenerator::generate_metadata("test-tool", "1.0.0");

        assert_eq!(metadata.tool_name(), "test-tool");
        assert_eq!(metadata.tool_version(), "1.0.0");
        assert!(metadata.document_id().starts_with("urn:uuid:"));
        assert!(!metadata.generated_at().is_empty());
    }

    #[test]
    fn test_generate_default_metadata() {
        let metadata = MetadataGenerator::generate_default_metadata();

        assert_eq!(metadata.tool_name(), "boq");
        assert_eq!(metadata.tool_version(), env!("CARGO_PKG_VERSION"));
    }

    #[test]
    fn test_document_ids_are_unique() {
        let first = MetadataGenerator::generate_default_metadata();
        let second = MetadataGenerator::generate_default_metadata();
        assert_ne!(first.document_id(), second.document_id());
    }
}
