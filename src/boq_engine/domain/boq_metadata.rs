/// BoqMetadata value object stamped on every rendered BOQ document
#[derive(Debug, Clone)]
pub struct BoqMetadata {
    generated_at: String,
    tool_name: String,
    tool_version: String,
    document_id: String,
}

impl BoqMetadata {
    pub fn new(
        generated_at: String,
        tool_name: String,
        tool_version: String,
        document_id: String,
    ) -> Self {
        Self {
            generated_at,
            tool_name,
            tool_version,
            document_id,
        }
    }

    pub fn generated_at(&self) -> &str {
        &self.generated_at
    }

    pub fn tool_name(&self) -> &str {
        &self.tool_name
    }

    pub fn tool_version(&self) -> &str {
        &self.tool_version
    }

    pub fn document_id(&self) -> &str {
        &self.document_id
    }
}
