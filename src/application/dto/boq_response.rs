use crate::application::read_models::BoqReadModel;
use crate::boq_engine::domain::{BoqList, ResolutionWarning};
use crate::boq_engine::services::ValidationReport;

/// EditResponse - the list that was stored, plus the warnings raised while building it
#[derive(Debug, Clone)]
pub struct EditResponse {
    pub list: BoqList,
    pub warnings: Vec<ResolutionWarning>,
    /// False when the edit left the BOQ unchanged (e.g. removing an absent item)
    pub changed: bool,
}

/// ResolveResponse - rendered expansion of a single catalog item
#[derive(Debug, Clone)]
pub struct ResolveResponse {
    pub model: BoqReadModel,
    pub warnings: Vec<ResolutionWarning>,
}

/// ValidateResponse - consistency report for a stored BOQ
#[derive(Debug, Clone)]
pub struct ValidateResponse {
    pub report: ValidationReport,
    /// Whether the check passes under the requested strictness
    pub passed: bool,
}

impl ValidateResponse {
    pub fn new(report: ValidationReport, strict: bool) -> Self {
        let passed = report.is_valid() && (!strict || report.warnings.is_empty());
        Self { report, passed }
    }
}
