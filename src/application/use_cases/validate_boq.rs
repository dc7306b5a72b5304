use crate::application::dto::{BoqRequest, ValidateResponse};
use crate::boq_engine::services::{BoqValidator, DependencyResolver};
use crate::ports::outbound::{BoqStore, CatalogReader, ProgressReporter};
use crate::shared::Result;
use tracing::info;

/// ValidateBoqUseCase - checks a stored BOQ against a fresh expansion
///
/// The report is returned as data. Deciding the exit status is left to the caller
/// through [`ValidateResponse::passed`].
pub struct ValidateBoqUseCase<CR, BS, PR> {
    catalog_reader: CR,
    boq_store: BS,
    progress_reporter: PR,
    validator: BoqValidator,
}

impl<CR, BS, PR> ValidateBoqUseCase<CR, BS, PR>
where
    CR: CatalogReader,
    BS: BoqStore,
    PR: ProgressReporter,
{
    pub fn new(
        catalog_reader: CR,
        boq_store: BS,
        progress_reporter: PR,
        resolver: DependencyResolver,
    ) -> Self {
        Self {
            catalog_reader,
            boq_store,
            progress_reporter,
            validator: BoqValidator::new(resolver),
        }
    }

    /// Validates the BOQ; with `strict`, warnings also fail the check
    pub fn execute(&self, request: &BoqRequest, strict: bool) -> Result<ValidateResponse> {
        let catalog = self.catalog_reader.read_catalog(&request.catalog_path)?;
        let list = self.boq_store.load(&request.boq_path)?;

        self.progress_reporter.report(&format!(
            "🔍 Validating {} line(s) against {} catalog item(s)",
            list.len(),
            catalog.len()
        ));

        let report = self.validator.validate(&list, &catalog);
        info!(
            errors = report.errors.len(),
            warnings = report.warnings.len(),
            strict,
            "validation finished"
        );

        let response = ValidateResponse::new(report, strict);
        if response.passed {
            self.progress_reporter
                .report_completion("BOQ is consistent with the catalog");
        }
        Ok(response)
    }
}
