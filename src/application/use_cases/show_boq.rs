use crate::application::dto::BoqRequest;
use crate::application::read_models::{BoqReadModel, BoqReadModelBuilder};
use crate::boq_engine::services::{BoqPresenter, MetadataGenerator};
use crate::ports::outbound::{BoqStore, CatalogReader, ProgressReporter};
use crate::shared::Result;

/// ShowBoqUseCase - builds the display model of a stored BOQ
///
/// Read-only: nothing is validated or repaired. Stale lines are flagged in
/// the read model so the formatters can point them out.
pub struct ShowBoqUseCase<CR, BS, PR> {
    catalog_reader: CR,
    boq_store: BS,
    progress_reporter: PR,
}

impl<CR, BS, PR> ShowBoqUseCase<CR, BS, PR>
where
    CR: CatalogReader,
    BS: BoqStore,
    PR: ProgressReporter,
{
    pub fn new(catalog_reader: CR, boq_store: BS, progress_reporter: PR) -> Self {
        Self {
            catalog_reader,
            boq_store,
            progress_reporter,
        }
    }

    pub fn execute(&self, request: &BoqRequest) -> Result<BoqReadModel> {
        self.progress_reporter.report(&format!(
            "📖 Loading BOQ from: {}",
            request.boq_path.display()
        ));
        let catalog = self.catalog_reader.read_catalog(&request.catalog_path)?;
        let list = self.boq_store.load(&request.boq_path)?;

        let presented = BoqPresenter::present(&list);
        let metadata = MetadataGenerator::generate_default_metadata();
        let model = BoqReadModelBuilder::build(&presented, &catalog, &metadata);

        let stale = model.stale_rows().count();
        if stale > 0 {
            self.progress_reporter.report_warning(&format!(
                "{} line(s) reference items missing from the catalog",
                stale
            ));
        }
        self.progress_reporter.report(&format!(
            "✅ {} main item(s), {} dependency line(s)",
            model.main_count(),
            model.dependency_count()
        ));

        Ok(model)
    }
}
