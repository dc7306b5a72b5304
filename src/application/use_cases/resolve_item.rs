use super::report_warnings;
use crate::application::dto::{ResolveRequest, ResolveResponse};
use crate::application::read_models::BoqReadModelBuilder;
use crate::boq_engine::domain::{BoqList, CatalogIndex};
use crate::boq_engine::services::{BoqMutator, BoqPresenter, DependencyResolver, MetadataGenerator};
use crate::ports::outbound::{CatalogReader, ProgressReporter};
use crate::shared::{BoqError, Result};

/// ResolveItemUseCase - previews the expansion of one catalog item
///
/// Runs the same add transition as an edit, on an empty BOQ, and renders it.
/// No BOQ is read or written.
pub struct ResolveItemUseCase<CR, PR> {
    catalog_reader: CR,
    progress_reporter: PR,
    mutator: BoqMutator,
}

impl<CR, PR> ResolveItemUseCase<CR, PR>
where
    CR: CatalogReader,
    PR: ProgressReporter,
{
    pub fn new(catalog_reader: CR, progress_reporter: PR, resolver: DependencyResolver) -> Self {
        Self {
            catalog_reader,
            progress_reporter,
            mutator: BoqMutator::new(resolver),
        }
    }

    pub fn execute(&self, request: ResolveRequest) -> Result<ResolveResponse> {
        let catalog = self.catalog_reader.read_catalog(&request.catalog_path)?;
        let item = catalog
            .lookup(&request.item_id)
            .ok_or_else(|| BoqError::UnknownCatalogItem {
                item_id: request.item_id.to_string(),
            })?;

        let mutation = self
            .mutator
            .add_item(&BoqList::new(), item, request.quantity, &catalog)?;
        report_warnings(&self.progress_reporter, &mutation.warnings);

        let presented = BoqPresenter::present(&mutation.list);
        let metadata = MetadataGenerator::generate_default_metadata();
        let model = BoqReadModelBuilder::build(&presented, &catalog, &metadata);

        self.progress_reporter.report(&format!(
            "✅ '{}' expands to {} dependency line(s)",
            request.item_id,
            model.dependency_count()
        ));

        Ok(ResolveResponse {
            model,
            warnings: mutation.warnings,
        })
    }
}
