use super::report_warnings;
use crate::application::dto::{BoqEdit, EditRequest, EditResponse};
use crate::boq_engine::domain::{BoqList, Catalog, CatalogIndex};
use crate::boq_engine::services::{BoqMutator, DependencyResolver, Mutation};
use crate::ports::outbound::{BoqStore, CatalogReader, ProgressReporter};
use crate::shared::{BoqError, Result};

/// EditBoqUseCase - applies one add / set / remove to a stored BOQ
///
/// The BOQ is loaded, transformed by the engine and saved back only when the
/// transformation succeeded. A failed edit leaves the stored file untouched.
///
/// # Type Parameters
/// * `CR` - CatalogReader implementation
/// * `BS` - BoqStore implementation
/// * `PR` - ProgressReporter implementation
pub struct EditBoqUseCase<CR, BS, PR> {
    catalog_reader: CR,
    boq_store: BS,
    progress_reporter: PR,
    mutator: BoqMutator,
}

impl<CR, BS, PR> EditBoqUseCase<CR, BS, PR>
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
            mutator: BoqMutator::new(resolver),
        }
    }

    /// Executes the edit and persists the resulting list
    ///
    /// # Errors
    /// * Catalog or BOQ cannot be read
    /// * [`BoqError::UnknownCatalogItem`] when adding an id the catalog lacks
    /// * [`BoqError::NotFound`] when setting the quantity of an absent main line
    /// * [`BoqError::ResolutionOverflow`] when a quantity exceeds `u64`
    pub fn execute(&self, request: EditRequest) -> Result<EditResponse> {
        let location = &request.location;
        let catalog = self.catalog_reader.read_catalog(&location.catalog_path)?;
        let current = self.boq_store.load(&location.boq_path)?;

        let mutation = self.apply(&current, &request.edit, &catalog)?;
        report_warnings(&self.progress_reporter, &mutation.warnings);

        let changed = mutation.list != current;
        if changed {
            self.boq_store.save(&location.boq_path, &mutation.list)?;
            self.progress_reporter
                .report_completion(&Self::completion_message(&request.edit, &mutation.list));
        } else {
            self.progress_reporter
                .report(&format!("ℹ️  No change for '{}'", request.edit.item_id()));
        }

        Ok(EditResponse {
            list: mutation.list,
            warnings: mutation.warnings,
            changed,
        })
    }

    fn apply(&self, list: &BoqList, edit: &BoqEdit, catalog: &Catalog) -> Result<Mutation> {
        let mutation = match edit {
            BoqEdit::Add { item_id, quantity } => {
                let item = catalog
                    .lookup(item_id)
                    .ok_or_else(|| BoqError::UnknownCatalogItem {
                        item_id: item_id.to_string(),
                    })?;
                self.mutator.add_item(list, item, *quantity, catalog)?
            }
            BoqEdit::SetQuantity { item_id, quantity } => {
                self.mutator.set_quantity(list, item_id, *quantity, catalog)?
            }
            BoqEdit::Remove { item_id } => Mutation {
                list: BoqMutator::remove_item(list, item_id),
                warnings: Vec::new(),
            },
        };
        Ok(mutation)
    }

    fn completion_message(edit: &BoqEdit, list: &BoqList) -> String {
        let action = match edit {
            BoqEdit::Add { item_id, quantity } => format!("Added {} x '{}'", quantity, item_id),
            BoqEdit::SetQuantity { item_id, quantity } if *quantity == 0 => {
                format!("Removed '{}'", item_id)
            }
            BoqEdit::SetQuantity { item_id, quantity } => {
                format!("Set '{}' to {}", item_id, quantity)
            }
            BoqEdit::Remove { item_id } => format!("Removed '{}'", item_id),
        };
        format!("{} ({} line(s) in BOQ)", action, list.len())
    }
}
