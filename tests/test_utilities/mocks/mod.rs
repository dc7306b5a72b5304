/// Mock implementations for testing
mod mock_boq_store;
mod mock_catalog_reader;
mod mock_progress_reporter;

pub use mock_boq_store::MockBoqStore;
pub use mock_catalog_reader::MockCatalogReader;
pub use mock_progress_reporter::MockProgressReporter;
