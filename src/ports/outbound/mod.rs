/// Outbound ports (Driven ports) - Infrastructure interfaces
///
/// These ports define the interfaces that the application core uses
/// to interact with external systems (catalog source, BOQ storage, console, etc.).
pub mod boq_store;
pub mod catalog_reader;
pub mod formatter;
pub mod output_presenter;
pub mod progress_reporter;

pub use boq_store::BoqStore;
pub use catalog_reader::CatalogReader;
pub use formatter::BoqFormatter;
pub use output_presenter::OutputPresenter;
pub use progress_reporter::ProgressReporter;
