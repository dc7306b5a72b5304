/// Filesystem adapters for file I/O operations
mod boq_store;
mod catalog_reader;
mod file_writer;

pub use boq_store::FileSystemBoqStore;
pub use catalog_reader::FileSystemReader;
pub use file_writer::{FileSystemWriter, StdoutPresenter};
