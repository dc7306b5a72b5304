mod boq_line;
mod boq_list;
mod boq_metadata;
mod catalog;
mod catalog_item;
mod resolution_warning;

pub use boq_line::{BoqLine, LineOrigin};
pub use boq_list::BoqList;
pub use boq_metadata::BoqMetadata;
pub use catalog::{Catalog, CatalogIndex};
pub use catalog_item::{CatalogItem, DependencyEdge, ItemId};
pub use resolution_warning::ResolutionWarning;
