/// BOQ engine - pure domain model and services
///
/// Nothing in this module performs I/O. Catalog data arrives through the
/// [`domain::CatalogIndex`] trait and every operation returns a new
/// [`domain::BoqList`].
pub mod domain;
pub mod services;
