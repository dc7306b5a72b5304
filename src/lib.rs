//! boq-builder - Bill of Quantities dependency resolution engine
//!
//! Expands catalog items into quantity-scaled dependency lines, keeps a
//! working BOQ consistent through add / set / remove, and checks a stored
//! BOQ against the current catalog. Organized along hexagonal architecture lines.
//!
//! # Architecture
//!
//! - **Engine** (`boq_engine`): domain model and pure services (resolver, mutator, presenter, validator)
//! - **Application Layer** (`application`): use cases, DTOs and read models
//! - **Ports** (`ports`): interface definitions for infrastructure
//! - **Adapters** (`adapters`): filesystem, console and formatter implementations
//! - **Shared** (`shared`): error types, result aliases and file guards
//!
//! # Example
//!
//! ```
//! use boq_builder::prelude::*;
//!
//! # fn main() -> std::result::Result<(), BoqError> {
//! let id = |s: &str| ItemId::new(s);
//! let catalog = Catalog::from_items(vec![
//!     CatalogItem::new(id("camera")?, "IP Camera")
//!         .with_dependency(DependencyEdge::new(id("bracket")?, 1)?),
//!     CatalogItem::new(id("bracket")?, "Wall Bracket"),
//! ])?;
//!
//! let mutator = BoqMutator::default();
//! let camera = catalog.lookup(&id("camera")?).expect("camera is in the catalog");
//! let mutation = mutator.add_item(&BoqList::new(), camera, 3, &catalog)?;
//!
//! assert_eq!(mutation.list.len(), 2);
//! assert_eq!(mutation.list.lines()[1].quantity(), 3);
//! assert!(BoqValidator::default().validate(&mutation.list, &catalog).is_valid());
//! # Ok(())
//! # }
//! ```

pub mod adapters;
pub mod application;
pub mod boq_engine;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::console::StderrProgressReporter;
    pub use crate::adapters::outbound::filesystem::{
        FileSystemBoqStore, FileSystemReader, FileSystemWriter, StdoutPresenter,
    };
    pub use crate::adapters::outbound::formatters::{JsonFormatter, MarkdownFormatter};
    pub use crate::application::dto::{
        BoqEdit, BoqRequest, EditRequest, EditResponse, OutputFormat, ResolveRequest,
        ResolveResponse, ValidateResponse,
    };
    pub use crate::application::use_cases::{
        EditBoqUseCase, ResolveItemUseCase, ShowBoqUseCase, ValidateBoqUseCase,
    };
    pub use crate::boq_engine::domain::{
        BoqLine, BoqList, Catalog, CatalogIndex, CatalogItem, DependencyEdge, ItemId,
        LineOrigin, ResolutionWarning,
    };
    pub use crate::boq_engine::services::{
        BoqMutator, BoqPresenter, BoqValidator, DependencyResolver, Mutation, ValidationReport,
    };
    pub use crate::ports::outbound::{
        BoqFormatter, BoqStore, CatalogReader, OutputPresenter, ProgressReporter,
    };
    pub use crate::shared::{BoqError, Result};
}
