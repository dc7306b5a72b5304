mod boq_mutator;
mod boq_presenter;
mod boq_validator;
mod dependency_resolver;
mod metadata_generator;

pub use boq_mutator::{BoqMutator, Mutation};
pub use boq_presenter::{BoqPresenter, PresentedLine};
pub use boq_validator::{BoqValidator, FindingKind, ValidationFinding, ValidationReport};
pub use dependency_resolver::{DependencyResolver, Resolution};
pub use metadata_generator::MetadataGenerator;
