/// Data Transfer Objects for application layer
///
/// DTOs are used to transfer data between the application layer
/// and adapters, keeping the domain layer isolated.
mod boq_request;
mod boq_response;
mod output_format;

pub use boq_request::{BoqEdit, BoqRequest, EditRequest, ResolveRequest};
pub use boq_response::{EditResponse, ResolveResponse, ValidateResponse};
pub use output_format::OutputFormat;
