//! Read models for CQRS-lite pattern
//!
//! This module contains view-optimized structs that provide
//! a denormalized representation of domain data for queries.

pub mod boq_read_model;
pub mod boq_read_model_builder;

pub use boq_read_model::{BoqMetadataView, BoqReadModel, BoqRowView};
pub use boq_read_model_builder::BoqReadModelBuilder;
