//! Domain models for the advice service.

pub mod advice;
pub mod profile;

pub use advice::{GroundingSource, HealthResponse};
pub use profile::{Language, UserProfile};
