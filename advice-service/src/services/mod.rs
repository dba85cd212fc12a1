pub mod advice;
pub mod prompt;
pub mod providers;

pub use advice::{AdviceClient, AdviceError};
