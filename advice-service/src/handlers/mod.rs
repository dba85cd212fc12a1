//! HTTP handlers for the advice service.

pub mod advice;
pub mod health;
