//! Input validation.
//!
//! Provides the validation error type, id checks, and a composable check
//! pipeline. Everything here is pure logic with no database access.

pub mod pipeline;
pub mod rules;

pub use pipeline::Pipeline;
pub use rules::{validate_id, ValidationError};
