//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the matching service in [`crate::services`] and map
//! errors via [`crate::error::AppError`].

pub mod vehicle;
