//! Domain types, errors and validation shared by the vehicle service crates.
//!
//! Nothing in this crate touches the database or the network.

pub mod error;
pub mod types;
pub mod validation;
