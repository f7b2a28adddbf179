//! Repository layer.
//!
//! Each repository owns a clone of the connection pool and implements the
//! store trait the service layer depends on.

pub mod vehicle_repo;

pub use vehicle_repo::{VehicleRepo, VehicleStore};
