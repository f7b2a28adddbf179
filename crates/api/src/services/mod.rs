//! Service facades composing validation and storage.
//!
//! Handlers call these instead of repositories so that every caller error is
//! rejected before a storage round-trip.

pub mod vehicle;

pub use vehicle::VehicleService;
