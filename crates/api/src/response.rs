//! Shared response envelope types for API handlers.
//!
//! All API responses use a `{ "data": ... }` envelope. Use [`DataResponse`]
//! instead of ad-hoc `serde_json::json!({ "data": ... })` to get
//! compile-time type safety and consistent serialization.

use serde::Serialize;

/// Standard `{ "data": T }` response envelope.
#[derive(Debug, Serialize)]
pub struct DataResponse<T: Serialize> {
    pub data: T,
}

/// Payload for a single vehicle: `{ "vehicle": {...} }`.
#[derive(Debug, Serialize)]
pub struct VehicleData<T: Serialize> {
    pub vehicle: T,
}

/// Payload for a vehicle list: `{ "vehicles": [...] }`.
#[derive(Debug, Serialize)]
pub struct VehicleList<T: Serialize> {
    pub vehicles: Vec<T>,
}
