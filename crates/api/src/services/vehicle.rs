//! Vehicle service: validation first, then a single pass through storage.

use std::sync::Arc;

use vms_core::error::CoreError;
use vms_core::types::DbId;
use vms_core::validation::{validate_id, ValidationError};
use vms_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use vms_db::repositories::VehicleStore;

/// Entry point for every vehicle operation exposed over HTTP.
///
/// Returns [`CoreError::Validation`] for bad input without calling the
/// store. Store errors (`NotFound`, `Storage`) pass through unchanged.
#[derive(Clone)]
pub struct VehicleService {
    store: Arc<dyn VehicleStore>,
}

impl VehicleService {
    pub fn new(store: Arc<dyn VehicleStore>) -> Self {
        Self { store }
    }

    pub async fn get(&self, id: DbId) -> Result<Vehicle, CoreError> {
        let id = accepted(validate_id(id))?;
        tracing::debug!(vehicle_id = id, "Fetching vehicle");
        self.store.get_by_id(id).await
    }

    pub async fn list(&self) -> Result<Vec<Vehicle>, CoreError> {
        let vehicles = self.store.get_all().await?;
        tracing::debug!(count = vehicles.len(), "Listed vehicles");
        Ok(vehicles)
    }

    pub async fn create(&self, input: &CreateVehicle) -> Result<Vehicle, CoreError> {
        accepted(input.validate())?;
        let vehicle = self.store.insert(input).await?;
        tracing::info!(vehicle_id = vehicle.id, "Vehicle created");
        Ok(vehicle)
    }

    pub async fn update(&self, id: DbId, input: &UpdateVehicle) -> Result<Vehicle, CoreError> {
        let id = accepted(validate_id(id))?;
        accepted(input.validate())?;
        let vehicle = self.store.update(id, input).await?;
        tracing::debug!(vehicle_id = id, "Vehicle updated");
        Ok(vehicle)
    }

    pub async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let id = accepted(validate_id(id))?;
        self.store.delete(id).await?;
        tracing::info!(vehicle_id = id, "Vehicle deleted");
        Ok(())
    }
}

/// Log a rejected input with the offending field before it leaves the service.
fn accepted<T>(checked: Result<T, ValidationError>) -> Result<T, CoreError> {
    checked.map_err(|err| {
        tracing::debug!(field = err.field(), error = %err, "Rejected vehicle input");
        CoreError::Validation(err)
    })
}
