//! Handlers for the `/vehicles` resource.

use axum::extract::rejection::{JsonRejection, PathRejection};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::Json;
use vms_core::types::DbId;
use vms_db::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};

use crate::error::AppResult;
use crate::response::{DataResponse, VehicleData, VehicleList};
use crate::state::AppState;

type VehicleResponse = Json<DataResponse<VehicleData<Vehicle>>>;

/// An `{id}` segment that is not an `i64` is a bad request, not a lookup.
type VehicleId = Result<Path<DbId>, PathRejection>;

fn vehicle_response(vehicle: Vehicle) -> VehicleResponse {
    Json(DataResponse {
        data: VehicleData { vehicle },
    })
}

/// POST /api/v1/vehicles
pub async fn create(
    State(state): State<AppState>,
    payload: Result<Json<CreateVehicle>, JsonRejection>,
) -> AppResult<(StatusCode, VehicleResponse)> {
    let Json(input) = payload?;
    let vehicle = state.vehicles.create(&input).await?;
    Ok((StatusCode::CREATED, vehicle_response(vehicle)))
}

/// GET /api/v1/vehicles
pub async fn list(
    State(state): State<AppState>,
) -> AppResult<Json<DataResponse<VehicleList<Vehicle>>>> {
    let vehicles = state.vehicles.list().await?;
    Ok(Json(DataResponse {
        data: VehicleList { vehicles },
    }))
}

/// GET /api/v1/vehicles/{id}
pub async fn get_by_id(
    State(state): State<AppState>,
    id: VehicleId,
) -> AppResult<VehicleResponse> {
    let Path(id) = id?;
    let vehicle = state.vehicles.get(id).await?;
    Ok(vehicle_response(vehicle))
}

/// PUT /api/v1/vehicles/{id}
pub async fn update(
    State(state): State<AppState>,
    id: VehicleId,
    payload: Result<Json<UpdateVehicle>, JsonRejection>,
) -> AppResult<VehicleResponse> {
    let Path(id) = id?;
    let Json(input) = payload?;
    let vehicle = state.vehicles.update(id, &input).await?;
    Ok(vehicle_response(vehicle))
}

/// DELETE /api/v1/vehicles/{id}
pub async fn delete(State(state): State<AppState>, id: VehicleId) -> AppResult<StatusCode> {
    let Path(id) = id?;
    state.vehicles.delete(id).await?;
    Ok(StatusCode::NO_CONTENT)
}
