use std::sync::Arc;

use crate::config::ServerConfig;
use crate::services::VehicleService;

/// Shared application state available to all Axum handlers via `State<AppState>`.
///
/// This is cheaply cloneable (inner data is behind `Arc` or is already `Clone`).
#[derive(Clone)]
pub struct AppState {
    /// Database connection pool, used by the health check.
    pub pool: vms_db::DbPool,
    /// Server configuration.
    pub config: Arc<ServerConfig>,
    /// Vehicle service facade.
    pub vehicles: VehicleService,
}

impl AppState {
    /// Wire the PostgreSQL-backed vehicle store onto `pool`.
    pub fn new(pool: vms_db::DbPool, config: ServerConfig) -> Self {
        let store = Arc::new(vms_db::repositories::VehicleRepo::new(pool.clone()));
        Self {
            pool,
            config: Arc::new(config),
            vehicles: VehicleService::new(store),
        }
    }
}
