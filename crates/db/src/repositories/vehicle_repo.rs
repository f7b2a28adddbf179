//! Repository for the `vehicles` table.
//!
//! Every query is scoped by `deleted_at IS NULL`, so soft-deleted rows are
//! invisible to reads, updates and repeated deletes.

use async_trait::async_trait;
use sqlx::{Executor, Postgres};
use vms_core::error::CoreError;
use vms_core::types::DbId;

use crate::models::vehicle::{CreateVehicle, UpdateVehicle, Vehicle};
use crate::DbPool;

/// Column list shared across queries to avoid repetition.
const COLUMNS: &str =
    "id, model, color, number_plate, name, launched, created_at, updated_at, deleted_at";

const ENTITY: &str = "Vehicle";

/// Persistence operations the service layer needs.
#[async_trait]
pub trait VehicleStore: Send + Sync {
    /// Fetch one live vehicle. No row is [`CoreError::NotFound`].
    async fn get_by_id(&self, id: DbId) -> Result<Vehicle, CoreError>;

    /// Fetch every live vehicle ordered by id.
    async fn get_all(&self) -> Result<Vec<Vehicle>, CoreError>;

    /// Insert a vehicle and return the row as stored.
    async fn insert(&self, input: &CreateVehicle) -> Result<Vehicle, CoreError>;

    /// Apply the present fields of `input` and return the row as stored.
    async fn update(&self, id: DbId, input: &UpdateVehicle) -> Result<Vehicle, CoreError>;

    /// Mark a live vehicle deleted.
    async fn delete(&self, id: DbId) -> Result<(), CoreError>;
}

/// PostgreSQL-backed [`VehicleStore`].
#[derive(Debug, Clone)]
pub struct VehicleRepo {
    pool: DbPool,
}

impl VehicleRepo {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &DbPool {
        &self.pool
    }
}

/// Map a driver error to [`CoreError::Storage`], logging it once here.
fn storage(operation: &'static str) -> impl FnOnce(sqlx::Error) -> CoreError {
    move |err| {
        tracing::error!(operation, error = %err, "Vehicle storage failure");
        CoreError::storage(err)
    }
}

fn not_found(id: DbId) -> CoreError {
    CoreError::NotFound { entity: ENTITY, id }
}

/// Single live-row fetch usable on the pool or inside a transaction.
/// `operation` labels driver failures in the log.
async fn fetch_live<'e, E>(
    executor: E,
    id: DbId,
    operation: &'static str,
) -> Result<Vehicle, CoreError>
where
    E: Executor<'e, Database = Postgres>,
{
    let query = format!("SELECT {COLUMNS} FROM vehicles WHERE id = $1 AND deleted_at IS NULL");
    sqlx::query_as::<_, Vehicle>(&query)
        .bind(id)
        .fetch_optional(executor)
        .await
        .map_err(storage(operation))?
        .ok_or_else(|| not_found(id))
}

#[async_trait]
impl VehicleStore for VehicleRepo {
    async fn get_by_id(&self, id: DbId) -> Result<Vehicle, CoreError> {
        fetch_live(&self.pool, id, "get_by_id").await
    }

    async fn get_all(&self) -> Result<Vec<Vehicle>, CoreError> {
        let query = format!(
            "SELECT {COLUMNS} FROM vehicles
             WHERE deleted_at IS NULL
             ORDER BY id ASC"
        );
        sqlx::query_as::<_, Vehicle>(&query)
            .fetch_all(&self.pool)
            .await
            .map_err(storage("get_all"))
    }

    /// The insert and the re-read share one transaction, so the returned row
    /// is exactly what the insert produced.
    async fn insert(&self, input: &CreateVehicle) -> Result<Vehicle, CoreError> {
        let mut tx = self.pool.begin().await.map_err(storage("insert"))?;

        let id: DbId = sqlx::query_scalar(
            "INSERT INTO vehicles (model, color, number_plate, name, launched)
             VALUES ($1, $2, $3, $4, $5)
             RETURNING id",
        )
        .bind(&input.model)
        .bind(&input.color)
        .bind(&input.number_plate)
        .bind(&input.name)
        .bind(input.launched)
        .fetch_one(&mut *tx)
        .await
        .map_err(storage("insert"))?;

        let vehicle = fetch_live(&mut *tx, id, "insert").await?;
        tx.commit().await.map_err(storage("insert"))?;
        Ok(vehicle)
    }

    /// Returns a validation error without touching the database when
    /// `input` has no present field.
    async fn update(&self, id: DbId, input: &UpdateVehicle) -> Result<Vehicle, CoreError> {
        let set = input.set_clause()?;
        let updated_at = set.next_placeholder();
        let query = format!(
            "UPDATE vehicles SET {}, updated_at = ${updated_at}
             WHERE id = ${} AND deleted_at IS NULL",
            set.clause,
            updated_at + 1,
        );

        let mut tx = self.pool.begin().await.map_err(storage("update"))?;

        let result = set
            .bind(sqlx::query(&query))
            .bind(chrono::Utc::now())
            .bind(id)
            .execute(&mut *tx)
            .await
            .map_err(storage("update"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }

        let vehicle = fetch_live(&mut *tx, id, "update").await?;
        tx.commit().await.map_err(storage("update"))?;
        Ok(vehicle)
    }

    async fn delete(&self, id: DbId) -> Result<(), CoreError> {
        let result = sqlx::query(
            "UPDATE vehicles SET deleted_at = $1 WHERE id = $2 AND deleted_at IS NULL",
        )
        .bind(chrono::Utc::now())
        .bind(id)
        .execute(&self.pool)
        .await
        .map_err(storage("delete"))?;

        if result.rows_affected() == 0 {
            return Err(not_found(id));
        }
        Ok(())
    }
}
