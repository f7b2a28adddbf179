//! Vehicle entity model, DTOs and their validation chains.

use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use vms_core::types::{DbId, Timestamp};
use vms_core::validation::{Pipeline, ValidationError};

use crate::set_clause::{SetClause, SetClauseBuilder};

/// A row from the `vehicles` table.
#[derive(Debug, Clone, PartialEq, FromRow, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Vehicle {
    pub id: DbId,
    pub model: String,
    pub color: String,
    pub number_plate: String,
    pub name: String,
    pub launched: Option<bool>,
    pub created_at: Timestamp,
    pub updated_at: Timestamp,
    /// Always `None` for rows returned by the repository.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub deleted_at: Option<Timestamp>,
}

/// DTO for creating a vehicle.
///
/// Missing string fields deserialize as empty and are rejected by
/// [`CreateVehicle::validate`].
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateVehicle {
    #[serde(default)]
    pub model: String,
    #[serde(default)]
    pub color: String,
    #[serde(default)]
    pub number_plate: String,
    #[serde(default)]
    pub name: String,
    pub launched: Option<bool>,
}

/// DTO for a partial update. `None` means "leave the column alone".
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateVehicle {
    pub model: Option<String>,
    pub color: Option<String>,
    pub number_plate: Option<String>,
    pub name: Option<String>,
    pub launched: Option<bool>,
}

impl CreateVehicle {
    /// Checks `model`, `color`, `number_plate`, `name` in that order.
    pub fn rules() -> Pipeline<Self> {
        Pipeline::<Self>::new()
            .require_non_empty("model", |v| v.model.as_str())
            .require_non_empty("color", |v| v.color.as_str())
            .require_non_empty("numberPlate", |v| v.number_plate.as_str())
            .require_non_empty("name", |v| v.name.as_str())
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::rules().run(self)
    }
}

impl UpdateVehicle {
    /// Present string fields must be non-empty and at least one field must
    /// be present.
    pub fn rules() -> Pipeline<Self> {
        Pipeline::<Self>::new()
            .reject_empty("model", |v| v.model.as_deref())
            .reject_empty("color", |v| v.color.as_deref())
            .reject_empty("numberPlate", |v| v.number_plate.as_deref())
            .reject_empty("name", |v| v.name.as_deref())
            .check(|v| v.set_clause().map(|_| ()))
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        Self::rules().run(self)
    }

    /// Build the `SET` clause for the present fields, in column order.
    pub fn set_clause(&self) -> Result<SetClause, ValidationError> {
        SetClauseBuilder::new()
            .text("model", self.model.as_deref())
            .text("color", self.color.as_deref())
            .text("number_plate", self.number_plate.as_deref())
            .text("name", self.name.as_deref())
            .boolean("launched", self.launched)
            .finish()
    }
}
