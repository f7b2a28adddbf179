//! Validation error type and single-value rules.

use crate::types::DbId;

/// A rejected caller input. Each variant names exactly one problem.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("invalid id {0}: must be a positive integer")]
    InvalidId(DbId),

    #[error("missing required field: {0}")]
    MissingField(&'static str),

    #[error("field must not be empty: {0}")]
    EmptyField(&'static str),

    #[error("nothing to update")]
    NothingToUpdate,
}

impl ValidationError {
    /// The offending field, for the variants that have one.
    pub fn field(&self) -> Option<&'static str> {
        match self {
            ValidationError::InvalidId(_) => Some("id"),
            ValidationError::MissingField(field) | ValidationError::EmptyField(field) => {
                Some(field)
            }
            ValidationError::NothingToUpdate => None,
        }
    }
}

/// Reject ids that cannot address a row (`id <= 0`).
pub fn validate_id(id: DbId) -> Result<DbId, ValidationError> {
    if id > 0 {
        Ok(id)
    } else {
        Err(ValidationError::InvalidId(id))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn positive_ids_pass() {
        assert_eq!(validate_id(1), Ok(1));
        assert_eq!(validate_id(DbId::MAX), Ok(DbId::MAX));
    }

    #[test]
    fn zero_and_negative_ids_fail() {
        assert_eq!(validate_id(0), Err(ValidationError::InvalidId(0)));
        assert_eq!(validate_id(-1), Err(ValidationError::InvalidId(-1)));
    }

    #[test]
    fn field_is_reported_per_variant() {
        assert_eq!(ValidationError::InvalidId(-3).field(), Some("id"));
        assert_eq!(ValidationError::MissingField("model").field(), Some("model"));
        assert_eq!(ValidationError::EmptyField("color").field(), Some("color"));
        assert_eq!(ValidationError::NothingToUpdate.field(), None);
    }
}
