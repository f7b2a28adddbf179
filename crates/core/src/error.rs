use crate::types::DbId;
use crate::validation::ValidationError;

/// Boxed driver error carried by [`CoreError::Storage`].
pub type BoxError = Box<dyn std::error::Error + Send + Sync>;

/// Closed set of failure kinds returned by every vehicle operation.
///
/// Callers branch on the variant, never on the rendered message.
#[derive(Debug, thiserror::Error)]
pub enum CoreError {
    /// The caller supplied an invalid id or payload. Never reaches storage.
    #[error("Validation failed: {0}")]
    Validation(#[from] ValidationError),

    /// A well-formed reference to a row that does not exist or is soft-deleted.
    #[error("Entity not found: {entity} with id {id}")]
    NotFound { entity: &'static str, id: DbId },

    /// Any driver or I/O failure other than "no rows".
    #[error("Storage failure: {0}")]
    Storage(#[source] BoxError),
}

impl CoreError {
    /// Wrap a driver-level failure.
    pub fn storage(err: impl Into<BoxError>) -> Self {
        CoreError::Storage(err.into())
    }
}
