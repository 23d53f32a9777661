//! Translation of pool and Diesel failures into [`RepositoryError`].
//!
//! Integrity violations (unique, foreign key, not null, check) become
//! [`RepositoryError::Constraint`] so services can report conflicts. Other
//! database errors keep the server's message because several endpoints echo
//! it to the client.

use diesel::result::{DatabaseErrorKind, Error as DieselError};
use tracing::debug;

use crate::domain::ports::RepositoryError;

use super::pool::PoolError;

/// Map pool errors to repository connection errors.
pub(crate) fn map_pool_error(error: PoolError) -> RepositoryError {
    debug!(error = %error, "connection checkout failed");
    RepositoryError::connection(error.message())
}

/// Map Diesel errors to repository errors.
pub(crate) fn map_diesel_error(error: DieselError) -> RepositoryError {
    match error {
        DieselError::DatabaseError(kind, info) => {
            debug!(
                ?kind,
                message = info.message(),
                constraint = ?info.constraint_name(),
                "diesel operation failed"
            );
            let message = info.message().to_owned();
            match kind {
                DatabaseErrorKind::UniqueViolation
                | DatabaseErrorKind::ForeignKeyViolation
                | DatabaseErrorKind::NotNullViolation
                | DatabaseErrorKind::CheckViolation => RepositoryError::constraint(message),
                DatabaseErrorKind::ClosedConnection => RepositoryError::connection(message),
                _ => RepositoryError::query(message),
            }
        }
        other => {
            debug!(
                error_type = %std::any::type_name_of_val(&other),
                error = %other,
                "diesel operation failed"
            );
            RepositoryError::query(other.to_string())
        }
    }
}
