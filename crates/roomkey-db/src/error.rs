use diesel::result::DatabaseErrorKind;
use thiserror::Error;

/// Database layer errors
#[derive(Error, Debug)]
pub enum DbError {
    #[error("Database error: {0}")]
    DatabaseError(#[from] diesel::result::Error),

    #[error("Pool error: {0}")]
    PoolError(#[from] diesel_async::pooled_connection::bb8::RunError),

    #[error("Unique constraint violated: {0}")]
    UniqueViolation(String),

    #[error(transparent)]
    CoreError(#[from] roomkey_core::error::CoreError),
}

impl DbError {
    /// Returns true when the failure was caused by a duplicate unique key,
    /// whether reported by Postgres or by the in-memory store.
    #[must_use]
    pub fn is_unique_violation(&self) -> bool {
        match self {
            Self::UniqueViolation(_) => true,
            Self::DatabaseError(diesel::result::Error::DatabaseError(
                DatabaseErrorKind::UniqueViolation,
                _,
            )) => true,
            _ => false,
        }
    }
}

pub type DbResult<T> = std::result::Result<T, DbError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unique_violation_detection() {
        assert!(DbError::UniqueViolation("room.name".to_string()).is_unique_violation());
        assert!(!DbError::DatabaseError(diesel::result::Error::NotFound).is_unique_violation());
        assert!(
            !DbError::CoreError(roomkey_core::error::CoreError::InvariantViolation("x"))
                .is_unique_violation()
        );
    }
}
