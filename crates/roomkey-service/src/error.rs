use thiserror::Error;

/// Service layer errors
#[derive(Error, Debug)]
pub enum ServiceError {
    #[error("{0}")]
    BadInput(String),

    #[error("{0}")]
    Conflict(String),

    #[error("{0}")]
    NotFound(String),

    #[error(transparent)]
    DatabaseError(#[from] roomkey_db::error::DbError),

    #[error(transparent)]
    CoreError(#[from] roomkey_core::error::CoreError),
}

/// Classification callers map onto transport status codes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ErrorKind {
    BadInput,
    Conflict,
    NotFound,
    Internal,
}

impl ServiceError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::BadInput(_) => ErrorKind::BadInput,
            Self::Conflict(_) => ErrorKind::Conflict,
            Self::NotFound(_) => ErrorKind::NotFound,
            Self::DatabaseError(e) if e.is_unique_violation() => ErrorKind::Conflict,
            Self::DatabaseError(_) | Self::CoreError(_) => ErrorKind::Internal,
        }
    }
}

pub type ServiceResult<T> = std::result::Result<T, ServiceError>;
