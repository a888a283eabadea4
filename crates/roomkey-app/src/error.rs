use roomkey_service::error::ErrorKind;
use salvo::http::StatusCode;
use thiserror::Error;

/// Application-level errors (HTTP layer)
#[derive(Error, Debug)]
pub enum AppError {
    /// Request body is missing, malformed, or has the wrong shape.
    #[error("Review your input")]
    InvalidBody(#[source] salvo::http::ParseError),

    #[error(transparent)]
    ServiceError(#[from] roomkey_service::error::ServiceError),

    #[error(transparent)]
    CoreError(#[from] roomkey_core::error::CoreError),
}

impl AppError {
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::InvalidBody(_) => ErrorKind::BadInput,
            Self::ServiceError(e) => e.kind(),
            Self::CoreError(_) => ErrorKind::Internal,
        }
    }

    #[must_use]
    pub fn status_code(&self) -> StatusCode {
        match self.kind() {
            ErrorKind::BadInput => StatusCode::BAD_REQUEST,
            ErrorKind::Conflict => StatusCode::CONFLICT,
            ErrorKind::NotFound => StatusCode::NOT_FOUND,
            ErrorKind::Internal => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

pub type AppResult<T> = std::result::Result<T, AppError>;
