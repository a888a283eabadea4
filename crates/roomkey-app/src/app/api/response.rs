//! JSON envelope shared by every API response.
//!
//! Successful responses carry `"status": "success"` and the payload in `data`.
//! Failures carry `"status": "error"`, a client-facing message and `null` data;
//! internal failures are logged and answered with a fixed message instead of
//! the underlying error.

use salvo::http::StatusCode;
use salvo::writing::Json;
use salvo::{Request, Response};
use serde::de::DeserializeOwned;
use serde::{Deserialize, Serialize};

use roomkey_service::error::ErrorKind;

use crate::error::{AppError, AppResult};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EnvelopeStatus {
    Success,
    Error,
}

#[derive(Debug, Serialize, Deserialize)]
pub struct Envelope<T> {
    pub status: EnvelopeStatus,
    pub message: String,
    pub data: Option<T>,
}

/// Parses a JSON request body, classifying any failure as bad input.
///
/// ## Errors
/// Returns `InvalidBody` if the body is not JSON of the expected shape.
pub async fn parse_body<T: DeserializeOwned>(req: &mut Request) -> AppResult<T> {
    req.parse_json::<T>().await.map_err(|e| {
        tracing::debug!(error = %e, "Rejected request body");
        AppError::InvalidBody(e)
    })
}

/// Renders `result` into `res`.
///
/// `success` is the message sent with a payload; `internal` replaces the error
/// text when the failure is not the client's.
pub fn respond<T: Serialize + Send>(
    res: &mut Response,
    result: AppResult<T>,
    success: &str,
    internal: &str,
) {
    match result {
        Ok(data) => {
            res.status_code(StatusCode::OK);
            res.render(Json(Envelope {
                status: EnvelopeStatus::Success,
                message: success.to_string(),
                data: Some(data),
            }));
        }
        Err(e) => render_error(res, &e, internal),
    }
}

pub fn render_error(res: &mut Response, err: &AppError, internal: &str) {
    let message = if err.kind() == ErrorKind::Internal {
        tracing::error!(error = ?err, "Request failed");
        internal.to_string()
    } else {
        tracing::debug!(error = %err, "Request rejected");
        err.to_string()
    };

    res.status_code(err.status_code());
    res.render(Json(Envelope::<()> {
        status: EnvelopeStatus::Error,
        message,
        data: None,
    }));
}
