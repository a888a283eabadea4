use crate::error::{ServiceError, ServiceResult};

/// Rejects empty or whitespace-only values for a required text field.
pub(crate) fn require_text(field: &'static str, value: &str) -> ServiceResult<()> {
    if value.trim().is_empty() {
        return Err(ServiceError::BadInput(format!("{field} is required")));
    }
    Ok(())
}
