//! Field-level input checks shared by item, claim and account payloads.

use crate::error::CoreError;

/// Require a non-blank text field no longer than `max_len` characters.
pub fn require_text(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} is required")));
    }
    check_max_len(field, value, max_len)
}

/// Reject text longer than `max_len` characters. Empty text is allowed.
pub fn check_max_len(field: &str, value: &str, max_len: usize) -> Result<(), CoreError> {
    let len = value.chars().count();
    if len > max_len {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {max_len} characters (got {len})"
        )));
    }
    Ok(())
}
