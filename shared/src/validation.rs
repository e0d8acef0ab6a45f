//! Input validation helpers
//!
//! Text length limits plus the bridge from `validator` derive errors to
//! [`AppError`].

use serde_json::Value;
use validator::ValidationErrors;

use crate::error::{AppError, ErrorCode};

// ── Text length limits ──────────────────────────────────────────────

/// Room and user names
pub const MAX_NAME_LEN: usize = 200;

/// Room descriptions
pub const MAX_NOTE_LEN: usize = 2000;

/// Phone numbers, room numbers, bed types
pub const MAX_SHORT_TEXT_LEN: usize = 100;

/// Email addresses (RFC 5321)
pub const MAX_EMAIL_LEN: usize = 254;

/// Passwords
pub const MAX_PASSWORD_LEN: usize = 128;

// ── Validation helpers ──────────────────────────────────────────────

/// Validate that a required string is non-empty and within the length limit.
pub fn validate_required_text(value: &str, field: &str, max_len: usize) -> Result<(), AppError> {
    if value.trim().is_empty() {
        return Err(AppError::required(field));
    }
    if value.chars().count() > max_len {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({} chars, max {max_len})", value.chars().count()),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Validate that an optional string, if present, is within the length limit.
pub fn validate_optional_text(
    value: &Option<String>,
    field: &str,
    max_len: usize,
) -> Result<(), AppError> {
    if let Some(v) = value
        && v.chars().count() > max_len
    {
        return Err(AppError::with_message(
            ErrorCode::ValueOutOfRange,
            format!("{field} is too long ({} chars, max {max_len})", v.chars().count()),
        )
        .with_detail("field", field));
    }
    Ok(())
}

/// Collapse derive errors into one [`AppError`]
///
/// The message is the first field message (fields sorted by name); every
/// failing field is listed under `details`.
pub fn from_validation_errors(errors: &ValidationErrors) -> AppError {
    let mut fields: Vec<_> = errors.field_errors().into_iter().collect();
    fields.sort_by(|a, b| a.0.cmp(&b.0));

    let message = fields
        .iter()
        .flat_map(|(_, errs)| errs.iter())
        .find_map(|e| e.message.as_ref().map(|m| m.to_string()))
        .unwrap_or_else(|| ErrorCode::ValidationFailed.message().to_string());

    let mut err = AppError::validation(message);
    for (field, errs) in fields {
        let codes: Vec<Value> = errs.iter().map(|e| Value::from(e.code.to_string())).collect();
        err = err.with_detail(field.to_string(), codes);
    }
    err
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Role, UserDraft};
    use validator::Validate;

    #[test]
    fn test_required_text() {
        assert!(validate_required_text("Villa", "name", MAX_NAME_LEN).is_ok());
        let err = validate_required_text("  ", "name", MAX_NAME_LEN).unwrap_err();
        assert_eq!(err.code, ErrorCode::RequiredField);
        let err = validate_required_text("abcdef", "name", 3).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValueOutOfRange);
    }

    #[test]
    fn test_optional_text() {
        assert!(validate_optional_text(&None, "password", 4).is_ok());
        assert!(validate_optional_text(&Some("12345".into()), "password", 4).is_err());
    }

    #[test]
    fn test_from_validation_errors() {
        let draft = UserDraft {
            name: String::new(),
            email: "bukan-email".to_string(),
            phone: "0812".to_string(),
            password: None,
            role: Role::Admin,
        };
        let err = from_validation_errors(&draft.validate().unwrap_err());
        assert_eq!(err.code, ErrorCode::ValidationFailed);
        // "email" sorts before "name"
        assert_eq!(err.message, "Format email tidak valid");
        let details = err.details.unwrap();
        assert!(details.contains_key("email"));
        assert!(details.contains_key("name"));
    }
}
