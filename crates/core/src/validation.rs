//! Form-boundary validation helpers.
//!
//! The stores accept whatever they are given; callers that collect input from
//! a form run these checks first.

use crate::error::CoreError;

/// Maximum length of a name or title field.
pub const MAX_NAME_LEN: usize = 200;

/// Validate that a required text field is non-empty after trimming.
pub fn require_non_empty(field: &str, value: &str) -> Result<(), CoreError> {
    if value.trim().is_empty() {
        return Err(CoreError::Validation(format!("{field} must not be empty")));
    }
    Ok(())
}

/// Validate a required name or title: non-empty and at most [`MAX_NAME_LEN`] chars.
pub fn validate_name(field: &str, value: &str) -> Result<(), CoreError> {
    require_non_empty(field, value)?;
    let len = value.chars().count();
    if len > MAX_NAME_LEN {
        return Err(CoreError::Validation(format!(
            "{field} must be at most {MAX_NAME_LEN} characters, got {len}"
        )));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn blank_values_are_rejected() {
        assert!(require_non_empty("name", "").is_err());
        assert!(require_non_empty("name", "   ").is_err());
        assert!(require_non_empty("name", "Alpha").is_ok());
    }

    #[test]
    fn error_names_the_field() {
        let msg = validate_name("title", "").unwrap_err().to_string();
        assert!(msg.contains("title"));
    }

    #[test]
    fn overlong_names_are_rejected() {
        let long = "x".repeat(MAX_NAME_LEN + 1);
        assert!(validate_name("name", &long).is_err());
        assert!(validate_name("name", &"x".repeat(MAX_NAME_LEN)).is_ok());
    }
}
