use super::{FieldError, RuleSchema, ValidationResult};

pub const MIN_LENGTH: usize = 4;

pub fn max_length(schema: RuleSchema) -> usize {
    match schema {
        RuleSchema::V1 => 8,
        RuleSchema::V2 => 16,
    }
}

/// Drops every character outside the username alphabet and lowercases what
/// remains. Total and idempotent; never applied implicitly by validation.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_ascii_alphanumeric() || *c == '_' || *c == '-')
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

/// Checks the raw value: length bounds first, then the lowercase alphabet.
/// Uppercase input is invalid rather than silently folded.
pub fn ensure_valid(value: &str, schema: RuleSchema) -> ValidationResult<()> {
    let len = value.chars().count();
    if len < MIN_LENGTH || len > max_length(schema) {
        tracing::debug!(
            length = len,
            schema = ?schema,
            "Username validation failed: invalid length"
        );
        return Err(FieldError::InvalidUsername);
    }

    let allowed = value
        .chars()
        .all(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || c == '_' || c == '-');
    if !allowed {
        tracing::debug!("Username validation failed: contains invalid characters");
        return Err(FieldError::InvalidUsername);
    }

    Ok(())
}
