use serde::Serialize;

use super::{FieldError, RuleSchema, ValidationResult};

pub const NAME_MIN_LENGTH: usize = 4;
pub const NAME_MAX_LENGTH: usize = 16;
pub const SHORT_DESCRIPTION_MIN_LENGTH: usize = 8;
pub const SHORT_DESCRIPTION_MAX_LENGTH: usize = 300;
pub const DESCRIPTION_MIN_LENGTH: usize = 32;
pub const DESCRIPTION_MAX_LENGTH: usize = 2000;
pub const BACKSTORY_MIN_LENGTH: usize = 500;
pub const BACKSTORY_MAX_LENGTH: usize = 10000;

fn is_name_char(c: char, schema: RuleSchema) -> bool {
    match schema {
        RuleSchema::V1 => c.is_ascii_alphabetic() || c == '\'' || c == '-',
        RuleSchema::V2 => c.is_ascii_alphanumeric() || c == '_' || c == '-',
    }
}

fn is_short_description_char(c: char) -> bool {
    c.is_ascii_alphabetic() || c == ',' || c == ' ' || c == '-'
}

fn is_description_char(c: char) -> bool {
    c.is_ascii_alphabetic() || matches!(c, ',' | ' ' | '\'' | '-' | '.' | '!' | '(' | ')')
}

fn is_backstory_char(c: char) -> bool {
    is_description_char(c) || c == '\r' || c == '\n'
}

fn ensure_length_and_charset(
    value: &str,
    min: usize,
    max: usize,
    allowed: impl Fn(char) -> bool,
    error: FieldError,
) -> ValidationResult<()> {
    let len = value.chars().count();
    if len < min || len > max {
        tracing::debug!(length = len, min, max, %error, "Field validation failed: invalid length");
        return Err(error);
    }

    if !value.chars().all(allowed) {
        tracing::debug!(%error, "Field validation failed: contains invalid characters");
        return Err(error);
    }

    Ok(())
}

pub fn sanitize_name(raw: &str, schema: RuleSchema) -> String {
    raw.chars().filter(|c| is_name_char(*c, schema)).collect()
}

pub fn ensure_valid_name(value: &str, schema: RuleSchema) -> ValidationResult<()> {
    ensure_length_and_charset(
        value,
        NAME_MIN_LENGTH,
        NAME_MAX_LENGTH,
        |c| is_name_char(c, schema),
        FieldError::InvalidCharacterName,
    )
}

/// Short descriptions read as lowercase prose fragments; the sanitizer folds
/// case in addition to dropping disallowed characters.
pub fn sanitize_short_description(raw: &str) -> String {
    raw.chars()
        .filter(|c| is_short_description_char(*c))
        .map(|c| c.to_ascii_lowercase())
        .collect()
}

pub fn ensure_valid_short_description(value: &str) -> ValidationResult<()> {
    ensure_length_and_charset(
        value,
        SHORT_DESCRIPTION_MIN_LENGTH,
        SHORT_DESCRIPTION_MAX_LENGTH,
        is_short_description_char,
        FieldError::InvalidShortDescription,
    )
}

pub fn sanitize_description(raw: &str) -> String {
    raw.chars().filter(|c| is_description_char(*c)).collect()
}

pub fn ensure_valid_description(value: &str) -> ValidationResult<()> {
    ensure_length_and_charset(
        value,
        DESCRIPTION_MIN_LENGTH,
        DESCRIPTION_MAX_LENGTH,
        is_description_char,
        FieldError::InvalidDescription,
    )
}

/// Backstories keep line breaks; everything else follows the description
/// alphabet.
pub fn sanitize_backstory(raw: &str) -> String {
    raw.chars().filter(|c| is_backstory_char(*c)).collect()
}

pub fn ensure_valid_backstory(value: &str) -> ValidationResult<()> {
    ensure_length_and_charset(
        value,
        BACKSTORY_MIN_LENGTH,
        BACKSTORY_MAX_LENGTH,
        is_backstory_char,
        FieldError::InvalidBackstory,
    )
}

/// Closed selection; carries no validation rule of its own.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub enum Gender {
    Male,
    Female,
    #[default]
    NonBinary,
}

impl Gender {
    pub fn as_str(&self) -> &'static str {
        match self {
            Gender::Male => "Male",
            Gender::Female => "Female",
            Gender::NonBinary => "NonBinary",
        }
    }

    /// Anything outside the closed set snaps to the non-binary default.
    pub fn from_submission(raw: &str) -> Self {
        match raw {
            "Male" => Gender::Male,
            "Female" => Gender::Female,
            _ => Gender::NonBinary,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_name_schemas_diverge() {
        assert!(ensure_valid_name("D'arcy", RuleSchema::V1).is_ok());
        assert!(ensure_valid_name("D'arcy", RuleSchema::V2).is_err());
        assert!(ensure_valid_name("Vex_9", RuleSchema::V2).is_ok());
        assert!(ensure_valid_name("Vex_9", RuleSchema::V1).is_err());
    }

    #[test]
    fn test_name_length_bounds() {
        assert!(ensure_valid_name("Ash", RuleSchema::V1).is_err());
        assert!(ensure_valid_name("Ashe", RuleSchema::V1).is_ok());
        assert!(ensure_valid_name(&"a".repeat(17), RuleSchema::V1).is_err());
    }

    #[test]
    fn test_sanitize_name_per_schema() {
        assert_eq!(sanitize_name("D'arcy 9!", RuleSchema::V1), "D'arcy");
        assert_eq!(sanitize_name("D'arcy 9!", RuleSchema::V2), "Darcy9");
    }

    #[test]
    fn test_short_description_lowercases() {
        assert_eq!(
            sanitize_short_description("A Tall, Weathered-Sailor!"),
            "a tall, weathered-sailor"
        );
    }

    #[test]
    fn test_short_description_bounds() {
        assert!(ensure_valid_short_description("too sho").is_err());
        assert!(ensure_valid_short_description("a tall, weathered sailor").is_ok());
        assert!(ensure_valid_short_description(&"a".repeat(301)).is_err());
    }

    #[test]
    fn test_description_charset_and_bounds() {
        let ok = "A tall sailor, weathered by salt. Keeps a parrot (loudly)!";
        assert!(ensure_valid_description(ok).is_ok());
        assert!(ensure_valid_description("Too short.").is_err());
        assert!(ensure_valid_description(&"5".repeat(40)).is_err());
        assert!(ensure_valid_description(&"a".repeat(2001)).is_err());
    }

    #[test]
    fn test_backstory_keeps_newlines() {
        let line = "Born dockside, raised on brine and bad luck. ";
        let backstory = format!("{}\r\n{}", line.repeat(6), line.repeat(6));
        assert!(ensure_valid_backstory(&backstory).is_ok());
        assert_eq!(sanitize_backstory(&backstory), backstory);
    }

    #[test]
    fn test_backstory_length_bounds() {
        assert!(ensure_valid_backstory("short").is_err());
        assert!(ensure_valid_backstory(&"a".repeat(10001)).is_err());
    }

    #[test]
    fn test_sanitizers_are_idempotent() {
        for raw in ["A Tall, Weathered-Sailor!", "D'arcy 9!", "x\r\ny."] {
            let sdesc = sanitize_short_description(raw);
            assert_eq!(sanitize_short_description(&sdesc), sdesc);
            let desc = sanitize_description(raw);
            assert_eq!(sanitize_description(&desc), desc);
            let back = sanitize_backstory(raw);
            assert_eq!(sanitize_backstory(&back), back);
        }
    }

    #[test]
    fn test_gender_snaps_to_default() {
        assert_eq!(Gender::from_submission("Male"), Gender::Male);
        assert_eq!(Gender::from_submission("Female"), Gender::Female);
        assert_eq!(Gender::from_submission("Other"), Gender::NonBinary);
        assert_eq!(Gender::from_submission(""), Gender::NonBinary);
    }
}
