use serde::Serialize;

use super::{FieldError, ValidationResult};

pub const MIN_LENGTH: usize = 8;
pub const MAX_LENGTH: usize = 255;

/// Length bounds only; every character is welcome in a password.
pub fn ensure_valid(value: &str) -> ValidationResult<()> {
    let len = value.chars().count();
    if len < MIN_LENGTH || len > MAX_LENGTH {
        tracing::debug!(length = len, "Password validation failed: invalid length");
        return Err(FieldError::InvalidPassword);
    }
    Ok(())
}

/// Four independent strength criteria, recomputed from scratch on every
/// password change. Serialized under the camelCase names the markup binds to.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Strength {
    pub len: bool,
    pub mixed_case: bool,
    pub num: bool,
    pub special_char: bool,
}

impl Strength {
    pub fn measure(password: &str) -> Self {
        let has_lower = password.chars().any(|c| c.is_ascii_lowercase());
        let has_upper = password.chars().any(|c| c.is_ascii_uppercase());

        Self {
            len: password.chars().count() > 8,
            mixed_case: has_lower && has_upper,
            num: password.chars().any(|c| c.is_ascii_digit()),
            special_char: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// Sticky join: a criterion the user has ever satisfied stays satisfied
    /// until the form is discarded, so feedback never flickers backwards.
    pub fn merge(&mut self, fresh: Strength) {
        self.len |= fresh.len;
        self.mixed_case |= fresh.mixed_case;
        self.num |= fresh.num;
        self.special_char |= fresh.special_char;
    }
}
