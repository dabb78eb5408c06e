pub mod character;
pub mod password;
pub mod username;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum FieldError {
    #[error("username must be 4-16 lowercase characters consisting of letters, digits, underscores, or dashes")]
    InvalidUsername,
    #[error("password must be between 8 and 255 characters")]
    InvalidPassword,
    #[error("character name must be 4-16 characters from the name alphabet")]
    InvalidCharacterName,
    #[error("short description must be 8-300 characters of letters, commas, spaces, or dashes")]
    InvalidShortDescription,
    #[error("description must be 32-2000 characters of basic prose punctuation")]
    InvalidDescription,
    #[error("backstory must be 500-10000 characters of basic prose punctuation")]
    InvalidBackstory,
}

pub type ValidationResult<T> = Result<T, FieldError>;

/// Field rules drifted between portal releases: the username ceiling was
/// raised and the character-name alphabet widened. Both rule sets stay
/// selectable; they are never merged.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum RuleSchema {
    V1,
    #[default]
    V2,
}
