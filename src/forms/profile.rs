use serde::Serialize;

use crate::logging::SanitizedEmail;

/// Add-address panel on the profile page.
#[derive(Debug, Clone, Default, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailManager {
    pub add_mode: bool,
    pub draft: String,
}

impl EmailManager {
    pub fn new() -> Self {
        Self::default()
    }
}

/// One saved address row. The loaded value is kept beside the edited one so
/// an abandoned edit can revert without a round trip.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmailEntry {
    pub loaded: String,
    pub address: String,
    pub edit_mode: bool,
    pub delete_mode: bool,
}

impl EmailEntry {
    pub fn new(address: impl Into<String>) -> Self {
        let address = address.into();
        Self {
            loaded: address.clone(),
            address,
            edit_mode: false,
            delete_mode: false,
        }
    }

    pub fn revert(&mut self) {
        tracing::debug!(
            address = %SanitizedEmail::new(&self.loaded),
            "Reverting abandoned address edit"
        );
        self.address = self.loaded.clone();
        self.edit_mode = false;
    }
}

/// Which verified address feeds the gravatar hash.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct GravatarSelection {
    pub selected: String,
}

impl GravatarSelection {
    pub fn new(selected: impl Into<String>) -> Self {
        Self {
            selected: selected.into(),
        }
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AvatarSource {
    GitHub,
    #[default]
    Gravatar,
}

impl AvatarSource {
    /// Anything that is not the github source falls back to gravatar.
    pub fn from_submission(raw: &str) -> Self {
        match raw {
            "github" => AvatarSource::GitHub,
            _ => AvatarSource::Gravatar,
        }
    }
}

/// Avatar source selection. The display URL is pure formatting; no request
/// leaves this type.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AvatarPicker {
    pub source: AvatarSource,
    pub gravatar_hash: String,
    pub github_username: String,
}

impl AvatarPicker {
    pub fn new(
        source: AvatarSource,
        gravatar_hash: impl Into<String>,
        github_username: impl Into<String>,
    ) -> Self {
        Self {
            source,
            gravatar_hash: gravatar_hash.into(),
            github_username: github_username.into(),
        }
    }

    pub fn avatar_src(&self) -> String {
        match self.source {
            AvatarSource::GitHub => format!("https://github.com/{}.png", self.github_username),
            AvatarSource::Gravatar => format!(
                "https://gravatar.com/avatar/{}.jpeg?s=256&d=retro",
                self.gravatar_hash
            ),
        }
    }
}
