use serde::Serialize;
use thiserror::Error;

/// Faults that can escape the transport and configuration layers. Submission
/// pipelines never let these reach their callers: everything is converted to
/// an [`ErrorState`] flag at the submit boundary.
#[derive(Debug, Error)]
pub enum ClientError {
    #[error("PORTAL_BASE_URL environment variable is not set")]
    MissingBaseUrl,

    #[error("portal base URL is not a valid absolute URL: {0}")]
    InvalidBaseUrl(String),

    #[error("unrecognized rule set {0:?}; expected \"v1\" or \"v2\"")]
    UnknownRuleSet(String),

    #[error("request path could not be resolved against the base URL: {0}")]
    InvalidRequestPath(String),

    #[error("transport failure: {0}")]
    Transport(#[from] reqwest::Error),
}

/// Terminal outcome flags for a failed submission attempt.
///
/// At most one flag is true after an attempt. `bad_request` and `conflict`
/// are expected server rejections the user can correct; `internal` is a
/// server fault; `auth` is a credential rejection; `disaster` means the call
/// never completed and the server may or may not have seen it. Success has
/// no flag at all - it is signaled by the page reload.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ErrorState {
    pub bad_request: bool,
    pub conflict: bool,
    pub internal: bool,
    pub disaster: bool,
    pub auth: bool,
}

impl ErrorState {
    /// Clears every flag as a unit before a fresh attempt.
    pub fn reset(&mut self) {
        *self = Self::default();
    }

    pub fn any(&self) -> bool {
        self.bad_request || self.conflict || self.internal || self.disaster || self.auth
    }
}
