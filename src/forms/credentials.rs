use reqwest::StatusCode;
use serde::Serialize;

use crate::errors::ErrorState;
use crate::fields::password::{self, Strength};
use crate::fields::{RuleSchema, username};
use crate::logging::{FormEvent, SanitizedUsername};
use crate::transport::Transport;

pub const REGISTER_ROUTE: &str = "/player/new";
pub const RESET_PASSWORD_ROUTE: &str = "/reset/password";

/// The two flows that collect a username and a confirmed password.
/// Registration creates the account; reset rewrites its password using the
/// one-time token from the recovery email.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CredentialFlow {
    Register,
    ResetPassword { token: String },
}

impl CredentialFlow {
    fn name(&self) -> &'static str {
        match self {
            CredentialFlow::Register => "register",
            CredentialFlow::ResetPassword { .. } => "reset_password",
        }
    }

    fn success_status(&self) -> StatusCode {
        match self {
            CredentialFlow::Register => StatusCode::CREATED,
            CredentialFlow::ResetPassword { .. } => StatusCode::OK,
        }
    }
}

/// Feedback visibility per field, driven by the binding layer's focus/blur
/// lifecycle - separate from validity itself.
#[derive(Debug, Clone, Copy, Default, Serialize)]
pub struct CredentialNotifs {
    pub username: bool,
    pub password: bool,
}

/// Reactive state for a two-password credential flow. Everything starts
/// false or empty; input setters refresh the derived flags in place.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CredentialForm {
    pub show_modal: bool,
    pub username: String,
    pub password: String,
    pub confirm_password: String,
    pub username_valid: bool,
    pub password_valid: bool,
    pub passwords_match: bool,
    pub notifs: CredentialNotifs,
    /// Criteria met by the password as currently typed.
    pub strengths: Strength,
    /// Criteria ever met during this entry session; never regresses.
    pub earned_strengths: Strength,
    pub errors: ErrorState,
    pub submitting: bool,
    #[serde(skip)]
    flow: CredentialFlow,
    #[serde(skip)]
    schema: RuleSchema,
}

impl CredentialForm {
    pub fn register(schema: RuleSchema) -> Self {
        Self::with_flow(CredentialFlow::Register, schema)
    }

    pub fn reset_password(schema: RuleSchema, token: impl Into<String>) -> Self {
        Self::with_flow(
            CredentialFlow::ResetPassword {
                token: token.into(),
            },
            schema,
        )
    }

    fn with_flow(flow: CredentialFlow, schema: RuleSchema) -> Self {
        Self {
            show_modal: false,
            username: String::new(),
            password: String::new(),
            confirm_password: String::new(),
            username_valid: false,
            password_valid: false,
            passwords_match: false,
            notifs: CredentialNotifs::default(),
            strengths: Strength::default(),
            earned_strengths: Strength::default(),
            errors: ErrorState::default(),
            submitting: false,
            flow,
            schema,
        }
    }

    pub fn flow(&self) -> &CredentialFlow {
        &self.flow
    }

    /// Stores the raw input and refreshes validity. Validation reads the raw
    /// value; sanitization happens only at transmission.
    pub fn set_username(&mut self, raw: impl Into<String>) {
        self.username = raw.into();
        self.username_valid = username::ensure_valid(&self.username, self.schema).is_ok();
    }

    pub fn set_password(&mut self, raw: impl Into<String>) {
        self.password = raw.into();
        self.password_valid = password::ensure_valid(&self.password).is_ok();
        self.strengths = Strength::measure(&self.password);
        self.earned_strengths.merge(self.strengths);
        self.passwords_match = self.password == self.confirm_password;
    }

    pub fn set_confirm_password(&mut self, raw: impl Into<String>) {
        self.confirm_password = raw.into();
        self.passwords_match = self.password == self.confirm_password;
    }

    /// Re-validates, posts the credentials, and maps the outcome onto the
    /// error flags. A local failure issues no request and sets no flag - the
    /// live validity flags already show the user what is wrong. Success is
    /// signaled through the page reload; this state does not survive it.
    pub async fn submit(&mut self, transport: &Transport) {
        if self.submitting {
            return;
        }

        self.submitting = true;
        self.errors.reset();
        self.run_submission(transport).await;
        self.submitting = false;
    }

    async fn run_submission(&mut self, transport: &Transport) {
        if username::ensure_valid(&self.username, self.schema).is_err() {
            self.log_blocked("username");
            return;
        }
        if password::ensure_valid(&self.password).is_err() {
            self.log_blocked("password");
            return;
        }
        if self.password != self.confirm_password {
            self.log_blocked("confirm_password");
            return;
        }

        let username = username::sanitize(&self.username);
        let result = match &self.flow {
            CredentialFlow::Register => {
                transport
                    .post_form(
                        REGISTER_ROUTE,
                        &[],
                        &[
                            ("username", username.as_str()),
                            ("password", self.password.as_str()),
                        ],
                    )
                    .await
            }
            CredentialFlow::ResetPassword { token } => {
                transport
                    .post_form(
                        RESET_PASSWORD_ROUTE,
                        &[("t", token.as_str())],
                        &[
                            ("username", username.as_str()),
                            ("password", self.password.as_str()),
                            ("confirmPassword", self.confirm_password.as_str()),
                        ],
                    )
                    .await
            }
        };

        match result {
            Ok(status) if status == self.flow.success_status() => {
                crate::log_form_event!(
                    FormEvent::SubmissionAccepted,
                    flow = self.flow.name(),
                    username = %SanitizedUsername::new(&username),
                    "Credential submission accepted"
                );
                transport.page().reload();
            }
            Ok(status) => {
                crate::log_form_event!(
                    FormEvent::SubmissionRejected,
                    flow = self.flow.name(),
                    status = status.as_u16(),
                    username = %SanitizedUsername::new(&username),
                    "Credential submission rejected"
                );
                self.flag_rejection(status);
            }
            Err(err) => {
                crate::log_form_event!(
                    FormEvent::TransportFailure,
                    flow = self.flow.name(),
                    error = %err,
                    "Credential submission never completed"
                );
                self.errors.disaster = true;
            }
        }
    }

    fn flag_rejection(&mut self, status: StatusCode) {
        match self.flow {
            CredentialFlow::Register => match status.as_u16() {
                400 => self.errors.bad_request = true,
                409 => self.errors.conflict = true,
                _ => self.errors.internal = true,
            },
            CredentialFlow::ResetPassword { .. } => match status.as_u16() {
                401 => self.errors.auth = true,
                _ => self.errors.internal = true,
            },
        }
    }

    fn log_blocked(&self, field: &'static str) {
        crate::log_form_event!(
            FormEvent::SubmissionBlocked,
            flow = self.flow.name(),
            field,
            "Submission blocked by local validation"
        );
    }
}
