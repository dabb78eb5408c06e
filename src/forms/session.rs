use serde::Serialize;

use crate::errors::ErrorState;
use crate::fields::username;
use crate::logging::{FormEvent, SanitizedUsername};
use crate::transport::Transport;

pub const LOGIN_ROUTE: &str = "/login";
pub const LOGOUT_ROUTE: &str = "/logout";

/// Reactive state for the sign-in modal.
///
/// Presence is the only local requirement: accounts predating the current
/// registration rules must still be able to sign in, so the server is the
/// sole judge of the credentials.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginForm {
    pub show_modal: bool,
    pub username: String,
    pub password: String,
    pub errors: ErrorState,
    pub submitting: bool,
}

impl LoginForm {
    pub fn new() -> Self {
        Self {
            show_modal: false,
            username: String::new(),
            password: String::new(),
            errors: ErrorState::default(),
            submitting: false,
        }
    }

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
        if self.username.is_empty() || self.password.is_empty() {
            crate::log_form_event!(
                FormEvent::SubmissionBlocked,
                flow = "login",
                "Submission blocked: missing credentials"
            );
            return;
        }

        let username = username::sanitize(&self.username);
        let result = transport
            .post_form(
                LOGIN_ROUTE,
                &[],
                &[
                    ("username", username.as_str()),
                    ("password", self.password.as_str()),
                ],
            )
            .await;

        match result {
            Ok(status) if status.as_u16() == 200 => {
                crate::log_form_event!(
                    FormEvent::SubmissionAccepted,
                    flow = "login",
                    username = %SanitizedUsername::new(&username),
                    "Login accepted"
                );
                transport.page().reload();
            }
            Ok(status) => {
                crate::log_form_event!(
                    FormEvent::SubmissionRejected,
                    flow = "login",
                    status = status.as_u16(),
                    username = %SanitizedUsername::new(&username),
                    "Login rejected"
                );
                self.errors.auth = true;
            }
            Err(err) => {
                crate::log_form_event!(
                    FormEvent::TransportFailure,
                    flow = "login",
                    error = %err,
                    "Login never completed"
                );
                self.errors.disaster = true;
            }
        }
    }
}

/// Sign-out confirmation state. No fields travel with the request; the
/// session cookie is the whole story.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LogoutForm {
    pub show_modal: bool,
    pub errors: ErrorState,
    pub submitting: bool,
}

impl LogoutForm {
    pub fn new() -> Self {
        Self {
            show_modal: false,
            errors: ErrorState::default(),
            submitting: false,
        }
    }

    pub async fn submit(&mut self, transport: &Transport) {
        if self.submitting {
            return;
        }

        self.submitting = true;
        self.errors.reset();

        match transport.post_form(LOGOUT_ROUTE, &[], &[]).await {
            Ok(status) if status.as_u16() == 200 => {
                crate::log_form_event!(
                    FormEvent::SubmissionAccepted,
                    flow = "logout",
                    "Logout accepted"
                );
                transport.page().reload();
            }
            Ok(status) => {
                crate::log_form_event!(
                    FormEvent::SubmissionRejected,
                    flow = "logout",
                    status = status.as_u16(),
                    "Logout rejected"
                );
                self.errors.internal = true;
            }
            Err(err) => {
                crate::log_form_event!(
                    FormEvent::TransportFailure,
                    flow = "logout",
                    error = %err,
                    "Logout never completed"
                );
                self.errors.disaster = true;
            }
        }

        self.submitting = false;
    }
}
