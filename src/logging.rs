use std::fmt;

/// Sanitized wrapper for email addresses that masks the local part
#[derive(Debug, Clone)]
pub struct SanitizedEmail(String);

impl SanitizedEmail {
    pub fn new(email: impl Into<String>) -> Self {
        let email = email.into();
        Self(Self::sanitize(&email))
    }

    fn sanitize(email: &str) -> String {
        if let Some((local, domain)) = email.split_once('@') {
            let masked_local = if local.len() <= 2 {
                "*".repeat(local.len())
            } else {
                format!("{}***", &local[..1])
            };
            format!("{}@{}", masked_local, domain)
        } else {
            // Invalid email format, mask entirely
            "***@***".to_string()
        }
    }
}

impl fmt::Display for SanitizedEmail {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Sanitized wrapper for usernames that shows only first and last character
#[derive(Debug, Clone)]
pub struct SanitizedUsername(String);

impl SanitizedUsername {
    pub fn new(username: impl Into<String>) -> Self {
        let username = username.into();
        Self(Self::sanitize(&username))
    }

    fn sanitize(username: &str) -> String {
        let len = username.chars().count();
        if len <= 2 {
            "*".repeat(len)
        } else if len <= 4 {
            format!("{}***", username.chars().next().unwrap())
        } else {
            let first = username.chars().next().unwrap();
            let last = username.chars().last().unwrap();
            format!("{}***{}", first, last)
        }
    }
}

impl fmt::Display for SanitizedUsername {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Submission lifecycle events for structured logging
#[derive(Debug, Clone, Copy)]
pub enum FormEvent {
    SubmissionAccepted,
    SubmissionRejected,
    SubmissionBlocked,
    TransportFailure,
}

impl FormEvent {
    pub fn as_str(&self) -> &'static str {
        match self {
            FormEvent::SubmissionAccepted => "submission_accepted",
            FormEvent::SubmissionRejected => "submission_rejected",
            FormEvent::SubmissionBlocked => "submission_blocked",
            FormEvent::TransportFailure => "transport_failure",
        }
    }

    pub fn is_critical(&self) -> bool {
        matches!(
            self,
            FormEvent::SubmissionRejected | FormEvent::TransportFailure
        )
    }
}

impl fmt::Display for FormEvent {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Log a submission lifecycle event with sanitized context
#[macro_export]
macro_rules! log_form_event {
    ($event:expr, $($field:tt)*) => {
        if $event.is_critical() {
            tracing::warn!(
                form_event = %$event,
                event_type = "form",
                $($field)*
            );
        } else {
            tracing::info!(
                form_event = %$event,
                event_type = "form",
                $($field)*
            );
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_email() {
        assert_eq!(
            SanitizedEmail::new("user@example.com").to_string(),
            "u***@example.com"
        );
        assert_eq!(
            SanitizedEmail::new("ab@test.com").to_string(),
            "**@test.com"
        );
        assert_eq!(SanitizedEmail::new("a@test.com").to_string(), "*@test.com");
        assert_eq!(SanitizedEmail::new("invalid-email").to_string(), "***@***");
    }

    #[test]
    fn test_sanitize_username() {
        assert_eq!(SanitizedUsername::new("johndoe").to_string(), "j***e");
        assert_eq!(SanitizedUsername::new("ab").to_string(), "**");
        assert_eq!(SanitizedUsername::new("abc").to_string(), "a***");
        assert_eq!(SanitizedUsername::new("a").to_string(), "*");
    }

    #[test]
    fn test_form_event_critical() {
        assert!(FormEvent::SubmissionRejected.is_critical());
        assert!(FormEvent::TransportFailure.is_critical());
        assert!(!FormEvent::SubmissionAccepted.is_critical());
        assert!(!FormEvent::SubmissionBlocked.is_critical());
    }
}
