use reqwest::StatusCode;

/// Header carrying the anti-forgery token on every outgoing request.
pub const CSRF_TOKEN_HEADER: &str = "X-CSRF-Token";

/// Response header a server sets to mark an error status as still carrying
/// renderable content.
pub const ACCEPTABLE_HEADER: &str = "X-HX-Acceptable";

const ACCEPTABLE_STATUSES: [StatusCode; 6] = [
    StatusCode::BAD_REQUEST,
    StatusCode::UNAUTHORIZED,
    StatusCode::FORBIDDEN,
    StatusCode::NOT_FOUND,
    StatusCode::CONFLICT,
    StatusCode::INTERNAL_SERVER_ERROR,
];

/// What the binding layer should do with a response body.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Disposition {
    /// Swap the body into the page.
    Swap,
    /// Hard failure; leave the current markup alone.
    Error,
}

/// Success always swaps. An error status swaps only when the server marked
/// it acceptable AND it sits on the fixed allow-list; the default error path
/// must not suppress content the server meant to be rendered.
pub fn classify(status: StatusCode, acceptable: Option<&str>) -> Disposition {
    if status.is_success() {
        return Disposition::Swap;
    }

    if acceptable == Some("true") && ACCEPTABLE_STATUSES.contains(&status) {
        return Disposition::Swap;
    }

    Disposition::Error
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_always_swaps() {
        assert_eq!(classify(StatusCode::OK, None), Disposition::Swap);
        assert_eq!(classify(StatusCode::CREATED, Some("true")), Disposition::Swap);
    }

    #[test]
    fn test_acceptable_statuses_swap_when_marked() {
        for status in ACCEPTABLE_STATUSES {
            assert_eq!(classify(status, Some("true")), Disposition::Swap);
        }
    }

    #[test]
    fn test_unmarked_errors_stay_errors() {
        assert_eq!(classify(StatusCode::NOT_FOUND, None), Disposition::Error);
        assert_eq!(classify(StatusCode::CONFLICT, Some("false")), Disposition::Error);
        assert_eq!(classify(StatusCode::BAD_REQUEST, Some("1")), Disposition::Error);
    }

    #[test]
    fn test_statuses_off_the_list_never_swap() {
        assert_eq!(
            classify(StatusCode::UNPROCESSABLE_ENTITY, Some("true")),
            Disposition::Error
        );
        assert_eq!(
            classify(StatusCode::BAD_GATEWAY, Some("true")),
            Disposition::Error
        );
        assert_eq!(
            classify(StatusCode::TOO_MANY_REQUESTS, Some("true")),
            Disposition::Error
        );
    }
}
