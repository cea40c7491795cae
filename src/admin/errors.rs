//! Admin API client error taxonomy
//!
//! One enum per operation family. Every variant is terminal for the
//! triggering operation; nothing here is retried.

use std::fmt;

use reqwest::StatusCode;

/// Login failures
#[derive(Debug)]
pub enum AuthError {
    /// Server did not accept the candidate password
    InvalidCredential,

    /// Request never completed (DNS, connect, timeout)
    NetworkFailure(String),
}

impl fmt::Display for AuthError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AuthError::InvalidCredential => write!(f, "Invalid password"),
            AuthError::NetworkFailure(msg) => write!(f, "Failed to log in: {}", msg),
        }
    }
}

impl std::error::Error for AuthError {}

/// Write (create/update/remove) failures
#[derive(Debug)]
pub enum WriteError {
    /// No credential stored; log in first
    Unauthenticated,

    /// Id-keyed write called with an empty identifier
    MissingId,

    /// Server answered with a non-success status
    Rejected(String),

    /// Request never completed
    NetworkFailure(String),
}

impl fmt::Display for WriteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            WriteError::Unauthenticated => write!(f, "Please log in first"),
            WriteError::MissingId => write!(f, "Please enter a restaurant ID"),
            WriteError::Rejected(detail) => write!(f, "Server rejected the request: {}", detail),
            WriteError::NetworkFailure(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for WriteError {}

/// Lookup (restaurant fetch, audit logs) failures
#[derive(Debug)]
pub enum LookupError {
    /// Lookup called with an empty identifier
    MissingId,

    /// No credential stored; log in first
    Unauthenticated,

    /// Server had no record for the identifier
    NotFound { id: String },

    /// Transport failure or an unusable response
    RequestFailed(String),
}

impl fmt::Display for LookupError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            LookupError::MissingId => write!(f, "Please enter a restaurant ID"),
            LookupError::Unauthenticated => write!(f, "Please log in first"),
            LookupError::NotFound { id } => {
                write!(f, "No restaurant found for ID '{}'", id)
            }
            LookupError::RequestFailed(msg) => write!(f, "Request failed: {}", msg),
        }
    }
}

impl std::error::Error for LookupError {}

/// Extract the most specific error detail from a server response body
///
/// The admin API reports failures as JSON objects carrying an `error` or
/// `message` key. Falls back to the raw body, then to the status line when
/// the body is empty.
pub fn error_detail(status: StatusCode, body: &str) -> String {
    if let Ok(json) = serde_json::from_str::<serde_json::Value>(body) {
        for key in ["error", "message"] {
            if let Some(detail) = json.get(key).and_then(|v| v.as_str()) {
                if !detail.is_empty() {
                    return detail.to_string();
                }
            }
        }
    }

    let trimmed = body.trim();
    if trimmed.is_empty() {
        status.to_string()
    } else {
        trimmed.to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_detail_prefers_error_key() {
        let body = r#"{"error": "Invalid restaurant data", "details": "name is required"}"#;
        assert_eq!(
            error_detail(StatusCode::BAD_REQUEST, body),
            "Invalid restaurant data"
        );
    }

    #[test]
    fn test_error_detail_falls_back_to_message_key() {
        let body = r#"{"message": "Unauthorized"}"#;
        assert_eq!(error_detail(StatusCode::UNAUTHORIZED, body), "Unauthorized");
    }

    #[test]
    fn test_error_detail_non_json_body_passes_through() {
        let body = "upstream exploded";
        assert_eq!(
            error_detail(StatusCode::INTERNAL_SERVER_ERROR, body),
            "upstream exploded"
        );
    }

    #[test]
    fn test_error_detail_empty_body_uses_status() {
        let detail = error_detail(StatusCode::BAD_GATEWAY, "");
        assert!(detail.contains("502"));
    }

    #[test]
    fn test_error_detail_json_without_known_keys_uses_raw_body() {
        let body = r#"{"reason": "THROTTLED"}"#;
        assert_eq!(error_detail(StatusCode::TOO_MANY_REQUESTS, body), body);
    }

    #[test]
    fn test_display_messages() {
        assert_eq!(AuthError::InvalidCredential.to_string(), "Invalid password");
        assert_eq!(WriteError::Unauthenticated.to_string(), "Please log in first");
        assert_eq!(
            LookupError::NotFound {
                id: "abc".to_string()
            }
            .to_string(),
            "No restaurant found for ID 'abc'"
        );
        assert_eq!(
            LookupError::MissingId.to_string(),
            "Please enter a restaurant ID"
        );
    }
}
