//! Error types for the tether client.
//!
//! This module defines `TetherError`, the single error type returned by every
//! fallible operation in the crate: configuration loading, the HTTP transport,
//! endpoint dispatch and pagination.
//!
//! # Security
//!
//! ConnectWise credentials (private keys, Automate passwords and tokens) must
//! never show up in logs or error messages. Use `sanitize_message()` on any
//! text that originates from the server before surfacing it.

use std::time::Duration;
use thiserror::Error;

use crate::endpoint::Verb;

/// Unified error type for all tether operations.
///
/// The variants fall into three groups:
///
/// - transport failures (`Http`, `HttpStatus`, `Timeout`, `RateLimited`,
///   `ServiceUnavailable`, `Authentication`, `NotFound`), see [`is_transport`](Self::is_transport);
/// - payload failures (`Deserialization`, `UnexpectedPayload`);
/// - caller or setup mistakes (`Config`, `HttpClient`, `Validation`,
///   `UnsupportedOperation`, `UnknownEndpoint`, `ConnectionTest`).
#[derive(Error, Debug)]
pub enum TetherError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP request failed during transmission.
    #[error("HTTP request failed: {0}")]
    Http(#[source] reqwest::Error),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// HTTP response returned a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The response body, sanitized and truncated.
        body: String,
    },

    /// Request timed out.
    #[error("request timed out after {duration:?} - the server may be slow or unreachable")]
    Timeout {
        /// How long we waited before timing out.
        duration: Duration,
        /// The operation that timed out.
        operation: String,
    },

    /// Rate limited by the server (HTTP 429).
    #[error("rate limited by server - please wait before retrying")]
    RateLimited {
        /// Suggested retry delay, if provided by server.
        retry_after: Option<Duration>,
    },

    /// Server temporarily unavailable (HTTP 502/503/504).
    #[error("service temporarily unavailable ({status})")]
    ServiceUnavailable {
        /// The specific status code.
        status: reqwest::StatusCode,
    },

    /// Authentication failed - the credentials or client id were rejected.
    #[error("authentication failed - check the configured ConnectWise credentials")]
    Authentication,

    /// The server answered 404 for the requested path.
    #[error("resource not found: {path}")]
    NotFound {
        /// The request path that was not found.
        path: String,
    },

    /// The response body did not match the expected item shape.
    #[error("response did not match the expected shape: {0}")]
    Deserialization(#[from] serde_json::Error),

    /// A verb returned a different payload shape than the caller asked for.
    #[error("expected {expected} payload, endpoint returns {found}")]
    UnexpectedPayload {
        /// The shape the caller asked for.
        expected: &'static str,
        /// The shape the endpoint declares.
        found: &'static str,
    },

    /// Input validation failed before any request was issued.
    #[error("validation error: {0}")]
    Validation(String),

    /// The endpoint does not declare the requested verb.
    #[error("{verb} is not supported by /{path}")]
    UnsupportedOperation {
        /// The verb that was attempted.
        verb: Verb,
        /// The resolved endpoint path.
        path: String,
    },

    /// No endpoint is registered under the given name or path.
    #[error("unknown endpoint: {path}")]
    UnknownEndpoint {
        /// The path or child name that could not be resolved.
        path: String,
    },

    /// Connection test failed.
    #[error("connection test failed: {message}")]
    ConnectionTest {
        /// Details about why the connection test failed.
        message: String,
    },
}

impl TetherError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        TetherError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        TetherError::Config(message.into())
    }

    /// Creates a validation error.
    pub fn validation(message: impl Into<String>) -> Self {
        TetherError::Validation(message.into())
    }

    /// Creates a not found error for a request path.
    pub fn not_found(path: impl Into<String>) -> Self {
        TetherError::NotFound { path: path.into() }
    }

    /// Creates a timeout error.
    pub fn timeout(duration: Duration, operation: impl Into<String>) -> Self {
        TetherError::Timeout {
            duration,
            operation: operation.into(),
        }
    }

    /// Creates an error for a verb the endpoint does not declare.
    pub fn unsupported(verb: Verb, path: impl Into<String>) -> Self {
        TetherError::UnsupportedOperation {
            verb,
            path: path.into(),
        }
    }

    /// Creates an error for an unresolvable endpoint name or path.
    pub fn unknown_endpoint(path: impl Into<String>) -> Self {
        TetherError::UnknownEndpoint { path: path.into() }
    }

    /// Creates a connection test error.
    pub fn connection_test(message: impl Into<String>) -> Self {
        TetherError::ConnectionTest {
            message: message.into(),
        }
    }

    /// Returns true if this error came from the transport: a network failure
    /// or a non-success HTTP status.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(
            self,
            TetherError::Http(_)
                | TetherError::HttpStatus { .. }
                | TetherError::Timeout { .. }
                | TetherError::RateLimited { .. }
                | TetherError::ServiceUnavailable { .. }
                | TetherError::Authentication
                | TetherError::NotFound { .. }
        )
    }

    /// Returns true if this error is transient and the transport may retry it.
    ///
    /// Retryable errors include:
    /// - Rate limiting (HTTP 429)
    /// - Service unavailable (HTTP 502, 503, 504)
    /// - Timeouts and connection failures
    #[must_use]
    pub fn is_retryable(&self) -> bool {
        match self {
            TetherError::RateLimited { .. } => true,
            TetherError::ServiceUnavailable { .. } => true,
            TetherError::Timeout { .. } => true,
            TetherError::Http(e) => e.is_timeout() || e.is_connect(),
            TetherError::HttpStatus { status, .. } => {
                matches!(status.as_u16(), 429 | 502 | 503 | 504)
            }
            _ => false,
        }
    }

    /// Returns true if this is a rate limit error, indicating we should back off.
    #[must_use]
    pub fn is_rate_limit(&self) -> bool {
        matches!(self, TetherError::RateLimited { .. })
            || matches!(self, TetherError::HttpStatus { status, .. } if status.as_u16() == 429)
    }

    /// Returns the suggested delay before retry, if any.
    #[must_use]
    pub fn retry_after(&self) -> Option<Duration> {
        match self {
            TetherError::RateLimited { retry_after } => *retry_after,
            TetherError::ServiceUnavailable { .. } => Some(Duration::from_millis(500)),
            TetherError::Timeout { .. } => Some(Duration::from_millis(100)),
            _ => None,
        }
    }

    /// Replaces every occurrence of each secret in `message` with `[REDACTED]`.
    ///
    /// Empty secrets are skipped.
    #[must_use]
    pub fn sanitize_message(message: &str, secrets: &[&str]) -> String {
        secrets
            .iter()
            .filter(|secret| !secret.is_empty())
            .fold(message.to_string(), |acc, secret| {
                acc.replace(secret, "[REDACTED]")
            })
    }

    /// Creates a sanitized version of this error's display message.
    #[must_use]
    pub fn sanitized_display(&self, secrets: &[&str]) -> String {
        Self::sanitize_message(&self.to_string(), secrets)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = TetherError::missing_env("CW_PRIVATE_KEY");
        assert!(err.to_string().contains("CW_PRIVATE_KEY"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_validation_error() {
        let err = TetherError::validation("page must be at least 1");
        assert_eq!(err.to_string(), "validation error: page must be at least 1");
    }

    #[test]
    fn test_unsupported_operation_names_verb_and_path() {
        let err = TetherError::unsupported(Verb::Delete, "service/teams");
        assert_eq!(err.to_string(), "DELETE is not supported by /service/teams");
        assert!(!err.is_transport());
    }

    #[test]
    fn test_timeout_error() {
        let err = TetherError::timeout(Duration::from_secs(30), "GET company/companies");
        let msg = err.to_string();
        assert!(msg.contains("timed out"));
        assert!(msg.contains("30s"));
        assert!(err.is_transport());
    }

    #[test]
    fn test_deserialization_is_not_transport() {
        let json_err = serde_json::from_str::<u32>("\"nope\"").unwrap_err();
        let err = TetherError::from(json_err);
        assert!(matches!(err, TetherError::Deserialization(_)));
        assert!(!err.is_transport());
        assert!(!err.is_retryable());
    }

    #[test]
    fn test_is_retryable_rate_limited() {
        let err = TetherError::RateLimited { retry_after: None };
        assert!(err.is_retryable());
        assert!(err.is_rate_limit());
    }

    #[test]
    fn test_is_retryable_service_unavailable() {
        let err = TetherError::ServiceUnavailable {
            status: reqwest::StatusCode::BAD_GATEWAY,
        };
        assert!(err.is_retryable());
        assert!(!err.is_rate_limit());
    }

    #[test]
    fn test_internal_server_error_is_not_retryable() {
        let err = TetherError::HttpStatus {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
            body: String::new(),
        };
        assert!(!err.is_retryable());

        let err = TetherError::HttpStatus {
            status: reqwest::StatusCode::GATEWAY_TIMEOUT,
            body: String::new(),
        };
        assert!(err.is_retryable());
    }

    #[test]
    fn test_is_retryable_not_found() {
        let err = TetherError::not_found("company/companies/12");
        assert!(!err.is_retryable());
        assert!(err.is_transport());
    }

    #[test]
    fn test_sanitize_message_removes_every_secret() {
        let message = "auth acme+pub123:priv456 rejected for priv456";
        let sanitized = TetherError::sanitize_message(message, &["pub123", "priv456"]);
        assert!(!sanitized.contains("pub123"));
        assert!(!sanitized.contains("priv456"));
        assert_eq!(sanitized.matches("[REDACTED]").count(), 3);
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "Some error message";
        let sanitized = TetherError::sanitize_message(message, &[""]);
        assert_eq!(sanitized, message);
    }

    #[test]
    fn test_retry_after_rate_limited() {
        let err = TetherError::RateLimited {
            retry_after: Some(Duration::from_secs(5)),
        };
        assert_eq!(err.retry_after(), Some(Duration::from_secs(5)));
    }

    #[test]
    fn test_connection_test_error() {
        let err = TetherError::connection_test("Could not reach server");
        let msg = err.to_string();
        assert!(msg.contains("connection test failed"));
        assert!(msg.contains("Could not reach server"));
    }
}
