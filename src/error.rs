//! Error types for semsla.
//!
//! This module defines `SemslaError`, the unified error type returned by every
//! service operation, and `ValidationError`, the subset raised before any
//! network attempt is made.
//!
//! # Security
//!
//! Bearer tokens must never appear in logs or tool responses. Use
//! `sanitize_message()` / `sanitized_display()` before surfacing an error
//! message to a caller.

use thiserror::Error;

/// Input problems detected locally, before any request leaves the process.
///
/// These are never retried: the caller has to fix the input.
#[derive(Error, Debug)]
pub enum ValidationError {
    /// A required field is missing or blank after trimming.
    #[error("{0} is required")]
    MissingField(&'static str),

    /// The configured server base URL is not an absolute http(s) URL.
    #[error("invalid server URL {0:?}: expected an absolute http:// or https:// URL")]
    InvalidBaseUrl(String),

    /// A local file referenced by a document operation could not be read.
    #[error("file not readable: {path}: {reason}")]
    FileNotReadable {
        /// The path as supplied by the caller.
        path: String,
        /// Why the read failed.
        reason: String,
    },

    /// The HTTP method is not one the service API uses.
    #[error("unsupported HTTP method: {0}")]
    UnsupportedMethod(String),
}

/// Unified error type for all semsla operations.
#[derive(Error, Debug)]
pub enum SemslaError {
    /// Configuration error - missing or invalid environment variables.
    #[error("configuration error: {0}")]
    Config(String),

    /// HTTP client initialization failed.
    #[error("HTTP client error: {0}")]
    HttpClient(#[source] reqwest::Error),

    /// Local input validation failed; no request was sent.
    #[error("validation error: {0}")]
    Validation(#[from] ValidationError),

    /// Connection, DNS or timeout failure. The server-side effect is unknown.
    #[error("transport error: {message}")]
    Transport {
        /// Description of the underlying failure.
        message: String,
        /// Whether the request hit the client timeout.
        timed_out: bool,
    },

    /// The server answered with a non-success status code.
    #[error("HTTP {status}: {body}")]
    HttpStatus {
        /// The HTTP status code returned.
        status: reqwest::StatusCode,
        /// The raw response body, unmodified.
        body: String,
    },

    /// A successful response carried a body that is not JSON at all.
    #[error("malformed response body: {reason}")]
    MalformedResponse {
        /// The raw response body.
        body: String,
        /// The parser's complaint.
        reason: String,
    },

    /// JSON serialization of a request body failed.
    #[error("JSON serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl SemslaError {
    /// Creates a configuration error for a missing environment variable.
    pub fn missing_env(var_name: &str) -> Self {
        SemslaError::Config(format!(
            "missing required environment variable: {}",
            var_name
        ))
    }

    /// Creates a configuration error for an invalid value.
    pub fn invalid_config(message: impl Into<String>) -> Self {
        SemslaError::Config(message.into())
    }

    /// Creates a missing-field validation error.
    pub fn missing(field: &'static str) -> Self {
        SemslaError::Validation(ValidationError::MissingField(field))
    }

    /// Creates a transport error.
    pub fn transport(message: impl Into<String>, timed_out: bool) -> Self {
        SemslaError::Transport {
            message: message.into(),
            timed_out,
        }
    }

    /// Converts a `reqwest` send/read failure into a transport error.
    pub(crate) fn from_reqwest(err: reqwest::Error) -> Self {
        let timed_out = err.is_timeout();
        let message = if timed_out {
            "request timed out".to_string()
        } else if err.is_connect() {
            format!("connection failed: {}", err)
        } else {
            err.to_string()
        };
        SemslaError::Transport { message, timed_out }
    }

    /// Returns true if the error was raised before any network attempt.
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, SemslaError::Validation(_))
    }

    /// Returns true for connection, DNS and timeout failures.
    #[must_use]
    pub fn is_transport(&self) -> bool {
        matches!(self, SemslaError::Transport { .. })
    }

    /// Returns true if the request hit the client timeout.
    #[must_use]
    pub fn is_timeout(&self) -> bool {
        matches!(self, SemslaError::Transport { timed_out: true, .. })
    }

    /// Returns the HTTP status code for `HttpStatus` errors.
    #[must_use]
    pub fn status(&self) -> Option<reqwest::StatusCode> {
        match self {
            SemslaError::HttpStatus { status, .. } => Some(*status),
            _ => None,
        }
    }

    /// Replaces every occurrence of `secret` in `message` with `[REDACTED]`.
    #[must_use]
    pub fn sanitize_message(message: &str, secret: &str) -> String {
        if secret.is_empty() {
            return message.to_string();
        }
        message.replace(secret, "[REDACTED]")
    }

    /// Display message of this error with `secret` redacted.
    #[must_use]
    pub fn sanitized_display(&self, secret: &str) -> String {
        Self::sanitize_message(&self.to_string(), secret)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_env_error() {
        let err = SemslaError::missing_env("SEMSLA_BASE_URL");
        assert!(err.to_string().contains("SEMSLA_BASE_URL"));
        assert!(err.to_string().contains("missing"));
    }

    #[test]
    fn test_missing_field_display() {
        let err = SemslaError::missing("username");
        assert_eq!(err.to_string(), "validation error: username is required");
        assert!(err.is_validation());
        assert!(!err.is_transport());
    }

    #[test]
    fn test_file_not_readable_display() {
        let err = SemslaError::from(ValidationError::FileNotReadable {
            path: "/tmp/nope.pdf".to_string(),
            reason: "No such file or directory".to_string(),
        });
        let msg = err.to_string();
        assert!(msg.contains("/tmp/nope.pdf"));
        assert!(msg.contains("not readable"));
    }

    #[test]
    fn test_transport_timeout_flags() {
        let err = SemslaError::transport("request timed out", true);
        assert!(err.is_transport());
        assert!(err.is_timeout());
        assert_eq!(err.status(), None);
    }

    #[test]
    fn test_http_status_keeps_code_and_body() {
        let err = SemslaError::HttpStatus {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: r#"{"msg":"Invalid credentials"}"#.to_string(),
        };
        assert_eq!(err.status(), Some(reqwest::StatusCode::UNAUTHORIZED));
        assert!(err.to_string().contains("Invalid credentials"));
        assert!(!err.is_validation());
    }

    #[test]
    fn test_sanitize_message_removes_token() {
        let token = "eyJhbGciOiJIUzI1NiJ9.secret";
        let message = format!("Bearer {} rejected", token);
        let sanitized = SemslaError::sanitize_message(&message, token);
        assert!(!sanitized.contains(token));
        assert!(sanitized.contains("[REDACTED]"));
    }

    #[test]
    fn test_sanitize_message_empty_secret() {
        let message = "Some error message";
        assert_eq!(SemslaError::sanitize_message(message, ""), message);
    }
}
