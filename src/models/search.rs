//! Knowledge search models.
//!
//! The search endpoint answers `{"response": ..., "cached": "true"|"false", "time": 1.2}`.
//! Like the SLA response, it is mapped leniently.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::{number, present, scalar_text};

/// Shown when the response carries no usable `response` field.
pub const NO_SOLUTION: &str = "No solution available";

/// A free-text query against the known-issues index.
#[derive(Debug, Clone, Serialize)]
pub struct SearchRequest {
    /// The query text.
    pub query: String,
}

impl SearchRequest {
    /// Creates a search request.
    pub fn new(query: impl Into<String>) -> Self {
        Self {
            query: query.into(),
        }
    }
}

/// Outcome of a knowledge search.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchResult {
    /// Proposed solution text, or [`NO_SOLUTION`].
    pub response: String,

    /// Whether the answer came from the server's cache.
    pub cached: bool,

    /// Server-side processing time, if reported.
    pub elapsed_time_seconds: Option<f64>,
}

impl Default for SearchResult {
    fn default() -> Self {
        Self {
            response: NO_SOLUTION.to_string(),
            cached: false,
            elapsed_time_seconds: None,
        }
    }
}

impl SearchResult {
    /// Maps a parsed response body into a result.
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let response = present(object, "response")
            .and_then(scalar_text)
            .unwrap_or_else(|| NO_SOLUTION.to_string());

        // The server sends "true"/"false" as strings.
        let cached = match present(object, "cached") {
            Some(Value::Bool(b)) => *b,
            Some(Value::String(s)) => s.trim().eq_ignore_ascii_case("true"),
            _ => false,
        };

        let elapsed_time_seconds = present(object, "time").and_then(number);

        Self {
            response,
            cached,
            elapsed_time_seconds,
        }
    }
}

impl fmt::Display for SearchResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let elapsed = self
            .elapsed_time_seconds
            .map(|secs| format!("{} seconds", secs))
            .unwrap_or_else(|| "N/A".to_string());
        write!(
            f,
            "Response:\n{}\n\nCached: {}\n\nElapsed Time: {}",
            self.response,
            if self.cached { "Yes" } else { "No" },
            elapsed
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_server_shape() {
        let result = SearchResult::from_value(&json!({
            "response": "Restart the spooler",
            "cached": "true",
            "time": 0.42
        }));
        assert_eq!(result.response, "Restart the spooler");
        assert!(result.cached);
        assert_eq!(result.elapsed_time_seconds, Some(0.42));
    }

    #[test]
    fn test_cached_false_string_is_not_cached() {
        let result = SearchResult::from_value(&json!({"cached": "false"}));
        assert!(!result.cached);
    }

    #[test]
    fn test_missing_fields_use_defaults() {
        assert_eq!(SearchResult::from_value(&json!({})), SearchResult::default());
        assert_eq!(SearchResult::from_value(&json!(null)), SearchResult::default());
    }

    #[test]
    fn test_display() {
        let text = SearchResult::default().to_string();
        assert_eq!(
            text,
            "Response:\nNo solution available\n\nCached: No\n\nElapsed Time: N/A"
        );
    }
}
