//! SLA check models.
//!
//! The check-sla endpoint returns a JSON object without a guaranteed schema.
//! [`SlaResult::from_value`] maps it field by field; a missing, null or
//! oddly-typed field falls back to that field's default and never fails the
//! whole mapping.

use std::fmt;

use serde::Serialize;
use serde_json::Value;

use super::{any_text, number, present, scalar_text};

/// Shown when the response has no usable `sla_info`.
pub const NO_SLA_INFO: &str = "No SLA Info provided";

/// Shown when the response has no usable `cache_hit`.
pub const UNKNOWN_CACHE_HIT: &str = "Unknown";

/// Title and message submitted for SLA evaluation.
#[derive(Debug, Clone, Serialize)]
pub struct SlaRequest {
    /// Ticket title.
    pub title: String,
    /// Ticket message body.
    pub message: String,
}

impl SlaRequest {
    /// Creates an SLA request.
    pub fn new(title: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            message: message.into(),
        }
    }
}

/// Outcome of an SLA check.
#[derive(Debug, Clone, PartialEq)]
pub struct SlaResult {
    /// SLA description, or [`NO_SLA_INFO`].
    pub sla_info: String,

    /// Whether the server flagged the SLA as violated.
    ///
    /// Any non-empty `sla_violated` value counts, including the text `"false"`.
    pub sla_violated: bool,

    /// Server-side processing time, if reported.
    pub elapsed_time_seconds: Option<f64>,

    /// Cache indicator as text, or [`UNKNOWN_CACHE_HIT`].
    pub cache_hit: String,
}

impl Default for SlaResult {
    fn default() -> Self {
        Self {
            sla_info: NO_SLA_INFO.to_string(),
            sla_violated: false,
            elapsed_time_seconds: None,
            cache_hit: UNKNOWN_CACHE_HIT.to_string(),
        }
    }
}

impl SlaResult {
    /// Maps a parsed response body into a result.
    ///
    /// Non-object values map to [`SlaResult::default`].
    pub fn from_value(value: &Value) -> Self {
        let Some(object) = value.as_object() else {
            return Self::default();
        };

        let sla_info = present(object, "sla_info")
            .and_then(scalar_text)
            .unwrap_or_else(|| NO_SLA_INFO.to_string());

        let sla_violated = present(object, "sla_violated")
            .and_then(scalar_text)
            .is_some_and(|text| !text.is_empty());

        let elapsed_time_seconds = present(object, "elapsed_time").and_then(number);

        let cache_hit = present(object, "cache_hit")
            .and_then(any_text)
            .unwrap_or_else(|| UNKNOWN_CACHE_HIT.to_string());

        Self {
            sla_info,
            sla_violated,
            elapsed_time_seconds,
            cache_hit,
        }
    }

    /// Elapsed time as display text: `"3.5 seconds"` or `"N/A"`.
    pub fn display_elapsed_time(&self) -> String {
        self.elapsed_time_seconds
            .map(|secs| format!("{} seconds", secs))
            .unwrap_or_else(|| "N/A".to_string())
    }
}

impl fmt::Display for SlaResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "SLA Info:\n{}\n\nSLA Violated: {}\n\nElapsed Time: {}\n\nCache Hit: {}",
            self.sla_info,
            if self.sla_violated { "Yes" } else { "No" },
            self.display_elapsed_time(),
            self.cache_hit
        )
    }
}
