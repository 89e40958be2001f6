//! Common types shared across service operations.
//!
//! Besides the plain input/output records, this module holds the accessors
//! used for lenient parsing of loosely-typed JSON responses: each one looks
//! at a single field and returns `None` instead of failing when the field is
//! absent, null, or of a type it cannot use.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::error::SemslaError;

/// Raw outcome of one successful HTTP exchange.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiResponse {
    /// HTTP status code (always 2xx once returned by the transport).
    pub status_code: u16,

    /// Response body as text.
    pub raw_body: String,
}

impl ApiResponse {
    /// Parses the body as an untyped JSON value.
    ///
    /// # Errors
    ///
    /// Returns `SemslaError::MalformedResponse` if the body is not JSON.
    pub fn json(&self) -> Result<Value, SemslaError> {
        serde_json::from_str(&self.raw_body).map_err(|e| SemslaError::MalformedResponse {
            body: self.raw_body.clone(),
            reason: e.to_string(),
        })
    }
}

/// Username and password for the login and register endpoints.
///
/// Transient: services borrow it for the duration of one call only.
#[derive(Clone, Serialize)]
pub struct Credentials {
    /// Account name.
    pub username: String,
    /// Account password.
    pub password: String,
}

impl Credentials {
    /// Creates credentials.
    pub fn new(username: impl Into<String>, password: impl Into<String>) -> Self {
        Self {
            username: username.into(),
            password: password.into(),
        }
    }

    /// Returns a copy with surrounding whitespace removed from both fields.
    #[must_use]
    pub fn trimmed(&self) -> Self {
        Self::new(self.username.trim(), self.password.trim())
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("username", &self.username)
            .field("password", &"[REDACTED]")
            .finish()
    }
}

/// A document identifier paired with the local file that holds its contents.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DocumentRef {
    /// Opaque identifier, sent as `tc_doc_id`.
    pub document_id: String,
    /// Local file read once per upload/update.
    pub file_path: String,
}

impl DocumentRef {
    /// Creates a document reference.
    pub fn new(document_id: impl Into<String>, file_path: impl Into<String>) -> Self {
        Self {
            document_id: document_id.into(),
            file_path: file_path.into(),
        }
    }
}

/// Result of an operation whose success body is passed through unparsed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RawResult {
    /// The response body as returned by the server.
    pub raw_body: String,
}

impl From<ApiResponse> for RawResult {
    fn from(response: ApiResponse) -> Self {
        Self {
            raw_body: response.raw_body,
        }
    }
}

/// Result of registering an account.
pub type RegisterResult = RawResult;
/// Result of uploading a document.
pub type UploadResult = RawResult;
/// Result of updating a document.
pub type UpdateResult = RawResult;
/// Result of deleting a document.
pub type DeleteResult = RawResult;

/// Returns the field `name` of `object` unless it is absent or null.
pub(crate) fn present<'a>(object: &'a Map<String, Value>, name: &str) -> Option<&'a Value> {
    object.get(name).filter(|value| !value.is_null())
}

/// Text form of a scalar: strings verbatim, numbers and booleans as JSON text.
///
/// Arrays, objects and null have no scalar text.
pub(crate) fn scalar_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        Value::Bool(b) => Some(b.to_string()),
        Value::Null | Value::Array(_) | Value::Object(_) => None,
    }
}

/// Text form of any non-null value; composites are rendered as compact JSON.
pub(crate) fn any_text(value: &Value) -> Option<String> {
    match value {
        Value::Null => None,
        Value::Array(_) | Value::Object(_) => Some(value.to_string()),
        scalar => scalar_text(scalar),
    }
}

/// Numeric value of a JSON number or of a string holding one.
pub(crate) fn number(value: &Value) -> Option<f64> {
    match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|n| n.is_finite()),
        _ => None,
    }
}
