//! Login models.

use serde_json::Value;

use super::{present, ApiResponse};

/// Token field names recognized in a login response, in priority order.
const TOKEN_FIELDS: [&str; 2] = ["access_token", "token"];

/// Result of a successful login.
#[derive(Clone, PartialEq, Eq)]
pub struct LoginResult {
    /// The response body exactly as the server sent it.
    pub raw_body: String,

    /// Bearer token found in the body, if the body is a JSON object carrying one.
    pub token: Option<String>,
}

impl LoginResult {
    /// Builds a login result from the raw response, extracting the token when possible.
    ///
    /// The login response schema is not guaranteed; a body without a
    /// recognizable token still yields a result, with `token` set to `None`.
    pub fn from_response(response: ApiResponse) -> Self {
        let token = Self::extract_token(&response.raw_body);
        Self {
            raw_body: response.raw_body,
            token,
        }
    }

    fn extract_token(body: &str) -> Option<String> {
        let value: Value = serde_json::from_str(body).ok()?;
        let object = value.as_object()?;

        TOKEN_FIELDS.iter().find_map(|field| {
            present(object, field)
                .and_then(Value::as_str)
                .map(str::trim)
                .filter(|token| !token.is_empty())
                .map(str::to_string)
        })
    }
}

impl std::fmt::Debug for LoginResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("LoginResult")
            .field("raw_body_len", &self.raw_body.len())
            .field("has_token", &self.token.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn login(body: &str) -> LoginResult {
        LoginResult::from_response(ApiResponse {
            status_code: 200,
            raw_body: body.to_string(),
        })
    }

    #[test]
    fn test_extracts_access_token() {
        let result = login(r#"{"access_token": "abc.def.ghi"}"#);
        assert_eq!(result.token.as_deref(), Some("abc.def.ghi"));
        assert_eq!(result.raw_body, r#"{"access_token": "abc.def.ghi"}"#);
    }

    #[test]
    fn test_falls_back_to_token_field() {
        let result = login(r#"{"token": "t1"}"#);
        assert_eq!(result.token.as_deref(), Some("t1"));
    }

    #[test]
    fn test_non_json_body_has_no_token() {
        let result = login("welcome back");
        assert!(result.token.is_none());
        assert_eq!(result.raw_body, "welcome back");
    }

    #[test]
    fn test_non_string_token_is_ignored() {
        assert!(login(r#"{"access_token": 42}"#).token.is_none());
        assert!(login(r#"{"access_token": ""}"#).token.is_none());
        assert!(login(r#"["access_token"]"#).token.is_none());
    }

    #[test]
    fn test_debug_hides_body() {
        let result = login(r#"{"access_token": "secret"}"#);
        assert!(!format!("{:?}", result).contains("secret"));
    }
}
