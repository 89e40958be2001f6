//! Account operations: login and registration.

use reqwest::Method;

use crate::error::SemslaError;
use crate::models::{ApiResponse, Credentials, LoginResult, RegisterResult};
use crate::session::Session;
use crate::transport::{HttpTransport, RequestBody};

const LOGIN_PATH: &str = "/api/v1/login";
const REGISTER_PATH: &str = "/api/v1/register";

/// Exchanges credentials for a bearer token.
#[derive(Clone)]
pub struct AuthService {
    transport: HttpTransport,
}

impl AuthService {
    /// Creates the service on top of `transport`.
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Logs in with `credentials`.
    ///
    /// The returned result always carries the raw response body; its `token`
    /// is set when the body is a JSON object with an `access_token` (or
    /// `token`) string. Storing the token is up to the caller, see
    /// [`SharedSession::apply_login`](crate::session::SharedSession::apply_login).
    ///
    /// # Errors
    ///
    /// - `Validation` if username, password or base URL is missing (no request is sent)
    /// - `HttpStatus` / `Transport` from the server exchange, unmodified
    pub async fn login(
        &self,
        session: &Session,
        credentials: &Credentials,
    ) -> Result<LoginResult, SemslaError> {
        let response = self.post_credentials(session, LOGIN_PATH, credentials).await?;
        let result = LoginResult::from_response(response);

        if result.token.is_some() {
            tracing::info!(username = %credentials.username.trim(), "Login succeeded");
        } else {
            tracing::warn!("Login succeeded but the response carried no recognizable token");
        }

        Ok(result)
    }

    /// Registers a new account.
    ///
    /// # Errors
    ///
    /// Same as [`AuthService::login`].
    pub async fn register(
        &self,
        session: &Session,
        credentials: &Credentials,
    ) -> Result<RegisterResult, SemslaError> {
        let response = self
            .post_credentials(session, REGISTER_PATH, credentials)
            .await?;
        tracing::info!(username = %credentials.username.trim(), "Account registered");
        Ok(response.into())
    }

    async fn post_credentials(
        &self,
        session: &Session,
        path: &str,
        credentials: &Credentials,
    ) -> Result<ApiResponse, SemslaError> {
        let credentials = Self::validate(credentials)?;
        let url = session.endpoint(path)?;

        tracing::debug!(username = %credentials.username, path = %path, "Posting credentials");

        let body = RequestBody::Json(serde_json::to_value(&credentials)?);
        self.transport.send(Method::POST, &url, body, &[]).await
    }

    /// Trims both fields and rejects blanks.
    fn validate(credentials: &Credentials) -> Result<Credentials, SemslaError> {
        let credentials = credentials.trimmed();
        if credentials.username.is_empty() {
            return Err(SemslaError::missing("username"));
        }
        if credentials.password.is_empty() {
            return Err(SemslaError::missing("password"));
        }
        Ok(credentials)
    }
}
