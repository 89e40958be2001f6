//! Client facade binding the services to one shared session.
//!
//! Each operation takes a snapshot of the session, runs the corresponding
//! service call, and (for `login`) stores the returned token. The services
//! can also be used directly with an explicit [`Session`].
//!
//! # Security
//!
//! The bearer token is never logged. Use [`SemslaClient::sanitize_error`]
//! before showing an error to a user.

use crate::auth::AuthService;
use crate::config::Config;
use crate::documents::DocumentService;
use crate::error::SemslaError;
use crate::models::{
    Credentials, DeleteResult, DocumentRef, LoginResult, RegisterResult, SearchRequest,
    SearchResult, SlaRequest, SlaResult, UpdateResult, UploadResult,
};
use crate::search::SearchService;
use crate::session::{Session, SharedSession};
use crate::sla::SlaService;
use crate::transport::HttpTransport;

/// Session-holding client for the SLA document service.
///
/// Cloning is cheap; clones share the session and connection pool.
///
/// # Example
///
/// ```ignore
/// let config = Config::new("https://sla.example.com")?;
/// let client = SemslaClient::new(&config)?;
///
/// client.login(&Credentials::new("alice", "secret")).await?;
/// let result = client.check_sla(&SlaRequest::new("VPN down", "Since 9am")).await?;
/// println!("{}", result);
/// ```
#[derive(Clone)]
pub struct SemslaClient {
    session: SharedSession,
    auth: AuthService,
    documents: DocumentService,
    sla: SlaService,
    search: SearchService,
}

impl SemslaClient {
    /// Creates a client from configuration.
    ///
    /// # Errors
    ///
    /// Returns `SemslaError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(config: &Config) -> Result<Self, SemslaError> {
        let transport = HttpTransport::new(config.timeout)?;

        let mut session = Session::new(config.base_url.as_str());
        if let Some(token) = &config.token {
            session.set_token(token.as_str());
        }

        Ok(Self::with_transport(transport, SharedSession::new(session)))
    }

    /// Creates a client from an existing transport and session.
    pub fn with_transport(transport: HttpTransport, session: SharedSession) -> Self {
        Self {
            session,
            auth: AuthService::new(transport.clone()),
            documents: DocumentService::new(transport.clone()),
            sla: SlaService::new(transport.clone()),
            search: SearchService::new(transport),
        }
    }

    /// The shared session.
    pub fn session(&self) -> &SharedSession {
        &self.session
    }

    /// Logs in and, when the response carries a token, stores it in the session.
    pub async fn login(&self, credentials: &Credentials) -> Result<LoginResult, SemslaError> {
        let result = self.auth.login(&self.session.snapshot(), credentials).await?;
        self.session.apply_login(&result);
        Ok(result)
    }

    /// Registers a new account.
    pub async fn register(
        &self,
        credentials: &Credentials,
    ) -> Result<RegisterResult, SemslaError> {
        self.auth
            .register(&self.session.snapshot(), credentials)
            .await
    }

    /// Uploads a document.
    pub async fn upload(&self, doc: &DocumentRef) -> Result<UploadResult, SemslaError> {
        self.documents.upload(&self.session.snapshot(), doc).await
    }

    /// Replaces a document's file.
    pub async fn update(&self, doc: &DocumentRef) -> Result<UpdateResult, SemslaError> {
        self.documents.update(&self.session.snapshot(), doc).await
    }

    /// Deletes a document.
    pub async fn delete(&self, document_id: &str) -> Result<DeleteResult, SemslaError> {
        self.documents
            .delete(&self.session.snapshot(), document_id)
            .await
    }

    /// Runs an SLA check.
    pub async fn check_sla(&self, request: &SlaRequest) -> Result<SlaResult, SemslaError> {
        self.sla.check_sla(&self.session.snapshot(), request).await
    }

    /// Runs a knowledge search.
    pub async fn search(&self, request: &SearchRequest) -> Result<SearchResult, SemslaError> {
        self.search.search(&self.session.snapshot(), request).await
    }

    /// Logs the session the client starts with. The token value is never logged.
    pub fn log_session(&self) {
        let session = self.session.snapshot();
        tracing::info!(
            base_url = %session.base_url(),
            token_preseeded = session.token().is_some(),
            "Session ready"
        );
        if session.token().is_none() {
            tracing::info!("No token configured; log in or set a token first");
        }
    }

    /// Error display text with the current bearer token redacted.
    pub fn sanitize_error(&self, error: &SemslaError) -> String {
        let session = self.session.snapshot();
        error.sanitized_display(session.token().unwrap_or_default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_client() -> SemslaClient {
        let config = Config::new("http://localhost:5000")
            .unwrap()
            .with_token("cfg-token");
        SemslaClient::new(&config).expect("Failed to create test client")
    }

    #[test]
    fn test_new_seeds_session_from_config() {
        let client = test_client();
        let session = client.session().snapshot();
        assert_eq!(session.base_url(), "http://localhost:5000");
        assert_eq!(session.token(), Some("cfg-token"));
    }

    #[test]
    fn test_clones_share_session() {
        let client = test_client();
        let other = client.clone();
        other.session().set_token("rotated");
        assert_eq!(client.session().snapshot().token(), Some("rotated"));
    }

    #[test]
    fn test_sanitize_error_redacts_token() {
        let client = test_client();
        let err = SemslaError::HttpStatus {
            status: reqwest::StatusCode::UNAUTHORIZED,
            body: "token cfg-token expired".to_string(),
        };
        let text = client.sanitize_error(&err);
        assert!(!text.contains("cfg-token"));
        assert!(text.contains("[REDACTED]"));
    }

    #[tokio::test]
    async fn test_operations_without_token_fail_fast() {
        let client = test_client();
        client.session().clear_token();

        let err = client.delete("DOC-1").await.unwrap_err();
        assert!(err.is_validation());

        let err = client
            .check_sla(&SlaRequest::new("title", "message"))
            .await
            .unwrap_err();
        assert!(err.is_validation());
    }
}
