//! MCP server implementation for semsla.
//!
//! This module defines the `SemslaServer` struct that implements the MCP
//! `ServerHandler` trait, exposing the SLA document service operations as
//! tools. The server is the presentation layer: it collects inputs from the
//! MCP client, calls [`SemslaClient`], and renders results or errors as text.

use rmcp::{
    handler::server::{router::tool::ToolRouter, wrapper::Parameters},
    model::{ServerCapabilities, ServerInfo},
    tool, tool_handler, tool_router, ServerHandler,
};

use crate::client::SemslaClient;
use crate::config::Config;
use crate::error::SemslaError;
use crate::models::{LoginResult, RawResult};
use crate::tools::{
    CheckSlaInput, CredentialsInput, DeleteDocumentInput, DocumentInput, SearchInput,
    SetServerInput, SetTokenInput,
};

/// The semsla MCP server.
#[derive(Clone)]
pub struct SemslaServer {
    /// Client holding the shared session.
    client: SemslaClient,
    /// Tool router for MCP tool dispatch.
    tool_router: ToolRouter<Self>,
}

#[tool_router]
impl SemslaServer {
    /// Creates a new server instance around `client`.
    pub fn new(client: SemslaClient) -> Self {
        Self {
            client,
            tool_router: Self::tool_router(),
        }
    }

    /// Returns "pong"; used to check the server is up.
    #[tool(description = "Test connectivity to the semsla MCP server. Returns 'pong' if the server is running correctly.")]
    fn ping(&self) -> String {
        tracing::debug!("ping tool called");
        "pong".to_string()
    }

    #[tool(description = "Set the base URL of the SLA document service, e.g. https://sla.example.com. The current token is kept.")]
    fn set_server(
        &self,
        Parameters(input): Parameters<SetServerInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(base_url = %input.base_url, "set_server tool called");

        let base_url = Config::validate_base_url(input.base_url).map_err(|e| e.to_string())?;
        self.client.session().set_base_url(base_url.as_str());

        Ok(format!("Server set to {}", base_url))
    }

    #[tool(description = "Use an existing bearer token for authenticated operations instead of logging in.")]
    fn set_token(&self, Parameters(input): Parameters<SetTokenInput>) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!("set_token tool called");

        if input.token.is_empty() {
            return Err("Token is required and cannot be empty. Use logout to clear it.".to_string());
        }
        self.client.session().set_token(input.token);

        Ok("Token stored for this session.".to_string())
    }

    #[tool(description = "Forget the bearer token of the current session.")]
    fn logout(&self) -> String {
        tracing::debug!("logout tool called");
        self.client.session().clear_token();
        "Token cleared.".to_string()
    }

    /// Log in and keep the returned token for subsequent tools.
    #[tool(description = "Log in with username and password. The returned token is kept for the upload, update, delete, check_sla and search tools.")]
    async fn login(
        &self,
        Parameters(input): Parameters<CredentialsInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(username = %input.username, "login tool called");

        let result = self
            .client
            .login(&input.to_credentials())
            .await
            .map_err(|e| self.report("Login failed", &e))?;

        Ok(format_login_result(&result))
    }

    #[tool(description = "Register a new account with username and password.")]
    async fn register(
        &self,
        Parameters(input): Parameters<CredentialsInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(username = %input.username, "register tool called");

        let result = self
            .client
            .register(&input.to_credentials())
            .await
            .map_err(|e| self.report("Registration failed", &e))?;

        Ok(format_raw_result("Account registered", &result))
    }

    /// Upload a local file as a new document.
    #[tool(description = "Upload a local file as a document. Document ID and file path are required; requires a token.")]
    async fn upload_document(
        &self,
        Parameters(input): Parameters<DocumentInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(document_id = %input.document_id, "upload_document tool called");

        let result = self
            .client
            .upload(&input.to_document_ref())
            .await
            .map_err(|e| self.report("Document upload failed", &e))?;

        Ok(format_raw_result(
            &format!("Document {} uploaded", input.document_id),
            &result,
        ))
    }

    #[tool(description = "Replace the file of an existing document. Document ID and file path are required; requires a token.")]
    async fn update_document(
        &self,
        Parameters(input): Parameters<DocumentInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(document_id = %input.document_id, "update_document tool called");

        let result = self
            .client
            .update(&input.to_document_ref())
            .await
            .map_err(|e| self.report("Document update failed", &e))?;

        Ok(format_raw_result(
            &format!("Document {} updated", input.document_id),
            &result,
        ))
    }

    #[tool(description = "Delete a document by ID. Requires a token.")]
    async fn delete_document(
        &self,
        Parameters(input): Parameters<DeleteDocumentInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(document_id = %input.document_id, "delete_document tool called");

        let result = self
            .client
            .delete(&input.document_id)
            .await
            .map_err(|e| self.report("Document deletion failed", &e))?;

        Ok(format_raw_result(
            &format!("Document {} deleted", input.document_id),
            &result,
        ))
    }

    /// Evaluate a ticket against the configured SLAs.
    ///
    /// Returns SLA info, whether it is violated, elapsed time and cache status.
    #[tool(description = "Check the SLA for a ticket. Title and message are required; requires a token. Returns SLA info, violation flag, elapsed time and cache status.")]
    async fn check_sla(
        &self,
        Parameters(input): Parameters<CheckSlaInput>,
    ) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(title = %input.title, "check_sla tool called");

        let result = self
            .client
            .check_sla(&input.to_request())
            .await
            .map_err(|e| self.report("SLA check failed", &e))?;

        Ok(result.to_string())
    }

    #[tool(description = "Search the known-issues index for a proposed solution. Query is required; requires a token.")]
    async fn search(&self, Parameters(input): Parameters<SearchInput>) -> Result<String, String> {
        let input = input.sanitize();
        tracing::debug!(query = %input.query, "search tool called");

        let result = self
            .client
            .search(&input.to_request())
            .await
            .map_err(|e| self.report("Search failed", &e))?;

        Ok(result.to_string())
    }

    /// Logs a failed operation and renders it for the MCP client, token redacted.
    fn report(&self, action: &str, error: &SemslaError) -> String {
        let sanitized = self.client.sanitize_error(error);
        if error.is_validation() {
            tracing::warn!(error = %sanitized, "{}", action);
        } else {
            tracing::error!(error = %sanitized, "{}", action);
        }
        format!("{}: {}", action, sanitized)
    }
}

#[tool_handler]
impl ServerHandler for SemslaServer {
    /// Returns server information for the MCP initialize handshake.
    fn get_info(&self) -> ServerInfo {
        ServerInfo {
            instructions: Some(
                "semsla manages a session with the SLA document service. \
                 Use set_server if the configured server is wrong, then login \
                 (or set_token) to authenticate. Afterwards use upload_document, \
                 update_document and delete_document for documents, check_sla \
                 to evaluate a ticket, and search to look up known issues. \
                 Start with 'ping' to verify connectivity."
                    .into(),
            ),
            capabilities: ServerCapabilities::builder().enable_tools().build(),
            ..Default::default()
        }
    }
}

// ============================================================================
// Response formatting helpers
// ============================================================================

/// Formats a login result, noting whether a token was stored.
fn format_login_result(result: &LoginResult) -> String {
    let status = if result.token.is_some() {
        "Login successful. Token stored for this session."
    } else {
        "Login successful, but no token was found in the response. \
         Use set_token with the token from the response below."
    };
    // Shown verbatim, token included.
    format!("{}\n\nResponse:\n{}", status, display_body(&result.raw_body))
}

/// Formats a pass-through result.
fn format_raw_result(headline: &str, result: &RawResult) -> String {
    format!("{}.\n\nResponse:\n{}", headline, display_body(&result.raw_body))
}

fn display_body(body: &str) -> &str {
    if body.trim().is_empty() {
        "(empty)"
    } else {
        body
    }
}
