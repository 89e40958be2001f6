//! Tool input parameter structs for MCP tools.
//!
//! This module defines the input types for each MCP tool, with
//! JSON Schema derivation for MCP tool discovery.
//!
//! # Input Sanitization
//!
//! All input structs implement `sanitize()` which trims whitespace
//! from string fields. This should be called before processing input.
//! Passwords are the exception only in that they are never logged;
//! the services trim them like every other field.

use rmcp::schemars::{self, JsonSchema};
use serde::Deserialize;

use crate::models::{Credentials, DocumentRef, SearchRequest, SlaRequest};

/// Input parameters for the set_server tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SetServerInput {
    /// Base URL of the SLA document service (e.g., "https://sla.example.com").
    pub base_url: String,
}

impl SetServerInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            base_url: self.base_url.trim().to_string(),
        }
    }
}

/// Input parameters for the set_token tool.
#[derive(Clone, Deserialize, JsonSchema)]
pub struct SetTokenInput {
    /// Bearer token to use for authenticated operations.
    pub token: String,
}

impl SetTokenInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            token: self.token.trim().to_string(),
        }
    }
}

/// Input parameters for the login and register tools.
#[derive(Clone, Deserialize, JsonSchema)]
pub struct CredentialsInput {
    /// Account user name.
    pub username: String,

    /// Account password.
    pub password: String,
}

impl CredentialsInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            username: self.username.trim().to_string(),
            password: self.password.trim().to_string(),
        }
    }

    /// Converts into service credentials.
    pub fn to_credentials(&self) -> Credentials {
        Credentials::new(self.username.as_str(), self.password.as_str())
    }
}

impl std::fmt::Debug for CredentialsInput {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsInput")
            .field("username", &self.username)
            .finish_non_exhaustive()
    }
}

/// Input parameters for the upload_document and update_document tools.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DocumentInput {
    /// Document identifier (sent as tc_doc_id).
    pub document_id: String,

    /// Path of the local file to send.
    pub file_path: String,
}

impl DocumentInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            document_id: self.document_id.trim().to_string(),
            file_path: self.file_path.trim().to_string(),
        }
    }

    /// Converts into a document reference.
    pub fn to_document_ref(&self) -> DocumentRef {
        DocumentRef::new(self.document_id.as_str(), self.file_path.as_str())
    }
}

/// Input parameters for the delete_document tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct DeleteDocumentInput {
    /// Identifier of the document to delete.
    pub document_id: String,
}

impl DeleteDocumentInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            document_id: self.document_id.trim().to_string(),
        }
    }
}

/// Input parameters for the check_sla tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct CheckSlaInput {
    /// Ticket title.
    pub title: String,

    /// Ticket message body.
    pub message: String,
}

impl CheckSlaInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            title: self.title.trim().to_string(),
            message: self.message.trim().to_string(),
        }
    }

    /// Converts into an SLA request.
    pub fn to_request(&self) -> SlaRequest {
        SlaRequest::new(self.title.as_str(), self.message.as_str())
    }
}

/// Input parameters for the search tool.
#[derive(Debug, Clone, Deserialize, JsonSchema)]
pub struct SearchInput {
    /// Free-text description of the issue.
    pub query: String,
}

impl SearchInput {
    /// Sanitizes input by trimming whitespace from all string fields.
    #[must_use]
    pub fn sanitize(self) -> Self {
        Self {
            query: self.query.trim().to_string(),
        }
    }

    /// Converts into a search request.
    pub fn to_request(&self) -> SearchRequest {
        SearchRequest::new(self.query.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_document_input_sanitize() {
        let input = DocumentInput {
            document_id: "  DOC-1 ".to_string(),
            file_path: " /tmp/a.pdf\n".to_string(),
        }
        .sanitize();
        assert_eq!(input.document_id, "DOC-1");
        assert_eq!(input.file_path, "/tmp/a.pdf");
        assert_eq!(input.to_document_ref(), DocumentRef::new("DOC-1", "/tmp/a.pdf"));
    }

    #[test]
    fn test_credentials_input_debug_hides_password() {
        let input: CredentialsInput =
            serde_json::from_str(r#"{"username": "alice", "password": "hunter2"}"#).unwrap();
        let debug = format!("{:?}", input);
        assert!(debug.contains("alice"));
        assert!(!debug.contains("hunter2"));
    }

    #[test]
    fn test_check_sla_input_deserialize() {
        let input: CheckSlaInput =
            serde_json::from_str(r#"{"title": " Outage ", "message": "VPN down"}"#).unwrap();
        let request = input.sanitize().to_request();
        assert_eq!(request.title, "Outage");
        assert_eq!(request.message, "VPN down");
    }

    #[test]
    fn test_set_server_input_sanitize() {
        let input = SetServerInput {
            base_url: " https://sla.example.com/ ".to_string(),
        }
        .sanitize();
        assert_eq!(input.base_url, "https://sla.example.com/");
    }
}
