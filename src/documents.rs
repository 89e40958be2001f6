//! Document operations: upload, update and delete.
//!
//! Upload and update send the same two-part multipart body:
//!
//! - `tc_doc_id`: the document identifier, as text
//! - `files`: the file contents, named with the file's base name
//!
//! All inputs are validated, and the file is read, before any request is sent.

use std::path::Path;

use reqwest::Method;

use crate::error::{SemslaError, ValidationError};
use crate::models::{DeleteResult, DocumentRef, RawResult, UpdateResult, UploadResult};
use crate::session::Session;
use crate::transport::{HttpTransport, MultipartPart, RequestBody};

const UPLOAD_PATH: &str = "/api/v1/upload-documents";
const UPDATE_PATH: &str = "/api/v1/update-document";
const DELETE_PATH: &str = "/api/v1/delete-document";

/// Form field carrying the document identifier.
pub const DOC_ID_FIELD: &str = "tc_doc_id";

/// Form field carrying the file contents.
pub const FILES_FIELD: &str = "files";

/// Uploads, updates and deletes documents.
#[derive(Clone)]
pub struct DocumentService {
    transport: HttpTransport,
}

impl DocumentService {
    /// Creates the service on top of `transport`.
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Uploads a new document (POST).
    ///
    /// # Errors
    ///
    /// - `Validation` for a missing base URL, token, document id or file path,
    ///   or an unreadable file; nothing is sent in these cases
    /// - `HttpStatus` / `Transport` from the server exchange
    pub async fn upload(
        &self,
        session: &Session,
        doc: &DocumentRef,
    ) -> Result<UploadResult, SemslaError> {
        self.send_document(session, doc, Method::POST, UPLOAD_PATH)
            .await
    }

    /// Replaces an existing document's file (PUT).
    ///
    /// # Errors
    ///
    /// Same as [`DocumentService::upload`].
    pub async fn update(
        &self,
        session: &Session,
        doc: &DocumentRef,
    ) -> Result<UpdateResult, SemslaError> {
        self.send_document(session, doc, Method::PUT, UPDATE_PATH)
            .await
    }

    /// Deletes a document by identifier.
    ///
    /// # Errors
    ///
    /// - `Validation` for a missing base URL, token or document id
    /// - `HttpStatus` / `Transport` from the server exchange
    pub async fn delete(
        &self,
        session: &Session,
        document_id: &str,
    ) -> Result<DeleteResult, SemslaError> {
        let (url, authorization, document_id) = Self::prepare(session, DELETE_PATH, document_id)?;
        let url = format!(
            "{}?{}={}",
            url,
            DOC_ID_FIELD,
            urlencoding::encode(document_id)
        );

        tracing::debug!(document_id = %document_id, "Deleting document");

        let response = self
            .transport
            .send(
                Method::DELETE,
                &url,
                RequestBody::Empty,
                &[("Authorization", authorization)],
            )
            .await?;

        tracing::info!(document_id = %document_id, "Document deleted");
        Ok(response.into())
    }

    async fn send_document(
        &self,
        session: &Session,
        doc: &DocumentRef,
        method: Method,
        path: &str,
    ) -> Result<RawResult, SemslaError> {
        let (url, authorization, document_id) = Self::prepare(session, path, &doc.document_id)?;
        let parts = document_form(document_id, &doc.file_path).await?;

        tracing::debug!(
            method = %method,
            document_id = %document_id,
            file_path = %doc.file_path,
            "Sending document"
        );

        let response = self
            .transport
            .send(
                method,
                &url,
                RequestBody::Multipart(parts),
                &[("Authorization", authorization)],
            )
            .await?;

        tracing::info!(document_id = %document_id, path = %path, "Document sent");
        Ok(response.into())
    }

    /// Checks base URL, token and document id, in that order.
    ///
    /// Returns the endpoint URL, the `Authorization` value and the trimmed id.
    fn prepare<'a>(
        session: &Session,
        path: &str,
        document_id: &'a str,
    ) -> Result<(String, String, &'a str), SemslaError> {
        let url = session.endpoint(path)?;
        let authorization = session.require_authorization()?;
        let document_id = document_id.trim();
        if document_id.is_empty() {
            return Err(SemslaError::missing("document_id"));
        }
        Ok((url, authorization, document_id))
    }
}

/// Builds the two-part form for `document_id` and the file at `file_path`.
///
/// The file is read once, fully, into memory.
///
/// # Errors
///
/// `MissingField("file_path")` for a blank path, `FileNotReadable` if the
/// file cannot be read or the path has no file name.
pub async fn document_form(
    document_id: &str,
    file_path: &str,
) -> Result<Vec<MultipartPart>, SemslaError> {
    if file_path.trim().is_empty() {
        return Err(SemslaError::missing("file_path"));
    }

    let not_readable = |reason: String| ValidationError::FileNotReadable {
        path: file_path.to_string(),
        reason,
    };

    let file_name = Path::new(file_path)
        .file_name()
        .map(|name| name.to_string_lossy().into_owned())
        .ok_or_else(|| not_readable("path has no file name".to_string()))?;

    let bytes = tokio::fs::read(file_path)
        .await
        .map_err(|e| not_readable(e.to_string()))?;

    Ok(vec![
        MultipartPart::text(DOC_ID_FIELD, document_id),
        MultipartPart::file(FILES_FIELD, file_name, bytes),
    ])
}
