//! HTTP transport for the SLA document service.
//!
//! `HttpTransport` performs exactly one HTTP request per call and returns
//! either an [`ApiResponse`] or a [`SemslaError`].
//!
//! # Failure mapping
//!
//! - non-2xx status: `SemslaError::HttpStatus` with the exact body
//! - connection, DNS or timeout failure: `SemslaError::Transport`
//! - non-2xx status whose body cannot be read: `SemslaError::HttpStatus`
//!   with an empty body
//!
//! There is no retry logic here or anywhere above it; the caller decides
//! whether to re-invoke an operation.
//!
//! # Security
//!
//! Header values and response bodies are never logged: the former carry the
//! bearer token and the login response body returns it.

use std::time::Duration;

use reqwest::multipart::{Form, Part};
use reqwest::{Client, Method};

use crate::error::{SemslaError, ValidationError};
use crate::models::ApiResponse;

/// A request body.
#[derive(Debug, Clone, Default)]
pub enum RequestBody {
    /// No body.
    #[default]
    Empty,
    /// A JSON document, sent as `application/json`.
    Json(serde_json::Value),
    /// An ordered multipart form.
    Multipart(Vec<MultipartPart>),
}

/// One named part of a multipart body.
#[derive(Clone, PartialEq, Eq)]
pub enum MultipartPart {
    /// A plain text field.
    Text {
        /// Field name.
        name: String,
        /// Field value.
        value: String,
    },
    /// A binary file attachment.
    File {
        /// Field name.
        name: String,
        /// File name reported to the server.
        file_name: String,
        /// File contents, sent byte-for-byte.
        bytes: Vec<u8>,
    },
}

impl MultipartPart {
    /// Creates a text part.
    pub fn text(name: impl Into<String>, value: impl Into<String>) -> Self {
        MultipartPart::Text {
            name: name.into(),
            value: value.into(),
        }
    }

    /// Creates a file part.
    pub fn file(name: impl Into<String>, file_name: impl Into<String>, bytes: Vec<u8>) -> Self {
        MultipartPart::File {
            name: name.into(),
            file_name: file_name.into(),
            bytes,
        }
    }

    /// The field name of this part.
    pub fn name(&self) -> &str {
        match self {
            MultipartPart::Text { name, .. } | MultipartPart::File { name, .. } => name,
        }
    }
}

// File contents can be large; print their size only.
impl std::fmt::Debug for MultipartPart {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            MultipartPart::Text { name, value } => f
                .debug_struct("Text")
                .field("name", name)
                .field("value", value)
                .finish(),
            MultipartPart::File {
                name,
                file_name,
                bytes,
            } => f
                .debug_struct("File")
                .field("name", name)
                .field("file_name", file_name)
                .field("len", &bytes.len())
                .finish(),
        }
    }
}

/// HTTP transport wrapping a single long-timeout client.
///
/// Cloning is cheap and shares the underlying connection pool.
#[derive(Clone)]
pub struct HttpTransport {
    /// The underlying HTTP client.
    http: Client,

    /// Timeout applied to each request, reported in timeout errors.
    timeout: Duration,
}

impl HttpTransport {
    /// Creates a transport whose requests are bounded by `timeout`.
    ///
    /// # Errors
    ///
    /// Returns `SemslaError::HttpClient` if the HTTP client fails to initialize.
    pub fn new(timeout: Duration) -> Result<Self, SemslaError> {
        let http = Client::builder()
            .timeout(timeout)
            .build()
            .map_err(SemslaError::HttpClient)?;

        Ok(Self { http, timeout })
    }

    /// Performs one HTTP request.
    ///
    /// # Arguments
    ///
    /// * `method` - one of GET, POST, PUT, DELETE
    /// * `url` - absolute request URL, including any query string
    /// * `body` - the request body
    /// * `headers` - extra headers, e.g. `("Authorization", "Bearer ...")`
    ///
    /// # Errors
    ///
    /// - `SemslaError::Validation` for an unsupported method
    /// - `SemslaError::Transport` on connection failure or timeout
    /// - `SemslaError::HttpStatus` on a non-2xx response
    pub async fn send(
        &self,
        method: Method,
        url: &str,
        body: RequestBody,
        headers: &[(&str, String)],
    ) -> Result<ApiResponse, SemslaError> {
        Self::check_method(&method)?;

        tracing::debug!(method = %method, url = %url, "Sending request");

        let mut req = self.http.request(method.clone(), url);
        for (name, value) in headers {
            req = req.header(*name, value.as_str());
        }

        req = match body {
            RequestBody::Empty => req,
            RequestBody::Json(value) => req.json(&value),
            RequestBody::Multipart(parts) => req.multipart(Self::build_form(parts)),
        };

        let response = req.send().await.map_err(|e| {
            let err = self.transport_error(e);
            tracing::debug!(method = %method, url = %url, error = %err, "Request failed");
            err
        })?;

        let status = response.status();
        let raw_body = match response.text().await {
            Ok(body) => body,
            Err(e) if !status.is_success() => {
                tracing::debug!(status = %status, error = %e, "Error response body unreadable");
                String::new()
            }
            Err(e) => return Err(self.transport_error(e)),
        };

        tracing::debug!(
            method = %method,
            url = %url,
            status = %status,
            body_len = raw_body.len(),
            "Response received"
        );

        if !status.is_success() {
            return Err(SemslaError::HttpStatus {
                status,
                body: raw_body,
            });
        }

        Ok(ApiResponse {
            status_code: status.as_u16(),
            raw_body,
        })
    }

    fn transport_error(&self, err: reqwest::Error) -> SemslaError {
        if err.is_timeout() {
            SemslaError::transport(format!("request timed out after {:?}", self.timeout), true)
        } else {
            SemslaError::from_reqwest(err)
        }
    }

    fn check_method(method: &Method) -> Result<(), SemslaError> {
        if [Method::GET, Method::POST, Method::PUT, Method::DELETE].contains(method) {
            Ok(())
        } else {
            Err(ValidationError::UnsupportedMethod(method.to_string()).into())
        }
    }

    fn build_form(parts: Vec<MultipartPart>) -> Form {
        parts.into_iter().fold(Form::new(), |form, part| match part {
            MultipartPart::Text { name, value } => form.text(name, value),
            MultipartPart::File {
                name,
                file_name,
                bytes,
            } => form.part(name, Part::bytes(bytes).file_name(file_name)),
        })
    }
}
