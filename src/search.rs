//! Knowledge search against the service's known-issues index.

use reqwest::Method;

use crate::error::SemslaError;
use crate::models::{SearchRequest, SearchResult};
use crate::session::Session;
use crate::transport::{HttpTransport, RequestBody};

const SEARCH_PATH: &str = "/api/v1/search";

/// Looks up proposed solutions for free-text queries.
#[derive(Clone)]
pub struct SearchService {
    transport: HttpTransport,
}

impl SearchService {
    /// Creates the service on top of `transport`.
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Runs a search.
    ///
    /// # Errors
    ///
    /// - `Validation` if the query, base URL or token is missing
    /// - `HttpStatus` / `Transport` from the server exchange
    /// - `MalformedResponse` if a successful response body is not JSON at all
    pub async fn search(
        &self,
        session: &Session,
        request: &SearchRequest,
    ) -> Result<SearchResult, SemslaError> {
        let request = SearchRequest::new(request.query.trim());
        if request.query.is_empty() {
            return Err(SemslaError::missing("query"));
        }
        let url = session.endpoint(SEARCH_PATH)?;
        let authorization = session.require_authorization()?;

        tracing::debug!(query = %request.query, "Searching known issues");

        let body = RequestBody::Json(serde_json::to_value(&request)?);
        let response = self
            .transport
            .send(Method::POST, &url, body, &[("Authorization", authorization)])
            .await?;

        Ok(SearchResult::from_value(&response.json()?))
    }
}
