//! SLA evaluation.
//!
//! `check_sla` posts a title/message pair and maps the loosely-typed answer
//! into an [`SlaResult`]. Field-level problems never fail the call; see
//! [`SlaResult::from_value`] for the per-field defaults.

use reqwest::Method;

use crate::error::SemslaError;
use crate::models::{SlaRequest, SlaResult};
use crate::session::Session;
use crate::transport::{HttpTransport, RequestBody};

const CHECK_SLA_PATH: &str = "/api/v1/check-sla";

/// Submits tickets for SLA evaluation.
#[derive(Clone)]
pub struct SlaService {
    transport: HttpTransport,
}

impl SlaService {
    /// Creates the service on top of `transport`.
    pub fn new(transport: HttpTransport) -> Self {
        Self { transport }
    }

    /// Checks the SLA for a ticket title and message.
    ///
    /// # Errors
    ///
    /// - `Validation` if title, message, base URL or token is missing
    /// - `HttpStatus` / `Transport` from the server exchange
    /// - `MalformedResponse` if a successful response body is not JSON at all
    pub async fn check_sla(
        &self,
        session: &Session,
        request: &SlaRequest,
    ) -> Result<SlaResult, SemslaError> {
        let request = Self::validate(request)?;
        let url = session.endpoint(CHECK_SLA_PATH)?;
        let authorization = session.require_authorization()?;

        tracing::debug!(title = %request.title, "Checking SLA");

        let body = RequestBody::Json(serde_json::to_value(&request)?);
        let response = self
            .transport
            .send(Method::POST, &url, body, &[("Authorization", authorization)])
            .await?;

        let result = SlaResult::from_value(&response.json()?);

        tracing::debug!(
            sla_violated = result.sla_violated,
            cache_hit = %result.cache_hit,
            "SLA check completed"
        );

        Ok(result)
    }

    fn validate(request: &SlaRequest) -> Result<SlaRequest, SemslaError> {
        let request = SlaRequest::new(request.title.trim(), request.message.trim());
        if request.title.is_empty() {
            return Err(SemslaError::missing("title"));
        }
        if request.message.is_empty() {
            return Err(SemslaError::missing("message"));
        }
        Ok(request)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ValidationError;

    #[test]
    fn test_validate_requires_title() {
        let err = SlaService::validate(&SlaRequest::new(" ", "body")).unwrap_err();
        assert!(matches!(
            err,
            SemslaError::Validation(ValidationError::MissingField("title"))
        ));
    }

    #[test]
    fn test_validate_requires_message() {
        let err = SlaService::validate(&SlaRequest::new("Title", "\n")).unwrap_err();
        assert!(matches!(
            err,
            SemslaError::Validation(ValidationError::MissingField("message"))
        ));
    }

    #[test]
    fn test_validate_trims() {
        let request = SlaService::validate(&SlaRequest::new(" Outage ", " VPN down ")).unwrap();
        assert_eq!(request.title, "Outage");
        assert_eq!(request.message, "VPN down");
    }
}
