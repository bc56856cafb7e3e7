use crate::models::{BmiRequest, BmiResponse, ErrorResponse, CALCULATE_BMI_PATH};
use reqwest::{header, Client, StatusCode};
use std::time::Duration;
use thiserror::Error;

/// Errors that can occur when calling the BMI service
#[derive(Debug, Error)]
pub enum BmiApiError {
    #[error("Service rejected the request ({status}): {detail}")]
    Rejected { status: StatusCode, detail: String },

    #[error("HTTP request failed: {0}")]
    RequestError(#[from] reqwest::Error),

    #[error("Failed to encode request: {0}")]
    EncodeError(#[from] serde_json::Error),

    #[error("Invalid response format: {0}")]
    InvalidResponse(String),
}

/// BMI calculation service client
///
/// Issues a single POST per calculation. Failures are returned to the
/// caller as-is; nothing is retried.
pub struct BmiApiClient {
    base_url: String,
    client: Client,
}

impl BmiApiClient {
    /// Create a new client for the service at `base_url`
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, BmiApiError> {
        let client = Client::builder().timeout(timeout).build()?;

        Ok(Self {
            base_url: base_url.into(),
            client,
        })
    }

    /// Full URL of the calculation endpoint
    pub fn endpoint(&self) -> String {
        format!("{}{}", self.base_url.trim_end_matches('/'), CALCULATE_BMI_PATH)
    }

    /// Submit a calculation request
    pub async fn calculate(&self, request: &BmiRequest) -> Result<BmiResponse, BmiApiError> {
        let url = self.endpoint();
        let body = serde_json::to_vec(request)?;

        tracing::debug!("Posting to {}: {}", url, String::from_utf8_lossy(&body));

        let response = self
            .client
            .post(&url)
            .header(header::CONTENT_TYPE, "application/json")
            .body(body)
            .send()
            .await?;

        let status = response.status();
        let bytes = response.bytes().await?;

        if !status.is_success() {
            let error: ErrorResponse = serde_json::from_slice(&bytes).map_err(|e| {
                BmiApiError::InvalidResponse(format!("Failed to parse error body ({}): {}", status, e))
            })?;
            // A JSON error body without a detail still ends the submission as a rejection
            let detail = error.message().unwrap_or_else(|| status.to_string());

            tracing::info!("Calculation rejected with {}: {}", status, detail);
            return Err(BmiApiError::Rejected { status, detail });
        }

        serde_json::from_slice(&bytes)
            .map_err(|e| BmiApiError::InvalidResponse(format!("Failed to parse result: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_client_creation() {
        let client = BmiApiClient::new("http://localhost:8000/", Duration::from_secs(5)).unwrap();

        assert_eq!(client.base_url, "http://localhost:8000/");
        assert_eq!(client.endpoint(), "http://localhost:8000/api/calculate-bmi");
    }

    #[test]
    fn test_encode_error_kind() {
        let json_err = serde_json::from_str::<u8>("x").unwrap_err();
        let err = BmiApiError::from(json_err);

        assert!(matches!(err, BmiApiError::EncodeError(_)));
        assert!(err.to_string().starts_with("Failed to encode request:"));
    }

    #[test]
    fn test_rejection_message() {
        let err = BmiApiError::Rejected {
            status: StatusCode::BAD_REQUEST,
            detail: "Invalid height".to_string(),
        };
        assert_eq!(err.to_string(), "Service rejected the request (400 Bad Request): Invalid height");
    }
}
