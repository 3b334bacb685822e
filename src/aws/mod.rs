//! Thin clients for the AWS services this tool reads from
//!
//! Each service is modeled as a trait so the scanner and the notification
//! dispatcher can be exercised against mocks. The reqwest-backed
//! implementations speak the services' JSON protocol (`X-Amz-Target`
//! dispatch); request signing is inherited from the execution environment.
//!
//! # Modules
//!
//! - [`inventory`]: Elastic Beanstalk applications, environments, platforms
//! - [`ssm`]: parameter store lookup for the Slack token
//! - [`iam`]: account alias lookup
//! - [`error`]: shared error type for service calls

pub mod error;
pub mod iam;
pub mod inventory;
pub mod ssm;

use serde::Deserialize;
use serde::de::DeserializeOwned;

use error::ApiError;

pub(crate) const CONTENT_TYPE_AMZ_JSON: &str = "application/x-amz-json-1.1";

/// Error body returned by the AWS JSON protocol.
#[derive(Debug, Default, Deserialize)]
struct AwsErrorBody {
    #[serde(rename = "__type")]
    code: Option<String>,
    #[serde(alias = "Message")]
    message: Option<String>,
}

/// Decode a service response, turning non-2xx statuses into [`ApiError::Service`].
pub(crate) async fn decode_response<R: DeserializeOwned>(
    response: reqwest::Response,
) -> Result<R, ApiError> {
    let status = response.status();
    if !status.is_success() {
        let body = response.text().await.unwrap_or_default();
        let parsed: AwsErrorBody = serde_json::from_str(&body).unwrap_or_default();
        return Err(ApiError::Service {
            code: parsed.code.unwrap_or_else(|| status.to_string()),
            message: parsed.message.unwrap_or(body),
        });
    }

    response
        .json()
        .await
        .map_err(|e| ApiError::InvalidResponse(e.to_string()))
}
