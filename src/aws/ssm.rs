//! Parameter store client for secret retrieval

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use serde_json::json;

use crate::aws::error::ApiError;
use crate::aws::{CONTENT_TYPE_AMZ_JSON, decode_response};

/// Trait for the secret/parameter store
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait ParameterStore: Send + Sync {
    /// Fetch a decrypted parameter value by path.
    async fn get_parameter(&self, path: &str) -> Result<String, ApiError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct GetParameterResponse {
    parameter: Parameter,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct Parameter {
    value: String,
}

/// Parameter store implementation backed by the SSM API
pub struct SsmClient {
    client: reqwest::Client,
    base_url: String,
}

impl SsmClient {
    /// Creates a new SsmClient with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("eb-platform-notify")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }

    /// Client for the regional service endpoint
    pub fn for_region(region: &str) -> Self {
        Self::new(&format!("https://ssm.{region}.amazonaws.com"))
    }
}

#[async_trait::async_trait]
impl ParameterStore for SsmClient {
    async fn get_parameter(&self, path: &str) -> Result<String, ApiError> {
        let body = json!({
            "Name": path,
            "WithDecryption": true,
        });
        let response = self
            .client
            .post(&self.base_url)
            .header("X-Amz-Target", "AmazonSSM.GetParameter")
            .header("Content-Type", CONTENT_TYPE_AMZ_JSON)
            .json(&body)
            .send()
            .await?;

        let decoded: GetParameterResponse = decode_response(response).await?;
        Ok(decoded.parameter.value)
    }
}
