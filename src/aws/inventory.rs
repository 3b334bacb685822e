//! Elastic Beanstalk inventory client
//!
//! Read-only access to the account's applications, environments, and
//! platform catalog.

#[cfg(test)]
use mockall::automock;

use serde::{Deserialize, Serialize};
use serde::de::DeserializeOwned;
use serde_json::json;

use crate::aws::error::ApiError;
use crate::aws::{CONTENT_TYPE_AMZ_JSON, decode_response};

/// An application registered in the account.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct ApplicationDescription {
    pub application_name: String,
}

/// A deployed environment belonging to one application.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct EnvironmentDescription {
    pub environment_name: String,
    pub environment_id: String,
    pub platform_arn: String,
}

/// One filter term for a platform catalog query.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformFilter {
    pub r#type: String,
    pub operator: String,
    pub values: Vec<String>,
}

impl PlatformFilter {
    /// Exact-match filter on one attribute.
    pub fn equals(filter_type: &str, value: &str) -> Self {
        Self {
            r#type: filter_type.to_string(),
            operator: "=".to_string(),
            values: vec![value.to_string()],
        }
    }
}

/// One entry of the platform catalog.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "PascalCase")]
pub struct PlatformSummary {
    pub platform_version: String,
}

/// Trait for the hosting-environment inventory service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait InventoryApi: Send + Sync {
    /// List all applications in the account.
    async fn describe_applications(&self) -> Result<Vec<ApplicationDescription>, ApiError>;

    /// List the non-deleted environments of one application.
    async fn describe_environments(
        &self,
        application_name: &str,
    ) -> Result<Vec<EnvironmentDescription>, ApiError>;

    /// List platform catalog entries matching the given filters.
    async fn list_platform_versions(
        &self,
        filters: &[PlatformFilter],
    ) -> Result<Vec<PlatformSummary>, ApiError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeApplicationsResponse {
    #[serde(default)]
    applications: Vec<ApplicationDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct DescribeEnvironmentsResponse {
    #[serde(default)]
    environments: Vec<EnvironmentDescription>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListPlatformVersionsResponse {
    #[serde(default)]
    platform_summary_list: Vec<PlatformSummary>,
}

/// Inventory implementation backed by the Elastic Beanstalk API
pub struct BeanstalkClient {
    client: reqwest::Client,
    base_url: String,
}

impl BeanstalkClient {
    /// Creates a new BeanstalkClient with a custom base URL
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
        Self::new(&format!("https://elasticbeanstalk.{region}.amazonaws.com"))
    }

    async fn call<R: DeserializeOwned>(
        &self,
        target: &str,
        body: &serde_json::Value,
    ) -> Result<R, ApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .header("X-Amz-Target", target)
            .header("Content-Type", CONTENT_TYPE_AMZ_JSON)
            .json(body)
            .send()
            .await?;

        decode_response(response).await
    }
}

#[async_trait::async_trait]
impl InventoryApi for BeanstalkClient {
    async fn describe_applications(&self) -> Result<Vec<ApplicationDescription>, ApiError> {
        let response: DescribeApplicationsResponse = self
            .call("ElasticBeanstalk.DescribeApplications", &json!({}))
            .await?;

        Ok(response.applications)
    }

    async fn describe_environments(
        &self,
        application_name: &str,
    ) -> Result<Vec<EnvironmentDescription>, ApiError> {
        let body = json!({
            "ApplicationName": application_name,
            "IncludeDeleted": false,
        });
        let response: DescribeEnvironmentsResponse = self
            .call("ElasticBeanstalk.DescribeEnvironments", &body)
            .await?;

        Ok(response.environments)
    }

    async fn list_platform_versions(
        &self,
        filters: &[PlatformFilter],
    ) -> Result<Vec<PlatformSummary>, ApiError> {
        let body = json!({ "Filters": filters });
        let response: ListPlatformVersionsResponse = self
            .call("ElasticBeanstalk.ListPlatformVersions", &body)
            .await?;

        Ok(response.platform_summary_list)
    }
}
