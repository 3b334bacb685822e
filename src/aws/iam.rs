//! Account identity client

#[cfg(test)]
use mockall::automock;

use serde::Deserialize;
use serde_json::json;

use crate::aws::error::ApiError;
use crate::aws::{CONTENT_TYPE_AMZ_JSON, decode_response};

/// IAM is a global service, not a regional one.
const DEFAULT_BASE_URL: &str = "https://iam.amazonaws.com";

/// Trait for the account-identity service
#[cfg_attr(test, automock)]
#[async_trait::async_trait]
pub trait AccountIdentity: Send + Sync {
    /// The first account alias configured for the account, if any.
    async fn first_account_alias(&self) -> Result<Option<String>, ApiError>;
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "PascalCase")]
struct ListAccountAliasesResponse {
    #[serde(default)]
    account_aliases: Vec<String>,
}

/// Account identity implementation backed by the IAM API
pub struct IamClient {
    client: reqwest::Client,
    base_url: String,
}

impl IamClient {
    /// Creates a new IamClient with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("eb-platform-notify")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }
}

impl Default for IamClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[async_trait::async_trait]
impl AccountIdentity for IamClient {
    async fn first_account_alias(&self) -> Result<Option<String>, ApiError> {
        let response = self
            .client
            .post(&self.base_url)
            .header("X-Amz-Target", "AmazonIAM.ListAccountAliases")
            .header("Content-Type", CONTENT_TYPE_AMZ_JSON)
            .json(&json!({}))
            .send()
            .await?;

        let decoded: ListAccountAliasesResponse = decode_response(response).await?;
        Ok(decoded.account_aliases.into_iter().next())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::Server;

    #[tokio::test]
    async fn first_account_alias_returns_first_entry() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/")
            .match_header("x-amz-target", "AmazonIAM.ListAccountAliases")
            .with_status(200)
            .with_body(r#"{"AccountAliases": ["acme-prod", "acme-legacy"]}"#)
            .create_async()
            .await;

        let client = IamClient::new(&server.url());
        let alias = client.first_account_alias().await.unwrap();

        mock.assert_async().await;
        assert_eq!(alias, Some("acme-prod".to_string()));
    }

    #[tokio::test]
    async fn first_account_alias_returns_none_when_account_has_no_alias() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/")
            .with_status(200)
            .with_body(r#"{"AccountAliases": []}"#)
            .create_async()
            .await;

        let client = IamClient::new(&server.url());
        let alias = client.first_account_alias().await.unwrap();

        assert_eq!(alias, None);
    }
}
