//! Minimal Slack Web API client

use serde::Deserialize;
use serde_json::{Value, json};
use thiserror::Error;

/// Default base URL for the Slack Web API
const DEFAULT_BASE_URL: &str = "https://slack.com/api";

#[derive(Debug, Error)]
pub enum SlackError {
    #[error("network error: {0}")]
    Network(#[from] reqwest::Error),

    /// Error code reported by Slack, e.g. `invalid_auth` or
    /// `channel_not_found`.
    #[error("slack api error: {0}")]
    Api(String),

    #[error("invalid response: {0}")]
    InvalidResponse(String),
}

/// Response envelope shared by Slack Web API methods
#[derive(Debug, Deserialize)]
struct ApiResponse {
    ok: bool,
    error: Option<String>,
}

pub struct SlackClient {
    client: reqwest::Client,
    base_url: String,
}

impl SlackClient {
    /// Creates a new SlackClient with a custom base URL
    pub fn new(base_url: &str) -> Self {
        Self {
            client: reqwest::Client::builder()
                .user_agent("eb-platform-notify")
                .build()
                .expect("Failed to create HTTP client"),
            base_url: base_url.to_string(),
        }
    }

    /// Post a Block Kit message to a channel.
    pub async fn post_message(
        &self,
        token: &str,
        channel: &str,
        blocks: &Value,
    ) -> Result<(), SlackError> {
        let url = format!("{}/chat.postMessage", self.base_url);
        let body = json!({
            "channel": channel,
            "blocks": blocks,
        });

        let response = self
            .client
            .post(&url)
            .bearer_auth(token)
            .json(&body)
            .send()
            .await?;

        let decoded: ApiResponse = response
            .json()
            .await
            .map_err(|e| SlackError::InvalidResponse(e.to_string()))?;

        if decoded.ok {
            Ok(())
        } else {
            Err(SlackError::Api(
                decoded.error.unwrap_or_else(|| "unknown_error".to_string()),
            ))
        }
    }
}

impl Default for SlackClient {
    fn default() -> Self {
        Self::new(DEFAULT_BASE_URL)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockito::{Matcher, Server};

    #[tokio::test]
    async fn post_message_sends_bearer_token_and_blocks() {
        let mut server = Server::new_async().await;

        let mock = server
            .mock("POST", "/chat.postMessage")
            .match_header("authorization", "Bearer xoxb-test")
            .match_body(Matcher::Json(json!({
                "channel": "#platform-updates",
                "blocks": [{"type": "divider"}],
            })))
            .with_status(200)
            .with_body(r#"{"ok": true}"#)
            .create_async()
            .await;

        let client = SlackClient::new(&server.url());
        let blocks = json!([{"type": "divider"}]);
        let result = client
            .post_message("xoxb-test", "#platform-updates", &blocks)
            .await;

        mock.assert_async().await;
        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn rejected_message_surfaces_slack_error_code() {
        let mut server = Server::new_async().await;

        let _mock = server
            .mock("POST", "/chat.postMessage")
            .with_status(200)
            .with_body(r#"{"ok": false, "error": "channel_not_found"}"#)
            .create_async()
            .await;

        let client = SlackClient::new(&server.url());
        let result = client
            .post_message("xoxb-test", "#nope", &json!([]))
            .await;

        assert!(matches!(result, Err(SlackError::Api(code)) if code == "channel_not_found"));
    }
}
