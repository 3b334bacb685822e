//! Runtime configuration read from the environment

use thiserror::Error;

pub const SLACK_TOKEN_SSM_PATH_VAR: &str = "SLACK_TOKEN_SSM_PATH";
pub const SLACK_CHANNEL_VAR: &str = "SLACK_CHANNEL";

/// Region variables checked in order, mirroring the SDK session lookup.
const REGION_VARS: [&str; 2] = ["AWS_REGION", "AWS_DEFAULT_REGION"];

const DEFAULT_REGION: &str = "us-east-1";

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required environment variable {0} is not set")]
    MissingVar(&'static str),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// Parameter store path holding the Slack bot token.
    pub slack_token_ssm_path: String,
    /// Slack channel that receives the notifications.
    pub slack_channel: String,
    /// Region of the audited account, also used for console deep links.
    pub region: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|var| std::env::var(var).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let slack_token_ssm_path = lookup(SLACK_TOKEN_SSM_PATH_VAR)
            .ok_or(ConfigError::MissingVar(SLACK_TOKEN_SSM_PATH_VAR))?;
        let slack_channel =
            lookup(SLACK_CHANNEL_VAR).ok_or(ConfigError::MissingVar(SLACK_CHANNEL_VAR))?;
        let region = REGION_VARS
            .iter()
            .find_map(|var| lookup(var))
            .unwrap_or_else(|| DEFAULT_REGION.to_string());

        Ok(Self {
            slack_token_ssm_path,
            slack_channel,
            region,
        })
    }
}
