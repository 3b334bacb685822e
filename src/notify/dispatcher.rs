//! Per-report notification orchestration

use thiserror::Error;
use tracing::{info, warn};

use crate::aws::error::ApiError;
use crate::aws::iam::AccountIdentity;
use crate::aws::ssm::ParameterStore;
use crate::config::Config;
use crate::notify::message;
use crate::notify::slack::{SlackClient, SlackError};
use crate::scan::StaleEnvironmentReport;

#[derive(Debug, Error)]
pub enum NotifyError {
    /// The Slack token could not be read from the parameter store; the
    /// message for this environment is never sent.
    #[error("unable to retrieve the Slack token from the parameter store: {0}")]
    TokenLookup(#[source] ApiError),

    #[error("error posting to Slack: {0}")]
    Slack(#[source] SlackError),
}

/// Sends one Slack message per stale environment.
///
/// The Slack token is fetched per notification and never cached. The
/// account alias is best effort; a failed lookup leaves the field blank.
pub struct NotificationDispatcher<'a> {
    parameters: &'a dyn ParameterStore,
    identity: &'a dyn AccountIdentity,
    slack: SlackClient,
    token_path: String,
    channel: String,
    region: String,
}

impl<'a> NotificationDispatcher<'a> {
    pub fn new(
        parameters: &'a dyn ParameterStore,
        identity: &'a dyn AccountIdentity,
        slack: SlackClient,
        config: &Config,
    ) -> Self {
        Self {
            parameters,
            identity,
            slack,
            token_path: config.slack_token_ssm_path.clone(),
            channel: config.slack_channel.clone(),
            region: config.region.clone(),
        }
    }

    /// Send the notification for one stale environment.
    pub async fn notify(&self, report: &StaleEnvironmentReport) -> Result<(), NotifyError> {
        let token = self
            .parameters
            .get_parameter(&self.token_path)
            .await
            .map_err(NotifyError::TokenLookup)?;

        let account_alias = match self.identity.first_account_alias().await {
            Ok(alias) => alias,
            Err(e) => {
                warn!("unable to get the current account alias: {e}");
                None
            }
        };

        let blocks = message::build_blocks(report, account_alias.as_deref(), &self.region);

        info!(
            "posting notification to Slack for {}/{}",
            report.application_name, report.environment_name
        );
        self.slack
            .post_message(&token, &self.channel, &blocks)
            .await
            .map_err(NotifyError::Slack)
    }
}
