//! One audit run, wiring the scanner into the dispatcher

use tracing::{error, info, warn};

use crate::aws::iam::{AccountIdentity, IamClient};
use crate::aws::inventory::{BeanstalkClient, InventoryApi};
use crate::aws::ssm::{ParameterStore, SsmClient};
use crate::config::Config;
use crate::notify::dispatcher::NotificationDispatcher;
use crate::notify::slack::SlackClient;
use crate::scan::EnvironmentScanner;

/// Execute one scan-and-notify pass against the configured account.
pub async fn run(config: &Config) {
    let inventory = BeanstalkClient::for_region(&config.region);
    let parameters = SsmClient::for_region(&config.region);
    let identity = IamClient::default();
    let slack = SlackClient::default();

    run_with(config, &inventory, &parameters, &identity, slack).await;
}

/// Run against explicit collaborators. Split out so tests can point every
/// client at a local server.
///
/// Recovered failures are logged and never surface to the caller; a failed
/// top-level application listing ends the run after logging.
pub async fn run_with(
    config: &Config,
    inventory: &dyn InventoryApi,
    parameters: &dyn ParameterStore,
    identity: &dyn AccountIdentity,
    slack: SlackClient,
) {
    let mut scanner = EnvironmentScanner::new(inventory);
    let reports = match scanner.scan().await {
        Ok(reports) => reports,
        Err(e) => {
            error!("{e}");
            return;
        }
    };

    if reports.is_empty() {
        info!("all environments are running the latest platform version");
        return;
    }

    let dispatcher = NotificationDispatcher::new(parameters, identity, slack, config);
    for report in &reports {
        if let Err(e) = dispatcher.notify(report).await {
            warn!(
                "notification for {}/{} failed: {e}",
                report.application_name, report.environment_name
            );
        }
    }
}
