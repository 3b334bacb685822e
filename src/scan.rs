//! Environment scan
//!
//! Walks every application and its environments, deciding per environment
//! whether a newer platform version is available.

use std::cmp::Ordering;

use thiserror::Error;
use tracing::{info, warn};

use crate::aws::error::ApiError;
use crate::aws::inventory::{EnvironmentDescription, InventoryApi};
use crate::platform::arn::PlatformIdentity;
use crate::platform::cache::PlatformVersionCache;
use crate::platform::semver::compare_versions;

#[derive(Debug, Error)]
pub enum ScanError {
    /// Without the top-level application list there is nothing to iterate,
    /// so this is the only failure that ends the run.
    #[error("unable to obtain the list of applications: {0}")]
    ListApplications(#[source] ApiError),
}

/// An environment running an older platform version than the latest
/// available for its platform name.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StaleEnvironmentReport {
    pub application_name: String,
    pub environment_name: String,
    pub environment_id: String,
    pub platform_name: String,
    pub current_version: String,
    pub latest_version: String,
}

pub struct EnvironmentScanner<'a> {
    inventory: &'a dyn InventoryApi,
    cache: PlatformVersionCache,
}

impl<'a> EnvironmentScanner<'a> {
    pub fn new(inventory: &'a dyn InventoryApi) -> Self {
        Self {
            inventory,
            cache: PlatformVersionCache::new(),
        }
    }

    /// Scan all applications and return one report per stale environment.
    ///
    /// Per-application and per-environment failures are logged and skipped;
    /// only the top-level application listing can fail the whole scan.
    pub async fn scan(&mut self) -> Result<Vec<StaleEnvironmentReport>, ScanError> {
        let applications = self
            .inventory
            .describe_applications()
            .await
            .map_err(ScanError::ListApplications)?;

        let mut reports = Vec::new();
        for application in applications {
            let application_name = application.application_name;
            info!("application found: {application_name}");

            let environments = match self.inventory.describe_environments(&application_name).await
            {
                Ok(environments) => environments,
                Err(e) => {
                    warn!("unable to obtain environments for application {application_name}: {e}");
                    continue;
                }
            };

            for environment in environments {
                info!(
                    "environment found: {}({})",
                    environment.environment_name, environment.environment_id
                );
                if let Some(report) = self.evaluate(&application_name, &environment).await {
                    reports.push(report);
                }
            }
        }

        Ok(reports)
    }

    /// Decide whether one environment is stale. Returns `None` for
    /// up-to-date environments and for any skipped lookup or parse failure.
    async fn evaluate(
        &mut self,
        application_name: &str,
        environment: &EnvironmentDescription,
    ) -> Option<StaleEnvironmentReport> {
        let platform = match PlatformIdentity::parse(&environment.platform_arn) {
            Ok(platform) => platform,
            Err(e) => {
                warn!(
                    "skipping environment {}: {e}",
                    environment.environment_name
                );
                return None;
            }
        };
        info!(
            "current platform: {} version: {}",
            platform.name, platform.version
        );

        let latest = self.cache.get_latest(self.inventory, &platform.name).await?;

        let ordering = match compare_versions(&latest, &platform.version) {
            Ok(ordering) => ordering,
            Err(e) => {
                warn!(
                    "skipping environment {}: {e}",
                    environment.environment_name
                );
                return None;
            }
        };

        if ordering == Ordering::Greater {
            info!(
                "a newer version ({latest}) is available for {}",
                environment.environment_name
            );
            Some(StaleEnvironmentReport {
                application_name: application_name.to_string(),
                environment_name: environment.environment_name.clone(),
                environment_id: environment.environment_id.clone(),
                platform_name: platform.name,
                current_version: platform.version,
                latest_version: latest,
            })
        } else {
            // Latest below current counts as up to date, not as an anomaly
            info!(
                "environment {} is running the latest version ({latest})",
                environment.environment_name
            );
            None
        }
    }
}
