//! Per-run cache of the latest version per platform name

use std::collections::HashMap;

use tracing::{debug, warn};

use crate::aws::inventory::{InventoryApi, PlatformFilter};

/// Latest-version lookup memoized for the lifetime of one run.
///
/// Each distinct platform name is queried against the inventory service at
/// most once per run. Failed or empty lookups are not cached, so a later
/// call for the same name would query again.
#[derive(Debug, Default)]
pub struct PlatformVersionCache {
    entries: HashMap<String, String>,
}

impl PlatformVersionCache {
    pub fn new() -> Self {
        Self::default()
    }

    /// Latest available version for a platform, or `None` if the catalog
    /// query fails or reports nothing.
    pub async fn get_latest(
        &mut self,
        inventory: &dyn InventoryApi,
        platform_name: &str,
    ) -> Option<String> {
        if let Some(version) = self.entries.get(platform_name) {
            debug!("latest version for {platform_name:?} served from cache: {version}");
            return Some(version.clone());
        }

        // Filtering on PlatformVersion = "latest" asks the catalog for
        // exactly one entry per platform name.
        let filters = [
            PlatformFilter::equals("PlatformName", platform_name),
            PlatformFilter::equals("PlatformVersion", "latest"),
        ];

        let summaries = match inventory.list_platform_versions(&filters).await {
            Ok(summaries) => summaries,
            Err(e) => {
                warn!("unable to retrieve latest platform version for {platform_name:?}: {e}");
                return None;
            }
        };

        if summaries.is_empty() {
            warn!("no latest platform version reported for {platform_name:?}");
            return None;
        }
        if summaries.len() > 1 {
            warn!(
                "{} latest platform versions reported for {platform_name:?}, taking the first",
                summaries.len()
            );
        }

        let version = summaries[0].platform_version.clone();
        self.entries
            .insert(platform_name.to_string(), version.clone());
        Some(version)
    }
}
