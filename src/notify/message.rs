//! Block Kit payload for a stale-environment notification

use serde_json::{Value, json};

use crate::scan::StaleEnvironmentReport;

/// Generic release notes page, linked from the new-version field.
pub const RELEASE_NOTES_URL: &str =
    "https://docs.aws.amazon.com/elasticbeanstalk/latest/relnotes/relnotes.html";

/// Deep link to the environment dashboard in the console.
pub fn console_url(region: &str, application_name: &str, environment_id: &str) -> String {
    format!(
        "https://console.aws.amazon.com/elasticbeanstalk/home?region={region}#/environment/dashboard?applicationName={application_name}&environmentId={environment_id}"
    )
}

/// Build the Block Kit blocks for one stale environment.
///
/// Layout: headline section with a console deep link, an account/region
/// field pair, a platform/version field group, and a trailing divider.
pub fn build_blocks(
    report: &StaleEnvironmentReport,
    account_alias: Option<&str>,
    region: &str,
) -> Value {
    let console = console_url(region, &report.application_name, &report.environment_id);

    json!([
        {
            "type": "section",
            "text": {
                "type": "mrkdwn",
                "text": format!(
                    "A new Elastic Beanstalk container version is available for\n*<{console}|{}/{}>*",
                    report.application_name, report.environment_name
                ),
            },
        },
        {
            "type": "section",
            "fields": [
                {
                    "type": "mrkdwn",
                    "text": format!("*AWS Account:*\n{}", account_alias.unwrap_or("")),
                },
                {
                    "type": "mrkdwn",
                    "text": format!("*Region:*\n{region}"),
                },
            ],
        },
        {
            "type": "section",
            "fields": [
                {
                    "type": "mrkdwn",
                    "text": format!("*Platform:*\n{}\n", report.platform_name),
                },
                {
                    "type": "mrkdwn",
                    "text": " ",
                },
                {
                    "type": "mrkdwn",
                    "text": format!("*Current Version:*\n{}", report.current_version),
                },
                {
                    "type": "mrkdwn",
                    "text": format!(
                        "New Version:\n*<{RELEASE_NOTES_URL}|{}>*",
                        report.latest_version
                    ),
                },
            ],
        },
        {
            "type": "divider",
        },
    ])
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report() -> StaleEnvironmentReport {
        StaleEnvironmentReport {
            application_name: "orders-api".to_string(),
            environment_name: "prod".to_string(),
            environment_id: "e-123".to_string(),
            platform_name: "Puma with Ruby 2.6 running on 64bit Amazon Linux".to_string(),
            current_version: "2.9.2".to_string(),
            latest_version: "2.11.10".to_string(),
        }
    }

    #[test]
    fn console_url_carries_application_and_environment() {
        let url = console_url("us-east-1", "orders-api", "e-123");

        assert_eq!(
            url,
            "https://console.aws.amazon.com/elasticbeanstalk/home?region=us-east-1#/environment/dashboard?applicationName=orders-api&environmentId=e-123"
        );
    }

    #[test]
    fn blocks_contain_link_versions_and_divider() {
        let blocks = build_blocks(&report(), Some("acme-prod"), "us-east-1");

        let rendered = blocks.to_string();
        assert!(rendered.contains("applicationName=orders-api&environmentId=e-123"));
        assert!(rendered.contains("orders-api/prod"));
        assert!(rendered.contains("*AWS Account:*\\nacme-prod"));
        assert!(rendered.contains("2.9.2"));
        assert!(rendered.contains("2.11.10"));
        assert_eq!(blocks.as_array().unwrap().len(), 4);
        assert_eq!(blocks[3]["type"], "divider");
    }

    #[test]
    fn missing_account_alias_renders_blank_field() {
        let blocks = build_blocks(&report(), None, "us-east-1");

        assert_eq!(
            blocks[1]["fields"][0]["text"].as_str().unwrap(),
            "*AWS Account:*\n"
        );
    }
}
