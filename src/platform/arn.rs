//! Platform ARN parsing
//!
//! A platform ARN looks like:
//!
//! ```text
//! arn:aws:elasticbeanstalk:us-east-1::platform/Puma with Ruby 2.6 running on 64bit Amazon Linux/2.11.10
//! ```
//!
//! The sixth colon-separated segment carries `platform/<name>/<version>`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ArnParseError {
    #[error("platform ARN has {found} colon-separated segments, expected at least 6: {arn}")]
    MissingResourceSegment { arn: String, found: usize },

    #[error("platform ARN resource has {found} slash-separated parts, expected at least 3: {arn}")]
    MalformedResource { arn: String, found: usize },
}

/// Platform name and version extracted from a platform ARN.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlatformIdentity {
    pub name: String,
    pub version: String,
}

impl PlatformIdentity {
    /// Parse a platform ARN into its platform name and version.
    ///
    /// A malformed ARN is upstream data corruption, reported as a distinct
    /// error rather than an index panic.
    pub fn parse(arn: &str) -> Result<Self, ArnParseError> {
        let segments: Vec<&str> = arn.split(':').collect();
        if segments.len() < 6 {
            return Err(ArnParseError::MissingResourceSegment {
                arn: arn.to_string(),
                found: segments.len(),
            });
        }

        let resource: Vec<&str> = segments[5].split('/').collect();
        if resource.len() < 3 {
            return Err(ArnParseError::MalformedResource {
                arn: arn.to_string(),
                found: resource.len(),
            });
        }

        Ok(Self {
            name: resource[1].to_string(),
            version: resource[2].to_string(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn parse_extracts_name_and_version() {
        let arn = "arn:aws:elasticbeanstalk:us-east-1::platform/Puma with Ruby 2.6 running on 64bit Amazon Linux/2.11.10";

        let platform = PlatformIdentity::parse(arn).unwrap();

        assert_eq!(
            platform.name,
            "Puma with Ruby 2.6 running on 64bit Amazon Linux"
        );
        assert_eq!(platform.version, "2.11.10");
    }

    #[rstest]
    #[case("arn:aws:elasticbeanstalk", 3)]
    #[case("", 1)]
    #[case("arn:aws:s3::bucket", 5)]
    fn parse_rejects_arn_with_too_few_colon_segments(#[case] arn: &str, #[case] found: usize) {
        assert_eq!(
            PlatformIdentity::parse(arn),
            Err(ArnParseError::MissingResourceSegment {
                arn: arn.to_string(),
                found,
            })
        );
    }

    #[rstest]
    #[case("arn:aws:elasticbeanstalk:us-east-1::platform", 1)]
    #[case("arn:aws:elasticbeanstalk:us-east-1::platform/Name only", 2)]
    fn parse_rejects_arn_with_short_resource(#[case] arn: &str, #[case] found: usize) {
        assert_eq!(
            PlatformIdentity::parse(arn),
            Err(ArnParseError::MalformedResource {
                arn: arn.to_string(),
                found,
            })
        );
    }

    #[test]
    fn parse_keeps_slashes_in_name_and_version_positions_only() {
        // Extra slash parts beyond the version are ignored
        let arn = "arn:aws:elasticbeanstalk:eu-west-1::platform/Docker running on 64bit Amazon Linux 2/3.0.1/extra";

        let platform = PlatformIdentity::parse(arn).unwrap();

        assert_eq!(platform.name, "Docker running on 64bit Amazon Linux 2");
        assert_eq!(platform.version, "3.0.1");
    }
}
