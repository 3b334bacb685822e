//! Semantic ordering for platform version strings

use std::cmp::Ordering;

use semver::Version;
use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("invalid version string: {0}")]
pub struct VersionError(pub String);

/// Parse a version string into a semver::Version, normalizing partial versions.
///
/// Handles partial versions like "2" or "2.11" by padding with zeros.
///
/// Examples:
/// - "2" -> Version(2, 0, 0)
/// - "2.11" -> Version(2, 11, 0)
/// - "2.11.10" -> Version(2, 11, 10)
pub fn parse_version(version: &str) -> Result<Version, VersionError> {
    let parts: Vec<&str> = version.split('.').collect();
    let normalized = match parts.len() {
        1 => format!("{}.0.0", parts[0]),
        2 => format!("{}.{}.0", parts[0], parts[1]),
        _ => version.to_string(),
    };
    Version::parse(&normalized).map_err(|_| VersionError(version.to_string()))
}

/// Compare two version strings by component-wise semantic ordering.
///
/// "2.11.10" orders above "2.9.2", which lexical comparison would get
/// wrong. Precedence comparison, so build metadata does not participate.
pub fn compare_versions(a: &str, b: &str) -> Result<Ordering, VersionError> {
    Ok(parse_version(a)?.cmp_precedence(&parse_version(b)?))
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("2.11.10", "2.9.2", Ordering::Greater)]
    #[case("2.9.2", "2.11.10", Ordering::Less)]
    #[case("1.0.0", "1.0.0", Ordering::Equal)]
    #[case("2.11", "2.9.2", Ordering::Greater)] // padded to 2.11.0
    #[case("3", "2.99.99", Ordering::Greater)] // padded to 3.0.0
    #[case("1.0.0-alpha", "1.0.0", Ordering::Less)] // pre-release sorts below release
    #[case("1.0.0+build.2", "1.0.0+build.1", Ordering::Equal)] // build metadata is ignored
    fn compare_versions_orders_numerically(
        #[case] a: &str,
        #[case] b: &str,
        #[case] expected: Ordering,
    ) {
        assert_eq!(compare_versions(a, b).unwrap(), expected);
    }

    #[rstest]
    #[case("not-a-version")]
    #[case("")]
    #[case("1.2.x")]
    fn compare_versions_rejects_malformed_input(#[case] bad: &str) {
        assert_eq!(
            compare_versions(bad, "1.0.0"),
            Err(VersionError(bad.to_string()))
        );
        assert_eq!(
            compare_versions("1.0.0", bad),
            Err(VersionError(bad.to_string()))
        );
    }

    #[test]
    fn parse_version_pads_partial_versions() {
        assert_eq!(parse_version("2").unwrap(), Version::new(2, 0, 0));
        assert_eq!(parse_version("2.11").unwrap(), Version::new(2, 11, 0));
        assert_eq!(parse_version("2.11.10").unwrap(), Version::new(2, 11, 10));
    }
}
