//! Platform identity and version logic
//!
//! # Modules
//!
//! - [`arn`]: typed parsing of platform ARNs into name and version
//! - [`cache`]: per-run memoization of the latest version per platform name
//! - [`semver`]: semantic ordering of platform version strings

pub mod arn;
pub mod cache;
pub mod semver;
