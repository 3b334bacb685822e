//! Slack notification layer
//!
//! # Modules
//!
//! - [`message`]: Block Kit payload and console/release-notes links
//! - [`slack`]: minimal Slack Web API client
//! - [`dispatcher`]: per-report orchestration (token, alias, post)

pub mod dispatcher;
pub mod message;
pub mod slack;
