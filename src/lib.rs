pub mod aws;
pub mod config;
pub mod notify;
pub mod platform;
pub mod runner;
pub mod scan;
