//! Chain configuration, well-known router labels, and registry bootstrap.

pub mod bootstrap;
pub mod config;
pub mod labels;

pub use bootstrap::{deploy_all, deploy_chain, DeployOutcome, Deployment};
pub use config::{ChainConfig, DeployConfig, DeployDefaults};
