//! Registry bootstrap: construct one registry per chain and seed it.
//!
//! Seeding goes through the ordinary admin-gated operations, so a
//! configured zero address fails the deployment exactly as it would at
//! runtime.

use alloy_primitives::Address;
use whitelist_core::{Category, WhitelistError, WhitelistResult};
use whitelist_registry::AccessRegistry;

use crate::config::{ChainConfig, DeployConfig, DeployDefaults};
use crate::labels;

/// A freshly deployed registry for one chain.
#[derive(Debug)]
pub struct Deployment {
    pub chain_id: u64,
    pub name: String,
    pub registry: AccessRegistry,
}

/// Result of a multi-chain run. A failing chain does not stop the others.
#[derive(Debug, Default)]
pub struct DeployOutcome {
    pub deployed: Vec<Deployment>,
    pub skipped: Vec<String>,
    pub failed: Vec<(String, WhitelistError)>,
}

/// Deploys the registry for one chain.
pub fn deploy_chain(chain: &ChainConfig, defaults: &DeployDefaults) -> WhitelistResult<Deployment> {
    let admin = chain.admin.unwrap_or(defaults.admin);
    tracing::info!(chain = %chain.name, chain_id = chain.id, admin = %admin, "deploying registry");

    let mut registry = AccessRegistry::new(&defaults.operators, admin)?;

    for category in Category::ALL {
        let mut members = configured(chain, category).to_vec();
        if chain.known_routers {
            for known in labels::known(chain.id, category) {
                if !members.contains(&known) {
                    members.push(known);
                }
            }
        }
        if members.is_empty() {
            continue;
        }
        registry.add(&admin, category, &members)?;
        tracing::info!(chain = %chain.name, %category, count = members.len(), "seeded category");
    }

    Ok(Deployment {
        chain_id: chain.id,
        name: chain.name.clone(),
        registry,
    })
}

fn configured(chain: &ChainConfig, category: Category) -> &[Address] {
    match category {
        Category::Dex => &chain.dex,
        Category::CrossChain => &chain.cross_chain,
        Category::AnyRouter => &chain.any_router,
    }
}

/// Deploys every chain not on the skip list.
pub fn deploy_all(config: &DeployConfig) -> DeployOutcome {
    let mut outcome = DeployOutcome::default();

    for chain in &config.chains {
        if config.is_skipped(chain) {
            tracing::debug!(chain = %chain.name, "skipping");
            outcome.skipped.push(chain.name.clone());
            continue;
        }

        match deploy_chain(chain, &config.defaults) {
            Ok(deployment) => outcome.deployed.push(deployment),
            Err(e) => {
                tracing::error!(chain = %chain.name, error = %e, "deployment failed");
                outcome.failed.push((chain.name.clone(), e));
            }
        }
    }

    tracing::info!(
        deployed = outcome.deployed.len(),
        skipped = outcome.skipped.len(),
        failed = outcome.failed.len(),
        "multi-chain deployment finished"
    );
    outcome
}
