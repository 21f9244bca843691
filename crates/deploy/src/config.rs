//! Deployment configuration.
//!
//! One JSON file describes every chain a registry is deployed to:
//!
//! ```json
//! {
//!   "defaults": { "admin": "0x…", "operators": ["0x…"], "skip": ["goerli"] },
//!   "chains": [
//!     { "name": "ethereum", "id": 1, "dex": ["0x…"], "knownRouters": true },
//!     { "name": "bsc", "id": 56, "admin": "0x…", "dex": [], "crossChain": ["0x…"] }
//!   ]
//! }
//! ```

use alloy_primitives::{address, Address};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::path::Path;
use whitelist_core::{WhitelistError, WhitelistResult};

/// Admin used on chains that do not name their own.
pub const DEFAULT_ADMIN: Address = address!("0x00009cc27c811a3e0FdD2Fd737afCc721B67eE8e");

/// Operators installed on every chain at deployment.
pub const DEFAULT_OPERATORS: [Address; 2] = [
    address!("0xaE6FAf6C1c0006b81ce04308E225B01D9b667A6E"),
    address!("0xE19474aC8136349b568bbB7C0e9FFd90EC09Eeb9"),
];

/// Networks never included in a multi-chain deployment.
pub const DEFAULT_SKIP: &[&str] = &[
    "hardhat",
    "ropsten",
    "rinkeby",
    "goerli",
    "kovan",
    "bscTest",
    "polygonMumbai",
    "defiKingdom",
];

/// Settings shared by every chain in a deployment.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DeployDefaults {
    pub admin: Address,
    pub operators: Vec<Address>,
    /// Chain names excluded from `deploy_all`.
    pub skip: Vec<String>,
}

impl Default for DeployDefaults {
    fn default() -> Self {
        Self {
            admin: DEFAULT_ADMIN,
            operators: DEFAULT_OPERATORS.to_vec(),
            skip: DEFAULT_SKIP.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Per-chain registry contents.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChainConfig {
    pub name: String,
    pub id: u64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub admin: Option<Address>,
    #[serde(default)]
    pub dex: Vec<Address>,
    #[serde(default)]
    pub cross_chain: Vec<Address>,
    #[serde(default)]
    pub any_router: Vec<Address>,
    /// Also whitelist the built-in well-known routers for this chain.
    #[serde(default)]
    pub known_routers: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeployConfig {
    #[serde(default)]
    pub defaults: DeployDefaults,
    pub chains: Vec<ChainConfig>,
}

impl DeployConfig {
    pub fn load(path: impl AsRef<Path>) -> WhitelistResult<Self> {
        let path = path.as_ref();
        let raw = std::fs::read_to_string(path).map_err(|e| {
            WhitelistError::Config(format!("cannot read {}: {e}", path.display()))
        })?;
        let config = Self::from_json(&raw)?;
        tracing::info!(path = %path.display(), chains = config.chains.len(), "loaded deploy config");
        Ok(config)
    }

    pub fn from_json(raw: &str) -> WhitelistResult<Self> {
        let config: Self = serde_json::from_str(raw)
            .map_err(|e| WhitelistError::Config(format!("malformed deploy config: {e}")))?;
        config.validate()?;
        Ok(config)
    }

    /// Chain names must be non-empty and ids unique.
    pub fn validate(&self) -> WhitelistResult<()> {
        let mut ids = HashSet::new();
        for chain in &self.chains {
            if chain.name.trim().is_empty() {
                return Err(WhitelistError::Config(format!(
                    "chain {} has an empty name",
                    chain.id
                )));
            }
            if !ids.insert(chain.id) {
                return Err(WhitelistError::Config(format!(
                    "chain id {} is configured more than once",
                    chain.id
                )));
            }
        }
        Ok(())
    }

    pub fn chain(&self, id: u64) -> Option<&ChainConfig> {
        self.chains.iter().find(|c| c.id == id)
    }

    pub fn is_skipped(&self, chain: &ChainConfig) -> bool {
        self.defaults.skip.iter().any(|s| *s == chain.name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "chains": [
            { "name": "ethereum", "id": 1, "dex": ["0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"] },
            { "name": "goerli", "id": 5, "dex": [] },
            {
                "name": "bsc",
                "id": 56,
                "admin": "0x1111111111111111111111111111111111111111",
                "dex": [],
                "crossChain": ["0x2222222222222222222222222222222222222222"],
                "knownRouters": true
            }
        ]
    }"#;

    #[test]
    fn parses_chain_entries_with_defaults() {
        let config = DeployConfig::from_json(SAMPLE).unwrap();
        assert_eq!(config.defaults, DeployDefaults::default());
        assert_eq!(config.chains.len(), 3);

        let bsc = config.chain(56).unwrap();
        assert_eq!(bsc.admin, Some(Address::repeat_byte(0x11)));
        assert_eq!(bsc.cross_chain, vec![Address::repeat_byte(0x22)]);
        assert!(bsc.any_router.is_empty());
        assert!(bsc.known_routers);

        assert!(config.chain(137).is_none());
    }

    #[test]
    fn testnets_are_skipped_by_default() {
        let config = DeployConfig::from_json(SAMPLE).unwrap();
        assert!(config.is_skipped(config.chain(5).unwrap()));
        assert!(!config.is_skipped(config.chain(1).unwrap()));
    }

    #[test]
    fn duplicate_chain_ids_are_rejected() {
        let raw = r#"{ "chains": [ { "name": "a", "id": 1 }, { "name": "b", "id": 1 } ] }"#;
        let err = DeployConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, WhitelistError::Config(_)));
    }

    #[test]
    fn malformed_address_is_a_config_error() {
        let raw = r#"{ "chains": [ { "name": "a", "id": 1, "dex": ["0x12"] } ] }"#;
        let err = DeployConfig::from_json(raw).unwrap_err();
        assert!(matches!(err, WhitelistError::Config(_)));
    }

    #[test]
    fn partial_defaults_keep_the_rest() {
        let raw = r#"{
            "defaults": { "operators": [] },
            "chains": []
        }"#;
        let config = DeployConfig::from_json(raw).unwrap();
        assert!(config.defaults.operators.is_empty());
        assert_eq!(config.defaults.admin, DEFAULT_ADMIN);
    }
}
