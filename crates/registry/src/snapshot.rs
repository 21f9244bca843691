//! Serializable registry state.
//!
//! A snapshot is what the CLI keeps on disk between calls. Restoring one
//! re-checks every invariant, so a hand-edited file cannot smuggle in a zero
//! address or a blacklisted category member.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use whitelist_core::{Category, WhitelistError, WhitelistResult};

use crate::registry::AccessRegistry;
use crate::set::AddressSet;

/// Full registry state, every set in enumeration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrySnapshot {
    pub admin: Address,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pending_admin: Option<Address>,
    #[serde(default)]
    pub operators: Vec<Address>,
    #[serde(default)]
    pub dexs: Vec<Address>,
    #[serde(default)]
    pub cross_chains: Vec<Address>,
    #[serde(default)]
    pub any_routers: Vec<Address>,
    #[serde(default)]
    pub blacklist: Vec<Address>,
}

impl AccessRegistry {
    pub fn snapshot(&self) -> RegistrySnapshot {
        RegistrySnapshot {
            admin: self.admin,
            pending_admin: self.pending_admin,
            operators: self.operators.as_slice().to_vec(),
            dexs: self.dexs.as_slice().to_vec(),
            cross_chains: self.cross_chains.as_slice().to_vec(),
            any_routers: self.any_routers.as_slice().to_vec(),
            blacklist: self.blacklist.as_slice().to_vec(),
        }
    }

    /// Rebuilds a registry from a snapshot. The event log starts empty.
    pub fn restore(snapshot: RegistrySnapshot) -> WhitelistResult<Self> {
        if snapshot.admin.is_zero() {
            return Err(WhitelistError::InvalidState("admin is the zero address".into()));
        }

        let mut registry = AccessRegistry::empty(snapshot.admin);
        // A zero nominee is indistinguishable from no nomination.
        registry.pending_admin = snapshot.pending_admin.filter(|p| !p.is_zero());
        registry.operators = build_set("operators", &snapshot.operators)?;
        registry.blacklist = build_set("blacklist", &snapshot.blacklist)?;
        registry.dexs = build_set("dexs", &snapshot.dexs)?;
        registry.cross_chains = build_set("cross_chains", &snapshot.cross_chains)?;
        registry.any_routers = build_set("any_routers", &snapshot.any_routers)?;

        let blacklisted: HashSet<&Address> = snapshot.blacklist.iter().collect();
        for category in Category::ALL {
            if let Some(account) = registry
                .members(category)
                .iter()
                .find(|account| blacklisted.contains(account))
            {
                return Err(WhitelistError::InvalidState(format!(
                    "{account} is both blacklisted and whitelisted as {category}"
                )));
            }
        }

        tracing::debug!(admin = %registry.admin, "registry restored from snapshot");
        Ok(registry)
    }

    pub fn from_json(json: &str) -> WhitelistResult<Self> {
        Self::restore(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> WhitelistResult<String> {
        Ok(serde_json::to_string_pretty(&self.snapshot())?)
    }
}

fn build_set(name: &str, members: &[Address]) -> WhitelistResult<AddressSet> {
    let mut set = AddressSet::new();
    for account in members {
        if account.is_zero() {
            return Err(WhitelistError::InvalidState(format!(
                "{name} contains the zero address"
            )));
        }
        if !set.insert(*account) {
            return Err(WhitelistError::InvalidState(format!(
                "{name} lists {account} more than once"
            )));
        }
    }
    Ok(set)
}

#[cfg(test)]
mod tests {
    use super::*;

    const ADMIN: Address = Address::repeat_byte(0xAA);

    fn a(b: u8) -> Address {
        Address::repeat_byte(b)
    }

    #[test]
    fn snapshot_restores_equal_state() {
        let mut r = AccessRegistry::new(&[a(1), a(2)], ADMIN).unwrap();
        r.add_dexs(&ADMIN, &[a(3), a(4)]).unwrap();
        r.add_to_blacklist(&a(1), &[a(5)]).unwrap();
        r.transfer_admin(&ADMIN, a(9)).unwrap();

        let json = r.to_json().unwrap();
        let restored = AccessRegistry::from_json(&json).unwrap();

        assert_eq!(restored.snapshot(), r.snapshot());
        assert_eq!(restored.pending_admin(), Some(a(9)));
        assert!(restored.events().is_empty());
    }

    #[test]
    fn restore_rejects_blacklisted_category_member() {
        let snapshot = RegistrySnapshot {
            admin: ADMIN,
            pending_admin: None,
            operators: vec![],
            dexs: vec![],
            cross_chains: vec![a(1)],
            any_routers: vec![],
            blacklist: vec![a(1)],
        };
        let err = AccessRegistry::restore(snapshot).unwrap_err();
        assert!(matches!(err, WhitelistError::InvalidState(_)));
    }

    #[test]
    fn restore_rejects_zero_entries_and_duplicates() {
        let zero_admin = serde_json::json!({ "admin": Address::ZERO });
        assert!(AccessRegistry::from_json(&zero_admin.to_string()).is_err());

        let zero_member = serde_json::json!({ "admin": ADMIN, "dexs": [Address::ZERO] });
        assert!(AccessRegistry::from_json(&zero_member.to_string()).is_err());

        let duplicate = serde_json::json!({ "admin": ADMIN, "operators": [a(1), a(1)] });
        assert!(AccessRegistry::from_json(&duplicate.to_string()).is_err());
    }

    #[test]
    fn missing_sets_default_to_empty() {
        let json = serde_json::json!({ "admin": ADMIN }).to_string();
        let r = AccessRegistry::from_json(&json).unwrap();
        assert!(r.available_operators().is_empty());
        assert!(r.blacklist().is_empty());
    }
}
