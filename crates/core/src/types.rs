//! Domain types for the whitelist registry.

use alloy_primitives::Address;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// Whitelist categories an operator may manage.
///
/// The blacklist is not a category: it overrides all three.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Category {
    Dex,
    CrossChain,
    AnyRouter,
}

impl Category {
    pub const ALL: [Category; 3] = [Category::Dex, Category::CrossChain, Category::AnyRouter];

    pub const fn as_str(self) -> &'static str {
        match self {
            Category::Dex => "dex",
            Category::CrossChain => "cross_chain",
            Category::AnyRouter => "any_router",
        }
    }

    /// Heading used when rendering the category for humans.
    pub const fn title(self) -> &'static str {
        match self {
            Category::Dex => "DEXs",
            Category::CrossChain => "Cross chains",
            Category::AnyRouter => "Any routers",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Category {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().replace('-', "_").as_str() {
            "dex" | "dexs" => Ok(Category::Dex),
            "cross_chain" | "cross_chains" => Ok(Category::CrossChain),
            "any_router" | "any_routers" => Ok(Category::AnyRouter),
            other => Err(format!("unknown category: {other}")),
        }
    }
}

// ---------------------------------------------------------------------------
// Roles
// ---------------------------------------------------------------------------

/// Privilege a caller holds at the time of a call.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Role {
    Admin,
    Operator,
}

/// Position of the two-step admin handover.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "state", content = "nominee", rename_all = "snake_case")]
pub enum AdminState {
    Stable,
    TransferPending(Address),
}

impl AdminState {
    pub fn pending(&self) -> Option<Address> {
        match self {
            AdminState::Stable => None,
            AdminState::TransferPending(nominee) => Some(*nominee),
        }
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// State change recorded by a successful registry call.
///
/// One event per address that actually changed membership; idempotent
/// no-ops are not recorded.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum RegistryEvent {
    OperatorAdded {
        account: Address,
    },
    OperatorRemoved {
        account: Address,
    },
    Whitelisted {
        category: Category,
        account: Address,
    },
    Unwhitelisted {
        category: Category,
        account: Address,
    },
    Blacklisted {
        account: Address,
    },
    /// Removed from a category as a side effect of blacklisting.
    Evicted {
        category: Category,
        account: Address,
    },
    Unblacklisted {
        account: Address,
    },
    AdminTransferStarted {
        admin: Address,
        nominee: Address,
    },
    AdminTransferred {
        previous: Address,
        admin: Address,
    },
}
