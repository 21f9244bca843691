//! Static label registry for well-known router contracts.
//!
//! Gives instant protocol identification without external API calls. The
//! report enriches addresses with it, and `knownRouters` deployments seed
//! their category sets from it.

use alloy_primitives::{address, Address};
use std::collections::HashMap;
use std::sync::LazyLock;
use whitelist_core::Category;

/// Router metadata: where it lives, what it is, which set it belongs in.
#[derive(Debug, Clone)]
pub struct RouterLabel {
    pub chain_id: u64,
    pub category: Category,
    pub protocol: &'static str,
    pub name: &'static str,
}

impl RouterLabel {
    const fn new(
        chain_id: u64,
        category: Category,
        protocol: &'static str,
        name: &'static str,
    ) -> Self {
        Self {
            chain_id,
            category,
            protocol,
            name,
        }
    }
}

const ETHEREUM: u64 = 1;

/// Returns the label for a known router, if any.
pub fn lookup(address: &Address) -> Option<&'static RouterLabel> {
    KNOWN_ROUTERS.get(address)
}

/// `"Protocol Name"` for a known router.
pub fn describe(address: &Address) -> Option<String> {
    lookup(address).map(|l| format!("{} {}", l.protocol, l.name))
}

/// Known routers of one category on one chain, sorted for stable seeding.
pub fn known(chain_id: u64, category: Category) -> Vec<Address> {
    let mut out: Vec<Address> = KNOWN_ROUTERS
        .iter()
        .filter(|(_, l)| l.chain_id == chain_id && l.category == category)
        .map(|(a, _)| *a)
        .collect();
    out.sort();
    out
}

static KNOWN_ROUTERS: LazyLock<HashMap<Address, RouterLabel>> = LazyLock::new(|| {
    use Category::{AnyRouter, CrossChain, Dex};

    let mut m = HashMap::new();

    // ── Uniswap ──────────────────────────────────────────────
    m.insert(
        address!("0x7a250d5630B4cF539739dF2C5dAcb4c659F2488D"),
        RouterLabel::new(ETHEREUM, Dex, "Uniswap", "V2 Router"),
    );
    m.insert(
        address!("0xE592427A0AEce92De3Edee1F18E0157C05861564"),
        RouterLabel::new(ETHEREUM, Dex, "Uniswap", "V3 SwapRouter"),
    );
    m.insert(
        address!("0x68b3465833fb72A70ecDF485E0e4C7bD8665Fc45"),
        RouterLabel::new(ETHEREUM, Dex, "Uniswap", "V3 SwapRouter02"),
    );
    m.insert(
        address!("0x3fC91A3afd70395Cd496C647d5a6CC9D4B2b7FAD"),
        RouterLabel::new(ETHEREUM, Dex, "Uniswap", "Universal Router"),
    );

    // ── Aggregators ──────────────────────────────────────────
    m.insert(
        address!("0x1111111254EEB25477B68fb85Ed929f73A960582"),
        RouterLabel::new(ETHEREUM, Dex, "1inch", "V5 Router"),
    );
    m.insert(
        address!("0x111111125421cA6dc452d289314280a0f8842A65"),
        RouterLabel::new(ETHEREUM, Dex, "1inch", "V6 Router"),
    );
    m.insert(
        address!("0xDef1C0ded9bec7F1a1670819833240f027b25EfF"),
        RouterLabel::new(ETHEREUM, Dex, "0x Protocol", "Exchange Proxy"),
    );
    m.insert(
        address!("0x881D40237659C251811CEC9c364ef91dC08D300C"),
        RouterLabel::new(ETHEREUM, Dex, "MetaMask", "Swap Router"),
    );

    // ── Bridges ──────────────────────────────────────────────
    m.insert(
        address!("0x8731d54E9D02c286767d56ac03e8037C07e01e98"),
        RouterLabel::new(ETHEREUM, CrossChain, "Stargate", "Router"),
    );
    m.insert(
        address!("0x5c7BCd6E7De5423a257D81B442095A1a6ced35C5"),
        RouterLabel::new(ETHEREUM, CrossChain, "Across", "SpokePool"),
    );
    m.insert(
        address!("0x5427FEFA711Eff984124bFBB1AB6fbf5E3DA1820"),
        RouterLabel::new(ETHEREUM, CrossChain, "Celer", "cBridge"),
    );

    // ── Multichain ───────────────────────────────────────────
    m.insert(
        address!("0x6b7a87899490EcE95443e979cA9485CBE7E71522"),
        RouterLabel::new(ETHEREUM, AnyRouter, "Multichain", "AnyswapV4Router"),
    );

    m
});
