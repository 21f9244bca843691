//! The access registry state machine.
//!
//! Every mutating call is checked and applied as one unit: the caller's role
//! and the whole address batch are validated before anything is written, so a
//! rejected call leaves the registry exactly as it was.

use alloy_primitives::Address;
use smallvec::SmallVec;
use whitelist_core::{AdminState, Category, RegistryError, RegistryEvent, RegistryResult, Role};

use crate::set::AddressSet;

/// Admin, pending admin, operators, the three category whitelists and the
/// blacklist of one deployment.
#[derive(Debug, Clone)]
pub struct AccessRegistry {
    pub(crate) admin: Address,
    pub(crate) pending_admin: Option<Address>,
    pub(crate) operators: AddressSet,
    pub(crate) dexs: AddressSet,
    pub(crate) cross_chains: AddressSet,
    pub(crate) any_routers: AddressSet,
    pub(crate) blacklist: AddressSet,
    events: Vec<RegistryEvent>,
}

impl AccessRegistry {
    /// Creates a registry owned by `admin` with an initial operator set.
    pub fn new(operators: &[Address], admin: Address) -> RegistryResult<Self> {
        if admin.is_zero() {
            return Err(RegistryError::ZeroAddress);
        }
        check_non_zero(operators)?;

        let mut registry = Self::empty(admin);
        for operator in operators {
            if registry.operators.insert(*operator) {
                registry
                    .events
                    .push(RegistryEvent::OperatorAdded { account: *operator });
            }
        }

        tracing::info!(admin = %admin, operators = registry.operators.len(), "registry created");
        Ok(registry)
    }

    pub(crate) fn empty(admin: Address) -> Self {
        Self {
            admin,
            pending_admin: None,
            operators: AddressSet::new(),
            dexs: AddressSet::new(),
            cross_chains: AddressSet::new(),
            any_routers: AddressSet::new(),
            blacklist: AddressSet::new(),
            events: Vec::new(),
        }
    }

    // -----------------------------------------------------------------------
    // Role checks
    // -----------------------------------------------------------------------

    /// Highest role `caller` holds, if any.
    pub fn role_of(&self, caller: &Address) -> Option<Role> {
        if *caller == self.admin {
            Some(Role::Admin)
        } else if self.operators.contains(caller) {
            Some(Role::Operator)
        } else {
            None
        }
    }

    fn require_admin(&self, caller: &Address) -> RegistryResult<()> {
        if *caller != self.admin {
            tracing::warn!(caller = %caller, "rejected: admin role required");
            return Err(RegistryError::NotAnAdmin(*caller));
        }
        Ok(())
    }

    fn require_operator_or_admin(&self, caller: &Address) -> RegistryResult<()> {
        if self.role_of(caller).is_none() {
            tracing::warn!(caller = %caller, "rejected: operator or admin role required");
            return Err(RegistryError::NotAnOperatorOrAdmin(*caller));
        }
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Operators
    // -----------------------------------------------------------------------

    pub fn add_operators(&mut self, caller: &Address, accounts: &[Address]) -> RegistryResult<()> {
        self.require_admin(caller)?;
        check_non_zero(accounts)?;

        let mut added = 0usize;
        for account in accounts {
            if self.operators.insert(*account) {
                self.events
                    .push(RegistryEvent::OperatorAdded { account: *account });
                added += 1;
            } else {
                tracing::debug!(account = %account, "already an operator");
            }
        }

        tracing::info!(caller = %caller, added, "operators added");
        Ok(())
    }

    pub fn remove_operators(&mut self, caller: &Address, accounts: &[Address]) -> RegistryResult<()> {
        self.require_admin(caller)?;

        let mut removed = 0usize;
        for account in accounts {
            if self.operators.remove(account) {
                self.events
                    .push(RegistryEvent::OperatorRemoved { account: *account });
                removed += 1;
            }
        }

        tracing::info!(caller = %caller, removed, "operators removed");
        Ok(())
    }

    pub fn is_operator(&self, account: &Address) -> bool {
        self.operators.contains(account)
    }

    pub fn available_operators(&self) -> &[Address] {
        self.operators.as_slice()
    }

    // -----------------------------------------------------------------------
    // Categories
    // -----------------------------------------------------------------------

    fn category_set(&self, category: Category) -> &AddressSet {
        match category {
            Category::Dex => &self.dexs,
            Category::CrossChain => &self.cross_chains,
            Category::AnyRouter => &self.any_routers,
        }
    }

    fn category_set_mut(&mut self, category: Category) -> &mut AddressSet {
        match category {
            Category::Dex => &mut self.dexs,
            Category::CrossChain => &mut self.cross_chains,
            Category::AnyRouter => &mut self.any_routers,
        }
    }

    /// Whitelists `accounts` under `category`.
    ///
    /// Fails on the first zero or blacklisted address in batch order.
    pub fn add(
        &mut self,
        caller: &Address,
        category: Category,
        accounts: &[Address],
    ) -> RegistryResult<()> {
        self.require_operator_or_admin(caller)?;
        for account in accounts {
            if account.is_zero() {
                return Err(RegistryError::ZeroAddress);
            }
            if self.blacklist.contains(account) {
                tracing::warn!(%category, account = %account, "rejected: blacklisted");
                return Err(RegistryError::Blacklisted(*account));
            }
        }

        let mut added = 0usize;
        for account in accounts {
            if self.category_set_mut(category).insert(*account) {
                self.events.push(RegistryEvent::Whitelisted {
                    category,
                    account: *account,
                });
                added += 1;
            }
        }

        tracing::info!(caller = %caller, %category, added, "whitelisted");
        Ok(())
    }

    pub fn remove(
        &mut self,
        caller: &Address,
        category: Category,
        accounts: &[Address],
    ) -> RegistryResult<()> {
        self.require_operator_or_admin(caller)?;

        let mut removed = 0usize;
        for account in accounts {
            if self.category_set_mut(category).remove(account) {
                self.events.push(RegistryEvent::Unwhitelisted {
                    category,
                    account: *account,
                });
                removed += 1;
            }
        }

        tracing::info!(caller = %caller, %category, removed, "unwhitelisted");
        Ok(())
    }

    pub fn is_whitelisted(&self, category: Category, account: &Address) -> bool {
        self.category_set(category).contains(account)
    }

    pub fn members(&self, category: Category) -> &[Address] {
        self.category_set(category).as_slice()
    }

    pub fn add_dexs(&mut self, caller: &Address, accounts: &[Address]) -> RegistryResult<()> {
        self.add(caller, Category::Dex, accounts)
    }

    pub fn remove_dexs(&mut self, caller: &Address, accounts: &[Address]) -> RegistryResult<()> {
        self.remove(caller, Category::Dex, accounts)
    }

    pub fn is_whitelisted_dex(&self, account: &Address) -> bool {
        self.is_whitelisted(Category::Dex, account)
    }

    pub fn available_dexs(&self) -> &[Address] {
        self.members(Category::Dex)
    }

    pub fn add_cross_chains(&mut self, caller: &Address, accounts: &[Address]) -> RegistryResult<()> {
        self.add(caller, Category::CrossChain, accounts)
    }

    pub fn remove_cross_chains(
        &mut self,
        caller: &Address,
        accounts: &[Address],
    ) -> RegistryResult<()> {
        self.remove(caller, Category::CrossChain, accounts)
    }

    pub fn is_whitelisted_cross_chain(&self, account: &Address) -> bool {
        self.is_whitelisted(Category::CrossChain, account)
    }

    pub fn available_cross_chains(&self) -> &[Address] {
        self.members(Category::CrossChain)
    }

    pub fn add_any_routers(&mut self, caller: &Address, accounts: &[Address]) -> RegistryResult<()> {
        self.add(caller, Category::AnyRouter, accounts)
    }

    pub fn remove_any_routers(
        &mut self,
        caller: &Address,
        accounts: &[Address],
    ) -> RegistryResult<()> {
        self.remove(caller, Category::AnyRouter, accounts)
    }

    pub fn is_whitelisted_any_router(&self, account: &Address) -> bool {
        self.is_whitelisted(Category::AnyRouter, account)
    }

    pub fn available_any_routers(&self) -> &[Address] {
        self.members(Category::AnyRouter)
    }

    // -----------------------------------------------------------------------
    // Blacklist
    // -----------------------------------------------------------------------

    /// Blacklists `accounts`, evicting each from every category.
    ///
    /// Operators are left alone: a blacklisted operator keeps its role.
    pub fn add_to_blacklist(&mut self, caller: &Address, accounts: &[Address]) -> RegistryResult<()> {
        self.require_operator_or_admin(caller)?;
        check_non_zero(accounts)?;

        for account in accounts {
            if self.blacklist.insert(*account) {
                self.events
                    .push(RegistryEvent::Blacklisted { account: *account });
            }
            for category in self.evict(account) {
                tracing::info!(%category, account = %account, "evicted by blacklist");
                self.events.push(RegistryEvent::Evicted {
                    category,
                    account: *account,
                });
            }
        }

        tracing::info!(caller = %caller, count = accounts.len(), "blacklisted");
        Ok(())
    }

    /// Removes `account` from every category it is in.
    fn evict(&mut self, account: &Address) -> SmallVec<[Category; 3]> {
        let mut evicted = SmallVec::new();
        for category in Category::ALL {
            if self.category_set_mut(category).remove(account) {
                evicted.push(category);
            }
        }
        evicted
    }

    /// Lifts the blacklist entry only; evicted memberships are not restored.
    pub fn remove_from_blacklist(
        &mut self,
        caller: &Address,
        accounts: &[Address],
    ) -> RegistryResult<()> {
        self.require_operator_or_admin(caller)?;

        let mut removed = 0usize;
        for account in accounts {
            if self.blacklist.remove(account) {
                self.events
                    .push(RegistryEvent::Unblacklisted { account: *account });
                removed += 1;
            }
        }

        tracing::info!(caller = %caller, removed, "removed from blacklist");
        Ok(())
    }

    pub fn is_blacklisted(&self, account: &Address) -> bool {
        self.blacklist.contains(account)
    }

    pub fn blacklist(&self) -> &[Address] {
        self.blacklist.as_slice()
    }

    // -----------------------------------------------------------------------
    // Admin handover
    // -----------------------------------------------------------------------

    pub fn admin(&self) -> Address {
        self.admin
    }

    pub fn pending_admin(&self) -> Option<Address> {
        self.pending_admin
    }

    pub fn admin_state(&self) -> AdminState {
        match self.pending_admin {
            Some(nominee) => AdminState::TransferPending(nominee),
            None => AdminState::Stable,
        }
    }

    /// Nominates `new_admin`; the current admin keeps full authority until
    /// the nominee accepts.
    ///
    /// A later nomination replaces an earlier one. The zero address is not
    /// rejected: nobody can call as zero, so nominating it withdraws any
    /// pending nomination.
    pub fn transfer_admin(&mut self, caller: &Address, new_admin: Address) -> RegistryResult<()> {
        self.require_admin(caller)?;

        self.pending_admin = (!new_admin.is_zero()).then_some(new_admin);
        self.events.push(RegistryEvent::AdminTransferStarted {
            admin: self.admin,
            nominee: new_admin,
        });

        tracing::info!(admin = %self.admin, nominee = %new_admin, "admin transfer started");
        Ok(())
    }

    pub fn accept_admin(&mut self, caller: &Address) -> RegistryResult<()> {
        if self.pending_admin != Some(*caller) {
            tracing::warn!(caller = %caller, "rejected: not the pending admin");
            return Err(RegistryError::NotPendingAdmin(*caller));
        }

        let previous = std::mem::replace(&mut self.admin, *caller);
        self.pending_admin = None;
        self.events.push(RegistryEvent::AdminTransferred {
            previous,
            admin: *caller,
        });

        tracing::info!(previous = %previous, admin = %caller, "admin transferred");
        Ok(())
    }

    // -----------------------------------------------------------------------
    // Events
    // -----------------------------------------------------------------------

    /// Events recorded since the last drain, oldest first.
    pub fn events(&self) -> &[RegistryEvent] {
        &self.events
    }

    pub fn drain_events(&mut self) -> Vec<RegistryEvent> {
        std::mem::take(&mut self.events)
    }
}

fn check_non_zero(accounts: &[Address]) -> RegistryResult<()> {
    if accounts.iter().any(|account| account.is_zero()) {
        return Err(RegistryError::ZeroAddress);
    }
    Ok(())
}
