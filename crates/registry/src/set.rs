//! Insertion-ordered address set.

use alloy_primitives::Address;
use std::collections::HashSet;

/// Set of addresses that enumerates in insertion order.
///
/// `index` gives O(1) membership; `members` keeps the order. Removal
/// shifts later members down so the relative order of the rest is kept.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AddressSet {
    members: Vec<Address>,
    index: HashSet<Address>,
}

impl AddressSet {
    pub fn new() -> Self {
        Self::default()
    }

    #[inline]
    pub fn contains(&self, address: &Address) -> bool {
        self.index.contains(address)
    }

    /// Returns `true` if the address was not already present.
    pub fn insert(&mut self, address: Address) -> bool {
        if !self.index.insert(address) {
            return false;
        }
        self.members.push(address);
        true
    }

    /// Returns `true` if the address was present.
    pub fn remove(&mut self, address: &Address) -> bool {
        if !self.index.remove(address) {
            return false;
        }
        if let Some(pos) = self.members.iter().position(|m| m == address) {
            self.members.remove(pos);
        }
        true
    }

    pub fn as_slice(&self) -> &[Address] {
        &self.members
    }

    pub fn len(&self) -> usize {
        self.members.len()
    }

    pub fn is_empty(&self) -> bool {
        self.members.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn a(b: u8) -> Address {
        Address::repeat_byte(b)
    }

    #[test]
    fn insert_is_idempotent() {
        let mut set = AddressSet::new();
        assert!(set.insert(a(1)));
        assert!(!set.insert(a(1)));
        assert_eq!(set.as_slice(), &[a(1)]);
    }

    #[test]
    fn removal_keeps_relative_order() {
        let mut set = AddressSet::new();
        for b in 1..=4 {
            set.insert(a(b));
        }
        assert!(set.remove(&a(2)));
        assert_eq!(set.as_slice(), &[a(1), a(3), a(4)]);
        assert!(!set.contains(&a(2)));
    }

    #[test]
    fn removing_absent_member_is_noop() {
        let mut set = AddressSet::new();
        set.insert(a(1));
        assert!(!set.remove(&a(9)));
        assert_eq!(set.len(), 1);
    }

    #[test]
    fn reinsert_after_removal_goes_to_the_end() {
        let mut set = AddressSet::new();
        set.insert(a(1));
        set.insert(a(2));
        set.remove(&a(1));
        set.insert(a(1));
        assert_eq!(set.as_slice(), &[a(2), a(1)]);
    }
}
