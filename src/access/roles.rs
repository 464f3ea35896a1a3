//! Minimal role registry.
//!
//! Roles are `bytes32` identifiers; membership is a flat per-role set. Granting
//! and revoking are idempotent and carry no access policy of their own; the
//! embedding contract gates both behind its owner.

use alloc::{vec, vec::Vec};

use stylus_sdk::{
    alloy_primitives::{keccak256, Address, FixedBytes},
    prelude::*,
};

sol_storage! {
    /// Role identifier -> member -> membership flag.
    pub struct RoleRegistry {
        mapping(bytes32 => mapping(address => bool)) members;
    }
}

/// Role held by addresses authorized to sign admission grants.
pub fn bouncer_role() -> FixedBytes<32> {
    keccak256(b"bouncer")
}

impl RoleRegistry {
    /// Whether `account` currently holds `role`. Read live; never cached.
    pub fn has_role(&self, role: FixedBytes<32>, account: Address) -> bool {
        self.members.getter(role).get(account)
    }

    /// Grant `role` to `account`; returns whether membership changed.
    pub fn add_role(&mut self, role: FixedBytes<32>, account: Address) -> bool {
        if self.has_role(role, account) {
            return false;
        }
        self.members.setter(role).insert(account, true);
        true
    }

    /// Revoke `role` from `account`; returns whether membership changed.
    pub fn remove_role(&mut self, role: FixedBytes<32>, account: Address) -> bool {
        if !self.has_role(role, account) {
            return false;
        }
        self.members.setter(role).insert(account, false);
        true
    }
}
