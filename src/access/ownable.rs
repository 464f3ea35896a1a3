//! Single-owner cell gating admin operations.

use alloc::{vec, vec::Vec};

use stylus_sdk::{alloy_primitives::Address, prelude::*};

sol_storage! {
    /// Owner identity; zero until the embedding contract is initialized.
    pub struct Ownable {
        address owner;
    }
}

impl Ownable {
    pub fn owner(&self) -> Address {
        self.owner.get()
    }

    pub fn is_owner(&self, caller: Address) -> bool {
        caller == self.owner.get()
    }

    /// Unconditional write; the embedding contract enforces who may call this.
    pub fn set_owner(&mut self, new_owner: Address) {
        self.owner.set(new_owner);
    }
}
