//! Signature-gated admission ("bouncer") contract.
//!
//! Instead of keeping an allowlist on-chain, admission is granted to anyone who
//! presents an ECDSA signature produced by an address holding the bouncer role.
//! Grants are signed off-band over a message binding this contract and the
//! claimant, optionally narrowed to a single method or to the full call payload.
//!
//! Design notes:
//! - Role membership is read live on every validation. Removing a bouncer
//!   immediately invalidates every signature that key ever produced.
//! - The validity views are pure. The state-changing doors (`enter`,
//!   `enter_vip`) enforce their own one-shot admission flags, so a consumed
//!   grant cannot re-run the action; `enter_room` is idempotent instead, since
//!   its grant pins the room number.
//! - Call payloads are explicit `bytes` arguments; nothing is sliced out of
//!   ambient calldata.

use alloc::{vec, vec::Vec};

use stylus_sdk::{
    abi::Bytes,
    alloy_primitives::{keccak256, Address, U256},
    prelude::*,
};

use alloy_sol_types::sol;
use stylus_sdk::stylus_proc::SolidityError;

use signature_bouncer_types::message::{
    call_data_message, identity_message, method_message, payload_message, CallShapeError,
};

use crate::{
    access::{
        ownable::Ownable,
        roles::{bouncer_role, RoleRegistry},
    },
    utils::{crypto::recover_signer, digest::eth_signed_message_hash},
};

sol! {
    #[derive(Debug)]
    error AlreadyInitialized();
    #[derive(Debug)]
    error Unauthorized(address caller);
    #[derive(Debug)]
    error InvalidAccount(address account);
    #[derive(Debug)]
    error InvalidCallShape(uint256 length);
    #[derive(Debug)]
    error PermissionDenied(address claimant);
    #[derive(Debug)]
    error AlreadyAdmitted(address claimant);
}

#[derive(SolidityError, Debug)]
pub enum BouncerError {
    AlreadyInitialized(AlreadyInitialized),
    Unauthorized(Unauthorized),
    InvalidAccount(InvalidAccount),
    InvalidCallShape(InvalidCallShape),
    PermissionDenied(PermissionDenied),
    AlreadyAdmitted(AlreadyAdmitted),
}

impl From<CallShapeError> for BouncerError {
    fn from(err: CallShapeError) -> Self {
        BouncerError::InvalidCallShape(InvalidCallShape {
            length: U256::from(err.observed_len()),
        })
    }
}

sol_storage! {
    /// Bouncer-gated door with per-scope admission records.
    #[entrypoint]
    pub struct SignatureBouncer {
        /// Admin gate for bouncer management.
        Ownable ownable;
        /// Live role membership; the only state signature validation reads.
        RoleRegistry roles;

        /// One-shot front-door admissions.
        mapping(address => bool) admitted;
        /// One-shot VIP admissions (method-scoped grants).
        mapping(address => bool) vip;
        /// Room assignments (payload-scoped grants); zero means unassigned.
        mapping(address => uint256) room_of;
    }
}

#[public]
impl SignatureBouncer {
    /// One-time setup; the caller becomes owner.
    pub fn initialize(&mut self) -> Result<(), BouncerError> {
        if !self.ownable.owner().is_zero() {
            return Err(BouncerError::AlreadyInitialized(AlreadyInitialized {}));
        }
        let sender = self.vm().msg_sender();
        self.ownable.set_owner(sender);
        Ok(())
    }

    pub fn owner(&self) -> Address {
        self.ownable.owner()
    }

    pub fn transfer_ownership(&mut self, new_owner: Address) -> Result<(), BouncerError> {
        self.ensure_owner(self.vm().msg_sender())?;
        if new_owner.is_zero() {
            return Err(BouncerError::InvalidAccount(InvalidAccount {
                account: new_owner,
            }));
        }
        self.ownable.set_owner(new_owner);
        Ok(())
    }

    /// Authorize `bouncer` to sign admission grants.
    pub fn add_bouncer(&mut self, bouncer: Address) -> Result<(), BouncerError> {
        self.ensure_owner(self.vm().msg_sender())?;
        if bouncer.is_zero() {
            return Err(BouncerError::InvalidAccount(InvalidAccount { account: bouncer }));
        }
        self.roles.add_role(bouncer_role(), bouncer);
        Ok(())
    }

    /// Revoke `bouncer`. Every outstanding signature from this key stops
    /// validating with the next call.
    pub fn remove_bouncer(&mut self, bouncer: Address) -> Result<(), BouncerError> {
        self.ensure_owner(self.vm().msg_sender())?;
        if bouncer.is_zero() {
            return Err(BouncerError::InvalidAccount(InvalidAccount { account: bouncer }));
        }
        self.roles.remove_role(bouncer_role(), bouncer);
        Ok(())
    }

    pub fn is_bouncer(&self, account: Address) -> bool {
        self.roles.has_role(bouncer_role(), account)
    }

    /// Whether `sig` admits `claimant` to any method of this contract.
    pub fn is_valid_signature(&self, claimant: Address, sig: Bytes) -> bool {
        let message = identity_message(self.vm().contract_address(), claimant);
        self.is_signed_by_bouncer(&message, &sig)
    }

    /// Whether `sig` admits `claimant` to the method whose selector leads
    /// `call_data`. Errors if `call_data` cannot carry a selector.
    pub fn is_valid_signature_and_method(
        &self,
        claimant: Address,
        call_data: Bytes,
        sig: Bytes,
    ) -> Result<bool, BouncerError> {
        let message = method_message(self.vm().contract_address(), claimant, &call_data)?;
        Ok(self.is_signed_by_bouncer(&message, &sig))
    }

    /// Whether `sig` admits `claimant` to the exact call in `call_data`, which
    /// must still carry the trailing signature encoding the verifier strips.
    /// Errors if `call_data` is not longer than that tail.
    pub fn is_valid_signature_and_data(
        &self,
        claimant: Address,
        call_data: Bytes,
        sig: Bytes,
    ) -> Result<bool, BouncerError> {
        let message = call_data_message(self.vm().contract_address(), claimant, &call_data)?;
        Ok(self.is_signed_by_bouncer(&message, &sig))
    }

    /// Front door: any grant for the caller opens it, once.
    pub fn enter(&mut self, sig: Bytes) -> Result<(), BouncerError> {
        let claimant = self.vm().msg_sender();
        if self.admitted.get(claimant) {
            return Err(BouncerError::AlreadyAdmitted(AlreadyAdmitted { claimant }));
        }
        let message = identity_message(self.vm().contract_address(), claimant);
        self.ensure_admission(claimant, &message, &sig)?;
        self.admitted.insert(claimant, true);
        Ok(())
    }

    /// VIP door: the grant must name this method specifically. A front-door
    /// grant does not open it.
    pub fn enter_vip(&mut self, sig: Bytes) -> Result<(), BouncerError> {
        let claimant = self.vm().msg_sender();
        if self.vip.get(claimant) {
            return Err(BouncerError::AlreadyAdmitted(AlreadyAdmitted { claimant }));
        }
        let message = method_message(
            self.vm().contract_address(),
            claimant,
            &selector("enterVip(bytes)"),
        )?;
        self.ensure_admission(claimant, &message, &sig)?;
        self.vip.insert(claimant, true);
        Ok(())
    }

    /// Room door: the grant covers the room number as well. Re-presenting the
    /// same grant reassigns the same room, so no one-shot flag is needed.
    pub fn enter_room(&mut self, room: U256, sig: Bytes) -> Result<(), BouncerError> {
        let claimant = self.vm().msg_sender();
        // The signed bytes are the raw calldata of this call with the signature
        // tail stripped: selector, room word, offset of the `bytes sig` tail.
        let mut payload = Vec::with_capacity(4 + 64);
        payload.extend_from_slice(&selector("enterRoom(uint256,bytes)"));
        payload.extend_from_slice(&room.to_be_bytes::<32>());
        payload.extend_from_slice(&U256::from(64u64).to_be_bytes::<32>());
        let message = payload_message(self.vm().contract_address(), claimant, &payload);
        self.ensure_admission(claimant, &message, &sig)?;
        self.room_of.insert(claimant, room);
        Ok(())
    }

    pub fn is_admitted(&self, account: Address) -> bool {
        self.admitted.get(account)
    }

    pub fn is_vip(&self, account: Address) -> bool {
        self.vip.get(account)
    }

    pub fn room_of(&self, account: Address) -> U256 {
        self.room_of.get(account)
    }
}

impl SignatureBouncer {
    fn ensure_owner(&self, caller: Address) -> Result<(), BouncerError> {
        if !self.ownable.is_owner(caller) {
            return Err(BouncerError::Unauthorized(Unauthorized { caller }));
        }
        Ok(())
    }

    /// Recover the signer of `message` and test bouncer membership.
    ///
    /// Every recovery failure collapses to `false`; callers never learn whether
    /// a signature was malformed or merely unauthorized.
    fn is_signed_by_bouncer(&self, message: &[u8], sig: &[u8]) -> bool {
        let digest = eth_signed_message_hash(message);
        match recover_signer(digest, sig) {
            Ok(signer) => self.roles.has_role(bouncer_role(), signer),
            Err(_) => false,
        }
    }

    fn ensure_admission(
        &self,
        claimant: Address,
        message: &[u8],
        sig: &[u8],
    ) -> Result<(), BouncerError> {
        if self.is_signed_by_bouncer(message, sig) {
            Ok(())
        } else {
            Err(BouncerError::PermissionDenied(PermissionDenied { claimant }))
        }
    }
}

fn selector(signature: &str) -> [u8; 4] {
    let h = keccak256(signature.as_bytes());
    [h[0], h[1], h[2], h[3]]
}
