use alloy_primitives::{Address, FixedBytes};

/// What a grant authorizes. Mirrors the contract's three guard scopes.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum GrantScope {
    /// Any method of the verifying contract.
    Identity,
    /// A single method, identified by its 4-byte selector.
    Method { selector: [u8; 4] },
    /// An exact call payload: the ABI prefix of the guarded call (selector,
    /// fixed-size arguments, offset word), without the trailing signature
    /// encoding the verifier strips.
    CallData { payload: Vec<u8> },
}

/// A grant to be signed: the verifying contract plus the claiming caller,
/// optionally narrowed by scope.
#[derive(Clone, Debug)]
pub struct Grant {
    pub verifier: Address,
    pub claimant: Address,
    pub scope: GrantScope,
}

/// Finished grant: the digest that was signed and the 65-byte `r || s || v`
/// signature the claimant submits on-chain.
#[derive(Clone, Debug)]
pub struct SignedGrant {
    pub digest: FixedBytes<32>,
    pub signature: Vec<u8>,
}
