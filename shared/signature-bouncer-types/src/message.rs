//! Canonical grant messages, shared by the on-chain verifier and off-chain signer.
//!
//! A grant binds the verifying contract and the claimant, optionally narrowed to a
//! single method selector or to a full call payload. Both sides must reproduce these
//! byte sequences exactly; the signature is taken over them (after hashing and the
//! personal-message preamble, which live on each side of the boundary).

use alloc::vec::Vec;

use alloy_primitives::Address;

/// Length of an EVM method selector.
pub const SELECTOR_LEN: usize = 4;

/// ABI tail contributed by a trailing `bytes signature` argument: a 32-byte length
/// word plus the 65-byte signature padded to 96 bytes.
pub const SIGNATURE_TAIL_LEN: usize = 128;

/// The call payload does not have the shape the grant scope requires.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CallShapeError {
    /// Payload too short to carry a method selector.
    MissingSelector { len: usize },
    /// Payload too short to carry the trailing signature encoding.
    MissingSignatureTail { len: usize },
}

impl CallShapeError {
    /// Observed payload length, for error reporting.
    pub fn observed_len(&self) -> usize {
        match self {
            CallShapeError::MissingSelector { len } => *len,
            CallShapeError::MissingSignatureTail { len } => *len,
        }
    }
}

/// `verifier || claimant`, both fixed-width 20-byte addresses.
pub fn identity_message(verifier: Address, claimant: Address) -> Vec<u8> {
    payload_message(verifier, claimant, &[])
}

/// Identity message followed by an arbitrary payload.
///
/// This is the concatenation the scoped builders below reduce to; guarded calls
/// that reconstruct their own ABI prefix use it directly.
pub fn payload_message(verifier: Address, claimant: Address, payload: &[u8]) -> Vec<u8> {
    let mut buf = Vec::with_capacity(20 + 20 + payload.len());
    buf.extend_from_slice(verifier.as_slice());
    buf.extend_from_slice(claimant.as_slice());
    buf.extend_from_slice(payload);
    buf
}

/// Identity message plus the 4-byte selector leading `call_data`.
pub fn method_message(
    verifier: Address,
    claimant: Address,
    call_data: &[u8],
) -> Result<Vec<u8>, CallShapeError> {
    if call_data.len() < SELECTOR_LEN {
        return Err(CallShapeError::MissingSelector {
            len: call_data.len(),
        });
    }
    Ok(payload_message(
        verifier,
        claimant,
        &call_data[..SELECTOR_LEN],
    ))
}

/// Identity message plus all of `call_data` except the trailing signature encoding.
///
/// Assumes the signature is the last, dynamically-sized argument of the guarded
/// call and every other argument is fixed-size. That encoding convention is the
/// caller's responsibility; only the minimum length is checked here.
pub fn call_data_message(
    verifier: Address,
    claimant: Address,
    call_data: &[u8],
) -> Result<Vec<u8>, CallShapeError> {
    if call_data.len() <= SIGNATURE_TAIL_LEN {
        return Err(CallShapeError::MissingSignatureTail {
            len: call_data.len(),
        });
    }
    Ok(payload_message(
        verifier,
        claimant,
        &call_data[..call_data.len() - SIGNATURE_TAIL_LEN],
    ))
}
