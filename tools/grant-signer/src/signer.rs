//! Digest construction and signing (must match the on-chain verifier).

use alloy_primitives::{Address, FixedBytes};
use k256::{ecdsa::SigningKey, elliptic_curve::sec1::ToEncodedPoint};
use sha3::{Digest, Keccak256};

use signature_bouncer_types::message::{identity_message, payload_message};

use crate::types::{Grant, GrantScope, SignedGrant};

/// Prefix mandated by `eth_sign` / `personal_sign`; the trailing `32` is the
/// decimal ASCII length of the hash that follows.
const PERSONAL_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

fn keccak256_bytes(bytes: &[u8]) -> FixedBytes<32> {
    let mut hasher = Keccak256::new();
    hasher.update(bytes);
    let out = hasher.finalize();
    let mut buf = [0u8; 32];
    buf.copy_from_slice(out.as_slice());
    FixedBytes(buf)
}

/// Message bytes the verifier reconstructs for this grant.
pub fn grant_message(grant: &Grant) -> Vec<u8> {
    match &grant.scope {
        GrantScope::Identity => identity_message(grant.verifier, grant.claimant),
        GrantScope::Method { selector } => {
            payload_message(grant.verifier, grant.claimant, selector)
        }
        GrantScope::CallData { payload } => {
            payload_message(grant.verifier, grant.claimant, payload)
        }
    }
}

/// Personal-message digest the bouncer key signs: the grant message is hashed,
/// prefixed, and hashed again.
pub fn grant_digest(grant: &Grant) -> FixedBytes<32> {
    let inner = keccak256_bytes(&grant_message(grant));
    let mut buf = Vec::with_capacity(PERSONAL_PREFIX.len() + 32);
    buf.extend_from_slice(PERSONAL_PREFIX);
    buf.extend_from_slice(inner.as_slice());
    keccak256_bytes(&buf)
}

/// Sign `grant`, producing the 65-byte signature the contract accepts.
///
/// `v` is emitted as 27/28; `s` is already in the lower half order, so the
/// verifier's malleability check never fires on signatures produced here.
pub fn sign_grant(grant: &Grant, key: &SigningKey) -> Result<SignedGrant, k256::ecdsa::Error> {
    let digest = grant_digest(grant);
    let (signature, recovery_id) = key.sign_prehash_recoverable(digest.as_slice())?;
    let mut bytes = Vec::with_capacity(65);
    bytes.extend_from_slice(&signature.to_bytes());
    bytes.push(27 + recovery_id.to_byte());
    Ok(SignedGrant {
        digest,
        signature: bytes,
    })
}

/// Ethereum address of the signing key: keccak of the uncompressed public key,
/// low 20 bytes.
pub fn signer_address(key: &SigningKey) -> Address {
    let point = key.verifying_key().to_encoded_point(false);
    let hash = keccak256_bytes(&point.as_bytes()[1..]);
    Address::from_slice(&hash.as_slice()[12..])
}
