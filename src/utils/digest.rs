//! Personal-message digest for grant messages.
//!
//! Grants are signed `eth_sign`-style: the grant message is hashed, and that hash is
//! hashed again under the `"\x19Ethereum Signed Message:\n32"` preamble. The preamble
//! domain-separates grant signatures from transaction signatures, so a signed grant
//! can never double as any other kind of authorization.

use alloc::vec::Vec;

use stylus_sdk::alloy_primitives::{keccak256, FixedBytes};

/// Prefix mandated by `eth_sign` / `personal_sign`; the trailing `32` is the decimal
/// ASCII length of the hash that follows.
const PERSONAL_PREFIX: &[u8] = b"\x19Ethereum Signed Message:\n32";

/// `keccak256(prefix || keccak256(message))`, the value bouncer keys actually sign.
pub fn eth_signed_message_hash(message: &[u8]) -> FixedBytes<32> {
    let inner = keccak256(message);
    let mut buf = Vec::with_capacity(PERSONAL_PREFIX.len() + 32);
    buf.extend_from_slice(PERSONAL_PREFIX);
    buf.extend_from_slice(inner.as_slice());
    keccak256(buf)
}
