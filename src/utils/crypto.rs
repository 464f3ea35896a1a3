//! ECDSA signer recovery for grant signatures.
//!
//! Uses the EVM `ecrecover` precompile at address `0x01`. Signatures are the usual
//! 65-byte `r || s || v` encoding; `v` is accepted as {0, 1} or {27, 28} and
//! normalised to the latter. Signatures with an `s` value in the upper half order
//! are rejected (EIP-2): `ecrecover` itself would accept both representatives, and
//! the malleable twin must not be treated as a distinct grant.

use stylus_sdk::{
    alloy_primitives::{Address, FixedBytes, U256},
    call::RawCall,
};

/// Expected signature length: `r (32) || s (32) || v (1)`.
pub const SIGNATURE_LENGTH: usize = 65;

/// `ecrecover` precompile.
pub(crate) const ECRECOVER_ADDR: Address = Address::with_last_byte(1);

/// Gas forwarded to the precompile (it costs 3000).
const ECRECOVER_GAS: u64 = 30_000;

/// secp256k1 group order halved, big-endian. Valid `s` values are `0 < s <= n/2`.
const SECP256K1_HALF_N: [u8; 32] = [
    0x7f, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff,
    0xff, 0x5d, 0x57, 0x6e, 0x73, 0x57, 0xa4, 0x50, 0x1d, 0xdf, 0xe9, 0x2f, 0x46, 0x68, 0x1b,
    0x20, 0xa0,
];

/// Why a signature failed to yield a signer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RecoverError {
    BadLength(usize),
    BadRecoveryId(u8),
    MalleableS,
    Precompile,
    ZeroAddress,
}

/// Split a 65-byte signature into `(r, s, v)` with `v` normalised to {27, 28}.
fn split_signature(sig: &[u8]) -> Result<(&[u8], &[u8], u8), RecoverError> {
    if sig.len() != SIGNATURE_LENGTH {
        return Err(RecoverError::BadLength(sig.len()));
    }
    let v = match sig[64] {
        v @ (27 | 28) => v,
        v @ (0 | 1) => v + 27,
        v => return Err(RecoverError::BadRecoveryId(v)),
    };
    let s = &sig[32..64];
    if U256::from_be_slice(s) > U256::from_be_slice(&SECP256K1_HALF_N) {
        return Err(RecoverError::MalleableS);
    }
    Ok((&sig[0..32], s, v))
}

/// Recover the address that signed `digest`.
///
/// Fails closed: malformed input, a failed precompile call, short return data and
/// the zero-address sentinel all come back as errors, never as a usable signer.
pub fn recover_signer(digest: FixedBytes<32>, sig: &[u8]) -> Result<Address, RecoverError> {
    let (r, s, v) = split_signature(sig)?;

    let mut input = [0u8; 128];
    input[0..32].copy_from_slice(digest.as_slice());
    // v as a 32-byte big-endian word.
    input[63] = v;
    input[64..96].copy_from_slice(r);
    input[96..128].copy_from_slice(s);

    let out = unsafe {
        RawCall::new_static()
            .gas(ECRECOVER_GAS)
            .call(ECRECOVER_ADDR, &input)
    }
    .map_err(|_| RecoverError::Precompile)?;

    // The precompile returns empty output when recovery fails.
    if out.len() < 32 {
        return Err(RecoverError::Precompile);
    }
    // 32-byte word with the address in the low 20 bytes.
    let recovered = Address::from_slice(&out[12..32]);
    if recovered.is_zero() {
        return Err(RecoverError::ZeroAddress);
    }
    Ok(recovered)
}
