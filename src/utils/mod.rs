//! Hashing and recovery helpers for the bouncer contract.
//!
//! Everything here is deterministic and allocation-light; it all runs inside
//! Stylus / WASM on the hot validation path.

pub mod crypto;
pub mod digest;
