#![cfg_attr(not(any(test, feature = "export-abi")), no_std)]

extern crate alloc;

pub mod access;
pub mod bouncer;
pub mod utils;

pub use bouncer::SignatureBouncer;
