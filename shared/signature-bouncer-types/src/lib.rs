#![cfg_attr(not(test), no_std)]

extern crate alloc;

pub mod message;

pub use message::{CallShapeError, SELECTOR_LEN, SIGNATURE_TAIL_LEN};
