//! Ownership and role-registry capabilities backing the bouncer.
//!
//! Both are deliberately mechanism-only: the registry stores membership, the
//! ownable cell stores one address. All policy (who may mutate what, which
//! errors surface) lives in the contract that embeds them.

pub mod ownable;
pub mod roles;
