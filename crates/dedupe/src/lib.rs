//! Duplicate-entity detection and merge policy.
//!
//! The catalog's store never enforced uniqueness at write time, so users
//! and products accumulate duplicates. This crate groups entities by a
//! normalized identity key and resolves each bucket to a single survivor —
//! always chosen by a human, never by the resolver.

pub mod identity;
pub mod resolver;

pub use resolver::{DuplicateKey, Resolution, find_duplicates, normalize_key, resolve};
