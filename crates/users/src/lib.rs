//! Users domain module.
//!
//! Operators are identified by short human-entry codes. Name/code
//! uniqueness is a desired invariant, not an enforced one — violations are
//! what the duplicate resolver exists to clean up.

pub mod user;

pub use user::{Role, User, UserId};
