//! Store collaborator: the document-store port plus the seeding/cleanup
//! machinery built on top of it.
//!
//! The domain crates never talk to storage; everything flows through the
//! [`Store`] trait, with lifecycle owned by whoever assembles the system.

pub mod guard;
pub mod memory;
pub mod seed;
pub mod store;

pub use guard::insert_user_checked;
pub use memory::MemoryStore;
pub use seed::{BatchReport, ItemOutcome, commit_resolution, seed_batch};
pub use store::{Document, EntityKind, Store, StoreError, StoreResult};

#[cfg(test)]
mod integration_tests;
