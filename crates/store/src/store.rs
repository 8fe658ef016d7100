//! Document-store port.
//!
//! The core is storage-agnostic: entity ids are opaque strings, records are
//! schemaless JSON documents, and store failures pass through to the domain
//! untouched and uninterpreted.

use serde_json::Value;
use thiserror::Error;

use agrikiosk_core::{DomainError, EntityId};

/// Schemaless record as held by the document store.
pub type Document = Value;

/// Entity collections known to the store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EntityKind {
    Products,
    Applications,
    Kiosks,
    Users,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            EntityKind::Products => "products",
            EntityKind::Applications => "applications",
            EntityKind::Kiosks => "kiosks",
            EntityKind::Users => "users",
        }
    }
}

impl core::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Storage failure. Opaque to the domain: callers log or report it, never
/// branch on its contents.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum StoreError {
    #[error("backend failure: {0}")]
    Backend(String),

    #[error("no {kind} record with id {id}")]
    MissingRecord { kind: EntityKind, id: EntityId },
}

impl StoreError {
    pub fn backend(msg: impl Into<String>) -> Self {
        Self::Backend(msg.into())
    }
}

impl From<StoreError> for DomainError {
    fn from(err: StoreError) -> Self {
        DomainError::store_failure(err.to_string())
    }
}

pub type StoreResult<T> = Result<T, StoreError>;

/// The storage collaborator consumed by seeding, cleanup, and load paths.
///
/// Construct one explicitly and pass it in; there is no global handle.
pub trait Store {
    /// Every record of a collection, with its id.
    fn load_all(&self, kind: EntityKind) -> StoreResult<Vec<(EntityId, Document)>>;

    /// Insert a new record; the store assigns and returns the id.
    fn insert(&self, kind: EntityKind, doc: Document) -> StoreResult<EntityId>;

    /// Full-document replacement under a caller-supplied id.
    fn upsert(&self, kind: EntityKind, id: &EntityId, doc: Document) -> StoreResult<()>;

    /// Hard delete.
    fn delete(&self, kind: EntityKind, id: &EntityId) -> StoreResult<()>;
}
