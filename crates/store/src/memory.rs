//! In-memory document store.

use std::collections::{BTreeMap, HashMap};
use std::sync::RwLock;

use agrikiosk_core::EntityId;

use crate::store::{Document, EntityKind, Store, StoreError, StoreResult};

/// In-memory `Store` implementation.
///
/// Intended for tests/dev. Collections are `BTreeMap`s so `load_all` order
/// is deterministic.
#[derive(Debug, Default)]
pub struct MemoryStore {
    collections: RwLock<HashMap<EntityKind, BTreeMap<EntityId, Document>>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl Store for MemoryStore {
    fn load_all(&self, kind: EntityKind) -> StoreResult<Vec<(EntityId, Document)>> {
        let collections = self
            .collections
            .read()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        Ok(collections
            .get(&kind)
            .map(|c| c.iter().map(|(id, doc)| (id.clone(), doc.clone())).collect())
            .unwrap_or_default())
    }

    fn insert(&self, kind: EntityKind, mut doc: Document) -> StoreResult<EntityId> {
        let id = EntityId::generate();
        // Keep the in-document id consistent with the assigned key.
        if let Some(obj) = doc.as_object_mut() {
            obj.insert("id".to_string(), serde_json::Value::String(id.to_string()));
        }
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        collections.entry(kind).or_default().insert(id.clone(), doc);
        Ok(id)
    }

    fn upsert(&self, kind: EntityKind, id: &EntityId, doc: Document) -> StoreResult<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        collections.entry(kind).or_default().insert(id.clone(), doc);
        Ok(())
    }

    fn delete(&self, kind: EntityKind, id: &EntityId) -> StoreResult<()> {
        let mut collections = self
            .collections
            .write()
            .map_err(|_| StoreError::backend("lock poisoned"))?;
        let removed = collections.get_mut(&kind).and_then(|c| c.remove(id));
        if removed.is_none() {
            return Err(StoreError::MissingRecord {
                kind,
                id: id.clone(),
            });
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn insert_assigns_an_id_and_writes_it_into_the_document() {
        let store = MemoryStore::new();
        let id = store
            .insert(EntityKind::Users, json!({ "name": "Jane Doe" }))
            .unwrap();

        let records = store.load_all(EntityKind::Users).unwrap();
        assert_eq!(records.len(), 1);
        assert_eq!(records[0].0, id);
        assert_eq!(records[0].1["id"], id.to_string());
        assert_eq!(records[0].1["name"], "Jane Doe");
    }

    #[test]
    fn upsert_replaces_the_full_document() {
        let store = MemoryStore::new();
        let id: EntityId = "user-1".parse().unwrap();
        store
            .upsert(EntityKind::Users, &id, json!({ "name": "Jane", "role": "admin" }))
            .unwrap();
        store
            .upsert(EntityKind::Users, &id, json!({ "name": "Jane Doe" }))
            .unwrap();

        let records = store.load_all(EntityKind::Users).unwrap();
        assert_eq!(records.len(), 1);
        // Replacement, not merge: the old `role` field is gone.
        assert!(records[0].1.get("role").is_none());
    }

    #[test]
    fn delete_of_a_missing_record_is_an_error() {
        let store = MemoryStore::new();
        let id: EntityId = "ghost".parse().unwrap();
        let err = store.delete(EntityKind::Products, &id).unwrap_err();
        match err {
            StoreError::MissingRecord { kind, .. } => assert_eq!(kind, EntityKind::Products),
            other => panic!("expected MissingRecord, got {other:?}"),
        }
    }

    #[test]
    fn collections_are_isolated() {
        let store = MemoryStore::new();
        store.insert(EntityKind::Users, json!({ "name": "Jane" })).unwrap();
        assert!(store.load_all(EntityKind::Products).unwrap().is_empty());
    }
}
