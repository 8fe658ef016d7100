//! Write-time uniqueness guard for users.
//!
//! The store itself enforces no schema, which is how duplicate users got in
//! to begin with. The resolver cleans up after the fact; this guard keeps
//! new duplicates from recurring.

use agrikiosk_core::{DomainError, DomainResult, EntityId};
use agrikiosk_dedupe::normalize_key;
use agrikiosk_users::User;

use crate::store::{EntityKind, Store};

/// Insert a user only if no active user already holds its normalized name
/// or its user code.
///
/// Note this checks a point-in-time snapshot; a concurrent writer racing
/// the check is last-write-wins at the store.
pub fn insert_user_checked(store: &dyn Store, user: &User) -> DomainResult<EntityId> {
    user.validate().map_err(DomainError::validation)?;

    let name_key = normalize_key(&user.name);
    for (id, doc) in store.load_all(EntityKind::Users)? {
        let existing: User = match serde_json::from_value(doc) {
            Ok(u) => u,
            Err(err) => {
                tracing::warn!(%id, error = %err, "skipping malformed user record");
                continue;
            }
        };
        if !existing.is_active {
            continue;
        }
        if normalize_key(&existing.name) == name_key {
            return Err(DomainError::conflict(format!(
                "active user named '{}' already exists (id {id})",
                existing.name
            )));
        }
        if existing.user_code == user.user_code {
            return Err(DomainError::conflict(format!(
                "user code '{}' is already taken (id {id})",
                existing.user_code
            )));
        }
    }

    let doc = serde_json::to_value(user).map_err(|e| DomainError::store_failure(e.to_string()))?;
    Ok(store.insert(EntityKind::Users, doc)?)
}
