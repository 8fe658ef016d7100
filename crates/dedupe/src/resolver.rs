//! Grouping by normalized identity and keep/delete resolution.

use std::collections::BTreeMap;

use agrikiosk_core::{DomainError, DomainResult, EntityId};

/// Implemented by entities that participate in duplicate detection.
pub trait DuplicateKey {
    fn entity_id(&self) -> &EntityId;

    /// Raw identity field; normalized (trimmed, lower-cased) before
    /// grouping.
    fn identity(&self) -> &str;
}

/// Normalized identity key used for bucketing.
pub fn normalize_key(raw: &str) -> String {
    raw.trim().to_lowercase()
}

/// Bucket entities by normalized identity key; only buckets with two or
/// more members are duplicates. Input order is preserved within a bucket
/// and keys are sorted, so repeated runs over an unchanged collection
/// yield identical results.
pub fn find_duplicates<T: DuplicateKey + Clone>(entities: &[T]) -> BTreeMap<String, Vec<T>> {
    let mut buckets: BTreeMap<String, Vec<T>> = BTreeMap::new();
    for entity in entities {
        buckets
            .entry(normalize_key(entity.identity()))
            .or_default()
            .push(entity.clone());
    }
    buckets.retain(|_, members| members.len() >= 2);
    buckets
}

/// Outcome of resolving one duplicate bucket: the survivor and the ids
/// slated for hard deletion.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Resolution {
    pub kept: EntityId,
    pub deleted: Vec<EntityId>,
}

/// Pick the surviving record of a bucket; every other member is slated for
/// deletion.
///
/// The caller must name the survivor: role and activity differences between
/// duplicates are business-significant, so the resolver never auto-picks
/// one. Fails with `NotFound` when `keep_id` is not a bucket member, and
/// with `AmbiguousKeep` when `keep_id` is omitted while the bucket has more
/// than one member.
pub fn resolve<T: DuplicateKey>(
    bucket: &[T],
    keep_id: Option<&EntityId>,
) -> DomainResult<Resolution> {
    let keep_id = match keep_id {
        Some(id) => id,
        None if bucket.len() > 1 => return Err(DomainError::AmbiguousKeep),
        None => bucket.first().map(DuplicateKey::entity_id).ok_or(DomainError::NotFound)?,
    };

    if !bucket.iter().any(|e| e.entity_id() == keep_id) {
        return Err(DomainError::NotFound);
    }

    Ok(Resolution {
        kept: keep_id.clone(),
        deleted: bucket
            .iter()
            .map(DuplicateKey::entity_id)
            .filter(|id| *id != keep_id)
            .cloned()
            .collect(),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use agrikiosk_users::{Role, User, UserId};
    use core::str::FromStr;

    fn user(id: &str, name: &str, code: &str) -> User {
        User {
            id: UserId::new(EntityId::from_str(id).unwrap()),
            user_code: code.to_string(),
            name: name.to_string(),
            role: Role::Applicator,
            is_active: true,
        }
    }

    fn entity_id(raw: &str) -> EntityId {
        EntityId::from_str(raw).unwrap()
    }

    #[test]
    fn case_and_whitespace_insensitive_grouping() {
        let users = vec![
            user("u1", "Jane Doe", "3456"),
            user("u2", "jane doe ", "9999"),
            user("u3", "Sam Field", "1111"),
        ];

        let buckets = find_duplicates(&users);
        assert_eq!(buckets.len(), 1);
        let bucket = &buckets["jane doe"];
        assert_eq!(bucket.len(), 2);
        assert_eq!(bucket[0].user_code, "3456");
        assert_eq!(bucket[1].user_code, "9999");
    }

    #[test]
    fn resolve_deletes_everything_but_the_named_survivor() {
        let users = vec![user("u1", "Jane Doe", "3456"), user("u2", "jane doe", "9999")];
        let buckets = find_duplicates(&users);

        let resolution = resolve(&buckets["jane doe"], Some(&entity_id("u1"))).unwrap();
        assert_eq!(resolution.kept, entity_id("u1"));
        assert_eq!(resolution.deleted, vec![entity_id("u2")]);
    }

    #[test]
    fn omitting_the_survivor_on_a_real_bucket_is_ambiguous() {
        let users = vec![user("u1", "Jane Doe", "3456"), user("u2", "jane doe", "9999")];
        let buckets = find_duplicates(&users);

        let err = resolve(&buckets["jane doe"], None).unwrap_err();
        assert_eq!(err, DomainError::AmbiguousKeep);
    }

    #[test]
    fn naming_a_non_member_is_not_found() {
        let users = vec![user("u1", "Jane Doe", "3456"), user("u2", "jane doe", "9999")];
        let buckets = find_duplicates(&users);

        let err = resolve(&buckets["jane doe"], Some(&entity_id("u3"))).unwrap_err();
        assert_eq!(err, DomainError::NotFound);
    }

    #[test]
    fn resolved_buckets_stop_being_reported() {
        let users = vec![user("u1", "Jane Doe", "3456"), user("u2", "jane doe", "9999")];
        let buckets = find_duplicates(&users);
        let resolution = resolve(&buckets["jane doe"], Some(&entity_id("u1"))).unwrap();

        let survivors: Vec<User> = users
            .into_iter()
            .filter(|u| !resolution.deleted.contains(u.id.entity_id()))
            .collect();
        assert!(find_duplicates(&survivors).is_empty());
    }

    #[cfg(test)]
    mod proptest_tests {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            /// Property: detection over an unchanged collection is
            /// idempotent.
            #[test]
            fn detection_is_idempotent(names in proptest::collection::vec("[A-Za-z ]{1,12}", 0..40)) {
                let users: Vec<User> = names
                    .iter()
                    .enumerate()
                    .map(|(i, name)| user(&format!("u{i}"), name, &format!("{i:04}")))
                    .collect();

                let first = find_duplicates(&users);
                let second = find_duplicates(&users);
                prop_assert_eq!(&first, &second);

                for (key, bucket) in &first {
                    prop_assert!(bucket.len() >= 2);
                    for member in bucket {
                        prop_assert_eq!(&normalize_key(member.identity()), key);
                    }
                }
            }

            /// Property: resolving removes exactly the non-survivors and
            /// the key never reappears.
            #[test]
            fn resolution_clears_the_bucket(dup_count in 2usize..6) {
                let mut users: Vec<User> = (0..dup_count)
                    .map(|i| user(&format!("u{i}"), "Jane Doe", &format!("{i:04}")))
                    .collect();
                users.push(user("other", "Sam Field", "7777"));

                let buckets = find_duplicates(&users);
                let resolution = resolve(&buckets["jane doe"], Some(&entity_id("u0"))).unwrap();
                prop_assert_eq!(resolution.deleted.len(), dup_count - 1);

                let survivors: Vec<User> = users
                    .into_iter()
                    .filter(|u| !resolution.deleted.contains(u.id.entity_id()))
                    .collect();
                prop_assert!(!find_duplicates(&survivors).contains_key("jane doe"));
            }
        }
    }
}
