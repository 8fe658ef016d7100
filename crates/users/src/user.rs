use serde::{Deserialize, Serialize};

use agrikiosk_core::{Entity, EntityId, ValidationFailure};

/// User identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(pub EntityId);

impl UserId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.0
    }
}

impl core::fmt::Display for UserId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Operator role.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Role {
    Admin,
    Applicator,
}

/// Kiosk operator, stored document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct User {
    pub id: UserId,
    /// Short human-entry code, intended-unique among active users.
    pub user_code: String,
    pub name: String,
    pub role: Role,
    /// Soft-delete flag. Duplicate users are the one exception: those are
    /// hard-deleted by resolution commit.
    pub is_active: bool,
}

impl User {
    pub fn validate(&self) -> Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::default();
        if self.name.trim().is_empty() {
            failure.push("name", "must not be empty");
        }
        if self.user_code.trim().is_empty() {
            failure.push("userCode", "must not be empty");
        }
        failure.into_result()
    }
}

impl Entity for User {
    type Id = UserId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn jane() -> User {
        User {
            id: UserId::new(EntityId::from_str("user-1").unwrap()),
            user_code: "3456".to_string(),
            name: "Jane Doe".to_string(),
            role: Role::Applicator,
            is_active: true,
        }
    }

    #[test]
    fn serializes_to_document_field_names() {
        let doc = serde_json::to_value(jane()).unwrap();
        assert_eq!(doc["userCode"], "3456");
        assert_eq!(doc["role"], "applicator");
        assert_eq!(doc["isActive"], true);
    }

    #[test]
    fn validate_rejects_blank_name_and_code() {
        let mut u = jane();
        u.name = " ".to_string();
        u.user_code = String::new();
        let failure = u.validate().unwrap_err();
        assert_eq!(failure.violations.len(), 2);
    }
}
