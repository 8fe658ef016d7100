//! `DuplicateKey` implementations for the catalog entities that accumulate
//! duplicates in practice.

use agrikiosk_catalog::Product;
use agrikiosk_core::EntityId;
use agrikiosk_users::User;

use crate::resolver::DuplicateKey;

impl DuplicateKey for User {
    fn entity_id(&self) -> &EntityId {
        self.id.entity_id()
    }

    fn identity(&self) -> &str {
        &self.name
    }
}

impl DuplicateKey for Product {
    fn entity_id(&self) -> &EntityId {
        self.id.entity_id()
    }

    fn identity(&self) -> &str {
        &self.name
    }
}
