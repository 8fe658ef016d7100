use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use agrikiosk_catalog::{KioskType, ProductId};
use agrikiosk_core::{Entity, EntityId};

/// Kiosk identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KioskId(pub EntityId);

impl KioskId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.0
    }
}

impl core::fmt::Display for KioskId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Dispensing point, stored document shape.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Kiosk {
    pub id: KioskId,
    pub name: String,
    #[serde(rename = "type")]
    pub kiosk_type: KioskType,
    /// Product ids this kiosk stocks. Diagnosed (not enforced): each should
    /// reference an active product whose `kioskTypes` includes this type.
    pub available_products: BTreeSet<ProductId>,
}

impl Entity for Kiosk {
    type Id = KioskId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}
