use std::collections::BTreeSet;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

use agrikiosk_catalog::{KioskType, ProductCategory, Unit};
use agrikiosk_core::{DomainError, Entity, EntityId, ValidationFailure, ValueObject};

/// Application identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ApplicationId(pub EntityId);

impl ApplicationId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.0
    }
}

impl core::fmt::Display for ApplicationId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Reference to a kiosk permitted to run an application.
///
/// Observed documents hold kiosk ids and kiosk-type tags interchangeably in
/// the same field, so both forms are modeled explicitly and eligibility
/// checks match against both. The canonical form going forward is the type
/// tag; `migrate_kiosk_refs` rewrites id refs.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(untagged)]
pub enum KioskRef {
    Type(KioskType),
    Id(EntityId),
}

/// By-value copy of a product's rates taken at composition time.
///
/// Deliberately denormalized: later catalog edits do not propagate, so
/// prior applications stay stable for history/audit.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProductSnapshot {
    pub product_name: String,
    pub product_type: ProductCategory,
    /// Equipment the rates apply to. Legacy documents call this
    /// `truckTypes`; the alias maps them onto the canonical name.
    #[serde(alias = "truckTypes")]
    pub equipment_types: BTreeSet<String>,
    pub hose_rate: f64,
    pub cart_rate: f64,
    pub unit: Unit,
}

impl ValueObject for ProductSnapshot {}

/// Named treatment program, stored document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Application {
    pub id: ApplicationId,
    pub name: String,
    pub category: String,
    pub application_category: String,
    #[serde(deserialize_with = "deserialize_kiosk_refs")]
    pub available_kiosks: BTreeSet<KioskRef>,
    pub products: Vec<ProductSnapshot>,
    /// When the product snapshots were taken.
    #[serde(default = "Utc::now")]
    pub composed_at: DateTime<Utc>,
}

impl Application {
    /// An application with zero products is permitted but flagged.
    pub fn is_empty(&self) -> bool {
        self.products.is_empty()
    }

    /// Ingestion boundary: normalize a raw store document onto the
    /// canonical schema, rejecting documents that still lack required
    /// fields. Legacy shapes (`truckTypes`, the `"NOT SET"` sentinel) are
    /// mapped here so business logic never branches on field presence.
    pub fn from_document(doc: serde_json::Value) -> Result<Self, DomainError> {
        serde_json::from_value(doc).map_err(|e| {
            DomainError::validation(ValidationFailure::new(vec![
                agrikiosk_core::Violation::new("document", e.to_string()),
            ]))
        })
    }

    pub fn to_document(&self) -> Result<serde_json::Value, DomainError> {
        serde_json::to_value(self).map_err(|e| DomainError::store_failure(e.to_string()))
    }
}

impl Entity for Application {
    type Id = ApplicationId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

/// Accepts a list of kiosk refs or the legacy `"NOT SET"` sentinel, which
/// normalizes to an empty set (the application is served nowhere).
fn deserialize_kiosk_refs<'de, D>(deserializer: D) -> Result<BTreeSet<KioskRef>, D::Error>
where
    D: Deserializer<'de>,
{
    #[derive(Deserialize)]
    #[serde(untagged)]
    enum Raw {
        Refs(BTreeSet<KioskRef>),
        Sentinel(String),
    }

    match Raw::deserialize(deserializer)? {
        Raw::Refs(refs) => Ok(refs),
        Raw::Sentinel(s) if s == "NOT SET" => Ok(BTreeSet::new()),
        Raw::Sentinel(s) => Err(serde::de::Error::custom(format!(
            "unrecognized availableKiosks value: {s:?}"
        ))),
    }
}
