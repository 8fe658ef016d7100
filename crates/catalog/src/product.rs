use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use agrikiosk_core::{Entity, EntityId, ValueObject};

/// Product identifier.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductId(pub EntityId);

impl ProductId {
    pub fn new(id: EntityId) -> Self {
        Self(id)
    }

    pub fn entity_id(&self) -> &EntityId {
        &self.0
    }
}

impl core::fmt::Display for ProductId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        core::fmt::Display::fmt(&self.0, f)
    }
}

/// Treatment category of a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProductCategory {
    Fertilizer,
    Herbicide,
    Insecticide,
    Fungicide,
}

/// Kiosk type tag; controls which kiosks may offer a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum KioskType {
    Fertilizer,
    Herbicide,
    Insecticide,
    Mixed,
}

/// Unit a product's application rate is expressed in.
///
/// `Gallons` products are liquids metered per gallon of carrier;
/// `Pounds` products are granular, spread per 1000 sq ft.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Unit {
    Gallons,
    Pounds,
}

/// Per-method application rates, plus the bag size used for packaging
/// conversion. Value object: compared by value, copied into application
/// snapshots wholesale.
///
/// Exactly one side is populated, consistent with the product's `unit`:
/// either one of the per-gallon rates (liquid) or the per-area rate
/// (granular). `ProductCatalog::validate` enforces this.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RateCard {
    pub hose_rate_per_gallon: f64,
    pub cart_rate_per_gallon: f64,
    pub pounds_per_1000_sq_ft: f64,
    pub pounds_per_bag: f64,
}

impl ValueObject for RateCard {}

/// Catalog product definition, stored document shape.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Product {
    pub id: ProductId,
    /// Human identifier; not guaranteed unique (see the duplicate resolver).
    pub name: String,
    pub category: ProductCategory,
    pub unit: Unit,
    #[serde(flatten)]
    pub rates: RateCard,
    pub kiosk_types: BTreeSet<KioskType>,
    /// Inactive products are excluded from all serving paths but retained
    /// for history.
    pub is_active: bool,
}

impl Product {
    pub fn is_granular(&self) -> bool {
        self.unit == Unit::Pounds
    }
}

impl Entity for Product {
    type Id = ProductId;

    fn id(&self) -> &Self::Id {
        &self.id
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use core::str::FromStr;

    fn balanced_fertilizer() -> Product {
        Product {
            id: ProductId::new(EntityId::from_str("prod-1").unwrap()),
            name: "10-10-10 Balanced Fertilizer".to_string(),
            category: ProductCategory::Fertilizer,
            unit: Unit::Pounds,
            rates: RateCard {
                hose_rate_per_gallon: 0.0,
                cart_rate_per_gallon: 0.0,
                pounds_per_1000_sq_ft: 2.3,
                pounds_per_bag: 50.0,
            },
            kiosk_types: BTreeSet::from([KioskType::Fertilizer, KioskType::Mixed]),
            is_active: true,
        }
    }

    #[test]
    fn serializes_to_document_field_names() {
        let doc = serde_json::to_value(balanced_fertilizer()).unwrap();
        assert_eq!(doc["name"], "10-10-10 Balanced Fertilizer");
        assert_eq!(doc["unit"], "pounds");
        assert_eq!(doc["poundsPer1000SqFt"], 2.3);
        assert_eq!(doc["poundsPerBag"], 50.0);
        assert_eq!(doc["hoseRatePerGallon"], 0.0);
        assert_eq!(doc["kioskTypes"][0], "fertilizer");
        assert_eq!(doc["kioskTypes"][1], "mixed");
        assert_eq!(doc["isActive"], true);
    }

    #[test]
    fn deserializes_from_document_shape() {
        let doc = serde_json::json!({
            "id": "prod-7",
            "name": "Broadleaf Weed Control",
            "category": "herbicide",
            "unit": "gallons",
            "hoseRatePerGallon": 1.5,
            "cartRatePerGallon": 0.0,
            "poundsPer1000SqFt": 0.0,
            "poundsPerBag": 0.0,
            "kioskTypes": ["herbicide"],
            "isActive": true
        });

        let product: Product = serde_json::from_value(doc).unwrap();
        assert_eq!(product.category, ProductCategory::Herbicide);
        assert_eq!(product.unit, Unit::Gallons);
        assert_eq!(product.rates.hose_rate_per_gallon, 1.5);
        assert!(!product.is_granular());
    }
}
