//! Product catalog: field validation and active/inactive listing.

use agrikiosk_core::{DomainError, DomainResult, ValidationFailure};

use crate::product::{Product, ProductId, Unit};

/// In-memory catalog over a loaded product snapshot.
///
/// Pure: persistence stays with the store collaborator. The catalog refuses
/// to hold invalid products, so downstream eligibility and composition code
/// can rely on the rate/unit invariant without re-checking it.
#[derive(Debug, Clone, Default)]
pub struct ProductCatalog {
    products: Vec<Product>,
}

impl ProductCatalog {
    /// Build a catalog, validating every product.
    ///
    /// The batch is rejected wholesale when any product is invalid; the
    /// failure carries one entry per offending field, prefixed with the
    /// product name.
    pub fn new(products: Vec<Product>) -> DomainResult<Self> {
        let mut failure = ValidationFailure::default();
        for product in &products {
            if let Err(product_failure) = Self::validate(product) {
                for v in product_failure.violations {
                    failure.push(format!("{}.{}", product.name, v.field), v.reason);
                }
            }
        }
        failure.into_result().map_err(DomainError::validation)?;
        Ok(Self { products })
    }

    /// Validate one product against the catalog invariants.
    ///
    /// Collects every violation rather than stopping at the first: seed
    /// tooling reports all field problems in one pass.
    pub fn validate(product: &Product) -> Result<(), ValidationFailure> {
        let mut failure = ValidationFailure::default();
        let rates = &product.rates;

        if product.name.trim().is_empty() {
            failure.push("name", "must not be empty");
        }
        if product.kiosk_types.is_empty() {
            failure.push("kioskTypes", "must name at least one kiosk type");
        }
        if rates.hose_rate_per_gallon < 0.0 {
            failure.push("hoseRatePerGallon", "must be non-negative");
        }
        if rates.cart_rate_per_gallon < 0.0 {
            failure.push("cartRatePerGallon", "must be non-negative");
        }
        if rates.pounds_per_1000_sq_ft < 0.0 {
            failure.push("poundsPer1000SqFt", "must be non-negative");
        }

        match product.unit {
            Unit::Gallons => {
                if rates.pounds_per_1000_sq_ft != 0.0 {
                    failure.push("poundsPer1000SqFt", "must be zero for a liquid product");
                }
                let hose = rates.hose_rate_per_gallon != 0.0;
                let cart = rates.cart_rate_per_gallon != 0.0;
                if hose == cart {
                    // Both set or both zero; exactly one dispensing method
                    // is ever populated in this model.
                    failure.push(
                        "unit",
                        "a liquid product needs exactly one of hoseRatePerGallon, cartRatePerGallon",
                    );
                }
            }
            Unit::Pounds => {
                if rates.hose_rate_per_gallon != 0.0 || rates.cart_rate_per_gallon != 0.0 {
                    failure.push("unit", "per-gallon rates must be zero for a granular product");
                }
                if rates.pounds_per_1000_sq_ft == 0.0 {
                    failure.push("poundsPer1000SqFt", "a granular product needs an area rate");
                }
                if rates.pounds_per_bag <= 0.0 {
                    failure.push("poundsPerBag", "must be positive");
                }
            }
        }

        failure.into_result()
    }

    /// Active products only; the serving path.
    pub fn list(&self) -> impl Iterator<Item = &Product> {
        self.products.iter().filter(|p| p.is_active)
    }

    /// Every product, inactive included. Callers must opt in explicitly.
    pub fn list_all(&self) -> &[Product] {
        &self.products
    }

    /// Look up an active product by name.
    pub fn get(&self, name: &str) -> Option<&Product> {
        self.list().find(|p| p.name == name)
    }

    /// Look up a product by id, inactive included (diagnostics need to
    /// distinguish missing from inactive).
    pub fn get_by_id(&self, id: &ProductId) -> Option<&Product> {
        self.products.iter().find(|p| &p.id == id)
    }
}
