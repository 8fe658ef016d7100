//! Application composition: by-value snapshots of catalog rates.

use std::collections::BTreeSet;

use chrono::Utc;

use agrikiosk_catalog::{Product, ProductCatalog, Unit};
use agrikiosk_core::{DomainError, DomainResult, ValidationFailure};

use crate::application::{Application, ApplicationId, KioskRef, ProductSnapshot};

/// A composed application plus any non-fatal flags raised while composing.
#[derive(Debug, Clone, PartialEq)]
pub struct Composed {
    pub application: Application,
    pub warnings: Vec<String>,
}

/// Copy a product's current rates into a snapshot.
///
/// This is the only place snapshot rate fields are populated from live
/// products; no back-reference is retained, so later product edits do not
/// propagate into existing applications.
pub fn snapshot(product: &Product, equipment_types: BTreeSet<String>) -> ProductSnapshot {
    ProductSnapshot {
        product_name: product.name.clone(),
        product_type: product.category,
        equipment_types,
        hose_rate: product.rates.hose_rate_per_gallon,
        cart_rate: product.rates.cart_rate_per_gallon,
        unit: product.unit,
    }
}

/// Compose a named treatment program from product snapshots.
///
/// Each snapshot's unit consistency is validated (per-gallon rates must be
/// zero unless the unit is gallons). An application with zero products is
/// permitted but flagged.
pub fn compose(
    id: ApplicationId,
    name: impl Into<String>,
    category: impl Into<String>,
    application_category: impl Into<String>,
    products: Vec<ProductSnapshot>,
    available_kiosks: BTreeSet<KioskRef>,
) -> DomainResult<Composed> {
    let name = name.into();
    if name.trim().is_empty() {
        let mut failure = ValidationFailure::default();
        failure.push("name", "must not be empty");
        return Err(DomainError::validation(failure));
    }

    let mut failure = ValidationFailure::default();
    for snap in &products {
        validate_snapshot(snap, &mut failure);
    }
    failure.into_result().map_err(DomainError::validation)?;

    let mut warnings = Vec::new();
    if products.is_empty() {
        tracing::warn!(application = %name, "composed application has no products");
        warnings.push("application has no products".to_string());
    }

    Ok(Composed {
        application: Application {
            id,
            name,
            category: category.into(),
            application_category: application_category.into(),
            available_kiosks,
            products,
            composed_at: Utc::now(),
        },
        warnings,
    })
}

/// Re-pull current catalog rates for every listed product, producing an
/// updated snapshot set. Used to migrate stale applications after catalog
/// rate corrections. Fails with `NotFound` when a listed product is no
/// longer active in the catalog; stale rates must not silently survive.
pub fn recompose_from_catalog(
    application: &Application,
    catalog: &ProductCatalog,
) -> DomainResult<Application> {
    let mut products = Vec::with_capacity(application.products.len());
    for snap in &application.products {
        let Some(product) = catalog.get(&snap.product_name) else {
            tracing::warn!(
                application = %application.name,
                product = %snap.product_name,
                "recompose: product missing from catalog"
            );
            return Err(DomainError::not_found());
        };
        products.push(snapshot(product, snap.equipment_types.clone()));
    }

    Ok(Application {
        products,
        composed_at: Utc::now(),
        ..application.clone()
    })
}

fn validate_snapshot(snap: &ProductSnapshot, failure: &mut ValidationFailure) {
    let prefix = &snap.product_name;
    if snap.hose_rate < 0.0 {
        failure.push(format!("{prefix}.hoseRate"), "must be non-negative");
    }
    if snap.cart_rate < 0.0 {
        failure.push(format!("{prefix}.cartRate"), "must be non-negative");
    }
    if snap.unit != Unit::Gallons && (snap.hose_rate != 0.0 || snap.cart_rate != 0.0) {
        failure.push(
            format!("{prefix}.unit"),
            "per-gallon rates must be zero when the unit is not gallons",
        );
    }
}
