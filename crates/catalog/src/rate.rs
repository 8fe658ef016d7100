//! Unit/rate model: converting application rates into dispensed quantities.

use serde::{Deserialize, Serialize};

use agrikiosk_core::{DomainError, DomainResult};

use crate::product::{Product, Unit};

/// Physical means of applying a product.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispensingMethod {
    /// Hose-fed sprayer; context amount is gallons of carrier.
    Hose,
    /// Cart-mounted sprayer; context amount is gallons of carrier.
    Cart,
    /// Broadcast granular spreader; context amount is square feet.
    Area,
}

impl core::fmt::Display for DispensingMethod {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        let name = match self {
            DispensingMethod::Hose => "hose",
            DispensingMethod::Cart => "cart",
            DispensingMethod::Area => "area",
        };
        f.write_str(name)
    }
}

/// Compute the product quantity required for a dispensing context.
///
/// `volume_or_area` is gallons of carrier for `Hose`/`Cart`, treated square
/// feet for `Area`. The requested method must correspond to the product's
/// populated rate field: a zero rate is a `UnitMismatch`, never a silent
/// zero quantity.
pub fn compute_quantity(
    product: &Product,
    method: DispensingMethod,
    volume_or_area: f64,
) -> DomainResult<f64> {
    let rate = resolve_rate(product, method)?;
    if rate < 0.0 {
        return Err(DomainError::invalid_rate(format!(
            "product '{}' has a negative {method} rate ({rate})",
            product.name
        )));
    }
    let quantity = match method {
        DispensingMethod::Hose | DispensingMethod::Cart => rate * volume_or_area,
        DispensingMethod::Area => rate * (volume_or_area / 1000.0),
    };
    Ok(quantity)
}

/// Bags required to cover a quantity: `ceil(quantity / pounds_per_bag)`.
///
/// Only meaningful for granular (`Pounds`) products.
pub fn bags_needed(product: &Product, quantity: f64) -> DomainResult<u64> {
    if product.unit != Unit::Pounds {
        return Err(DomainError::unit_mismatch(format!(
            "product '{}' is not bagged (unit: {:?})",
            product.name, product.unit
        )));
    }
    let per_bag = product.rates.pounds_per_bag;
    if per_bag <= 0.0 {
        return Err(DomainError::invalid_rate(format!(
            "product '{}' has non-positive poundsPerBag ({per_bag})",
            product.name
        )));
    }
    if quantity < 0.0 {
        return Err(DomainError::invalid_rate(format!(
            "quantity must be non-negative, got {quantity}"
        )));
    }
    Ok((quantity / per_bag).ceil() as u64)
}

fn resolve_rate(product: &Product, method: DispensingMethod) -> DomainResult<f64> {
    let (required_unit, rate) = match method {
        DispensingMethod::Hose => (Unit::Gallons, product.rates.hose_rate_per_gallon),
        DispensingMethod::Cart => (Unit::Gallons, product.rates.cart_rate_per_gallon),
        DispensingMethod::Area => (Unit::Pounds, product.rates.pounds_per_1000_sq_ft),
    };
    if product.unit != required_unit || rate == 0.0 {
        return Err(DomainError::unit_mismatch(format!(
            "product '{}' has no {method} rate (unit: {:?})",
            product.name, product.unit
        )));
    }
    Ok(rate)
}
