//! Kiosks domain module.
//!
//! Kiosks are physical dispensing points exposing a subset of the catalog.
//! This crate computes product/application eligibility per kiosk and
//! surfaces catalog-consistency diagnostics.

pub mod assignment;
pub mod kiosk;

pub use assignment::{
    ApplicationOrphan, KioskOrphan, OrphanReason, OrphanReport, eligible_applications,
    eligible_products, find_orphans, migrate_kiosk_refs,
};
pub use kiosk::{Kiosk, KioskId};
