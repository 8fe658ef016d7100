//! Products domain module.
//!
//! This crate contains business rules for the product catalog — rate/unit
//! semantics, field validation, and the active/inactive lifecycle —
//! implemented purely as deterministic domain logic (no IO, no storage).

pub mod catalog;
pub mod product;
pub mod rate;

pub use catalog::ProductCatalog;
pub use product::{KioskType, Product, ProductCategory, ProductId, RateCard, Unit};
pub use rate::{DispensingMethod, bags_needed, compute_quantity};
