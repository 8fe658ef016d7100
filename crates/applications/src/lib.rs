//! Applications domain module.
//!
//! A treatment "application" is a named program snapshotting one or more
//! products' rates at composition time. This crate holds the document
//! model (with the legacy-field normalization boundary) and the composer.

pub mod application;
pub mod composer;

pub use application::{Application, ApplicationId, KioskRef, ProductSnapshot};
pub use composer::{Composed, compose, recompose_from_catalog, snapshot};
