//! Value object trait: equality by value, not identity.

/// Marker trait for immutable domain values compared by their attributes.
///
/// A value object has no identity of its own: two instances with equal
/// fields are interchangeable. Rate cards and product snapshots are value
/// objects; a `Product` (keyed by id) is an entity. To "modify" a value
/// object, build a new one.
pub trait ValueObject: Clone + PartialEq + core::fmt::Debug {}
