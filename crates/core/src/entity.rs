//! Entity trait: identity plus continuity across state changes.

/// Minimal interface shared by stored domain entities.
///
/// Two entities with the same id are the same entity, regardless of field
/// values (full-document replacement is the only mutation protocol).
pub trait Entity {
    /// Strongly-typed entity identifier.
    type Id: Clone + Eq + core::hash::Hash + core::fmt::Debug;

    /// Returns the entity identifier.
    fn id(&self) -> &Self::Id;
}
