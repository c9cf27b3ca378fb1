//! Entity trait defining the resource shape the adapter exposes

use crate::core::field::FieldValue;

/// An entity exposed through the sync HTTP surface.
///
/// Every entity has a stable, unique, strictly positive integer
/// identifier assigned by the storage layer at creation time and
/// immutable thereafter. Beyond the identifier, the adapter imposes
/// no structural constraints; it reads fields dynamically through
/// [`Entity::field`] when projecting responses.
pub trait Entity: Clone + Send + Sync + 'static {
    /// The collection segment used in URLs (e.g., "users")
    fn resource_name() -> &'static str;

    /// Get the unique identifier for this entity instance
    fn id(&self) -> i64;

    /// Get the value of a specific field by name
    ///
    /// Returns `None` for field names the entity does not carry;
    /// projecting an unknown field is a configuration error.
    fn field(&self, name: &str) -> Option<FieldValue>;
}
