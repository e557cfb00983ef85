//! Trait definitions for external interactions
//!
//! These traits define the boundaries between the relationship parser and the
//! rest of the system. Implementations live in other crates.

use crate::{PersonId, Relationship};

/// Resolves user-typed identifiers to canonical person references
///
/// Implemented by the infrastructure layer (kith-store)
pub trait PersonDirectory {
    /// Error type for lookups
    type Error;

    /// Resolve a short or full identifier
    ///
    /// Fails when no person matches.
    fn resolve(&self, identifier: &str) -> Result<PersonId, Self::Error>;
}

/// The relationship-type keywords currently known
pub trait TypeVocabulary {
    /// Whether `name` is a known relationship type (case-insensitive)
    fn is_known(&self, name: &str) -> bool;
}

impl<T: TypeVocabulary + ?Sized> TypeVocabulary for &T {
    fn is_known(&self, name: &str) -> bool {
        (**self).is_known(name)
    }
}

/// Sink for relationship mutations
///
/// Implemented by the infrastructure layer (kith-store)
pub trait RelationshipStore {
    /// Error type for store operations
    type Error;

    /// Record a new relationship
    fn add_relationship(&mut self, relationship: Relationship) -> Result<(), Self::Error>;

    /// Replace the relationship linking the same pair under `from_descriptor`
    fn edit_relationship(
        &mut self,
        from_descriptor: &str,
        relationship: Relationship,
    ) -> Result<(), Self::Error>;

    /// Remove the relationship linking `origin` and `target` under `descriptor`
    fn delete_relationship(
        &mut self,
        origin: PersonId,
        target: PersonId,
        descriptor: &str,
    ) -> Result<(), Self::Error>;

    /// Remove a relationship type and every relationship that uses it
    fn delete_relationship_type(&mut self, descriptor: &str) -> Result<(), Self::Error>;

    /// All relationships, in insertion order
    fn relationships(&self) -> Result<Vec<Relationship>, Self::Error>;
}
