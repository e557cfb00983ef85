//! Kith Storage Layer
//!
//! Implements the person directory, relationship store and type vocabulary in
//! memory. Nothing is persisted; a store lives as long as the session that
//! created it.
//!
//! # Examples
//!
//! ```
//! use kith_domain::{PersonDirectory, Relationship, RelationshipStore};
//! use kith_store::MemoryStore;
//!
//! let mut store = MemoryStore::new();
//! let alice = store.add_person("Alice").unwrap();
//! let bob = store.add_person("Bob").unwrap();
//!
//! assert_eq!(store.resolve("0001").unwrap(), alice);
//! store.add_relationship(Relationship::new(alice, bob, "housemates")).unwrap();
//! ```

#![warn(missing_docs)]

use std::collections::BTreeSet;

use kith_domain::vocabulary::{self, PREDEFINED_TYPES};
use kith_domain::{Person, PersonDirectory, PersonId, Relationship, RelationshipStore, TypeVocabulary};
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur during storage operations
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum StoreError {
    /// No person matches the identifier
    #[error("Person not found: {0}")]
    NotFound(String),

    /// More than one person matches a short identifier
    #[error("Identifier '{identifier}' matches {count} people; use more characters of the UUID")]
    AmbiguousIdentifier {
        /// Identifier as typed
        identifier: String,
        /// Number of matching people
        count: usize,
    },

    /// A person with this id already exists
    #[error("Duplicate person: {0}")]
    DuplicatePerson(String),

    /// The relationship to edit or delete does not exist
    #[error("Sorry {0} do not exist")]
    RelationshipNotFound(String),

    /// The relationship type to delete does not exist
    #[error("Relationship type '{0}' does not exist")]
    UnknownType(String),

    /// Predefined relationship types cannot be deleted
    #[error("Predefined relationship type '{0}' cannot be deleted")]
    PredefinedType(String),

    /// Invalid data format
    #[error("Invalid data: {0}")]
    InvalidData(String),
}

/// In-memory implementation of the Kith collaborator traits
///
/// People get sequential ids (`...0001`, `...0002`) unless inserted with an
/// explicit one.
#[derive(Debug)]
pub struct MemoryStore {
    people: Vec<Person>,
    relationships: Vec<Relationship>,
    custom_types: BTreeSet<String>,
    next_id: u128,
}

impl MemoryStore {
    /// Create an empty store
    pub fn new() -> Self {
        Self {
            people: Vec::new(),
            relationships: Vec::new(),
            custom_types: BTreeSet::new(),
            next_id: 1,
        }
    }

    /// Add a person under the next free sequential id
    pub fn add_person(&mut self, name: &str) -> Result<PersonId, StoreError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(StoreError::InvalidData("Names cannot be empty".to_string()));
        }

        while self.get_person(PersonId::from_value(self.next_id)).is_some() {
            self.next_id += 1;
        }
        let id = PersonId::from_value(self.next_id);
        self.next_id += 1;

        self.people.push(Person::new(id, name));
        info!(person = %id, name, "Added person");
        Ok(id)
    }

    /// Insert a person with an explicit id
    pub fn insert_person(&mut self, person: Person) -> Result<(), StoreError> {
        if self.get_person(person.id).is_some() {
            return Err(StoreError::DuplicatePerson(person.id.to_string()));
        }
        info!(person = %person.id, name = %person.name, "Inserted person");
        self.people.push(person);
        Ok(())
    }

    /// Look up a person by canonical id
    pub fn get_person(&self, id: PersonId) -> Option<&Person> {
        self.people.iter().find(|p| p.id == id)
    }

    /// All people, in insertion order
    pub fn people(&self) -> &[Person] {
        &self.people
    }

    /// Predefined types followed by custom types, each group sorted
    pub fn known_types(&self) -> Vec<String> {
        PREDEFINED_TYPES
            .iter()
            .map(|t| t.to_string())
            .chain(self.custom_types.iter().cloned())
            .collect()
    }

    fn require_person(&self, id: PersonId) -> Result<(), StoreError> {
        self.get_person(id)
            .map(|_| ())
            .ok_or_else(|| StoreError::NotFound(id.to_string()))
    }

    fn register_type(&mut self, descriptor: &str) {
        if !vocabulary::is_predefined(descriptor) && self.custom_types.insert(descriptor.to_lowercase()) {
            debug!(descriptor, "Registered relationship type");
        }
    }
}

impl Default for MemoryStore {
    fn default() -> Self {
        Self::new()
    }
}

impl PersonDirectory for MemoryStore {
    type Error = StoreError;

    fn resolve(&self, identifier: &str) -> Result<PersonId, Self::Error> {
        let identifier = identifier.trim();
        if identifier.is_empty() {
            return Err(StoreError::NotFound(identifier.to_string()));
        }

        if let Ok(id) = PersonId::from_string(identifier) {
            self.require_person(id)?;
            return Ok(id);
        }

        let suffix = identifier.to_lowercase();
        let matches: Vec<PersonId> = self
            .people
            .iter()
            .map(|p| p.id)
            .filter(|id| id.to_string().ends_with(&suffix))
            .collect();

        debug!(identifier, matches = matches.len(), "Resolved identifier");
        match matches.as_slice() {
            [id] => Ok(*id),
            [] => Err(StoreError::NotFound(identifier.to_string())),
            _ => Err(StoreError::AmbiguousIdentifier {
                identifier: identifier.to_string(),
                count: matches.len(),
            }),
        }
    }
}

impl TypeVocabulary for MemoryStore {
    fn is_known(&self, name: &str) -> bool {
        vocabulary::is_predefined(name) || self.custom_types.contains(&name.trim().to_lowercase())
    }
}

impl RelationshipStore for MemoryStore {
    type Error = StoreError;

    fn add_relationship(&mut self, relationship: Relationship) -> Result<(), Self::Error> {
        self.require_person(relationship.origin)?;
        self.require_person(relationship.target)?;

        self.register_type(&relationship.descriptor);
        info!(relationship = %relationship, "Added relationship");
        self.relationships.push(relationship);
        Ok(())
    }

    fn edit_relationship(
        &mut self,
        from_descriptor: &str,
        relationship: Relationship,
    ) -> Result<(), Self::Error> {
        let index = self
            .relationships
            .iter()
            .position(|r| r.connects(relationship.origin, relationship.target, from_descriptor))
            .ok_or_else(|| {
                StoreError::RelationshipNotFound(
                    Relationship::new(relationship.origin, relationship.target, from_descriptor).to_string(),
                )
            })?;

        self.register_type(&relationship.descriptor);
        info!(from = from_descriptor, relationship = %relationship, "Edited relationship");
        self.relationships[index] = relationship;
        Ok(())
    }

    fn delete_relationship(
        &mut self,
        origin: PersonId,
        target: PersonId,
        descriptor: &str,
    ) -> Result<(), Self::Error> {
        let index = self
            .relationships
            .iter()
            .position(|r| r.connects(origin, target, descriptor))
            .ok_or_else(|| {
                StoreError::RelationshipNotFound(Relationship::new(origin, target, descriptor).to_string())
            })?;

        let removed = self.relationships.remove(index);
        info!(relationship = %removed, "Deleted relationship");
        Ok(())
    }

    fn delete_relationship_type(&mut self, descriptor: &str) -> Result<(), Self::Error> {
        let descriptor = descriptor.trim().to_lowercase();
        if vocabulary::is_predefined(&descriptor) {
            return Err(StoreError::PredefinedType(descriptor));
        }
        if !self.custom_types.remove(&descriptor) {
            return Err(StoreError::UnknownType(descriptor));
        }

        let before = self.relationships.len();
        self.relationships.retain(|r| r.descriptor != descriptor);
        info!(
            descriptor = %descriptor,
            removed = before - self.relationships.len(),
            "Deleted relationship type"
        );
        Ok(())
    }

    fn relationships(&self) -> Result<Vec<Relationship>, Self::Error> {
        Ok(self.relationships.clone())
    }
}
