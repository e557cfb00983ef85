//! Kith Domain Layer
//!
//! This crate contains the core domain model for Kith, a command-line contact
//! manager. It defines the fundamental concepts, value objects, and trait
//! interfaces that the parser, store and CLI depend upon.
//!
//! ## Key Concepts
//!
//! - **Person**: A contact, addressed by a UUID or its four-character short form
//! - **Relationship**: A typed pairwise link between two people, with optional roles
//! - **Familial types**: `bioparents`, `siblings`, `spouses`, each with a fixed role vocabulary
//! - **Predefined types**: the familial types plus `friend`, which cannot be deleted
//!
//! ## Architecture
//!
//! - The only external dependency is `uuid`
//! - Pure domain logic only
//! - Storage implementations live in `kith-store`
//! - Trait definitions for the collaborators the parser and CLI talk to

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod person;
pub mod relationship;
pub mod traits;
pub mod vocabulary;

// Re-exports for convenience
pub use person::{Person, PersonId};
pub use relationship::Relationship;
pub use traits::{PersonDirectory, RelationshipStore, TypeVocabulary};
pub use vocabulary::{BuiltinVocabulary, FamilialType};
