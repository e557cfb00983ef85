//! Parsed relationship structures handed to the relationship store

use kith_domain::vocabulary;
use kith_domain::FamilialType;
use serde::Serialize;

/// One side of a relationship
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParticipantSlot {
    /// Identifier as typed (usually a four-character short id)
    pub identifier: String,

    /// Role of this person, if given
    pub role: Option<String>,
}

impl ParticipantSlot {
    /// Create a participant slot
    pub fn new(identifier: impl Into<String>, role: Option<String>) -> Self {
        Self {
            identifier: identifier.into(),
            role,
        }
    }
}

/// The relationship type named by a command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RelationshipTypeSlot {
    /// Lower-cased keyword
    pub name: String,

    /// Whether the type has a fixed role vocabulary
    pub is_familial: bool,

    /// Whether both people may hold the same role
    pub is_symmetric: bool,
}

impl RelationshipTypeSlot {
    /// Build a slot from a keyword, looking it up in the role vocabulary table
    pub fn new(name: &str) -> Self {
        let name = name.trim().to_lowercase();
        Self {
            is_familial: vocabulary::is_familial(&name),
            is_symmetric: vocabulary::is_symmetric(&name),
            name,
        }
    }

    /// The familial type, if this is one
    pub fn familial(&self) -> Option<FamilialType> {
        FamilialType::parse(&self.name)
    }
}

/// Result of parsing a relationship command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "shape", rename_all = "snake_case")]
pub enum ParsedRelationship {
    /// Two participants and a type (add, edit, delete by pair)
    Pair {
        /// First participant
        a: ParticipantSlot,
        /// Second participant
        b: ParticipantSlot,
        /// Relationship type
        rel_type: RelationshipTypeSlot,
    },

    /// A type alone (delete by type)
    TypeOnly {
        /// Relationship type
        rel_type: RelationshipTypeSlot,
    },
}

impl ParsedRelationship {
    /// The relationship type of either variant
    pub fn rel_type(&self) -> &RelationshipTypeSlot {
        match self {
            ParsedRelationship::Pair { rel_type, .. } => rel_type,
            ParsedRelationship::TypeOnly { rel_type } => rel_type,
        }
    }

    /// Both participants, for the `Pair` variant
    pub fn participants(&self) -> Option<(&ParticipantSlot, &ParticipantSlot)> {
        match self {
            ParsedRelationship::Pair { a, b, .. } => Some((a, b)),
            ParsedRelationship::TypeOnly { .. } => None,
        }
    }
}

/// Result of parsing an edit command
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ParsedEdit {
    /// New state of the relationship; always a `Pair`
    pub relationship: ParsedRelationship,

    /// Type of the existing relationship being edited
    pub replaces: RelationshipTypeSlot,
}

impl ParsedEdit {
    /// Whether the edit changes the relationship type
    pub fn changes_type(&self) -> bool {
        self.relationship.rel_type().name != self.replaces.name
    }
}
