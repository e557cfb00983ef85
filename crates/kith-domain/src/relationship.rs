//! Relationship module - pairwise, typed links between people

use std::fmt;

use super::PersonId;

/// A resolved relationship between two people
///
/// Relationships are pairwise only. The descriptor is stored lower-cased and
/// roles keep the spelling the user gave them.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Relationship {
    /// First person
    pub origin: PersonId,

    /// Second person
    pub target: PersonId,

    /// Relationship type, e.g. `siblings` or `housemates`
    pub descriptor: String,

    /// Role of the first person, if any
    pub origin_role: Option<String>,

    /// Role of the second person, if any
    pub target_role: Option<String>,
}

impl Relationship {
    /// Create a relationship without roles
    pub fn new(origin: PersonId, target: PersonId, descriptor: impl Into<String>) -> Self {
        Self {
            origin,
            target,
            descriptor: descriptor.into().to_lowercase(),
            origin_role: None,
            target_role: None,
        }
    }

    /// Attach roles to both sides
    pub fn with_roles(mut self, origin_role: Option<String>, target_role: Option<String>) -> Self {
        self.origin_role = origin_role;
        self.target_role = target_role;
        self
    }

    /// Whether this relationship links `a` and `b` under `descriptor`
    ///
    /// Direction is ignored and the descriptor is compared case-insensitively.
    pub fn connects(&self, a: PersonId, b: PersonId, descriptor: &str) -> bool {
        let same_pair = (self.origin == a && self.target == b) || (self.origin == b && self.target == a);
        same_pair && self.descriptor.eq_ignore_ascii_case(descriptor)
    }

    /// Whether either side of this relationship is `person`
    pub fn involves(&self, person: PersonId) -> bool {
        self.origin == person || self.target == person
    }
}

impl fmt::Display for Relationship {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.origin.short())?;
        if let Some(role) = &self.origin_role {
            write!(f, " ({})", role)?;
        }
        write!(f, " and {}", self.target.short())?;
        if let Some(role) = &self.target_role {
            write!(f, " ({})", role)?;
        }
        write!(f, " as {}", self.descriptor)
    }
}
