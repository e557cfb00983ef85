//! Role vocabulary table - the fixed relationship types and their roles
//!
//! Three relationship types are familial. Each of them admits exactly two role
//! names, and two of them (`siblings`, `spouses`) are symmetric: both people
//! may hold the same role. All lookups are case-insensitive.

use std::fmt;

use crate::traits::TypeVocabulary;

/// Keywords that are always known and can never be deleted
pub const PREDEFINED_TYPES: [&str; 4] = ["bioparents", "siblings", "spouses", "friend"];

/// Keyword too vague to name a relationship; users must pick a familial type
pub const RESERVED_FAMILY_KEYWORD: &str = "family";

/// A familial relationship type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FamilialType {
    /// Biological parent and child
    BioParents,

    /// Brothers and sisters
    Siblings,

    /// Husband and wife
    Spouses,
}

impl FamilialType {
    /// All familial types, in display order
    pub const ALL: [FamilialType; 3] = [
        FamilialType::BioParents,
        FamilialType::Siblings,
        FamilialType::Spouses,
    ];

    /// Keyword used on the command line
    pub fn keyword(&self) -> &'static str {
        match self {
            FamilialType::BioParents => "bioparents",
            FamilialType::Siblings => "siblings",
            FamilialType::Spouses => "spouses",
        }
    }

    /// Capitalized name used in messages
    pub fn display_name(&self) -> &'static str {
        match self {
            FamilialType::BioParents => "BioParents",
            FamilialType::Siblings => "Siblings",
            FamilialType::Spouses => "Spouses",
        }
    }

    /// The two role names this type admits
    pub fn roles(&self) -> [&'static str; 2] {
        match self {
            FamilialType::BioParents => ["parent", "child"],
            FamilialType::Siblings => ["brother", "sister"],
            FamilialType::Spouses => ["husband", "wife"],
        }
    }

    /// Whether both people may hold the same role
    pub fn is_symmetric(&self) -> bool {
        matches!(self, FamilialType::Siblings | FamilialType::Spouses)
    }

    /// Whether `role` is one of this type's roles (case-insensitive)
    pub fn admits(&self, role: &str) -> bool {
        self.roles().iter().any(|r| r.eq_ignore_ascii_case(role))
    }

    /// Look up a familial type by keyword (case-insensitive)
    pub fn parse(name: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|t| t.keyword().eq_ignore_ascii_case(name.trim()))
    }
}

impl fmt::Display for FamilialType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Whether `name` is a familial relationship type
pub fn is_familial(name: &str) -> bool {
    FamilialType::parse(name).is_some()
}

/// The roles `name` admits, or an empty slice when it is not familial
pub fn allowed_roles(name: &str) -> &'static [&'static str] {
    match FamilialType::parse(name) {
        Some(FamilialType::BioParents) => &["parent", "child"],
        Some(FamilialType::Siblings) => &["brother", "sister"],
        Some(FamilialType::Spouses) => &["husband", "wife"],
        None => &[],
    }
}

/// Whether `name` is one of the symmetric types (`siblings`, `spouses`)
pub fn is_symmetric(name: &str) -> bool {
    FamilialType::parse(name).is_some_and(|t| t.is_symmetric())
}

/// Whether `name` is a predefined type
pub fn is_predefined(name: &str) -> bool {
    PREDEFINED_TYPES.iter().any(|t| t.eq_ignore_ascii_case(name.trim()))
}

/// Whether `name` is the reserved `family` keyword
pub fn is_reserved(name: &str) -> bool {
    RESERVED_FAMILY_KEYWORD.eq_ignore_ascii_case(name.trim())
}

/// Vocabulary that knows only the predefined types
#[derive(Debug, Clone, Copy, Default)]
pub struct BuiltinVocabulary;

impl TypeVocabulary for BuiltinVocabulary {
    fn is_known(&self, name: &str) -> bool {
        is_predefined(name)
    }
}
