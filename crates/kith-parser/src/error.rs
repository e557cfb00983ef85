//! Error types for the relationship parser

use kith_domain::FamilialType;
use thiserror::Error;

/// Whether a failure concerns the shape of the input or its meaning
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorCategory {
    /// Wrong token count, malformed segment, invalid role syntax
    Syntax,

    /// Self relationship, duplicate role, invalid familial role, ambiguous type
    Semantic,
}

/// Errors that can occur while parsing a relationship command
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseError {
    /// Wrong number of `/`-delimited segments, or no leading `/`
    #[error("Invalid command format!\n{usage}")]
    MalformedCommand {
        /// Usage line for the command that was being parsed
        usage: &'static str,
    },

    /// A segment could not be read as identifier, role or type
    #[error("Malformed relationship segment: {0}")]
    MalformedRelationshipToken(String),

    /// A role is not a single alphabetic word
    #[error("Roles must be all strings and one word only")]
    InvalidRoleSyntax,

    /// A participant segment is empty
    #[error("UUIDs cannot be empty.")]
    EmptyIdentifier,

    /// The relationship type segment is empty
    #[error("Relationship Descriptor cannot be empty")]
    EmptyRelationshipType,

    /// Every trailing segment of an edit assigned a role
    #[error("No relationship type given; the last segment must name the relationship type")]
    MissingRelationshipType,

    /// Both participants are the same person
    #[error("Relationships must be between 2 different people.")]
    SelfRelationship,

    /// Only one of the two participants has a role
    #[error("Roles must be specified for both people or for neither.")]
    RoleMismatchRequired,

    /// Both participants share a role in a non-symmetric relationship
    #[error("Roles must be different for each person in a relationship.")]
    DuplicateRoleNotAllowed,

    /// A familial relationship was given without any roles
    #[error(
        "{} relationship requires two roles to be specified.\nPlease specify the roles in the format: \n/<UUID> <role> /<UUID> <role> /{}",
        .0.display_name(),
        .0.keyword()
    )]
    MissingFamilialRoles(FamilialType),

    /// A familial relationship was given a missing role or one outside its vocabulary
    #[error(
        "{} relationship requires the roles to be specified as either '{}' or '{}'.",
        .0.display_name(),
        .0.roles()[0],
        .0.roles()[1]
    )]
    InvalidFamilialRole(FamilialType),

    /// A familial type was required but something else was named
    #[error("'{0}' is not a familial relationship type. Valid familial relations are: [bioParents, siblings, spouses]")]
    UnknownRelationshipType(String),

    /// Neither trailing segment of an edit is a known relationship type
    #[error("Cannot tell which of '{first}' and '{second}' is the existing relationship type; neither is known")]
    AmbiguousRelationshipType {
        /// Third segment of the edit
        first: String,
        /// Fourth segment of the edit
        second: String,
    },

    /// The relationship type was spelled `family`
    #[error("Please specify the type of familial relationship instead of 'Family'.\n Valid familial relations are: [bioParents, siblings, spouses]")]
    VagueFamilyRelationship,

    /// Predefined types can only be removed pair by pair
    #[error("Predefined relationship type '{0}' cannot be deleted. Delete its relationships by naming both people instead.")]
    PredefinedRelationshipDeletionNotSupported(String),
}

impl ParseError {
    /// Classify this error
    pub fn category(&self) -> ErrorCategory {
        match self {
            ParseError::MalformedCommand { .. }
            | ParseError::MalformedRelationshipToken(_)
            | ParseError::InvalidRoleSyntax
            | ParseError::EmptyIdentifier
            | ParseError::EmptyRelationshipType
            | ParseError::MissingRelationshipType => ErrorCategory::Syntax,
            _ => ErrorCategory::Semantic,
        }
    }
}
