//! Public parse entry points

use kith_domain::{BuiltinVocabulary, FamilialType, TypeVocabulary};

use crate::error::ParseError;
use crate::grammar::{Folded, GrammarEngine, Shape};
use crate::segment::Segment;
use crate::tokenizer::tokenize;
use crate::types::{ParsedEdit, ParsedRelationship};

/// Parser for relationship command arguments
///
/// The vocabulary decides which relationship types count as known when an
/// edit names two of them. Parsing is pure; a parser can be shared freely.
#[derive(Debug, Clone, Default)]
pub struct RelationshipParser<V = BuiltinVocabulary> {
    vocabulary: V,
}

impl RelationshipParser<BuiltinVocabulary> {
    /// Parser that knows only the predefined relationship types
    pub fn builtin() -> Self {
        Self::new(BuiltinVocabulary)
    }
}

impl<V: TypeVocabulary> RelationshipParser<V> {
    /// Create a parser backed by `vocabulary`
    pub fn new(vocabulary: V) -> Self {
        Self { vocabulary }
    }

    /// Parse `/<id> [role]/<id> [role]/<type>`
    pub fn parse_add(&self, args: &str) -> Result<ParsedRelationship, ParseError> {
        self.run(args, Shape::Add).map(|folded| folded.relationship)
    }

    /// Parse `/<id> [role]/<id> [role]/<segment>/<type>`
    pub fn parse_edit(&self, args: &str) -> Result<ParsedEdit, ParseError> {
        let Folded {
            relationship,
            anchor,
        } = self.run(args, Shape::Edit)?;
        Ok(ParsedEdit {
            relationship,
            replaces: anchor,
        })
    }

    /// Parse `/<id> [role]/<id> [role]/<type>` for deletion
    pub fn parse_delete_by_pair(&self, args: &str) -> Result<ParsedRelationship, ParseError> {
        self.run(args, Shape::DeleteByPair)
            .map(|folded| folded.relationship)
    }

    /// Parse `/<type>`
    pub fn parse_delete_by_type(&self, args: &str) -> Result<ParsedRelationship, ParseError> {
        self.run(args, Shape::DeleteByType)
            .map(|folded| folded.relationship)
    }

    /// Parse either delete shape, chosen by the number of delimiters
    pub fn parse_delete(&self, args: &str) -> Result<ParsedRelationship, ParseError> {
        if args.matches('/').count() == 1 {
            self.parse_delete_by_type(args)
        } else {
            self.parse_delete_by_pair(args)
        }
    }

    fn run(&self, args: &str, shape: Shape) -> Result<Folded, ParseError> {
        let mut engine = GrammarEngine::new(shape, &self.vocabulary);
        for (raw, kind) in tokenize(args, shape)?.zip(shape.slots()) {
            engine.fold(Segment::classify(raw, *kind)?, *kind)?;
        }
        engine.finish()
    }
}

/// Parse an add command with the builtin vocabulary
pub fn parse_add(args: &str) -> Result<ParsedRelationship, ParseError> {
    RelationshipParser::builtin().parse_add(args)
}

/// Parse an edit command with the builtin vocabulary
pub fn parse_edit(args: &str) -> Result<ParsedEdit, ParseError> {
    RelationshipParser::builtin().parse_edit(args)
}

/// Parse a delete-by-pair command
pub fn parse_delete_by_pair(args: &str) -> Result<ParsedRelationship, ParseError> {
    RelationshipParser::builtin().parse_delete_by_pair(args)
}

/// Parse a delete-by-type command
pub fn parse_delete_by_type(args: &str) -> Result<ParsedRelationship, ParseError> {
    RelationshipParser::builtin().parse_delete_by_type(args)
}

/// Look up a familial type, failing for anything outside the closed set
pub fn parse_familial_type(name: &str) -> Result<FamilialType, ParseError> {
    if kith_domain::vocabulary::is_reserved(name) {
        return Err(ParseError::VagueFamilyRelationship);
    }
    FamilialType::parse(name).ok_or_else(|| ParseError::UnknownRelationshipType(name.trim().to_string()))
}
