//! Relationship grammar engine
//!
//! The engine folds classified segments, one position at a time, into a small
//! state: the participants seen so far (at most two, each with a pending role)
//! and the relationship-type candidates. Once every segment is folded in, the
//! relationship invariants are checked once against the whole state.
//!
//! A trailing edit segment whose head equals an identifier already seen is a
//! role for that participant, never a type. That decision is made by identity,
//! not by position, and is final for the rest of the parse.

use kith_domain::vocabulary;
use kith_domain::TypeVocabulary;

use crate::error::ParseError;
use crate::segment::{Segment, SegmentKind};
use crate::types::{ParsedRelationship, ParticipantSlot, RelationshipTypeSlot};

/// Syntactic shapes of relationship commands
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Shape {
    /// `/<id> [role]/<id> [role]/<type>`
    Add,

    /// `/<id> [role]/<id> [role]/<segment>/<type>`
    Edit,

    /// `/<id> [role]/<id> [role]/<type>`
    DeleteByPair,

    /// `/<type>`
    DeleteByType,
}

impl Shape {
    /// What each position expects, in order
    pub fn slots(&self) -> &'static [SegmentKind] {
        use SegmentKind::*;
        match self {
            Shape::Add | Shape::DeleteByPair => &[Participant, Participant, Keyword],
            Shape::Edit => &[Participant, Participant, Trailing, Trailing],
            Shape::DeleteByType => &[Keyword],
        }
    }

    /// Number of segments after the leading `/`
    pub fn segment_count(&self) -> usize {
        self.slots().len()
    }

    /// Usage line shown when the shape is wrong
    pub fn usage(&self) -> &'static str {
        match self {
            Shape::Add => {
                "addrelation /<UUID> [role] /<UUID> [role] /<relationship type>\n\
                 Example: addrelation /0001 parent /0002 child /bioparents"
            }
            Shape::Edit => {
                "editrelation /<UUID> [role] /<UUID> [role] /<current type> /<new type>\n\
                 Example: editrelation /0001 /0002 /friend /housemates"
            }
            Shape::DeleteByPair => {
                "deleterelation /<UUID> [role] /<UUID> [role] /<relationship type>\n\
                 Example: deleterelation /0001 sister /0002 brother /siblings"
            }
            Shape::DeleteByType => {
                "deleterelation /<relationship type>\n\
                 Example: deleterelation /housemates"
            }
        }
    }
}

/// Output of a completed fold
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Folded {
    /// The validated relationship
    pub relationship: ParsedRelationship,

    /// Type that locates the existing relationship (same as the new type outside edits)
    pub anchor: RelationshipTypeSlot,
}

#[derive(Debug, Default)]
struct FoldState {
    participants: Vec<ParticipantSlot>,
    candidates: Vec<String>,
}

/// Single-pass fold over the segments of one command
pub struct GrammarEngine<'v, V> {
    shape: Shape,
    vocabulary: &'v V,
    state: FoldState,
}

impl<'v, V: TypeVocabulary> GrammarEngine<'v, V> {
    /// Start a fold for `shape`
    pub fn new(shape: Shape, vocabulary: &'v V) -> Self {
        Self {
            shape,
            vocabulary,
            state: FoldState::default(),
        }
    }

    /// Fold one segment classified for a position of kind `kind`
    pub fn fold(&mut self, segment: Segment, kind: SegmentKind) -> Result<(), ParseError> {
        match kind {
            SegmentKind::Participant => self.fold_participant(segment),
            SegmentKind::Keyword => self.fold_keyword(segment),
            SegmentKind::Trailing => match self.position_of(segment.head()) {
                Some(index) => self.fold_role(index, segment),
                None => self.fold_keyword(segment),
            },
        }
    }

    fn position_of(&self, identifier: &str) -> Option<usize> {
        self.state
            .participants
            .iter()
            .position(|p| p.identifier == identifier)
    }

    fn fold_participant(&mut self, segment: Segment) -> Result<(), ParseError> {
        if self.position_of(segment.head()).is_some() {
            return Err(ParseError::SelfRelationship);
        }
        let (identifier, role) = segment.into_parts();
        self.state.participants.push(ParticipantSlot { identifier, role });
        Ok(())
    }

    fn fold_keyword(&mut self, segment: Segment) -> Result<(), ParseError> {
        if segment.tail().is_some() {
            return Err(ParseError::InvalidRoleSyntax);
        }
        if vocabulary::is_reserved(segment.head()) {
            return Err(ParseError::VagueFamilyRelationship);
        }
        self.state.candidates.push(segment.head().to_lowercase());
        Ok(())
    }

    fn fold_role(&mut self, index: usize, segment: Segment) -> Result<(), ParseError> {
        let (identifier, role) = segment.into_parts();
        let Some(role) = role else {
            return Err(ParseError::MalformedRelationshipToken(format!(
                "'{}' names a participant but gives no role",
                identifier
            )));
        };

        let slot = &mut self.state.participants[index];
        if slot.role.is_some() {
            return Err(ParseError::MalformedRelationshipToken(format!(
                "the role of '{}' is given more than once",
                identifier
            )));
        }
        slot.role = Some(role);
        Ok(())
    }

    /// Check the invariants and emit the parsed relationship
    pub fn finish(self) -> Result<Folded, ParseError> {
        let (anchor, rel_type) = self.resolve_type()?;
        let usage = self.shape.usage();

        if self.shape == Shape::DeleteByType {
            if vocabulary::is_predefined(&rel_type.name) {
                return Err(ParseError::PredefinedRelationshipDeletionNotSupported(rel_type.name));
            }
            return Ok(Folded {
                relationship: ParsedRelationship::TypeOnly { rel_type },
                anchor,
            });
        }

        let mut participants = self.state.participants.into_iter();
        let (Some(a), Some(b)) = (participants.next(), participants.next()) else {
            return Err(ParseError::MalformedCommand { usage });
        };
        check_roles(&a, &b, &rel_type)?;

        Ok(Folded {
            relationship: ParsedRelationship::Pair { a, b, rel_type },
            anchor,
        })
    }

    /// Pick the anchor and new type among the candidates
    ///
    /// With two candidates the later one is always the new type and the
    /// earlier one the anchor. At least one of them must be known to the
    /// vocabulary.
    fn resolve_type(&self) -> Result<(RelationshipTypeSlot, RelationshipTypeSlot), ParseError> {
        match self.state.candidates.as_slice() {
            [] => Err(ParseError::MissingRelationshipType),
            [only] => Ok((RelationshipTypeSlot::new(only), RelationshipTypeSlot::new(only))),
            [current, new] => {
                if !self.vocabulary.is_known(current) && !self.vocabulary.is_known(new) {
                    return Err(ParseError::AmbiguousRelationshipType {
                        first: current.clone(),
                        second: new.clone(),
                    });
                }
                Ok((RelationshipTypeSlot::new(current), RelationshipTypeSlot::new(new)))
            }
            _ => Err(ParseError::MalformedCommand {
                usage: self.shape.usage(),
            }),
        }
    }
}

/// Role invariants for a pair under `rel_type`
fn check_roles(
    a: &ParticipantSlot,
    b: &ParticipantSlot,
    rel_type: &RelationshipTypeSlot,
) -> Result<(), ParseError> {
    if let Some(familial) = rel_type.familial() {
        match (&a.role, &b.role) {
            (None, None) => return Err(ParseError::MissingFamilialRoles(familial)),
            (Some(role_a), Some(role_b)) if familial.admits(role_a) && familial.admits(role_b) => {}
            _ => return Err(ParseError::InvalidFamilialRole(familial)),
        }
    }

    match (&a.role, &b.role) {
        (Some(_), None) | (None, Some(_)) => Err(ParseError::RoleMismatchRequired),
        (Some(role_a), Some(role_b))
            if role_a.eq_ignore_ascii_case(role_b) && !rel_type.is_symmetric =>
        {
            Err(ParseError::DuplicateRoleNotAllowed)
        }
        _ => Ok(()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use kith_domain::{BuiltinVocabulary, FamilialType};

    fn fold_all(shape: Shape, raw: &[&str]) -> Result<Folded, ParseError> {
        let mut engine = GrammarEngine::new(shape, &BuiltinVocabulary);
        for (segment, kind) in raw.iter().zip(shape.slots()) {
            engine.fold(Segment::classify(segment, *kind)?, *kind)?;
        }
        engine.finish()
    }

    fn role_of(folded: &Folded, side: usize) -> Option<String> {
        let (a, b) = folded.relationship.participants().unwrap();
        [a, b][side].role.clone()
    }

    #[test]
    fn test_trailing_segment_matching_identifier_is_a_role() {
        let folded = fold_all(Shape::Edit, &["0001", "0002", "0001 parent", "friend"]);
        assert_eq!(folded, Err(ParseError::RoleMismatchRequired));

        let folded = fold_all(Shape::Edit, &["0001", "0002 child", "0001 parent", "bioparents"]).unwrap();
        assert_eq!(role_of(&folded, 0).as_deref(), Some("parent"));
        assert_eq!(role_of(&folded, 1).as_deref(), Some("child"));
        assert_eq!(folded.anchor.name, "bioparents");
    }

    #[test]
    fn test_role_given_twice() {
        let result = fold_all(Shape::Edit, &["0001 parent", "0002 child", "0001 child", "bioparents"]);
        assert!(matches!(result, Err(ParseError::MalformedRelationshipToken(_))));
    }

    #[test]
    fn test_role_segment_without_role() {
        let result = fold_all(Shape::Edit, &["0001", "0002", "0002", "friend"]);
        assert!(matches!(result, Err(ParseError::MalformedRelationshipToken(_))));
    }

    #[test]
    fn test_last_candidate_is_new_type() {
        let folded = fold_all(Shape::Edit, &["0001", "0002", "friend", "housemates"]).unwrap();
        assert_eq!(folded.anchor.name, "friend");
        assert_eq!(folded.relationship.rel_type().name, "housemates");

        // A known type in the last position is never moved into the anchor
        let folded = fold_all(Shape::Edit, &["0001", "0002", "housemates", "friend"]).unwrap();
        assert_eq!(folded.anchor.name, "housemates");
        assert_eq!(folded.relationship.rel_type().name, "friend");
    }

    #[test]
    fn test_unknown_candidates_are_ambiguous() {
        let result = fold_all(Shape::Edit, &["0001", "0002", "housemates", "colleagues"]);
        assert_eq!(
            result,
            Err(ParseError::AmbiguousRelationshipType {
                first: "housemates".to_string(),
                second: "colleagues".to_string(),
            })
        );
    }

    #[test]
    fn test_no_type_candidate() {
        let result = fold_all(
            Shape::Edit,
            &["0001", "0002", "0001 husband", "0002 wife"],
        );
        assert_eq!(result, Err(ParseError::MissingRelationshipType));
    }

    #[test]
    fn test_keyword_after_identifier_in_add_is_a_type() {
        let folded = fold_all(Shape::Add, &["0001", "0002", "0001"]).unwrap();
        assert_eq!(folded.relationship.rel_type().name, "0001");
    }

    #[test]
    fn test_family_keyword_rejected() {
        assert_eq!(
            fold_all(Shape::Add, &["1233", "1234", "Family"]),
            Err(ParseError::VagueFamilyRelationship)
        );
        assert_eq!(
            fold_all(Shape::DeleteByType, &["family"]),
            Err(ParseError::VagueFamilyRelationship)
        );
    }

    #[test]
    fn test_one_familial_role_is_invalid() {
        assert_eq!(
            fold_all(Shape::Add, &["0001 parent", "0002", "bioparents"]),
            Err(ParseError::InvalidFamilialRole(FamilialType::BioParents))
        );
        assert_eq!(
            fold_all(Shape::DeleteByPair, &["0001", "0002 wife", "spouses"]),
            Err(ParseError::InvalidFamilialRole(FamilialType::Spouses))
        );
    }

    #[test]
    fn test_delete_usage_shows_roles() {
        assert!(Shape::DeleteByPair.usage().contains("/<UUID> [role]"));
    }

    #[test]
    fn test_shape_counts() {
        assert_eq!(Shape::Add.segment_count(), 3);
        assert_eq!(Shape::DeleteByPair.segment_count(), 3);
        assert_eq!(Shape::Edit.segment_count(), 4);
        assert_eq!(Shape::DeleteByType.segment_count(), 1);
    }
}
