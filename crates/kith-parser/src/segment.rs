//! Segment classifier: head word plus optional role

use crate::error::ParseError;

/// What a grammar position expects to find
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SegmentKind {
    /// Identifier, optionally followed by a role
    Participant,

    /// A single relationship-type keyword
    Keyword,

    /// Either a role for an identifier already seen, or a keyword (edit only)
    Trailing,
}

/// One classified segment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    head: String,
    tail: Option<String>,
}

impl Segment {
    /// Classify a trimmed segment for a position of kind `kind`
    pub fn classify(raw: &str, kind: SegmentKind) -> Result<Self, ParseError> {
        let raw = raw.trim();
        let (head, rest) = match raw.split_once(char::is_whitespace) {
            Some((head, rest)) => (head, Some(rest.trim())),
            None => (raw, None),
        };

        if head.is_empty() {
            return Err(match kind {
                SegmentKind::Participant => ParseError::EmptyIdentifier,
                SegmentKind::Keyword => ParseError::EmptyRelationshipType,
                SegmentKind::Trailing => {
                    ParseError::MalformedRelationshipToken("segments cannot be empty".to_string())
                }
            });
        }

        let tail = match rest {
            Some(word) if is_role_word(word) && kind != SegmentKind::Keyword => Some(word.to_string()),
            Some(_) => return Err(ParseError::InvalidRoleSyntax),
            None => None,
        };

        Ok(Self {
            head: head.to_string(),
            tail,
        })
    }

    /// Identifier or keyword
    pub fn head(&self) -> &str {
        &self.head
    }

    /// Role, if one followed the head
    pub fn tail(&self) -> Option<&str> {
        self.tail.as_deref()
    }

    /// Split into owned parts
    pub fn into_parts(self) -> (String, Option<String>) {
        (self.head, self.tail)
    }
}

fn is_role_word(word: &str) -> bool {
    !word.is_empty() && word.chars().all(|c| c.is_ascii_alphabetic())
}
