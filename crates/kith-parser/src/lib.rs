//! Kith Relationship Parser
//!
//! Decomposes the slash-delimited argument of a relationship command into two
//! participants, an optional role for each, and a relationship type.
//!
//! # Architecture
//!
//! ```text
//! args → tokenizer → segments → classifier → grammar engine → ParsedRelationship
//! ```
//!
//! # Command shapes
//!
//! | command        | argument                                      |
//! |----------------|-----------------------------------------------|
//! | add            | `/<id> [role]/<id> [role]/<type>`             |
//! | edit           | `/<id> [role]/<id> [role]/<segment>/<type>`   |
//! | delete by pair | `/<id> [role]/<id> [role]/<type>`             |
//! | delete by type | `/<type>`                                     |
//!
//! Familial types (`bioparents`, `siblings`, `spouses`) need a role for both
//! people, drawn from that type's two role names. Only `siblings` and
//! `spouses` allow both people to share a role.
//!
//! # Example Usage
//!
//! ```
//! use kith_parser::{parse_add, ParsedRelationship};
//!
//! let parsed = parse_add("/0001 parent/0002 child/bioparents").unwrap();
//! match parsed {
//!     ParsedRelationship::Pair { a, b, rel_type } => {
//!         assert_eq!(a.role.as_deref(), Some("parent"));
//!         assert_eq!(b.identifier, "0002");
//!         assert!(rel_type.is_familial);
//!     }
//!     ParsedRelationship::TypeOnly { .. } => unreachable!(),
//! }
//! ```
//!
//! Parsing never logs and never returns a partially built structure.

#![warn(missing_docs)]

mod error;
mod grammar;
mod parser;
mod segment;
mod tokenizer;
mod types;


pub use error::{ErrorCategory, ParseError};
pub use grammar::Shape;
pub use parser::{
    parse_add, parse_delete_by_pair, parse_delete_by_type, parse_edit, parse_familial_type,
    RelationshipParser,
};
pub use segment::{Segment, SegmentKind};
pub use tokenizer::{tokenize, Segments};
pub use types::{ParsedEdit, ParsedRelationship, ParticipantSlot, RelationshipTypeSlot};
