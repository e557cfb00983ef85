//! Deleterelation command implementation.

use crate::commands::resolve_relationship;
use crate::error::Result;
use crate::output::Formatter;
use kith_domain::RelationshipStore;
use kith_parser::{ParsedRelationship, RelationshipParser};
use kith_store::MemoryStore;

/// Execute the deleterelation command, by pair or by type.
pub fn execute_delete_relation(args: &str, store: &mut MemoryStore, formatter: &Formatter) -> Result<()> {
    let parsed = RelationshipParser::builtin().parse_delete(args)?;

    match &parsed {
        ParsedRelationship::TypeOnly { rel_type } => {
            store.delete_relationship_type(&rel_type.name)?;
        }
        ParsedRelationship::Pair { .. } => {
            let target = resolve_relationship(&*store, &parsed)?;
            store.delete_relationship(target.origin, target.target, &target.descriptor)?;
        }
    }

    println!("{}", formatter.success("Delete successful"));
    Ok(())
}
