//! Editrelation command implementation.

use crate::commands::resolve_relationship;
use crate::error::Result;
use crate::output::Formatter;
use kith_domain::RelationshipStore;
use kith_parser::RelationshipParser;
use kith_store::MemoryStore;
use tracing::debug;

/// Execute the editrelation command.
///
/// The store itself supplies the type vocabulary, so relationship types added
/// during the session can anchor an edit.
pub fn execute_edit_relation(args: &str, store: &mut MemoryStore, formatter: &Formatter) -> Result<()> {
    let edit = RelationshipParser::new(&*store).parse_edit(args)?;
    debug!(replaces = %edit.replaces.name, changes_type = edit.changes_type(), "Parsed edit");

    let relationship = resolve_relationship(&*store, &edit.relationship)?;
    let message = format!("Edited relationship: {}", relationship);
    store.edit_relationship(&edit.replaces.name, relationship)?;

    println!("{}", formatter.success(&message));
    Ok(())
}
