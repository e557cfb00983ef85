//! Addrelation command implementation.

use crate::commands::resolve_relationship;
use crate::error::Result;
use crate::output::Formatter;
use kith_domain::RelationshipStore;
use kith_parser::RelationshipParser;
use kith_store::MemoryStore;

/// Execute the addrelation command.
pub fn execute_add_relation(args: &str, store: &mut MemoryStore, formatter: &Formatter) -> Result<()> {
    let parsed = RelationshipParser::builtin().parse_add(args)?;
    let relationship = resolve_relationship(&*store, &parsed)?;

    let message = format!("Added relationship: {}", relationship);
    store.add_relationship(relationship)?;

    println!("{}", formatter.success(&message));
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use crate::error::CliError;
    use kith_parser::ParseError;

    fn setup() -> (MemoryStore, Formatter) {
        let mut store = MemoryStore::new();
        store.add_person("Alice").unwrap();
        store.add_person("Bob").unwrap();
        (store, Formatter::new(OutputFormat::Quiet, false))
    }

    #[test]
    fn test_add_familial_relationship() {
        let (mut store, formatter) = setup();
        execute_add_relation("/0001 sister/0002 brother/siblings", &mut store, &formatter).unwrap();

        let all = store.relationships().unwrap();
        assert_eq!(all.len(), 1);
        assert_eq!(all[0].target_role.as_deref(), Some("brother"));
    }

    #[test]
    fn test_add_custom_type_is_learned() {
        let (mut store, formatter) = setup();
        execute_add_relation("/0001/0002/Housemates", &mut store, &formatter).unwrap();
        assert!(store.known_types().contains(&"housemates".to_string()));
    }

    #[test]
    fn test_parse_error_leaves_store_untouched() {
        let (mut store, formatter) = setup();
        let result = execute_add_relation("/0001/0002/bioparents", &mut store, &formatter);

        assert!(matches!(
            result,
            Err(CliError::Parse(ParseError::MissingFamilialRoles(_)))
        ));
        assert!(store.relationships().unwrap().is_empty());
    }
}
