//! Person commands: adding contacts and listing the directory.

use crate::error::{CliError, Result};
use crate::output::Formatter;
use kith_domain::{Person, PersonDirectory, Relationship, RelationshipStore};
use kith_store::MemoryStore;

/// Execute the addperson command.
pub fn execute_add_person(name: &str, store: &mut MemoryStore, formatter: &Formatter) -> Result<()> {
    if name.trim().is_empty() {
        return Err(CliError::InvalidInput("Usage: addperson <name>".to_string()));
    }

    let id = store.add_person(name)?;
    if let Some(person) = store.get_person(id) {
        println!("{}", formatter.person_added(person));
    }
    Ok(())
}

/// Execute the list command: people first, then their relationships.
///
/// With an identifier, only that person and the relationships they are part of are shown.
pub fn execute_list(filter: Option<&str>, store: &MemoryStore, formatter: &Formatter) -> Result<()> {
    let (people, relationships) = listing(filter, store)?;
    println!("{}", formatter.format_people(&people)?);
    println!("{}", formatter.format_relationships(&relationships, store.people())?);
    Ok(())
}

fn listing(filter: Option<&str>, store: &MemoryStore) -> Result<(Vec<Person>, Vec<Relationship>)> {
    let relationships = store.relationships()?;
    let Some(identifier) = filter else {
        return Ok((store.people().to_vec(), relationships));
    };

    let id = store.resolve(identifier)?;
    let people = store.get_person(id).cloned().into_iter().collect();
    let relationships = relationships.into_iter().filter(|r| r.involves(id)).collect();
    Ok((people, relationships))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::OutputFormat;
    use kith_domain::PersonId;

    #[test]
    fn test_add_person() {
        let mut store = MemoryStore::new();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        execute_add_person("Alice", &mut store, &formatter).unwrap();
        assert_eq!(store.people().len(), 1);
        assert_eq!(store.people()[0].name, "Alice");
    }

    #[test]
    fn test_listing_filters_by_person() {
        let mut store = MemoryStore::new();
        let ids: Vec<PersonId> = ["Alice", "Bob", "Carol"]
            .iter()
            .map(|name| store.add_person(name).unwrap())
            .collect();
        store.add_relationship(Relationship::new(ids[0], ids[1], "friend")).unwrap();
        store.add_relationship(Relationship::new(ids[1], ids[2], "housemates")).unwrap();

        let (people, relationships) = listing(None, &store).unwrap();
        assert_eq!(people.len(), 3);
        assert_eq!(relationships.len(), 2);

        let (people, relationships) = listing(Some("0003"), &store).unwrap();
        assert_eq!(people.len(), 1);
        assert_eq!(people[0].name, "Carol");
        assert_eq!(relationships.len(), 1);
        assert_eq!(relationships[0].descriptor, "housemates");

        assert!(matches!(
            listing(Some("0009"), &store),
            Err(CliError::Store(kith_store::StoreError::NotFound(_)))
        ));
    }

    #[test]
    fn test_add_person_requires_name() {
        let mut store = MemoryStore::new();
        let formatter = Formatter::new(OutputFormat::Quiet, false);

        let result = execute_add_person("   ", &mut store, &formatter);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
        assert!(store.people().is_empty());
    }
}
