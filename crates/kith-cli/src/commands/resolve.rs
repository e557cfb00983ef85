//! Turning parsed participants into stored people.

use crate::error::{CliError, Result};
use kith_domain::{PersonDirectory, Relationship};
use kith_parser::ParsedRelationship;
use tracing::debug;

/// Resolve both participants of a parsed pair through `directory`.
///
/// Roles and the relationship type carry over unchanged.
pub fn resolve_relationship<D>(directory: &D, parsed: &ParsedRelationship) -> Result<Relationship>
where
    D: PersonDirectory,
    CliError: From<D::Error>,
{
    let (a, b) = parsed.participants().ok_or_else(|| {
        CliError::InvalidInput("Expected two people in the relationship".to_string())
    })?;

    let origin = directory.resolve(&a.identifier)?;
    let target = directory.resolve(&b.identifier)?;
    debug!(origin = %origin, target = %target, "Resolved participants");

    // Two short ids can still name the same person once resolved
    if origin == target {
        return Err(kith_parser::ParseError::SelfRelationship.into());
    }

    Ok(Relationship::new(origin, target, parsed.rel_type().name.clone())
        .with_roles(a.role.clone(), b.role.clone()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kith_domain::PersonId;
    use kith_parser::parse_add;
    use kith_store::{MemoryStore, StoreError};

    fn store() -> MemoryStore {
        let mut store = MemoryStore::new();
        store.add_person("Alice").unwrap();
        store.add_person("Bob").unwrap();
        store
    }

    #[test]
    fn test_resolve_pair_with_roles() {
        let parsed = parse_add("/0001 wife/0002 husband/spouses").unwrap();
        let relationship = resolve_relationship(&store(), &parsed).unwrap();

        assert_eq!(relationship.origin, PersonId::from_value(1));
        assert_eq!(relationship.target, PersonId::from_value(2));
        assert_eq!(relationship.origin_role.as_deref(), Some("wife"));
        assert_eq!(relationship.descriptor, "spouses");
    }

    #[test]
    fn test_unknown_person() {
        let parsed = parse_add("/0001/0003/friend").unwrap();
        let result = resolve_relationship(&store(), &parsed);
        assert!(matches!(result, Err(CliError::Store(StoreError::NotFound(_)))));
    }

    #[test]
    fn test_short_and_full_id_of_same_person() {
        let full = PersonId::from_value(1).to_string();
        let parsed = parse_add(&format!("/0001/{}/friend", full)).unwrap();
        let result = resolve_relationship(&store(), &parsed);
        assert!(matches!(
            result,
            Err(CliError::Parse(kith_parser::ParseError::SelfRelationship))
        ));
    }

    #[test]
    fn test_type_only_rejected() {
        let parsed = kith_parser::parse_delete_by_type("/housemates").unwrap();
        let result = resolve_relationship(&store(), &parsed);
        assert!(matches!(result, Err(CliError::InvalidInput(_))));
    }
}
