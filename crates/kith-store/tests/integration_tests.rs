//! Integration tests for kith-store
//!
//! These tests drive the store with parsed commands, the way the CLI does.

use kith_domain::{PersonDirectory, PersonId, Relationship, RelationshipStore};
use kith_parser::{ParsedRelationship, RelationshipParser};
use kith_store::{MemoryStore, StoreError};

fn store_with_people(count: usize) -> MemoryStore {
    let mut store = MemoryStore::new();
    for i in 0..count {
        store.add_person(&format!("Person {}", i + 1)).unwrap();
    }
    store
}

fn resolve_pair(store: &MemoryStore, parsed: &ParsedRelationship) -> Relationship {
    let (a, b) = parsed.participants().expect("pair");
    Relationship::new(
        store.resolve(&a.identifier).unwrap(),
        store.resolve(&b.identifier).unwrap(),
        parsed.rel_type().name.clone(),
    )
    .with_roles(a.role.clone(), b.role.clone())
}

#[test]
fn test_add_and_list() {
    let mut store = store_with_people(2);
    let parsed = RelationshipParser::builtin()
        .parse_add("/0001 parent/0002 child/bioparents")
        .unwrap();

    let relationship = resolve_pair(&store, &parsed);
    store.add_relationship(relationship).unwrap();

    let all = store.relationships().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].origin, PersonId::from_value(1));
    assert_eq!(all[0].origin_role.as_deref(), Some("parent"));
    assert_eq!(all[0].descriptor, "bioparents");
}

#[test]
fn test_edit_type_with_store_vocabulary() {
    let mut store = store_with_people(3);
    let parsed = RelationshipParser::builtin()
        .parse_add("/0001/0003/housemates")
        .unwrap();
    let relationship = resolve_pair(&store, &parsed);
    store.add_relationship(relationship).unwrap();

    // "housemates" is only known to the store, so the builtin parser cannot resolve the edit
    assert!(RelationshipParser::builtin()
        .parse_edit("/0003/0001/housemates/colleagues")
        .is_err());
    let edit = RelationshipParser::new(&store)
        .parse_edit("/0003/0001/housemates/colleagues")
        .unwrap();
    assert_eq!(edit.replaces.name, "housemates");

    let updated = resolve_pair(&store, &edit.relationship);
    store.edit_relationship(&edit.replaces.name, updated).unwrap();

    let all = store.relationships().unwrap();
    assert_eq!(all.len(), 1);
    assert_eq!(all[0].descriptor, "colleagues");
    assert_eq!(all[0].origin, PersonId::from_value(3));
}

#[test]
fn test_edit_missing_relationship() {
    let mut store = store_with_people(2);
    let edit = RelationshipParser::builtin()
        .parse_edit("/0001/0002/friend/housemates")
        .unwrap();

    let updated = resolve_pair(&store, &edit.relationship);
    let result = store.edit_relationship(&edit.replaces.name, updated);
    assert!(matches!(result, Err(StoreError::RelationshipNotFound(_))));
}

#[test]
fn test_delete_by_pair_ignores_direction() {
    let mut store = store_with_people(2);
    let (a, b) = (PersonId::from_value(1), PersonId::from_value(2));
    store.add_relationship(Relationship::new(a, b, "housemates")).unwrap();

    let parsed = RelationshipParser::builtin()
        .parse_delete("/0002/0001/housemates")
        .unwrap();
    let target = resolve_pair(&store, &parsed);
    store
        .delete_relationship(target.origin, target.target, &target.descriptor)
        .unwrap();

    assert!(store.relationships().unwrap().is_empty());
}

#[test]
fn test_delete_type_removes_its_relationships() {
    let mut store = store_with_people(3);
    let ids: Vec<PersonId> = (1..=3).map(PersonId::from_value).collect();
    store.add_relationship(Relationship::new(ids[0], ids[1], "housemates")).unwrap();
    store.add_relationship(Relationship::new(ids[1], ids[2], "housemates")).unwrap();
    store.add_relationship(Relationship::new(ids[0], ids[2], "friend")).unwrap();

    let parsed = RelationshipParser::builtin()
        .parse_delete("/housemates")
        .unwrap();
    store.delete_relationship_type(&parsed.rel_type().name).unwrap();

    let remaining = store.relationships().unwrap();
    assert_eq!(remaining.len(), 1);
    assert_eq!(remaining[0].descriptor, "friend");
    assert_eq!(
        store.delete_relationship_type("housemates"),
        Err(StoreError::UnknownType("housemates".to_string()))
    );
}

#[test]
fn test_unresolvable_identifier() {
    let store = store_with_people(1);
    let parsed = RelationshipParser::builtin()
        .parse_add("/0001/0042/friend")
        .unwrap();
    let (_, b) = parsed.participants().unwrap();

    assert_eq!(
        store.resolve(&b.identifier),
        Err(StoreError::NotFound("0042".to_string()))
    );
}
