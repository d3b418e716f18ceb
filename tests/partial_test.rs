//! Integration tests for `Partial` over typed structs, maps and sequences.

use std::collections::{BTreeMap, HashMap};

use desire::{desire, Match, Rejection};
use serde::Serialize;

#[derive(Serialize)]
struct User {
    id: u64,
    name: String,
    email: Option<String>,
    tags: Vec<String>,
}

fn alice() -> User {
    User {
        id: 1,
        name: "alice".to_string(),
        email: None,
        tags: vec!["admin".to_string(), "ops".to_string()],
    }
}

fn rendered(mut rejections: Vec<Rejection>) -> Vec<String> {
    Rejection::sort_by_path(&mut rejections);
    rejections.iter().map(|r| r.to_string()).collect()
}

#[test]
fn test_struct_fields_by_name() {
    let desired = Match::partial()
        .key("id", Match::not_zero())
        .key("name", "alice")
        .key("tags", Match::partial().key(0, "admin"));

    assert!(desire(&alice(), desired).is_empty());
}

#[test]
fn test_struct_field_mismatch() {
    let desired = Match::partial().key("name", "bob").key("email", None::<String>);

    assert_eq!(
        rendered(desire(&alice(), desired)),
        vec!["name: expected bob but got alice"]
    );
}

#[test]
fn test_struct_missing_field() {
    let desired = Match::partial().key("phone", "555");

    assert_eq!(
        rendered(desire(&alice(), desired)),
        vec!["phone: expected 555 but undefined"]
    );
}

#[test]
fn test_struct_non_string_key() {
    let desired = Match::partial().key(0, 1);

    assert_eq!(
        rendered(desire(&alice(), desired)),
        vec!["(root): key type of Partial must be string for struct"]
    );
}

#[test]
fn test_nested_struct_paths() {
    #[derive(Serialize)]
    struct Team {
        lead: User,
        members: Vec<User>,
    }

    let team = Team {
        lead: alice(),
        members: vec![alice(), alice()],
    };
    let desired = Match::partial()
        .key("lead", Match::partial().key("id", 2))
        .key(
            "members",
            Match::partial().key(1, Match::partial().key("tags", Match::list(["admin"]))),
        );

    assert_eq!(
        rendered(desire(&team, desired)),
        vec![
            "lead.id: expected 2 but got 1",
            "members.1.tags.1: expected undefined but exists with value ops",
        ]
    );
}

#[test]
fn test_hash_map_with_integer_keys() {
    let actual: HashMap<u32, &str> = HashMap::from([(1, "one"), (2, "two")]);

    assert!(desire(&actual, Match::partial().key(2, "two")).is_empty());
    assert_eq!(
        rendered(desire(&actual, Match::partial().key(3, "three"))),
        vec!["3: expected three but undefined"]
    );
}

#[test]
fn test_empty_map_skips_key_type_check() {
    let actual: BTreeMap<i32, i32> = BTreeMap::new();

    assert_eq!(
        rendered(desire(&actual, Match::partial().key("a", 1))),
        vec!["a: expected 1 but undefined"]
    );
}

#[test]
fn test_undeclared_keys_are_ignored() {
    let actual = BTreeMap::from([("a", 1), ("b", 0), ("c", -5)]);
    assert!(desire(&actual, Match::partial().key("a", 1)).is_empty());
}

#[test]
fn test_partial_on_scalar() {
    assert_eq!(
        rendered(desire(&"text", Match::partial())),
        vec!["(root): expected slice, array, map or struct but got string"]
    );
}

#[test]
fn test_later_key_replaces_earlier() {
    let desired = Match::partial().key("id", 5).key("id", 1);
    assert_eq!(desired.len(), 1);
    assert!(desire(&alice(), desired).is_empty());
}
