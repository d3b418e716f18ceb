use desire::{desire, Match, Rejection, Value};
use serde_json::json;

fn reasons(rejections: Vec<Rejection>) -> Vec<String> {
    rejections.into_iter().map(|r| r.reason).collect()
}

// ====== one_of Tests ======

#[test]
fn test_one_of_first_candidate_matches() {
    assert!(desire(&"alice", Match::one_of(["alice", "bob"])).is_empty());
}

#[test]
fn test_one_of_last_candidate_matches() {
    assert!(desire(&"bob", Match::one_of(["alice", "bob"])).is_empty());
}

#[test]
fn test_one_of_no_candidate_matches() {
    assert_eq!(
        reasons(desire(&"carol", Match::one_of(["alice", "bob"]))),
        vec!["expected one of [alice bob] but got carol"]
    );
}

#[test]
fn test_one_of_discards_candidate_rejections() {
    let desired = Match::one_of([json!({"id": 1}), json!({"id": 2})]);
    let rejections = desire(&json!({"id": 3}), desired);

    assert_eq!(rejections.len(), 1);
    assert!(rejections[0].path.is_root());
    assert_eq!(
        rejections[0].reason,
        "expected one of [map[id:1] map[id:2]] but got map[id:3]"
    );
}

#[test]
fn test_one_of_with_matcher_candidates() {
    let desired = Match::one_of([Match::partial().key("kind", "a")])
        .or(Match::partial().key("kind", "b").key("size", Match::not_zero()));

    assert!(desire(&json!({"kind": "a"}), desired.clone()).is_empty());
    assert!(desire(&json!({"kind": "b", "size": 3}), desired.clone()).is_empty());
    assert_eq!(desire(&json!({"kind": "b", "size": 0}), desired).len(), 1);
}

#[test]
fn test_one_of_nested_reports_at_its_path() {
    let desired = Match::partial().key("status", Match::one_of(["active", "pending"]));
    let rejections = desire(&json!({"status": "deleted"}), desired);

    assert_eq!(rejections.len(), 1);
    assert_eq!(rejections[0].path.to_string(), "status");
}

// ====== all Tests ======

#[test]
fn test_all_every_matcher_passes() {
    let desired = Match::all([Match::not_zero()]).and(Match::one_of([1, 2, 3]));
    assert!(desire(&2, desired).is_empty());
}

#[test]
fn test_all_accumulates_failures() {
    let desired = Match::all([Match::not_zero()]).and(Match::one_of([1, 2, 3]));

    assert_eq!(
        reasons(desire(&0, desired)),
        vec![
            "expected non-zero value but got 0",
            "expected one of [1 2 3] but got 0",
        ]
    );
}

#[test]
fn test_all_with_structural_matchers() {
    let desired = Match::all([Match::partial().key("a", 1)]).and(Match::partial().key("b", 2));

    let mut rejections = desire(&json!({"a": 0, "b": 0}), desired);
    Rejection::sort_by_path(&mut rejections);

    let rendered: Vec<String> = rejections.iter().map(|r| r.to_string()).collect();
    assert_eq!(
        rendered,
        vec!["a: expected 1 but got 0", "b: expected 2 but got 0"]
    );
}

#[test]
fn test_empty_all_accepts() {
    let desired = Match::all(Vec::<Value>::new());
    assert!(desire(&json!(null), desired).is_empty());
}

// ====== pattern and from_fn Tests ======

#[test]
fn test_pattern_on_strings() {
    let email = Match::pattern(r"^[^@]+@[^@]+$").unwrap();

    assert!(desire(&"a@b.c", email.clone()).is_empty());
    assert_eq!(
        reasons(desire(&"nope", email.clone())),
        vec!["expected string matching '^[^@]+@[^@]+$' but got nope"]
    );
    assert_eq!(reasons(desire(&5, email)), vec!["expected string but got int"]);
}

#[test]
fn test_invalid_pattern() {
    assert!(Match::pattern("(").is_err());
}

#[test]
fn test_from_fn_records_at_context() {
    let positive = Match::from_fn("positive", |ctx, actual| match actual {
        Value::Int(i) if *i > 0 => {}
        Value::Uint(u) if *u > 0 => {}
        other => ctx.reject(format!("expected positive number but got {}", other)),
    });
    let desired = Match::partial().key("count", positive);

    let rejections = desire(&json!({"count": -1}), desired);
    assert_eq!(rejections.len(), 1);
    assert_eq!(
        rejections[0].to_string(),
        "count: expected positive number but got -1"
    );
}

#[test]
fn test_matcher_display_in_reasons() {
    let desired = Match::partial().key("missing", Match::one_of([1, 2]));

    assert_eq!(
        reasons(desire(&json!({}), desired)),
        vec!["expected one_of[1 2] but undefined"]
    );
}
