//! Triple Counter Integration Tests
//!
//! Counts triples of a JSON-LD fixture and checks the label scheme of the
//! resulting frequency table.

use kgtool::json::load_json;
use kgtool::stats::{count_triples, TripleCounter};
use serde_json::json;
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_jsonld_fixture() {
    let doc = load_json(fixture("kg_stat.jsonld")).unwrap();
    let table = count_triples(&doc);

    assert_eq!(table.get("triple"), 30);
    assert_eq!(table.get("tag_抒情"), 1);
    assert_eq!(table.get("tag_思乡"), 1);
    assert_eq!(table.get("p_name"), 8);
    assert_eq!(table.get("p_@type"), 7);
    assert_eq!(table.get("p_tag"), 3);
    assert_eq!(table.get("p_citation"), 2);
    assert_eq!(table.get("p_alternateName"), 2);
    assert_eq!(table.get("p_inLanguage"), 1);
    assert_eq!(table.get("p_@context"), 1);

    // present but never counted
    assert!(table.contains("p_@id"));
    assert_eq!(table.get("p_@id"), 0);
    assert!(table.contains("p_keywords"));
    assert_eq!(table.get("p_keywords"), 0);
}

#[test]
fn test_triple_equals_sum_of_predicates() {
    let doc = load_json(fixture("kg_stat.jsonld")).unwrap();
    let table = count_triples(&doc);
    assert_eq!(table.get("triple"), table.sum_prefixed("p_"));
}

#[test]
fn test_tag_array() {
    let table = count_triples(&json!({"tag": [{"name": "X"}, "Y"]}));
    assert_eq!(table.get("tag_X"), 1);
    assert_eq!(table.get("tag_Y"), 1);
    assert_eq!(table.get("p_tag"), 2);
    assert_eq!(table.get("p_name"), 1);
    assert_eq!(table.get("triple"), 3);
}

#[test]
fn test_tag_breakdown_only_under_tag_key() {
    let table = count_triples(&json!({"tags": ["X"], "label": [{"name": "Y"}]}));
    assert!(!table.contains("tag_X"));
    assert!(!table.contains("tags_X"));
    assert!(!table.contains("tag_Y"));
}

#[test]
fn test_nested_tag_under_root_list() {
    let docs = json!([{"tag": ["a"]}, {"tag": ["a", "b"]}]);
    let table = count_triples(&docs);
    assert_eq!(table.get("tag_a"), 2);
    assert_eq!(table.get("tag_b"), 1);
    assert_eq!(table.get("triple"), 3);
}

#[test]
fn test_counter_accumulates_documents() {
    let mut counter = TripleCounter::new();
    counter.visit(&json!({"a": 1}));
    counter.visit(&json!({"a": 2, "b": {"@id": "x"}}));
    let table = counter.finish();
    assert_eq!(table.get("p_a"), 2);
    assert_eq!(table.get("p_b"), 1);
    assert_eq!(table.get("triple"), 3);
}

#[test]
fn test_heterogeneous_tree() {
    let doc = json!({
        "mixed": [null, true, 1, 2.5, "s", [], {}, [[["deep"]]], {"k": [null]}],
        "@context": [{"x": {"y": "z"}}]
    });
    let table = count_triples(&doc);
    // null, true, 1, 2.5, "s", {}, "deep", {"k": ..}
    assert_eq!(table.get("p_mixed"), 8);
    assert_eq!(table.get("p_k"), 1);
    assert_eq!(table.get("p_y"), 1);
    assert_eq!(table.get("p_x"), 1);
    assert_eq!(table.get("p_@context"), 1);
    assert_eq!(table.get("triple"), table.sum_prefixed("p_"));
}
