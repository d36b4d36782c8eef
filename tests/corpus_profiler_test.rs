//! Corpus Profiler Integration Tests
//!
//! Profiles JSON records loaded from a JSON-lines fixture and checks the
//! population counts, the sample and the collected diagnostics.

use kgtool::config::{NormalizeConfig, NumberFormat, ReaderConfig};
use kgtool::json::load_json_lines;
use kgtool::stats::{flatten, profile, Normalizer, Profiler};
use kgtool::{Diagnostic, Error};
use serde_json::{json, Value};
use std::path::PathBuf;

fn fixture(name: &str) -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures").join(name)
}

#[test]
fn test_profile_jsonl_fixture() {
    let records = load_json_lines(fixture("corpus.jsonl"), &ReaderConfig::default()).unwrap();
    assert_eq!(records.len(), 3);

    let result = profile(&Value::Array(records)).unwrap();
    let stat = &result.stat;

    assert_eq!(stat.get("cnt_total"), 3);
    assert_eq!(stat.get("cnt_key_name"), 2);
    assert_eq!(stat.get("cnt_key_author.name"), 2);
    assert_eq!(stat.get("cnt_key_author.birthDate"), 1);
    assert_eq!(stat.get("cnt_key_tags"), 2);
    assert_eq!(stat.get("cnt_key_rating"), 1);
    assert_eq!(stat.get("cnt_key_draft"), 1);
    assert!(!stat.contains("cnt_key_author"));
    assert_eq!(stat.len(), 7);

    assert_eq!(
        result.sample,
        Some(json!({
            "name": "静夜思",
            "author": {"name": "李白", "birthDate": 701},
            "tags": ["抒情"],
            "rating": 4.7
        }))
    );

    assert_eq!(result.diagnostics.len(), 1);
    assert_eq!(result.diagnostics[0].path, "draft");
}

#[test]
fn test_population_rate_example() {
    let result = profile(&json!([{"name": "Alice"}, {"name": ""}, {}])).unwrap();
    assert_eq!(result.stat.get("cnt_total"), 3);
    assert_eq!(result.stat.get("cnt_key_name"), 1);
}

#[test]
fn test_sample_example() {
    let result = profile(&json!([{"tags": ["a", "b", "c"], "name": "X"}, {"name": "Y"}])).unwrap();
    assert_eq!(result.sample, Some(json!({"tags": ["a"], "name": "X"})));
}

#[test]
fn test_invalid_argument() {
    for bad in [json!({"a": 1}), json!("records"), json!(null)] {
        assert!(matches!(profile(&bad), Err(Error::InvalidInput(_))));
    }
}

#[test]
fn test_flatten_uses_number_format() {
    let exact = Normalizer::new(NormalizeConfig { number_format: NumberFormat::Exact }).unwrap();
    let mut sink: Vec<Diagnostic> = Vec::new();
    let flat = flatten(&json!({"price": {"amount": 3.7}}), &exact, &mut sink);
    assert_eq!(flat.get("price.amount"), Some(&json!("3.7")));
}

#[test]
fn test_streaming_profiler_matches_batch() {
    let records = vec![json!({"a": {"b": [1, 2]}}), json!({"a": {"b": []}}), json!({"c": 0})];
    let batch = profile(&Value::Array(records.clone())).unwrap();

    let mut profiler = Profiler::new(NormalizeConfig::default()).unwrap();
    for record in &records {
        profiler.add(record);
    }
    assert_eq!(profiler.records_seen(), 3);
    let streamed = profiler.finish();

    assert_eq!(streamed.stat, batch.stat);
    assert_eq!(streamed.stat.get("cnt_key_a.b"), 1);
    assert_eq!(streamed.stat.get("cnt_key_c"), 1);
}

#[test]
fn test_profile_serializes_stat_and_sample() {
    let result = profile(&json!([{"k": "v"}])).unwrap();
    let value = serde_json::to_value(&result).unwrap();
    assert_eq!(value, json!({"stat": {"cnt_total": 1, "cnt_key_k": 1}, "sample": {"k": "v"}}));
}
