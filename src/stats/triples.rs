//! Triple counting over JSON-LD shaped documents.
//!
//! This is a structural proxy, not an RDF processor: every scalar leaf and
//! every nested object reached through a key counts as one triple for that
//! key.

use super::normalize::{is_truthy, scalar_text};
use super::{PREDICATE_PREFIX, TRIPLE_LABEL};
use crate::core::FrequencyTable;
use serde_json::{Map, Value};

/// Keys whose scalar values never form a triple.
pub const RESERVED_KEYS: [&str; 2] = ["@id", "@context"];

/// Arrays under this key also get a `tag_<value>` breakdown.
pub const TAG_KEY: &str = "tag";

/// Count the triples of `document`.
///
/// The root has no predicate, so only its descendants contribute.
pub fn count_triples(document: &Value) -> FrequencyTable {
    let mut counter = TripleCounter::new();
    counter.visit(document);
    counter.finish()
}

/// Accumulates triple counts over one or more documents.
#[derive(Debug, Default)]
pub struct TripleCounter {
    table: FrequencyTable,
}

impl TripleCounter {
    pub fn new() -> Self {
        Self { table: FrequencyTable::new() }
    }

    /// Add the triples of another root document.
    pub fn visit(&mut self, document: &Value) {
        self.walk(document, None);
    }

    pub fn table(&self) -> &FrequencyTable {
        &self.table
    }

    pub fn finish(self) -> FrequencyTable {
        self.table
    }

    fn walk(&mut self, node: &Value, key: Option<&str>) {
        // an empty key is treated like no key at all
        let key = key.filter(|k| !k.is_empty());
        match node {
            Value::Object(map) => self.walk_object(map, key),
            Value::Array(items) => {
                for item in items {
                    self.walk(item, key);
                }
                if key == Some(TAG_KEY) {
                    self.count_tags(items);
                }
            }
            Value::Null | Value::Bool(_) | Value::Number(_) | Value::String(_) => {
                if let Some(k) = key {
                    if !RESERVED_KEYS.contains(&k) {
                        self.add_triple(k);
                    }
                }
            }
        }
    }

    fn walk_object(&mut self, map: &Map<String, Value>, key: Option<&str>) {
        for (k, v) in map {
            self.walk(v, Some(k.as_str()));
            self.table.touch(format!("{}{}", PREDICATE_PREFIX, k));
        }
        if let Some(k) = key {
            self.add_triple(k);
        }
    }

    fn count_tags(&mut self, items: &[Value]) {
        for item in items {
            match item {
                Value::Object(map) => {
                    if let Some(name) = map.get("name").filter(|n| is_truthy(n)) {
                        self.table.increment(format!("{}_{}", TAG_KEY, scalar_text(name)));
                    }
                }
                Value::String(s) => self.table.increment(format!("{}_{}", TAG_KEY, s)),
                _ => {}
            }
        }
    }

    fn add_triple(&mut self, predicate: &str) {
        self.table.increment(TRIPLE_LABEL);
        self.table.increment(format!("{}{}", PREDICATE_PREFIX, predicate));
    }
}
