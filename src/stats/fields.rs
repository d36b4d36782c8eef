//! Per-field value statistics over a list of records.

use super::normalize::{is_truthy, scalar_text, Normalized, Normalizer};
use crate::core::{Diagnostic, DiagnosticSink, FrequencyTable};
use crate::json::canonical::to_canonical_string;
use serde_json::Value;
use std::collections::{BTreeMap, HashSet};

pub const ALL_LABEL: &str = "all";

/// Count records, distinct and non-empty values of `unique_fields`, and
/// the value distribution of `value_fields`.
pub fn stat_fields(
    items: &[Value],
    unique_fields: &[String],
    value_fields: &[String],
    normalizer: &Normalizer,
    sink: &mut dyn DiagnosticSink,
) -> FrequencyTable {
    let mut stat = FieldStatistic::new(unique_fields, value_fields);
    for (idx, item) in items.iter().enumerate() {
        stat.add(item, normalizer, sink, idx);
    }
    stat.finish()
}

/// Accumulator behind [`stat_fields`], usable over a stream of records.
#[derive(Debug)]
pub struct FieldStatistic {
    counter: FrequencyTable,
    unique_fields: Vec<String>,
    value_fields: Vec<String>,
    /// canonical text of every truthy value seen per unique field
    collected: BTreeMap<String, Vec<String>>,
    seen: u64,
}

impl FieldStatistic {
    pub fn new(unique_fields: &[String], value_fields: &[String]) -> Self {
        FieldStatistic {
            counter: FrequencyTable::new(),
            unique_fields: unique_fields.to_vec(),
            value_fields: value_fields.to_vec(),
            collected: unique_fields.iter().map(|f| (f.clone(), Vec::new())).collect(),
            seen: 0,
        }
    }

    /// `index` is only used to locate diagnostics.
    pub fn add(
        &mut self,
        item: &Value,
        normalizer: &Normalizer,
        sink: &mut dyn DiagnosticSink,
        index: usize,
    ) {
        self.counter.increment(ALL_LABEL);
        self.seen += 1;

        let Some(map) = item.as_object() else {
            sink.report(Diagnostic::new(
                &format!("[{}]", index),
                "record is not an object, only counted in all",
            ));
            return;
        };

        for field in &self.unique_fields {
            if let Some(value) = map.get(field).filter(|v| is_truthy(v)) {
                if let Some(values) = self.collected.get_mut(field) {
                    values.push(to_canonical_string(value));
                }
            }
        }

        for field in &self.value_fields {
            let Some(value) = map.get(field) else { continue };
            let path = format!("[{}].{}", index, field);
            if let Normalized::Present(v) = normalizer.normalize_at(value, &path, sink) {
                self.counter.increment(format!("{}_{}", field, scalar_text(&v)));
            }
        }
    }

    pub fn finish(mut self) -> FrequencyTable {
        if self.seen > 0 {
            for (field, values) in &self.collected {
                let distinct: HashSet<&String> = values.iter().collect();
                self.counter.set(format!("{}_unique", field), distinct.len() as u64);
                self.counter.set(format!("{}_nonempty", field), values.len() as u64);
            }
        }
        self.counter
    }
}
