//! Corpus profiling: per-path population counts plus one sample record.

use super::normalize::{scalar_text, Normalized, Normalizer};
use super::{KEY_PREFIX, TOTAL_LABEL};
use crate::config::NormalizeConfig;
use crate::core::{Diagnostic, DiagnosticSink, FrequencyTable};
use crate::error::{Error, Result};
use crate::json::canonical::to_item_string;
use serde::Serialize;
use serde_json::{Map, Value};
use std::collections::BTreeMap;

/// Result of profiling a corpus.
#[derive(Debug, Clone, Default, Serialize)]
pub struct Profile {
    pub stat: FrequencyTable,
    /// Sample of the first record, `None` for an empty corpus
    #[serde(skip_serializing_if = "Option::is_none")]
    pub sample: Option<Value>,
    #[serde(skip)]
    pub diagnostics: Vec<Diagnostic>,
}

/// Profile a corpus given as a JSON array, with the default config.
pub fn profile(records: &Value) -> Result<Profile> {
    profile_with(records, &NormalizeConfig::default())
}

pub fn profile_with(records: &Value, config: &NormalizeConfig) -> Result<Profile> {
    let items = records
        .as_array()
        .ok_or_else(|| Error::InvalidInput("expect list of items".to_string()))?;

    let mut profiler = Profiler::new(config.clone())?;
    for item in items {
        profiler.add(item);
    }
    Ok(profiler.finish())
}

/// Streaming accumulator behind [`profile`].
#[derive(Debug)]
pub struct Profiler {
    normalizer: Normalizer,
    profile: Profile,
}

impl Profiler {
    pub fn new(config: NormalizeConfig) -> Result<Self> {
        Ok(Self::with_normalizer(Normalizer::new(config)?))
    }

    pub fn with_normalizer(normalizer: Normalizer) -> Self {
        Profiler { normalizer, profile: Profile::default() }
    }

    pub fn add(&mut self, record: &Value) {
        self.profile.stat.increment(TOTAL_LABEL);
        if self.profile.sample.is_none() {
            self.profile.sample = Some(sample(record));
        }

        let flat = flatten(record, &self.normalizer, &mut self.profile.diagnostics);
        for (path, value) in &flat {
            if !scalar_text(value).is_empty() {
                self.profile.stat.increment(format!("{}{}", KEY_PREFIX, path));
            }
        }
    }

    pub fn records_seen(&self) -> u64 {
        self.profile.stat.get(TOTAL_LABEL)
    }

    pub fn finish(self) -> Profile {
        log::debug!(
            "profiled {} records, {} distinct keys",
            self.records_seen(),
            self.profile.stat.len().saturating_sub(1)
        );
        self.profile
    }
}

/// Structural reduction of `item`: lists keep only the sample of their
/// first element, objects keep all keys, scalars are copied.
pub fn sample(item: &Value) -> Value {
    match item {
        Value::Array(items) => match items.first() {
            Some(first) => Value::Array(vec![sample(first)]),
            None => Value::Array(Vec::new()),
        },
        Value::Object(map) => {
            Value::Object(map.iter().map(|(k, v)| (k.clone(), sample(v))).collect::<Map<_, _>>())
        }
        scalar => scalar.clone(),
    }
}

/// Flatten `record` into dotted paths.
///
/// Absent values leave no entry. Non-empty lists are written as their JSON
/// text, other leaves as their normalized form.
pub fn flatten(
    record: &Value,
    normalizer: &Normalizer,
    sink: &mut dyn DiagnosticSink,
) -> BTreeMap<String, Value> {
    let mut out = BTreeMap::new();
    flatten_into("", record, normalizer, sink, &mut out);
    out
}

fn flatten_into(
    path: &str,
    value: &Value,
    normalizer: &Normalizer,
    sink: &mut dyn DiagnosticSink,
    out: &mut BTreeMap<String, Value>,
) {
    let normalized = match normalizer.normalize_at(value, path, sink) {
        Normalized::Absent => return,
        Normalized::Present(v) => v,
    };

    if let Value::Object(map) = normalized.as_ref() {
        for (k, v) in map {
            let child = if path.is_empty() { k.clone() } else { format!("{}.{}", path, k) };
            flatten_into(&child, v, normalizer, sink, out);
        }
        return;
    }

    let leaf = if normalized.is_array() {
        Value::String(to_item_string(&normalized))
    } else {
        normalized.into_owned()
    };
    out.insert(path.to_string(), leaf);
}
