//! Value normalization: what counts as empty, and the canonical form of
//! everything else.

use crate::config::{NormalizeConfig, NumberFormat};
use crate::core::{Diagnostic, DiagnosticSink, IgnoreSink};
use crate::error::Result;
use regex::Regex;
use serde_json::{Number, Value};
use std::borrow::Cow;

/// Strings made only of these characters carry no information.
const BLANK_PATTERN: &str = r"^[\-\.\s]*$";

/// Outcome of normalizing one value.
#[derive(Debug, Clone, PartialEq)]
pub enum Normalized<'a> {
    /// No information; nothing should be emitted for this value.
    Absent,
    Present(Cow<'a, Value>),
}

impl<'a> Normalized<'a> {
    pub fn is_absent(&self) -> bool {
        matches!(self, Normalized::Absent)
    }

    pub fn as_value(&self) -> Option<&Value> {
        match self {
            Normalized::Absent => None,
            Normalized::Present(v) => Some(v.as_ref()),
        }
    }

    pub fn into_value(self) -> Option<Value> {
        match self {
            Normalized::Absent => None,
            Normalized::Present(v) => Some(v.into_owned()),
        }
    }
}

/// Applies the emptiness rules under a given [`NormalizeConfig`].
#[derive(Debug, Clone)]
pub struct Normalizer {
    config: NormalizeConfig,
    blank: Regex,
}

impl Normalizer {
    pub fn new(config: NormalizeConfig) -> Result<Self> {
        Ok(Normalizer { config, blank: Regex::new(BLANK_PATTERN)? })
    }

    pub fn config(&self) -> &NormalizeConfig {
        &self.config
    }

    /// Normalize without reporting anomalies.
    pub fn normalize<'a>(&self, value: &'a Value) -> Normalized<'a> {
        self.normalize_at(value, "", &mut IgnoreSink)
    }

    /// Normalize `value` found at `path`, reporting anomalies to `sink`.
    ///
    /// - numbers become their string key (see [`NumberFormat`])
    /// - empty objects and arrays are absent, non-empty ones pass unchanged
    /// - strings are trimmed, and absent when empty, `null`, `none` or made
    ///   only of whitespace, `-` and `.`
    /// - `null` is absent
    /// - booleans pass unchanged and are reported as unexpected
    pub fn normalize_at<'a>(
        &self,
        value: &'a Value,
        path: &str,
        sink: &mut dyn DiagnosticSink,
    ) -> Normalized<'a> {
        match value {
            Value::Null => Normalized::Absent,
            Value::Number(n) => {
                Normalized::Present(Cow::Owned(Value::String(self.number_key(n))))
            }
            Value::Array(items) if items.is_empty() => Normalized::Absent,
            Value::Object(map) if map.is_empty() => Normalized::Absent,
            Value::Array(_) | Value::Object(_) => Normalized::Present(Cow::Borrowed(value)),
            Value::String(s) => self.normalize_str(value, s),
            Value::Bool(_) => {
                sink.report(Diagnostic::new(path, "unexpected scalar type boolean"));
                Normalized::Present(Cow::Borrowed(value))
            }
        }
    }

    fn normalize_str<'a>(&self, value: &'a Value, s: &str) -> Normalized<'a> {
        let trimmed = s.trim();
        if trimmed.is_empty()
            || trimmed.eq_ignore_ascii_case("null")
            || trimmed.eq_ignore_ascii_case("none")
            || self.blank.is_match(trimmed)
        {
            return Normalized::Absent;
        }
        if trimmed.len() == s.len() {
            Normalized::Present(Cow::Borrowed(value))
        } else {
            Normalized::Present(Cow::Owned(Value::String(trimmed.to_string())))
        }
    }

    fn number_key(&self, n: &Number) -> String {
        match self.config.number_format {
            NumberFormat::Exact => n.to_string(),
            NumberFormat::Truncate => truncated_integer(n),
        }
    }
}

fn truncated_integer(n: &Number) -> String {
    if let Some(i) = n.as_i64() {
        return i.to_string();
    }
    if let Some(u) = n.as_u64() {
        return u.to_string();
    }
    let t = n.as_f64().unwrap_or(0.0).trunc();
    // -0.5 truncates to -0.0, which should still read "0"
    if t == 0.0 {
        "0".to_string()
    } else {
        format!("{:.0}", t)
    }
}

/// Text used when a normalized scalar becomes part of a label or a
/// flattened value: strings as-is, anything else as compact JSON.
pub fn scalar_text(value: &Value) -> String {
    match value {
        Value::String(s) => s.clone(),
        other => other.to_string(),
    }
}

/// Loose truthiness: null, false, zero and empty containers or strings
/// carry nothing.
pub fn is_truthy(value: &Value) -> bool {
    match value {
        Value::Null => false,
        Value::Bool(b) => *b,
        Value::Number(n) => n.as_f64().map_or(true, |f| f != 0.0),
        Value::String(s) => !s.is_empty(),
        Value::Array(items) => !items.is_empty(),
        Value::Object(map) => !map.is_empty(),
    }
}
