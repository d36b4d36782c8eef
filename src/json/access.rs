//! Property access helpers for loosely shaped JSON objects

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Follow `path` through nested objects.
///
/// Returns `None` when an intermediate value exists but is not an object.
/// A missing intermediate is treated as an empty object, so the lookup
/// falls back to `default`.
pub fn get_path<'a>(value: &'a Value, path: &[&str], default: Option<&'a Value>) -> Option<&'a Value> {
    let (last, init) = path.split_last()?;
    let mut current = Some(value);
    for field in init {
        match current {
            Some(Value::Object(map)) => current = map.get(*field),
            Some(_) => return None,
            None => {}
        }
    }
    match current {
        Some(Value::Object(map)) => map.get(*last).or(default),
        Some(_) => None,
        None => default,
    }
}

/// Value of `key` as a list: missing gives an empty list, a non-list value
/// is wrapped.
pub fn get_list(object: &Map<String, Value>, key: &str) -> Vec<Value> {
    match object.get(key) {
        None => Vec::new(),
        Some(Value::Array(items)) => items.clone(),
        Some(other) => vec![other.clone()],
    }
}

/// First element when `key` holds a list, the value itself otherwise.
pub fn get_first_item(object: &Map<String, Value>, key: &str, default: Value) -> Value {
    match object.get(key) {
        None => default,
        Some(Value::Array(items)) => items.first().cloned().unwrap_or(default),
        Some(other) => other.clone(),
    }
}

/// Target property with the aliases it may be found under.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PropertySpec {
    pub name: String,
    #[serde(default, rename = "alternateName")]
    pub alternate_names: Vec<String>,
}

impl PropertySpec {
    pub fn new(name: &str, alternate_names: &[&str]) -> Self {
        PropertySpec {
            name: name.to_string(),
            alternate_names: alternate_names.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Build a new object holding the properties described by `specs`.
///
/// The first alias with a non-null value wins, then the property itself,
/// then `default` when one is given.
pub fn copy_properties(
    object: &Map<String, Value>,
    specs: &[PropertySpec],
    default: Option<&Value>,
) -> Map<String, Value> {
    let mut out = Map::new();
    for spec in specs {
        let alias = spec
            .alternate_names
            .iter()
            .find_map(|alias| object.get(alias).filter(|v| !v.is_null()));
        if let Some(v) = alias {
            out.insert(spec.name.clone(), v.clone());
        } else if let Some(v) = object.get(&spec.name) {
            out.insert(spec.name.clone(), v.clone());
        } else if let Some(d) = default {
            out.insert(spec.name.clone(), d.clone());
        }
    }
    out
}

/// Append `value` to the list under `key`, creating the list when missing.
/// A non-list value is left untouched.
pub fn append_value(object: &mut Map<String, Value>, key: &str, value: Value) {
    match object.get_mut(key) {
        None => {
            object.insert(key.to_string(), Value::Array(vec![value]));
        }
        Some(Value::Array(items)) => items.push(value),
        Some(_) => {}
    }
}
