//! Input classification: raw named sets vs. precomputed petal labels.

use crate::error::{Result, VennError};
use crate::models::{PetalLabels, SetCollection, SetCount};
use crate::petal::generate_petal_labels;
use log::debug;
use serde_json::{Map, Value};
use std::hash::Hash;

/// What a caller hands to the Venn engine.
#[derive(Debug, Clone)]
pub enum Dataset<T> {
    /// Named sets; petal labels are computed from them.
    RawSets(SetCollection<T>),
    /// One label per petal, already formatted by the caller.
    PrecomputedLabels {
        labels: PetalLabels,
        names: Vec<String>,
    },
}

impl<T: Eq + Hash> Dataset<T> {
    /// Validate precomputed `code -> label` pairs against the ordered `names`.
    pub fn precomputed<K, V, I>(pairs: I, names: Vec<String>) -> Result<Self>
    where
        K: AsRef<str>,
        V: Into<String>,
        I: IntoIterator<Item = (K, V)>,
    {
        let labels = PetalLabels::from_pairs(pairs, &names)?;
        Ok(Dataset::PrecomputedLabels { labels, names })
    }

    pub fn names(&self) -> Vec<String> {
        match self {
            Dataset::RawSets(sets) => sets.names(),
            Dataset::PrecomputedLabels { names, .. } => names.clone(),
        }
    }

    pub fn count(&self) -> Result<SetCount> {
        match self {
            Dataset::RawSets(sets) => sets.count(),
            Dataset::PrecomputedLabels { labels, .. } => Ok(labels.count()),
        }
    }

    /// Labels to print in each petal. `fmt` only applies to raw sets.
    pub fn petal_labels(&self, fmt: &str) -> Result<PetalLabels> {
        match self {
            Dataset::RawSets(sets) => generate_petal_labels(sets, fmt),
            Dataset::PrecomputedLabels { labels, .. } => Ok(labels.clone()),
        }
    }
}

impl<T: Eq + Hash> From<SetCollection<T>> for Dataset<T> {
    fn from(sets: SetCollection<T>) -> Self {
        Dataset::RawSets(sets)
    }
}

impl Dataset<String> {
    /// Classify a JSON document.
    ///
    /// - `{"A": [..], "B": [..]}` with scalar array items is a set collection.
    ///   Elements are compared by their JSON text, so `1` and `"1"` differ.
    /// - `{"01": "..", "10": "..", "11": ".."}` with string values is a
    ///   petal-label mapping and requires `names`.
    ///
    /// When `names` is given for raw sets it selects the set order and must
    /// name every key exactly once.
    pub fn from_json(value: &Value, names: Option<&[String]>) -> Result<Self> {
        let Value::Object(map) = value else {
            return Err(VennError::TypeMismatch(format!(
                "expected a JSON object of sets or petal labels, got {}",
                json_kind(value)
            )));
        };

        if !map.is_empty() && map.values().all(Value::is_array) {
            debug!("classified JSON input as {} raw sets", map.len());
            return raw_sets_from_json(map, names).map(Dataset::RawSets);
        }
        if !map.is_empty() && map.values().all(Value::is_string) {
            let names = names.ok_or(VennError::MissingNames)?.to_vec();
            debug!("classified JSON input as {} petal labels", map.len());
            let pairs = map
                .iter()
                .map(|(k, v)| (k.as_str(), v.as_str().unwrap_or_default()));
            return Dataset::precomputed(pairs, names);
        }

        let offending = map
            .iter()
            .find(|(_, v)| !v.is_array())
            .map(|(k, v)| format!("'{k}' is {}", json_kind(v)))
            .unwrap_or_else(|| "the object is empty".to_string());
        Err(VennError::TypeMismatch(format!(
            "values must all be arrays (sets) or all be strings (petal labels); {offending}"
        )))
    }
}

fn raw_sets_from_json(
    map: &Map<String, Value>,
    names: Option<&[String]>,
) -> Result<SetCollection<String>> {
    let order: Vec<String> = match names {
        Some(names) => {
            if names.len() != map.len() {
                return Err(VennError::SizeMismatch {
                    what: "set names",
                    got: names.len(),
                    expected: map.len(),
                });
            }
            names.to_vec()
        }
        None => map.keys().cloned().collect(),
    };

    let mut sets = SetCollection::new();
    for name in order {
        let items = map
            .get(&name)
            .and_then(Value::as_array)
            .ok_or_else(|| VennError::TypeMismatch(format!("no set named '{name}' in input")))?;
        let mut elements = Vec::with_capacity(items.len());
        for item in items {
            match item {
                Value::String(_) | Value::Number(_) | Value::Bool(_) | Value::Null => {
                    elements.push(item.to_string())
                }
                other => {
                    return Err(VennError::TypeMismatch(format!(
                        "set '{name}' contains {}, elements must be scalars",
                        json_kind(other)
                    )));
                }
            }
        }
        sets.insert(name, elements)?;
    }
    Ok(sets)
}

fn json_kind(v: &Value) -> &'static str {
    match v {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
