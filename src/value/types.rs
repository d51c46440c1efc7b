//! Config value type definitions and conversions.

use crate::error::{DicfgError, Result};

/// A parsed configuration value.
///
/// Scalars (string, number, bool, null), sequences and mappings.
pub type ConfigValue = serde_json::Value;

/// A mapping from string keys to config values, in source order.
pub type Mapping = serde_json::Map<String, ConfigValue>;

/// Human-readable name of a value's variant, used in error messages.
pub fn type_name(value: &ConfigValue) -> &'static str {
    match value {
        ConfigValue::Null => "null",
        ConfigValue::Bool(_) => "boolean",
        ConfigValue::Number(_) => "number",
        ConfigValue::String(_) => "string",
        ConfigValue::Array(_) => "sequence",
        ConfigValue::Object(_) => "mapping",
    }
}

/// Normalize a top-level source into a mapping.
///
/// Absent and null sources become an empty mapping. Anything other than a
/// mapping is rejected, with `origin` naming the source in the error.
pub fn into_mapping(value: Option<ConfigValue>, origin: &str) -> Result<Mapping> {
    match value {
        None | Some(ConfigValue::Null) => Ok(Mapping::new()),
        Some(ConfigValue::Object(map)) => Ok(map),
        Some(other) => Err(DicfgError::NotAMapping {
            origin: origin.to_string(),
            actual_type: type_name(&other).to_string(),
        }),
    }
}

/// Convert a YAML value into a config value.
///
/// Non-string keys are stringified and non-finite floats become strings,
/// since neither fits the JSON data model.
pub fn from_yaml(value: serde_yaml::Value) -> ConfigValue {
    match value {
        serde_yaml::Value::Null => ConfigValue::Null,
        serde_yaml::Value::Bool(b) => ConfigValue::Bool(b),
        serde_yaml::Value::Number(n) => yaml_number(&n),
        serde_yaml::Value::String(s) => ConfigValue::String(s),
        serde_yaml::Value::Sequence(seq) => {
            ConfigValue::Array(seq.into_iter().map(from_yaml).collect())
        }
        serde_yaml::Value::Mapping(map) => ConfigValue::Object(
            map.into_iter()
                .map(|(k, v)| (yaml_key(k), from_yaml(v)))
                .collect(),
        ),
        serde_yaml::Value::Tagged(tagged) => from_yaml(tagged.value),
    }
}

fn yaml_number(n: &serde_yaml::Number) -> ConfigValue {
    if let Some(i) = n.as_i64() {
        return ConfigValue::Number(i.into());
    }
    if let Some(u) = n.as_u64() {
        return ConfigValue::Number(u.into());
    }
    n.as_f64()
        .and_then(serde_json::Number::from_f64)
        .map(ConfigValue::Number)
        .unwrap_or_else(|| ConfigValue::String(n.to_string()))
}

fn yaml_key(key: serde_yaml::Value) -> String {
    match key {
        serde_yaml::Value::String(s) => s,
        serde_yaml::Value::Null => "null".to_string(),
        serde_yaml::Value::Bool(b) => b.to_string(),
        serde_yaml::Value::Number(n) => n.to_string(),
        serde_yaml::Value::Tagged(tagged) => yaml_key(tagged.value),
        other => serde_yaml::to_string(&other)
            .map(|s| s.trim_end().to_string())
            .unwrap_or_default(),
    }
}

/// Look up a value by a dot-separated key path.
///
/// An empty path returns `None`; use the mapping itself instead.
pub fn lookup_path<'a>(map: &'a Mapping, path: &str) -> Option<&'a ConfigValue> {
    let mut segments = path.split('.');
    let first = segments.next().filter(|s| !s.is_empty())?;
    let mut current = map.get(first)?;
    for segment in segments {
        current = current.as_object()?.get(segment)?;
    }
    Some(current)
}
