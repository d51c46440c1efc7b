//! Command-line `key.path=value` overrides.

use tracing::debug;

use crate::merge::merge_owned;
use crate::value::{parse_literal, ConfigValue, Mapping};

/// Build a nested single-path mapping from a dotted key path and a raw value.
///
/// Returns `None` when the key path has an empty segment (`a..b`, `.a`, ``).
///
/// # Examples
///
/// ```
/// use dicfg::reader::token_to_mapping;
/// use serde_json::json;
///
/// let map = token_to_mapping("a.b.c", "5").unwrap();
/// assert_eq!(serde_json::Value::Object(map), json!({"a": {"b": {"c": 5}}}));
/// ```
pub fn token_to_mapping(key_path: &str, value: &str) -> Option<Mapping> {
    let segments: Vec<&str> = key_path.split('.').collect();
    if segments.iter().any(|segment| segment.is_empty()) {
        debug!(key_path, "ignoring override with an empty key segment");
        return None;
    }

    let nested = segments
        .iter()
        .rev()
        .fold(parse_literal(value), |inner, key| {
            let mut map = Mapping::new();
            map.insert((*key).to_string(), inner);
            ConfigValue::Object(map)
        });

    match nested {
        ConfigValue::Object(map) => Some(map),
        _ => None,
    }
}

/// Parse override tokens into one merged mapping.
///
/// Only tokens containing `=` are overrides; the key path ends at the first
/// `=`. Later tokens win on conflicts.
pub fn parse_cli_tokens<I, S>(args: I) -> Mapping
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mappings: Vec<Mapping> = args
        .into_iter()
        .filter_map(|arg| {
            let (key_path, value) = arg.as_ref().split_once('=')?;
            token_to_mapping(key_path, value)
        })
        .collect();

    debug!(count = mappings.len(), "parsed command-line overrides");
    merge_owned(mappings).cast()
}
