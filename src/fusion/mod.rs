//! Context key fusion.
//!
//! Every declared context key (e.g. `train`, `test`) starts from its own copy
//! of the default subtree, then the source's explicit entries for that key
//! are merged on top.

use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::include::{include_mapping, SearchPaths};
use crate::merge::merge_mappings;
use crate::value::{ConfigValue, Mapping};

/// Default name of the key whose subtree seeds every context key.
pub const DEFAULT_KEY: &str = "default";

/// The declared context keys plus the distinguished default key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContextKeys {
    default_key: String,
    keys: Vec<String>,
}

impl Default for ContextKeys {
    fn default() -> Self {
        Self {
            default_key: DEFAULT_KEY.to_string(),
            keys: Vec::new(),
        }
    }
}

impl ContextKeys {
    /// Create a key set with the standard default key.
    pub fn new<I, S>(keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::default().with_keys(keys)
    }

    /// Replace the declared context keys. Duplicates are dropped.
    pub fn with_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.keys.clear();
        for key in keys {
            let key = key.into();
            if !self.keys.contains(&key) {
                self.keys.push(key);
            }
        }
        self
    }

    /// Replace the default key.
    pub fn with_default_key(mut self, default_key: impl Into<String>) -> Self {
        self.default_key = default_key.into();
        self
    }

    /// The key whose subtree seeds every context key.
    pub fn default_key(&self) -> &str {
        &self.default_key
    }

    /// The declared context keys, in declaration order.
    pub fn keys(&self) -> &[String] {
        &self.keys
    }
}

/// Fuse one config source.
///
/// 1. Expand file references in the whole source.
/// 2. Seed every context key with an independent copy of the default
///    subtree (an empty mapping when the source has none).
/// 3. Merge the source over the seed, so explicit entries win.
///
/// # Examples
///
/// ```
/// use dicfg::fusion::{fuse, ContextKeys};
/// use dicfg::include::SearchPaths;
/// use serde_json::json;
///
/// let source = json!({"default": {"lr": 0.1}, "train": {"lr": 0.01}});
/// let fused = fuse(
///     source.as_object().unwrap().clone(),
///     &ContextKeys::new(["train", "test"]),
///     &SearchPaths::new(),
/// )
/// .unwrap();
///
/// assert_eq!(fused["train"], json!({"lr": 0.01}));
/// assert_eq!(fused["test"], json!({"lr": 0.1}));
/// ```
///
/// # Errors
///
/// Returns an error if file inclusion fails.
pub fn fuse(config: Mapping, context: &ContextKeys, search_paths: &SearchPaths) -> Result<Mapping> {
    let config = include_mapping(config, search_paths)?;

    let default = config
        .get(context.default_key())
        .cloned()
        .unwrap_or_else(|| ConfigValue::Object(Mapping::new()));

    let seed: Mapping = context
        .keys()
        .iter()
        .map(|key| (key.clone(), default.clone()))
        .collect();

    Ok(merge_mappings(seed, config))
}
