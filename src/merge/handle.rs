//! Handle over a merged configuration.

use serde::Serialize;

use crate::value::{lookup_path, ConfigValue, Mapping};

/// The result of merging configuration sources.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Merged {
    config: Mapping,
}

impl Merged {
    /// Consume the handle, returning the plain mapping.
    pub fn cast(self) -> Mapping {
        self.config
    }

    /// Consume the handle, returning the mapping as a value.
    pub fn into_value(self) -> ConfigValue {
        ConfigValue::Object(self.config)
    }

    /// Borrow the merged mapping.
    pub fn as_mapping(&self) -> &Mapping {
        &self.config
    }

    /// Get a top-level value, or `default` if the key is absent.
    pub fn get(&self, key: &str, default: ConfigValue) -> ConfigValue {
        self.config.get(key).cloned().unwrap_or(default)
    }

    /// Get a value by dot-separated path (`"trainer.optimizer.lr"`).
    pub fn get_path(&self, path: &str) -> Option<&ConfigValue> {
        lookup_path(&self.config, path)
    }

    /// Number of top-level keys.
    pub fn len(&self) -> usize {
        self.config.len()
    }

    /// Whether the merged mapping is empty.
    pub fn is_empty(&self) -> bool {
        self.config.is_empty()
    }
}

impl From<Mapping> for Merged {
    fn from(config: Mapping) -> Self {
        Self { config }
    }
}
