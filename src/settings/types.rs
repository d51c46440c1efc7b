//! Settings type definitions.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::output::OutputFormat;
use crate::reader::ReaderOptions;

/// Defaults for constructing readers.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReaderSettings {
    /// Path to the main config file.
    #[serde(default)]
    pub main_config_path: Option<PathBuf>,
    /// Presets folder name, relative to the main config's directory.
    #[serde(default)]
    pub presets_folder_name: Option<String>,
    /// Key whose subtree seeds every context key.
    #[serde(default)]
    pub default_key: Option<String>,
    /// Declared context keys.
    #[serde(default)]
    pub context_keys: Vec<String>,
    /// Extra directories searched for referenced files.
    #[serde(default)]
    pub search_paths: Vec<PathBuf>,
}

impl ReaderSettings {
    /// Reader options for `name`, starting from the built-in defaults.
    pub fn to_options(&self, name: impl Into<String>) -> ReaderOptions {
        let mut options = ReaderOptions::new(name);
        if let Some(path) = &self.main_config_path {
            options.main_config_path = path.clone();
        }
        if let Some(folder) = &self.presets_folder_name {
            options.presets_folder_name = folder.clone();
        }
        if let Some(key) = &self.default_key {
            options.default_key = key.clone();
        }
        options.context_keys = self.context_keys.clone();
        options.search_paths = self.search_paths.clone();
        options
    }
}

/// How the command line renders results.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutputSettings {
    /// Output format.
    #[serde(default)]
    pub format: Option<OutputFormat>,
    /// Pretty-print JSON.
    #[serde(default)]
    pub pretty: Option<bool>,
}

impl OutputSettings {
    /// The configured format, JSON if unset.
    pub fn format(&self) -> OutputFormat {
        self.format.unwrap_or_default()
    }

    /// Whether JSON is pretty-printed, true if unset.
    pub fn pretty(&self) -> bool {
        self.pretty.unwrap_or(true)
    }
}

/// Settings for the `dicfg` command line.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Settings {
    /// Reader defaults.
    #[serde(default)]
    pub reader: ReaderSettings,
    /// Output settings.
    #[serde(default)]
    pub output: OutputSettings,
}

impl Settings {
    /// Create settings with defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Merge another settings layer into this one (other wins for set values).
    pub fn merge(&mut self, other: Settings) {
        let reader = other.reader;
        if reader.main_config_path.is_some() {
            self.reader.main_config_path = reader.main_config_path;
        }
        if reader.presets_folder_name.is_some() {
            self.reader.presets_folder_name = reader.presets_folder_name;
        }
        if reader.default_key.is_some() {
            self.reader.default_key = reader.default_key;
        }
        // Context keys replace, search paths accumulate
        if !reader.context_keys.is_empty() {
            self.reader.context_keys = reader.context_keys;
        }
        self.reader.search_paths.extend(reader.search_paths);

        if other.output.format.is_some() {
            self.output.format = other.output.format;
        }
        if other.output.pretty.is_some() {
            self.output.pretty = other.output.pretty;
        }
    }
}
