//! Reader construction parameters.

use std::path::PathBuf;

use crate::error::Result;
use crate::fusion::{ContextKeys, DEFAULT_KEY};

use super::config_reader::ConfigReader;

/// Default location of the main config file.
pub const DEFAULT_MAIN_CONFIG_PATH: &str = "./configs/config.yml";

/// Default name of the presets folder next to the main config.
pub const DEFAULT_PRESETS_FOLDER: &str = "presets";

/// Construction parameters for a [`ConfigReader`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ReaderOptions {
    /// Selects this reader's section in user configs and overrides.
    pub name: String,
    /// Path to the main config file.
    pub main_config_path: PathBuf,
    /// Presets folder name, relative to the main config's directory.
    pub presets_folder_name: String,
    /// Key whose subtree seeds every context key.
    pub default_key: String,
    /// Declared context keys.
    pub context_keys: Vec<String>,
    /// Extra search paths, consulted after the built-in ones.
    pub search_paths: Vec<PathBuf>,
}

impl ReaderOptions {
    /// Options with every parameter at its default.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            main_config_path: PathBuf::from(DEFAULT_MAIN_CONFIG_PATH),
            presets_folder_name: DEFAULT_PRESETS_FOLDER.to_string(),
            default_key: DEFAULT_KEY.to_string(),
            context_keys: Vec::new(),
            search_paths: Vec::new(),
        }
    }

    /// The context key set these options describe.
    pub fn context(&self) -> ContextKeys {
        ContextKeys::new(self.context_keys.iter().cloned()).with_default_key(&self.default_key)
    }
}

/// Builder for [`ConfigReader`].
///
/// # Examples
///
/// ```no_run
/// use dicfg::ConfigReader;
///
/// let reader = ConfigReader::builder("model")
///     .main_config_path("configs/config.yml")
///     .context_keys(["train", "test"])
///     .build()
///     .expect("main config should exist");
/// ```
#[derive(Debug, Clone)]
pub struct ConfigReaderBuilder {
    options: ReaderOptions,
}

impl ConfigReaderBuilder {
    /// Start a builder for a reader called `name`.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            options: ReaderOptions::new(name),
        }
    }

    /// Set the main config path.
    pub fn main_config_path(mut self, path: impl Into<PathBuf>) -> Self {
        self.options.main_config_path = path.into();
        self
    }

    /// Set the presets folder name.
    pub fn presets_folder_name(mut self, name: impl Into<String>) -> Self {
        self.options.presets_folder_name = name.into();
        self
    }

    /// Set the default key.
    pub fn default_key(mut self, key: impl Into<String>) -> Self {
        self.options.default_key = key.into();
        self
    }

    /// Set the context keys.
    pub fn context_keys<I, S>(mut self, keys: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.options.context_keys = keys.into_iter().map(Into::into).collect();
        self
    }

    /// Set the extra search paths.
    pub fn search_paths<I, P>(mut self, paths: I) -> Self
    where
        I: IntoIterator<Item = P>,
        P: Into<PathBuf>,
    {
        self.options.search_paths = paths.into_iter().map(Into::into).collect();
        self
    }

    /// The options collected so far.
    pub fn options(&self) -> &ReaderOptions {
        &self.options
    }

    /// Build the reader.
    ///
    /// # Errors
    ///
    /// Fails if the main config file does not exist or has an unsupported
    /// extension.
    pub fn build(self) -> Result<ConfigReader> {
        ConfigReader::from_options(self.options)
    }
}

impl From<ReaderOptions> for ConfigReaderBuilder {
    fn from(options: ReaderOptions) -> Self {
        Self { options }
    }
}
