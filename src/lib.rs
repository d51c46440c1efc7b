//! dicfg - layered configuration for named components
//!
//! Builds one configuration mapping for a named component (a "reader") from
//! several sources, lowest precedence first:
//!
//! 1. the main config file (`./configs/config.yml` by default),
//! 2. presets from the presets folder, in the order given,
//! 3. the reader's section of a user config,
//! 4. `name.key.path=value` command-line overrides.
//!
//! Every source is expanded (string values naming `.json`/`.yml`/`.yaml`
//! files are replaced by the files' contents) and fused (context keys are
//! seeded from the default subtree) before the sources are deep-merged.
//!
//! # Modules
//!
//! - [`cli`] - Command-line interface argument parsing
//! - [`error`] - Error types and result helpers
//! - [`fusion`] - Context key fusion
//! - [`include`] - File reference expansion
//! - [`merge`] - Deep merge of config mappings
//! - [`output`] - Rendering for the command line
//! - [`reader`] - Source assembly and precedence
//! - [`settings`] - Settings for the command line
//! - [`utils`] - Path utilities
//! - [`value`] - Config value representation and literal parsing
//!
//! # Example
//!
//! ```no_run
//! use dicfg::{ConfigReader, UserConfig};
//!
//! let reader = ConfigReader::builder("model")
//!     .context_keys(["train", "test"])
//!     .build()
//!     .expect("main config should exist");
//!
//! let config = reader
//!     .read(UserConfig::from("user.yml"), ["fast"], ["model.lr=0.01"])
//!     .expect("config should load");
//! println!("{}", serde_json::to_string_pretty(&config).unwrap());
//! ```

/// CLI argument definitions.
pub mod cli;

/// Error types and result helpers.
pub mod error;

pub mod fusion;

pub mod include;

pub mod merge;

/// Output rendering.
pub mod output;

pub mod reader;

/// Settings system for loading and merging tool settings.
pub mod settings;

/// Path utilities.
pub mod utils;

pub mod value;

// Re-export commonly used types
pub use error::{DicfgError, ErrorKind, Result};
pub use fusion::{fuse, ContextKeys};
pub use include::{include, SearchPaths};
pub use merge::{merge, Merged};
pub use reader::{parse_cli_tokens, ConfigReader, ConfigReaderBuilder, UserConfig};
pub use value::{ConfigValue, Mapping};
