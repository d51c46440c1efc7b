//! Config reading: sources, precedence and the reader itself.
//!
//! A read assembles four sources, lowest to highest precedence:
//! 1. Main config file
//! 2. Named presets, in the order given
//! 3. User config (mapping or file, filtered to the reader's name)
//! 4. Command-line `key.path=value` overrides, filtered the same way
//!
//! Each source is fused independently, then all are merged.

mod config_reader;
mod file;
mod options;
mod overrides;

pub use config_reader::{ConfigReader, UserConfig};
pub use file::{has_config_extension, parse_structured, read_structured_file, ConfigFormat};
pub use options::{
    ConfigReaderBuilder, ReaderOptions, DEFAULT_MAIN_CONFIG_PATH, DEFAULT_PRESETS_FOLDER,
};
pub use overrides::{parse_cli_tokens, token_to_mapping};
