//! Settings for the `dicfg` command line.
//!
//! Loaded from multiple sources and merged:
//! - Command-line flags (highest priority)
//! - `--settings <path>`
//! - Project-level `.dicfg.toml`
//! - User-level `~/.config/dicfg/config.toml`

mod file;
mod types;

pub use file::{generate_example_settings, load_settings};
pub use types::{OutputSettings, ReaderSettings, Settings};
