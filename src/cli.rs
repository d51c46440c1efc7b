//! CLI argument definitions for dicfg.
//!
//! Uses clap with derive macros for argument parsing.
//!
//! # Example
//!
//! ```no_run
//! use dicfg::cli::Cli;
//!
//! let cli = Cli::parse_args();
//! println!("Reader: {:?}", cli.name);
//! ```

use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};
use clap_complete::{generate, Shell};

use crate::output::OutputFormat;
use crate::reader::ReaderOptions;
use crate::settings::Settings;

/// Read layered configuration for a named component.
#[derive(Parser, Debug)]
#[command(name = "dicfg")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Reader name, selecting its section in user configs and overrides
    #[arg(
        value_name = "NAME",
        required_unless_present_any = ["completions", "example_settings"]
    )]
    pub name: Option<String>,

    /// Overrides as NAME.key.path=value (tokens without '=' are ignored)
    #[arg(value_name = "OVERRIDES")]
    pub overrides: Vec<String>,

    /// Path to the main config file
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Preset to apply, in order (can be repeated)
    #[arg(short, long = "preset", value_name = "NAME")]
    pub presets: Vec<String>,

    /// Path to a user config file
    #[arg(short, long, value_name = "PATH")]
    pub user_config: Option<PathBuf>,

    /// Context key filled from the default subtree (can be repeated)
    #[arg(short = 'k', long = "context-key", value_name = "KEY")]
    pub context_keys: Vec<String>,

    /// Key whose subtree seeds every context key
    #[arg(long, value_name = "KEY")]
    pub default_key: Option<String>,

    /// Presets folder name, next to the main config
    #[arg(long = "presets-folder", value_name = "NAME")]
    pub presets_folder: Option<String>,

    /// Extra directory searched for referenced files (can be repeated)
    #[arg(short = 's', long = "search-path", value_name = "DIR")]
    pub search_paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", value_enum)]
    pub format: Option<CliFormat>,

    /// Print JSON on a single line
    #[arg(long)]
    pub compact: bool,

    /// Print only the value at a dot-separated path
    #[arg(long, value_name = "KEY.PATH")]
    pub get: Option<String>,

    /// Path to a settings file
    #[arg(long, value_name = "PATH")]
    pub settings: Option<PathBuf>,

    /// Ignore settings files
    #[arg(long)]
    pub no_settings: bool,

    /// Print an example settings file
    #[arg(long)]
    pub example_settings: bool,

    /// Enable debug output
    #[arg(long)]
    pub debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    pub completions: Option<CliShell>,
}

/// Shell type for completion generation.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliShell {
    /// Bash shell
    Bash,
    /// Zsh shell
    Zsh,
    /// Fish shell
    Fish,
    /// PowerShell
    Powershell,
    /// Elvish shell
    Elvish,
}

/// Output format for CLI parsing.
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum CliFormat {
    Json,
    Yaml,
    Toml,
}

impl From<CliFormat> for OutputFormat {
    fn from(format: CliFormat) -> Self {
        match format {
            CliFormat::Json => OutputFormat::Json,
            CliFormat::Yaml => OutputFormat::Yaml,
            CliFormat::Toml => OutputFormat::Toml,
        }
    }
}

impl Cli {
    /// Parse command line arguments.
    pub fn parse_args() -> Self {
        Cli::parse()
    }

    /// Reader options: settings first, then command-line flags on top.
    ///
    /// Context keys from the command line replace the configured ones;
    /// search paths are appended.
    pub fn reader_options(&self, name: &str, settings: &Settings) -> ReaderOptions {
        let mut options = settings.reader.to_options(name);
        if let Some(path) = &self.config {
            options.main_config_path = path.clone();
        }
        if let Some(folder) = &self.presets_folder {
            options.presets_folder_name = folder.clone();
        }
        if let Some(key) = &self.default_key {
            options.default_key = key.clone();
        }
        if !self.context_keys.is_empty() {
            options.context_keys = self.context_keys.clone();
        }
        options.search_paths.extend(self.search_paths.iter().cloned());
        options
    }

    /// Get the output format.
    pub fn output_format(&self, settings: &Settings) -> OutputFormat {
        self.format
            .map(Into::into)
            .unwrap_or_else(|| settings.output.format())
    }

    /// Whether JSON output is pretty-printed.
    pub fn pretty(&self, settings: &Settings) -> bool {
        !self.compact && settings.output.pretty()
    }

    /// Generate shell completions and write to stdout.
    pub fn generate_completions(shell: CliShell) {
        let mut cmd = Cli::command();
        let shell = match shell {
            CliShell::Bash => Shell::Bash,
            CliShell::Zsh => Shell::Zsh,
            CliShell::Fish => Shell::Fish,
            CliShell::Powershell => Shell::PowerShell,
            CliShell::Elvish => Shell::Elvish,
        };
        generate(shell, &mut cmd, "dicfg", &mut std::io::stdout());
    }
}
