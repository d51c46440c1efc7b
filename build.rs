//! Build script for dicfg.
//!
//! Generates man pages using clap_mangen.

use std::env;
use std::fs;
use std::path::PathBuf;

use clap::{CommandFactory, Parser, ValueEnum};

/// Minimal CLI struct for man page generation.
///
/// This duplicates the CLI definition to avoid build dependency issues.
#[derive(Parser)]
#[command(name = "dicfg")]
#[command(
    author,
    version,
    about = "Read layered configuration for a named component"
)]
#[command(
    long_about = "dicfg merges a main config file, presets, a user config and \
    command-line overrides into one configuration for a named component.\n\n\
    String values naming .json, .yml or .yaml files are replaced by the files' \
    contents, and context keys are seeded from the default subtree before merging."
)]
struct Cli {
    /// Reader name, selecting its section in user configs and overrides
    #[arg(value_name = "NAME")]
    name: Option<String>,

    /// Overrides as NAME.key.path=value (tokens without '=' are ignored)
    #[arg(value_name = "OVERRIDES")]
    overrides: Vec<String>,

    /// Path to the main config file
    #[arg(short, long, value_name = "PATH")]
    config: Option<PathBuf>,

    /// Preset to apply, in order (can be repeated)
    #[arg(short, long = "preset", value_name = "NAME")]
    presets: Vec<String>,

    /// Path to a user config file
    #[arg(short, long, value_name = "PATH")]
    user_config: Option<PathBuf>,

    /// Context key filled from the default subtree (can be repeated)
    #[arg(short = 'k', long = "context-key", value_name = "KEY")]
    context_keys: Vec<String>,

    /// Key whose subtree seeds every context key
    #[arg(long, value_name = "KEY")]
    default_key: Option<String>,

    /// Presets folder name, next to the main config
    #[arg(long = "presets-folder", value_name = "NAME")]
    presets_folder: Option<String>,

    /// Extra directory searched for referenced files (can be repeated)
    #[arg(short = 's', long = "search-path", value_name = "DIR")]
    search_paths: Vec<PathBuf>,

    /// Output format
    #[arg(short, long, value_name = "FORMAT", value_enum)]
    format: Option<Format>,

    /// Print JSON on a single line
    #[arg(long)]
    compact: bool,

    /// Print only the value at a dot-separated path
    #[arg(long, value_name = "KEY.PATH")]
    get: Option<String>,

    /// Path to a settings file
    #[arg(long, value_name = "PATH")]
    settings: Option<PathBuf>,

    /// Ignore settings files
    #[arg(long)]
    no_settings: bool,

    /// Print an example settings file
    #[arg(long)]
    example_settings: bool,

    /// Enable debug output
    #[arg(long)]
    debug: bool,

    /// Generate shell completions
    #[arg(long, value_name = "SHELL", value_enum)]
    completions: Option<Shell>,
}

#[derive(Clone, Copy, ValueEnum)]
enum Format {
    Json,
    Yaml,
    Toml,
}

#[derive(Clone, Copy, ValueEnum)]
enum Shell {
    Bash,
    Zsh,
    Fish,
    Powershell,
    Elvish,
}

fn main() {
    // Only generate man pages for release builds or when explicitly requested
    let profile = env::var("PROFILE").unwrap_or_default();
    if profile != "release" && env::var("DICFG_GEN_MANPAGE").is_err() {
        return;
    }

    let out_dir = match env::var_os("OUT_DIR") {
        Some(dir) => PathBuf::from(dir),
        None => return,
    };

    let cmd = Cli::command();
    let man = clap_mangen::Man::new(cmd);

    let mut buffer = Vec::new();
    man.render(&mut buffer).expect("Failed to generate man page");

    let man_path = out_dir.join("dicfg.1");
    fs::write(&man_path, buffer).expect("Failed to write man page");

    // Also copy to docs directory for distribution
    if let Some(manifest_dir) = env::var_os("CARGO_MANIFEST_DIR") {
        let docs_dir = PathBuf::from(manifest_dir).join("docs");
        if docs_dir.exists() {
            let _ = fs::copy(&man_path, docs_dir.join("dicfg.1"));
        }
    }

    println!("cargo:rerun-if-changed=build.rs");
}
