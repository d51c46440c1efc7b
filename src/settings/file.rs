//! Settings file loading and parsing.

use std::fs;
use std::path::Path;

use anyhow::{Context, Result};
use tracing::{debug, warn};

use crate::utils::{local_settings_file, user_settings_file};

use super::types::Settings;

/// Load settings from the specified path.
fn load_settings_from_path(path: &Path) -> Result<Settings> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read settings file: {}", path.display()))?;

    let settings: Settings = toml::from_str(&content)
        .with_context(|| format!("Failed to parse settings file: {}", path.display()))?;

    Ok(settings)
}

/// Merge an auto-discovered settings file, skipping it with a warning if it
/// cannot be loaded.
fn merge_discovered(settings: &mut Settings, path: &Path, level: &str) {
    match load_settings_from_path(path) {
        Ok(layer) => {
            debug!(path = %path.display(), level, "loaded settings");
            settings.merge(layer);
        }
        Err(e) => {
            warn!(path = %path.display(), level, "skipping settings file: {e:#}");
        }
    }
}

/// Load settings with proper priority and merging.
///
/// Layers, lowest priority first:
/// 1. `~/.config/dicfg/config.toml` (user-level)
/// 2. `.dicfg.toml` in `project_dir` (project-level)
/// 3. `explicit_path` from `--settings`
///
/// Missing files are skipped. Malformed auto-discovered files are skipped
/// with a warning.
///
/// # Errors
///
/// Returns an error only if `explicit_path` cannot be read or parsed.
pub fn load_settings(explicit_path: Option<&Path>, project_dir: &Path) -> Result<Settings> {
    let user_path = user_settings_file();
    load_layers(user_path.as_deref(), explicit_path, project_dir)
}

fn load_layers(
    user_path: Option<&Path>,
    explicit_path: Option<&Path>,
    project_dir: &Path,
) -> Result<Settings> {
    let mut settings = Settings::default();

    if let Some(user_path) = user_path.filter(|p| p.exists()) {
        merge_discovered(&mut settings, user_path, "user");
    }

    if let Some(project_path) = local_settings_file(project_dir) {
        merge_discovered(&mut settings, &project_path, "project");
    }

    if let Some(path) = explicit_path {
        let layer = load_settings_from_path(path).with_context(|| {
            format!("Failed to load settings from --settings path: {}", path.display())
        })?;
        settings.merge(layer);
    }

    Ok(settings)
}

/// Generate an example settings file with all options documented.
pub fn generate_example_settings() -> String {
    r#"# dicfg settings
# Place this file at ~/.config/dicfg/config.toml for global settings
# or .dicfg.toml in your working directory for project-specific settings

[reader]
# Main config file
main_config_path = "./configs/config.yml"

# Presets folder, next to the main config
presets_folder_name = "presets"

# Key whose subtree seeds every context key
default_key = "default"

# Context keys filled from the default subtree
context_keys = []

# Extra directories searched for referenced config files
search_paths = []

[output]
# Output format: "json", "yaml", "toml"
format = "json"

# Pretty-print JSON
pretty = true
"#
    .to_string()
}
