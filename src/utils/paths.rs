//! Path utilities.

use std::path::{Path, PathBuf};

/// File name of the project-level settings file.
pub const LOCAL_SETTINGS_FILE: &str = ".dicfg.toml";

/// Directory containing `path`.
///
/// A bare file name lives in the current directory, returned as `.`.
pub fn parent_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Get the config directory for dicfg.
///
/// Returns `~/.config/dicfg` on Unix-like systems.
pub fn config_dir() -> Option<PathBuf> {
    dirs::config_dir().map(|p| p.join("dicfg"))
}

/// Get the user-level settings file path.
///
/// Returns `~/.config/dicfg/config.toml`.
pub fn user_settings_file() -> Option<PathBuf> {
    config_dir().map(|p| p.join("config.toml"))
}

/// Find the project-level settings file in a directory.
///
/// Looks for `.dicfg.toml` in the given directory.
pub fn local_settings_file(dir: &Path) -> Option<PathBuf> {
    let settings_file = dir.join(LOCAL_SETTINGS_FILE);
    if settings_file.exists() {
        Some(settings_file)
    } else {
        None
    }
}
