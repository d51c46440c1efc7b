//! Recursive expansion of config file references.

use std::fs;
use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DicfgError, Result};
use crate::reader::{has_config_extension, read_structured_file};
use crate::value::{ConfigValue, Mapping};

use super::search::SearchPaths;

/// Expand config file references in a value.
///
/// - A string ending in `.json`, `.yml` or `.yaml` is resolved against
///   `search_paths` and replaced by the file's parsed (and itself expanded)
///   contents. An empty included file becomes null.
/// - A mapping has every value expanded, keys preserved.
/// - Any other scalar, and sequences, are returned unchanged.
///
/// # Errors
///
/// Returns an error if a referenced file is not found, cannot be parsed, or
/// includes itself.
pub fn include(config: ConfigValue, search_paths: &SearchPaths) -> Result<ConfigValue> {
    let mut chain = Vec::new();
    expand(config, search_paths, &mut chain)
}

/// Expand config file references in every value of a mapping.
pub fn include_mapping(config: Mapping, search_paths: &SearchPaths) -> Result<Mapping> {
    let mut chain = Vec::new();
    expand_mapping(config, search_paths, &mut chain)
}

fn expand(
    config: ConfigValue,
    search_paths: &SearchPaths,
    chain: &mut Vec<PathBuf>,
) -> Result<ConfigValue> {
    match config {
        ConfigValue::String(name) if has_config_extension(&name) => {
            expand_reference(&name, search_paths, chain)
        }
        ConfigValue::Object(map) => expand_mapping(map, search_paths, chain).map(ConfigValue::Object),
        other => Ok(other),
    }
}

fn expand_mapping(
    config: Mapping,
    search_paths: &SearchPaths,
    chain: &mut Vec<PathBuf>,
) -> Result<Mapping> {
    config
        .into_iter()
        .map(|(key, value)| Ok((key, expand(value, search_paths, chain)?)))
        .collect()
}

fn expand_reference(
    name: &str,
    search_paths: &SearchPaths,
    chain: &mut Vec<PathBuf>,
) -> Result<ConfigValue> {
    let path = search_paths.resolve(name)?;
    let identity = file_identity(&path);

    if chain.contains(&identity) {
        let mut cycle = chain.clone();
        cycle.push(identity);
        return Err(DicfgError::IncludeCycle { chain: cycle });
    }

    debug!(reference = name, path = %path.display(), "including config file");
    let loaded = read_structured_file(&path)?.unwrap_or(ConfigValue::Null);

    chain.push(identity);
    let expanded = expand(loaded, search_paths, chain);
    chain.pop();
    expanded
}

fn file_identity(path: &Path) -> PathBuf {
    fs::canonicalize(path).unwrap_or_else(|_| path.to_path_buf())
}
