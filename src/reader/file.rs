//! Structured config file reading (JSON and YAML).

use std::fs;
use std::path::Path;

use tracing::debug;

use crate::error::{DicfgError, Result};
use crate::value::{from_yaml, ConfigValue};

/// Format of a structured config file.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigFormat {
    /// `.json`
    Json,
    /// `.yml` or `.yaml`
    Yaml,
}

impl ConfigFormat {
    /// Detect the format from a file extension without the leading dot.
    pub fn from_extension(extension: &str) -> Option<Self> {
        match extension {
            "json" => Some(ConfigFormat::Json),
            "yml" | "yaml" => Some(ConfigFormat::Yaml),
            _ => None,
        }
    }

    /// Detect the format of a path.
    ///
    /// # Errors
    ///
    /// Returns [`DicfgError::UnsupportedFormat`] for any other extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let extension = path.extension().and_then(|e| e.to_str()).unwrap_or("");
        Self::from_extension(extension).ok_or_else(|| DicfgError::UnsupportedFormat {
            path: path.to_path_buf(),
            extension: if extension.is_empty() {
                "<none>".to_string()
            } else {
                format!(".{extension}")
            },
        })
    }

    /// Name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            ConfigFormat::Json => "JSON",
            ConfigFormat::Yaml => "YAML",
        }
    }
}

/// Check whether a name refers to a config file by extension.
pub fn has_config_extension(name: &str) -> bool {
    Path::new(name)
        .extension()
        .and_then(|e| e.to_str())
        .and_then(ConfigFormat::from_extension)
        .is_some()
}

/// Read and parse a structured config file.
///
/// Returns `None` for an empty document.
///
/// # Errors
///
/// Returns an error if the extension is unsupported, the file cannot be
/// read, or its content does not parse.
pub fn read_structured_file(path: &Path) -> Result<Option<ConfigValue>> {
    let format = ConfigFormat::from_path(path)?;

    let content = fs::read_to_string(path).map_err(|source| DicfgError::IoWithContext {
        operation: "read config file".to_string(),
        path: path.to_path_buf(),
        source,
    })?;

    debug!(path = %path.display(), format = format.name(), "read config file");
    parse_structured(&content, format, path)
}

/// Parse config text in the given format.
///
/// `path` is only used for error messages.
pub fn parse_structured(
    content: &str,
    format: ConfigFormat,
    path: &Path,
) -> Result<Option<ConfigValue>> {
    if content.trim().is_empty() {
        return Ok(None);
    }

    let parse_error = |message: String| DicfgError::Parse {
        path: path.to_path_buf(),
        format: format.name().to_string(),
        message,
    };

    let value = match format {
        ConfigFormat::Json => {
            serde_json::from_str::<ConfigValue>(content).map_err(|e| parse_error(e.to_string()))?
        }
        ConfigFormat::Yaml => {
            let mut yaml = serde_yaml::from_str::<serde_yaml::Value>(content)
                .map_err(|e| parse_error(e.to_string()))?;
            // Resolve `<<` merge keys
            yaml.apply_merge().map_err(|e| parse_error(e.to_string()))?;
            from_yaml(yaml)
        }
    };

    Ok(match value {
        ConfigValue::Null => None,
        other => Some(other),
    })
}
