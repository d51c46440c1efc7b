//! Rendering merged configuration for the command line.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

use crate::value::{type_name, ConfigValue};

/// Output format for rendered configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// JSON, pretty-printed unless compact output is requested.
    #[default]
    Json,
    /// YAML.
    Yaml,
    /// TOML. Requires a mapping at the top level and no nulls.
    Toml,
}

impl OutputFormat {
    /// Format name as used in settings files.
    pub fn name(self) -> &'static str {
        match self {
            OutputFormat::Json => "json",
            OutputFormat::Yaml => "yaml",
            OutputFormat::Toml => "toml",
        }
    }
}

/// Render a value in the given format.
///
/// `pretty` only affects JSON. The result never ends with a newline.
///
/// # Errors
///
/// Returns an error if the value cannot be represented in the format, such
/// as a null or a top-level scalar in TOML.
pub fn render(value: &ConfigValue, format: OutputFormat, pretty: bool) -> Result<String> {
    let rendered = match format {
        OutputFormat::Json if pretty => serde_json::to_string_pretty(value)?,
        OutputFormat::Json => serde_json::to_string(value)?,
        OutputFormat::Yaml => serde_yaml::to_string(value)?,
        OutputFormat::Toml => {
            if !value.is_object() {
                anyhow::bail!(
                    "Cannot render {} as TOML: top level must be a mapping",
                    type_name(value)
                );
            }
            toml::to_string_pretty(value)
                .context("Cannot render config as TOML (TOML has no null values)")?
        }
    };

    Ok(rendered.trim_end().to_string())
}
