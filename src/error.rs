//! Custom error types for dicfg.
//!
//! Uses thiserror for ergonomic error definitions.

use std::path::PathBuf;

use thiserror::Error;

/// Exit codes for dicfg.
pub mod exit_code {
    /// Success.
    pub const SUCCESS: i32 = 0;
    /// General error.
    pub const GENERAL_ERROR: i32 = 1;
    /// Main config, preset or include target not found.
    pub const CONFIG_NOT_FOUND: i32 = 2;
    /// File extension is not a recognized config format.
    pub const UNSUPPORTED_FORMAT: i32 = 3;
    /// User config lacks the section for this reader's name.
    pub const MISSING_SECTION: i32 = 4;
    /// Malformed or wrongly shaped config file.
    pub const INVALID_CONFIG: i32 = 5;
}

/// Coarse classification of a [`DicfgError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// A required file could not be located.
    ConfigNotFound,
    /// A file extension is not one of `.json`, `.yml`, `.yaml`.
    UnsupportedFormat,
    /// The user config has no entry for the reader's name.
    MissingNamedSection,
    /// A file parsed but its content is unusable.
    InvalidConfig,
    /// Any other I/O failure.
    Io,
}

/// Main error type for dicfg.
#[derive(Error, Debug)]
pub enum DicfgError {
    /// The main config file does not exist.
    #[error("No main config file found at: {path}\n\nTip: The main config path can be set with --config or `main_config_path`.")]
    MainConfigNotFound { path: PathBuf },

    /// A referenced config file was not found on any search path.
    #[error("Config file '{name}' not found (searched: {})", format_paths(.searched))]
    ConfigNotFound { name: String, searched: Vec<PathBuf> },

    /// Unsupported config file extension.
    #[error("Unsupported config format '{extension}' for {path} (expected .json, .yml or .yaml)")]
    UnsupportedFormat { path: PathBuf, extension: String },

    /// User config lacks the reader's named section.
    #[error("No section named '{name}' in {origin}{}", format_suggestions(.suggestions))]
    MissingNamedSection {
        name: String,
        origin: String,
        suggestions: Vec<String>,
    },

    /// A config file includes itself, directly or through other files.
    #[error("Config include cycle: {}", format_chain(.chain))]
    IncludeCycle { chain: Vec<PathBuf> },

    /// A source that must be a mapping is something else.
    #[error("Expected a mapping in {origin}, got {actual_type}")]
    NotAMapping { origin: String, actual_type: String },

    /// Failed to parse a config file.
    #[error("Failed to parse {format} config at {path}:\n  {message}")]
    Parse {
        path: PathBuf,
        format: String,
        message: String,
    },

    /// IO error with path context.
    #[error("Failed to {operation} '{path}': {source}")]
    IoWithContext {
        operation: String,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// IO error.
    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DicfgError {
    /// Classify this error.
    pub fn kind(&self) -> ErrorKind {
        match self {
            DicfgError::MainConfigNotFound { .. } | DicfgError::ConfigNotFound { .. } => {
                ErrorKind::ConfigNotFound
            }
            DicfgError::UnsupportedFormat { .. } => ErrorKind::UnsupportedFormat,
            DicfgError::MissingNamedSection { .. } => ErrorKind::MissingNamedSection,
            DicfgError::IncludeCycle { .. }
            | DicfgError::NotAMapping { .. }
            | DicfgError::Parse { .. } => ErrorKind::InvalidConfig,
            DicfgError::IoWithContext { .. } | DicfgError::Io(_) => ErrorKind::Io,
        }
    }

    /// Get the exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::ConfigNotFound => exit_code::CONFIG_NOT_FOUND,
            ErrorKind::UnsupportedFormat => exit_code::UNSUPPORTED_FORMAT,
            ErrorKind::MissingNamedSection => exit_code::MISSING_SECTION,
            ErrorKind::InvalidConfig => exit_code::INVALID_CONFIG,
            ErrorKind::Io => exit_code::GENERAL_ERROR,
        }
    }

    /// Create a missing section error, suggesting similar top-level keys.
    pub fn missing_section(name: &str, origin: impl Into<String>, available: &[&str]) -> Self {
        DicfgError::MissingNamedSection {
            name: name.to_string(),
            origin: origin.into(),
            suggestions: find_similar_names(name, available),
        }
    }
}

fn format_paths(paths: &[PathBuf]) -> String {
    if paths.is_empty() {
        return "no search paths".to_string();
    }
    paths
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(", ")
}

fn format_chain(chain: &[PathBuf]) -> String {
    chain
        .iter()
        .map(|p| p.display().to_string())
        .collect::<Vec<_>>()
        .join(" -> ")
}

fn format_suggestions(suggestions: &[String]) -> String {
    if suggestions.is_empty() {
        String::new()
    } else {
        format!("\n\nDid you mean: {}?", suggestions.join(", "))
    }
}

/// Find similar section names using simple string distance.
fn find_similar_names(name: &str, available: &[&str]) -> Vec<String> {
    let name_lower = name.to_lowercase();
    let mut matches: Vec<(String, usize)> = available
        .iter()
        .filter_map(|&candidate| {
            let candidate_lower = candidate.to_lowercase();
            let dist = simple_distance(&name_lower, &candidate_lower);
            if dist <= 3
                || candidate_lower.contains(&name_lower)
                || name_lower.contains(&candidate_lower)
            {
                Some((candidate.to_string(), dist))
            } else {
                None
            }
        })
        .collect();

    matches.sort_by_key(|(_, d)| *d);

    matches
        .into_iter()
        .take(3)
        .map(|(s, _)| format!("'{}'", s))
        .collect()
}

/// Levenshtein distance, approximated for long strings.
fn simple_distance(a: &str, b: &str) -> usize {
    if a == b {
        return 0;
    }

    let a_chars: Vec<char> = a.chars().collect();
    let b_chars: Vec<char> = b.chars().collect();

    let len_a = a_chars.len();
    let len_b = b_chars.len();

    if len_a == 0 {
        return len_b;
    }
    if len_b == 0 {
        return len_a;
    }

    if len_a > 32 || len_b > 32 {
        let common_prefix = a_chars
            .iter()
            .zip(b_chars.iter())
            .take_while(|(a, b)| a == b)
            .count();
        return len_a.abs_diff(len_b) + (len_a.min(len_b) - common_prefix);
    }

    let mut prev: Vec<usize> = (0..=len_b).collect();
    let mut curr = vec![0; len_b + 1];

    for i in 1..=len_a {
        curr[0] = i;
        for j in 1..=len_b {
            let cost = usize::from(a_chars[i - 1] != b_chars[j - 1]);
            curr[j] = (prev[j] + 1).min(curr[j - 1] + 1).min(prev[j - 1] + cost);
        }
        std::mem::swap(&mut prev, &mut curr);
    }

    prev[len_b]
}

/// Result type alias for dicfg operations.
pub type Result<T> = std::result::Result<T, DicfgError>;
