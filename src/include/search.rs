//! Search path resolution.

use std::path::{Path, PathBuf};

use tracing::trace;

use crate::error::{DicfgError, Result};

/// Ordered directories consulted when resolving a referenced file name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchPaths {
    paths: Vec<PathBuf>,
}

impl SearchPaths {
    /// Create an empty search path list.
    pub fn new() -> Self {
        Self::default()
    }

    /// Append a directory.
    pub fn push(&mut self, path: impl Into<PathBuf>) {
        self.paths.push(path.into());
    }

    /// Append a directory if one is given.
    pub fn push_opt(&mut self, path: Option<impl Into<PathBuf>>) {
        if let Some(path) = path {
            self.push(path);
        }
    }

    /// The directories in priority order.
    pub fn iter(&self) -> impl Iterator<Item = &Path> {
        self.paths.iter().map(PathBuf::as_path)
    }

    /// Number of directories.
    pub fn len(&self) -> usize {
        self.paths.len()
    }

    /// Whether no directories are configured.
    pub fn is_empty(&self) -> bool {
        self.paths.is_empty()
    }

    /// Resolve a file name against the search paths.
    ///
    /// The first directory containing `name` wins. Absolute names resolve to
    /// themselves when they exist.
    ///
    /// # Errors
    ///
    /// Returns [`DicfgError::ConfigNotFound`] if no directory contains the file.
    pub fn resolve(&self, name: &str) -> Result<PathBuf> {
        let mut searched = Vec::with_capacity(self.paths.len());

        for dir in &self.paths {
            let candidate = dir.join(name);
            trace!(candidate = %candidate.display(), "checking search path");
            if candidate.exists() {
                return Ok(candidate);
            }
            searched.push(candidate);
        }

        Err(DicfgError::ConfigNotFound {
            name: name.to_string(),
            searched,
        })
    }
}

impl<P: Into<PathBuf>> FromIterator<P> for SearchPaths {
    fn from_iter<I: IntoIterator<Item = P>>(iter: I) -> Self {
        Self {
            paths: iter.into_iter().map(Into::into).collect(),
        }
    }
}

impl<P: Into<PathBuf>> Extend<P> for SearchPaths {
    fn extend<I: IntoIterator<Item = P>>(&mut self, iter: I) {
        self.paths.extend(iter.into_iter().map(Into::into));
    }
}
