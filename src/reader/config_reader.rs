//! The config reader: source assembly and precedence.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{DicfgError, Result};
use crate::fusion::{fuse, ContextKeys};
use crate::include::SearchPaths;
use crate::merge::{merge_owned, Merged};
use crate::utils::parent_dir;
use crate::value::{into_mapping, Mapping};

use super::file::{has_config_extension, read_structured_file, ConfigFormat};
use super::options::{ConfigReaderBuilder, ReaderOptions};
use super::overrides::parse_cli_tokens;

/// Extensions tried, in order, for preset names given without one.
const PRESET_EXTENSIONS: &[&str] = &["yml", "yaml", "json"];

/// User-supplied configuration for a read.
#[derive(Debug, Clone, Default, PartialEq)]
pub enum UserConfig {
    /// No user configuration.
    #[default]
    None,
    /// An already-parsed mapping holding sections for one or more readers.
    Mapping(Mapping),
    /// A file holding sections for one or more readers.
    Path(PathBuf),
}

impl UserConfig {
    /// The user config file, if one was given.
    pub fn path(&self) -> Option<&Path> {
        match self {
            UserConfig::Path(path) => Some(path),
            _ => None,
        }
    }
}

impl From<Mapping> for UserConfig {
    fn from(map: Mapping) -> Self {
        UserConfig::Mapping(map)
    }
}

impl From<PathBuf> for UserConfig {
    fn from(path: PathBuf) -> Self {
        UserConfig::Path(path)
    }
}

impl From<&Path> for UserConfig {
    fn from(path: &Path) -> Self {
        UserConfig::Path(path.to_path_buf())
    }
}

impl From<&str> for UserConfig {
    fn from(path: &str) -> Self {
        UserConfig::Path(PathBuf::from(path))
    }
}

impl<T: Into<UserConfig>> From<Option<T>> for UserConfig {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or_default()
    }
}

/// Reads and merges configuration for one named component.
///
/// Construction checks the main config once; every [`read`](Self::read)
/// then builds a fresh result from the files on disk.
#[derive(Debug, Clone)]
pub struct ConfigReader {
    name: String,
    main_config_path: PathBuf,
    configs_folder: PathBuf,
    presets_folder: PathBuf,
    context: ContextKeys,
    search_paths: Vec<PathBuf>,
}

impl ConfigReader {
    /// Create a reader with default options.
    ///
    /// # Errors
    ///
    /// Fails with [`DicfgError::MainConfigNotFound`] if
    /// `./configs/config.yml` does not exist.
    pub fn new(name: impl Into<String>) -> Result<Self> {
        ConfigReaderBuilder::new(name).build()
    }

    /// Start building a reader.
    pub fn builder(name: impl Into<String>) -> ConfigReaderBuilder {
        ConfigReaderBuilder::new(name)
    }

    /// Create a reader from explicit options.
    ///
    /// # Errors
    ///
    /// Fails if the main config file does not exist or has an unsupported
    /// extension.
    pub fn from_options(options: ReaderOptions) -> Result<Self> {
        let context = options.context();
        let ReaderOptions {
            name,
            main_config_path,
            presets_folder_name,
            search_paths,
            ..
        } = options;

        if !main_config_path.exists() {
            return Err(DicfgError::MainConfigNotFound {
                path: main_config_path,
            });
        }
        ConfigFormat::from_path(&main_config_path)?;

        let configs_folder = parent_dir(&main_config_path);
        let presets_folder = configs_folder.join(presets_folder_name);

        debug!(
            name = %name,
            main_config = %main_config_path.display(),
            presets = %presets_folder.display(),
            "created config reader"
        );

        Ok(Self {
            name,
            main_config_path,
            configs_folder,
            presets_folder,
            context,
            search_paths,
        })
    }

    /// The reader's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Path to the main config file.
    pub fn main_config_path(&self) -> &Path {
        &self.main_config_path
    }

    /// Directory containing the main config.
    pub fn configs_folder(&self) -> &Path {
        &self.configs_folder
    }

    /// Directory holding presets.
    pub fn presets_folder(&self) -> &Path {
        &self.presets_folder
    }

    /// Context keys applied to every source.
    pub fn context_keys(&self) -> &ContextKeys {
        &self.context
    }

    /// Search paths for a read with the given user config, in order:
    /// current directory, user config directory, main config directory,
    /// presets directory, then the extra search paths.
    pub fn search_paths_for(&self, user_config: &UserConfig) -> SearchPaths {
        let mut paths = SearchPaths::new();
        paths.push(".");
        paths.push_opt(user_config.path().map(parent_dir));
        paths.push(&self.configs_folder);
        paths.push(&self.presets_folder);
        paths.extend(self.search_paths.iter().cloned());
        paths
    }

    /// Read the merged configuration.
    ///
    /// Sources, lowest precedence first: main config, `presets` in order,
    /// `user_config`, then `cli_args` overrides. Only `cli_args` tokens
    /// containing `=` are used.
    ///
    /// # Errors
    ///
    /// Fails if any referenced file is missing or malformed, or if the user
    /// config has no section for this reader.
    pub fn read<P, S>(
        &self,
        user_config: impl Into<UserConfig>,
        presets: impl IntoIterator<Item = P>,
        cli_args: impl IntoIterator<Item = S>,
    ) -> Result<Merged>
    where
        P: AsRef<str>,
        S: AsRef<str>,
    {
        let user_config = user_config.into();
        let search_paths = self.search_paths_for(&user_config);
        debug!(name = %self.name, search_paths = ?search_paths, "reading config");

        let mut sources = vec![self.read_main()?];
        for preset in presets {
            sources.push(self.read_preset(preset.as_ref())?);
        }
        sources.push(self.read_user_config(user_config)?);
        sources.push(self.read_cli(cli_args)?);

        let fused = sources
            .into_iter()
            .map(|source| fuse(source, &self.context, &search_paths))
            .collect::<Result<Vec<_>>>()?;

        Ok(merge_owned(fused))
    }

    /// Read using the process arguments as overrides.
    pub fn read_from_env<P>(
        &self,
        user_config: impl Into<UserConfig>,
        presets: impl IntoIterator<Item = P>,
    ) -> Result<Merged>
    where
        P: AsRef<str>,
    {
        self.read(user_config, presets, std::env::args().skip(1))
    }

    fn read_main(&self) -> Result<Mapping> {
        let value = read_structured_file(&self.main_config_path)?;
        into_mapping(
            value,
            &format!("main config {}", self.main_config_path.display()),
        )
    }

    /// Resolve a preset name under the presets folder.
    ///
    /// Names without a config extension try `.yml`, `.yaml`, then `.json`.
    pub fn resolve_preset(&self, preset: &str) -> Result<PathBuf> {
        let candidates: Vec<PathBuf> = if has_config_extension(preset) {
            vec![self.presets_folder.join(preset)]
        } else {
            PRESET_EXTENSIONS
                .iter()
                .map(|ext| self.presets_folder.join(format!("{preset}.{ext}")))
                .collect()
        };

        match candidates.iter().find(|candidate| candidate.exists()) {
            Some(found) => Ok(found.clone()),
            None => Err(DicfgError::ConfigNotFound {
                name: preset.to_string(),
                searched: candidates,
            }),
        }
    }

    fn read_preset(&self, preset: &str) -> Result<Mapping> {
        let path = self.resolve_preset(preset)?;
        debug!(preset, path = %path.display(), "reading preset");
        into_mapping(read_structured_file(&path)?, &format!("preset '{preset}'"))
    }

    fn read_user_config(&self, user_config: UserConfig) -> Result<Mapping> {
        match user_config {
            UserConfig::None => Ok(Mapping::new()),
            UserConfig::Mapping(map) => self.select_section(map, "user config mapping"),
            UserConfig::Path(path) => {
                let origin = format!("user config {}", path.display());
                let map = into_mapping(read_structured_file(&path)?, &origin)?;
                self.select_section(map, &origin)
            }
        }
    }

    fn select_section(&self, mut map: Mapping, origin: &str) -> Result<Mapping> {
        match map.remove(&self.name) {
            Some(section) => into_mapping(
                Some(section),
                &format!("section '{}' of {origin}", self.name),
            ),
            None => {
                let available: Vec<&str> = map.keys().map(String::as_str).collect();
                Err(DicfgError::missing_section(&self.name, origin, &available))
            }
        }
    }

    fn read_cli<S: AsRef<str>>(&self, cli_args: impl IntoIterator<Item = S>) -> Result<Mapping> {
        let mut overrides = parse_cli_tokens(cli_args);
        into_mapping(
            overrides.remove(&self.name),
            &format!("command-line overrides for '{}'", self.name),
        )
    }
}
