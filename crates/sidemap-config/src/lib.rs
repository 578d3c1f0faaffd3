//! Configuration management for sidemap.
//!
//! Parses `sidemap.toml` configuration files with serde and provides
//! auto-discovery of config files in parent directories.
//!
//! The `[content]` section controls what the scanner sees (root directory,
//! excluded directory names, filtered file names); `[navigation]` controls
//! synthesized headings; `[names.groups]` and `[names.collections]` are the
//! curated display-name tables consulted before humanization. All values are
//! plain data handed to the navigation builder, never global state.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use sidemap_scan::ScanOptions;

/// Configuration filename to search for.
const CONFIG_FILENAME: &str = "sidemap.toml";

/// Application configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Content configuration (paths are relative strings from TOML).
    content: ContentConfigRaw,
    /// Navigation synthesis configuration.
    pub navigation: NavigationConfig,
    /// Curated display-name tables.
    pub names: NamesConfig,

    /// Resolved content configuration (set after loading).
    #[serde(skip)]
    pub content_resolved: ContentConfig,
    /// Path to the config file (set after loading).
    #[serde(skip)]
    pub config_path: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self::default_with_base(Path::new("."))
    }
}

/// Raw content configuration as parsed from TOML (paths as strings).
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
struct ContentConfigRaw {
    root: Option<String>,
    excluded_dirs: Option<Vec<String>>,
    filtered_files: Option<Vec<String>>,
}

/// Resolved content configuration with an absolute root path.
#[derive(Debug, Default)]
pub struct ContentConfig {
    /// Root directory holding the documentation tree.
    pub root: PathBuf,
    /// Directory names pruned from the walk.
    pub excluded_dirs: Vec<String>,
    /// File base names excluded from navigation.
    pub filtered_files: Vec<String>,
}

/// Navigation synthesis configuration.
#[derive(Debug, Deserialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Heading for the synthesized root-level group.
    pub quick_start_heading: String,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            quick_start_heading: "Quick Start".to_owned(),
        }
    }
}

/// Curated display-name tables.
///
/// Keys are directory or file identifiers (collection directory names, group
/// directory names, filename stems); values are the display names to use
/// instead of humanization.
#[derive(Debug, Deserialize, Default)]
#[serde(default)]
pub struct NamesConfig {
    /// Display names for collection directories.
    pub collections: HashMap<String, String>,
    /// Display names for group directories and filename stems.
    pub groups: HashMap<String, String>,
}

/// Configuration error.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File not found.
    #[error("Configuration file not found: {}", .0.display())]
    NotFound(PathBuf),
    /// I/O error.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// TOML parsing error.
    #[error("TOML parse error: {0}")]
    Parse(#[from] toml::de::Error),
    /// Validation error.
    #[error("Configuration error: {0}")]
    Validation(String),
}

/// Require a string field to be non-empty.
fn require_non_empty(value: &str, field: &str) -> Result<(), ConfigError> {
    if value.is_empty() {
        return Err(ConfigError::Validation(format!("{field} cannot be empty")));
    }
    Ok(())
}

impl Config {
    /// Load configuration from file.
    ///
    /// If `config_path` is provided, loads from that file. Otherwise,
    /// searches for `sidemap.toml` in the current directory and parents,
    /// falling back to defaults when nothing is found.
    ///
    /// # Errors
    ///
    /// Returns an error if an explicit `config_path` doesn't exist, or if
    /// parsing or validation fails.
    pub fn load(config_path: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = config_path {
            if !path.exists() {
                return Err(ConfigError::NotFound(path.to_path_buf()));
            }
            Self::load_from_file(path)
        } else if let Some(discovered) = Self::discover_config() {
            Self::load_from_file(&discovered)
        } else {
            Ok(Self::default_with_cwd())
        }
    }

    /// Scanner options derived from the resolved content configuration.
    #[must_use]
    pub fn scan_options(&self) -> ScanOptions {
        ScanOptions {
            excluded_dirs: self.content_resolved.excluded_dirs.clone(),
            filtered_files: self.content_resolved.filtered_files.clone(),
        }
    }

    /// Search for config file in current directory and parents.
    fn discover_config() -> Option<PathBuf> {
        let mut current = std::env::current_dir().ok()?;
        loop {
            let candidate = current.join(CONFIG_FILENAME);
            if candidate.exists() {
                return Some(candidate);
            }
            if !current.pop() {
                return None;
            }
        }
    }

    /// Create default config with paths relative to current working directory.
    fn default_with_cwd() -> Self {
        let cwd = std::env::current_dir().unwrap_or_default();
        Self::default_with_base(&cwd)
    }

    /// Create default config with paths relative to given base directory.
    fn default_with_base(base: &Path) -> Self {
        let defaults = ScanOptions::default();
        Self {
            content: ContentConfigRaw::default(),
            navigation: NavigationConfig::default(),
            names: NamesConfig::default(),
            content_resolved: ContentConfig {
                root: base.join("docs"),
                excluded_dirs: defaults.excluded_dirs,
                filtered_files: defaults.filtered_files,
            },
            config_path: None,
        }
    }

    /// Load configuration from a specific file.
    fn load_from_file(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path)?;
        let mut config: Self = toml::from_str(&content)?;

        let config_dir = path.parent().unwrap_or(Path::new("."));
        config.resolve_paths(config_dir);
        config.config_path = Some(path.to_path_buf());

        config.validate()?;

        Ok(config)
    }

    /// Resolve relative paths and fill scanner defaults.
    fn resolve_paths(&mut self, config_dir: &Path) {
        let defaults = ScanOptions::default();
        self.content_resolved = ContentConfig {
            root: config_dir.join(self.content.root.as_deref().unwrap_or("docs")),
            excluded_dirs: self
                .content
                .excluded_dirs
                .clone()
                .unwrap_or(defaults.excluded_dirs),
            filtered_files: self
                .content
                .filtered_files
                .clone()
                .unwrap_or(defaults.filtered_files),
        };
    }

    /// Validate configuration values.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError::Validation` if any validation fails.
    pub fn validate(&self) -> Result<(), ConfigError> {
        require_non_empty(
            &self.navigation.quick_start_heading,
            "navigation.quick_start_heading",
        )?;
        for dir in &self.content_resolved.excluded_dirs {
            require_non_empty(dir, "content.excluded_dirs entries")?;
        }
        for file in &self.content_resolved.filtered_files {
            require_non_empty(file, "content.filtered_files entries")?;
        }
        Ok(())
    }
}
