//! Configuration management with layered loading
//!
//! Precedence (lowest to highest):
//! 1. Compiled defaults
//! 2. Global config: `$XDG_CONFIG_HOME/nestcol/nestcol.toml`
//! 3. Local config: `<dir>/.nestcol.toml` (usually the working directory)
//! 4. Environment variables: `NESTCOL_*` prefix

use std::fmt;
use std::path::{Path, PathBuf};
use std::str::FromStr;

use config::{Config, ConfigError, Environment};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};

use crate::application::ApplicationError;
use crate::domain::SearchDepth;

/// How boards are printed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    /// Indented tree
    #[default]
    Tree,
    /// Board JSON, same shape as the input format
    Json,
}

impl FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "tree" => Ok(OutputFormat::Tree),
            "json" => Ok(OutputFormat::Json),
            other => Err(format!(
                "unknown output format '{}', expected 'tree' or 'json'",
                other
            )),
        }
    }
}

impl fmt::Display for OutputFormat {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OutputFormat::Tree => write!(f, "tree"),
            OutputFormat::Json => write!(f, "json"),
        }
    }
}

/// Raw settings for intermediate parsing (`None` → not specified, inherit).
#[derive(Debug, Clone, Deserialize, Default)]
#[serde(default)]
pub struct RawSettings {
    pub board_file: Option<PathBuf>,
    pub search_depth: Option<SearchDepth>,
    pub output: Option<OutputFormat>,
}

/// Unified configuration for nestcol.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(default)]
pub struct Settings {
    /// Board JSON loaded on start (default: built-in seed board)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub board_file: Option<PathBuf>,
    /// Group lookup depth (default: recursive)
    pub search_depth: SearchDepth,
    /// Output format (default: tree)
    pub output: OutputFormat,
}

/// Get the XDG config directory for nestcol.
pub fn global_config_dir() -> Option<PathBuf> {
    ProjectDirs::from("", "", "nestcol").map(|dirs| dirs.config_dir().to_path_buf())
}

/// Get the path to the global config file.
pub fn global_config_path() -> Option<PathBuf> {
    global_config_dir().map(|dir| dir.join("nestcol.toml"))
}

/// Get the path to the local config file in `dir`.
pub fn local_config_path(dir: &Path) -> PathBuf {
    dir.join(".nestcol.toml")
}

/// Load a TOML file into RawSettings for manual merging.
fn load_raw_settings(path: &Path) -> Result<RawSettings, ApplicationError> {
    let content = std::fs::read_to_string(path).map_err(|e| ApplicationError::Config {
        message: format!("read {}: {}", path.display(), e),
    })?;
    toml::from_str(&content).map_err(|e| ApplicationError::Config {
        message: format!("parse {}: {}", path.display(), e),
    })
}

impl Settings {
    /// Expand `~`, `$VAR` and `${VAR}` in `board_file`.
    fn expand_paths(&mut self) -> Result<(), ApplicationError> {
        let Some(board_file) = &self.board_file else {
            return Ok(());
        };
        let raw = board_file.to_string_lossy().into_owned();
        let expanded = shellexpand::full(&raw)
            .map_err(|e| ApplicationError::Config {
                message: format!("expand board_file {}: {}", raw, e),
            })?
            .into_owned();
        self.board_file = Some(PathBuf::from(expanded));
        Ok(())
    }

    /// Overlay wins wherever it specifies a value.
    fn merge_with(&self, overlay: &RawSettings) -> Self {
        Self {
            board_file: overlay
                .board_file
                .clone()
                .or_else(|| self.board_file.clone()),
            search_depth: overlay.search_depth.unwrap_or(self.search_depth),
            output: overlay.output.unwrap_or(self.output),
        }
    }

    /// Load settings with layered precedence.
    ///
    /// # Arguments
    /// * `local_dir` - Optional directory holding a `.nestcol.toml`
    ///
    /// # Precedence (lowest to highest)
    /// 1. Compiled defaults
    /// 2. Global config: `$XDG_CONFIG_HOME/nestcol/nestcol.toml`
    /// 3. Local config: `<local_dir>/.nestcol.toml`
    /// 4. Environment variables: `NESTCOL_*` prefix
    pub fn load(local_dir: Option<&Path>) -> Result<Self, ApplicationError> {
        let mut current = Self::default();

        if let Some(global_path) = global_config_path() {
            if global_path.exists() {
                let raw = load_raw_settings(&global_path)?;
                current = current.merge_with(&raw);
            }
        }

        if let Some(dir) = local_dir {
            current = current.merge_local(dir)?;
        }

        current = Self::apply_env_overrides(current)?;
        current.expand_paths()?;

        Ok(current)
    }

    /// Merge `<dir>/.nestcol.toml` onto self, if present.
    pub fn merge_local(&self, dir: &Path) -> Result<Self, ApplicationError> {
        let local_path = local_config_path(dir);
        if !local_path.exists() {
            return Ok(self.clone());
        }
        let raw = load_raw_settings(&local_path)?;
        Ok(self.merge_with(&raw))
    }

    /// Apply NESTCOL_* environment variables as explicit overrides.
    fn apply_env_overrides(mut settings: Self) -> Result<Self, ApplicationError> {
        let config = Config::builder()
            .add_source(
                Environment::with_prefix("NESTCOL")
                    .prefix_separator("_")
                    .separator("__"),
            )
            .build()
            .map_err(config_err)?;

        if let Ok(val) = config.get_string("board_file") {
            settings.board_file = Some(PathBuf::from(val));
        }
        if let Ok(val) = config.get_string("search_depth") {
            settings.search_depth = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }
        if let Ok(val) = config.get_string("output") {
            settings.output = val
                .parse()
                .map_err(|message| ApplicationError::Config { message })?;
        }

        Ok(settings)
    }

    /// Show the effective configuration as TOML.
    pub fn to_toml(&self) -> Result<String, ApplicationError> {
        toml::to_string_pretty(self).map_err(|e| ApplicationError::Config {
            message: format!("serialize config: {e}"),
        })
    }

    /// Generate a template config file.
    pub fn template() -> String {
        r#"# nestcol configuration
#
# Locations (by precedence, lowest to highest):
#   Global: ~/.config/nestcol/nestcol.toml
#   Local:  ./.nestcol.toml
#   Env:    NESTCOL_* environment variables (e.g. NESTCOL_SEARCH_DEPTH=shallow)

# Board JSON to load instead of the built-in seed board
# board_file = "~/boards/main.json"

# Group lookup: "recursive" searches every nesting level,
# "shallow" only the direct children of top-level columns
# search_depth = "recursive"

# Output: "tree" or "json"
# output = "tree"
"#
        .to_string()
    }
}

fn config_err(e: ConfigError) -> ApplicationError {
    ApplicationError::Config {
        message: e.to_string(),
    }
}
