//! Application configuration.
//!
//! [`AppConfig`] is loaded once at startup and passed down by value.  The
//! CLI layer owns config; the core crate never sees it.
//!
//! # Resolution order (highest priority first)
//!
//! 1. CLI flags (handled at the call-site, not here)
//! 2. `BACKSTRAP__SECTION__KEY` environment variables
//! 3. Config file (`--config FILE`, or the platform config directory)
//! 4. Built-in defaults (always present)

use std::path::{Path, PathBuf};

use anyhow::Context as _;
use config::{Config, Environment, File, FileFormat};
use serde::{Deserialize, Serialize};
use tracing::debug;

const ENV_PREFIX: &str = "BACKSTRAP";
const ENV_SEPARATOR: &str = "__";

/// Application configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Answers used when a flag is not given.
    pub defaults: Defaults,
    pub output: OutputConfig,
    pub install: InstallConfig,
}

/// Project defaults. Values are parsed the same way as the CLI flags, so
/// `ts`, `pg` and `mongo` are accepted here too.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Defaults {
    pub language: String,
    pub framework: String,
    pub database: String,
    pub orm: String,
    pub mvc: bool,
    pub extras: bool,
}

impl Default for Defaults {
    fn default() -> Self {
        Self {
            language: "javascript".into(),
            framework: "express".into(),
            database: "none".into(),
            orm: "none".into(),
            mvc: true,
            extras: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    pub no_color: bool,
    /// `auto`, `human` or `plain`.
    pub format: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            no_color: false,
            format: "auto".into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InstallConfig {
    /// Run the package manager after writing the project.
    pub enabled: bool,
    /// Per-command limit in seconds. `0` disables the limit.
    pub timeout_secs: u64,
}

impl Default for InstallConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            timeout_secs: 600,
        }
    }
}

impl AppConfig {
    /// Load configuration: defaults, then the config file, then the
    /// environment.
    ///
    /// `config_file` is the path given with `--config`; `None` uses
    /// [`AppConfig::config_path`]. A missing file is not an error.
    pub fn load(config_file: Option<&Path>) -> anyhow::Result<Self> {
        let path = Self::active_path(config_file);
        debug!(path = %path.display(), exists = path.exists(), "Loading configuration");

        let defaults = Config::try_from(&Self::default())
            .context("Failed to build default configuration")?;

        Config::builder()
            .add_source(defaults)
            .add_source(File::from(path.as_path()).format(FileFormat::Toml).required(false))
            .add_source(
                Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator(ENV_SEPARATOR)
                    .separator(ENV_SEPARATOR)
                    .try_parsing(true),
            )
            .build()
            .with_context(|| format!("Failed to read configuration from {}", path.display()))?
            .try_deserialize()
            .context("Invalid configuration")
    }

    /// Path to the default configuration file.
    ///
    /// Uses `directories::ProjectDirs` for cross-platform correctness,
    /// falling back to `.backstrap.toml` in the current directory.
    pub fn config_path() -> PathBuf {
        directories::ProjectDirs::from("dev", "backstrap", "backstrap")
            .map(|d| d.config_dir().join("config.toml"))
            .unwrap_or_else(|| PathBuf::from(".backstrap.toml"))
    }

    /// The file `--config` points at, or the default location.
    pub fn active_path(config_file: Option<&Path>) -> PathBuf {
        config_file
            .map(Path::to_path_buf)
            .unwrap_or_else(Self::config_path)
    }

    /// Render as TOML, the format `init` writes.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }
}
