//! Configuration types for pstore.
//!
//! [`Config::load`] layers, in order: the embedded defaults, the user file at
//! `~/.config/pstore/config.toml` (created with the defaults if it does not yet
//! exist), and `PSTORE__SECTION__KEY` environment variables.
//! [`Config::from_file`] swaps the user file for an explicit one.
//! [`Config::defaults`] returns the embedded defaults without touching the
//! filesystem (useful in tests).

use serde::Deserialize;
use std::path::{Path, PathBuf};

use crate::types::Strategy;

// ---------------------------------------------------------------------------
// Embedded defaults
// ---------------------------------------------------------------------------

const DEFAULT_CONFIG: &str = r#"
[source]
path = "./data/1M.prime"

[loader]
strategy      = "field-split"
capacity_hint = 1000000
verify_order  = false

[trace]
enabled = false
"#;

const ENV_PREFIX: &str = "PSTORE";

// ---------------------------------------------------------------------------
// Public config types
// ---------------------------------------------------------------------------

/// Top-level configuration, passed explicitly to the construction entry points.
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub source: SourceConfig,
    #[serde(default)]
    pub loader: LoaderConfig,
    #[serde(default)]
    pub trace: TraceConfig,
}

/// `[source]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct SourceConfig {
    /// File to load; `-` reads standard input.
    #[serde(default = "default_path")]
    pub path: PathBuf,
}

fn default_path() -> PathBuf { PathBuf::from("./data/1M.prime") }

impl Default for SourceConfig {
    fn default() -> Self {
        Self { path: default_path() }
    }
}

/// `[loader]` section of `config.toml`.
#[derive(Debug, Clone, Deserialize)]
pub struct LoaderConfig {
    #[serde(default = "default_strategy")]
    pub strategy: Strategy,
    /// Slots preallocated by the fixed-capacity loader.
    #[serde(default = "default_capacity_hint")]
    pub capacity_hint: usize,
    /// Also check ascending order for the scanning loaders. The field-split
    /// loader always checks.
    #[serde(default)]
    pub verify_order: bool,
    /// Time the read/parse/build phases through [`crate::trace`]. Not read
    /// from the file; [`Config::loader`] fills it from `[trace]`.
    #[serde(skip)]
    pub trace: bool,
}

fn default_strategy() -> Strategy { Strategy::FieldSplit }
fn default_capacity_hint() -> usize { 1_000_000 }

impl Default for LoaderConfig {
    fn default() -> Self {
        Self {
            strategy: default_strategy(),
            capacity_hint: default_capacity_hint(),
            verify_order: false,
            trace: false,
        }
    }
}

/// `[trace]` section of `config.toml`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct TraceConfig {
    #[serde(default)]
    pub enabled: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self::defaults()
    }
}

impl Config {
    /// Load from `~/.config/pstore/config.toml`, layered on top of the built-in
    /// defaults and under the environment. Creates the file with defaults if it
    /// does not exist.
    pub fn load() -> anyhow::Result<Self> {
        let path = config_path();

        if !path.exists() {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)?;
            }
            std::fs::write(&path, DEFAULT_CONFIG.trim_start())?;
        }

        Self::layered(&path, false)
    }

    /// Load from an explicit file, which must exist.
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        Self::layered(path, true)
    }

    /// Return the built-in defaults without touching the filesystem.
    pub fn defaults() -> Self {
        config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .build()
            .expect("built-in default config must be valid TOML")
            .try_deserialize::<Config>()
            .expect("built-in default config must deserialize correctly")
    }

    /// The loader section with the `[trace]` switch folded in.
    ///
    /// This is the only place `LoaderConfig::trace` is set from config; the
    /// stored `loader` section always carries `trace: false`.
    pub fn loader(&self) -> LoaderConfig {
        LoaderConfig {
            trace: self.trace.enabled,
            ..self.loader.clone()
        }
    }

    fn layered(path: &Path, required: bool) -> anyhow::Result<Self> {
        let cfg: Config = config::Config::builder()
            .add_source(config::File::from_str(DEFAULT_CONFIG, config::FileFormat::Toml))
            .add_source(config::File::from(path).required(required))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()?;
        Ok(cfg)
    }
}

// ---------------------------------------------------------------------------
// Path helpers
// ---------------------------------------------------------------------------

fn config_path() -> PathBuf {
    std::env::var("XDG_CONFIG_HOME")
        .map(PathBuf::from)
        .unwrap_or_else(|_| {
            PathBuf::from(std::env::var("HOME").unwrap_or_else(|_| ".".to_string()))
                .join(".config")
        })
        .join("pstore")
        .join("config.toml")
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
