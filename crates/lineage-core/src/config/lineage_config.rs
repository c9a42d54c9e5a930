//! Top-level Lineage configuration with layered resolution.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use super::{IdentityConfig, IdentityStrategy, LogConfig, SinkKind};
use crate::constants;
use crate::errors::ConfigError;
use crate::record::RecordFormat;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Programmatic overrides (applied via `apply_overrides`)
/// 2. Environment variables (`LINEAGE_*`)
/// 3. Project config (`lineage.toml` in project root)
/// 4. User config (`~/.lineage/config.toml`)
/// 5. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct LineageConfig {
    pub log: LogConfig,
    pub identity: IdentityConfig,
}

/// Override values that take precedence over every file and env layer.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    pub sink: Option<SinkKind>,
    pub path: Option<String>,
    pub append: Option<bool>,
    pub format: Option<RecordFormat>,
    pub strategy: Option<IdentityStrategy>,
    pub seed: Option<u64>,
}

impl LineageConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path, overrides: Option<&ConfigOverrides>) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        // Layer 4 (lowest priority): user config
        if let Some(user_config_path) = Self::user_config_path() {
            if user_config_path.exists() {
                match Self::merge_toml_file(&mut config, &user_config_path) {
                    Ok(()) => {}
                    Err(e @ ConfigError::ParseError { .. }) => return Err(e),
                    Err(e) => {
                        // Unreadable user config is not fatal.
                        warn!(
                            path = %user_config_path.display(),
                            error = %e,
                            "skipping user config"
                        );
                    }
                }
            }
        }

        // Layer 3: project config
        let project_config_path = root.join(constants::PROJECT_CONFIG_FILENAME);
        if project_config_path.exists() {
            Self::merge_toml_file(&mut config, &project_config_path)?;
        }

        // Layer 2: environment variables
        Self::apply_env_overrides(&mut config);

        // Layer 1 (highest priority): overrides
        if let Some(overrides) = overrides {
            Self::apply_overrides(&mut config, overrides);
        }

        Self::validate(&config)?;

        info!(
            sink = ?config.log.effective_sink(),
            format = ?config.log.effective_format(),
            strategy = ?config.identity.effective_strategy(),
            "lineage config loaded"
        );
        Ok(config)
    }

    /// Load configuration from a TOML string.
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        let config: Self = toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })?;
        Self::validate(&config)?;
        Ok(config)
    }

    /// Validate the configuration values.
    pub fn validate(config: &LineageConfig) -> Result<(), ConfigError> {
        if config.log.effective_sink() == SinkKind::File
            && config.log.effective_path().trim().is_empty()
        {
            return Err(ConfigError::ValidationFailed {
                field: "log.path".to_string(),
                message: "must not be empty when log.sink = \"file\"".to_string(),
            });
        }
        if config.identity.seed == Some(0) {
            return Err(ConfigError::ValidationFailed {
                field: "identity.seed".to_string(),
                message: "must be greater than 0".to_string(),
            });
        }
        Ok(())
    }

    /// Returns the user config path: `~/.lineage/config.toml`.
    fn user_config_path() -> Option<PathBuf> {
        home_dir().map(|h| {
            h.join(constants::USER_CONFIG_DIRNAME)
                .join(constants::USER_CONFIG_FILENAME)
        })
    }

    /// Merge a TOML file into the existing config.
    /// Unknown keys are silently ignored (forward-compatible).
    fn merge_toml_file(config: &mut LineageConfig, path: &Path) -> Result<(), ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|_| ConfigError::FileNotFound {
            path: path.display().to_string(),
        })?;

        let file_config: LineageConfig =
            toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.display().to_string(),
                message: e.to_string(),
            })?;

        Self::merge(config, &file_config);
        Ok(())
    }

    /// Merge `other` into `base`, where `other` values override `base` values
    /// only when `other` has a `Some` value.
    fn merge(base: &mut LineageConfig, other: &LineageConfig) {
        if other.log.sink.is_some() {
            base.log.sink = other.log.sink;
        }
        if other.log.path.is_some() {
            base.log.path = other.log.path.clone();
        }
        if other.log.append.is_some() {
            base.log.append = other.log.append;
        }
        if other.log.format.is_some() {
            base.log.format = other.log.format;
        }
        if other.identity.strategy.is_some() {
            base.identity.strategy = other.identity.strategy;
        }
        if other.identity.seed.is_some() {
            base.identity.seed = other.identity.seed;
        }
    }

    /// Apply environment variable overrides.
    /// Pattern: `LINEAGE_LOG_SINK`, `LINEAGE_IDENTITY_SEED`, etc.
    fn apply_env_overrides(config: &mut LineageConfig) {
        if let Some(v) = parse_env("LINEAGE_LOG_SINK") {
            config.log.sink = Some(v);
        }
        if let Ok(val) = std::env::var("LINEAGE_LOG_PATH") {
            config.log.path = Some(val);
        }
        if let Some(v) = parse_env("LINEAGE_LOG_APPEND") {
            config.log.append = Some(v);
        }
        if let Some(v) = parse_env("LINEAGE_LOG_FORMAT") {
            config.log.format = Some(v);
        }
        if let Some(v) = parse_env("LINEAGE_IDENTITY_STRATEGY") {
            config.identity.strategy = Some(v);
        }
        if let Some(v) = parse_env("LINEAGE_IDENTITY_SEED") {
            config.identity.seed = Some(v);
        }
    }

    /// Apply programmatic overrides (highest priority).
    fn apply_overrides(config: &mut LineageConfig, overrides: &ConfigOverrides) {
        if let Some(v) = overrides.sink {
            config.log.sink = Some(v);
        }
        if let Some(ref v) = overrides.path {
            config.log.path = Some(v.clone());
        }
        if let Some(v) = overrides.append {
            config.log.append = Some(v);
        }
        if let Some(v) = overrides.format {
            config.log.format = Some(v);
        }
        if let Some(v) = overrides.strategy {
            config.identity.strategy = Some(v);
        }
        if let Some(v) = overrides.seed {
            config.identity.seed = Some(v);
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}

/// Read and parse an env var; unparseable values are skipped with a warning.
fn parse_env<T>(key: &str) -> Option<T>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    let raw = std::env::var(key).ok()?;
    match raw.parse::<T>() {
        Ok(v) => Some(v),
        Err(e) => {
            warn!(key, value = %raw, error = %e, "ignoring invalid environment override");
            None
        }
    }
}

/// Cross-platform home directory resolution.
fn home_dir() -> Option<PathBuf> {
    std::env::var_os("HOME")
        .or_else(|| std::env::var_os("USERPROFILE"))
        .map(PathBuf::from)
}
