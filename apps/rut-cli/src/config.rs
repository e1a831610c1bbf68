//! # CLI Configuration
//!
//! ## Configuration Sources
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────────┐
//! │                    Configuration Priority                               │
//! │                                                                         │
//! │  1. Command-line flags (highest priority)                              │
//! │     --policy simple, --rule server                                     │
//! │                                                                         │
//! │  2. Environment Variables                                              │
//! │     RUT_POLICY=database-match                                          │
//! │     RUT_BODY_RULE=full-width                                           │
//! │     RUT_LOG=debug                                                      │
//! │                                                                         │
//! │  3. TOML Config File                                                   │
//! │     --config <PATH>, or                                                │
//! │     ~/.config/rut-kit/rut.toml (Linux)                                 │
//! │     ~/Library/Application Support/cl.rut.rut-kit/rut.toml (macOS)      │
//! │                                                                         │
//! │  4. Default Values (lowest priority)                                   │
//! │     user-entry policy, lenient rule, "warn,rut=info" log filter        │
//! └─────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! ## Configuration File Format
//! ```toml
//! # rut.toml
//! [format]
//! policy = "user-entry"  # database-match | user-entry | simple
//!
//! [validation]
//! rule = "lenient"       # lenient | full-width | server
//!
//! [logging]
//! filter = "warn,rut=info"
//! ```

use std::path::PathBuf;

use rut_core::{BodyRule, FormatPolicy};
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::error::{CliError, CliResult};

/// Env var overriding `[format] policy`.
pub const ENV_POLICY: &str = "RUT_POLICY";
/// Env var overriding `[validation] rule`.
pub const ENV_BODY_RULE: &str = "RUT_BODY_RULE";
/// Env var overriding `[logging] filter`.
pub const ENV_LOG: &str = "RUT_LOG";

// =============================================================================
// Sections
// =============================================================================

/// `[format]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FormatSettings {
    /// Policy used by `rut format` when `--policy` is absent.
    #[serde(default)]
    pub policy: FormatPolicy,
}

/// `[validation]` section.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationSettings {
    /// Body-length rule used by `validate` and `check-file`.
    #[serde(default)]
    pub rule: BodyRule,
}

/// `[logging]` section.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LoggingSettings {
    /// `tracing_subscriber::EnvFilter` directive. `RUST_LOG` still wins.
    #[serde(default = "default_filter")]
    pub filter: String,
}

fn default_filter() -> String {
    "warn,rut=info".to_string()
}

impl Default for LoggingSettings {
    fn default() -> Self {
        LoggingSettings {
            filter: default_filter(),
        }
    }
}

// =============================================================================
// Main Configuration
// =============================================================================

/// Complete CLI configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RutConfig {
    #[serde(default)]
    pub format: FormatSettings,

    #[serde(default)]
    pub validation: ValidationSettings,

    #[serde(default)]
    pub logging: LoggingSettings,
}

impl RutConfig {
    /// Loads configuration from file, environment, and defaults.
    ///
    /// ## Load Order (later overrides earlier)
    /// 1. Default values
    /// 2. Config file (an explicit path must exist; the default one may not)
    /// 3. Environment variables
    ///
    /// Flags are applied by the caller on top of the returned config.
    pub fn load(config_path: Option<PathBuf>) -> CliResult<Self> {
        let mut config = Self::default();

        match config_path {
            Some(path) => {
                if !path.exists() {
                    return Err(CliError::ConfigNotFound(path));
                }
                config = Self::from_file(path)?;
            }
            None => {
                if let Some(path) = Self::default_config_path() {
                    if path.exists() {
                        config = Self::from_file(path)?;
                    } else {
                        debug!(?path, "Config file not found, using defaults");
                    }
                }
            }
        }

        config.apply_env_overrides();
        config.validate()?;

        Ok(config)
    }

    /// Loads config or returns default if load fails.
    pub fn load_or_default(config_path: Option<PathBuf>) -> Self {
        Self::load(config_path).unwrap_or_else(|e| {
            warn!("Failed to load config: {}. Using defaults.", e);
            Self::default()
        })
    }

    /// Parses a config from TOML text.
    pub fn from_toml(contents: &str) -> CliResult<Self> {
        Ok(toml::from_str(contents)?)
    }

    fn from_file(path: PathBuf) -> CliResult<Self> {
        debug!(?path, "Loading config from file");
        let contents =
            std::fs::read_to_string(&path).map_err(|source| CliError::Read { path, source })?;
        Self::from_toml(&contents)
    }

    /// Validates the configuration.
    pub fn validate(&self) -> CliResult<()> {
        if self.logging.filter.trim().is_empty() {
            return Err(CliError::InvalidConfig(
                "logging.filter must not be empty".into(),
            ));
        }
        Ok(())
    }

    /// Applies `RUT_*` environment overrides.
    pub fn apply_env_overrides(&mut self) {
        self.apply_overrides(|key| std::env::var(key).ok());
    }

    /// Applies overrides from any key lookup. Unknown values are logged and
    /// ignored.
    pub fn apply_overrides<F>(&mut self, lookup: F)
    where
        F: Fn(&str) -> Option<String>,
    {
        if let Some(policy) = lookup(ENV_POLICY) {
            match policy.parse::<FormatPolicy>() {
                Ok(parsed) => {
                    debug!(policy = %parsed, "Overriding format policy from environment");
                    self.format.policy = parsed;
                }
                Err(e) => warn!(policy = %policy, "Ignoring {}: {}", ENV_POLICY, e),
            }
        }

        if let Some(rule) = lookup(ENV_BODY_RULE) {
            match rule.parse::<BodyRule>() {
                Ok(parsed) => {
                    debug!(rule = %parsed, "Overriding body rule from environment");
                    self.validation.rule = parsed;
                }
                Err(e) => warn!(rule = %rule, "Ignoring {}: {}", ENV_BODY_RULE, e),
            }
        }

        if let Some(filter) = lookup(ENV_LOG) {
            if filter.trim().is_empty() {
                warn!("Ignoring empty {}", ENV_LOG);
            } else {
                self.logging.filter = filter;
            }
        }
    }

    /// Returns the default config file path.
    pub fn default_config_path() -> Option<PathBuf> {
        directories::ProjectDirs::from("cl", "rut", "rut-kit")
            .map(|dirs| dirs.config_dir().join("rut.toml"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn env(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_default_config() {
        let config = RutConfig::default();
        assert_eq!(config.format.policy, FormatPolicy::UserEntryVariable);
        assert_eq!(config.validation.rule, BodyRule::Lenient);
        assert_eq!(config.logging.filter, "warn,rut=info");
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config = RutConfig::from_toml("[validation]\nrule = \"server\"\n").unwrap();
        assert_eq!(config.validation.rule, BodyRule::Server);
        assert_eq!(config.format.policy, FormatPolicy::UserEntryVariable);
        assert_eq!(config.logging.filter, "warn,rut=info");
    }

    #[test]
    fn test_unknown_policy_in_file_is_rejected() {
        let err = RutConfig::from_toml("[format]\npolicy = \"rainbow\"\n").unwrap_err();
        assert!(matches!(err, CliError::ConfigParse(_)));
    }

    #[test]
    fn test_env_overrides() {
        let mut config = RutConfig::default();
        config.apply_overrides(env(&[
            (ENV_POLICY, "simple"),
            (ENV_BODY_RULE, "strict"),
            (ENV_LOG, "debug"),
        ]));
        assert_eq!(config.format.policy, FormatPolicy::SimpleFixedWidth);
        assert_eq!(config.validation.rule, BodyRule::FullWidth);
        assert_eq!(config.logging.filter, "debug");
    }

    #[test]
    fn test_unknown_env_values_are_ignored() {
        let mut config = RutConfig::default();
        config.apply_overrides(env(&[(ENV_POLICY, "nope"), (ENV_LOG, "  ")]));
        assert_eq!(config, RutConfig::default());
    }

    #[test]
    fn test_config_validation() {
        let mut config = RutConfig::default();
        config.logging.filter = String::new();
        assert!(matches!(config.validate(), Err(CliError::InvalidConfig(_))));
    }

    #[test]
    fn test_missing_explicit_config_fails() {
        let path = PathBuf::from("/nonexistent/rut-kit/rut.toml");
        assert!(matches!(
            RutConfig::load(Some(path.clone())),
            Err(CliError::ConfigNotFound(p)) if p == path
        ));
        assert_eq!(RutConfig::load_or_default(Some(path)).logging.filter, "warn,rut=info");
    }

    #[test]
    fn test_toml_serialization() {
        let mut config = RutConfig::default();
        config.format.policy = FormatPolicy::DatabaseMatchLeft;

        let text = toml::to_string_pretty(&config).unwrap();
        assert!(text.contains("policy = \"database-match\""));

        let parsed = RutConfig::from_toml(&text).unwrap();
        assert_eq!(parsed, config);
    }
}
