//! Application configuration.
//!
//! # Responsibility
//! - Describe runtime knobs for logging, scrolling and catalog strictness.
//! - Load them from JSON with every field defaulted.
//!
//! # Invariants
//! - Unknown keys are rejected so typos surface at startup.
//! - `log_level` is one of `trace|debug|info|warn|error`.
//! - `log_dir`, when set, is absolute.

use crate::catalog::store::DuplicateIdPolicy;
use crate::logging::{default_log_level, normalize_level};
use crate::nav::controller::ScrollBehavior;
use serde::{Deserialize, Serialize};
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::{Path, PathBuf};

/// Top-level configuration document.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub log_level: String,
    /// File logging is disabled when absent.
    pub log_dir: Option<PathBuf>,
    pub scroll_behavior: ScrollBehavior,
    pub duplicate_ids: DuplicateIdPolicy,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level().to_string(),
            log_dir: None,
            scroll_behavior: ScrollBehavior::default(),
            duplicate_ids: DuplicateIdPolicy::default(),
        }
    }
}

impl AppConfig {
    /// Parses and validates a JSON document.
    pub fn from_json_str(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw).map_err(ConfigError::Parse)?;
        config.validate()?;
        Ok(config)
    }

    /// Reads and validates a JSON file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let raw = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_json_str(raw.as_str())
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        normalize_level(self.log_level.as_str()).map_err(ConfigError::InvalidLogLevel)?;
        if let Some(dir) = &self.log_dir {
            if !dir.is_absolute() {
                return Err(ConfigError::RelativeLogDir(dir.clone()));
            }
        }
        Ok(())
    }
}

/// Configuration load errors.
#[derive(Debug)]
pub enum ConfigError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Parse(serde_json::Error),
    InvalidLogLevel(String),
    RelativeLogDir(PathBuf),
}

impl Display for ConfigError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "failed to read config `{}`: {source}", path.display())
            }
            Self::Parse(err) => write!(f, "invalid config document: {err}"),
            Self::InvalidLogLevel(message) => write!(f, "{message}"),
            Self::RelativeLogDir(path) => {
                write!(f, "log_dir must be an absolute path, got `{}`", path.display())
            }
        }
    }
}

impl Error for ConfigError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Parse(err) => Some(err),
            Self::InvalidLogLevel(_) | Self::RelativeLogDir(_) => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{AppConfig, ConfigError};
    use crate::catalog::store::DuplicateIdPolicy;
    use crate::nav::controller::ScrollBehavior;

    #[test]
    fn empty_document_uses_defaults() {
        let config = AppConfig::from_json_str("{}").expect("defaults");
        assert_eq!(config, AppConfig::default());
        assert_eq!(config.scroll_behavior, ScrollBehavior::Smooth);
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::FirstWins);
    }

    #[test]
    fn parses_every_field() {
        let config = AppConfig::from_json_str(
            r#"{
                "log_level": "warn",
                "log_dir": "/var/log/folio",
                "scroll_behavior": "instant",
                "duplicate_ids": "reject"
            }"#,
        )
        .expect("full document");
        assert_eq!(config.log_level, "warn");
        assert_eq!(
            config.log_dir.as_deref(),
            Some(std::path::Path::new("/var/log/folio"))
        );
        assert_eq!(config.scroll_behavior, ScrollBehavior::Instant);
        assert_eq!(config.duplicate_ids, DuplicateIdPolicy::Reject);
    }

    #[test]
    fn rejects_unknown_keys_and_bad_values() {
        let err = AppConfig::from_json_str(r#"{"theme": "dark"}"#).expect_err("unknown key");
        assert!(matches!(err, ConfigError::Parse(_)));

        let err = AppConfig::from_json_str(r#"{"log_level": "loud"}"#).expect_err("bad level");
        assert!(matches!(err, ConfigError::InvalidLogLevel(_)));

        let err =
            AppConfig::from_json_str(r#"{"log_dir": "logs/dev"}"#).expect_err("relative dir");
        assert!(matches!(err, ConfigError::RelativeLogDir(_)));
    }
}
