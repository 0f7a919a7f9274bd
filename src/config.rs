//! Settings that steer the demos: target platform, default strategy and the
//! decorator layers. Read from TOML or JSON.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::debug;

use crate::behavioral::strategy::Operation;
use crate::creational::Platform;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse config at line {line}, column {col}: {message}")]
    Parse {
        line: usize,
        col: usize,
        message: String,
    },

    #[error("invalid value for '{field}': {reason}")]
    InvalidValue { field: String, reason: String },
}

impl ConfigError {
    pub fn parse(line: usize, col: usize, message: impl Into<String>) -> Self {
        Self::Parse {
            line,
            col,
            message: message.into(),
        }
    }
}

impl From<serde_json::Error> for ConfigError {
    fn from(err: serde_json::Error) -> Self {
        ConfigError::parse(err.line(), err.column(), err.to_string())
    }
}

impl From<toml::de::Error> for ConfigError {
    fn from(err: toml::de::Error) -> Self {
        ConfigError::parse(0, 0, err.message())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct CatalogConfig {
    pub platform: Platform,
    pub color: bool,
    pub encryption_key: Option<String>,
    pub compression: bool,
    pub strategy: Operation,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            platform: Platform::default(),
            color: true,
            encryption_key: None,
            compression: false,
            strategy: Operation::default(),
        }
    }
}

impl CatalogConfig {
    pub fn from_json(content: &str) -> Result<Self, ConfigError> {
        serde_json::from_str(content).map_err(ConfigError::from)
    }

    pub fn from_toml(content: &str) -> Result<Self, ConfigError> {
        toml::from_str(content).map_err(ConfigError::from)
    }

    /// Parse by extension; anything else is sniffed (a leading `{` means JSON).
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;

        let format = path
            .extension()
            .and_then(|ext| ext.to_str())
            .map(|ext| ext.to_ascii_lowercase());

        let config = match format.as_deref() {
            Some("json") => Self::from_json(&content)?,
            Some("toml") => Self::from_toml(&content)?,
            _ => {
                if content.trim_start().starts_with('{') {
                    Self::from_json(&content)?
                } else {
                    Self::from_toml(&content)?
                }
            }
        };
        config.validate()?;
        debug!(path = %path.display(), ?config, "loaded config");
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if let Some(key) = &self.encryption_key {
            if key.trim().is_empty() {
                return Err(ConfigError::InvalidValue {
                    field: "encryption_key".to_string(),
                    reason: "must not be empty".to_string(),
                });
            }
        }
        Ok(())
    }

    /// `color` from the file, overridden by a set `NO_COLOR`.
    pub fn use_colors(&self) -> bool {
        self.color && env::var_os("NO_COLOR").map_or(true, |v| v.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::{Builder, NamedTempFile};

    #[test]
    fn test_defaults() {
        let config = CatalogConfig::default();
        assert_eq!(config.platform, Platform::Windows);
        assert_eq!(config.strategy, Operation::Add);
        assert!(config.color);
        assert!(config.encryption_key.is_none());
        assert!(!config.compression);
    }

    #[test]
    fn test_toml_missing_fields_default() {
        let config = CatalogConfig::from_toml("platform = \"mac\"\n").unwrap();
        assert_eq!(config.platform, Platform::Mac);
        assert!(config.color);
    }

    #[test]
    fn test_json_full() {
        let config = CatalogConfig::from_json(
            r#"{"platform": "web", "color": false, "encryption_key": "k",
                "compression": true, "strategy": "multiply"}"#,
        )
        .unwrap();
        assert_eq!(config.platform, Platform::Web);
        assert_eq!(config.strategy, Operation::Multiply);
        assert_eq!(config.encryption_key.as_deref(), Some("k"));
        assert!(config.compression);
        assert!(!config.color);
    }

    #[test]
    fn test_unknown_platform_is_parse_error() {
        let err = CatalogConfig::from_toml("platform = \"amiga\"\n").unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
    }

    #[test]
    fn test_unknown_field_rejected() {
        assert!(CatalogConfig::from_json(r#"{"colour": true}"#).is_err());
    }

    #[test]
    fn test_json_error_has_position() {
        match CatalogConfig::from_json("{\n  \"color\": }").unwrap_err() {
            ConfigError::Parse { line, .. } => assert_eq!(line, 2),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_empty_key_fails_validation() {
        let config = CatalogConfig {
            encryption_key: Some("  ".into()),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ConfigError::InvalidValue { field, .. }) if field == "encryption_key"
        ));
    }

    #[test]
    fn test_load_by_extension() {
        let mut file = Builder::new().suffix(".toml").tempfile().unwrap();
        writeln!(file, "strategy = \"subtract\"\ncompression = true").unwrap();
        let config = CatalogConfig::load(file.path()).unwrap();
        assert_eq!(config.strategy, Operation::Subtract);
        assert!(config.compression);
    }

    #[test]
    fn test_load_sniffs_json_without_extension() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, r#"{{"platform": "mac"}}"#).unwrap();
        assert_eq!(CatalogConfig::load(file.path()).unwrap().platform, Platform::Mac);
    }

    #[test]
    fn test_load_runs_validation() {
        let mut file = Builder::new().suffix(".json").tempfile().unwrap();
        writeln!(file, r#"{{"encryption_key": ""}}"#).unwrap();
        assert!(matches!(
            CatalogConfig::load(file.path()),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn test_load_missing_file() {
        let err = CatalogConfig::load(Path::new("/nonexistent/patterns.toml")).unwrap_err();
        assert!(matches!(err, ConfigError::Read { .. }));
    }
}
