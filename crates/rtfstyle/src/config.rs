//! Configuration naming the optional style sheet and extensions files.
//!
//! ```yaml
//! stylesheet_file: doc/rtf-style.cfg
//! extensions_file: doc/rtf-extensions.cfg
//! ```

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::ConfigError;

/// Which user files to apply on top of the built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct RtfConfig {
    /// Style sheet with per-style overrides.
    #[serde(default)]
    pub stylesheet_file: Option<PathBuf>,
    /// Extensions file with document information fields.
    #[serde(default)]
    pub extensions_file: Option<PathBuf>,
}

impl RtfConfig {
    /// A configuration that uses the built-in defaults only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the style sheet file.
    pub fn with_stylesheet(mut self, path: impl Into<PathBuf>) -> Self {
        self.stylesheet_file = Some(path.into());
        self
    }

    /// Sets the extensions file.
    pub fn with_extensions(mut self, path: impl Into<PathBuf>) -> Self {
        self.extensions_file = Some(path.into());
        self
    }

    /// Parses a configuration from YAML.
    ///
    /// # Errors
    ///
    /// Fails on malformed YAML or unknown keys.
    pub fn from_yaml(yaml: &str) -> Result<Self, ConfigError> {
        Ok(serde_yaml::from_str(yaml)?)
    }

    /// Reads and parses a YAML configuration file.
    ///
    /// # Errors
    ///
    /// Fails if the file cannot be read or does not parse.
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let path = path.as_ref();
        let yaml = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_yaml(&yaml)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_yaml_both_files() {
        let config = RtfConfig::from_yaml(
            "stylesheet_file: style.cfg\nextensions_file: ext.cfg\n",
        )
        .unwrap();
        assert_eq!(
            config,
            RtfConfig::new()
                .with_stylesheet("style.cfg")
                .with_extensions("ext.cfg")
        );
    }

    #[test]
    fn test_from_yaml_fields_are_optional() {
        let config = RtfConfig::from_yaml("extensions_file: ext.cfg\n").unwrap();
        assert_eq!(config.stylesheet_file, None);
        assert_eq!(config.extensions_file, Some(PathBuf::from("ext.cfg")));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_keys() {
        let err = RtfConfig::from_yaml("style_sheet: x\n").unwrap_err();
        assert!(matches!(err, ConfigError::Yaml(_)));
    }

    #[test]
    fn test_from_file_missing() {
        let err = RtfConfig::from_file("/nonexistent/rtfstyle.yaml").unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/nonexistent/rtfstyle.yaml"));
    }
}
