//! Configuration types and management for stubgen.
//!
//! The configuration is intentionally small: it controls which bindings count
//! as functions and how the output file is named. The test block template is
//! fixed and not part of the configuration.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::core::errors::{Result, StubgenError};

/// Main configuration for stub test generation
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct StubgenConfig {
    /// Binding discovery settings
    #[serde(default)]
    pub discovery: DiscoveryConfig,

    /// Output naming settings
    #[serde(default)]
    pub output: OutputConfig,
}

impl StubgenConfig {
    /// Load configuration from a YAML file
    pub fn from_yaml_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            StubgenError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_yaml::from_str(&content).map_err(Into::into)
    }

    /// Load configuration from a JSON file
    pub fn from_json_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let content = std::fs::read_to_string(&path).map_err(|e| {
            StubgenError::io(format!("Failed to read config file: {}", path.display()), e)
        })?;

        serde_json::from_str(&content).map_err(Into::into)
    }

    /// Load configuration, picking the format from the file extension.
    ///
    /// `.json` files are read as JSON; everything else is treated as YAML.
    pub fn from_file(path: impl Into<PathBuf>) -> Result<Self> {
        let path = path.into();
        let config = match path.extension().and_then(|ext| ext.to_str()) {
            Some("json") => Self::from_json_file(path)?,
            _ => Self::from_yaml_file(path)?,
        };
        config.validate()?;
        Ok(config)
    }

    /// Validate the configuration
    pub fn validate(&self) -> Result<()> {
        self.output.validate()
    }
}

/// Controls which syntactic bindings are treated as testable functions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiscoveryConfig {
    /// Require the right-hand side of `exports.x = ...` to be a function value
    pub strict_exports: bool,

    /// Treat `function*` declarations and expressions as functions
    pub include_generators: bool,
}

impl Default for DiscoveryConfig {
    fn default() -> Self {
        Self {
            strict_exports: false,
            include_generators: true,
        }
    }
}

/// Controls the name of the generated test file
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Infix inserted before the extension: `math.js` becomes `math.<suffix>.js`
    pub test_suffix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            test_suffix: "test".to_string(),
        }
    }
}

impl OutputConfig {
    /// Validate output configuration
    pub fn validate(&self) -> Result<()> {
        if self.test_suffix.is_empty() {
            return Err(StubgenError::config_field(
                "test_suffix must not be empty",
                "output.test_suffix",
            ));
        }

        if !self
            .test_suffix
            .chars()
            .all(|c| c.is_ascii_alphanumeric() || c == '_' || c == '-')
        {
            return Err(StubgenError::config_field(
                format!(
                    "test_suffix may only contain letters, digits, '_' and '-', got '{}'",
                    self.test_suffix
                ),
                "output.test_suffix",
            ));
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::tempdir;

    #[test]
    fn test_default_config_is_valid() {
        let config = StubgenConfig::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.output.test_suffix, "test");
        assert!(!config.discovery.strict_exports);
        assert!(config.discovery.include_generators);
    }

    #[test]
    fn test_suffix_validation() {
        let mut config = StubgenConfig::default();

        config.output.test_suffix = "spec".to_string();
        assert!(config.validate().is_ok());

        config.output.test_suffix = String::new();
        assert!(config.validate().is_err());

        config.output.test_suffix = "../evil".to_string();
        let err = config.validate().unwrap_err();
        assert!(matches!(
            err,
            StubgenError::Config { field: Some(ref f), .. } if f == "output.test_suffix"
        ));
    }

    #[test]
    fn test_partial_yaml_uses_defaults() {
        let config: StubgenConfig = serde_yaml::from_str("discovery:\n  strict_exports: true\n")
            .expect("partial config should parse");

        assert!(config.discovery.strict_exports);
        assert!(config.discovery.include_generators);
        assert_eq!(config.output.test_suffix, "test");
    }

    #[test]
    fn test_yaml_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stubgen.yml");
        std::fs::write(
            &path,
            "discovery:\n  strict_exports: true\n  include_generators: false\noutput:\n  test_suffix: spec\n",
        )
        .unwrap();

        let loaded = StubgenConfig::from_file(&path).unwrap();
        assert!(loaded.discovery.strict_exports);
        assert!(!loaded.discovery.include_generators);
        assert_eq!(loaded.output.test_suffix, "spec");
    }

    #[test]
    fn test_json_config_file() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stubgen.json");
        std::fs::write(&path, r#"{"output": {"test_suffix": "unit"}}"#).unwrap();

        let loaded = StubgenConfig::from_file(&path).unwrap();
        assert_eq!(loaded.output.test_suffix, "unit");
        assert!(!loaded.discovery.strict_exports);
    }

    #[test]
    fn test_invalid_file_contents_are_rejected() {
        let dir = tempdir().unwrap();
        let path = dir.path().join("stubgen.yml");
        std::fs::write(&path, "output:\n  test_suffix: \"a b\"\n").unwrap();

        assert!(StubgenConfig::from_file(&path).is_err());
    }

    #[test]
    fn test_missing_config_file() {
        let err = StubgenConfig::from_file("/definitely/not/here.yml").unwrap_err();
        assert!(matches!(err, StubgenError::Io { .. }));
    }
}
