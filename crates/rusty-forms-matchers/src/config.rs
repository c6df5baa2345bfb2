// File: src/config.rs
// Purpose: Matcher configuration parsing from rusty-forms-matchers.toml

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;

/// Matcher configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct MatcherConfig {
    #[serde(default)]
    pub validator: ValidatorConfig,

    #[serde(default)]
    pub descriptions: DescriptionConfig,
}

/// How the validator observes validation
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct ValidatorConfig {
    /// Catch range overflow signals inside `messages()` (default: false)
    ///
    /// When off, only an explicit `capture_range_error` call records them and
    /// an overflow raised during validation surfaces as an error.
    #[serde(default = "default_false")]
    pub capture_range_errors: bool,
}

/// Assertion output rendering
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct DescriptionConfig {
    /// Append attribute values to listed errors (default: true)
    #[serde(default = "default_true")]
    pub include_attribute_values: bool,
}

fn default_true() -> bool {
    true
}

fn default_false() -> bool {
    false
}

impl Default for ValidatorConfig {
    fn default() -> Self {
        Self {
            capture_range_errors: default_false(),
        }
    }
}

impl Default for DescriptionConfig {
    fn default() -> Self {
        Self {
            include_attribute_values: default_true(),
        }
    }
}

impl MatcherConfig {
    /// Load configuration from a TOML file
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();

        if !path.exists() {
            return Ok(Self::default());
        }

        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read matcher config: {:?}", path))?;

        if content.trim().is_empty() {
            return Ok(Self::default());
        }

        let config: MatcherConfig = toml::from_str(&content)
            .with_context(|| format!("Failed to parse matcher config: {:?}", path))?;

        Ok(config)
    }

    /// Load configuration from ./rusty-forms-matchers.toml
    pub fn load_default() -> Result<Self> {
        Self::load("rusty-forms-matchers.toml")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = MatcherConfig::default();
        assert!(!config.validator.capture_range_errors);
        assert!(config.descriptions.include_attribute_values);
    }

    fn write_config(name: &str, content: &str) -> std::path::PathBuf {
        let path = std::env::temp_dir().join(format!(
            "rusty-forms-matchers-{}-{}.toml",
            std::process::id(),
            name
        ));
        fs::write(&path, content).unwrap();
        path
    }

    #[test]
    fn test_empty_config() {
        let config: MatcherConfig = toml::from_str("").unwrap();
        assert_eq!(config, MatcherConfig::default());
    }

    #[test]
    fn test_load_blank_file_uses_defaults() {
        let path = write_config("blank", "  \n\t\n");
        let config = MatcherConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert_eq!(config, MatcherConfig::default());
    }

    #[test]
    fn test_load_file() {
        let path = write_config(
            "custom",
            "[validator]\ncapture_range_errors = true\n",
        );
        let config = MatcherConfig::load(&path).unwrap();
        fs::remove_file(&path).unwrap();
        assert!(config.validator.capture_range_errors);
        assert!(config.descriptions.include_attribute_values);
    }

    #[test]
    fn test_load_malformed_file() {
        let path = write_config("malformed", "[validator\ncapture_range_errors = maybe\n");
        let error = MatcherConfig::load(&path).unwrap_err();
        fs::remove_file(&path).unwrap();
        assert!(error.to_string().starts_with("Failed to parse matcher config"));
        assert!(error.chain().count() > 1);
    }

    #[test]
    fn test_custom_config() {
        let toml = r#"
            [validator]
            capture_range_errors = true

            [descriptions]
            include_attribute_values = false
        "#;
        let config: MatcherConfig = toml::from_str(toml).unwrap();
        assert!(config.validator.capture_range_errors);
        assert!(!config.descriptions.include_attribute_values);
    }

    #[test]
    fn test_missing_file_uses_defaults() {
        let config = MatcherConfig::load("does/not/exist/rusty-forms-matchers.toml").unwrap();
        assert_eq!(config, MatcherConfig::default());
    }
}
