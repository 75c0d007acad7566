//! Config loading, validation, and lookup helpers.

use super::model::Config;
use crate::dates::is_date_like_field;
use crate::error::{MinutaError, Result};
use std::path::Path;

impl Config {
    /// Load config from a YAML file.
    ///
    /// Unknown fields in the YAML are silently ignored for forward compatibility.
    ///
    /// # Returns
    ///
    /// * `Ok(Config)` - Successfully loaded and validated config
    /// * `Err(MinutaError::UserError)` - Read error, parse error, or validation failure
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();

        let content = std::fs::read_to_string(path).map_err(|e| {
            MinutaError::UserError(format!(
                "failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;

        Self::from_yaml(&content)
    }

    /// Parse config from a YAML string.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Config = serde_yaml::from_str(yaml)
            .map_err(|e| MinutaError::UserError(format!("failed to parse config YAML: {}", e)))?;

        config.validate()?;
        Ok(config)
    }

    /// Serialize config to YAML string.
    pub fn to_yaml(&self) -> Result<String> {
        serde_yaml::to_string(self).map_err(|e| {
            MinutaError::UserError(format!("failed to serialize config to YAML: {}", e))
        })
    }

    /// Validate config values.
    ///
    /// Validation rules:
    /// - `date_field_keywords` entries must be non-empty
    /// - `emphasis_tag` must be empty or ASCII alphanumeric
    /// - `currency_symbol` must not contain template braces
    pub fn validate(&self) -> Result<()> {
        if self.date_field_keywords.iter().any(|k| k.trim().is_empty()) {
            return Err(MinutaError::UserError(
                "config validation failed: date_field_keywords entries must be non-empty"
                    .to_string(),
            ));
        }

        if !self.emphasis_tag.chars().all(|c| c.is_ascii_alphanumeric()) {
            return Err(MinutaError::UserError(format!(
                "config validation failed: emphasis_tag must be a bare tag name like 'strong' (found '{}')",
                self.emphasis_tag
            )));
        }

        if self.currency_symbol.contains(['{', '}']) {
            return Err(MinutaError::UserError(format!(
                "config validation failed: currency_symbol must not contain braces (found '{}')",
                self.currency_symbol
            )));
        }

        Ok(())
    }

    /// Whether a field renders blank (not as a placeholder) when missing.
    pub fn is_blank_when_missing(&self, field: &str) -> bool {
        self.blank_when_missing.iter().any(|f| f == field)
    }

    /// Whether a field name is date-like under the configured keywords.
    pub fn is_date_field(&self, field: &str) -> bool {
        is_date_like_field(field, &self.date_field_keywords)
    }
}
