//! Config struct definition and default implementation.

use super::types::*;
use serde::{Deserialize, Serialize};

/// Configuration for the document engine.
///
/// Unknown fields in the YAML are ignored for forward compatibility.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    // =========================================================================
    // Rendering
    // =========================================================================
    /// Field-name fragments that trigger automatic date formatting.
    #[serde(default = "default_date_field_keywords")]
    pub date_field_keywords: Vec<String>,

    /// Fields rendered as `""` rather than `[FIELD]` when missing.
    #[serde(default = "default_blank_when_missing")]
    pub blank_when_missing: Vec<String>,

    /// Currency symbol used by the `currency` helper.
    #[serde(default = "default_currency_symbol")]
    pub currency_symbol: String,

    // =========================================================================
    // Agreement
    // =========================================================================
    /// HTML tag wrapped around each name in formatted name lists
    /// (empty disables the markup).
    #[serde(default = "default_emphasis_tag")]
    pub emphasis_tag: String,

    // =========================================================================
    // Privacy
    // =========================================================================
    /// Whether the pipeline redacts personal data before rendering.
    #[serde(default)]
    pub anonymize: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            date_field_keywords: default_date_field_keywords(),
            blank_when_missing: default_blank_when_missing(),
            currency_symbol: default_currency_symbol(),
            emphasis_tag: default_emphasis_tag(),
            anonymize: false,
        }
    }
}
