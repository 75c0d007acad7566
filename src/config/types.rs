//! Configuration defaults for minuta.

use crate::dates::DEFAULT_DATE_KEYWORDS;

/// Fields that render as an empty string instead of a placeholder when missing.
pub const DEFAULT_BLANK_WHEN_MISSING: &[&str] = &["observacao"];

/// Default field-name fragments that mark a field as date-bearing.
pub fn default_date_field_keywords() -> Vec<String> {
    DEFAULT_DATE_KEYWORDS.iter().map(|k| k.to_string()).collect()
}

/// Default fields rendered blank when missing.
pub fn default_blank_when_missing() -> Vec<String> {
    DEFAULT_BLANK_WHEN_MISSING
        .iter()
        .map(|k| k.to_string())
        .collect()
}

// Default value functions for serde
pub(crate) fn default_emphasis_tag() -> String {
    "strong".to_string()
}
pub(crate) fn default_currency_symbol() -> String {
    "R$".to_string()
}
