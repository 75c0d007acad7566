//! Field values.

use crate::names::join_names;
use serde::{Deserialize, Serialize, Serializer};
use std::borrow::Cow;

/// Value stored under a field key.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(from = "RawValue")]
pub enum FieldValue {
    /// Plain text.
    Text(String),
    /// A small list of strings, e.g. guarantor names.
    List(Vec<String>),
}

impl FieldValue {
    /// The text content, if this is a `Text` value.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            FieldValue::Text(text) => Some(text),
            FieldValue::List(_) => None,
        }
    }

    /// Whether the value is empty or whitespace-only (an empty list is blank).
    pub fn is_blank(&self) -> bool {
        match self {
            FieldValue::Text(text) => text.trim().is_empty(),
            FieldValue::List(items) => items.is_empty(),
        }
    }

    /// Interpret the value as a list.
    ///
    /// `List` values are returned as-is. `Text` is decoded as a JSON array;
    /// non-string elements are converted to their JSON text. Anything else
    /// (plain text, a JSON object, malformed JSON) yields `None`.
    pub fn to_list(&self) -> Option<Vec<String>> {
        match self {
            FieldValue::List(items) => Some(items.clone()),
            FieldValue::Text(text) => {
                let items: Vec<serde_json::Value> = serde_json::from_str(text).ok()?;
                Some(
                    items
                        .into_iter()
                        .map(|item| match item {
                            serde_json::Value::String(s) => s,
                            other => other.to_string(),
                        })
                        .collect(),
                )
            }
        }
    }

    /// Text used when the value is substituted into a document.
    ///
    /// Lists are joined with the Portuguese list rule.
    pub fn display_text(&self) -> Cow<'_, str> {
        match self {
            FieldValue::Text(text) => Cow::Borrowed(text),
            FieldValue::List(items) => Cow::Owned(join_names(items)),
        }
    }

    /// The serialized form: text as-is, lists as a JSON array string.
    pub fn to_serialized(&self) -> String {
        match self {
            FieldValue::Text(text) => text.clone(),
            FieldValue::List(items) => serde_json::to_string(items).unwrap_or_default(),
        }
    }
}

impl Serialize for FieldValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            FieldValue::Text(text) => serializer.serialize_str(text),
            FieldValue::List(items) => items.serialize(serializer),
        }
    }
}

impl From<String> for FieldValue {
    fn from(text: String) -> Self {
        FieldValue::Text(text)
    }
}

impl From<&str> for FieldValue {
    fn from(text: &str) -> Self {
        FieldValue::Text(text.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(text: &String) -> Self {
        FieldValue::Text(text.clone())
    }
}

impl From<Vec<String>> for FieldValue {
    fn from(items: Vec<String>) -> Self {
        FieldValue::List(items)
    }
}

/// Scalar as it may appear in input JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawScalar {
    Text(String),
    Bool(bool),
    Integer(i64),
    Float(f64),
}

impl RawScalar {
    fn into_text(self) -> String {
        match self {
            RawScalar::Text(text) => text,
            RawScalar::Bool(b) => b.to_string(),
            RawScalar::Integer(n) => n.to_string(),
            RawScalar::Float(x) => x.to_string(),
        }
    }
}

/// Value as it may appear in input JSON.
#[derive(Deserialize)]
#[serde(untagged)]
enum RawValue {
    Scalar(RawScalar),
    List(Vec<RawScalar>),
}

impl From<RawValue> for FieldValue {
    fn from(raw: RawValue) -> Self {
        match raw {
            RawValue::Scalar(scalar) => FieldValue::Text(scalar.into_text()),
            RawValue::List(items) => {
                FieldValue::List(items.into_iter().map(RawScalar::into_text).collect())
            }
        }
    }
}
