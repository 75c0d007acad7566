//! The field dictionary.

use super::{FieldKey, FieldValue};
use crate::error::{MinutaError, Result};
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::collections::BTreeMap;
use std::collections::btree_map;

/// Flat dictionary of contract fields, ordered by field name.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldMap {
    entries: BTreeMap<FieldKey, FieldValue>,
}

impl FieldMap {
    /// Create an empty dictionary.
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from a JSON object.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| MinutaError::UserError(format!("failed to parse fields JSON: {}", e)))
    }

    /// Serialize the dictionary as pretty-printed JSON.
    pub fn to_json(&self) -> Result<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| MinutaError::UserError(format!("failed to serialize fields: {}", e)))
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Look up a field by key or name.
    pub fn get(&self, key: impl AsRef<str>) -> Option<&FieldValue> {
        self.entries.get(key.as_ref())
    }

    pub fn contains(&self, key: impl AsRef<str>) -> bool {
        self.entries.contains_key(key.as_ref())
    }

    /// The text of a field; `None` when absent or a list.
    pub fn text(&self, key: impl AsRef<str>) -> Option<&str> {
        self.get(key).and_then(FieldValue::as_text)
    }

    /// The trimmed text of a field, treating blank text as absent.
    pub fn filled(&self, key: impl AsRef<str>) -> Option<&str> {
        self.text(key).map(str::trim).filter(|t| !t.is_empty())
    }

    /// Whether a field is absent, blank text, or an empty list.
    pub fn is_blank(&self, key: impl AsRef<str>) -> bool {
        self.get(key).is_none_or(FieldValue::is_blank)
    }

    /// Insert or replace a field, returning the previous value.
    pub fn insert(
        &mut self,
        key: impl Into<FieldKey>,
        value: impl Into<FieldValue>,
    ) -> Option<FieldValue> {
        self.entries.insert(key.into(), value.into())
    }

    pub fn remove(&mut self, key: impl AsRef<str>) -> Option<FieldValue> {
        self.entries.remove(key.as_ref())
    }

    pub fn iter(&self) -> btree_map::Iter<'_, FieldKey, FieldValue> {
        self.entries.iter()
    }

    pub fn keys(&self) -> btree_map::Keys<'_, FieldKey, FieldValue> {
        self.entries.keys()
    }
}

impl<K, V> FromIterator<(K, V)> for FieldMap
where
    K: Into<FieldKey>,
    V: Into<FieldValue>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut map = FieldMap::new();
        map.extend(iter);
        map
    }
}

impl<K, V> Extend<(K, V)> for FieldMap
where
    K: Into<FieldKey>,
    V: Into<FieldValue>,
{
    fn extend<I: IntoIterator<Item = (K, V)>>(&mut self, iter: I) {
        for (key, value) in iter {
            self.insert(key, value);
        }
    }
}

impl IntoIterator for FieldMap {
    type Item = (FieldKey, FieldValue);
    type IntoIter = btree_map::IntoIter<FieldKey, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.into_iter()
    }
}

impl<'a> IntoIterator for &'a FieldMap {
    type Item = (&'a FieldKey, &'a FieldValue);
    type IntoIter = btree_map::Iter<'a, FieldKey, FieldValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

impl Serialize for FieldMap {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        self.entries.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for FieldMap {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> std::result::Result<Self, D::Error> {
        let raw = BTreeMap::<FieldKey, Option<FieldValue>>::deserialize(deserializer)?;
        Ok(raw
            .into_iter()
            .filter_map(|(key, value)| value.map(|v| (key, v)))
            .collect())
    }
}

/// Build a [`FieldMap`] from `"name" => value` pairs.
///
/// ```
/// let fields = minuta::fields! {
///     "nomeLocatario" => "Ana Souza",
///     "generoLocatario" => "feminino",
/// };
/// assert_eq!(fields.text("nomeLocatario"), Some("Ana Souza"));
/// ```
#[macro_export]
macro_rules! fields {
    ($($key:expr => $value:expr),* $(,)?) => {{
        #[allow(unused_mut)]
        let mut map = $crate::fields::FieldMap::new();
        $(map.insert($key, $value);)*
        map
    }};
}
