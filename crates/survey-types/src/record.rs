//! Survey records and the payloads derived from them.
//!
//! [`Fields`] is an insertion-ordered string-to-[`Scalar`] mapping.
//! [`SurveyRecord`] is a mapping whose `id` key holds its
//! server-assigned [`SurveyId`]. The key is appended after the
//! submitted fields, or overwritten in place when a client sent one.

use serde::ser::{Serialize, SerializeMap, Serializer};

use crate::ids::SurveyId;
use crate::scalar::Scalar;

/// Name of the server-assigned identifier field.
pub const ID_FIELD: &str = "id";

/// Insertion-ordered mapping of field names to scalar values.
///
/// Inserting an existing key replaces its value in place, keeping the
/// key's original position.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fields {
    entries: Vec<(String, Scalar)>,
}

impl Fields {
    /// Create an empty mapping.
    pub const fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Insert a value, returning the previous value for the key if any.
    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<Scalar>) -> Option<Scalar> {
        let key = key.into();
        let value = value.into();
        if let Some((_, slot)) = self.entries.iter_mut().find(|(k, _)| *k == key) {
            return Some(core::mem::replace(slot, value));
        }
        self.entries.push((key, value));
        None
    }

    /// Look up a value by key.
    pub fn get(&self, key: &str) -> Option<&Scalar> {
        self.entries
            .iter()
            .find_map(|(k, v)| (k == key).then_some(v))
    }

    /// Remove a key, returning its value if it was present.
    pub fn remove(&mut self, key: &str) -> Option<Scalar> {
        let index = self.entries.iter().position(|(k, _)| k == key)?;
        Some(self.entries.remove(index).1)
    }

    /// Number of fields.
    pub const fn len(&self) -> usize {
        self.entries.len()
    }

    /// Whether the mapping has no fields.
    pub const fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over `(key, value)` pairs in insertion order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Scalar)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl<K: Into<String>, V: Into<Scalar>> FromIterator<(K, V)> for Fields {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut fields = Self::new();
        for (key, value) in iter {
            fields.insert(key, value);
        }
        fields
    }
}

impl Serialize for Fields {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.entries.len()))?;
        for (key, value) in &self.entries {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}

/// A stored survey submission.
///
/// Immutable once created. The `id` entry of the fields always holds the
/// server-assigned identifier.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SurveyRecord {
    id: SurveyId,
    fields: Fields,
}

impl SurveyRecord {
    /// Build a record from submitted fields and an allocated identifier.
    ///
    /// A client-supplied `id` keeps its position but takes the server
    /// value; otherwise `id` is appended last.
    pub fn new(id: SurveyId, mut fields: Fields) -> Self {
        fields.insert(ID_FIELD, id.get());
        Self { id, fields }
    }

    /// The server-assigned identifier.
    pub const fn id(&self) -> SurveyId {
        self.id
    }

    /// All fields, including `id`.
    pub const fn fields(&self) -> &Fields {
        &self.fields
    }

    /// Look up a field by name.
    pub fn field(&self, key: &str) -> Option<&Scalar> {
        self.fields.get(key)
    }
}

impl Serialize for SurveyRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        self.fields.serialize(serializer)
    }
}

/// Aggregate statistics payload, always `{"total":N}`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize)]
pub struct Stats {
    /// Number of stored records.
    pub total: usize,
}

/// One group of a per-field breakdown.
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
pub struct BreakdownRow {
    /// The shared field value.
    pub value: Scalar,
    /// Number of records carrying this value.
    pub count: usize,
    /// `count` as a rounded percentage of all stored records.
    pub percent: usize,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn id(raw: u64) -> SurveyId {
        SurveyId::new(raw).unwrap()
    }

    #[test]
    fn insert_keeps_order_and_replaces_in_place() {
        let mut fields = Fields::new();
        fields.insert("b", "1");
        fields.insert("a", "2");
        let previous = fields.insert("b", "3");

        assert_eq!(previous, Some(Scalar::from("1")));
        let keys: Vec<&str> = fields.iter().map(|(k, _)| k).collect();
        assert_eq!(keys, ["b", "a"]);
        assert_eq!(fields.get("b"), Some(&Scalar::from("3")));
    }

    #[test]
    fn record_serializes_with_id_last() {
        let fields: Fields = [("name", Scalar::from("Alice")), ("age", Scalar::from(30_u64))]
            .into_iter()
            .collect();
        let record = SurveyRecord::new(id(1), fields);

        let json = serde_json::to_string(&record).unwrap();
        assert_eq!(json, r#"{"name":"Alice","age":30,"id":1}"#);
    }

    #[test]
    fn client_id_is_overwritten_in_place() {
        let fields: Fields = [("id", "999"), ("name", "Mallory")].into_iter().collect();
        let record = SurveyRecord::new(id(3), fields);

        assert_eq!(record.field("id"), Some(&Scalar::from(3_u64)));
        assert_eq!(record.fields().len(), 2);
        assert_eq!(
            serde_json::to_string(&record).unwrap(),
            r#"{"id":3,"name":"Mallory"}"#
        );
    }

    #[test]
    fn empty_record_has_only_id() {
        let record = SurveyRecord::new(id(5), Fields::new());
        assert_eq!(serde_json::to_string(&record).unwrap(), r#"{"id":5}"#);
    }

    #[test]
    fn id_field_is_appended_as_number() {
        let record = SurveyRecord::new(id(2), [("name", "Bob")].into_iter().collect());
        assert_eq!(record.field("id"), Some(&Scalar::from(2_u64)));
        assert_eq!(record.fields().len(), 2);
    }

    #[test]
    fn stats_shape_is_fixed() {
        let json = serde_json::to_string(&Stats { total: 2 }).unwrap();
        assert_eq!(json, r#"{"total":2}"#);
    }
}
