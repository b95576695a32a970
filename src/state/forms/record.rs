//! Aggregated form submission data

use serde::ser::{Serialize, SerializeMap, Serializer};

/// Field name whose values are collected into a list instead of overwritten
pub const MULTI_VALUE_FIELD: &str = "interests";

/// One value in a submission record
#[derive(Debug, Clone, PartialEq, Eq, serde::Serialize)]
#[serde(untagged)]
pub enum RecordValue {
    Single(String),
    Many(Vec<String>),
}

impl RecordValue {
    #[cfg(test)]
    pub fn as_single(&self) -> Option<&str> {
        match self {
            RecordValue::Single(s) => Some(s),
            RecordValue::Many(_) => None,
        }
    }

    #[cfg(test)]
    pub fn as_many(&self) -> Option<&[String]> {
        match self {
            RecordValue::Many(values) => Some(values),
            RecordValue::Single(_) => None,
        }
    }
}

/// Field name to value mapping, in first-seen key order.
///
/// Built once from a form's entries and not mutated afterwards.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmissionRecord {
    fields: Vec<(String, RecordValue)>,
}

impl SubmissionRecord {
    /// Aggregate form entries. Entries named `multi_key` are collected in
    /// order into a list; any other repeated key keeps its last value.
    pub fn from_entries<I>(entries: I, multi_key: Option<&str>) -> Self
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let mut fields: Vec<(String, RecordValue)> = Vec::new();
        for (key, value) in entries {
            let is_multi = multi_key == Some(key.as_str());
            match fields.iter_mut().find(|(k, _)| *k == key) {
                Some((_, RecordValue::Many(values))) if is_multi => values.push(value),
                Some((_, existing)) => *existing = RecordValue::Single(value),
                None if is_multi => fields.push((key, RecordValue::Many(vec![value]))),
                None => fields.push((key, RecordValue::Single(value))),
            }
        }
        Self { fields }
    }

    pub fn get(&self, key: &str) -> Option<&RecordValue> {
        self.fields.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &RecordValue)> {
        self.fields.iter().map(|(k, v)| (k.as_str(), v))
    }
}

impl Serialize for SubmissionRecord {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(self.fields.len()))?;
        for (key, value) in &self.fields {
            map.serialize_entry(key, value)?;
        }
        map.end()
    }
}
