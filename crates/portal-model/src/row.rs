//! Loosely-typed rows produced by the document parsers.
//!
//! Each parser keeps its own row shape, but mapping code only ever sees the
//! [`GenericRow`] capability: ordered keys plus scalar lookup by key.

use serde_json::{Map, Value};

use crate::value::ScalarValue;

/// String-keyed scalar lookup shared by every parsed row shape.
pub trait GenericRow {
    /// Keys in source order.
    fn keys(&self) -> Vec<&str>;

    /// Exact, case-sensitive lookup.
    fn value(&self, key: &str) -> Option<ScalarValue>;
}

/// Which parser produced a row.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum RowSource {
    Csv,
    Json,
    Text,
}

impl RowSource {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Csv => "CSV",
            Self::Json => "JSON",
            Self::Text => "text",
        }
    }
}

/// Ordered string pairs; re-inserting a key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FieldRow {
    cells: Vec<(String, String)>,
}

impl FieldRow {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        let key = key.into();
        let value = value.into();
        match self.cells.iter_mut().find(|(existing, _)| *existing == key) {
            Some(cell) => cell.1 = value,
            None => self.cells.push((key, value)),
        }
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.cells
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value.as_str())
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.cells.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

impl<K: Into<String>, V: Into<String>> FromIterator<(K, V)> for FieldRow {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut row = Self::new();
        for (key, value) in iter {
            row.insert(key, value);
        }
        row
    }
}

impl GenericRow for FieldRow {
    fn keys(&self) -> Vec<&str> {
        self.cells.iter().map(|(key, _)| key.as_str()).collect()
    }

    fn value(&self, key: &str) -> Option<ScalarValue> {
        self.get(key).map(ScalarValue::text)
    }
}

/// One element of a parsed JSON document. Non-object elements are kept but
/// expose no keys.
#[derive(Debug, Clone, PartialEq)]
pub struct JsonRow(Value);

impl JsonRow {
    pub fn new(value: Value) -> Self {
        Self(value)
    }

    pub fn as_object(&self) -> Option<&Map<String, Value>> {
        self.0.as_object()
    }

    pub fn into_inner(self) -> Value {
        self.0
    }
}

impl GenericRow for JsonRow {
    fn keys(&self) -> Vec<&str> {
        self.0
            .as_object()
            .map(|object| object.keys().map(String::as_str).collect())
            .unwrap_or_default()
    }

    fn value(&self, key: &str) -> Option<ScalarValue> {
        self.0
            .as_object()
            .and_then(|object| object.get(key))
            .and_then(ScalarValue::from_json)
    }
}

/// A parsed row, tagged by the parser that produced it.
#[derive(Debug, Clone, PartialEq)]
pub enum ParsedRow {
    Csv(FieldRow),
    Json(JsonRow),
    Text(FieldRow),
}

impl ParsedRow {
    pub fn source(&self) -> RowSource {
        match self {
            Self::Csv(_) => RowSource::Csv,
            Self::Json(_) => RowSource::Json,
            Self::Text(_) => RowSource::Text,
        }
    }
}

impl GenericRow for ParsedRow {
    fn keys(&self) -> Vec<&str> {
        match self {
            Self::Csv(row) | Self::Text(row) => row.keys(),
            Self::Json(row) => row.keys(),
        }
    }

    fn value(&self, key: &str) -> Option<ScalarValue> {
        match self {
            Self::Csv(row) | Self::Text(row) => row.value(key),
            Self::Json(row) => row.value(key),
        }
    }
}
