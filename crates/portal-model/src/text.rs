//! Free-form field bags for the text sections.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::value::ScalarValue;

/// Field name to scalar value. Keys carry no schema beyond per-section
/// conventions (section 3 uses `hodName`, `email`, `phone`, `qualification`).
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SectionTextData {
    fields: BTreeMap<String, ScalarValue>,
}

impl SectionTextData {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, field: &str) -> Option<&ScalarValue> {
        self.fields.get(field)
    }

    pub fn insert(&mut self, field: impl Into<String>, value: impl Into<ScalarValue>) {
        self.fields.insert(field.into(), value.into());
    }

    /// Builder-style insert.
    #[must_use]
    pub fn with(mut self, field: impl Into<String>, value: impl Into<ScalarValue>) -> Self {
        self.insert(field, value);
        self
    }

    pub fn remove(&mut self, field: &str) -> Option<ScalarValue> {
        self.fields.remove(field)
    }

    /// Overlays `other` onto this bag; keys present in `other` win.
    pub fn merge_from(&mut self, other: &SectionTextData) {
        for (key, value) in &other.fields {
            self.fields.insert(key.clone(), value.clone());
        }
    }

    /// At least one non-blank value.
    pub fn has_content(&self) -> bool {
        self.fields.values().any(|value| !value.is_blank())
    }

    pub fn non_blank_count(&self) -> usize {
        self.fields.values().filter(|value| !value.is_blank()).count()
    }

    /// Number of keys in `self` whose value differs from `previous`.
    pub fn changed_fields(&self, previous: &SectionTextData) -> usize {
        self.fields
            .iter()
            .filter(|(key, value)| previous.fields.get(*key) != Some(*value))
            .count()
    }

    pub fn len(&self) -> usize {
        self.fields.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ScalarValue)> {
        self.fields.iter().map(|(key, value)| (key.as_str(), value))
    }
}

impl<K: Into<String>, V: Into<ScalarValue>> FromIterator<(K, V)> for SectionTextData {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut data = Self::new();
        for (key, value) in iter {
            data.insert(key, value);
        }
        data
    }
}
