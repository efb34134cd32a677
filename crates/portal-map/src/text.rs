//! Merging imported rows into a text-section field bag.

use portal_model::{GenericRow, ScalarValue, SectionId, SectionTextData};
use tracing::debug;

use crate::matcher::{match_field, normalize_key};
use crate::patterns::{CuratedField, ESTABLISHMENT_FIELDS, HOD_FIELDS, SCHOOL_FIELDS};

/// Normalised key/value pairs merged across every imported row, in first-seen
/// key order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MergedFields {
    entries: Vec<(String, ScalarValue)>,
}

impl MergedFields {
    pub fn get(&self, key: &str) -> Option<&ScalarValue> {
        self.entries
            .iter()
            .find(|(existing, _)| existing == key)
            .map(|(_, value)| value)
    }

    pub fn keys(&self) -> Vec<&str> {
        self.entries.iter().map(|(key, _)| key.as_str()).collect()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// A later value only replaces a missing, blank or falsy one.
    fn offer(&mut self, key: String, value: ScalarValue) {
        match self.entries.iter_mut().find(|(existing, _)| *existing == key) {
            Some((_, current)) => {
                if !current.is_truthy() || current.is_blank() {
                    *current = value;
                }
            }
            None => self.entries.push((key, value)),
        }
    }

    /// Truthy value under the first matching key.
    fn first_truthy(&self, keys: &[&str]) -> Option<&ScalarValue> {
        keys.iter()
            .filter_map(|key| self.get(key))
            .find(|value| value.is_truthy())
    }

    pub fn into_text_data(self) -> SectionTextData {
        self.entries.into_iter().collect()
    }
}

impl GenericRow for MergedFields {
    fn keys(&self) -> Vec<&str> {
        MergedFields::keys(self)
    }

    fn value(&self, key: &str) -> Option<ScalarValue> {
        self.get(key).cloned()
    }
}

/// Merges rows key-by-key under normalised keys. The first row supplying a
/// non-blank value for a key wins; nulls are skipped.
pub fn merge_rows<R: GenericRow>(rows: &[R]) -> MergedFields {
    let mut merged = MergedFields::default();
    for row in rows {
        for key in row.keys() {
            let normalized = normalize_key(key);
            if normalized.is_empty() {
                continue;
            }
            if let Some(value) = row.value(key) {
                merged.offer(normalized, value);
            }
        }
    }
    merged
}

fn curate(merged: &MergedFields, fields: &[CuratedField]) -> SectionTextData {
    let keys = merged.keys();
    fields
        .iter()
        .map(|field| {
            let matched = field
                .synonym
                .and_then(|synonym| match_field(synonym, keys.as_slice()))
                .and_then(|key| merged.get(key))
                .filter(|value| value.is_truthy());
            let value = matched
                .or_else(|| merged.first_truthy(field.keys))
                .cloned()
                .unwrap_or_else(|| ScalarValue::text(""));
            (field.target, value)
        })
        .collect()
}

/// Converts merged fields into the bag stored for `section`. Sections 1-3
/// keep only their canonical keys; every other section keeps the merged keys
/// unchanged.
pub fn map_text_section(section: SectionId, merged: MergedFields) -> SectionTextData {
    let data = match section {
        SectionId::SCHOOL => curate(&merged, &SCHOOL_FIELDS),
        SectionId::ESTABLISHMENT => curate(&merged, &ESTABLISHMENT_FIELDS),
        SectionId::HOD => curate(&merged, &HOD_FIELDS),
        _ => merged.into_text_data(),
    };
    debug!(section = %section, fields = data.len(), "mapped text section");
    data
}
