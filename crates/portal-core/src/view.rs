//! Filtered and sorted views over a record table.

use std::cmp::Ordering;

use portal_model::{ScalarValue, TabularRecord};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortDirection {
    Asc,
    Desc,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SortSpec {
    pub key: String,
    pub direction: SortDirection,
}

impl SortSpec {
    pub fn asc(key: impl Into<String>) -> Self {
        Self {
            key: key.into(),
            direction: SortDirection::Asc,
        }
    }

    /// Next sort after a click on `key`: ascending flips to descending on the
    /// same key, anything else starts ascending.
    pub fn toggle(current: Option<&SortSpec>, key: &str) -> Self {
        match current {
            Some(spec) if spec.key == key && spec.direction == SortDirection::Asc => Self {
                key: key.to_string(),
                direction: SortDirection::Desc,
            },
            _ => Self::asc(key),
        }
    }
}

/// Filter text plus an optional sort.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TableView {
    pub filter: String,
    pub sort: Option<SortSpec>,
}

fn compare(a: Option<&ScalarValue>, b: Option<&ScalarValue>) -> Ordering {
    match (a, b) {
        (Some(ScalarValue::Number(x)), Some(ScalarValue::Number(y))) => {
            x.partial_cmp(y).unwrap_or(Ordering::Equal)
        }
        _ => {
            let text = |value: Option<&ScalarValue>| {
                value.map(|v| v.to_string().to_lowercase()).unwrap_or_default()
            };
            text(a).cmp(&text(b))
        }
    }
}

impl TableView {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_filter(mut self, filter: impl Into<String>) -> Self {
        self.filter = filter.into();
        self
    }

    #[must_use]
    pub fn with_sort(mut self, sort: SortSpec) -> Self {
        self.sort = Some(sort);
        self
    }

    /// Applies a header click to the current sort.
    pub fn toggle_sort(&mut self, key: &str) {
        self.sort = Some(SortSpec::toggle(self.sort.as_ref(), key));
    }

    pub fn clear_sort(&mut self) {
        self.sort = None;
    }

    pub fn clear_filter(&mut self) {
        self.filter.clear();
    }

    fn matches<R: TabularRecord>(&self, record: &R) -> bool {
        if self.filter.is_empty() {
            return true;
        }
        let needle = self.filter.to_lowercase();
        record
            .values()
            .iter()
            .any(|value| value.to_string().to_lowercase().contains(&needle))
    }

    /// Visible records paired with their index in `records`, so edits and
    /// deletes can address the stored sequence. The sort is stable.
    pub fn apply<'a, R: TabularRecord>(&self, records: &'a [R]) -> Vec<(usize, &'a R)> {
        let mut visible: Vec<(usize, &R)> = records
            .iter()
            .enumerate()
            .filter(|(_, record)| self.matches(*record))
            .collect();
        if let Some(sort) = &self.sort {
            visible.sort_by(|(_, a), (_, b)| {
                let ordering = compare(a.field(&sort.key).as_ref(), b.field(&sort.key).as_ref());
                match sort.direction {
                    SortDirection::Asc => ordering,
                    SortDirection::Desc => ordering.reverse(),
                }
            });
        }
        visible
    }
}
