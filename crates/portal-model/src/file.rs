use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Metadata and raw text of a file imported into a section.
///
/// Kept for later preview; never modified after creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ImportedFile {
    pub name: String,
    pub size: u64,
    pub media_type: String,
    pub last_modified: DateTime<Utc>,
    pub content: String,
}

impl ImportedFile {
    pub fn new(
        name: impl Into<String>,
        media_type: impl Into<String>,
        last_modified: DateTime<Utc>,
        content: impl Into<String>,
    ) -> Self {
        let content = content.into();
        Self {
            name: name.into(),
            size: content.len() as u64,
            media_type: media_type.into(),
            last_modified,
            content,
        }
    }

    /// Overrides the size derived from `content`, e.g. with the on-disk byte
    /// count when the content was decoded lossily.
    #[must_use]
    pub fn with_size(mut self, size: u64) -> Self {
        self.size = size;
        self
    }

    /// Lower-cased extension of the file name, without the dot.
    pub fn extension(&self) -> Option<String> {
        let (stem, ext) = self.name.rsplit_once('.')?;
        if stem.is_empty() || ext.is_empty() {
            return None;
        }
        Some(ext.to_ascii_lowercase())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extension_is_lowercased() {
        let file = ImportedFile::new("Faculty.CSV", "text/csv", Utc::now(), "a,b");
        assert_eq!(file.extension().as_deref(), Some("csv"));
        assert_eq!(file.size, 3);
        let bare = ImportedFile::new("README", "", Utc::now(), "");
        assert_eq!(bare.extension(), None);
    }

    #[test]
    fn explicit_size_wins() {
        let file =
            ImportedFile::new("a.txt", "text/plain", Utc::now(), "R\u{fffd}").with_size(2);
        assert_eq!(file.size, 2);
        assert_eq!(file.content.len(), 4);
    }
}
