//! Record and column types written to the CSV file

use serde::Deserialize;

/// One row destined for the CSV file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Image `src` attribute, trimmed but not resolved against the page
    pub url: String,
}

impl ImageRecord {
    pub fn new(url: impl Into<String>) -> Self {
        Self { url: url.into() }
    }

    /// Looks up a field by CSV column id
    ///
    /// Returns `None` for ids the record does not carry.
    pub fn field(&self, id: &str) -> Option<&str> {
        match id {
            "url" => Some(&self.url),
            _ => None,
        }
    }
}

/// Describes one CSV column
///
/// `id` selects the field from each record, `title` is the header label.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct CsvHeaderItem {
    pub id: String,
    pub title: String,
}

impl CsvHeaderItem {
    pub fn new(id: impl Into<String>, title: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            title: title.into(),
        }
    }
}
