//! Book entry

use serde::{Deserialize, Serialize};

/// A book on the shelf or in a result list
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BookEntry {
    /// Book title
    pub title: String,
    /// Author display name
    pub author: String,
    /// Cover image URL (may be empty)
    #[serde(default)]
    pub cover_url: String,
}

impl BookEntry {
    /// Create a new entry
    pub fn new(
        title: impl Into<String>,
        author: impl Into<String>,
        cover_url: impl Into<String>,
    ) -> Self {
        Self {
            title: title.into(),
            author: author.into(),
            cover_url: cover_url.into(),
        }
    }

    /// Check if the entry has a cover image
    #[inline]
    pub fn has_cover(&self) -> bool {
        !self.cover_url.is_empty()
    }
}
