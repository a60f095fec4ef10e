//! Catalog response decoding

use bookshelf_carousel::BookEntry;
use serde::Deserialize;
use serde_json::Value;
use crate::error::FailureReason;

/// One suggestion as returned by the catalog
///
/// Author and cover appear under different keys depending on the record
/// type, so each is looked up in preference order.
#[derive(Clone, Debug, Default, Deserialize)]
pub struct CatalogRecord {
    /// Book title
    #[serde(default)]
    pub title: String,
    /// Preferred author field
    #[serde(default)]
    pub author_name: Option<Value>,
    /// Secondary author field
    #[serde(default)]
    pub author: Option<Value>,
    /// Preferred cover field
    #[serde(default)]
    pub pic: Option<Value>,
    /// Secondary cover field
    #[serde(default)]
    pub cover: Option<Value>,
}

impl CatalogRecord {
    /// Convert to a shelf entry, filling a missing author with `unknown_author`
    pub fn into_entry(self, unknown_author: &str) -> BookEntry {
        let author = text(self.author_name.as_ref())
            .or_else(|| text(self.author.as_ref()))
            .unwrap_or_else(|| unknown_author.to_string());
        let cover = text(self.pic.as_ref())
            .or_else(|| text(self.cover.as_ref()))
            .unwrap_or_default();

        BookEntry::new(self.title, author, cover)
    }
}

/// Decode a suggestion response body into entries, in response order
pub fn decode_suggestions(body: &[u8], unknown_author: &str) -> Result<Vec<BookEntry>, FailureReason> {
    let records: Vec<CatalogRecord> = serde_json::from_slice(body)?;
    Ok(records
        .into_iter()
        .map(|record| record.into_entry(unknown_author))
        .collect())
}

/// Non-empty text of a string or string-array field
fn text(value: Option<&Value>) -> Option<String> {
    let joined = match value? {
        Value::String(s) => s.clone(),
        Value::Array(items) => items
            .iter()
            .filter_map(Value::as_str)
            .collect::<Vec<_>>()
            .join(", "),
        _ => return None,
    };
    if joined.is_empty() {
        None
    } else {
        Some(joined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_decode_prefers_author_name_and_pic() {
        let body = r#"[{
            "title": "活着",
            "author_name": "余华",
            "author": "someone else",
            "pic": "https://img.example/a.jpg",
            "cover": "https://img.example/b.jpg"
        }]"#;
        let entries = decode_suggestions(body.as_bytes(), "未知作者").unwrap();
        assert_eq!(entries, vec![BookEntry::new("活着", "余华", "https://img.example/a.jpg")]);
    }

    #[test]
    fn test_decode_falls_back_through_fields() {
        let body = br#"[
            { "title": "A", "author_name": "", "author": "Second", "cover": "c.jpg" },
            { "title": "B" }
        ]"#;
        let entries = decode_suggestions(body, "未知作者").unwrap();
        assert_eq!(entries[0].author, "Second");
        assert_eq!(entries[0].cover_url, "c.jpg");
        assert_eq!(entries[1].author, "未知作者");
        assert_eq!(entries[1].cover_url, "");
    }

    #[test]
    fn test_author_list_is_joined() {
        let body = br#"[{ "title": "T", "author": ["A", "B"] }]"#;
        let entries = decode_suggestions(body, "?").unwrap();
        assert_eq!(entries[0].author, "A, B");
    }

    #[test]
    fn test_ignores_unknown_fields() {
        let body = br#"[{ "title": "T", "year": "2012", "type": "b", "id": "1" }]"#;
        assert_eq!(decode_suggestions(body, "?").unwrap().len(), 1);
    }

    #[test]
    fn test_malformed_body() {
        let result = decode_suggestions(b"<html>rate limited</html>", "?");
        assert!(matches!(result, Err(FailureReason::Malformed(_))));
    }

    #[test]
    fn test_empty_array() {
        assert!(decode_suggestions(b"[]", "?").unwrap().is_empty());
    }
}
