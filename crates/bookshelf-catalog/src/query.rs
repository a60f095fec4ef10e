//! Search query validation and request URL

use url::Url;
use crate::config::CatalogConfig;
use crate::error::{CatalogError, FailureReason};

/// Non-blank, trimmed search text
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchQuery(String);

impl SearchQuery {
    /// Validate raw input text.
    ///
    /// Blank input yields `InvalidInput`; the caller treats that as a no-op.
    pub fn parse(raw: &str) -> Result<Self, CatalogError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(CatalogError::InvalidInput);
        }
        Ok(Self(trimmed.to_string()))
    }

    /// Query text
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Full lookup URL for this query
    pub fn request_url(&self, config: &CatalogConfig) -> Result<String, FailureReason> {
        let url = Url::parse_with_params(&config.base_url(), &[("q", self.as_str())])?;
        Ok(url.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_blank_queries_rejected() {
        assert_eq!(SearchQuery::parse(""), Err(CatalogError::InvalidInput));
        assert_eq!(SearchQuery::parse("   \t\n"), Err(CatalogError::InvalidInput));
    }

    #[test]
    fn test_query_is_trimmed() {
        let query = SearchQuery::parse("  小王子 ").unwrap();
        assert_eq!(query.as_str(), "小王子");
    }

    #[test]
    fn test_request_url_encodes_query() {
        let query = SearchQuery::parse("活着").unwrap();
        let url = query.request_url(&CatalogConfig::default()).unwrap();
        assert_eq!(
            url,
            "https://cors.isomorphic-git.org/https://book.douban.com/j/subject_suggest?q=%E6%B4%BB%E7%9D%80"
        );
    }

    #[test]
    fn test_request_url_rejects_bad_base() {
        let config = CatalogConfig {
            proxy: String::new(),
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        let query = SearchQuery::parse("x").unwrap();
        assert!(matches!(
            query.request_url(&config),
            Err(FailureReason::InvalidUrl(_))
        ));
    }
}
