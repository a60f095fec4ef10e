//! Catalog configuration

use serde::{Deserialize, Serialize};
use crate::hints::HintMessages;

/// Default suggestion endpoint
pub const DEFAULT_ENDPOINT: &str = "https://book.douban.com/j/subject_suggest";

/// Default CORS proxy prefixed to the endpoint
pub const DEFAULT_PROXY: &str = "https://cors.isomorphic-git.org/";

/// Number of candidates presented per query
pub const MAX_RESULTS: usize = 4;

/// Author label used when a record names nobody
pub const UNKNOWN_AUTHOR: &str = "未知作者";

/// Catalog lookup configuration
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CatalogConfig {
    /// Suggestion endpoint (without query string)
    pub endpoint: String,
    /// Prefix prepended to the endpoint (empty for none)
    pub proxy: String,
    /// Candidates presented per query
    pub max_results: usize,
    /// Author label for records without one
    pub unknown_author: String,
    /// User-visible hint strings
    pub hints: HintMessages,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            proxy: DEFAULT_PROXY.to_string(),
            max_results: MAX_RESULTS,
            unknown_author: UNKNOWN_AUTHOR.to_string(),
            hints: HintMessages::default(),
        }
    }
}

impl CatalogConfig {
    /// Base URL requests are sent to (proxy + endpoint)
    pub fn base_url(&self) -> String {
        format!("{}{}", self.proxy, self.endpoint)
    }
}
