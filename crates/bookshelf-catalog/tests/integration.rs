//! Integration tests for catalog search
//!
//! These tests drive `search` end to end with in-memory catalog sources:
//! - Successful lookups with truncation
//! - Empty results and failures falling back to recommendations
//! - Query validation before any lookup happens

use std::cell::RefCell;

use bookshelf_carousel::BookEntry;
use bookshelf_catalog::{
    decode_suggestions, fallback_books, search, CatalogConfig, CatalogError, CatalogSource,
    FailureReason, ResultSource, SearchOutcome, SearchQuery,
};
use futures::executor::block_on;

/// Submit raw input the way the search box does: validate, then look up
fn submit<S: CatalogSource>(source: &S, raw: &str, config: &CatalogConfig) -> Option<SearchOutcome> {
    let query = SearchQuery::parse(raw).ok()?;
    block_on(search(source, &query, config))
}

/// Source answering every query with a canned response body
struct CannedSource {
    body: &'static [u8],
    seen: RefCell<Vec<String>>,
}

impl CannedSource {
    fn new(body: &'static [u8]) -> Self {
        Self {
            body,
            seen: RefCell::new(Vec::new()),
        }
    }
}

impl CatalogSource for CannedSource {
    async fn lookup(&self, query: &SearchQuery) -> Result<Vec<BookEntry>, CatalogError> {
        self.seen.borrow_mut().push(query.as_str().to_string());
        Ok(decode_suggestions(self.body, "未知作者")?)
    }
}

/// Source that always fails
struct OfflineSource;

impl CatalogSource for OfflineSource {
    async fn lookup(&self, _query: &SearchQuery) -> Result<Vec<BookEntry>, CatalogError> {
        Err(FailureReason::Transport("TypeError: Failed to fetch".to_string()).into())
    }
}

#[test]
fn test_empty_result_shows_fallback() {
    let config = CatalogConfig::default();
    let source = CannedSource::new(b"[]");
    let outcome = submit(&source, "活着", &config).unwrap();

    assert_eq!(outcome.hint, "未找到结果，已展示推荐书单。");
    assert_eq!(outcome.results, fallback_books());
    assert_eq!(outcome.results.len(), 3);
    assert_eq!(source.seen.borrow().as_slice(), ["活着"]);
}

#[test]
fn test_successful_lookup_presents_first_four() {
    let config = CatalogConfig::default();
    let source = CannedSource::new(
        br#"[
            { "title": "1", "author_name": "a" },
            { "title": "2", "author_name": "b" },
            { "title": "3", "author_name": "c" },
            { "title": "4", "author_name": "d" },
            { "title": "5", "author_name": "e" }
        ]"#,
    );
    let outcome = submit(&source, " 三体 ", &config).unwrap();

    assert_eq!(outcome.source, ResultSource::Catalog);
    assert_eq!(outcome.hint, "找到 5 条结果，点击确认加入。");
    let titles: Vec<&str> = outcome.results.iter().map(|e| e.title.as_str()).collect();
    assert_eq!(titles, vec!["1", "2", "3", "4"]);
    assert_eq!(source.seen.borrow().as_slice(), ["三体"]);
}

#[test]
fn test_transport_failure_shows_fallback() {
    let config = CatalogConfig::default();
    let outcome = submit(&OfflineSource, "百年孤独", &config).unwrap();

    assert_eq!(outcome.hint, "豆瓣接口不可用，已展示推荐书单。");
    assert_eq!(outcome.source, ResultSource::Fallback);
    assert!(matches!(outcome.error, Some(CatalogError::NetworkFailure(_))));
}

#[test]
fn test_undecodable_body_counts_as_failure() {
    let config = CatalogConfig::default();
    let source = CannedSource::new(b"{\"msg\":\"rate limited\"}");
    let outcome = submit(&source, "x", &config).unwrap();

    assert_eq!(outcome.hint, config.hints.unavailable);
    assert!(matches!(
        outcome.error,
        Some(CatalogError::NetworkFailure(FailureReason::Malformed(_)))
    ));
}

#[test]
fn test_blank_query_never_reaches_source() {
    let config = CatalogConfig::default();
    let source = CannedSource::new(b"[{ \"title\": \"T\" }]");

    for raw in ["", "   ", "\t\n"] {
        assert_eq!(submit(&source, raw, &config), None);
    }
    assert!(source.seen.borrow().is_empty());

    assert!(submit(&source, "T", &config).is_some());
    assert_eq!(source.seen.borrow().as_slice(), ["T"]);
}

/// Source that rejects every query as invalid
struct RejectingSource;

impl CatalogSource for RejectingSource {
    async fn lookup(&self, _query: &SearchQuery) -> Result<Vec<BookEntry>, CatalogError> {
        Err(CatalogError::InvalidInput)
    }
}

#[test]
fn test_rejected_query_leaves_results_alone() {
    let config = CatalogConfig::default();
    assert_eq!(submit(&RejectingSource, "活着", &config), None);
}
