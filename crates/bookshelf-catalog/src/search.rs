//! Search resolution

use core::future::Future;
use bookshelf_carousel::BookEntry;
use crate::config::CatalogConfig;
use crate::error::CatalogError;
use crate::fallback::fallback_books;
use crate::query::SearchQuery;

/// Something that can look up candidates for a query
///
/// The browser layer implements this with `fetch`; tests use canned lists.
pub trait CatalogSource {
    /// Look up candidates, in catalog order
    fn lookup(
        &self,
        query: &SearchQuery,
    ) -> impl Future<Output = Result<Vec<BookEntry>, CatalogError>>;
}

/// Where the presented results came from
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ResultSource {
    /// Catalog candidates
    Catalog,
    /// Built-in recommendations
    Fallback,
}

/// What to show after a search completes
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SearchOutcome {
    /// Hint text for the search box
    pub hint: String,
    /// Entries to present as result cards
    pub results: Vec<BookEntry>,
    /// Where `results` came from
    pub source: ResultSource,
    /// Error that led to the fallback, if any
    pub error: Option<CatalogError>,
}

impl SearchOutcome {
    /// Decide what to present for a finished lookup.
    ///
    /// Candidates are cut to `max_results`, but the hint reports how many the
    /// catalog returned. Empty lists and failures fall back to the built-in
    /// recommendations with their own hints. `InvalidInput` presents nothing:
    /// the results and hint stay as they were.
    pub fn resolve(
        lookup: Result<Vec<BookEntry>, CatalogError>,
        config: &CatalogConfig,
    ) -> Option<Self> {
        let hints = &config.hints;
        let outcome = match lookup {
            Ok(entries) if !entries.is_empty() => {
                let hint = hints.found(entries.len());
                let results = entries.into_iter().take(config.max_results).collect();
                Self {
                    hint,
                    results,
                    source: ResultSource::Catalog,
                    error: None,
                }
            }
            Ok(_) => Self::fallback(hints.empty.clone(), CatalogError::EmptyResult),
            Err(err @ CatalogError::NetworkFailure(_)) => {
                Self::fallback(hints.unavailable.clone(), err)
            }
            Err(CatalogError::InvalidInput) => return None,
            Err(err @ CatalogError::EmptyResult) => Self::fallback(hints.empty.clone(), err),
        };
        Some(outcome)
    }

    fn fallback(hint: String, error: CatalogError) -> Self {
        Self {
            hint,
            results: fallback_books(),
            source: ResultSource::Fallback,
            error: Some(error),
        }
    }
}

/// Run a lookup and resolve what to present
///
/// `None` means there is nothing to show and the widget keeps its current
/// results and hint.
pub async fn search<S: CatalogSource>(
    source: &S,
    query: &SearchQuery,
    config: &CatalogConfig,
) -> Option<SearchOutcome> {
    SearchOutcome::resolve(source.lookup(query).await, config)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::FailureReason;

    fn books(count: usize) -> Vec<BookEntry> {
        (0..count)
            .map(|i| BookEntry::new(format!("title {}", i), "author", ""))
            .collect()
    }

    #[test]
    fn test_results_truncated_but_count_reported() {
        let config = CatalogConfig::default();
        let outcome = SearchOutcome::resolve(Ok(books(9)), &config).unwrap();
        assert_eq!(outcome.results.len(), 4);
        assert_eq!(outcome.hint, "找到 9 条结果，点击确认加入。");
        assert_eq!(outcome.source, ResultSource::Catalog);
        assert!(outcome.error.is_none());
    }

    #[test]
    fn test_short_list_shown_whole() {
        let outcome = SearchOutcome::resolve(Ok(books(2)), &CatalogConfig::default()).unwrap();
        assert_eq!(outcome.results, books(2));
    }

    #[test]
    fn test_empty_list_uses_fallback() {
        let config = CatalogConfig::default();
        let outcome = SearchOutcome::resolve(Ok(Vec::new()), &config).unwrap();
        assert_eq!(outcome.hint, config.hints.empty);
        assert_eq!(outcome.results, fallback_books());
        assert_eq!(outcome.error, Some(CatalogError::EmptyResult));
    }

    #[test]
    fn test_failure_uses_fallback_with_distinct_hint() {
        let config = CatalogConfig::default();
        let outcome = SearchOutcome::resolve(
            Err(CatalogError::NetworkFailure(FailureReason::Status(502))),
            &config,
        )
        .unwrap();
        assert_eq!(outcome.hint, config.hints.unavailable);
        assert_ne!(outcome.hint, config.hints.empty);
        assert_eq!(outcome.source, ResultSource::Fallback);
        assert_eq!(outcome.results.len(), 3);
    }

    #[test]
    fn test_invalid_input_presents_nothing() {
        let config = CatalogConfig::default();
        assert_eq!(SearchOutcome::resolve(Err(CatalogError::InvalidInput), &config), None);
        assert!(!CatalogError::InvalidInput.uses_fallback());
    }

    #[test]
    fn test_fallback_errors_present_something() {
        let config = CatalogConfig::default();
        for err in [
            CatalogError::EmptyResult,
            CatalogError::NetworkFailure(FailureReason::Transport("offline".to_string())),
        ] {
            assert!(err.uses_fallback());
            let outcome = SearchOutcome::resolve(Err(err), &config).unwrap();
            assert_eq!(outcome.source, ResultSource::Fallback);
        }
    }
}
