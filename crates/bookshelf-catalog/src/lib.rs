//! Catalog lookup for the Bookshelf widget
//!
//! This crate turns a free-text query into the list of books shown under the
//! search box. It does not perform I/O itself: the browser layer implements
//! [`CatalogSource`] with `fetch`, and this crate validates the query, builds
//! the request URL, decodes the response and decides what to show.
//!
//! # Flow
//!
//! ```text
//! query text
//!     │
//!     │ SearchQuery::parse (blank → InvalidInput, search is a no-op)
//!     ▼
//! ┌─────────────────┐
//! │  CatalogSource  │  ◄── GET <proxy><endpoint>?q=<query>
//! └────────┬────────┘
//!          │
//!          │ Ok(entries) / Err(NetworkFailure)
//!          ▼
//! ┌─────────────────┐
//! │ SearchOutcome   │  ◄── first 4 results + hint,
//! └─────────────────┘      or fallback list + hint
//! ```

mod config;
mod error;
mod fallback;
mod hints;
mod query;
mod record;
mod search;

pub use config::{CatalogConfig, DEFAULT_ENDPOINT, DEFAULT_PROXY, MAX_RESULTS, UNKNOWN_AUTHOR};
pub use error::{CatalogError, FailureReason};
pub use fallback::fallback_books;
pub use hints::HintMessages;
pub use query::SearchQuery;
pub use record::{decode_suggestions, CatalogRecord};
pub use search::{search, CatalogSource, ResultSource, SearchOutcome};
