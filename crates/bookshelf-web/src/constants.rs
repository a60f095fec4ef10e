//! Centralized DOM names for the widget
//!
//! Element ids, template ids and class names the page markup must provide.
//! Kept here so the markup contract can be audited in one place.

// =============================================================================
// Element ids
// =============================================================================

/// Search button
pub const SEARCH_BUTTON_ID: &str = "search-btn";

/// Query text input
pub const QUERY_INPUT_ID: &str = "book-input";

/// Container for search result cards
pub const RESULTS_ID: &str = "results";

/// Hint text under the search box
pub const SEARCH_HINT_ID: &str = "search-hint";

/// Carousel strip
pub const CAROUSEL_ID: &str = "carousel";

/// Axis track under the strip
pub const AXIS_TRACK_ID: &str = "axis-track";

/// Draggable thumb on the axis track
pub const AXIS_THUMB_ID: &str = "axis-thumb";

// =============================================================================
// Templates
// =============================================================================

/// `<template>` for a search result card
pub const RESULT_TEMPLATE_ID: &str = "result-template";

/// `<template>` for a carousel card
pub const BOOK_TEMPLATE_ID: &str = "book-template";

/// Cover image inside a result card
pub const RESULT_COVER_SELECTOR: &str = ".result-card__cover";

/// Title inside a result card
pub const RESULT_TITLE_SELECTOR: &str = ".result-card__title";

/// Author line inside a result card
pub const RESULT_META_SELECTOR: &str = ".result-card__meta";

/// Add-to-shelf button inside a result card
pub const RESULT_BUTTON_SELECTOR: &str = ".result-card__btn";

/// Cover image inside a carousel card
pub const BOOK_COVER_SELECTOR: &str = ".book-card__cover";

/// Title inside a carousel card
pub const BOOK_NAME_SELECTOR: &str = ".book-card__name";

// =============================================================================
// Classes
// =============================================================================

/// Class toggled on the centered carousel card
pub const CENTER_CLASS: &str = "is-center";
