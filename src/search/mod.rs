//! Faceted substring search over the documentation index.
//!
//! This module provides the query engine, the category-bucketed result set it returns,
//! and the per-row display data renderers build the dropdown from.

// Module declarations
pub mod facets;
pub mod present;
pub mod query;

// Public re-exports
pub use facets::FacetedResultSet;
pub use present::{EMPTY_STATE_MESSAGE, ResultItemView, render_results_html, write_results_html};
pub use query::{
    MAX_RESULTS_PER_CATEGORY, MAX_TOTAL_RESULTS, MIN_QUERY_LENGTH, QueryEngine,
    SearchQueryEngine, is_searchable, matches_entry,
};
