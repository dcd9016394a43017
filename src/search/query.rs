//! Substring query engine over the flat search index.

use super::facets::FacetedResultSet;
use crate::format::{contains_ignore_case, fold_case};
use crate::model::SearchIndexEntry;
use std::sync::Arc;

/// Queries shorter than this (in characters) are not evaluated.
pub const MIN_QUERY_LENGTH: usize = 2;

/// Maximum entries kept per category.
pub const MAX_RESULTS_PER_CATEGORY: usize = 5;

/// The scan stops once this many entries have been collected across all categories.
pub const MAX_TOTAL_RESULTS: usize = 30;

/// Anything that can answer a faceted query.
///
/// The autocomplete controller talks to the engine through this trait.
pub trait QueryEngine {
    fn filter(&self, query: &str) -> FacetedResultSet;
}

impl<T: QueryEngine + ?Sized> QueryEngine for &T {
    fn filter(&self, query: &str) -> FacetedResultSet {
        (**self).filter(query)
    }
}

impl<T: QueryEngine + ?Sized> QueryEngine for Arc<T> {
    fn filter(&self, query: &str) -> FacetedResultSet {
        (**self).filter(query)
    }
}

/// Whether `query` is long enough to be evaluated.
pub fn is_searchable(query: &str) -> bool {
    query.chars().count() >= MIN_QUERY_LENGTH
}

/// Case-insensitive substring search with category facets and result caps.
///
/// Entries are scanned in index order; there is no ranking. The index is shared
/// read-only, so one engine can serve any number of controllers.
#[derive(Debug, Clone, Default)]
pub struct SearchQueryEngine {
    index: Arc<[SearchIndexEntry]>,
}

impl SearchQueryEngine {
    pub fn new(index: impl Into<Arc<[SearchIndexEntry]>>) -> Self {
        Self {
            index: index.into(),
        }
    }

    pub fn index(&self) -> &[SearchIndexEntry] {
        &self.index
    }

    pub fn len(&self) -> usize {
        self.index.len()
    }

    pub fn is_empty(&self) -> bool {
        self.index.is_empty()
    }
}

impl QueryEngine for SearchQueryEngine {
    fn filter(&self, query: &str) -> FacetedResultSet {
        let mut results = FacetedResultSet::new();
        if !is_searchable(query) {
            return results;
        }

        let query_lower = fold_case(query);
        let mut scanned = 0;

        for entry in self.index.iter() {
            scanned += 1;
            if matches_entry(entry, &query_lower) {
                results.push(entry);
            }
            if results.is_full() {
                break;
            }
        }

        tracing::debug!(
            query,
            scanned,
            matched = results.total(),
            "Filtered search index"
        );
        results
    }
}

/// An entry matches when the query occurs in its name, qualified name or signature.
///
/// A missing signature is skipped rather than counted against the entry.
pub fn matches_entry(entry: &SearchIndexEntry, query_lower: &str) -> bool {
    contains_ignore_case(&entry.name, query_lower)
        || contains_ignore_case(&entry.qualified_name, query_lower)
        || entry
            .signature
            .as_deref()
            .is_some_and(|signature| contains_ignore_case(signature, query_lower))
}
