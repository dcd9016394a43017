//! Faceted result set: search matches bucketed by category.

use super::query::{MAX_RESULTS_PER_CATEGORY, MAX_TOTAL_RESULTS};
use crate::model::{Category, SearchIndexEntry};
use serde::ser::{Serialize, SerializeMap, Serializer};

/// Matches grouped into the six fixed categories, each in index scan order.
///
/// Rebuilt for every query. Every category is always present, possibly empty.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FacetedResultSet {
    buckets: [Vec<SearchIndexEntry>; 6],
}

impl FacetedResultSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a match to its category bucket, respecting the per-category cap.
    ///
    /// Returns `false` if the bucket was already full.
    pub(crate) fn push(&mut self, entry: &SearchIndexEntry) -> bool {
        let bucket = &mut self.buckets[entry.category.index()];
        if bucket.len() >= MAX_RESULTS_PER_CATEGORY {
            return false;
        }
        bucket.push(entry.clone());
        true
    }

    /// Entries of one category.
    pub fn get(&self, category: Category) -> &[SearchIndexEntry] {
        &self.buckets[category.index()]
    }

    /// Categories with their entries, in display order.
    pub fn iter(&self) -> impl Iterator<Item = (Category, &[SearchIndexEntry])> {
        Category::ALL
            .into_iter()
            .map(|category| (category, self.get(category)))
    }

    /// Non-empty categories only, in display order.
    pub fn sections(&self) -> impl Iterator<Item = (Category, &[SearchIndexEntry])> {
        self.iter().filter(|(_, entries)| !entries.is_empty())
    }

    /// Total number of entries across all categories.
    pub fn total(&self) -> usize {
        self.buckets.iter().map(Vec::len).sum()
    }

    pub fn is_empty(&self) -> bool {
        self.buckets.iter().all(Vec::is_empty)
    }

    /// Whether the global cap has been reached.
    pub(crate) fn is_full(&self) -> bool {
        self.total() >= MAX_TOTAL_RESULTS
    }

    /// All entries flattened in display order (classes first, fields last).
    ///
    /// This is the order keyboard navigation walks through.
    pub fn flatten(&self) -> Vec<SearchIndexEntry> {
        self.buckets.iter().flatten().cloned().collect()
    }
}

impl Serialize for FacetedResultSet {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(Category::ALL.len()))?;
        for (category, entries) in self.iter() {
            map.serialize_entry(category.bucket_key(), entries)?;
        }
        map.end()
    }
}
