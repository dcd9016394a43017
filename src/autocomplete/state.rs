//! Interaction state of one search widget.

use crate::model::SearchIndexEntry;

/// Coarse phase derived from [`AutocompleteState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Dropdown hidden
    Closed,
    /// Dropdown visible (possibly the empty state), nothing selected
    Open,
    /// Dropdown visible with a selected row
    Navigating,
}

/// State owned by exactly one [`AutocompleteController`](super::AutocompleteController).
///
/// `selected_index` of `None` means no row is selected.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct AutocompleteState {
    pub(crate) is_open: bool,
    pub(crate) selected_index: Option<usize>,
    pub(crate) current_results: Vec<SearchIndexEntry>,
    pub(crate) pending_query: Option<String>,
}

impl AutocompleteState {
    pub fn new() -> Self {
        Self::default()
    }

    pub const fn is_open(&self) -> bool {
        self.is_open
    }

    pub const fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    /// Results in navigation order.
    pub fn current_results(&self) -> &[SearchIndexEntry] {
        &self.current_results
    }

    /// Query waiting for its debounce period to elapse.
    pub fn pending_query(&self) -> Option<&str> {
        self.pending_query.as_deref()
    }

    /// The currently selected entry, if the selection is in range.
    pub fn selected_entry(&self) -> Option<&SearchIndexEntry> {
        self.selected_index
            .and_then(|idx| self.current_results.get(idx))
    }

    pub const fn phase(&self) -> Phase {
        match (self.is_open, self.selected_index) {
            (false, _) => Phase::Closed,
            (true, None) => Phase::Open,
            (true, Some(_)) => Phase::Navigating,
        }
    }

    /// Back to the initial values.
    pub(crate) fn reset(&mut self) {
        *self = Self::default();
    }
}
