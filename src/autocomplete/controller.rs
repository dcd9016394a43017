//! Autocomplete controller: turns widget events into queries, selection and navigation.
//!
//! The controller owns its [`AutocompleteState`] and its pending debounce exclusively.
//! It never reads a clock itself: every time-dependent call takes `now`, and the owner
//! calls [`AutocompleteController::poll`] once [`AutocompleteController::next_deadline`]
//! has passed. [`run_widget`](super::run_widget) does exactly that on a tokio task.

use super::debounce::Debounce;
use super::state::{AutocompleteState, Phase};
use crate::model::{Category, SearchIndexEntry};
use crate::search::{FacetedResultSet, QueryEngine, is_searchable};
use serde::Serialize;
use tokio::time::{Duration, Instant};

/// Where a selected search result should take the reader.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum NavigationTarget {
    /// Show a type page
    Type {
        package_name: String,
        simple_name: String,
        qualified_name: String,
    },
    /// Show the owning type page, then scroll to the member
    Member {
        category: Category,
        package_name: String,
        type_name: String,
        member_name: String,
        qualified_name: String,
    },
}

impl NavigationTarget {
    pub fn from_entry(entry: &SearchIndexEntry) -> Self {
        if entry.category.is_type() {
            return Self::Type {
                package_name: entry.package_name.clone(),
                simple_name: entry.name.clone(),
                qualified_name: entry.qualified_name.clone(),
            };
        }

        let type_name = entry
            .type_name
            .clone()
            .unwrap_or_else(|| owner_from_qualified_name(&entry.qualified_name).to_string());

        Self::Member {
            category: entry.category,
            package_name: entry.package_name.clone(),
            type_name,
            member_name: entry.name.clone(),
            qualified_name: entry.qualified_name.clone(),
        }
    }

    pub fn qualified_name(&self) -> &str {
        match self {
            Self::Type { qualified_name, .. } | Self::Member { qualified_name, .. } => {
                qualified_name
            }
        }
    }

    pub fn package_name(&self) -> &str {
        match self {
            Self::Type { package_name, .. } | Self::Member { package_name, .. } => package_name,
        }
    }

    /// Simple name of the type page to show.
    pub fn type_name(&self) -> &str {
        match self {
            Self::Type { simple_name, .. } => simple_name,
            Self::Member { type_name, .. } => type_name,
        }
    }

    /// URL fragment identifying the target.
    pub fn fragment(&self) -> String {
        format!("#{}", self.qualified_name())
    }
}

/// Second-to-last segment of `a.b.Owner.member`.
fn owner_from_qualified_name(qualified_name: &str) -> &str {
    let mut segments = qualified_name.rsplit('.');
    segments.next();
    segments.next().unwrap_or_default()
}

/// The UI side of a search widget.
///
/// Only `navigate` is required; the other hooks let a renderer mirror state changes.
pub trait SearchWidget {
    /// Route to the item a result refers to.
    fn navigate(&mut self, target: &NavigationTarget);

    /// A new result set is ready (may be empty: show the empty state).
    fn show_results(&mut self, _results: &FacetedResultSet) {}

    /// The dropdown closed.
    fn hide_results(&mut self) {}

    /// Row `index` (in navigation order) became the selection.
    fn select(&mut self, _index: usize) {}

    /// Whether the clear control should be visible.
    fn set_clear_visible(&mut self, _visible: bool) {}

    fn clear_input(&mut self) {}

    fn focus_input(&mut self) {}

    /// Give up input focus (after Escape).
    fn release_focus(&mut self) {}
}

/// Input delivered to a controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WidgetEvent {
    /// The input text changed
    Input(String),
    /// The input gained focus holding this text
    Focus(String),
    ArrowDown,
    ArrowUp,
    Enter,
    Escape,
    /// Pointer moved over the row at this index
    Hover(usize),
    /// Pointer click on a rendered row
    Activate(SearchIndexEntry),
    /// Click anywhere outside the widget
    OutsideInteraction,
    /// The clear control was used
    Clear,
}

/// State machine for one search widget.
///
/// Phases are `Closed`, `Open` and `Navigating` (see [`Phase`]). Events that make no
/// sense in the current phase are no-ops and report `false` where a result is returned.
#[derive(Debug)]
pub struct AutocompleteController<E, W> {
    engine: E,
    widget: W,
    state: AutocompleteState,
    debounce: Debounce,
}

impl<E: QueryEngine, W: SearchWidget> AutocompleteController<E, W> {
    pub fn new(engine: E, widget: W) -> Self {
        Self {
            engine,
            widget,
            state: AutocompleteState::new(),
            debounce: Debounce::default(),
        }
    }

    /// Use a different quiet period than the default 150ms.
    #[must_use]
    pub fn with_debounce_delay(mut self, delay: Duration) -> Self {
        self.debounce = Debounce::new(delay);
        self
    }

    pub const fn state(&self) -> &AutocompleteState {
        &self.state
    }

    pub const fn phase(&self) -> Phase {
        self.state.phase()
    }

    pub const fn widget(&self) -> &W {
        &self.widget
    }

    pub const fn widget_mut(&mut self) -> &mut W {
        &mut self.widget
    }

    pub const fn engine(&self) -> &E {
        &self.engine
    }

    pub fn into_parts(self) -> (E, W) {
        (self.engine, self.widget)
    }

    /// When the pending query becomes due, if one is pending.
    pub fn next_deadline(&self) -> Option<Instant> {
        self.debounce.deadline()
    }

    /// Dispatch one event.
    pub fn handle(&mut self, event: WidgetEvent, now: Instant) {
        tracing::trace!(?event, phase = ?self.phase(), "Widget event");
        match event {
            WidgetEvent::Input(text) => self.on_input(&text, now),
            WidgetEvent::Focus(text) => self.on_focus(&text, now),
            WidgetEvent::ArrowDown => {
                self.on_arrow_down();
            }
            WidgetEvent::ArrowUp => {
                self.on_arrow_up();
            }
            WidgetEvent::Enter => {
                self.on_enter();
            }
            WidgetEvent::Escape => self.on_escape(),
            WidgetEvent::Hover(index) => {
                self.on_item_hover(index);
            }
            WidgetEvent::Activate(entry) => self.on_item_activate(&entry),
            WidgetEvent::OutsideInteraction => self.on_outside_interaction(),
            WidgetEvent::Clear => self.on_clear(),
        }
    }

    /// The input text changed.
    ///
    /// Short input closes immediately; otherwise the query is scheduled and replaces any
    /// query still waiting for its quiet period.
    pub fn on_input(&mut self, text: &str, now: Instant) {
        self.cancel_pending();
        self.widget.set_clear_visible(!text.is_empty());

        if !is_searchable(text) {
            self.close();
            return;
        }

        let deadline = self.debounce.schedule(text.to_string(), now);
        self.state.pending_query = Some(text.to_string());
        tracing::trace!(query = text, ?deadline, "Scheduled search");
    }

    /// The input regained focus: re-query if it holds a searchable text.
    pub fn on_focus(&mut self, text: &str, now: Instant) {
        if is_searchable(text) {
            self.on_input(text, now);
        }
    }

    /// Run the pending query if it is due. Returns whether a query ran.
    pub fn poll(&mut self, now: Instant) -> bool {
        let Some(query) = self.debounce.take_due(now) else {
            return false;
        };
        self.state.pending_query = None;
        self.evaluate(&query);
        true
    }

    fn evaluate(&mut self, query: &str) {
        let results = self.engine.filter(query);
        tracing::debug!(query, results = results.total(), "Opening search results");

        self.state.current_results = results.flatten();
        self.state.selected_index = None;
        self.state.is_open = true;
        self.widget.show_results(&results);
    }

    fn has_results(&self) -> bool {
        self.state.is_open && !self.state.current_results.is_empty()
    }

    fn set_selected(&mut self, index: usize) {
        self.state.selected_index = Some(index);
        self.widget.select(index);
    }

    /// Move the selection down, wrapping from the last row to the first.
    pub fn on_arrow_down(&mut self) -> bool {
        if !self.has_results() {
            return false;
        }
        let count = self.state.current_results.len();
        let next = self.state.selected_index.map_or(0, |idx| (idx + 1) % count);
        self.set_selected(next);
        true
    }

    /// Move the selection up, wrapping from the first row to the last.
    ///
    /// With nothing selected the last row is selected.
    pub fn on_arrow_up(&mut self) -> bool {
        if !self.has_results() {
            return false;
        }
        let count = self.state.current_results.len();
        let prev = self
            .state
            .selected_index
            .map_or(count - 1, |idx| (idx + count - 1) % count);
        self.set_selected(prev);
        true
    }

    /// Pointer hover moves the selection to the hovered row.
    pub fn on_item_hover(&mut self, index: usize) -> bool {
        if !self.has_results() || index >= self.state.current_results.len() {
            return false;
        }
        self.set_selected(index);
        true
    }

    /// Navigate to the selected row, if any.
    pub fn on_enter(&mut self) -> bool {
        let Some(entry) = self.state.selected_entry().cloned() else {
            return false;
        };
        if !self.state.is_open {
            return false;
        }
        self.activate(&entry);
        true
    }

    /// Pointer click on a row: navigate regardless of the current selection.
    pub fn on_item_activate(&mut self, entry: &SearchIndexEntry) {
        self.activate(entry);
    }

    fn activate(&mut self, entry: &SearchIndexEntry) {
        let target = NavigationTarget::from_entry(entry);
        tracing::debug!(qualified_name = %target.qualified_name(), "Navigating to search result");

        self.widget.navigate(&target);
        self.close();
        self.widget.clear_input();
    }

    /// Close and give up input focus.
    pub fn on_escape(&mut self) {
        self.close();
        self.widget.release_focus();
    }

    pub fn on_outside_interaction(&mut self) {
        self.close();
    }

    /// The clear control: empty the input, close, and keep the input focused.
    pub fn on_clear(&mut self) {
        self.widget.clear_input();
        self.widget.set_clear_visible(false);
        self.close();
        self.widget.focus_input();
    }

    /// Drop any pending query without touching the dropdown.
    pub fn cancel_pending(&mut self) -> bool {
        self.state.pending_query = None;
        self.debounce.cancel_pending()
    }

    /// Close the dropdown, cancel any pending query and reset the state.
    pub fn close(&mut self) {
        self.cancel_pending();
        if self.state.is_open {
            tracing::trace!("Closing search results");
        }
        self.state.reset();
        self.widget.hide_results();
    }
}
