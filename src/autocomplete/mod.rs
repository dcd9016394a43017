//! Autocomplete interaction for the search input.
//!
//! [`AutocompleteController`] is a synchronous state machine over [`AutocompleteState`];
//! [`run_widget`] drives it from a channel of [`WidgetEvent`]s with real timers.

pub mod controller;
pub mod debounce;
pub mod driver;
pub mod state;

pub use controller::{AutocompleteController, NavigationTarget, SearchWidget, WidgetEvent};
pub use debounce::{DEBOUNCE_DELAY, Debounce};
pub use driver::run_widget;
pub use state::{AutocompleteState, Phase};
