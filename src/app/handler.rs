//! Event handling and state transition logic.
//!
//! This module implements the page controller's event handler. Each input
//! event is processed to completion, synchronously, before the next one: typing
//! three characters runs three filter passes with no coalescing.
//!
//! # Event Types
//!
//! - **Input**: `QueryChanged`
//! - **Modal**: `ShowModal`, `CloseModal`
//! - **Navigation**: `Navigate`
//!
//! # Example
//!
//! ```rust
//! use poplookup::app::{handle_event, Event, PageState, Route};
//!
//! let mut state = PageState::new(vec![], Route::Home);
//! let (should_render, _actions) = handle_event(&mut state, &Event::ShowModal);
//! assert!(should_render);
//! assert!(state.modal_open);
//! ```

use super::actions::Action;
use super::modes::Route;
use super::state::PageState;

/// Discrete user interactions with the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Event {
    /// The search box now holds this text.
    QueryChanged(String),
    /// The "Show Me" trigger was activated.
    ShowModal,
    /// The modal's close control was activated.
    CloseModal,
    /// A page route was requested, e.g. through one of the theme buttons.
    Navigate(Route),
}

/// Processes an event, mutates page state, and returns actions to execute.
///
/// # Returns
///
/// A tuple of `(should_render, actions)`. `should_render` is `false` when the
/// event left the visible state untouched.
///
/// # Tracing
///
/// Each call creates a debug-level span with the event for debugging.
pub fn handle_event(state: &mut PageState, event: &Event) -> (bool, Vec<Action>) {
    let _span = tracing::debug_span!("handle_event", event_type = ?event).entered();

    match event {
        Event::QueryChanged(query) => {
            query.clone_into(&mut state.query);
            tracing::trace!(query = %state.query, "search query updated");

            state.apply_search_filter();

            (true, vec![Action::record_search_now()])
        }
        Event::ShowModal => {
            if state.modal_open {
                return (false, vec![]);
            }
            tracing::debug!("opening code sample modal");
            state.modal_open = true;
            (true, vec![])
        }
        Event::CloseModal => {
            if !state.modal_open {
                return (false, vec![]);
            }
            tracing::debug!("closing code sample modal");
            state.modal_open = false;
            (true, vec![])
        }
        Event::Navigate(route) => {
            if state.route == *route {
                return (false, vec![]);
            }
            tracing::debug!(from = ?state.route, to = ?route, "navigating");
            state.route = *route;
            (true, vec![])
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::CountrySummary;

    fn page() -> PageState {
        PageState::new(
            vec![
                CountrySummary::new("France", "FR", 67_000_000),
                CountrySummary::new("Germany", "DE", 83_000_000),
            ],
            Route::Home,
        )
    }

    fn displayed_names(state: &PageState) -> Vec<&str> {
        state.displayed.iter().map(|c| c.name.as_str()).collect()
    }

    #[test]
    fn typing_a_prefix_narrows_the_list() {
        let mut state = page();
        let (render, actions) = handle_event(&mut state, &Event::QueryChanged("Franc".into()));
        assert!(render);
        assert_eq!(displayed_names(&state), vec!["France"]);
        assert!(matches!(actions.as_slice(), [Action::RecordSearch { searched_at }] if *searched_at > 0));
    }

    #[test]
    fn unmatched_query_reverts_to_full_list() {
        let mut state = page();
        handle_event(&mut state, &Event::QueryChanged("Franc".into()));
        handle_event(&mut state, &Event::QueryChanged("zzz99".into()));
        assert_eq!(displayed_names(&state), vec!["France", "Germany"]);
    }

    #[test]
    fn every_keystroke_records_a_search() {
        let mut state = page();
        let total: usize = ["F", "Fr", "Fra"]
            .iter()
            .map(|q| handle_event(&mut state, &Event::QueryChanged((*q).into())).1.len())
            .sum();
        assert_eq!(total, 3);
    }

    #[test]
    fn same_query_twice_is_idempotent() {
        let mut state = page();
        handle_event(&mut state, &Event::QueryChanged("ger".into()));
        let first = state.displayed.clone();
        handle_event(&mut state, &Event::QueryChanged("ger".into()));
        assert_eq!(state.displayed, first);
    }

    #[test]
    fn modal_opens_and_closes() {
        let mut state = page();
        assert!(handle_event(&mut state, &Event::ShowModal).0);
        assert!(state.modal_open);
        assert!(!handle_event(&mut state, &Event::ShowModal).0);
        assert!(handle_event(&mut state, &Event::CloseModal).0);
        assert!(!state.modal_open);
    }

    #[test]
    fn navigation_toggles_dark_flag() {
        let mut state = page();
        handle_event(&mut state, &Event::Navigate(Route::DarkMode));
        assert!(state.theme_mode().is_dark());
        handle_event(&mut state, &Event::Navigate(Route::Home));
        assert!(!state.theme_mode().is_dark());
    }
}
