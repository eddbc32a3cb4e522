//! Actions representing side effects requested by the page controller.
//!
//! The event handler is pure apart from mutating [`PageState`](super::PageState);
//! anything observable outside the page is returned as an [`Action`] for the
//! host to execute. Today the only such effect is the analytics hit emitted on
//! every search input.
//!
//! # Example
//!
//! ```rust
//! use poplookup::app::{execute_actions, Action};
//!
//! execute_actions(&[Action::RecordSearch { searched_at: 1_700_000_000_000 }]);
//! ```

/// Side effects to be executed by the page host.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    /// Reports that a search ran.
    ///
    /// Carries the wall-clock time in milliseconds since the Unix epoch. The
    /// record is written to the log and nowhere else.
    RecordSearch {
        searched_at: i64,
    },
}

impl Action {
    /// Builds a search record stamped with the current time.
    #[must_use]
    pub fn record_search_now() -> Self {
        Self::RecordSearch {
            searched_at: chrono::Utc::now().timestamp_millis(),
        }
    }
}

/// Executes actions in order.
pub fn execute_actions(actions: &[Action]) {
    for action in actions {
        match action {
            Action::RecordSearch { searched_at } => {
                tracing::info!(searched_at = *searched_at, "search analytics hit");
            }
        }
    }
}
