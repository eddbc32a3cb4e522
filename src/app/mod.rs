//! Application layer coordinating page state, events, and actions.
//!
//! This module is the page controller. It sits between the HTTP host (which
//! turns requests into events) and the UI layer (which turns state into HTML).
//!
//! # Architecture
//!
//! ```text
//! User Input → Events → Event Handler → State Mutations → Actions → Side Effects
//!                                              ↓
//!                                        View Model → HTML
//! ```
//!
//! # Modules
//!
//! - [`actions`]: Side effect commands emitted by the event handler
//! - [`handler`]: Event processing and state transitions
//! - [`modes`]: Route and theme mode types
//! - [`state`]: Page state container and view model computation

pub mod actions;
pub mod handler;
pub mod modes;
pub mod state;

pub use actions::{execute_actions, Action};
pub use handler::{handle_event, Event};
pub use modes::{Route, ThemeMode};
pub use state::PageState;
