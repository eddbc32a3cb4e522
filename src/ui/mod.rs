//! HTML rendering layer with component-based architecture.
//!
//! This module turns page view models into a complete HTML document through
//! composable component renderers, with theme palettes and fuzzy match
//! highlighting.
//!
//! # Architecture
//!
//! ```text
//! PageState → compute_viewmodel → PageViewModel → render → HTML
//! ```
//!
//! # Modules
//!
//! - [`viewmodel`]: View model types representing renderable page state
//! - [`renderer`]: Top-level rendering coordinator
//! - [`components`]: Composable page component renderers
//! - [`helpers`]: Escaping and highlighting utilities
//! - [`theme`]: Colour palettes and CSS generation

pub mod components;
pub mod helpers;
pub mod renderer;
pub mod theme;
pub mod viewmodel;

pub use renderer::{render, render_viewmodel};
pub use theme::{Theme, Themes};
pub use viewmodel::{CountryRow, FooterInfo, HeaderInfo, ModalInfo, PageViewModel, SearchBarInfo};
