//! Domain layer for the population lookup page.
//!
//! This module contains the core domain types, independent of HTTP, rendering
//! or the upstream provider's record shape.
//!
//! # Organization
//!
//! - [`error`]: Error types and result aliases
//! - [`country`]: Country summary model and population formatting
//!
//! # Examples
//!
//! ```
//! use poplookup::domain::{CountrySummary, Result};
//!
//! fn pick_first(countries: &[CountrySummary]) -> Result<Option<&CountrySummary>> {
//!     Ok(countries.first())
//! }
//! ```

pub mod country;
pub mod error;

pub use country::CountrySummary;
pub use error::{PoplookupError, Result};
