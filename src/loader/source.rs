//! Country source abstraction.
//!
//! This module defines the [`CountrySource`] trait that abstracts over where the
//! country list comes from. The page controller only ever asks for the full,
//! narrowed list; it does not know whether that list came from the network,
//! a file or memory.

use futures_util::future::BoxFuture;

use crate::domain::error::Result;
use crate::domain::CountrySummary;

/// Abstraction over country list providers.
///
/// `fetch` is called once per page request and must return the complete list
/// in provider order. Implementations are shared across request handlers, so
/// they must be `Send + Sync`.
///
/// # Implementations
///
/// - [`RestCountries`](super::RestCountries): HTTP provider (default)
/// - [`FileCountries`](super::FileCountries): JSON file in the provider's format
/// - [`StaticCountries`](super::StaticCountries): Fixed in-memory list
///
/// # Examples
///
/// ```
/// use poplookup::loader::{CountrySource, StaticCountries};
/// use poplookup::CountrySummary;
///
/// # #[tokio::main(flavor = "current_thread")]
/// # async fn main() -> poplookup::Result<()> {
/// let source = StaticCountries::new(vec![CountrySummary::new("Chad", "TD", 17_000_000)]);
/// let countries = source.fetch().await?;
/// assert_eq!(countries.len(), 1);
/// # Ok(())
/// # }
/// ```
pub trait CountrySource: Send + Sync + std::fmt::Debug {
    /// Loads the full country list.
    ///
    /// # Errors
    ///
    /// Returns an error if the list cannot be obtained or decoded. No partial
    /// list is ever returned alongside an error.
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<CountrySummary>>>;

    /// Short label used in logs.
    fn describe(&self) -> String;
}
