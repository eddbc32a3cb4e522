//! Offline country sources.
//!
//! [`FileCountries`] reads a JSON file in the provider's response format on
//! every fetch, which makes it a drop-in replacement for the HTTP source when
//! running without network access. [`StaticCountries`] hands out a fixed list.

use std::path::{Path, PathBuf};

use futures_util::future::BoxFuture;
use futures_util::FutureExt;

use crate::domain::error::Result;
use crate::domain::CountrySummary;
use crate::loader::models::decode_countries;
use crate::loader::source::CountrySource;

/// Country source reading a provider-format JSON file.
#[derive(Debug, Clone)]
pub struct FileCountries {
    path: PathBuf,
}

impl FileCountries {
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    async fn read_countries(&self) -> Result<Vec<CountrySummary>> {
        let body = tokio::fs::read(&self.path).await?;
        tracing::debug!(path = %self.path.display(), bytes = body.len(), "read countries file");
        decode_countries(&body)
    }
}

impl CountrySource for FileCountries {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<CountrySummary>>> {
        self.read_countries().boxed()
    }

    fn describe(&self) -> String {
        format!("file({})", self.path.display())
    }
}

/// Country source with a fixed in-memory list.
#[derive(Debug, Clone, Default)]
pub struct StaticCountries {
    countries: Vec<CountrySummary>,
}

impl StaticCountries {
    #[must_use]
    pub const fn new(countries: Vec<CountrySummary>) -> Self {
        Self { countries }
    }
}

impl CountrySource for StaticCountries {
    fn fetch(&self) -> BoxFuture<'_, Result<Vec<CountrySummary>>> {
        let countries = self.countries.clone();
        async move { Ok(countries) }.boxed()
    }

    fn describe(&self) -> String {
        format!("static({} countries)", self.countries.len())
    }
}
