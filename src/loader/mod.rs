//! Country data loading.
//!
//! This module obtains the country list and narrows provider records to the
//! three fields the page uses. Sources sit behind the [`CountrySource`] trait
//! so the page controller does not care where the data comes from.
//!
//! # Modules
//!
//! - `source`: The [`CountrySource`] trait
//! - `rest`: HTTP provider source
//! - `fixture`: File-backed and in-memory sources
//! - `models`: Raw provider records and the narrowing rules

pub mod fixture;
pub mod models;
pub mod rest;
pub mod source;

use std::sync::Arc;
use std::time::Duration;

pub use fixture::{FileCountries, StaticCountries};
pub use models::{decode_countries, RawCountry};
pub use rest::{RestCountries, DEFAULT_COUNTRIES_URL, DEFAULT_TIMEOUT};
pub use source::CountrySource;

use crate::domain::error::Result;
use crate::Config;

/// Builds the country source selected by `config`.
///
/// A configured `countries_file` takes precedence over `countries_url`.
///
/// # Errors
///
/// Returns an error if the HTTP client cannot be built.
pub fn source_from_config(config: &Config) -> Result<Arc<dyn CountrySource>> {
    let source: Arc<dyn CountrySource> = match &config.countries_file {
        Some(path) => Arc::new(FileCountries::new(path)),
        None => Arc::new(RestCountries::new(
            config.countries_url.clone(),
            Duration::from_secs(config.request_timeout_secs),
        )?),
    };

    tracing::info!(source = %source.describe(), "country source configured");
    Ok(source)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn file_takes_precedence_over_url() {
        let config = Config {
            countries_file: Some("/tmp/countries.json".into()),
            ..Config::default()
        };
        let source = source_from_config(&config).unwrap();
        assert_eq!(source.describe(), "file(/tmp/countries.json)");
    }

    #[test]
    fn defaults_to_rest_provider() {
        let source = source_from_config(&Config::default()).unwrap();
        assert_eq!(source.describe(), format!("rest({DEFAULT_COUNTRIES_URL})"));
    }
}
