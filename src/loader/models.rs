//! Upstream record models and the narrowing step.
//!
//! The countries provider returns large records with dozens of fields. This
//! module defines the raw record shape as seen on the wire, separate from the
//! domain [`CountrySummary`], and the rules that narrow one into the other.
//!
//! # Narrowing Rules
//!
//! - The top-level body must be a JSON array, otherwise decoding fails
//! - A record without a non-blank `name.common` or `cca2` is skipped
//! - A missing, null, negative or fractional `population` becomes `0`
//! - Every other field is ignored

use serde::Deserialize;
use serde_json::Value;

use crate::domain::error::{PoplookupError, Result};
use crate::domain::CountrySummary;

/// Name block of an upstream record.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawName {
    #[serde(default)]
    pub common: Option<String>,
}

/// A country record as delivered by the provider.
///
/// Only the fields the page needs are declared; serde drops the rest.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct RawCountry {
    #[serde(default)]
    pub name: Option<RawName>,

    #[serde(default)]
    pub cca2: Option<String>,

    /// Kept as a raw JSON value so that odd encodings narrow to `0` instead of
    /// failing the record.
    #[serde(default)]
    pub population: Option<Value>,
}

impl RawCountry {
    /// Narrows the record to a [`CountrySummary`].
    ///
    /// Returns `None` when the record cannot be keyed or labelled.
    #[must_use]
    pub fn narrow(self) -> Option<CountrySummary> {
        let name = self
            .name
            .and_then(|n| n.common)
            .filter(|n| !n.trim().is_empty())?;
        let code = self.cca2.filter(|c| !c.trim().is_empty())?;
        let population = self.population.as_ref().map_or(0, population_from_value);

        Some(CountrySummary {
            name,
            code,
            population,
        })
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss, clippy::cast_precision_loss)]
fn population_from_value(value: &Value) -> u64 {
    if let Some(n) = value.as_u64() {
        return n;
    }

    match value.as_f64() {
        Some(f) if f.is_finite() && f >= 0.0 && f.fract() == 0.0 && f <= u64::MAX as f64 => f as u64,
        _ => 0,
    }
}

/// Decodes a provider response body into country summaries.
///
/// Records keep the provider's order. Malformed records are logged and
/// skipped; only a malformed body fails the whole decode.
///
/// # Errors
///
/// Returns [`PoplookupError::Decode`] if the body is not JSON or the top-level
/// value is not an array.
///
/// # Examples
///
/// ```
/// use poplookup::loader::decode_countries;
///
/// let body = br#"[{"name":{"common":"France"},"cca2":"FR","population":67000000}]"#;
/// let countries = decode_countries(body)?;
/// assert_eq!(countries[0].code, "FR");
/// assert_eq!(countries[0].population_display(), "67,000,000");
/// # Ok::<(), poplookup::PoplookupError>(())
/// ```
pub fn decode_countries(body: &[u8]) -> Result<Vec<CountrySummary>> {
    let value: Value = serde_json::from_slice(body)
        .map_err(|e| PoplookupError::Decode(format!("response is not valid JSON: {e}")))?;

    let records = match value {
        Value::Array(records) => records,
        other => {
            return Err(PoplookupError::Decode(format!(
                "expected a JSON array of countries, got {}",
                json_kind(&other)
            )))
        }
    };

    let total = records.len();
    let countries: Vec<CountrySummary> = records
        .into_iter()
        .enumerate()
        .filter_map(|(position, record)| {
            let narrowed = serde_json::from_value::<RawCountry>(record)
                .ok()
                .and_then(RawCountry::narrow);
            if narrowed.is_none() {
                tracing::warn!(position, "skipping country record without name or code");
            }
            narrowed
        })
        .collect();

    tracing::debug!(total, kept = countries.len(), "decoded country records");
    Ok(countries)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
