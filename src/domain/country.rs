//! Country summary domain model.
//!
//! A [`CountrySummary`] is the three-field projection of an upstream country
//! record that the page works with. The full list is immutable for the lifetime
//! of one page instance; filtering only ever derives new views from it.

use serde::{Deserialize, Serialize};

/// Digits between grouping separators.
const GROUP_SIZE: usize = 3;

/// Represents one row of the population lookup.
///
/// # Fields
///
/// - `name`: Human-readable common name, used for fuzzy matching
/// - `code`: Two-letter country code, used as the stable list key
/// - `population`: Head count, `0` when the provider omitted it
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountrySummary {
    pub name: String,
    pub code: String,
    pub population: u64,
}

impl CountrySummary {
    /// Creates a new country summary.
    ///
    /// # Examples
    ///
    /// ```
    /// use poplookup::CountrySummary;
    ///
    /// let france = CountrySummary::new("France", "FR", 67_000_000);
    /// assert_eq!(france.code, "FR");
    /// ```
    #[must_use]
    pub fn new(name: impl Into<String>, code: impl Into<String>, population: u64) -> Self {
        Self {
            name: name.into(),
            code: code.into(),
            population,
        }
    }

    /// Returns the population with thousands separators, e.g. `"67,000,000"`.
    #[must_use]
    pub fn population_display(&self) -> String {
        format_population(self.population)
    }
}

/// Formats an integer with `,` grouping separators.
///
/// # Examples
///
/// ```
/// use poplookup::domain::country::format_population;
///
/// assert_eq!(format_population(1_331_344_000), "1,331,344,000");
/// assert_eq!(format_population(999), "999");
/// ```
#[must_use]
pub fn format_population(value: u64) -> String {
    let digits = value.to_string();
    let lead = digits.len() % GROUP_SIZE;
    let mut out = String::with_capacity(digits.len() + digits.len() / GROUP_SIZE);

    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (i + GROUP_SIZE - lead) % GROUP_SIZE == 0 {
            out.push(',');
        }
        out.push(ch);
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn groups_large_populations() {
        assert_eq!(format_population(1_331_344_000), "1,331,344,000");
        assert_eq!(format_population(67_000_000), "67,000,000");
        assert_eq!(format_population(83_000_000), "83,000,000");
    }

    #[test]
    fn leaves_small_numbers_untouched() {
        assert_eq!(format_population(0), "0");
        assert_eq!(format_population(7), "7");
        assert_eq!(format_population(100), "100");
        assert_eq!(format_population(1000), "1,000");
        assert_eq!(format_population(12_345), "12,345");
    }

    #[test]
    fn population_display_groups_digits() {
        let france = CountrySummary::new("France", "FR", 67_000_000);
        assert_eq!(france.population_display(), "67,000,000");
    }
}
