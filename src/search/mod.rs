//! Fuzzy search over the country list.
//!
//! Matching is tolerant of minor misspellings: a query matches a name when a
//! Bitap alignment with few enough errors, close enough to the start of the
//! name, scores under the fixed threshold. The alignment itself comes from
//! [`fuse_rust`]; this module fixes its tolerances, ranks the hits and turns
//! the engine's byte ranges into character ranges for highlighting.
//!
//! # Example
//!
//! ```rust
//! use poplookup::search::FuzzySearch;
//! use poplookup::CountrySummary;
//!
//! let countries = vec![
//!     CountrySummary::new("France", "FR", 67_000_000),
//!     CountrySummary::new("Germany", "DE", 83_000_000),
//! ];
//!
//! let hits = FuzzySearch::default().search(&countries, "Frence");
//! assert_eq!(hits.len(), 1);
//! assert_eq!(hits[0].index, 0);
//! ```

use std::ops::Range;

use fuse_rust::Fuse;

use crate::domain::CountrySummary;

/// Decimal places kept when rounding the field-length norm.
const NORM_PRECISION: f64 = 1000.0;

/// Longest query prefix handed to the matcher, in bytes.
///
/// The Bitap bitmasks hold one bit per pattern byte; anything past this is
/// ignored so that a pasted wall of text costs the same as a short query.
pub const MAX_PATTERN_BYTES: usize = 32;

/// Fixed matching tolerances.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SearchOptions {
    /// Maximum accepted alignment score.
    pub threshold: f64,
    /// Expected match offset within a name.
    pub location: i32,
    /// Drift from `location` that costs a full score point.
    pub distance: i32,
}

impl Default for SearchOptions {
    fn default() -> Self {
        Self {
            threshold: 0.3,
            location: 0,
            distance: 100,
        }
    }
}

/// A matched record.
#[derive(Debug, Clone, PartialEq)]
pub struct SearchHit {
    /// Position of the record in the searched slice.
    pub index: usize,
    /// Ranking score, lower is better.
    pub score: f64,
    /// Matched character ranges of the name, end exclusive.
    pub ranges: Vec<(usize, usize)>,
}

/// Result of filtering the list for one query.
#[derive(Debug, Clone, PartialEq)]
pub struct Filtered {
    /// Records to display, best first, or the whole input on fallback.
    pub countries: Vec<CountrySummary>,
    /// Matched character ranges per displayed record. Empty on fallback.
    pub highlights: Vec<Vec<(usize, usize)>>,
    /// Whether `countries` holds real hits rather than the whole input.
    pub has_matches: bool,
}

/// Name matcher with fixed tolerances.
#[derive(Debug, Clone, Copy, Default)]
pub struct FuzzySearch {
    options: SearchOptions,
}

impl FuzzySearch {
    #[must_use]
    pub const fn new(options: SearchOptions) -> Self {
        Self { options }
    }

    fn engine(&self) -> Fuse {
        Fuse {
            threshold: self.options.threshold,
            location: self.options.location,
            distance: self.options.distance,
            ..Fuse::default()
        }
    }

    /// Returns the records whose name matches `query`, best first.
    ///
    /// An empty query produces no hits. There is no "show everything" shortcut;
    /// callers decide what an empty result means. Only the first
    /// [`MAX_PATTERN_BYTES`] bytes of `query` take part in matching.
    #[must_use]
    pub fn search(&self, countries: &[CountrySummary], query: &str) -> Vec<SearchHit> {
        let engine = self.engine();
        let Some(pattern) = engine.create_pattern(truncate_pattern(query)) else {
            return vec![];
        };

        let mut hits: Vec<SearchHit> = countries
            .iter()
            .enumerate()
            .filter_map(|(index, country)| {
                let result = engine.search(Some(&pattern), &country.name)?;
                Some(SearchHit {
                    index,
                    score: rank_score(result.score, &country.name),
                    ranges: char_ranges(&country.name, &result.ranges),
                })
            })
            .collect();

        hits.sort_by(|a, b| a.score.total_cmp(&b.score).then(a.index.cmp(&b.index)));
        hits
    }

    /// Returns the list to display for `query`.
    ///
    /// The ranked hits mapped back to records, or a copy of `countries` when
    /// nothing matched.
    #[must_use]
    pub fn filter_countries(&self, countries: &[CountrySummary], query: &str) -> Filtered {
        let hits = self.search(countries, query);
        if hits.is_empty() {
            return Filtered {
                countries: countries.to_vec(),
                highlights: vec![Vec::new(); countries.len()],
                has_matches: false,
            };
        }

        let displayed = hits.iter().map(|hit| countries[hit.index].clone()).collect();
        Filtered {
            countries: displayed,
            highlights: hits.into_iter().map(|hit| hit.ranges).collect(),
            has_matches: true,
        }
    }
}

/// Cuts `query` to at most [`MAX_PATTERN_BYTES`] bytes on a char boundary.
fn truncate_pattern(query: &str) -> &str {
    if query.len() <= MAX_PATTERN_BYTES {
        return query;
    }
    let end = (0..=MAX_PATTERN_BYTES)
        .rev()
        .find(|&i| query.is_char_boundary(i))
        .unwrap_or(0);
    &query[..end]
}

/// Maps byte ranges of `text` to character ranges, dropping any that collapse.
fn char_ranges(text: &str, byte_ranges: &[Range<usize>]) -> Vec<(usize, usize)> {
    let char_at = |byte: usize| text.char_indices().take_while(|(i, _)| *i < byte).count();
    byte_ranges
        .iter()
        .map(|r| (char_at(r.start), char_at(r.end)))
        .filter(|(start, end)| start < end)
        .collect()
}

/// Weighs an alignment score by the number of words in the name so that a hit
/// in a short name outranks the same hit in a long one.
fn rank_score(score: f64, name: &str) -> f64 {
    let base = if score == 0.0 { f64::EPSILON } else { score };
    base.powf(field_norm(name))
}

fn field_norm(name: &str) -> f64 {
    let tokens = name.split(' ').filter(|t| !t.is_empty()).count().max(1);
    #[allow(clippy::cast_precision_loss)]
    let norm = 1.0 / (tokens as f64).sqrt();
    (norm * NORM_PRECISION).round() / NORM_PRECISION
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn filter_falls_back_to_full_list() {
        let countries = sample();
        let search = FuzzySearch::default();

        let filtered = search.filter_countries(&countries, "zzz99");
        assert!(!filtered.has_matches);
        assert_eq!(filtered.countries, countries);
        assert!(filtered.highlights.iter().all(Vec::is_empty));

        let filtered = search.filter_countries(&countries, "");
        assert!(!filtered.has_matches);
        assert_eq!(filtered.countries, countries);

        let filtered = search.filter_countries(&[], "France");
        assert!(!filtered.has_matches);
        assert!(filtered.countries.is_empty());
    }

    fn names(countries: &[CountrySummary], hits: &[SearchHit]) -> Vec<String> {
        hits.iter().map(|h| countries[h.index].name.clone()).collect()
    }

    fn sample() -> Vec<CountrySummary> {
        vec![
            CountrySummary::new("France", "FR", 67_000_000),
            CountrySummary::new("Germany", "DE", 83_000_000),
            CountrySummary::new("Nigeria", "NG", 206_139_589),
            CountrySummary::new("Niger", "NE", 24_206_636),
            CountrySummary::new("United States", "US", 329_484_123),
        ]
    }

    #[test]
    fn prefix_query_finds_single_country() {
        let countries = sample();
        let hits = FuzzySearch::default().search(&countries, "Franc");
        assert_eq!(names(&countries, &hits), vec!["France"]);
        assert_eq!(hits[0].ranges, vec![(0, 5)]);
    }

    #[test]
    fn misspelled_query_still_matches() {
        let countries = sample();
        let hits = FuzzySearch::default().search(&countries, "Frence");
        assert_eq!(names(&countries, &hits), vec!["France"]);
        assert!(!hits[0].ranges.is_empty());
    }

    #[test]
    fn exact_name_ranks_first() {
        let countries = sample();
        let hits = FuzzySearch::default().search(&countries, "niger");
        assert_eq!(names(&countries, &hits), vec!["Niger", "Nigeria"]);
        assert_eq!(hits[0].ranges, vec![(0, 5)]);
    }

    #[test]
    fn no_plausible_match_yields_nothing() {
        let countries = sample();
        assert!(FuzzySearch::default().search(&countries, "zzz99").is_empty());
        assert!(FuzzySearch::default().search(&countries, "").is_empty());
    }

    #[test]
    fn every_full_name_finds_itself() {
        let countries = sample();
        let search = FuzzySearch::default();
        for (index, country) in countries.iter().enumerate() {
            let hits = search.search(&countries, &country.name);
            assert!(hits.iter().any(|h| h.index == index), "{} not found", country.name);
        }
    }

    #[test]
    fn repeated_query_is_stable() {
        let countries = sample();
        let search = FuzzySearch::default();
        assert_eq!(search.search(&countries, "ger"), search.search(&countries, "ger"));
    }

    #[test]
    fn oversized_query_matches_on_its_prefix() {
        let countries = sample();
        let search = FuzzySearch::default();

        let query = "ab".repeat(30_000);
        assert!(search.search(&countries, &query).is_empty());

        let long_name = "United Kingdom of Great Britain and Northern Ireland";
        let countries = vec![
            CountrySummary::new("United States", "US", 329_484_123),
            CountrySummary::new(long_name, "GB", 67_215_293),
        ];
        let hits = search.search(&countries, long_name);
        assert_eq!(names(&countries, &hits), vec![long_name]);
    }

    #[test]
    fn truncation_respects_char_boundaries() {
        assert_eq!(truncate_pattern("France"), "France");

        let wide = "é".repeat(20);
        let cut = truncate_pattern(&wide);
        assert_eq!(cut.len(), MAX_PATTERN_BYTES);
        assert_eq!(cut.chars().count(), 16);

        let odd = format!("a{}", "é".repeat(20));
        assert_eq!(truncate_pattern(&odd).len(), MAX_PATTERN_BYTES - 1);
    }

    #[test]
    fn byte_ranges_become_char_ranges() {
        assert_eq!(char_ranges("Curaçao", &[(0..8)]), vec![(0, 7)]);
        assert_eq!(char_ranges("Åland", &[(2..6)]), vec![(1, 5)]);
        assert!(char_ranges("Peru", &[(2..2)]).is_empty());
    }

    #[test]
    fn field_norm_rounds_to_three_places() {
        assert!((field_norm("France") - 1.0).abs() < f64::EPSILON);
        assert!((field_norm("United States") - 0.707).abs() < 1e-9);
        assert!((field_norm("Bosnia and Herzegovina") - 0.577).abs() < 1e-9);
    }
}
