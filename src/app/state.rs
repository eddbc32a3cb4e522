//! Page state management and view model computation.
//!
//! This module defines [`PageState`], the state container owned by one page
//! instance. It serves as the single source of truth for the displayed list,
//! the modal visibility and the active route.
//!
//! # Architecture
//!
//! `PageState` separates the loaded list (immutable after construction) from
//! derived state (the displayed list). View models are computed on demand from
//! state snapshots and carry no behaviour.
//!
//! # Example
//!
//! ```rust
//! use poplookup::app::{PageState, Route};
//! use poplookup::CountrySummary;
//!
//! let countries = vec![CountrySummary::new("France", "FR", 67_000_000)];
//! let mut state = PageState::new(countries, Route::Home);
//! state.query = "Franc".to_string();
//! state.apply_search_filter();
//! let viewmodel = state.compute_viewmodel();
//! assert_eq!(viewmodel.rows.len(), 1);
//! ```

use super::modes::{Route, ThemeMode};
use crate::domain::CountrySummary;
use crate::search::FuzzySearch;
use crate::ui::viewmodel::{
    CodeSample, CountryRow, FooterInfo, HeaderInfo, ModalInfo, NavButton, PageViewModel,
    SearchBarInfo,
};
use url::form_urlencoded;

/// Document title of the page.
const PAGE_TITLE: &str = "Core Web Vitals";

/// Meta description of the page.
const PAGE_DESCRIPTION: &str = "Core web vitals walk through";

/// Code shown inside the sample modal.
const HELLO_WORLD_SAMPLE: &str = "fn main() {\n    println!(\"Hello World\");\n}";

/// State of one page instance.
#[derive(Debug, Clone)]
pub struct PageState {
    /// Every country delivered by the loader, in provider order.
    ///
    /// Never mutated after construction. Filtering always starts from here.
    pub countries: Vec<CountrySummary>,

    /// Countries currently rendered in the list.
    ///
    /// Either the ranked search hits, or the full list when the last query
    /// matched nothing.
    pub displayed: Vec<CountrySummary>,

    /// Current contents of the search box.
    pub query: String,

    /// Whether `displayed` holds real search hits rather than the full list.
    pub has_matches: bool,

    /// Matched character ranges of each displayed name, aligned with
    /// `displayed`. All empty when `has_matches` is false.
    pub highlights: Vec<Vec<(usize, usize)>>,

    /// Whether the code sample modal is visible.
    pub modal_open: bool,

    /// Route the page was reached through.
    pub route: Route,

    search: FuzzySearch,
}

impl PageState {
    /// Creates the initial state: full list displayed, modal closed.
    #[must_use]
    pub fn new(countries: Vec<CountrySummary>, route: Route) -> Self {
        Self {
            displayed: countries.clone(),
            highlights: vec![Vec::new(); countries.len()],
            countries,
            query: String::new(),
            has_matches: false,
            modal_open: false,
            route,
            search: FuzzySearch::default(),
        }
    }

    #[must_use]
    pub const fn theme_mode(&self) -> ThemeMode {
        self.route.theme_mode()
    }

    /// Recomputes `displayed` from the full list and the current query.
    ///
    /// # Filtering Algorithm
    ///
    /// 1. Fuzzy-match the query against every country name
    /// 2. Rank hits by score, ties in provider order
    /// 3. If nothing matched, display the full list instead of an empty one
    ///
    /// An empty or whitespace query goes through the same path; there is no
    /// separate "show all" branch.
    pub fn apply_search_filter(&mut self) {
        let _span = tracing::debug_span!(
            "apply_search_filter",
            total_countries = self.countries.len(),
            query_len = self.query.len()
        )
        .entered();

        let filtered = self.search.filter_countries(&self.countries, &self.query);
        self.displayed = filtered.countries;
        self.highlights = filtered.highlights;
        self.has_matches = filtered.has_matches;

        tracing::debug!(
            displayed_count = self.displayed.len(),
            has_matches = self.has_matches,
            "search filter applied"
        );
    }

    /// Computes a renderable view model from the current state.
    #[must_use]
    pub fn compute_viewmodel(&self) -> PageViewModel {
        let rows = self
            .displayed
            .iter()
            .enumerate()
            .map(|(i, country)| CountryRow {
                key: country.code.clone(),
                name: country.name.clone(),
                population: country.population_display(),
                highlight_ranges: self.highlight_ranges(i),
            })
            .collect();

        let mode = self.theme_mode();

        PageViewModel {
            header: self.compute_header(),
            container_class: mode.container_class().to_string(),
            is_dark: mode.is_dark(),
            search_bar: SearchBarInfo {
                action: self.route.path().to_string(),
                query: self.query.clone(),
            },
            rows,
            modal: self.compute_modal(),
            footer: FooterInfo {
                href: "https://vercel.com?utm_source=learn&&utm_campaign=core-web-vitals"
                    .to_string(),
                label: "Powered by Vercel".to_string(),
            },
        }
    }

    fn compute_header(&self) -> HeaderInfo {
        let nav = [(Route::DarkMode, "Dark-Mode"), (Route::Home, "Light-Mode")]
            .into_iter()
            .map(|(route, label)| NavButton {
                label: label.to_string(),
                href: route.path().to_string(),
                is_active: route == self.route,
            })
            .collect();

        HeaderInfo {
            title: PAGE_TITLE.to_string(),
            description: PAGE_DESCRIPTION.to_string(),
            nav,
        }
    }

    fn compute_modal(&self) -> ModalInfo {
        ModalInfo {
            is_open: self.modal_open,
            open_href: self.href(true),
            close_href: self.href(false),
            sample: CodeSample {
                language: "rust".to_string(),
                code: HELLO_WORLD_SAMPLE.to_string(),
            },
        }
    }

    /// Link back to this page that keeps the query and sets the modal flag.
    fn href(&self, modal_open: bool) -> String {
        let mut query = form_urlencoded::Serializer::new(String::new());
        if !self.query.is_empty() {
            query.append_pair("q", &self.query);
        }
        if modal_open {
            query.append_pair("modal", "open");
        }

        let query = query.finish();
        if query.is_empty() {
            self.route.path().to_string()
        } else {
            format!("{}?{query}", self.route.path())
        }
    }

    /// Character ranges to mark in the `index`th displayed name, end exclusive.
    ///
    /// Taken from the same match that ranked the row, so a misspelled query
    /// highlights exactly what the engine aligned. Fallback rows get none.
    fn highlight_ranges(&self, index: usize) -> Vec<(usize, usize)> {
        if !self.has_matches {
            return vec![];
        }
        self.highlights.get(index).cloned().unwrap_or_default()
    }
}
