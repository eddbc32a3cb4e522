//! View model types representing renderable page state.
//!
//! View models are computed from [`PageState`](crate::app::PageState) and
//! consumed by the renderer. They contain no business logic, only
//! display-ready data: formatted populations, resolved links, highlight ranges.
//!
//! # Example
//!
//! ```rust
//! use poplookup::ui::viewmodel::CountryRow;
//!
//! let row = CountryRow {
//!     key: "FR".to_string(),
//!     name: "France".to_string(),
//!     population: "67,000,000".to_string(),
//!     highlight_ranges: vec![(0, 5)],
//! };
//! assert_eq!(&row.name[row.highlight_ranges[0].0..row.highlight_ranges[0].1], "Franc");
//! ```

/// Complete view model for one page render.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageViewModel {
    /// Document metadata and theme navigation.
    pub header: HeaderInfo,

    /// Class list of the root container (`container` or `container dark-mode`).
    pub container_class: String,

    /// Presentation flag derived from the active route.
    pub is_dark: bool,

    /// Search box state.
    pub search_bar: SearchBarInfo,

    /// Rows of the country list, in display order.
    pub rows: Vec<CountryRow>,

    /// Code sample modal state.
    pub modal: ModalInfo,

    /// Attribution link.
    pub footer: FooterInfo,
}

/// One row of the country list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CountryRow {
    /// Stable list key, the country code.
    pub key: String,

    /// Display name.
    pub name: String,

    /// Population with grouping separators.
    pub population: String,

    /// Character ranges of `name` to highlight, `(start, end)` with exclusive end.
    pub highlight_ranges: Vec<(usize, usize)>,
}

/// Document metadata and navigation buttons.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HeaderInfo {
    pub title: String,
    pub description: String,
    pub nav: Vec<NavButton>,
}

/// A theme navigation button.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavButton {
    pub label: String,
    pub href: String,
    /// Whether the button points at the current route.
    pub is_active: bool,
}

/// Search form state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SearchBarInfo {
    /// Path the form submits to, so searching keeps the active theme.
    pub action: String,
    /// Current query text.
    pub query: String,
}

/// Modal trigger and dialog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ModalInfo {
    pub is_open: bool,
    /// Link activated by the "Show Me" trigger.
    pub open_href: String,
    /// Link activated by the close control.
    pub close_href: String,
    pub sample: CodeSample,
}

/// Static code shown in the modal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSample {
    pub language: String,
    pub code: String,
}

/// Footer attribution.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FooterInfo {
    pub href: String,
    pub label: String,
}
