//! Top-level rendering coordinator.
//!
//! The renderer follows a two-step process:
//!
//! 1. **View Model Computation**: Transform `PageState` into `PageViewModel`
//! 2. **Component Rendering**: Delegate to the component renderers
//!
//! # Example
//!
//! ```rust
//! use poplookup::app::{PageState, Route};
//! use poplookup::ui::{render, Themes};
//! use poplookup::CountrySummary;
//!
//! let state = PageState::new(vec![CountrySummary::new("France", "FR", 67_000_000)], Route::Home);
//! let html = render(&state, &Themes::default());
//! assert!(html.contains("France - 67,000,000"));
//! ```

use crate::app::PageState;
use crate::ui::components;
use crate::ui::theme::Themes;
use crate::ui::viewmodel::PageViewModel;

/// Renders the page for the current state as an HTML document.
#[must_use]
pub fn render(state: &PageState, themes: &Themes) -> String {
    let viewmodel = state.compute_viewmodel();

    render_viewmodel(&viewmodel, themes)
}

/// Renders a pre-computed view model.
///
/// # Panics
///
/// Panics only if writing into a `String` fails, which it cannot.
#[must_use]
pub fn render_viewmodel(vm: &PageViewModel, themes: &Themes) -> String {
    let mut html = String::with_capacity(4096 + vm.rows.len() * 96);
    components::render_page(&mut html, vm, themes).expect("writing to a String is infallible");
    html
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::{handle_event, Event, Route};
    use crate::domain::CountrySummary;

    fn page(route: Route) -> PageState {
        PageState::new(
            vec![
                CountrySummary::new("France", "FR", 67_000_000),
                CountrySummary::new("Germany", "DE", 83_000_000),
            ],
            route,
        )
    }

    #[test]
    fn renders_rows_in_order() {
        let html = render(&page(Route::Home), &Themes::default());
        let france = html.find("France - 67,000,000").unwrap();
        let germany = html.find("Germany - 83,000,000").unwrap();
        assert!(france < germany);
        assert!(html.contains("data-key=\"FR\""));
        assert!(html.contains("data-key=\"DE\""));
    }

    #[test]
    fn renders_page_chrome() {
        let html = render(&page(Route::Home), &Themes::default());
        assert!(html.contains("<title>Core Web Vitals</title>"));
        assert!(html.contains("placeholder=\"Country search...\""));
        assert!(html.contains(">Dark-Mode</a>"));
        assert!(html.contains(">Light-Mode</a>"));
        assert!(html.contains(">Show Me</a>"));
        assert!(html.contains("<footer"));
    }

    #[test]
    fn modal_markup_follows_state() {
        let mut state = page(Route::Home);
        assert!(!render(&state, &Themes::default()).contains("role=\"dialog\""));

        handle_event(&mut state, &Event::ShowModal);
        let html = render(&state, &Themes::default());
        assert!(html.contains("role=\"dialog\""));
        assert!(html.contains("println!(&quot;Hello World&quot;);"));

        handle_event(&mut state, &Event::CloseModal);
        assert!(!render(&state, &Themes::default()).contains("role=\"dialog\""));
    }

    #[test]
    fn dark_route_adds_class() {
        let html = render(&page(Route::DarkMode), &Themes::default());
        assert!(html.contains("<div class=\"container dark-mode\""));

        let html = render(&page(Route::Home), &Themes::default());
        assert!(html.contains("<div class=\"container\""));
    }

    #[test]
    fn escapes_query_in_input() {
        let mut state = page(Route::Home);
        handle_event(&mut state, &Event::QueryChanged("\"><script>".into()));
        let html = render(&state, &Themes::default());
        assert!(html.contains("value=\"&quot;&gt;&lt;script&gt;\""));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn highlights_matched_names() {
        let mut state = page(Route::Home);
        handle_event(&mut state, &Event::QueryChanged("Franc".into()));
        let html = render(&state, &Themes::default());
        assert!(html.contains("<mark>Franc</mark>e - 67,000,000"));
        assert!(!html.contains("Germany"));
    }

    #[test]
    fn misspelled_query_renders_marks() {
        let mut state = page(Route::Home);
        handle_event(&mut state, &Event::QueryChanged("Frence".into()));
        let html = render(&state, &Themes::default());
        assert!(html.contains("<mark>"));
        assert!(html.contains(" - 67,000,000"));
        assert!(!html.contains("Germany"));
    }
}
