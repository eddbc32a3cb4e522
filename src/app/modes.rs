//! Route and theme mode types for the page.
//!
//! The page is reachable under two routes that render the same content and
//! differ only in the presentation flag on the root container.
//!
//! # Example
//!
//! ```rust
//! use poplookup::app::modes::{Route, ThemeMode};
//!
//! let route = Route::from_path("/dark-mode").unwrap();
//! assert_eq!(route.theme_mode(), ThemeMode::Dark);
//! assert_eq!(ThemeMode::Dark.container_class(), "container dark-mode");
//! ```

/// Navigable page routes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Route {
    /// `/`, the light page.
    Home,
    /// `/dark-mode`, the dark page.
    DarkMode,
}

impl Route {
    /// Resolves a request path to a route. Returns `None` for unknown paths.
    #[must_use]
    pub fn from_path(path: &str) -> Option<Self> {
        match path {
            "/" | "" => Some(Self::Home),
            "/dark-mode" => Some(Self::DarkMode),
            _ => None,
        }
    }

    #[must_use]
    pub const fn path(self) -> &'static str {
        match self {
            Self::Home => "/",
            Self::DarkMode => "/dark-mode",
        }
    }

    #[must_use]
    pub const fn theme_mode(self) -> ThemeMode {
        match self {
            Self::Home => ThemeMode::Light,
            Self::DarkMode => ThemeMode::Dark,
        }
    }
}

/// Presentation flag derived from the active route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ThemeMode {
    #[default]
    Light,
    Dark,
}

impl ThemeMode {
    #[must_use]
    pub const fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Class list for the root container. Only the dark mode adds a class.
    #[must_use]
    pub const fn container_class(self) -> &'static str {
        match self {
            Self::Light => "container",
            Self::Dark => "container dark-mode",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolves_known_paths() {
        assert_eq!(Route::from_path("/"), Some(Route::Home));
        assert_eq!(Route::from_path("/dark-mode"), Some(Route::DarkMode));
        assert_eq!(Route::from_path("/light-mode"), None);
    }

    #[test]
    fn only_dark_route_sets_flag() {
        assert!(Route::DarkMode.theme_mode().is_dark());
        assert!(!Route::Home.theme_mode().is_dark());
        assert_eq!(Route::Home.theme_mode().container_class(), "container");
    }

    #[test]
    fn paths_round_trip() {
        for route in [Route::Home, Route::DarkMode] {
            assert_eq!(Route::from_path(route.path()), Some(route));
        }
    }
}
