//! Poplookup: a server-rendered country population lookup page.
//!
//! The page lists every country with its population, narrows the list with a
//! typo-tolerant fuzzy search, opens a small code-sample modal and comes in a
//! light and a dark theme:
//! - Country data loaded per request from a REST countries provider
//! - Fuzzy filtering with a fixed 0.3 threshold and full-list fallback
//! - Page state machine driven by events, rendered to plain HTML
//! - Theme selected by route (`/` light, `/dark-mode` dark)

#![allow(clippy::multiple_crate_versions)]

//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────┐
//! │  HTTP Host (server/, main.rs)                       │  ← axum router
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Application Layer (app/)                           │  ← Page state machine
//! │  - Event handling                                   │
//! │  - Action dispatching                               │
//! │  - View model computation                           │
//! └─────────────────────────────────────────────────────┘
//!         │                    │                    │
//! ┌───────────────┐   ┌───────────────┐   ┌───────────────┐
//! │ UI Layer      │   │ Search        │   │ Loader        │
//! │ (ui/)         │   │ (search/)     │   │ (loader/)     │
//! │ - HTML output │   │ - Bitap match │   │ - HTTP fetch  │
//! │ - Theming     │   │ - Ranking     │   │ - Narrowing   │
//! │ - Components  │   │               │   │ - File source │
//! └───────────────┘   └───────────────┘   └───────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Domain Layer (domain/)                             │
//! │  - Error types                                      │
//! │  - Country summary model                            │
//! └─────────────────────────────────────────────────────┘
//!                        │
//! ┌─────────────────────────────────────────────────────┐
//! │  Observability (observability/)                     │
//! │  - stderr logs                                      │
//! │  - Optional OTLP JSON file export                   │
//! └─────────────────────────────────────────────────────┘
//! ```
//!
//! # Modules
//!
//! - [`app`]: Page state machine with event/action model
//! - [`domain`]: Core domain types (`CountrySummary`, errors)
//! - [`loader`]: Country sources and record narrowing
//! - [`search`]: Fuzzy matching and ranking
//! - [`server`]: HTTP routes and request replay
//! - [`ui`]: HTML rendering with theme support
//! - [`observability`]: Tracing subscriber and span export
//!
//! # Configuration
//!
//! Configuration is read from `POPLOOKUP_*` environment variables:
//!
//! ```sh
//! POPLOOKUP_PORT=8080 \
//! POPLOOKUP_COUNTRIES_FILE=./countries.json \
//! POPLOOKUP_TRACE_LEVEL=debug \
//! poplookup
//! ```
//!
//! # Request Flow
//!
//! 1. **Load**: The configured [`loader::CountrySource`] returns the narrowed list
//! 2. **Replay**: `q` and `modal=open` become page events on a fresh `PageState`
//! 3. **Render**: The view model is computed and written out as HTML
//!
//! # Examples
//!
//! ```rust
//! use poplookup::{handle_event, CountrySummary, Event, PageState, Route};
//!
//! let countries = vec![
//!     CountrySummary::new("France", "FR", 67_000_000),
//!     CountrySummary::new("Germany", "DE", 83_000_000),
//! ];
//! let mut state = PageState::new(countries, Route::Home);
//!
//! let (changed, actions) = handle_event(&mut state, &Event::QueryChanged("Franc".into()));
//! assert!(changed);
//! assert_eq!(actions.len(), 1);
//! assert_eq!(state.displayed.len(), 1);
//! ```

pub mod app;
pub mod domain;
pub mod loader;
pub mod search;
pub mod server;

pub mod ui;

pub mod observability;

pub use app::{handle_event, Action, Event, PageState, Route, ThemeMode};
pub use domain::{CountrySummary, PoplookupError, Result};
pub use ui::{Theme, Themes};

use std::collections::BTreeMap;
use std::path::PathBuf;

/// Prefix of the environment variables read by [`Config::from_env`].
pub const ENV_PREFIX: &str = "POPLOOKUP_";

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;

/// Runtime configuration.
///
/// Values come from a flat key/value map, usually the `POPLOOKUP_*`
/// environment variables with the prefix stripped and the key lowercased.
///
/// # Example
///
/// ```sh
/// POPLOOKUP_HOST=127.0.0.1
/// POPLOOKUP_PORT=8080
/// POPLOOKUP_COUNTRIES_URL=https://restcountries.com/v3.1/all?fields=name,cca2,population
/// POPLOOKUP_DARK_THEME_FILE=/etc/poplookup/dark.toml
/// POPLOOKUP_TRACE_FILE=/var/log/poplookup/otlp.json
/// ```
#[derive(Debug, Clone)]
pub struct Config {
    /// Interface to bind. Default: `0.0.0.0`
    pub host: String,

    /// Port to bind. Default: `3000`
    pub port: u16,

    /// Provider endpoint returning the full country list.
    pub countries_url: String,

    /// Provider-format JSON file to serve instead of calling `countries_url`.
    pub countries_file: Option<PathBuf>,

    /// Whole-request timeout for the provider call, in seconds. Default: `10`
    pub request_timeout_secs: u64,

    /// Built-in palette for `/`. Ignored if `light_theme_file` is set.
    pub light_theme: Option<String>,

    /// Built-in palette for `/dark-mode`. Ignored if `dark_theme_file` is set.
    pub dark_theme: Option<String>,

    /// Custom TOML palette for `/`. See [`ui::theme`] for format.
    pub light_theme_file: Option<PathBuf>,

    /// Custom TOML palette for `/dark-mode`.
    pub dark_theme_file: Option<PathBuf>,

    /// Log filter used when `RUST_LOG` is unset.
    ///
    /// Options: `trace`, `debug`, `info`, `warn`, `error`, or any `EnvFilter`
    /// directive. Default: `"info"`
    pub trace_level: Option<String>,

    /// OTLP JSON file for span export. No export when unset.
    pub trace_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            countries_url: loader::DEFAULT_COUNTRIES_URL.to_string(),
            countries_file: None,
            request_timeout_secs: loader::DEFAULT_TIMEOUT.as_secs(),
            light_theme: None,
            dark_theme: None,
            light_theme_file: None,
            dark_theme_file: None,
            trace_level: None,
            trace_file: None,
        }
    }
}

impl Config {
    /// Parses configuration from a key/value map.
    ///
    /// # Parsing Rules
    ///
    /// - Unknown keys are ignored
    /// - Empty values count as unset
    /// - `port` and `request_timeout_secs` fall back to their defaults on parse
    ///   errors, with a warning
    ///
    /// # Example
    ///
    /// ```rust
    /// use std::collections::BTreeMap;
    /// use poplookup::Config;
    ///
    /// let mut map = BTreeMap::new();
    /// map.insert("port".to_string(), "8080".to_string());
    /// map.insert("dark_theme".to_string(), "dark".to_string());
    ///
    /// let config = Config::from_map(&map);
    /// assert_eq!(config.port, 8080);
    /// assert_eq!(config.dark_theme.as_deref(), Some("dark"));
    /// assert_eq!(config.host, "0.0.0.0");
    /// ```
    #[must_use]
    pub fn from_map(config: &BTreeMap<String, String>) -> Self {
        let get = |key: &str| {
            config
                .get(key)
                .map(|v| v.trim())
                .filter(|v| !v.is_empty())
                .map(String::from)
        };

        let defaults = Self::default();

        Self {
            host: get("host").unwrap_or(defaults.host),
            port: parse_or(get("port"), "port", defaults.port),
            countries_url: get("countries_url").unwrap_or(defaults.countries_url),
            countries_file: get("countries_file").map(PathBuf::from),
            request_timeout_secs: parse_or(
                get("request_timeout_secs"),
                "request_timeout_secs",
                defaults.request_timeout_secs,
            ),
            light_theme: get("light_theme"),
            dark_theme: get("dark_theme"),
            light_theme_file: get("light_theme_file").map(PathBuf::from),
            dark_theme_file: get("dark_theme_file").map(PathBuf::from),
            trace_level: get("trace_level"),
            trace_file: get("trace_file").map(PathBuf::from),
        }
    }

    /// Reads `POPLOOKUP_*` environment variables.
    ///
    /// `POPLOOKUP_PORT` becomes key `port`, and so on.
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_map(&env_map(std::env::vars()))
    }

    /// `host:port` string for the listener.
    #[must_use]
    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn env_map(vars: impl IntoIterator<Item = (String, String)>) -> BTreeMap<String, String> {
    vars.into_iter()
        .filter_map(|(key, value)| {
            key.strip_prefix(ENV_PREFIX)
                .map(|name| (name.to_ascii_lowercase(), value))
        })
        .collect()
}

fn parse_or<T: std::str::FromStr + std::fmt::Display>(raw: Option<String>, key: &str, default: T) -> T
where
    T::Err: std::fmt::Display,
{
    match raw {
        Some(raw) => raw.parse().unwrap_or_else(|e| {
            tracing::warn!(key, value = %raw, error = %e, "invalid config value, using default {default}");
            default
        }),
        None => default,
    }
}

/// Loads the light and dark palettes.
///
/// For each mode: the theme file wins, then the built-in name, then the
/// built-in default for that mode. Failures are logged and fall through.
///
/// # Example
///
/// ```rust
/// use poplookup::{load_themes, Config, Themes};
///
/// let themes = load_themes(&Config::default());
/// assert_eq!(themes, Themes::default());
/// ```
#[must_use]
pub fn load_themes(config: &Config) -> Themes {
    let defaults = Themes::default();

    Themes {
        light: load_theme(
            config.light_theme_file.as_ref(),
            config.light_theme.as_deref(),
            defaults.light,
        ),
        dark: load_theme(
            config.dark_theme_file.as_ref(),
            config.dark_theme.as_deref(),
            defaults.dark,
        ),
    }
}

fn load_theme(file: Option<&PathBuf>, name: Option<&str>, fallback: Theme) -> Theme {
    file.map_or_else(
        || {
            name.map_or_else(
                || fallback.clone(),
                |theme_name| {
                    Theme::from_name(theme_name).unwrap_or_else(|| {
                        tracing::warn!(theme_name = %theme_name, "unknown theme, using default");
                        fallback.clone()
                    })
                },
            )
        },
        |theme_file| {
            Theme::from_file(theme_file).unwrap_or_else(|e| {
                tracing::warn!(theme_file = %theme_file.display(), error = %e, "failed to load theme from file, using default");
                fallback.clone()
            })
        },
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    fn map(pairs: &[(&str, &str)]) -> BTreeMap<String, String> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_string(), (*v).to_string()))
            .collect()
    }

    #[test]
    fn empty_map_gives_defaults() {
        let config = Config::from_map(&BTreeMap::new());
        assert_eq!(config.bind_address(), "0.0.0.0:3000");
        assert_eq!(config.countries_url, loader::DEFAULT_COUNTRIES_URL);
        assert_eq!(config.request_timeout_secs, 10);
        assert!(config.countries_file.is_none());
        assert!(config.trace_file.is_none());
    }

    #[test]
    fn parses_all_keys() {
        let config = Config::from_map(&map(&[
            ("host", "127.0.0.1"),
            ("port", "8080"),
            ("countries_url", "http://localhost:9000/all"),
            ("countries_file", "/srv/countries.json"),
            ("request_timeout_secs", "3"),
            ("light_theme", "light"),
            ("dark_theme", "dark"),
            ("trace_level", "debug"),
            ("trace_file", "/tmp/otlp.json"),
        ]));
        assert_eq!(config.bind_address(), "127.0.0.1:8080");
        assert_eq!(config.countries_url, "http://localhost:9000/all");
        assert_eq!(config.countries_file, Some(PathBuf::from("/srv/countries.json")));
        assert_eq!(config.request_timeout_secs, 3);
        assert_eq!(config.trace_level.as_deref(), Some("debug"));
        assert_eq!(config.trace_file, Some(PathBuf::from("/tmp/otlp.json")));
    }

    #[test]
    fn bad_numbers_fall_back() {
        let config = Config::from_map(&map(&[("port", "eighty"), ("request_timeout_secs", "-1")]));
        assert_eq!(config.port, 3000);
        assert_eq!(config.request_timeout_secs, 10);
    }

    #[test]
    fn blank_values_are_unset() {
        let config = Config::from_map(&map(&[("host", "  "), ("countries_file", "")]));
        assert_eq!(config.host, "0.0.0.0");
        assert!(config.countries_file.is_none());
    }

    #[test]
    fn env_vars_are_prefixed_and_lowercased() {
        let vars = vec![
            ("POPLOOKUP_PORT".to_string(), "9000".to_string()),
            ("POPLOOKUP_TRACE_LEVEL".to_string(), "warn".to_string()),
            ("PORT".to_string(), "1".to_string()),
        ];
        let config = Config::from_map(&env_map(vars));
        assert_eq!(config.port, 9000);
        assert_eq!(config.trace_level.as_deref(), Some("warn"));
    }

    #[test]
    fn theme_file_wins_over_name() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        let mut custom = Theme::from_name("dark").unwrap();
        custom.name = "midnight".to_string();
        write!(file, "{}", toml::to_string(&custom).unwrap()).unwrap();

        let config = Config {
            dark_theme: Some("light".to_string()),
            dark_theme_file: Some(file.path().to_path_buf()),
            ..Config::default()
        };
        let themes = load_themes(&config);
        assert_eq!(themes.dark.name, "midnight");
        assert_eq!(themes.light.name, "light");
    }

    #[test]
    fn unknown_theme_falls_back_per_mode() {
        let config = Config {
            light_theme: Some("solarized".to_string()),
            dark_theme_file: Some(PathBuf::from("/nonexistent/theme.toml")),
            ..Config::default()
        };
        let themes = load_themes(&config);
        assert_eq!(themes, Themes::default());
    }

    #[test]
    fn names_can_swap_palettes() {
        let config = Config {
            light_theme: Some("dark".to_string()),
            ..Config::default()
        };
        assert_eq!(load_themes(&config).light.name, "dark");
    }
}
