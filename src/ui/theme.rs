//! Theme management and CSS custom property generation.
//!
//! This module defines the colour palettes for the two page routes. Palettes
//! are built in (`light`, `dark`) or loaded from TOML files, and are emitted
//! into the page as CSS custom properties: the light palette on `.container`,
//! the dark palette on `.container.dark-mode`. The route only toggles the class.
//!
//! # TOML Format
//!
//! ```toml
//! name = "my-theme"
//!
//! [colors]
//! background = "#ffffff"
//! text = "#111827"
//! text_dim = "#6b7280"
//! accent = "#0070f3"
//! border = "#eaeaea"
//! input_bg = "#ffffff"
//! input_fg = "#111827"
//! match_highlight_bg = "#fde68a"
//! match_highlight_fg = "#111827"
//! modal_bg = "#ffffff"
//! modal_backdrop = "#00000080"
//! code_bg = "#f3f4f6"
//! ```
//!
//! Colours are `#rrggbb` or `#rrggbbaa`. Anything else renders as white, so a
//! theme file can never inject arbitrary CSS.
//!
//! # Example
//!
//! ```rust
//! use poplookup::ui::theme::Theme;
//!
//! let theme = Theme::from_name("dark").unwrap();
//! assert_eq!(Theme::css_color(&theme.colors.background), "rgb(30, 30, 46)");
//! ```

use crate::domain::{PoplookupError, Result};
use serde::{Deserialize, Serialize};
use std::fmt::Write;
use std::fs;
use std::path::Path;

/// Colour scheme for one route.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct Theme {
    /// Human-readable theme name.
    pub name: String,
    /// Colour palette for all page elements.
    pub colors: ThemeColors,
}

/// Colour definitions for all page elements, as hex strings.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ThemeColors {
    /// Page background.
    pub background: String,
    /// Body text.
    pub text: String,
    /// Secondary text (footer, placeholders).
    pub text_dim: String,
    /// Links and buttons.
    pub accent: String,
    /// Separators and input borders.
    pub border: String,

    pub input_bg: String,
    pub input_fg: String,

    /// Fuzzy match highlight background.
    pub match_highlight_bg: String,
    /// Fuzzy match highlight foreground.
    pub match_highlight_fg: String,

    pub modal_bg: String,
    /// Overlay behind the open modal, usually translucent.
    pub modal_backdrop: String,
    pub code_bg: String,
}

impl Theme {
    /// Loads a built-in theme by name (`light` or `dark`).
    ///
    /// # Returns
    ///
    /// - `Some(Theme)` if the theme name is recognized
    /// - `None` if the theme name is unknown
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        let toml_str = match name {
            "light" => include_str!("../../themes/light.toml"),
            "dark" => include_str!("../../themes/dark.toml"),
            _ => return None,
        };

        toml::from_str(toml_str).ok()
    }

    /// Loads a theme from a TOML file.
    ///
    /// # Errors
    ///
    /// Returns [`PoplookupError::Theme`] if the file cannot be read or the TOML
    /// content cannot be parsed.
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .map_err(|e| PoplookupError::Theme(format!("failed to read theme file: {e}")))?;

        toml::from_str(&contents)
            .map_err(|e| PoplookupError::Theme(format!("failed to parse theme TOML: {e}")))
    }

    /// Parses `#rrggbb` or `#rrggbbaa`. Returns opaque white on parse errors.
    fn hex_to_rgba(hex: &str) -> (u8, u8, u8, Option<u8>) {
        const WHITE: (u8, u8, u8, Option<u8>) = (255, 255, 255, None);

        let hex = hex.trim().trim_start_matches('#');
        if !hex.is_ascii() || (hex.len() != 6 && hex.len() != 8) {
            return WHITE;
        }

        let channel = |range: std::ops::Range<usize>| u8::from_str_radix(&hex[range], 16).ok();

        match (channel(0..2), channel(2..4), channel(4..6)) {
            (Some(r), Some(g), Some(b)) if hex.len() == 6 => (r, g, b, None),
            (Some(r), Some(g), Some(b)) => match channel(6..8) {
                Some(a) => (r, g, b, Some(a)),
                None => WHITE,
            },
            _ => WHITE,
        }
    }

    /// Converts a hex colour to a CSS `rgb()` or `rgba()` value.
    #[must_use]
    pub fn css_color(hex: &str) -> String {
        match Self::hex_to_rgba(hex) {
            (r, g, b, None) => format!("rgb({r}, {g}, {b})"),
            (r, g, b, Some(a)) => format!("rgba({r}, {g}, {b}, {:.3})", f64::from(a) / 255.0),
        }
    }

    /// Returns the palette as CSS custom property declarations.
    #[must_use]
    pub fn css_variables(&self) -> String {
        let c = &self.colors;
        let vars = [
            ("--bg", &c.background),
            ("--text", &c.text),
            ("--text-dim", &c.text_dim),
            ("--accent", &c.accent),
            ("--border", &c.border),
            ("--input-bg", &c.input_bg),
            ("--input-fg", &c.input_fg),
            ("--mark-bg", &c.match_highlight_bg),
            ("--mark-fg", &c.match_highlight_fg),
            ("--modal-bg", &c.modal_bg),
            ("--modal-backdrop", &c.modal_backdrop),
            ("--code-bg", &c.code_bg),
        ];

        let mut css = String::new();
        for (name, hex) in vars {
            let _ = write!(css, "{name}: {}; ", Self::css_color(hex));
        }
        css.trim_end().to_string()
    }
}

impl Default for Theme {
    /// Returns the built-in light theme.
    ///
    /// # Panics
    ///
    /// Panics if the built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self::from_name("light").expect("Built-in light theme should always parse")
    }
}

/// The pair of palettes a page needs, one per route.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Themes {
    pub light: Theme,
    pub dark: Theme,
}

impl Default for Themes {
    /// # Panics
    ///
    /// Panics if a built-in theme fails to parse (should never occur).
    fn default() -> Self {
        Self {
            light: Theme::default(),
            dark: Theme::from_name("dark").expect("Built-in dark theme should always parse"),
        }
    }
}
