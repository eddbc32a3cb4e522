//! Country list renderer.
//!
//! Renders the displayed countries as `<li>` rows keyed by country code, with
//! fuzzy match highlighting on the name.

use std::fmt::{self, Write};

use crate::ui::helpers::{escape_html, write_highlighted_text};
use crate::ui::viewmodel::CountryRow;

/// Renders all rows inside a `<ul class="countries">`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn render_country_list(out: &mut impl Write, rows: &[CountryRow]) -> fmt::Result {
    writeln!(out, "<ul class=\"countries\">")?;
    for row in rows {
        render_country_row(out, row)?;
    }
    writeln!(out, "</ul>")
}

/// Renders one row as `{name} - {population}`.
fn render_country_row(out: &mut impl Write, row: &CountryRow) -> fmt::Result {
    write!(out, "<li class=\"country\" data-key=\"{}\"><p>", escape_html(&row.key))?;
    write_highlighted_text(out, &row.name, &row.highlight_ranges)?;
    writeln!(out, " - {}</p></li>", escape_html(&row.population))
}
