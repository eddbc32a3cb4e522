//! Search box renderer.
//!
//! The search box is a GET form targeting the current route, so each submitted
//! input reaches the page controller as one `QueryChanged` event.

use std::fmt::{self, Write};

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::SearchBarInfo;

/// Renders the "Population Lookup" heading and the search form.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn render_search_bar(out: &mut impl Write, search: &SearchBarInfo) -> fmt::Result {
    writeln!(out, "<h2>Population Lookup</h2>")?;
    writeln!(
        out,
        "<form class=\"search\" method=\"get\" action=\"{}\" role=\"search\">",
        escape_html(&search.action)
    )?;
    writeln!(
        out,
        "<input type=\"text\" name=\"q\" placeholder=\"Country search...\" value=\"{}\" autocomplete=\"off\">",
        escape_html(&search.query)
    )?;
    writeln!(out, "</form>")
}
