//! Theme navigation and page heading.

use std::fmt::{self, Write};

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::HeaderInfo;

/// Renders the two theme buttons. The button of the current route is marked
/// `active` and `aria-current`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn render_nav(out: &mut impl Write, header: &HeaderInfo) -> fmt::Result {
    writeln!(out, "<nav class=\"nav\">")?;
    for button in &header.nav {
        let (class, current) = if button.is_active {
            ("button active", " aria-current=\"page\"")
        } else {
            ("button", "")
        };
        writeln!(
            out,
            "<a class=\"{class}\" href=\"{}\"{current}>{}</a>",
            escape_html(&button.href),
            escape_html(&button.label)
        )?;
    }
    writeln!(out, "</nav>")
}

/// Renders the main heading.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn render_title(out: &mut impl Write) -> fmt::Result {
    writeln!(
        out,
        "<h1 class=\"title\">Powered by <a href=\"https://www.rust-lang.org\">Rust!</a></h1>"
    )
}
