//! Footer attribution renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::FooterInfo;

/// Renders the footer with its attribution link opening in a new tab.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn render_footer(out: &mut impl Write, footer: &FooterInfo) -> fmt::Result {
    writeln!(out, "<footer class=\"footer\">")?;
    writeln!(
        out,
        "<a href=\"{}\" target=\"_blank\" rel=\"noopener noreferrer\">{}</a>",
        escape_html(&footer.href),
        escape_html(&footer.label)
    )?;
    writeln!(out, "</footer>")
}
