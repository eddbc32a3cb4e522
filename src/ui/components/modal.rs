//! Code sample block and modal renderer.

use std::fmt::{self, Write};

use crate::ui::helpers::escape_html;
use crate::ui::viewmodel::ModalInfo;

/// Renders the "Code Sample" block with its "Show Me" trigger, followed by the
/// dialog when it is open.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn render_code_sample(out: &mut impl Write, modal: &ModalInfo) -> fmt::Result {
    writeln!(out, "<section class=\"code-sample\">")?;
    writeln!(out, "<h2>Code Sample</h2>")?;
    writeln!(out, "<p>Ever wondered how to write a function that prints Hello World?</p>")?;
    writeln!(
        out,
        "<a class=\"button\" id=\"show-me\" href=\"{}\">Show Me</a>",
        escape_html(&modal.open_href)
    )?;

    if modal.is_open {
        render_dialog(out, modal)?;
    }

    writeln!(out, "</section>")
}

fn render_dialog(out: &mut impl Write, modal: &ModalInfo) -> fmt::Result {
    writeln!(out, "<div class=\"modal-backdrop\">")?;
    writeln!(
        out,
        "<div class=\"modal\" role=\"dialog\" aria-modal=\"true\" aria-labelledby=\"modal-title\">"
    )?;
    writeln!(out, "<h3 id=\"modal-title\">Hello World</h3>")?;
    writeln!(
        out,
        "<pre><code class=\"language-{}\">{}</code></pre>",
        escape_html(&modal.sample.language),
        escape_html(&modal.sample.code)
    )?;
    writeln!(
        out,
        "<a class=\"button\" id=\"close-modal\" href=\"{}\">Close</a>",
        escape_html(&modal.close_href)
    )?;
    writeln!(out, "</div>")?;
    writeln!(out, "</div>")
}
