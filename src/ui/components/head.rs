//! Document head renderer.
//!
//! Emits `<head>` with the title, description and the inline stylesheet. Both
//! palettes go into the stylesheet so the `dark-mode` class alone switches
//! between them.

use std::fmt::{self, Write};

use crate::ui::helpers::escape_html;
use crate::ui::theme::Themes;
use crate::ui::viewmodel::HeaderInfo;

/// Layout rules shared by both palettes. Colours come from custom properties.
const BASE_STYLES: &str = "\
body { margin: 0; font-family: Inter, system-ui, sans-serif; }
.container { min-height: 100vh; background: var(--bg); color: var(--text); padding: 1rem 2rem; }
.container a { color: var(--accent); }
.nav { display: flex; gap: 0.5rem; }
.nav a.button { border: 1px solid var(--border); }
.nav a.button.active { border-color: var(--accent); }
.button { display: inline-block; padding: 0.4rem 0.9rem; border-radius: 6px; background: var(--accent); color: var(--bg) !important; text-decoration: none; }
main { max-width: 48rem; margin: 0 auto; }
.title { font-size: 2.5rem; text-align: center; }
.search input { width: 100%; padding: 0.6rem; border: 1px solid var(--border); border-radius: 6px; background: var(--input-bg); color: var(--input-fg); }
.countries { list-style: none; padding: 0; }
.country { border-bottom: 1px solid var(--border); }
mark { background: var(--mark-bg); color: var(--mark-fg); }
.modal-backdrop { position: fixed; inset: 0; background: var(--modal-backdrop); display: flex; align-items: center; justify-content: center; }
.modal { background: var(--modal-bg); border: 1px solid var(--border); border-radius: 8px; padding: 1.5rem; min-width: 20rem; }
.modal pre { background: var(--code-bg); padding: 1rem; border-radius: 6px; overflow-x: auto; }
.footer { border-top: 1px solid var(--border); margin-top: 2rem; padding: 1rem 0; text-align: center; color: var(--text-dim); }
";

/// Renders the document `<head>`.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn render_head(out: &mut impl Write, header: &HeaderInfo, themes: &Themes) -> fmt::Result {
    writeln!(out, "<head>")?;
    writeln!(out, "<meta charset=\"utf-8\">")?;
    writeln!(out, "<meta name=\"viewport\" content=\"width=device-width, initial-scale=1\">")?;
    writeln!(out, "<title>{}</title>", escape_html(&header.title))?;
    writeln!(out, "<meta name=\"description\" content=\"{}\">", escape_html(&header.description))?;
    writeln!(out, "<link href=\"https://fonts.googleapis.com/css2?family=Inter\" rel=\"stylesheet\">")?;
    writeln!(out, "<style>")?;
    writeln!(out, ".container {{ {} }}", themes.light.css_variables())?;
    writeln!(out, ".container.dark-mode {{ {} }}", themes.dark.css_variables())?;
    out.write_str(BASE_STYLES)?;
    writeln!(out, "</style>")?;
    writeln!(out, "</head>")
}
