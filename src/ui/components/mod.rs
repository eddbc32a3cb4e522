//! Composable page component renderers.
//!
//! Each component writes one part of the page into a [`fmt::Write`] sink.
//!
//! # Components
//!
//! - [`head`]: Document head and themed stylesheet
//! - [`header`]: Theme navigation and page heading
//! - [`search`]: Search form
//! - [`list`]: Country rows
//! - [`modal`]: Code sample trigger and dialog
//! - [`footer`]: Attribution link
//!
//! # Layout
//!
//! ```text
//! <head>
//! <div class="container [dark-mode]">
//!   [Nav]
//!   <main>
//!     [Title]
//!     [Search]
//!     [Country List]
//!     [Code Sample + Modal]
//!   </main>
//!   [Footer]
//! </div>
//! ```

mod footer;
mod head;
mod header;
mod list;
mod modal;
mod search;

use std::fmt::{self, Write};

use crate::ui::helpers::escape_html;
use crate::ui::theme::Themes;
use crate::ui::viewmodel::PageViewModel;

use footer::render_footer;
use head::render_head;
use header::{render_nav, render_title};
use list::render_country_list;
use modal::render_code_sample;
use search::render_search_bar;

/// Renders a complete HTML document.
///
/// # Errors
///
/// Propagates errors from the underlying writer.
pub fn render_page(out: &mut impl Write, vm: &PageViewModel, themes: &Themes) -> fmt::Result {
    writeln!(out, "<!DOCTYPE html>")?;
    writeln!(out, "<html lang=\"en\">")?;
    render_head(out, &vm.header, themes)?;
    writeln!(out, "<body>")?;
    writeln!(
        out,
        "<div class=\"{}\" data-theme=\"{}\">",
        escape_html(&vm.container_class),
        if vm.is_dark { "dark" } else { "light" }
    )?;

    render_nav(out, &vm.header)?;

    writeln!(out, "<main>")?;
    render_title(out)?;
    render_search_bar(out, &vm.search_bar)?;
    render_country_list(out, &vm.rows)?;
    render_code_sample(out, &vm.modal)?;
    writeln!(out, "</main>")?;

    render_footer(out, &vm.footer)?;

    writeln!(out, "</div>")?;
    writeln!(out, "</body>")?;
    writeln!(out, "</html>")
}
