//! HTML and CSS render passes.
//!
//! Each pass walks the catalog once and writes into an in-memory buffer. The
//! only escaping performed is `&` in section titles; record text is trusted
//! catalog data and is written verbatim.

mod css;
mod html;

pub use css::{CssOutput, FontFace, render_css};
pub use html::{Header, HtmlOutput, Radio, SectionHeading, render_html};

/// Escape `&` for HTML text content.
fn escape_amp(text: &str) -> String {
    text.replace('&', "&amp;")
}
