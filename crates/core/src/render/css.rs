//! Stylesheet pass: one `@font-face` and one size class per font.

use std::fmt::{self, Display, Formatter, Write};

use fontlist_catalog::FontRecord;

use crate::config::{CSS_FONT_URL_PREFIX, FONT_EXTENSION};

/// CSS rules for a single font.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FontFace<'a> {
    /// Web-safe name, used as family name and class suffix.
    pub id: &'a str,
    /// Family identifier, the font file stem.
    pub family: &'a str,
    pub pixel_size: u32,
}

impl<'a> FontFace<'a> {
    pub fn new(font: &'a FontRecord, family: &'a str) -> Self {
        Self { id: &font.web_safe_name, family, pixel_size: font.pixel_size }
    }
}

impl Display for FontFace<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { id, family, pixel_size } = self;
        writeln!(f, "@font-face {{")?;
        writeln!(f, "  font-family: \"{id}\";")?;
        writeln!(
            f,
            "  src: url(\"{CSS_FONT_URL_PREFIX}{family}.{FONT_EXTENSION}\") format(\"{FONT_EXTENSION}\");"
        )?;
        writeln!(f, "  font-display: swap;")?;
        writeln!(f, "}}")?;
        writeln!(f, ".font-{id} {{")?;
        writeln!(f, "  font-family: {id};")?;
        writeln!(f, "  font-size: {pixel_size}px;")?;
        writeln!(f, "  line-height: {pixel_size}px;")?;
        write!(f, "}}")
    }
}

/// Rendered stylesheet.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CssOutput {
    pub text: String,
    pub rules: usize,
}

/// Render the stylesheet for every non-variant font.
///
/// Asset presence is not checked here: the rules reference fonts by URL.
pub fn render_css(fonts: &[FontRecord]) -> Result<CssOutput, fmt::Error> {
    let mut out = CssOutput::default();
    for font in fonts.iter().filter(|f| !f.is_variant()) {
        let family = font.family();
        writeln!(out.text, "{}", FontFace::new(font, &family))?;
        out.rules += 1;
    }
    Ok(out)
}
