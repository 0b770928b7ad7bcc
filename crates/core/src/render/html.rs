//! Selection list pass: grouped headings and one radio control per font.

use std::fmt::{self, Display, Formatter, Write};

use fontlist_catalog::FontRecord;
use fontlist_text::{format_title, format_usage};
use log::debug;

use super::escape_amp;
use crate::{
    assets::AssetStore,
    config::{FONT_INFO_URL, INFO_ICON_HREF, RADIO_NAME},
    sections::{Classifier, Section, SubHeader},
};

/// Top-level section heading and its introduction.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SectionHeading<'a>(pub &'a Section);

impl Display for SectionHeading<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            r#"<hr><div class="box mt-4"><h1 class="title is-size-3 has-text-dark mb-2">{}</h1></div>"#,
            escape_amp(self.0.title)
        )?;
        write!(f, r#"<p class="is-size-7">{}</p>"#, self.0.description)
    }
}

/// Sub-header for a run of fonts sharing an origin.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
    /// Origin markup.
    pub origin: String,
    /// Usage text, no `<h3>` is written when empty.
    pub usage: String,
}

impl From<SubHeader<'_>> for Header {
    fn from(sub: SubHeader<'_>) -> Self {
        Self { origin: format_title(sub.origin), usage: format_usage(sub.usage) }
    }
}

impl Display for Header {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let margin = if self.usage.is_empty() { " mb-2" } else { "" };
        write!(
            f,
            r#"<h2 class="title has-text-dark is-size-6 mt-4{margin}">{}</h2>"#,
            self.origin
        )?;
        if !self.usage.is_empty() {
            write!(f, "\n<h3 class=\"subtitle has-text-dark is-size-7 mb-2\">{}</h3>", self.usage)?;
        }
        Ok(())
    }
}

/// Radio control selecting one font.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Radio<'a> {
    /// Form name shared by all controls.
    pub name: &'a str,
    /// Web-safe name, the control value.
    pub id: &'a str,
    /// Element id and label target.
    pub for_id: String,
    pub label: &'a str,
    pub underline: bool,
}

impl<'a> Radio<'a> {
    pub fn new(font: &'a FontRecord, family: &str) -> Self {
        Self {
            name: RADIO_NAME,
            id: &font.web_safe_name,
            for_id: family.to_lowercase(),
            label: &font.base_name,
            underline: font.has_plus,
        }
    }
}

impl Display for Radio<'_> {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        let Self { name, id, for_id, label, underline } = self;
        writeln!(f, r#"<a href="{FONT_INFO_URL}{id}" target="_blank">"#)?;
        writeln!(
            f,
            r#"  <svg role="img" class="material-icons has-text-dark"><use xlink:href="{INFO_ICON_HREF}"></use></svg>"#
        )?;
        writeln!(f, "</a>")?;
        writeln!(f, r#"<label for="{for_id}">"#)?;
        write!(f, r#"  <input type="radio" name="{name}" id="{for_id}" value="{id}"> "#)?;
        if *underline {
            writeln!(f, "<u>{label}</u>")?;
        } else {
            writeln!(f, "{label}")?;
        }
        write!(f, "</label>")
    }
}

/// Rendered selection list.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HtmlOutput {
    pub text: String,
    /// Number of radio controls written.
    pub controls: usize,
    /// Web-safe names of fonts skipped for a missing asset.
    pub missing: Vec<String>,
}

/// Render the grouped selection list.
///
/// Variants are skipped outright. A font whose asset is missing still opens
/// its section and sub-header but gets no control. The block is wrapped in
/// begin/end markers carrying `timestamp`.
pub fn render_html<A>(
    fonts: &[FontRecord],
    sections: &[Section],
    assets: &A,
    timestamp: &str,
) -> Result<HtmlOutput, fmt::Error>
where
    A: AssetStore + ?Sized,
{
    let mut out = HtmlOutput::default();
    writeln!(out.text, "<!-- automatic generation begin ({timestamp}) -->")?;
    writeln!(out.text, "<div>")?;

    let mut classifier = Classifier::new(sections);
    for font in fonts {
        if font.is_variant() {
            debug!("skipping variant {}", font.web_safe_name);
            continue;
        }

        let headings = classifier.advance(font);
        if let Some(section) = headings.section {
            writeln!(out.text, "{}", SectionHeading(section))?;
        }
        if let Some(sub_header) = headings.sub_header {
            writeln!(out.text, "{}", Header::from(sub_header))?;
        }

        let family = font.family();
        if !assets.has_font(&family) {
            eprintln!("! Font file not found: {family} ({})", font.web_safe_name);
            out.missing.push(font.web_safe_name.clone());
            continue;
        }
        writeln!(out.text, "{}", Radio::new(font, &family))?;
        out.controls += 1;
    }

    writeln!(out.text, "</div>")?;
    writeln!(out.text, "<!-- automatic generation end ({timestamp}) -->")?;
    Ok(out)
}
