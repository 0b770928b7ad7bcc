//! Section boundaries and sub-header grouping.

use anyhow::{Result, bail};
use fontlist_catalog::FontRecord;

/// A top-level group of fonts, opened at a fixed catalog index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Section {
    /// Catalog index of the first record in the section.
    pub index: usize,
    /// Plain-text heading.
    pub title: &'static str,
    /// Introductory paragraph, inline markup.
    pub description: &'static str,
}

/// Check a section table against a catalog of `len` records.
///
/// Indices must be strictly ascending and inside the catalog.
pub fn validate_sections(sections: &[Section], len: usize) -> Result<()> {
    for pair in sections.windows(2) {
        if pair[0].index >= pair[1].index {
            bail!(
                "section {:?} (index {}) is not after {:?} (index {})",
                pair[1].title,
                pair[1].index,
                pair[0].title,
                pair[0].index
            );
        }
    }
    if let Some(section) = sections.iter().find(|s| s.index >= len) {
        bail!(
            "section {:?} starts at index {} but the catalog has {len} records",
            section.title,
            section.index
        );
    }
    Ok(())
}

/// Origin and usage texts of a new sub-header, unformatted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SubHeader<'a> {
    pub origin: &'a str,
    pub usage: &'a str,
}

/// Headings to emit before a record.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Headings<'a> {
    pub section: Option<&'a Section>,
    pub sub_header: Option<SubHeader<'a>>,
}

/// Forward-pass cursor deciding which headings precede each record.
///
/// Sub-headers are de-duplicated by adjacency only: a run of records with the
/// same origin text shares one sub-header, a later run with that origin gets
/// its own.
#[derive(Debug, Clone)]
pub struct Classifier<'a> {
    sections: &'a [Section],
    last_origin: &'a str,
}

impl<'a> Classifier<'a> {
    pub fn new(sections: &'a [Section]) -> Self {
        Self { sections, last_origin: "" }
    }

    /// Classify the next record, updating the last seen origin.
    pub fn advance(&mut self, font: &'a FontRecord) -> Headings<'a> {
        let section = usize::try_from(font.index)
            .ok()
            .and_then(|index| self.sections.iter().find(|s| s.index == index));
        let sub_header = (font.origin_text != self.last_origin).then(|| {
            self.last_origin = &font.origin_text;
            SubHeader { origin: &font.origin_text, usage: &font.usage_text }
        });
        Headings { section, sub_header }
    }
}
