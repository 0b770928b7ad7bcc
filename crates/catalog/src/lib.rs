//! # Font catalog
//!
//! In-memory model of the oldschool PC font metadata store
//! (`font_info.json`): an ordered list of font records.
//!
//! Catalog order matters. Section boundaries and sub-header grouping are
//! both decided by walking the records front to back.

mod error;

use std::collections::{HashMap, HashSet, hash_map::Entry};

use fontlist_text::{family_identifier, is_variant};
use serde::{Deserialize, Serialize};

pub use error::{Error, Result};

/// One font entry of the catalog.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FontRecord {
    /// Position in the source catalog, used for section boundaries.
    pub index: i64,
    /// Stable, unique identifier (HTML value, CSS selector and family).
    pub web_safe_name: String,
    /// Label is underlined when true (expanded character set).
    #[serde(default)]
    pub has_plus: bool,
    /// Human-readable font name.
    pub base_name: String,
    #[serde(default)]
    pub has_aspect: bool,
    #[serde(default)]
    pub sq_aspect: String,
    #[serde(default)]
    pub ac_aspect: String,
    #[serde(default)]
    pub orig_w: u32,
    #[serde(default)]
    pub orig_h: u32,
    /// Pixel size of the web font, used for `font-size` and `line-height`.
    #[serde(rename = "fon_woff_sz_px")]
    pub pixel_size: u32,
    #[serde(default)]
    pub ttf_sz_px: u32,
    #[serde(default)]
    pub ttf_sz_pt: u32,
    /// Hardware or software the font originates from.
    #[serde(rename = "infotxt_origins")]
    pub origin_text: String,
    /// Free-form usage notes, may be empty.
    #[serde(rename = "infotxt_usage", default)]
    pub usage_text: String,
}

impl FontRecord {
    /// Family identifier derived from the base name.
    pub fn family(&self) -> String {
        family_identifier(&self.base_name)
    }

    /// Whether this record is a stretched-aspect variant of another record.
    pub fn is_variant(&self) -> bool {
        is_variant(&self.web_safe_name)
    }
}

/// The ordered font catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Catalog {
    #[serde(rename = "font_info")]
    fonts: Vec<FontRecord>,
}

impl Catalog {
    /// Build a catalog from records, checking its integrity.
    pub fn new(fonts: Vec<FontRecord>) -> Result<Self> {
        let catalog = Self { fonts };
        catalog.validate()?;
        Ok(catalog)
    }

    /// Parse and validate a JSON metadata document.
    pub fn from_json(data: &[u8]) -> Result<Self> {
        let catalog: Self = serde_json::from_slice(data)?;
        catalog.validate()?;
        Ok(catalog)
    }

    pub fn records(&self) -> &[FontRecord] {
        &self.fonts
    }

    pub fn len(&self) -> usize {
        self.fonts.len()
    }

    pub fn is_empty(&self) -> bool {
        self.fonts.is_empty()
    }

    /// Records that are not variants, in catalog order.
    pub fn primary(&self) -> impl Iterator<Item = &FontRecord> {
        self.fonts.iter().filter(|f| !f.is_variant())
    }

    pub fn variant_count(&self) -> usize {
        self.fonts.iter().filter(|f| f.is_variant()).count()
    }

    /// Check that web-safe names are unique and that no two primary records
    /// share a family identifier.
    pub fn validate(&self) -> Result<()> {
        let mut names = HashSet::new();
        for font in &self.fonts {
            if !names.insert(font.web_safe_name.as_str()) {
                return Err(Error::DuplicateName(font.web_safe_name.clone()));
            }
        }

        let mut families: HashMap<String, &str> = HashMap::new();
        for font in self.primary() {
            match families.entry(font.family()) {
                Entry::Occupied(entry) => {
                    return Err(Error::FamilyCollision {
                        family: entry.key().clone(),
                        first: entry.get().to_string(),
                        second: font.web_safe_name.clone(),
                    });
                }
                Entry::Vacant(entry) => {
                    entry.insert(&font.web_safe_name);
                }
            }
        }
        Ok(())
    }
}
