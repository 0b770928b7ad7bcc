//! Web font availability.

use std::{
    collections::HashSet,
    path::{Path, PathBuf},
};

use crate::config::FONT_EXTENSION;

/// Answers whether the asset for a family identifier can be served.
pub trait AssetStore {
    fn has_font(&self, family: &str) -> bool;
}

/// A directory of `.woff` files named after their family identifier.
#[derive(Debug, Clone)]
pub struct FontDir {
    dir: PathBuf,
}

impl FontDir {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Expected location of a family's web font.
    pub fn font_path(&self, family: &str) -> PathBuf {
        self.dir.join(format!("{family}.{FONT_EXTENSION}"))
    }
}

impl AssetStore for FontDir {
    fn has_font(&self, family: &str) -> bool {
        self.font_path(family).exists()
    }
}

/// An in-memory set of available family identifiers.
#[derive(Debug, Clone, Default)]
pub struct AssetSet(HashSet<String>);

impl AssetSet {
    pub fn insert(&mut self, family: impl Into<String>) -> bool {
        self.0.insert(family.into())
    }
}

impl<S: Into<String>> FromIterator<S> for AssetSet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl AssetStore for AssetSet {
    fn has_font(&self, family: &str) -> bool {
        self.0.contains(family)
    }
}
