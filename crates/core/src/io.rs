//! Catalog and output file I/O.

use std::{
    fs::{create_dir_all, read, write},
    path::{Path, PathBuf},
};

use anyhow::{Context, Result};
use fontlist_catalog::Catalog;

/// A generated or source text file.
#[derive(Debug, Clone)]
pub struct DataFile {
    path: PathBuf,
}

impl DataFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn read(&self) -> Result<Vec<u8>> {
        read(&self.path).with_context(|| format!("Failed to read: {}", self.path.display()))
    }

    /// Overwrite the file with `data`.
    pub fn write(&self, data: impl AsRef<[u8]>) -> Result<()> {
        self.ensure_parent_dir()?;
        write(&self.path, data)
            .with_context(|| format!("Failed to write: {}", self.path.display()))
    }

    pub fn ensure_parent_dir(&self) -> Result<()> {
        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            create_dir_all(parent)
                .with_context(|| format!("Failed to create directory: {}", parent.display()))?;
        }
        Ok(())
    }
}

impl AsRef<Path> for DataFile {
    fn as_ref(&self) -> &Path {
        &self.path
    }
}

/// Read and validate the font metadata store.
pub fn read_catalog(path: impl AsRef<Path>) -> Result<Catalog> {
    let path = path.as_ref();
    let data = DataFile::new(path).read()?;
    Catalog::from_json(&data).with_context(|| format!("Invalid font catalog: {}", path.display()))
}
