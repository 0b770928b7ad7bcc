//! Error types for catalog loading.

use std::result;

/// Errors that can occur while parsing or validating a catalog.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("malformed font catalog: {0}")]
    Parse(#[from] serde_json::Error),

    #[error("web-safe name {0:?} appears more than once")]
    DuplicateName(String),

    #[error("family identifier {family:?} shared by {first:?} and {second:?}")]
    FamilyCollision { family: String, first: String, second: String },
}

pub type Result<T> = result::Result<T, Error>;
