//! Font list core - generates the font selection HTML fragment and its
//! stylesheet from the oldschool PC font catalog.

pub mod assets;
pub mod config;
pub mod io;
pub mod pipeline;
pub mod render;
pub mod sections;

pub use assets::{AssetSet, AssetStore, FontDir};
pub use fontlist_catalog::{Catalog, FontRecord};
pub use pipeline::{
    CatalogSummary, GenerateConfig, GenerationReport, Rendered, check, generate, render_catalog,
    timestamp,
};
pub use sections::{Classifier, Section, validate_sections};
