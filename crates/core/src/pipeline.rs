//! Generation pipeline: read the catalog, render both passes, write outputs.

use std::{
    path::{Path, PathBuf},
    time::Instant,
};

use anyhow::{Context, Result};
use chrono::Utc;
use fontlist_catalog::Catalog;
use log::{debug, info};

use crate::{
    assets::{AssetStore, FontDir},
    config::{CSS_FILENAME, DATA_PATH, FONTS_DIR, HTML_FILENAME, SECTIONS, TIMESTAMP_FORMAT},
    io::{DataFile, read_catalog},
    render::{render_css, render_html},
    sections::{Section, validate_sections},
};

/// Resolved locations for one generation run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GenerateConfig {
    /// Font metadata store.
    pub data: PathBuf,
    /// Directory of web fonts checked for each control.
    pub fonts_dir: PathBuf,
    pub html_out: PathBuf,
    pub css_out: PathBuf,
}

impl GenerateConfig {
    /// Default layout: inputs under `root`, outputs in the working directory.
    pub fn from_root(root: &Path) -> Self {
        Self {
            data: root.join(DATA_PATH),
            fonts_dir: root.join(FONTS_DIR),
            html_out: PathBuf::from(HTML_FILENAME),
            css_out: PathBuf::from(CSS_FILENAME),
        }
    }
}

/// Counts gathered while rendering.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GenerationReport {
    /// Records in the catalog, variants included.
    pub records: usize,
    pub variants: usize,
    pub html_controls: usize,
    pub css_rules: usize,
    /// Web-safe names left out of the HTML for a missing asset.
    pub missing_assets: Vec<String>,
}

impl GenerationReport {
    /// Whether every non-variant font got a control.
    pub fn is_complete(&self) -> bool {
        self.missing_assets.is_empty()
    }
}

/// Both rendered buffers, not yet written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Rendered {
    pub html: String,
    pub css: String,
    pub report: GenerationReport,
}

/// Current UTC time in the marker format.
pub fn timestamp() -> String {
    Utc::now().format(TIMESTAMP_FORMAT).to_string()
}

/// Render the HTML and CSS passes over a catalog.
///
/// The passes share nothing and run side by side.
pub fn render_catalog<A>(
    catalog: &Catalog,
    sections: &[Section],
    assets: &A,
    timestamp: &str,
) -> Result<Rendered>
where
    A: AssetStore + Sync + ?Sized,
{
    let fonts = catalog.records();
    let (html, css) = rayon::join(
        || render_html(fonts, sections, assets, timestamp),
        || render_css(fonts),
    );
    let html = html.context("Failed to render font list HTML")?;
    let css = css.context("Failed to render font list CSS")?;

    let report = GenerationReport {
        records: catalog.len(),
        variants: catalog.variant_count(),
        html_controls: html.controls,
        css_rules: css.rules,
        missing_assets: html.missing,
    };
    Ok(Rendered { html: html.text, css: css.text, report })
}

/// Run a full generation: nothing is written unless both passes succeed.
pub fn generate(config: &GenerateConfig) -> Result<GenerationReport> {
    let start = Instant::now();
    let catalog = read_catalog(&config.data)?;
    println!("Loaded {} fonts from {}", catalog.len(), config.data.display());

    if let Err(e) = validate_sections(SECTIONS, catalog.len()) {
        debug!("section table does not fit the catalog: {e}");
    }

    let assets = FontDir::new(&config.fonts_dir);
    let rendered = render_catalog(&catalog, SECTIONS, &assets, &timestamp())?;

    DataFile::new(&config.html_out).write(&rendered.html)?;
    info!("wrote {}", config.html_out.display());
    DataFile::new(&config.css_out).write(&rendered.css)?;
    info!("wrote {}", config.css_out.display());

    let report = rendered.report;
    println!(
        "Generated {} controls and {} CSS rules in {:.2}s",
        report.html_controls,
        report.css_rules,
        start.elapsed().as_secs_f64()
    );
    println!(
        "  Skipped: {} variants, {} missing fonts",
        report.variants,
        report.missing_assets.len()
    );
    Ok(report)
}

/// Summary of a catalog check.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSummary {
    pub records: usize,
    pub variants: usize,
}

/// Parse and validate the catalog and the section table, writing nothing.
pub fn check(data: &Path) -> Result<CatalogSummary> {
    let catalog = read_catalog(data)?;
    validate_sections(SECTIONS, catalog.len())
        .with_context(|| format!("Section table does not fit {}", data.display()))?;
    Ok(CatalogSummary { records: catalog.len(), variants: catalog.variant_count() })
}
