//! CLI definitions and command dispatch.

use std::path::{Path, PathBuf};

use anyhow::{Context, Result, bail};
use clap::{Parser, Subcommand};
use directories::BaseDirs;
use fontlist_core::{
    GenerateConfig, check,
    config::{CSS_FILENAME, DATA_PATH, FONTS_DIR, HTML_FILENAME},
    generate,
};

#[derive(Parser)]
#[command(name = "fontlist")]
#[command(about = "Generate the font selection list and stylesheet from the font catalog")]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Debug, Clone, clap::Args)]
pub struct SourceArgs {
    /// Base for relative input paths [default: home directory]
    #[arg(long)]
    pub root: Option<PathBuf>,
    /// Font metadata store
    #[arg(long, default_value = DATA_PATH)]
    pub data: PathBuf,
}

impl SourceArgs {
    pub fn root(&self) -> Result<PathBuf> {
        match &self.root {
            Some(root) => Ok(root.clone()),
            None => BaseDirs::new()
                .map(|dirs| dirs.home_dir().to_path_buf())
                .context("Could not determine the home directory, pass --root"),
        }
    }
}

#[derive(Subcommand)]
pub enum Commands {
    /// Write the HTML fragment and the stylesheet
    Generate {
        #[command(flatten)]
        source: SourceArgs,
        /// Directory of .woff web fonts
        #[arg(long, default_value = FONTS_DIR)]
        fonts: PathBuf,
        #[arg(long, default_value = HTML_FILENAME)]
        html: PathBuf,
        #[arg(long, default_value = CSS_FILENAME)]
        css: PathBuf,
        /// Fail when a font has no web font file
        #[arg(long)]
        strict: bool,
    },
    /// Validate the catalog without writing anything
    Check {
        #[command(flatten)]
        source: SourceArgs,
    },
}

impl Commands {
    pub fn run(self) -> Result<()> {
        match self {
            Commands::Generate { source, fonts, html, css, strict } => {
                let root = source.root()?;
                let config = generate_config(&root, source.data, fonts, html, css);
                let report = generate(&config)?;
                if strict && !report.is_complete() {
                    bail!(
                        "{} fonts have no web font in {}",
                        report.missing_assets.len(),
                        config.fonts_dir.display()
                    );
                }
            }
            Commands::Check { source } => {
                let data = source.root()?.join(&source.data);
                let summary = check(&data)?;
                println!(
                    "{}: {} fonts, {} variants",
                    data.display(),
                    summary.records,
                    summary.variants
                );
            }
        }
        Ok(())
    }
}

/// Resolve the inputs against `root`; outputs stay relative to the working
/// directory.
pub fn generate_config(
    root: &Path,
    data: PathBuf,
    fonts: PathBuf,
    html: PathBuf,
    css: PathBuf,
) -> GenerateConfig {
    GenerateConfig {
        data: root.join(data),
        fonts_dir: root.join(fonts),
        html_out: html,
        css_out: css,
    }
}
