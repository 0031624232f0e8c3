// src/cli.rs
use std::path::{Path, PathBuf};

use clap::{Parser, ValueEnum};
use serde::Serialize;
use tracing::level_filters::LevelFilter;
use tracing::info;

use crate::config::{file as config_file, options::{AppOptions, EmptyPages, WrapWidths}};
use crate::error::{Error, Result};
use crate::progress::Progress;
use crate::render::style::StylePreset;
use crate::runner;

#[derive(Clone, Copy, Debug, ValueEnum)]
pub enum StyleArg {
    Classic,
    Alert,
}

impl From<StyleArg> for StylePreset {
    fn from(s: StyleArg) -> Self {
        match s {
            StyleArg::Classic => StylePreset::Classic,
            StyleArg::Alert => StylePreset::Alert,
        }
    }
}

#[derive(Debug, Parser)]
#[command(name = "disruption_board", version, about = "Render tomorrow's S-Bahn disruptions as table images")]
pub struct Args {
    /// TOML config file; flags override its values
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Page to fetch
    #[arg(long)]
    pub url: Option<String>,

    /// Read markup from a saved page instead of fetching
    #[arg(long = "html", value_name = "FILE")]
    pub html_file: Option<PathBuf>,

    /// Output directory (created if missing)
    #[arg(short, long, value_name = "DIR")]
    pub out: Option<PathBuf>,

    #[arg(short = 'n', long, value_name = "N")]
    pub rows_per_page: Option<usize>,

    /// Wrap width for every column
    #[arg(long, value_name = "CHARS")]
    pub wrap: Option<usize>,

    #[arg(long, value_enum)]
    pub style: Option<StyleArg>,

    /// Write a header-only page when nothing is left to show
    #[arg(long)]
    pub header_only_when_empty: bool,

    #[arg(long, value_name = "FILE")]
    pub font: Option<PathBuf>,

    #[arg(long, value_name = "FILE")]
    pub emoji_font: Option<PathBuf>,

    /// Logo image for the heading band (repeatable; first left, second right)
    #[arg(long = "logo", value_name = "FILE")]
    pub logos: Vec<PathBuf>,

    /// Pixels per point
    #[arg(long)]
    pub scale: Option<f32>,

    /// Print the filtered records as JSON instead of rendering
    #[arg(long)]
    pub dump: bool,

    #[arg(short, long, conflicts_with = "quiet")]
    pub verbose: bool,

    #[arg(short, long)]
    pub quiet: bool,
}

impl Args {
    pub fn log_level(&self) -> LevelFilter {
        if self.verbose {
            LevelFilter::DEBUG
        } else if self.quiet {
            LevelFilter::WARN
        } else {
            LevelFilter::INFO
        }
    }

    /// Defaults, then the config file, then flags.
    pub fn options(&self) -> Result<AppOptions> {
        let mut opts = AppOptions::default();
        if let Some(path) = &self.config {
            config_file::load(path)?.apply(&mut opts, path)?;
        }

        if let Some(url) = &self.url { opts.source.url = url.clone(); }
        if let Some(f) = &self.html_file { opts.source.html_file = Some(f.clone()); }

        let r = &mut opts.render;
        if let Some(dir) = &self.out { r.out_dir = dir.clone(); }
        if let Some(n) = self.rows_per_page { r.rows_per_page = n; }
        if let Some(w) = self.wrap { r.wrap = WrapWidths::uniform(w); }
        if let Some(s) = self.style { r.style = StylePreset::from(s).style(); }
        if self.header_only_when_empty { r.empty_pages = EmptyPages::HeaderOnly; }
        if let Some(f) = &self.font { r.fonts.font = Some(f.clone()); }
        if let Some(f) = &self.emoji_font { r.fonts.emoji_font = Some(f.clone()); }
        if !self.logos.is_empty() { r.logos = self.logos.clone(); }
        if let Some(s) = self.scale { r.scale = s; }

        if r.rows_per_page == 0 {
            return Err(Error::Config {
                path: self.config.clone().unwrap_or_default(),
                reason: s!("rows per page must be at least 1"),
            });
        }
        Ok(opts)
    }
}

/// Reports pages through the log.
struct LogProgress {
    total: usize,
}

impl Progress for LogProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        info!("rendering {total} page(s)");
    }
    fn log(&mut self, msg: &str) {
        info!("{msg}");
    }
    fn page_done(&mut self, index: usize, path: &Path) {
        info!("page {index}/{}: {}", self.total, path.display());
    }
}

fn dump_json<T: Serialize + ?Sized>(records: &T) -> Result<String> {
    Ok(serde_json::to_string_pretty(records)?)
}

pub fn run(args: &Args) -> Result<()> {
    let opts = args.options()?;

    if args.dump {
        let extraction = runner::collect(&opts.source)?;
        println!("{}", dump_json(&extraction.records)?);
        return Ok(());
    }

    let mut progress = LogProgress { total: 0 };
    let summary = runner::run(&opts, Some(&mut progress))?;

    println!("Generated images:");
    for path in &summary.files_written {
        println!("{}", path.display());
    }
    Ok(())
}
