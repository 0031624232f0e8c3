// src/runner.rs
use std::path::PathBuf;

use tracing::info;

use crate::{
    config::options::{AppOptions, SourceOptions},
    core::net,
    data::{Extraction, StructureWarning},
    error::Result,
    progress::Progress,
    render::Renderer,
    specs::disruptions::{self, MarkupSource},
};

/// Summary of what was produced.
#[derive(Debug, Default)]
pub struct RunSummary {
    pub files_written: Vec<PathBuf>,
    /// Records that made it onto pages.
    pub rendered: usize,
    /// Records dropped by the night filter.
    pub filtered_out: usize,
    pub warnings: Vec<StructureWarning>,
}

/// Extract from the configured source: a local file if set, else the URL.
pub fn collect(source: &SourceOptions) -> Result<Extraction> {
    match &source.html_file {
        Some(path) => {
            info!("reading {}", path.display());
            disruptions::extract(Some(MarkupSource::File(path)))
        }
        None => {
            let html = net::fetch_html(&source.url)?;
            disruptions::extract(Some(MarkupSource::Text(&html)))
        }
    }
}

/// Top-level: collect, then render with `renderer`.
pub fn run_with(
    opts: &AppOptions,
    renderer: &Renderer,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let extraction = collect(&opts.source)?;
    render_extraction(extraction, renderer, progress)
}

/// Top-level with fonts discovered from `opts`.
pub fn run(opts: &AppOptions, progress: Option<&mut dyn Progress>) -> Result<RunSummary> {
    let renderer = Renderer::new(opts.render.clone())?;
    run_with(opts, &renderer, progress)
}

pub fn render_extraction(
    extraction: Extraction,
    renderer: &Renderer,
    progress: Option<&mut dyn Progress>,
) -> Result<RunSummary> {
    let Extraction { records, filtered_out, warnings } = extraction;
    let files_written = renderer.render(&records, progress)?;
    info!(
        "{} pages, {} disruptions, {} night-only skipped, {} warnings",
        files_written.len(),
        records.len(),
        filtered_out,
        warnings.len()
    );
    Ok(RunSummary { files_written, rendered: records.len(), filtered_out, warnings })
}
