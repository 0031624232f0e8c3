// src/render/mod.rs
//! # Renderer
//!
//! Turns filtered [`DisruptionRecord`]s into one PNG per page:
//!
//! ```text
//! records → WrappedRow (wrap + marker) → paginate → PageLayout → Painter → file
//! ```
//!
//! - `wrap`, `markers`, `page` and `layout` are pure and unit-tested.
//! - Column widths are measured once per run with the loaded faces, so every
//!   page of a run shares them.
//! - `fonts` and logos are best-effort: missing ones are logged, never fatal
//!   (an explicitly configured text font is the one exception). Without a
//!   system text font the bundled DejaVu Sans is used.
//! - Each page image is built, written and dropped before the next begins.
//! - A failed write aborts the run; pages already written stay on disk.

pub mod colors;
pub mod draw;
pub mod fonts;
pub mod layout;
pub mod markers;
pub mod page;
pub mod style;
pub mod wrap;

use std::path::PathBuf;

use chrono::{Days, Local, NaiveDate};
use image::RgbaImage;
use tracing::{debug, info, warn};

use crate::config::{consts::DATE_FORMAT, options::RenderOptions};
use crate::data::DisruptionRecord;
use crate::error::Result;
use crate::file;
use crate::progress::Progress;

use draw::{Decor, Painter};
use fonts::FontSet;
use layout::PageLayout;
use page::{PageModel, WrappedRow};

pub struct Renderer {
    opts: RenderOptions,
    fonts: FontSet,
    logos: Vec<RgbaImage>,
    generated_on: NaiveDate,
}

impl Renderer {
    /// Resolve fonts and logos for `opts`, dated today.
    pub fn new(opts: RenderOptions) -> Result<Self> {
        let fonts = FontSet::discover(&opts.fonts)?;
        Ok(Self::with_fonts(opts, fonts))
    }

    /// Use the given fonts instead of discovering them.
    pub fn with_fonts(opts: RenderOptions, fonts: FontSet) -> Self {
        let logos = load_logos(&opts.logos);
        Self { opts, fonts, logos, generated_on: Local::now().date_naive() }
    }

    /// Pin the generation date (heading shows the day after).
    pub fn dated(mut self, day: NaiveDate) -> Self {
        self.generated_on = day;
        self
    }

    pub fn options(&self) -> &RenderOptions {
        &self.opts
    }

    /// Wrap and paginate without drawing.
    pub fn pages(&self, records: &[DisruptionRecord]) -> Vec<PageModel> {
        let style = &self.opts.style;
        let rows: Vec<WrappedRow> = records
            .iter()
            .map(|r| WrappedRow::from_record(r, &self.opts.wrap, style.reason_markers))
            .collect();
        page::paginate(rows, self.opts.page_size(), &style.columns, self.opts.empty_pages)
    }

    pub fn heading(&self) -> String {
        let valid_for = self
            .generated_on
            .checked_add_days(Days::new(1))
            .unwrap_or(self.generated_on);
        let text = format!("{}: {}", self.opts.style.heading, valid_for.format(DATE_FORMAT));
        match &self.opts.style.heading_marker {
            Some(m) => join!(m, " ", &text),
            None => text,
        }
    }

    pub fn footer(&self, page: &PageModel) -> String {
        let generated = format!("Generated: {}", self.generated_on.format(DATE_FORMAT));
        let of = format!("Page {} of {}", page.index, page.total);
        if self.opts.style.footer_markers {
            format!("📆 {generated}     📄 {of}")
        } else {
            format!("{generated}     {of}")
        }
    }

    /// Render every page into the output directory; returns paths in page order.
    pub fn render(
        &self,
        records: &[DisruptionRecord],
        mut progress: Option<&mut dyn Progress>,
    ) -> Result<Vec<PathBuf>> {
        let out_dir = &self.opts.out_dir;
        file::ensure_directory(out_dir)?;

        let pages = self.pages(records);
        if let Some(p) = progress.as_deref_mut() {
            p.begin(pages.len());
        }
        if pages.is_empty() {
            info!("no disruptions to render");
        }

        let painter = Painter {
            style: &self.opts.style,
            colors: &self.opts.line_colors,
            fonts: &self.fonts,
        };
        let columns = layout::column_widths(&pages, &self.opts.wrap, |t, pt| painter.measure(t, pt));
        let heading = self.heading();
        let mut written = Vec::with_capacity(pages.len());

        for page in &pages {
            let layout = PageLayout::compute(page, &columns, self.opts.scale, !self.logos.is_empty());
            let decor = Decor { heading: heading.clone(), footer: self.footer(page), logos: &self.logos };
            let img = painter.draw(page, &layout, &decor);

            let path = file::page_path(out_dir, page.index);
            debug!("page {}/{}: {}x{} px, {} rows", page.index, page.total, layout.width, layout.height, page.rows.len());
            if let Err(e) = file::save_page(img, &path) {
                if let Some(p) = progress.as_deref_mut() {
                    p.log(&e.to_string());
                    p.finish();
                }
                return Err(e);
            }
            info!("wrote {}", path.display());

            if let Some(p) = progress.as_deref_mut() {
                p.page_done(page.index, &path);
            }
            written.push(path);
        }

        if let Some(p) = progress.as_deref_mut() {
            p.finish();
        }
        Ok(written)
    }
}

fn load_logos(paths: &[PathBuf]) -> Vec<RgbaImage> {
    paths
        .iter()
        .filter_map(|p| match image::open(p) {
            Ok(img) => Some(img.to_rgba8()),
            Err(e) => {
                warn!("skipping logo {}: {e}", p.display());
                None
            }
        })
        .collect()
}

/// One-call form: discover fonts, render, return written paths.
pub fn render_pages(records: &[DisruptionRecord], opts: RenderOptions) -> Result<Vec<PathBuf>> {
    Renderer::new(opts)?.render(records, None)
}
