// src/config/options.rs
use std::path::PathBuf;

use serde::Deserialize;

use super::consts::*;
use crate::render::{colors::LineColorMap, style::Style};

#[derive(Clone, Debug, Default)]
pub struct AppOptions {
    pub source: SourceOptions,
    pub render: RenderOptions,
}

/// Where the markup comes from. A local file wins over the URL.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SourceOptions {
    pub url: String,
    pub html_file: Option<PathBuf>,
}

impl Default for SourceOptions {
    fn default() -> Self {
        Self { url: s!(SOURCE_URL), html_file: None }
    }
}

/// What to do when no records survive extraction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum EmptyPages {
    /// Write nothing.
    #[default]
    Skip,
    /// Write one page holding only the header row.
    HeaderOnly,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
pub struct WrapWidths {
    pub lines: usize,
    pub title: usize,
    pub timestamp: usize,
    pub reason: usize,
}

impl WrapWidths {
    pub fn uniform(width: usize) -> Self {
        Self { lines: width, title: width, timestamp: width, reason: width }
    }

    pub fn as_array(&self) -> [usize; 4] {
        [self.lines, self.title, self.timestamp, self.reason]
    }
}

impl Default for WrapWidths {
    fn default() -> Self {
        Self::uniform(DEFAULT_WRAP_WIDTH)
    }
}

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct FontOptions {
    /// Text face. Auto-discovered when unset.
    pub font: Option<PathBuf>,
    /// Face used for glyphs the text face lacks (emoji markers). Auto-discovered when unset.
    pub emoji_font: Option<PathBuf>,
}

#[derive(Clone, Debug)]
pub struct RenderOptions {
    pub out_dir: PathBuf,
    pub rows_per_page: usize,
    pub wrap: WrapWidths,
    pub line_colors: LineColorMap,
    pub fonts: FontOptions,
    /// Decorative logos for the heading band; unreadable ones are skipped.
    pub logos: Vec<PathBuf>,
    pub empty_pages: EmptyPages,
    pub style: Style,
    /// Pixels per point.
    pub scale: f32,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            out_dir: PathBuf::from(DEFAULT_OUT_DIR),
            rows_per_page: DEFAULT_ROWS_PER_PAGE,
            wrap: WrapWidths::default(),
            line_colors: LineColorMap::default(),
            fonts: FontOptions::default(),
            logos: Vec::new(),
            empty_pages: EmptyPages::default(),
            style: Style::classic(),
            scale: 2.0,
        }
    }
}

impl RenderOptions {
    /// Rows per page, never zero.
    pub fn page_size(&self) -> usize {
        self.rows_per_page.max(1)
    }
}
