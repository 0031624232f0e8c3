// src/render/style.rs
//! Visual decoration of a page. Presets cover the stock looks; the builder
//! adjusts them field by field.

use image::Rgba;
use serde::Deserialize;

use super::colors::parse_hex;
use super::page::COLUMNS;

const fn rgb(r: u8, g: u8, b: u8) -> Rgba<u8> {
    Rgba([r, g, b, 0xff])
}

#[derive(Clone, Debug, PartialEq)]
pub struct Style {
    /// Heading text; the validity date is appended.
    pub heading: String,
    pub heading_marker: Option<String>,
    pub columns: [String; COLUMNS],
    pub background: Rgba<u8>,
    pub header_bg: Rgba<u8>,
    pub header_fg: Rgba<u8>,
    pub cell_bg: Rgba<u8>,
    pub cell_fg: Rgba<u8>,
    pub grid: Rgba<u8>,
    pub heading_fg: Rgba<u8>,
    pub footer_fg: Rgba<u8>,
    pub reason_markers: bool,
    pub footer_markers: bool,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum StylePreset {
    Classic,
    Alert,
}

impl StylePreset {
    pub fn style(self) -> Style {
        match self {
            StylePreset::Classic => Style::classic(),
            StylePreset::Alert => Style::alert(),
        }
    }
}

impl Style {
    pub fn classic() -> Self {
        Self {
            heading: s!("Disruptions Valid for"),
            heading_marker: Some(s!("🔮")),
            columns: [s!("Lines"), s!("Title"), s!("Timestamp"), s!("Reason")],
            background: rgb(0xf5, 0xf5, 0xf5),
            header_bg: rgb(0x00, 0x7a, 0xc2),
            header_fg: rgb(0xff, 0xff, 0xff),
            cell_bg: rgb(0xff, 0xff, 0xff),
            cell_fg: rgb(0x00, 0x00, 0x00),
            grid: rgb(0xdd, 0xdd, 0xdd),
            heading_fg: rgb(0x33, 0x33, 0x33),
            footer_fg: rgb(0x55, 0x55, 0x55),
            reason_markers: false,
            footer_markers: true,
        }
    }

    pub fn alert() -> Self {
        Self {
            heading: s!("Service Alerts for"),
            heading_marker: Some(s!("⚠")),
            columns: [s!("Lines"), s!("Title"), s!("Timestamp"), s!("Alert")],
            header_bg: rgb(0xb7, 0x1c, 0x1c),
            reason_markers: true,
            ..Self::classic()
        }
    }

    pub fn builder() -> StyleBuilder {
        StyleBuilder { style: Self::classic() }
    }

    pub fn to_builder(self) -> StyleBuilder {
        StyleBuilder { style: self }
    }
}

pub struct StyleBuilder {
    style: Style,
}

impl StyleBuilder {
    pub fn heading(mut self, text: impl Into<String>) -> Self {
        self.style.heading = text.into();
        self
    }

    pub fn heading_marker(mut self, marker: Option<&str>) -> Self {
        self.style.heading_marker = marker.map(String::from);
        self
    }

    /// Header colors as `#rrggbb`; malformed values leave the current color.
    pub fn header_colors(mut self, bg: &str, fg: &str) -> Self {
        if let Some(c) = parse_hex(bg) { self.style.header_bg = c; }
        if let Some(c) = parse_hex(fg) { self.style.header_fg = c; }
        self
    }

    pub fn reason_markers(mut self, on: bool) -> Self {
        self.style.reason_markers = on;
        self
    }

    pub fn footer_markers(mut self, on: bool) -> Self {
        self.style.footer_markers = on;
        self
    }

    pub fn build(self) -> Style {
        self.style
    }
}
