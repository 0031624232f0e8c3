// src/config/file.rs
//! Optional TOML config file. Every key is optional; present keys overlay
//! the defaults in [`AppOptions`], and CLI flags overlay the result.

use std::{collections::BTreeMap, fs, path::{Path, PathBuf}};

use serde::Deserialize;

use super::options::{AppOptions, EmptyPages};
use crate::error::{Error, Result};
use crate::render::{colors::parse_hex, style::StylePreset};

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct ConfigFile {
    pub url: Option<String>,
    pub html_file: Option<PathBuf>,
    pub out_dir: Option<PathBuf>,
    pub rows_per_page: Option<usize>,
    pub style: Option<StylePreset>,
    pub empty_pages: Option<EmptyPages>,
    pub font: Option<PathBuf>,
    pub emoji_font: Option<PathBuf>,
    #[serde(default)]
    pub logos: Vec<PathBuf>,
    pub scale: Option<f32>,
    #[serde(default)]
    pub wrap: WrapOverride,
    #[serde(default)]
    pub line_colors: BTreeMap<String, String>,
}

#[derive(Clone, Debug, Default, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct WrapOverride {
    pub lines: Option<usize>,
    pub title: Option<usize>,
    pub timestamp: Option<usize>,
    pub reason: Option<usize>,
}

pub fn load(path: &Path) -> Result<ConfigFile> {
    let text = fs::read_to_string(path).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })?;
    parse(&text, path)
}

pub fn parse(text: &str, path: &Path) -> Result<ConfigFile> {
    toml::from_str(text).map_err(|e| Error::Config {
        path: path.to_path_buf(),
        reason: e.to_string(),
    })
}

impl ConfigFile {
    /// Overlay present keys onto `opts`. `origin` is only used in error messages.
    pub fn apply(self, opts: &mut AppOptions, origin: &Path) -> Result<()> {
        if let Some(url) = self.url { opts.source.url = url; }
        if let Some(f) = self.html_file { opts.source.html_file = Some(f); }

        let r = &mut opts.render;
        if let Some(dir) = self.out_dir { r.out_dir = dir; }
        if let Some(n) = self.rows_per_page { r.rows_per_page = n; }
        if let Some(preset) = self.style { r.style = preset.style(); }
        if let Some(p) = self.empty_pages { r.empty_pages = p; }
        if let Some(f) = self.font { r.fonts.font = Some(f); }
        if let Some(f) = self.emoji_font { r.fonts.emoji_font = Some(f); }
        if !self.logos.is_empty() { r.logos = self.logos; }
        if let Some(scale) = self.scale { r.scale = scale; }

        let w = self.wrap;
        if let Some(v) = w.lines { r.wrap.lines = v; }
        if let Some(v) = w.title { r.wrap.title = v; }
        if let Some(v) = w.timestamp { r.wrap.timestamp = v; }
        if let Some(v) = w.reason { r.wrap.reason = v; }

        for (code, hex) in self.line_colors {
            let color = parse_hex(&hex).ok_or_else(|| Error::Config {
                path: origin.to_path_buf(),
                reason: format!("line_colors.{code}: not a #rrggbb color: {hex:?}"),
            })?;
            r.line_colors.insert(&code, color);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::render::colors::DEFAULT_LINE_COLOR;

    #[test]
    fn overlay_keeps_defaults_for_absent_keys() {
        let cfg = parse(
            r##"
            rows_per_page = 4
            empty_pages = "header-only"
            [wrap]
            title = 30
            [line_colors]
            S99 = "#112233"
            "##,
            Path::new("test.toml"),
        )
        .unwrap();

        let mut opts = AppOptions::default();
        cfg.apply(&mut opts, Path::new("test.toml")).unwrap();

        assert_eq!(opts.render.rows_per_page, 4);
        assert_eq!(opts.render.empty_pages, EmptyPages::HeaderOnly);
        assert_eq!(opts.render.wrap.title, 30);
        assert_eq!(opts.render.wrap.lines, 20);
        assert_eq!(opts.render.out_dir, PathBuf::from("output"));
        assert_eq!(opts.render.line_colors.lookup("S99"), image::Rgba([0x11, 0x22, 0x33, 0xff]));
        assert_ne!(opts.render.line_colors.lookup("S1"), DEFAULT_LINE_COLOR);
    }

    #[test]
    fn bad_color_is_a_config_error() {
        let cfg = parse("[line_colors]\nS1 = \"red\"\n", Path::new("c.toml")).unwrap();
        let err = cfg.apply(&mut AppOptions::default(), Path::new("c.toml")).unwrap_err();
        assert!(matches!(err, Error::Config { .. }));
        assert!(err.to_string().contains("S1"));
    }

    #[test]
    fn unknown_key_is_rejected() {
        assert!(parse("rows = 3\n", Path::new("c.toml")).is_err());
    }
}
