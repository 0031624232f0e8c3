// src/render/fonts.rs
//! Best-effort font discovery.
//!
//! The text face comes from an explicit path, the first well-known system
//! font found, or the DejaVu Sans copy bundled under `assets/fonts`. The
//! emoji face (used for marker glyphs the text face lacks) is searched by
//! file name under the usual font directories; without one, markers draw
//! with the text face.

use std::{
    env, fs,
    path::{Path, PathBuf},
};

use ab_glyph::{Font, FontArc};
use tracing::{debug, info, warn};

use crate::config::options::FontOptions;
use crate::error::{Error, Result};

const TEXT_FONT_NAMES: &[&str] = &[
    "dejavusans.ttf",
    "liberationsans-regular.ttf",
    "notosans-regular.ttf",
    "arial.ttf",
    "segoeui.ttf",
    "helvetica.ttf",
];

const EMOJI_FONT_NAMES: &[&str] = &["seguiemj", "notoemoji-regular", "symbola"];

const MAX_DEPTH: usize = 4;

const BUNDLED_TEXT_FONT: &[u8] = include_bytes!("../../assets/fonts/DejaVuSans.ttf");
const BUNDLED_TEXT_FONT_NAME: &str = "assets/fonts/DejaVuSans.ttf";

fn font_dirs() -> Vec<PathBuf> {
    let mut dirs: Vec<PathBuf> = [
        "/usr/share/fonts",
        "/usr/local/share/fonts",
        "/Library/Fonts",
        "/System/Library/Fonts",
        "C:\\Windows\\Fonts",
    ]
    .iter()
    .map(PathBuf::from)
    .collect();

    if let Some(home) = env::var_os("HOME") {
        let home = PathBuf::from(home);
        dirs.push(home.join(".local/share/fonts"));
        dirs.push(home.join(".fonts"));
        dirs.push(home.join("Library/Fonts"));
    }
    if let Some(local) = env::var_os("LOCALAPPDATA") {
        dirs.push(PathBuf::from(local).join("Microsoft\\Windows\\Fonts"));
    }
    dirs
}

fn walk(dir: &Path, depth: usize, out: &mut Vec<PathBuf>) {
    let Ok(entries) = fs::read_dir(dir) else { return };
    for entry in entries.flatten() {
        let path = entry.path();
        if path.is_dir() {
            if depth < MAX_DEPTH {
                walk(&path, depth + 1, out);
            }
        } else if is_font_file(&path) {
            out.push(path);
        }
    }
}

fn is_font_file(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("ttf") || e.eq_ignore_ascii_case("otf"))
        .unwrap_or(false)
}

fn lower_file_name(path: &Path) -> String {
    path.file_name()
        .map(|n| n.to_string_lossy().to_lowercase())
        .unwrap_or_default()
}

/// Pick the best match from `files`: earlier `names` rank higher.
/// `exact` compares whole file names, otherwise names are substrings.
fn pick(files: &[PathBuf], names: &[&str], exact: bool) -> Option<PathBuf> {
    names.iter().find_map(|want| {
        files
            .iter()
            .find(|f| {
                let name = lower_file_name(f);
                if exact { name == *want } else { name.contains(want) }
            })
            .cloned()
    })
}

fn load(path: &Path) -> std::result::Result<FontArc, String> {
    let bytes = fs::read(path).map_err(|e| e.to_string())?;
    FontArc::try_from_vec(bytes).map_err(|e| e.to_string())
}

fn bundled_text() -> Result<FontArc> {
    FontArc::try_from_slice(BUNDLED_TEXT_FONT).map_err(|e| Error::Asset {
        path: PathBuf::from(BUNDLED_TEXT_FONT_NAME),
        reason: e.to_string(),
    })
}

pub struct FontSet {
    pub text: FontArc,
    pub emoji: Option<FontArc>,
}

impl FontSet {
    /// The bundled text face and no emoji face.
    pub fn bundled() -> Result<Self> {
        Ok(Self { text: bundled_text()?, emoji: None })
    }

    /// Resolve fonts for a run. Only an explicitly configured text font that
    /// fails to load is an error; otherwise the bundled face is the last resort.
    pub fn discover(opts: &FontOptions) -> Result<Self> {
        let mut files = Vec::new();
        let needs_scan = opts.font.is_none() || opts.emoji_font.is_none();
        if needs_scan {
            for dir in font_dirs() {
                walk(&dir, 0, &mut files);
            }
            debug!("font scan found {} candidate files", files.len());
        }

        let system = match &opts.font {
            Some(path) => Some(load(path).map_err(|reason| Error::Asset {
                path: path.clone(),
                reason,
            })?),
            None => pick(&files, TEXT_FONT_NAMES, true).and_then(|p| {
                load(&p)
                    .inspect_err(|e| warn!("skipping font {}: {e}", p.display()))
                    .ok()
            }),
        };
        let text = match system {
            Some(f) => f,
            None => {
                info!("no system text font found, using {BUNDLED_TEXT_FONT_NAME}");
                bundled_text()?
            }
        };

        let emoji_path = opts.emoji_font.clone().or_else(|| pick(&files, EMOJI_FONT_NAMES, false));
        let emoji = emoji_path.and_then(|p| match load(&p) {
            Ok(f) => {
                debug!("emoji font: {}", p.display());
                Some(f)
            }
            Err(e) => {
                warn!("emoji font {} unusable: {e}", p.display());
                None
            }
        });

        Ok(Self { text, emoji })
    }

    /// Face to draw `ch` with: text face if it has the glyph, else the emoji face
    /// if it does, else the text face (renders its missing-glyph box).
    pub fn face_for(&self, ch: char) -> &FontArc {
        let has = |f: &FontArc| f.glyph_id(ch).0 != 0;
        match &self.emoji {
            Some(e) if !has(&self.text) && has(e) => e,
            _ => &self.text,
        }
    }
}
