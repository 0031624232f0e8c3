// src/render/colors.rs
//! Line identifier → display color.
//!
//! The built-in table is process-wide constant data, built once on first use.
//! A [`LineColorMap`] starts as a copy of it and may be overridden per run
//! (config file), so the shared table itself is never mutated.

use std::{collections::HashMap, sync::OnceLock};

use image::Rgba;

pub const DEFAULT_LINE_COLOR: Rgba<u8> = Rgba([0x00, 0x00, 0x00, 0xff]);

const LINE_COLORS: &[(&str, &str)] = &[
    ("S1", "#ec1e0e"), ("S2", "#009639"), ("S3", "#0076c0"), ("S5", "#e30613"),
    ("S7", "#a4343a"), ("S8", "#804998"), ("S9", "#ffc72c"), ("S25", "#b0008e"),
    ("S26", "#00b2a9"), ("S41", "#ff8c00"), ("S42", "#ff8c00"), ("S45", "#89cff0"),
    ("S46", "#ffd700"), ("S47", "#ff69b4"), ("S75", "#0076c0"), ("S85", "#6c3483"),
];

static BUILTIN: OnceLock<HashMap<String, Rgba<u8>>> = OnceLock::new();

fn builtin() -> &'static HashMap<String, Rgba<u8>> {
    BUILTIN.get_or_init(|| {
        LINE_COLORS
            .iter()
            .filter_map(|(code, hex)| parse_hex(hex).map(|c| (s!(*code), c)))
            .collect()
    })
}

/// Parse `#rrggbb` (leading `#` optional) into an opaque color.
pub fn parse_hex(hex: &str) -> Option<Rgba<u8>> {
    let h = hex.trim().trim_start_matches('#');
    if h.len() != 6 || !h.is_ascii() {
        return None;
    }
    let channel = |i: usize| u8::from_str_radix(&h[i..i + 2], 16).ok();
    Some(Rgba([channel(0)?, channel(2)?, channel(4)?, 0xff]))
}

#[derive(Clone, Debug, PartialEq)]
pub struct LineColorMap {
    colors: HashMap<String, Rgba<u8>>,
    fallback: Rgba<u8>,
}

impl Default for LineColorMap {
    fn default() -> Self {
        Self { colors: builtin().clone(), fallback: DEFAULT_LINE_COLOR }
    }
}

impl LineColorMap {
    pub fn insert(&mut self, code: &str, color: Rgba<u8>) {
        self.colors.insert(code.trim().to_uppercase(), color);
    }

    pub fn lookup(&self, code: &str) -> Rgba<u8> {
        self.colors
            .get(code.trim().to_uppercase().as_str())
            .copied()
            .unwrap_or(self.fallback)
    }

    /// Color for a "Lines" cell: keyed on the first comma-separated token.
    pub fn for_cell(&self, cell_text: &str) -> Rgba<u8> {
        let first = cell_text.split(',').next().unwrap_or_default();
        self.lookup(first)
    }
}
