// src/render/page.rs
//! Page model: records wrapped into cells, then cut into fixed-size pages.

use crate::config::options::{EmptyPages, WrapWidths};
use crate::data::DisruptionRecord;

use super::{markers, wrap};

pub const COLUMNS: usize = 4;
pub const LINES_COL: usize = 0;

/// One table cell as display lines.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cell {
    pub lines: Vec<String>,
}

impl Cell {
    pub fn new(lines: Vec<String>) -> Self {
        Self { lines }
    }

    /// The cell as it would be shown, lines joined with '\n'.
    pub fn text(&self) -> String {
        self.lines.join("\n")
    }

    pub fn char_len(&self) -> usize {
        // joined length: chars plus one break between each pair of lines
        self.lines.iter().map(|l| l.chars().count()).sum::<usize>()
            + self.lines.len().saturating_sub(1)
    }

    pub fn line_count(&self) -> usize {
        self.lines.len().max(1)
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct WrappedRow {
    pub cells: [Cell; COLUMNS],
}

impl WrappedRow {
    /// Reflow one record. `reason_markers` prefixes the reason before wrapping.
    pub fn from_record(rec: &DisruptionRecord, widths: &WrapWidths, reason_markers: bool) -> Self {
        let reason = if reason_markers {
            markers::decorate_reason(&rec.reason)
        } else {
            rec.reason.clone()
        };
        Self {
            cells: [
                Cell::new(wrap::wrap(&rec.lines, widths.lines)),
                Cell::new(wrap::wrap(&rec.title, widths.title)),
                Cell::new(wrap::wrap_timestamp(&rec.timestamp, widths.timestamp)),
                Cell::new(wrap::wrap(&reason, widths.reason)),
            ],
        }
    }
}

/// Everything needed to draw one image.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageModel {
    /// 1-based.
    pub index: usize,
    pub total: usize,
    pub header: [String; COLUMNS],
    pub rows: Vec<WrappedRow>,
}

pub fn page_count(records: usize, page_size: usize) -> usize {
    records.div_ceil(page_size.max(1))
}

/// Cut rows into consecutive pages of at most `page_size`.
pub fn paginate(
    rows: Vec<WrappedRow>,
    page_size: usize,
    header: &[String; COLUMNS],
    empty: EmptyPages,
) -> Vec<PageModel> {
    let page_size = page_size.max(1);

    if rows.is_empty() {
        return match empty {
            EmptyPages::Skip => Vec::new(),
            EmptyPages::HeaderOnly => vec![PageModel {
                index: 1,
                total: 1,
                header: header.clone(),
                rows: Vec::new(),
            }],
        };
    }

    let total = page_count(rows.len(), page_size);
    let mut pages = Vec::with_capacity(total);
    let mut rows = rows.into_iter().peekable();
    let mut index = 1;

    while rows.peek().is_some() {
        let batch: Vec<WrappedRow> = rows.by_ref().take(page_size).collect();
        pages.push(PageModel { index, total, header: header.clone(), rows: batch });
        index += 1;
    }
    pages
}
