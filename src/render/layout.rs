// src/render/layout.rs
//! Pixel geometry of a page. No drawing; text widths come in through a
//! measuring closure so the arithmetic stays testable.
//!
//! Sizes are worked out in points, then multiplied by the pixel scale.

use crate::config::consts::*;
use crate::config::options::WrapWidths;

use super::page::{Cell, PageModel, COLUMNS};

const MARGIN_PT: f32 = 24.0;
const CELL_PAD_PT: f32 = 8.0;
const LINE_SPACING: f32 = 1.3;
/// Average advance of one char at the default body size; sets the floor
/// width of a column from its wrap width.
const CHAR_PT: f32 = 0.6 * FONT_SIZE_DEFAULT;
const MIN_COL_CHARS: usize = 8;
/// Room for the one-pixel bold strike and rounding.
const INK_SLACK_PT: f32 = 1.0;
pub const LOGO_PT: f32 = 40.0;

/// Body font size in points, by cell text length.
pub fn cell_font_size(char_len: usize) -> f32 {
    if char_len > FONT_SIZE_LONG_THRESHOLD {
        FONT_SIZE_LONG
    } else if char_len > FONT_SIZE_MEDIUM_THRESHOLD {
        FONT_SIZE_MEDIUM
    } else {
        FONT_SIZE_DEFAULT
    }
}

pub fn line_height_pt(font_pt: f32) -> f32 {
    font_pt * LINE_SPACING
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Band {
    pub y: u32,
    pub height: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PageLayout {
    pub scale: f32,
    pub width: u32,
    pub height: u32,
    pub heading: Band,
    /// Column boundaries, left edge of each column plus the right edge of the last.
    pub col_x: [u32; COLUMNS + 1],
    /// Row boundaries: header top, each body row top, bottom of the last row.
    pub row_y: Vec<u32>,
    pub footer: Band,
    pub pad: u32,
}

/// Content width of each column in points, shared by every page of a run.
///
/// Each column is at least as wide as its wrap width suggests and grows to
/// fit the widest header label or wrapped line. `measure(text, pt)` returns
/// the advance of `text` at `pt` points.
pub fn column_widths<F>(pages: &[PageModel], widths: &WrapWidths, measure: F) -> [f32; COLUMNS]
where
    F: Fn(&str, f32) -> f32,
{
    let mut out = widths.as_array().map(|w| w.max(MIN_COL_CHARS) as f32 * CHAR_PT);
    for page in pages {
        for (col, label) in page.header.iter().enumerate() {
            out[col] = out[col].max(measure(label, FONT_SIZE_HEADER) + INK_SLACK_PT);
        }
        for row in &page.rows {
            for (col, cell) in row.cells.iter().enumerate() {
                let size = cell_font_size(cell.char_len());
                for line in &cell.lines {
                    out[col] = out[col].max(measure(line, size) + INK_SLACK_PT);
                }
            }
        }
    }
    out
}

impl PageLayout {
    /// `columns` are content widths in points, see [`column_widths`].
    pub fn compute(page: &PageModel, columns: &[f32; COLUMNS], scale: f32, with_logo: bool) -> Self {
        let scale = if scale.is_finite() && scale > 0.0 { scale } else { 1.0 };
        let px = |pt: f32| (pt * scale).ceil() as u32;
        let pad = px(CELL_PAD_PT);
        let margin = px(MARGIN_PT);

        let mut col_x = [0u32; COLUMNS + 1];
        col_x[0] = margin;
        for (i, w) in columns.iter().enumerate() {
            col_x[i + 1] = col_x[i] + px(*w) + 2 * pad;
        }
        let width = col_x[COLUMNS] + margin;

        let heading_pt = line_height_pt(FONT_SIZE_HEADING).max(if with_logo { LOGO_PT } else { 0.0 });
        let heading = Band { y: margin / 2, height: px(heading_pt) + 2 * pad };

        let mut row_y = Vec::with_capacity(page.rows.len() + 2);
        let mut y = heading.y + heading.height + pad;
        row_y.push(y);
        y += px(line_height_pt(FONT_SIZE_HEADER)) + 2 * pad;
        row_y.push(y);
        for row in &page.rows {
            y += body_row_height(&row.cells, scale) + 2 * pad;
            row_y.push(y);
        }

        let footer = Band { y: y + pad, height: px(line_height_pt(FONT_SIZE_FOOTER)) + 2 * pad };
        let height = footer.y + footer.height + margin / 2;

        Self { scale, width, height, heading, col_x, row_y, footer, pad }
    }

    /// Left/top/width/height of a cell. `row` 0 is the header.
    pub fn cell_rect(&self, row: usize, col: usize) -> (u32, u32, u32, u32) {
        let (x0, x1) = (self.col_x[col], self.col_x[col + 1]);
        let (y0, y1) = (self.row_y[row], self.row_y[row + 1]);
        (x0, y0, x1 - x0, y1 - y0)
    }

    pub fn body_rows(&self) -> usize {
        self.row_y.len().saturating_sub(2)
    }

    pub fn px(&self, pt: f32) -> f32 {
        pt * self.scale
    }
}

fn body_row_height(cells: &[Cell; COLUMNS], scale: f32) -> u32 {
    cells
        .iter()
        .map(|c| {
            let lh = line_height_pt(cell_font_size(c.char_len()));
            (c.line_count() as f32 * lh * scale).round() as u32
        })
        .max()
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::data::DisruptionRecord;
    use crate::render::page::WrappedRow;
    use crate::render::wrap::wrap;

    fn page(rows: Vec<WrappedRow>) -> PageModel {
        PageModel {
            index: 1,
            total: 1,
            header: [s!("Lines"), s!("Title"), s!("Timestamp"), s!("Reason")],
            rows,
        }
    }

    fn unmeasured(p: &PageModel, w: &WrapWidths) -> [f32; COLUMNS] {
        column_widths(std::slice::from_ref(p), w, |_, _| 0.0)
    }

    #[test]
    fn font_tiers() {
        assert_eq!(cell_font_size(71), FONT_SIZE_LONG);
        assert_eq!(cell_font_size(70), FONT_SIZE_MEDIUM);
        assert_eq!(cell_font_size(51), FONT_SIZE_MEDIUM);
        assert_eq!(cell_font_size(50), FONT_SIZE_DEFAULT);
        assert_eq!(cell_font_size(0), FONT_SIZE_DEFAULT);
    }

    #[test]
    fn one_boundary_per_row_plus_two() {
        let w = WrapWidths::default();
        let rec = DisruptionRecord::new("S1", "t", "06:00 to 09:00", "r");
        let p = page(vec![WrappedRow::from_record(&rec, &w, false); 3]);
        let l = PageLayout::compute(&p, &unmeasured(&p, &w), 2.0, false);
        assert_eq!(l.row_y.len(), 5);
        assert_eq!(l.body_rows(), 3);
        assert!(l.row_y.windows(2).all(|p| p[0] < p[1]));
        assert!(l.footer.y > *l.row_y.last().unwrap());
        assert!(l.height > l.footer.y + l.footer.height - 1);
    }

    #[test]
    fn taller_cells_make_taller_rows() {
        let w = WrapWidths::default();
        let short = WrappedRow::from_record(&DisruptionRecord::new("S1", "x", "", ""), &w, false);
        let tall = WrappedRow::from_record(
            &DisruptionRecord::new("S1", "a much longer title that wraps over several lines", "", ""),
            &w,
            false,
        );
        let p = page(vec![short, tall]);
        let l = PageLayout::compute(&p, &unmeasured(&p, &w), 1.0, false);
        let (_, _, _, h_short) = l.cell_rect(1, 0);
        let (_, _, _, h_tall) = l.cell_rect(2, 0);
        assert!(h_tall > h_short);
    }

    #[test]
    fn wider_wrap_makes_wider_column() {
        let mut w = WrapWidths::default();
        w.title = 40;
        let p = page(Vec::new());
        let l = PageLayout::compute(&p, &unmeasured(&p, &w), 1.0, false);
        let (_, _, lines_w, _) = l.cell_rect(0, 0);
        let (_, _, title_w, _) = l.cell_rect(0, 1);
        assert!(title_w > lines_w);
        assert_eq!(l.body_rows(), 0);
    }

    #[test]
    fn logo_grows_heading() {
        let w = WrapWidths::default();
        let p = page(Vec::new());
        let cols = unmeasured(&p, &w);
        let plain = PageLayout::compute(&p, &cols, 1.0, false);
        let logo = PageLayout::compute(&p, &cols, 1.0, true);
        assert!(logo.heading.height > plain.heading.height);
    }

    #[test]
    fn wide_text_widens_its_column_on_every_page() {
        let w = WrapWidths::default();
        let narrow = page(vec![WrappedRow::from_record(&DisruptionRecord::new("S1", "ok", "", ""), &w, false)]);
        let wide = page(vec![WrappedRow::from_record(
            &DisruptionRecord::new("S1", "S-BAHN ERSATZVERKEHR", "", ""),
            &w,
            false,
        )]);
        // 10pt per char at any size: far wider than the wrap-width floor
        let measure = |t: &str, _pt: f32| t.chars().count() as f32 * 10.0;
        let cols = column_widths(&[narrow.clone(), wide], &w, measure);
        let floor = unmeasured(&narrow, &w);

        let longest = wrap("S-BAHN ERSATZVERKEHR", w.title).iter().map(|l| l.chars().count()).max().unwrap();
        assert!(cols[1] >= longest as f32 * 10.0);
        assert!(cols[1] > floor[1]);
        assert_eq!(cols[2], floor[2]);

        let l = PageLayout::compute(&narrow, &cols, 1.0, false);
        let (_, _, title_w, _) = l.cell_rect(1, 1);
        assert!(title_w as f32 >= cols[1] + 2.0 * l.pad as f32);
    }
}
