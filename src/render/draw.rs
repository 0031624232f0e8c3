// src/render/draw.rs
//! Rasterize one page onto an RGBA canvas.

use ab_glyph::{Font, PxScale, ScaleFont};
use image::{imageops, Rgba, RgbaImage};
use imageproc::{
    drawing::{draw_filled_rect_mut, draw_hollow_rect_mut, draw_text_mut},
    rect::Rect,
};

use crate::config::consts::{FONT_SIZE_FOOTER, FONT_SIZE_HEADER, FONT_SIZE_HEADING};

use super::{
    colors::LineColorMap,
    fonts::FontSet,
    layout::{cell_font_size, line_height_pt, PageLayout, LOGO_PT},
    page::{PageModel, LINES_COL},
    style::Style,
};

/// Text overlays outside the table grid.
pub struct Decor<'a> {
    pub heading: String,
    pub footer: String,
    pub logos: &'a [RgbaImage],
}

/// Everything one page draw needs besides the page itself.
pub struct Painter<'a> {
    pub style: &'a Style,
    pub colors: &'a LineColorMap,
    pub fonts: &'a FontSet,
}

/// Emoji presentation selector; no glyph of its own.
const VARIATION_SELECTOR: char = '\u{fe0f}';

fn rect(x: u32, y: u32, w: u32, h: u32) -> Rect {
    Rect::at(x as i32, y as i32).of_size(w.max(1), h.max(1))
}

impl Painter<'_> {
    pub fn draw(&self, page: &PageModel, layout: &PageLayout, decor: &Decor<'_>) -> RgbaImage {
        let mut img = RgbaImage::from_pixel(layout.width, layout.height, self.style.background);

        self.draw_logos(&mut img, layout, decor.logos);
        self.centered(&mut img, layout, &decor.heading, layout.heading.y, layout.heading.height,
            FONT_SIZE_HEADING, self.style.heading_fg, true);

        // header row
        for (col, label) in page.header.iter().enumerate() {
            let (x, y, w, h) = layout.cell_rect(0, col);
            draw_filled_rect_mut(&mut img, rect(x, y, w, h), self.style.header_bg);
            self.text(&mut img, label, (x + layout.pad) as f32, (y + layout.pad) as f32,
                layout.px(FONT_SIZE_HEADER), self.style.header_fg, true);
        }

        // body rows
        for (r, row) in page.rows.iter().enumerate() {
            for (col, cell) in row.cells.iter().enumerate() {
                let (x, y, w, h) = layout.cell_rect(r + 1, col);
                draw_filled_rect_mut(&mut img, rect(x, y, w, h), self.style.cell_bg);

                let size = cell_font_size(cell.char_len());
                let (color, bold) = if col == LINES_COL {
                    (self.colors.for_cell(&cell.text()), true)
                } else {
                    (self.style.cell_fg, false)
                };
                let line_h = layout.px(line_height_pt(size));
                for (i, line) in cell.lines.iter().enumerate() {
                    let ty = (y + layout.pad) as f32 + i as f32 * line_h;
                    self.text(&mut img, line, (x + layout.pad) as f32, ty, layout.px(size), color, bold);
                }
            }
        }

        // grid on top so fills never cover it
        for r in 0..=layout.body_rows() {
            for col in 0..page.header.len() {
                let (x, y, w, h) = layout.cell_rect(r, col);
                draw_hollow_rect_mut(&mut img, rect(x, y, w, h), self.style.grid);
            }
        }

        self.centered(&mut img, layout, &decor.footer, layout.footer.y, layout.footer.height,
            FONT_SIZE_FOOTER, self.style.footer_fg, false);
        img
    }

    fn draw_logos(&self, img: &mut RgbaImage, layout: &PageLayout, logos: &[RgbaImage]) {
        let target_h = layout.px(LOGO_PT).round().max(1.0) as u32;
        let top = layout.heading.y + layout.heading.height.saturating_sub(target_h) / 2;

        // first logo left, second right; the rest are ignored
        for (i, logo) in logos.iter().take(2).enumerate() {
            if logo.height() == 0 || logo.width() == 0 {
                continue;
            }
            let w = ((logo.width() as f32) * target_h as f32 / logo.height() as f32).round().max(1.0) as u32;
            let resized = imageops::resize(logo, w, target_h, imageops::FilterType::Triangle);
            let x = if i == 0 {
                layout.col_x[0]
            } else {
                layout.col_x[layout.col_x.len() - 1].saturating_sub(w)
            };
            imageops::overlay(img, &resized, x as i64, top as i64);
        }
    }

    #[allow(clippy::too_many_arguments)]
    fn centered(&self, img: &mut RgbaImage, layout: &PageLayout, text: &str, band_y: u32,
        band_h: u32, pt: f32, color: Rgba<u8>, bold: bool)
    {
        let size = layout.px(pt);
        let w = self.measure(text, size);
        let x = ((layout.width as f32 - w) / 2.0).max(0.0);
        let y = band_y as f32 + (band_h as f32 - layout.px(line_height_pt(pt))) / 2.0;
        self.text(img, text, x, y, size, color, bold);
    }

    /// Width in pixels of `text` at `size` px, glyph fallback included.
    pub fn measure(&self, text: &str, size: f32) -> f32 {
        let scale = PxScale::from(size);
        text.chars()
            .filter(|&ch| ch != VARIATION_SELECTOR)
            .map(|ch| {
                let f = self.fonts.face_for(ch);
                f.as_scaled(scale).h_advance(f.glyph_id(ch))
            })
            .sum()
    }

    /// Draw one line char by char so each glyph can come from its own face.
    /// Bold is a one-pixel double strike.
    #[allow(clippy::too_many_arguments)]
    fn text(&self, img: &mut RgbaImage, text: &str, x: f32, y: f32, size: f32, color: Rgba<u8>, bold: bool) {
        let scale = PxScale::from(size);
        let mut cx = x;
        let mut buf = [0u8; 4];

        for ch in text.chars().filter(|&ch| ch != VARIATION_SELECTOR) {
            let face = self.fonts.face_for(ch);
            let glyph = ch.encode_utf8(&mut buf);
            let (gx, gy) = (cx.round() as i32, y.round() as i32);

            draw_text_mut(img, color, gx, gy, scale, face, glyph);
            if bold {
                draw_text_mut(img, color, gx + 1, gy, scale, face, glyph);
            }
            cx += face.as_scaled(scale).h_advance(face.glyph_id(ch));
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::WrapWidths;
    use crate::data::DisruptionRecord;
    use crate::render::layout::column_widths;
    use crate::render::page::WrappedRow;

    fn painter_parts() -> (Style, LineColorMap, FontSet) {
        (Style::classic(), LineColorMap::default(), FontSet::bundled().unwrap())
    }

    fn layout_for(painter: &Painter<'_>, page: &PageModel, w: &WrapWidths, logo: bool) -> PageLayout {
        let cols = column_widths(std::slice::from_ref(page), w, |t, pt| painter.measure(t, pt));
        PageLayout::compute(page, &cols, 1.0, logo)
    }

    #[test]
    fn canvas_matches_layout_and_colors_land_where_expected() {
        let (style, colors, fonts) = painter_parts();
        let painter = Painter { style: &style, colors: &colors, fonts: &fonts };
        let w = WrapWidths::default();
        let rec = DisruptionRecord::new("S1", "Signal fault", "06:00 to 09:00", "Platform change");
        let page = PageModel {
            index: 1,
            total: 1,
            header: style.columns.clone(),
            rows: vec![WrappedRow::from_record(&rec, &w, false)],
        };
        let layout = layout_for(&painter, &page, &w, false);
        let img = painter.draw(&page, &layout, &Decor { heading: s!("h"), footer: s!("f"), logos: &[] });

        assert_eq!(img.dimensions(), (layout.width, layout.height));
        assert_eq!(*img.get_pixel(0, 0), style.background);

        let (hx, hy, hw, hh) = layout.cell_rect(0, 1);
        assert_eq!(*img.get_pixel(hx + hw - 3, hy + hh - 3), style.header_bg);
        let (bx, by, bw, bh) = layout.cell_rect(1, 2);
        assert_eq!(*img.get_pixel(bx + bw - 3, by + bh - 3), style.cell_bg);
        assert_eq!(*img.get_pixel(bx, by + bh / 2), style.grid);
    }

    #[test]
    fn logo_is_pasted_into_heading_band() {
        let (style, colors, fonts) = painter_parts();
        let painter = Painter { style: &style, colors: &colors, fonts: &fonts };
        let page = PageModel { index: 1, total: 1, header: style.columns.clone(), rows: Vec::new() };
        let layout = layout_for(&painter, &page, &WrapWidths::default(), true);
        let red = Rgba([255, 0, 0, 255]);
        let logo = RgbaImage::from_pixel(10, 10, red);
        let img = painter.draw(&page, &layout, &Decor { heading: s!(), footer: s!(), logos: &[logo] });

        let top = layout.heading.y + layout.heading.height.saturating_sub(40) / 2;
        assert_eq!(*img.get_pixel(layout.col_x[0] + 5, top + 5), red);
    }

    #[test]
    fn measure_follows_glyph_advances() {
        let (style, colors, fonts) = painter_parts();
        let painter = Painter { style: &style, colors: &colors, fonts: &fonts };
        assert_eq!(painter.measure("", 12.0), 0.0);
        assert!(painter.measure("WWWW", 12.0) > painter.measure("iiii", 12.0));
        assert!((painter.measure("ab", 24.0) - 2.0 * painter.measure("ab", 12.0)).abs() < 0.01);
        assert_eq!(painter.measure("⚠\u{fe0f}", 12.0), painter.measure("⚠", 12.0));
    }
}
