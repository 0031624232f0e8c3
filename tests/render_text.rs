// tests/render_text.rs
use std::fs;
use std::path::PathBuf;

use chrono::NaiveDate;
use disruption_board::config::options::RenderOptions;
use disruption_board::render::colors::{parse_hex, DEFAULT_LINE_COLOR};
use disruption_board::render::draw::Painter;
use disruption_board::render::fonts::FontSet;
use disruption_board::render::layout::{column_widths, PageLayout};
use disruption_board::render::style::Style;
use disruption_board::{DisruptionRecord, Renderer};
use image::{Rgba, RgbaImage};

struct Rendered {
    img: RgbaImage,
    layout: PageLayout,
    style: Style,
}

fn render_first_page(name: &str, recs: &[DisruptionRecord]) -> Rendered {
    let out_dir = std::env::temp_dir().join(format!("disruption_board_text_{name}"));
    let _ = fs::remove_dir_all(&out_dir);
    let opts = RenderOptions { out_dir, scale: 2.0, ..RenderOptions::default() };
    let r = Renderer::with_fonts(opts, FontSet::bundled().unwrap())
        .dated(NaiveDate::from_ymd_opt(2025, 11, 16).unwrap());

    let written: Vec<PathBuf> = r.render(recs, None).unwrap();
    let img = image::open(&written[0]).unwrap().to_rgba8();

    // same face, same measurements as the renderer
    let fonts = FontSet::bundled().unwrap();
    let o = r.options();
    let painter = Painter { style: &o.style, colors: &o.line_colors, fonts: &fonts };
    let pages = r.pages(recs);
    let cols = column_widths(&pages, &o.wrap, |t, pt| painter.measure(t, pt));
    let layout = PageLayout::compute(&pages[0], &cols, o.scale, false);
    assert_eq!(img.dimensions(), (layout.width, layout.height));

    Rendered { img, layout, style: o.style.clone() }
}

fn near(p: &Rgba<u8>, c: Rgba<u8>) -> bool {
    p.0.iter().zip(c.0).all(|(a, b)| a.abs_diff(b) <= 8)
}

/// Pixels inside a cell, grid border excluded, matching `pred`.
fn count(img: &RgbaImage, (x, y, w, h): (u32, u32, u32, u32), pred: impl Fn(&Rgba<u8>) -> bool) -> usize {
    (x + 1..x + w - 1)
        .flat_map(|px| (y + 1..y + h - 1).map(move |py| (px, py)))
        .filter(|&(px, py)| pred(img.get_pixel(px, py)))
        .count()
}

#[test]
fn lines_cells_are_drawn_in_their_line_color() {
    let green = parse_hex("#009639").unwrap();
    let out = render_first_page(
        "colors",
        &[
            DisruptionRecord::new("S2, S4", "Signal fault", "06:00", "r"),
            DisruptionRecord::new("S99", "Track work", "07:00", "r"),
        ],
    );

    let known = out.layout.cell_rect(1, 0);
    assert!(count(&out.img, known, |p| near(p, green)) > 0);
    assert_eq!(count(&out.img, known, |p| near(p, DEFAULT_LINE_COLOR)), 0);

    let unknown = out.layout.cell_rect(2, 0);
    assert!(count(&out.img, unknown, |p| near(p, DEFAULT_LINE_COLOR)) > 0);
    assert_eq!(count(&out.img, unknown, |p| near(p, green)), 0);
}

#[test]
fn header_text_is_white_on_blue() {
    let out = render_first_page("header", &[DisruptionRecord::new("S1", "t", "", "")]);
    assert_eq!(out.style.header_bg, parse_hex("#007ac2").unwrap());

    let cell = out.layout.cell_rect(0, 0);
    assert!(count(&out.img, cell, |p| near(p, out.style.header_fg)) > 0);
    assert!(count(&out.img, cell, |p| near(p, out.style.header_bg)) > 0);
}

#[test]
fn lines_text_is_bolder_than_title_text() {
    let out = render_first_page("bold", &[DisruptionRecord::new("S1", "S1", "", "")]);
    let bg = out.style.cell_bg;
    let lines_ink = count(&out.img, out.layout.cell_rect(1, 0), |p| *p != bg);
    let title_ink = count(&out.img, out.layout.cell_rect(1, 1), |p| *p != bg);
    assert!(title_ink > 0);
    assert!(lines_ink > title_ink, "lines {lines_ink} vs title {title_ink}");
}

#[test]
fn heading_and_footer_carry_text() {
    let out = render_first_page("decor", &[DisruptionRecord::new("S1", "t", "", "")]);
    let (w, bg) = (out.layout.width, out.style.background);
    for band in [out.layout.heading, out.layout.footer] {
        let ink = count(&out.img, (0, band.y, w, band.height), |p| *p != bg);
        assert!(ink > 0);
    }
}

#[test]
fn wide_titles_stay_inside_their_column() {
    let out = render_first_page(
        "wide",
        &[DisruptionRecord::new("S3", "S-BAHN ERSATZVERKEHR WWWWWWWWWWWWWWWWWWWW", "", "")],
    );
    let bg = out.style.cell_bg;
    assert!(count(&out.img, out.layout.cell_rect(1, 1), |p| *p != bg) > 0);
    // the timestamp cell next to it is empty, so any ink there leaked over
    assert_eq!(count(&out.img, out.layout.cell_rect(1, 2), |p| *p != bg), 0);
}
