// src/core/html.rs
//! Thin helpers over `scraper` with empty-string fallbacks.

use scraper::{ElementRef, Html, Selector};

use super::sanitize::normalize_ws;

/// Visible text of `node`: text nodes trimmed, blanks dropped, joined by one space.
pub fn text_of(node: ElementRef<'_>) -> String {
    let joined = node
        .text()
        .map(str::trim)
        .filter(|t| !t.is_empty())
        .collect::<Vec<_>>()
        .join(" ");
    normalize_ws(&joined)
}

/// Text of the first descendant matching `sel`, or `None` when there is none.
pub fn first_text(node: ElementRef<'_>, sel: &Selector) -> Option<String> {
    node.select(sel).next().map(text_of)
}

/// Attribute value (whitespace-normalized), or `None` when absent.
pub fn attr(node: ElementRef<'_>, name: &str) -> Option<String> {
    node.value().attr(name).map(normalize_ws)
}

pub fn first<'a>(doc: &'a Html, sel: &Selector) -> Option<ElementRef<'a>> {
    doc.select(sel).next()
}
