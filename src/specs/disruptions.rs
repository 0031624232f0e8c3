// src/specs/disruptions.rs
//! Scraping rules for the timetable-changes page.
//!
//! Purpose:
//! - Find the "tomorrow" container (`#tbc-p4`).
//! - Turn every `.c-construction-announcement` inside it into a [`DisruptionRecord`].
//! - Drop night-only disruptions, keeping page order.
//!
//! Every sub-element lookup is independent: a missing one empties that field
//! and adds a [`StructureWarning`], it never drops the record. A missing
//! container yields no records and one warning.
//!
//! Non-Responsibilities:
//! - **No networking** (see `core::net`), **no rendering**.

use std::{
    fs,
    io::Read,
    path::Path,
    sync::OnceLock,
};

use scraper::{ElementRef, Html, Selector};
use tracing::{debug, warn};

use crate::config::consts::*;
use crate::core::{html, sanitize::contains_any_ci};
use crate::data::{DisruptionRecord, Extraction, Field, StructureWarning};
use crate::error::{Error, Result};

/// Where the markup comes from.
pub enum MarkupSource<'a> {
    Text(&'a str),
    File(&'a Path),
    Reader(&'a mut dyn Read),
}

struct Selectors {
    container: Selector,
    announcement: Selector,
    title: Selector,
    timespan: Selector,
    reason: Selector,
}

fn selectors() -> &'static Selectors {
    static SEL: OnceLock<Selectors> = OnceLock::new();
    SEL.get_or_init(|| {
        let parse = |css: String| Selector::parse(&css).expect("selector built from constants");
        Selectors {
            container: parse(format!("div#{CONTAINER_ID}")),
            announcement: parse(format!("div.{ANNOUNCEMENT_CLASS}")),
            title: parse(format!(".{TITLE_CLASS}")),
            timespan: parse(format!(".{TIMESPAN_CLASS}")),
            reason: parse(format!(".{REASON_CLASS}")),
        }
    })
}

/// Read the markup from `source` and extract. `None` is an input error.
pub fn extract(source: Option<MarkupSource<'_>>) -> Result<Extraction> {
    let text = match source {
        Some(MarkupSource::Text(s)) => return Ok(extract_html(s)),
        Some(MarkupSource::File(path)) => fs::read_to_string(path)
            .map_err(|e| Error::Input(format!("cannot read {}: {e}", path.display())))?,
        Some(MarkupSource::Reader(r)) => {
            let mut buf = s!();
            r.read_to_string(&mut buf)
                .map_err(|e| Error::Input(format!("cannot read markup: {e}")))?;
            buf
        }
        None => return Err(Error::Input(s!("either markup text or a markup source must be provided"))),
    };
    Ok(extract_html(&text))
}

/// Parse `markup` into filtered records. Malformed markup never fails.
pub fn extract_html(markup: &str) -> Extraction {
    let sel = selectors();
    let doc = Html::parse_document(markup);
    let mut warnings = Vec::new();

    let Some(container) = html::first(&doc, &sel.container) else {
        let w = StructureWarning::MissingContainer { id: s!(CONTAINER_ID) };
        warn!("{w}");
        warnings.push(w);
        return Extraction { records: Vec::new(), filtered_out: 0, warnings };
    };

    let candidates: Vec<DisruptionRecord> = container
        .select(&sel.announcement)
        .enumerate()
        .map(|(i, node)| parse_announcement(i, node, sel, &mut warnings))
        .collect();

    if candidates.is_empty() {
        let w = StructureWarning::NoAnnouncements { class: s!(ANNOUNCEMENT_CLASS) };
        warn!("{w}");
        warnings.push(w);
    }

    let before = candidates.len();
    let records = exclude_night(candidates);
    let filtered_out = before - records.len();
    debug!("extracted {before} announcements, {filtered_out} night-only dropped");

    Extraction { records, filtered_out, warnings }
}

fn parse_announcement(
    index: usize,
    node: ElementRef<'_>,
    sel: &Selectors,
    warnings: &mut Vec<StructureWarning>,
) -> DisruptionRecord {
    let mut field = |found: Option<String>, which: Field| {
        found.unwrap_or_else(|| {
            let w = StructureWarning::MissingField { index, field: which };
            warn!("{w}");
            warnings.push(w);
            s!()
        })
    };

    DisruptionRecord {
        lines: field(html::attr(node, LINES_ATTR), Field::Lines),
        title: field(html::first_text(node, &sel.title), Field::Title),
        timestamp: field(html::first_text(node, &sel.timespan), Field::Timestamp),
        reason: field(html::first_text(node, &sel.reason), Field::Reason),
    }
}

/// Night-only if the validity window mentions any night keyword, ignoring case.
pub fn is_night(record: &DisruptionRecord) -> bool {
    contains_any_ci(&record.timestamp, NIGHT_KEYWORDS)
}

/// Drop night-only records; the rest keep their relative order.
pub fn exclude_night(records: Vec<DisruptionRecord>) -> Vec<DisruptionRecord> {
    records.into_iter().filter(|r| !is_night(r)).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn rec(ts: &str) -> DisruptionRecord {
        DisruptionRecord::new("S1", ts, ts, "")
    }

    #[test]
    fn night_filter_is_substring_and_case_insensitive() {
        let kept = exclude_night(vec![
            rec("06:00 to 09:00"),
            rec("closed at Night"),
            rec("Nächte"),              // umlaut form is not a keyword
            rec("NACHTS 22-5 Uhr"),
            rec("overnights"),
            rec("all day"),
        ]);
        let ts: Vec<&str> = kept.iter().map(|r| r.timestamp.as_str()).collect();
        assert_eq!(ts, vec!["06:00 to 09:00", "Nächte", "all day"]);
    }

    #[test]
    fn only_timestamp_is_inspected() {
        let r = DisruptionRecord::new("S1", "Night works", "10:00", "night");
        assert!(!is_night(&r));
    }

    #[test]
    fn no_source_is_an_input_error() {
        assert!(matches!(extract(None), Err(Error::Input(_))));
    }

    #[test]
    fn missing_file_is_an_input_error() {
        let err = extract(Some(MarkupSource::File(Path::new("/no/such/page.html")))).unwrap_err();
        assert!(matches!(err, Error::Input(_)));
    }
}
