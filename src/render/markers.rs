// src/render/markers.rs
//! Reason markers: one decorative glyph picked from the reason text.
//! Rules are evaluated top to bottom; the first hit wins.

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Marker {
    Shuttle,
    ScheduleChange,
    PlatformChange,
    NightOnly,
    SkipStop,
    Info,
}

impl Marker {
    pub fn glyph(self) -> &'static str {
        match self {
            Marker::Shuttle => "🚌",
            Marker::ScheduleChange => "🕒",
            Marker::PlatformChange => "🔀",
            Marker::NightOnly => "🌙",
            Marker::SkipStop => "⏭",
            Marker::Info => "ℹ",
        }
    }
}

type Predicate = fn(&str) -> bool;

fn contains_any(haystack: &str, needles: &[&str]) -> bool {
    needles.iter().any(|n| haystack.contains(n))
}

fn is_shuttle(r: &str) -> bool {
    contains_any(r, &["replacement", "shuttle", "bus", "ersatz"])
}
fn is_schedule_change(r: &str) -> bool {
    contains_any(r, &["timetable", "schedule", "fahrplan", "changed times", "altered times"])
}
fn is_platform_change(r: &str) -> bool {
    contains_any(r, &["platform", "gleis", "bahnsteig", "track change"])
}
fn is_night_only(r: &str) -> bool {
    contains_any(r, &["night", "nacht"])
}
fn is_skip_stop(r: &str) -> bool {
    contains_any(r, &["skip", "no stop", "does not stop", "without stopping", "ohne halt", "halt entfällt"])
}
fn is_info(r: &str) -> bool {
    contains_any(r, &["info", "notice", "hinweis", "note"])
}

/// Priority order matters: a replacement bus caused by a timetable change is a shuttle.
const RULES: &[(Predicate, Marker)] = &[
    (is_shuttle, Marker::Shuttle),
    (is_schedule_change, Marker::ScheduleChange),
    (is_platform_change, Marker::PlatformChange),
    (is_night_only, Marker::NightOnly),
    (is_skip_stop, Marker::SkipStop),
    (is_info, Marker::Info),
];

pub fn marker_for(reason: &str) -> Option<Marker> {
    let lc = reason.to_lowercase();
    RULES.iter().find(|(hit, _)| hit(&lc)).map(|(_, m)| *m)
}

/// Prefix `reason` with its marker, if any rule matches.
pub fn decorate_reason(reason: &str) -> String {
    match marker_for(reason) {
        Some(m) => join!(m.glyph(), " ", reason),
        None => s!(reason),
    }
}
