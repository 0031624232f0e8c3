// src/data.rs
//
// Records produced by the extractor and consumed read-only by the renderer.

use std::fmt;

use serde::Serialize;

/// One parsed announcement. Missing source fields are empty strings.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize)]
pub struct DisruptionRecord {
    /// Comma-separated line identifiers, e.g. "S1, S2".
    #[serde(rename = "data-lines")]
    pub lines: String,
    pub title: String,
    /// Validity window; may contain a range separator (" bis " / " to ").
    pub timestamp: String,
    pub reason: String,
}

impl DisruptionRecord {
    pub fn new(
        lines: impl Into<String>,
        title: impl Into<String>,
        timestamp: impl Into<String>,
        reason: impl Into<String>,
    ) -> Self {
        Self {
            lines: lines.into(),
            title: title.into(),
            timestamp: timestamp.into(),
            reason: reason.into(),
        }
    }
}

/// Record fields that may be missing from an announcement node.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Field {
    Lines,
    Title,
    Timestamp,
    Reason,
}

impl Field {
    pub fn name(self) -> &'static str {
        match self {
            Field::Lines => "lines",
            Field::Title => "title",
            Field::Timestamp => "timestamp",
            Field::Reason => "reason",
        }
    }
}

/// Non-fatal structural absence in the markup.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum StructureWarning {
    /// The container element was not found; no records at all.
    MissingContainer { id: String },
    /// The container was found but holds no announcement nodes.
    NoAnnouncements { class: String },
    /// One sub-element of one announcement was missing; the field is empty.
    MissingField { index: usize, field: Field },
}

impl fmt::Display for StructureWarning {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StructureWarning::MissingContainer { id } => {
                write!(f, "could not find container section (id='{id}')")
            }
            StructureWarning::NoAnnouncements { class } => {
                write!(f, "container holds no '{class}' nodes")
            }
            StructureWarning::MissingField { index, field } => {
                write!(f, "announcement #{index}: no {} element", field.name())
            }
        }
    }
}

/// Extractor output: filtered records in page order plus whatever was missing.
#[derive(Clone, Debug, Default)]
pub struct Extraction {
    pub records: Vec<DisruptionRecord>,
    /// Number of candidates dropped by the night filter.
    pub filtered_out: usize,
    pub warnings: Vec<StructureWarning>,
}
