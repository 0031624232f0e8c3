// src/lib.rs
//! Scrape tomorrow's S-Bahn timetable changes and render them as table images.
//!
//! ```text
//! core::net::fetch_html → specs::disruptions::extract → render::Renderer → PNG pages
//! ```

#[macro_use]
pub mod macros;

#[cfg(feature = "cli")]
pub mod cli;
pub mod config;
pub mod core;
pub mod data;
pub mod error;
pub mod file;
pub mod log;
pub mod progress;
pub mod render;
pub mod runner;
pub mod specs;

pub use data::{DisruptionRecord, Extraction, StructureWarning};
pub use error::{Error, Result};
pub use render::{render_pages, Renderer};
pub use specs::disruptions::{exclude_night, extract, extract_html, MarkupSource};
