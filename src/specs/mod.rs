// src/specs/mod.rs
//! # Scraping “specs” module
//!
//! Page-specific scraping specifications: *where the ground truth lives in the
//! HTML* and *how to extract it robustly*.
//!
//! ## What lives here
//! - **Pure HTML parsing** of already-fetched markup.
//! - **Selector choice** (container id, marker classes, data attributes).
//! - **Tolerant extraction**: a missing element empties one field, it never
//!   fails the page.
//! - **Content filters** that belong to the page's semantics (night-only
//!   disruptions).
//!
//! ## What does **not** live here
//! - **Networking** (`core::net`), **rendering** (`render`), **output files** (`file`).
//!
//! ## Typical call chain
//! ```text
//! runner → core::net::fetch_html → specs::disruptions::extract → render::Renderer
//! ```
pub mod disruptions;
