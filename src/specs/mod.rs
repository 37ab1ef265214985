// src/specs/mod.rs
//! # Scraping "specs" module
//!
//! Page-specific scraping specifications. Each spec knows *where the data
//! lives in one page's HTML* and how to pull it out.
//!
//! ## What lives here
//! - **Pure HTML parsing** of a fetched page into typed records.
//! - **Selector choice**: the CSS selectors for the listing block and its fields.
//! - **Tolerant extraction**: a missing field becomes an empty string, a page
//!   with no listing blocks becomes an empty list. Nothing here fails on
//!   malformed markup.
//!
//! ## What does **not** live here
//! - Page looping and skill matching (`scrape::collect_jobs`).
//! - Export formatting (`csv`, `file`) and anything GUI.
//!
//! ## Typical call chain
//! ```text
//! GUI / CLI → scrape::collect_jobs → specs::listings::fetch_page()
//!                                  ↘ skills::match_skills per record
//! ```
//!
//! ## Testing notes
//! Specs are testable offline against inline HTML fixtures.
pub mod listings;
