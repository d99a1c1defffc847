// src/specs/mod.rs
//! # Scraping "specs"
//!
//! Page-specific knowledge of *where the ground truth lives in the HTML* and
//! how to pull it out into plain records.
//!
//! ## What lives here
//! - Locating the data table body and its rows (`table::extract_rows`).
//! - The column layout of the market table as declarative rules
//!   (`table::TableSchema`, built on `core::select`).
//! - Turning rows into [`RawRecord`](crate::record::RawRecord)s, text only.
//!
//! ## What does **not** live here
//! - Fetching/reading the page (`core::html`).
//! - Numeric cleanup (`normalize`), charting (`chart`), persistence (`file`).
//!
//! ## Conventions & invariants
//! - One record per `<tr>` under the first `<tbody>`, document order, none skipped.
//! - A missing cell is an error naming the row and field, never a blank value.
//! - Cells that share a class are told apart by an explicit positional rule
//!   whose index is configuration (`config::options::ColumnMap`).
pub mod table;
