//! BibTeX entry model and formatting
//!
//! This crate provides the BibTeX side of the enbib converter:
//! - A closed field vocabulary (`Field`) and per-entry field storage (`FieldSet`)
//! - Entry types with their required-field tables (`BibTeXEntryType`)
//! - Entry-to-text formatting (`format_entry`, `format_entries`)

mod entry;
mod field;
mod formatter;

pub use entry::{BibTeXEntry, BibTeXEntryType};
pub use field::{Field, FieldSet};
pub use formatter::{format_entries, format_entry};
