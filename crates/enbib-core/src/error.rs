//! Conversion error types

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// An error accumulated during one conversion call.
///
/// `Parse` and `EmptyDocument` are document-level and short-circuit the
/// whole conversion; `Record` is isolated to one record and leaves its
/// siblings untouched. Missing required fields are diagnostics, not errors,
/// and never appear here.
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConvertError {
    /// Malformed XML. Fatal for the whole document: zero entries.
    #[error("error parsing XML: {message}")]
    Parse { message: String },

    /// Well-formed XML with no record elements under either layout.
    #[error("no records found in XML data")]
    EmptyDocument,

    /// Structural failure while walking one record's subtree. The record
    /// contributes zero entries; processing continues with the next one.
    #[error("error processing record {index}: {message}")]
    Record { index: usize, message: String },
}
