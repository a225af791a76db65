//! enbib-core: EndNote XML to BibTeX conversion engine
//!
//! This library converts bibliographic reference records exported in
//! EndNote's XML schema into BibTeX entries:
//! - Record discovery across both EndNote export layouts
//! - Per-record field extraction, including styled-text resolution
//! - Reference-type classification with required-field validation
//! - BibTeX text assembly and error aggregation
//!
//! Conversion is a pure function of the input text and options; callers own
//! file I/O and presentation of the error list.
//!
//! ```
//! use enbib_core::{convert_to_bibtex, ConvertOptions};
//!
//! let xml = r#"<xml><records><record>
//!     <rec-number>1</rec-number>
//!     <ref-type name="Journal Article">17</ref-type>
//!     <titles><title>Particle creation by black holes</title></titles>
//! </record></records></xml>"#;
//!
//! let report = convert_to_bibtex(xml, &ConvertOptions::default());
//! assert!(report.bibtex.starts_with("@article{1"));
//! ```

pub mod convert;
pub mod endnote;
pub mod error;

pub use convert::{convert_to_bibtex, ConversionReport, ConvertOptions};
pub use endnote::{entry_type_for_label, EndNoteDocument, Record};
pub use error::ConvertError;

// Re-export the BibTeX model so callers need only one crate.
pub use enbib_bibtex::{BibTeXEntry, BibTeXEntryType, Field, FieldSet};
