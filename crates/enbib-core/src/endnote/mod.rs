//! EndNote XML reading: document location, record access, field extraction,
//! and reference-type classification.

mod document;
mod extract;
mod record;
mod ref_type;

pub use document::EndNoteDocument;
pub use extract::{extract_fields, ExtractError};
pub use record::Record;
pub use ref_type::entry_type_for_label;

pub(crate) use ref_type::JOURNAL_ARTICLE_LABEL;
