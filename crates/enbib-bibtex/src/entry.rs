//! BibTeX entry data structures

use serde::{Deserialize, Serialize};

use crate::field::{Field, FieldSet};

/// BibTeX entry type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BibTeXEntryType {
    Article,
    Book,
    InBook,
    InCollection,
    InProceedings,
    Proceedings,
    PhdThesis,
    MastersThesis,
    TechReport,
    Online,
    Patent,
    Unpublished,
    Misc,
}

impl BibTeXEntryType {
    /// Parse an entry type from its BibTeX tag (case-insensitive).
    /// Unrecognized tags become `Misc` rather than failing.
    #[allow(clippy::should_implement_trait)]
    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "article" => Self::Article,
            "book" => Self::Book,
            "inbook" => Self::InBook,
            "incollection" => Self::InCollection,
            "inproceedings" | "conference" => Self::InProceedings,
            "proceedings" => Self::Proceedings,
            "phdthesis" => Self::PhdThesis,
            "mastersthesis" => Self::MastersThesis,
            "techreport" => Self::TechReport,
            "online" | "electronic" | "www" => Self::Online,
            "patent" => Self::Patent,
            "unpublished" => Self::Unpublished,
            _ => Self::Misc,
        }
    }

    /// Convert entry type to its canonical tag.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Article => "article",
            Self::Book => "book",
            Self::InBook => "inbook",
            Self::InCollection => "incollection",
            Self::InProceedings => "inproceedings",
            Self::Proceedings => "proceedings",
            Self::PhdThesis => "phdthesis",
            Self::MastersThesis => "mastersthesis",
            Self::TechReport => "techreport",
            Self::Online => "online",
            Self::Patent => "patent",
            Self::Unpublished => "unpublished",
            Self::Misc => "misc",
        }
    }

    /// The fields this entry type requires, in the order they are emitted.
    pub fn required_fields(&self) -> &'static [Field] {
        use Field::*;
        match self {
            Self::Article => &[Author, Title, Journal, Year],
            Self::Book | Self::InBook => &[Author, Title, Publisher, Year],
            Self::InCollection => &[Author, Title, Booktitle, Publisher, Year],
            Self::InProceedings => &[Author, Title, Booktitle, Year],
            Self::Proceedings => &[Title, Year],
            Self::PhdThesis | Self::MastersThesis => &[Author, Title, School, Year],
            Self::TechReport => &[Author, Title, Institution, Year],
            Self::Online => &[Title, Url],
            Self::Patent => &[Author, Title, Number, Year],
            Self::Unpublished => &[Author, Title, Note],
            Self::Misc => &[Title],
        }
    }
}

/// A BibTeX entry ready for formatting.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BibTeXEntry {
    pub cite_key: String,
    pub entry_type: BibTeXEntryType,
    pub fields: FieldSet,
}

impl BibTeXEntry {
    /// Create a new entry with no fields.
    pub fn new(cite_key: impl Into<String>, entry_type: BibTeXEntryType) -> Self {
        Self {
            cite_key: cite_key.into(),
            entry_type,
            fields: FieldSet::default(),
        }
    }

    /// Get the title field.
    pub fn title(&self) -> Option<&str> {
        self.fields.get(Field::Title)
    }

    /// Get the author field.
    pub fn author(&self) -> Option<&str> {
        self.fields.get(Field::Author)
    }

    /// Get the year field.
    pub fn year(&self) -> Option<&str> {
        self.fields.get(Field::Year)
    }

    /// Required fields of this entry's type that are not populated.
    /// Absence never blocks formatting; it is reported as a diagnostic.
    pub fn missing_required_fields(&self) -> Vec<Field> {
        self.entry_type
            .required_fields()
            .iter()
            .copied()
            .filter(|&field| self.fields.get(field).is_none())
            .collect()
    }
}
