//! Reference-type classification

use enbib_bibtex::BibTeXEntryType;

/// The label whose secondary title routes to `journal` rather than
/// `booktitle` during extraction.
pub(crate) const JOURNAL_ARTICLE_LABEL: &str = "Journal Article";

/// Map an EndNote reference-type label to a canonical BibTeX entry type.
///
/// Unrecognized labels map to `misc`: unknown or future EndNote categories
/// must still produce a usable entry rather than dropping the record.
pub fn entry_type_for_label(label: &str) -> BibTeXEntryType {
    match label {
        "Journal Article" | "Magazine Article" | "Newspaper Article" | "Electronic Article" => {
            BibTeXEntryType::Article
        }
        "Book" => BibTeXEntryType::Book,
        "Book Section" => BibTeXEntryType::InCollection,
        "Conference Paper" => BibTeXEntryType::InProceedings,
        "Conference Proceedings" | "Conference Proceeding" => BibTeXEntryType::Proceedings,
        "Thesis" => BibTeXEntryType::PhdThesis,
        "Report" => BibTeXEntryType::TechReport,
        "Web Page" => BibTeXEntryType::Online,
        "Patent" => BibTeXEntryType::Patent,
        "Unpublished Work" | "Manuscript" => BibTeXEntryType::Unpublished,
        _ => BibTeXEntryType::Misc,
    }
}
