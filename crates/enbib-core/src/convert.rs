//! Conversion pipeline: locate records, extract fields, classify, format,
//! and aggregate the results into one report.

use enbib_bibtex::{format_entries, BibTeXEntry};
use serde::{Deserialize, Serialize};

use crate::endnote::{entry_type_for_label, extract_fields, EndNoteDocument};
use crate::error::ConvertError;

/// Engine configuration, passed explicitly into every call so conversions
/// stay reentrant; there is no engine-held mutable state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConvertOptions {
    /// When false, missing-required-field diagnostics are surfaced in the
    /// report's warnings list.
    pub suppress_warnings: bool,
    /// Resolve EndNote styled-text wrappers when reading field values.
    pub extract_styled_text: bool,
}

impl Default for ConvertOptions {
    fn default() -> Self {
        Self {
            suppress_warnings: true,
            extract_styled_text: true,
        }
    }
}

/// Result of one conversion call.
///
/// Total failure is an empty `bibtex` string together with a non-empty
/// error list; nothing panics or errors across this boundary, so callers
/// should check `is_failure` rather than rely on error signaling alone.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ConversionReport {
    /// All successfully produced entries, separated by a single blank line.
    pub bibtex: String,
    /// Missing-required-field diagnostics; populated only when
    /// `suppress_warnings` is false.
    pub warnings: Vec<String>,
    /// Accumulated errors, in record order.
    pub errors: Vec<ConvertError>,
}

impl ConversionReport {
    /// True when the conversion produced no entries and at least one error.
    pub fn is_failure(&self) -> bool {
        self.bibtex.is_empty() && !self.errors.is_empty()
    }
}

/// Convert one EndNote XML export to BibTeX text.
///
/// Record-level failures are isolated: the failing record contributes one
/// error and no entry, and processing continues with its siblings.
/// Document-level failures (malformed XML, no records) short-circuit with
/// zero entries and one error.
pub fn convert_to_bibtex(xml: &str, options: &ConvertOptions) -> ConversionReport {
    let mut report = ConversionReport::default();

    let document = match EndNoteDocument::parse(xml) {
        Ok(document) => document,
        Err(err) => {
            report.errors.push(err);
            return report;
        }
    };
    let records = match document.records() {
        Ok(records) => records,
        Err(err) => {
            report.errors.push(err);
            return report;
        }
    };

    let mut entries: Vec<BibTeXEntry> = Vec::new();
    for (index, record) in records.iter().enumerate() {
        let fields = match extract_fields(record, options) {
            Ok(fields) => fields,
            Err(fault) => {
                tracing::warn!(record = index + 1, "skipping record: {fault}");
                report.errors.push(ConvertError::Record {
                    index: index + 1,
                    message: fault.to_string(),
                });
                continue;
            }
        };

        let entry_type = entry_type_for_label(record.ref_type_label());
        // Fallback keys number successfully produced entries, so the
        // sequence skips failed records.
        let cite_key = match record.rec_number() {
            Some(key) => key.to_string(),
            None => format!("ref{}", entries.len() + 1),
        };
        let entry = BibTeXEntry {
            cite_key,
            entry_type,
            fields,
        };

        let missing = entry.missing_required_fields();
        if !missing.is_empty() && !options.suppress_warnings {
            let names: Vec<&str> = missing.iter().map(|f| f.as_str()).collect();
            let warning = format!(
                "missing required field(s) for entry '{}': {}",
                entry.title().unwrap_or(&entry.cite_key),
                names.join(", ")
            );
            tracing::warn!("{warning}");
            report.warnings.push(warning);
        }

        tracing::debug!(
            record = index + 1,
            key = %entry.cite_key,
            entry_type = entry.entry_type.as_str(),
            "converted record"
        );
        entries.push(entry);
    }

    report.bibtex = format_entries(&entries);
    report
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_options() {
        let options = ConvertOptions::default();
        assert!(options.suppress_warnings);
        assert!(options.extract_styled_text);
    }

    #[test]
    fn test_parse_failure_report() {
        let report = convert_to_bibtex("not xml at all <", &ConvertOptions::default());
        assert!(report.bibtex.is_empty());
        assert_eq!(report.errors.len(), 1);
        assert!(matches!(report.errors[0], ConvertError::Parse { .. }));
        assert!(report.is_failure());
    }

    #[test]
    fn test_empty_document_report() {
        let report = convert_to_bibtex("<xml><records/></xml>", &ConvertOptions::default());
        assert!(report.is_failure());
        assert_eq!(report.errors, vec![ConvertError::EmptyDocument]);
    }

    #[test]
    fn test_degenerate_record_still_emits_entry() {
        let report = convert_to_bibtex(
            "<xml><records><record/></records></xml>",
            &ConvertOptions::default(),
        );
        assert_eq!(report.bibtex, "@misc{ref1\n}");
        assert!(report.errors.is_empty());
        assert!(!report.is_failure());
    }

    #[test]
    fn test_rec_number_becomes_cite_key() {
        let report = convert_to_bibtex(
            "<xml><records><record><rec-number>47</rec-number></record></records></xml>",
            &ConvertOptions::default(),
        );
        assert_eq!(report.bibtex, "@misc{47\n}");
    }

    #[test]
    fn test_warnings_suppressed_by_default() {
        let xml = r#"<xml><records><record>
            <ref-type name="Journal Article">17</ref-type>
            <titles><title>No Author Or Journal</title></titles>
        </record></records></xml>"#;
        let report = convert_to_bibtex(xml, &ConvertOptions::default());
        assert!(report.warnings.is_empty());

        let options = ConvertOptions {
            suppress_warnings: false,
            ..ConvertOptions::default()
        };
        let report = convert_to_bibtex(xml, &options);
        assert_eq!(report.warnings.len(), 1);
        assert!(report.warnings[0].contains("No Author Or Journal"));
        assert!(report.warnings[0].contains("author"));
        assert!(report.warnings[0].contains("journal"));
        assert!(report.warnings[0].contains("year"));
    }
}
