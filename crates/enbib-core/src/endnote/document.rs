//! Document locator for EndNote XML exports

use roxmltree::Document;

use super::record::Record;
use crate::error::ConvertError;

/// A parsed EndNote export. Transient: built once per conversion call and
/// discarded with it.
#[derive(Debug)]
pub struct EndNoteDocument<'input> {
    doc: Document<'input>,
}

impl<'input> EndNoteDocument<'input> {
    /// Parse raw XML text. Malformed input fails with the underlying
    /// parser's message; no partial document is produced.
    pub fn parse(xml: &'input str) -> Result<Self, ConvertError> {
        let doc = Document::parse(xml).map_err(|e| ConvertError::Parse {
            message: e.to_string(),
        })?;
        Ok(Self { doc })
    }

    /// Locate the record collection.
    ///
    /// EndNote exports vary in whether records sit inside an outer
    /// `<records>` container, so two lookups run in order: records wrapped
    /// in a container first, then bare `<record>` elements anywhere in the
    /// document. Finding none under either is an `EmptyDocument` error,
    /// distinct from a parse error.
    pub fn records(&self) -> Result<Vec<Record<'_, 'input>>, ConvertError> {
        let lookups = [Self::wrapped_records, Self::bare_records];
        for lookup in lookups {
            let found = lookup(self);
            if !found.is_empty() {
                return Ok(found);
            }
        }
        Err(ConvertError::EmptyDocument)
    }

    fn wrapped_records(&self) -> Vec<Record<'_, 'input>> {
        self.doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "record")
            .filter(|n| {
                n.parent()
                    .map_or(false, |p| p.is_element() && p.tag_name().name() == "records")
            })
            .map(Record::new)
            .collect()
    }

    fn bare_records(&self) -> Vec<Record<'_, 'input>> {
        self.doc
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "record")
            .map(Record::new)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_malformed_xml() {
        let err = EndNoteDocument::parse("<records><record>").unwrap_err();
        assert!(matches!(err, ConvertError::Parse { .. }));
    }

    #[test]
    fn test_wrapped_layout() {
        let xml = "<xml><records><record/><record/></records></xml>";
        let doc = EndNoteDocument::parse(xml).unwrap();
        assert_eq!(doc.records().unwrap().len(), 2);
    }

    #[test]
    fn test_bare_layout() {
        let xml = "<export><record/><inner><record/></inner></export>";
        let doc = EndNoteDocument::parse(xml).unwrap();
        assert_eq!(doc.records().unwrap().len(), 2);
    }

    #[test]
    fn test_wrapped_layout_wins_over_bare() {
        // One stray record outside the container: the wrapped lookup matches
        // first and the stray is not picked up.
        let xml = "<xml><records><record/></records><record/></xml>";
        let doc = EndNoteDocument::parse(xml).unwrap();
        assert_eq!(doc.records().unwrap().len(), 1);
    }

    #[test]
    fn test_no_records_is_empty_document() {
        let doc = EndNoteDocument::parse("<xml><records/></xml>").unwrap();
        assert_eq!(doc.records().unwrap_err(), ConvertError::EmptyDocument);
    }
}
