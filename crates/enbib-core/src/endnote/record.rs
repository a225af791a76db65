//! Record access: reference-type label and source-assigned key

use roxmltree::Node;

/// One bibliographic reference inside an EndNote export.
#[derive(Debug, Clone, Copy)]
pub struct Record<'a, 'input> {
    node: Node<'a, 'input>,
}

impl<'a, 'input> Record<'a, 'input> {
    pub(crate) fn new(node: Node<'a, 'input>) -> Self {
        Self { node }
    }

    pub(crate) fn node(&self) -> Node<'a, 'input> {
        self.node
    }

    /// The EndNote reference-type label, resolved through an ordered list of
    /// lookups: the `name` attribute of a `ref-type` descendant element, the
    /// `ref-type` attribute on the record element itself, and finally the
    /// literal `Generic`.
    pub fn ref_type_label(&self) -> &'a str {
        self.node
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "ref-type")
            .and_then(|n| n.attribute("name"))
            .or_else(|| self.node.attribute("ref-type"))
            .unwrap_or("Generic")
    }

    /// The source-assigned numeric key, if the record carries one.
    pub fn rec_number(&self) -> Option<&'a str> {
        self.node
            .descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "rec-number")
            .and_then(|n| n.text())
            .filter(|text| !text.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roxmltree::Document;

    fn first_record<'a, 'input>(doc: &'a Document<'input>) -> Record<'a, 'input> {
        doc.descendants()
            .find(|n| n.is_element() && n.tag_name().name() == "record")
            .map(Record::new)
            .unwrap()
    }

    #[test]
    fn test_label_from_ref_type_element() {
        let doc =
            Document::parse(r#"<record><ref-type name="Journal Article">17</ref-type></record>"#)
                .unwrap();
        assert_eq!(first_record(&doc).ref_type_label(), "Journal Article");
    }

    #[test]
    fn test_label_from_record_attribute() {
        let doc = Document::parse(r#"<record ref-type="Book"/>"#).unwrap();
        assert_eq!(first_record(&doc).ref_type_label(), "Book");
    }

    #[test]
    fn test_element_attribute_precedes_record_attribute() {
        let doc = Document::parse(
            r#"<record ref-type="Book"><ref-type name="Thesis">32</ref-type></record>"#,
        )
        .unwrap();
        assert_eq!(first_record(&doc).ref_type_label(), "Thesis");
    }

    #[test]
    fn test_ref_type_element_without_name_falls_through() {
        let doc =
            Document::parse(r#"<record ref-type="Patent"><ref-type>25</ref-type></record>"#)
                .unwrap();
        assert_eq!(first_record(&doc).ref_type_label(), "Patent");
    }

    #[test]
    fn test_label_defaults_to_generic() {
        let doc = Document::parse("<record/>").unwrap();
        assert_eq!(first_record(&doc).ref_type_label(), "Generic");
    }

    #[test]
    fn test_rec_number() {
        let doc = Document::parse("<record><rec-number>47</rec-number></record>").unwrap();
        assert_eq!(first_record(&doc).rec_number(), Some("47"));
    }

    #[test]
    fn test_rec_number_absent() {
        let doc = Document::parse("<record/>").unwrap();
        assert_eq!(first_record(&doc).rec_number(), None);
    }

    #[test]
    fn test_rec_number_empty_element() {
        let doc = Document::parse("<record><rec-number/></record>").unwrap();
        assert_eq!(first_record(&doc).rec_number(), None);
    }
}
