//! Field vocabulary and per-entry field storage

use serde::{Deserialize, Serialize};

/// A BibTeX field name from the closed vocabulary the converter emits.
///
/// `School` and `Institution` appear only in required-field tables; the
/// extractor never populates them.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Field {
    Title,
    Author,
    Year,
    Journal,
    Booktitle,
    Volume,
    Number,
    Pages,
    Publisher,
    Url,
    Doi,
    Abstract,
    Keywords,
    Isbn,
    Edition,
    Address,
    Note,
    Month,
    Series,
    Chapter,
    School,
    Institution,
}

impl Field {
    /// Every field, in declaration order. This is also the order fields are
    /// extracted in, so iteration order doubles as extraction order.
    pub const ALL: [Field; 22] = [
        Field::Title,
        Field::Author,
        Field::Year,
        Field::Journal,
        Field::Booktitle,
        Field::Volume,
        Field::Number,
        Field::Pages,
        Field::Publisher,
        Field::Url,
        Field::Doi,
        Field::Abstract,
        Field::Keywords,
        Field::Isbn,
        Field::Edition,
        Field::Address,
        Field::Note,
        Field::Month,
        Field::Series,
        Field::Chapter,
        Field::School,
        Field::Institution,
    ];

    /// The field name as it appears in BibTeX output.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Title => "title",
            Self::Author => "author",
            Self::Year => "year",
            Self::Journal => "journal",
            Self::Booktitle => "booktitle",
            Self::Volume => "volume",
            Self::Number => "number",
            Self::Pages => "pages",
            Self::Publisher => "publisher",
            Self::Url => "url",
            Self::Doi => "doi",
            Self::Abstract => "abstract",
            Self::Keywords => "keywords",
            Self::Isbn => "isbn",
            Self::Edition => "edition",
            Self::Address => "address",
            Self::Note => "note",
            Self::Month => "month",
            Self::Series => "series",
            Self::Chapter => "chapter",
            Self::School => "school",
            Self::Institution => "institution",
        }
    }
}

/// Field values for one entry, one optional slot per vocabulary member.
///
/// A fixed struct rather than a string-keyed map: the vocabulary is closed,
/// so lookups and the required-field check stay static.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldSet {
    pub title: Option<String>,
    pub author: Option<String>,
    pub year: Option<String>,
    pub journal: Option<String>,
    pub booktitle: Option<String>,
    pub volume: Option<String>,
    pub number: Option<String>,
    pub pages: Option<String>,
    pub publisher: Option<String>,
    pub url: Option<String>,
    pub doi: Option<String>,
    #[serde(rename = "abstract")]
    pub abstract_text: Option<String>,
    pub keywords: Option<String>,
    pub isbn: Option<String>,
    pub edition: Option<String>,
    pub address: Option<String>,
    pub note: Option<String>,
    pub month: Option<String>,
    pub series: Option<String>,
    pub chapter: Option<String>,
    pub school: Option<String>,
    pub institution: Option<String>,
}

impl FieldSet {
    /// Get a field value.
    pub fn get(&self, field: Field) -> Option<&str> {
        self.slot(field).as_deref()
    }

    /// Set a field value, replacing any previous one.
    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = Some(value.into());
    }

    /// True when no field is populated.
    pub fn is_empty(&self) -> bool {
        Field::ALL.iter().all(|&field| self.get(field).is_none())
    }

    /// Populated fields in declaration (= extraction) order.
    pub fn iter(&self) -> impl Iterator<Item = (Field, &str)> {
        Field::ALL
            .iter()
            .filter_map(move |&field| self.get(field).map(|value| (field, value)))
    }

    fn slot(&self, field: Field) -> &Option<String> {
        match field {
            Field::Title => &self.title,
            Field::Author => &self.author,
            Field::Year => &self.year,
            Field::Journal => &self.journal,
            Field::Booktitle => &self.booktitle,
            Field::Volume => &self.volume,
            Field::Number => &self.number,
            Field::Pages => &self.pages,
            Field::Publisher => &self.publisher,
            Field::Url => &self.url,
            Field::Doi => &self.doi,
            Field::Abstract => &self.abstract_text,
            Field::Keywords => &self.keywords,
            Field::Isbn => &self.isbn,
            Field::Edition => &self.edition,
            Field::Address => &self.address,
            Field::Note => &self.note,
            Field::Month => &self.month,
            Field::Series => &self.series,
            Field::Chapter => &self.chapter,
            Field::School => &self.school,
            Field::Institution => &self.institution,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut Option<String> {
        match field {
            Field::Title => &mut self.title,
            Field::Author => &mut self.author,
            Field::Year => &mut self.year,
            Field::Journal => &mut self.journal,
            Field::Booktitle => &mut self.booktitle,
            Field::Volume => &mut self.volume,
            Field::Number => &mut self.number,
            Field::Pages => &mut self.pages,
            Field::Publisher => &mut self.publisher,
            Field::Url => &mut self.url,
            Field::Doi => &mut self.doi,
            Field::Abstract => &mut self.abstract_text,
            Field::Keywords => &mut self.keywords,
            Field::Isbn => &mut self.isbn,
            Field::Edition => &mut self.edition,
            Field::Address => &mut self.address,
            Field::Note => &mut self.note,
            Field::Month => &mut self.month,
            Field::Series => &mut self.series,
            Field::Chapter => &mut self.chapter,
            Field::School => &mut self.school,
            Field::Institution => &mut self.institution,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_and_get() {
        let mut fields = FieldSet::default();
        fields.set(Field::Title, "A Great Paper");
        fields.set(Field::Year, "2024");

        assert_eq!(fields.get(Field::Title), Some("A Great Paper"));
        assert_eq!(fields.get(Field::Year), Some("2024"));
        assert_eq!(fields.get(Field::Author), None);
    }

    #[test]
    fn test_set_replaces_value() {
        let mut fields = FieldSet::default();
        fields.set(Field::Volume, "1");
        fields.set(Field::Volume, "2");
        assert_eq!(fields.get(Field::Volume), Some("2"));
    }

    #[test]
    fn test_iter_declaration_order() {
        let mut fields = FieldSet::default();
        // Set out of order; iteration still follows declaration order.
        fields.set(Field::Year, "1975");
        fields.set(Field::Title, "Particle creation by black holes");
        fields.set(Field::Volume, "43");

        let order: Vec<Field> = fields.iter().map(|(field, _)| field).collect();
        assert_eq!(order, vec![Field::Title, Field::Year, Field::Volume]);
    }

    #[test]
    fn test_is_empty() {
        let mut fields = FieldSet::default();
        assert!(fields.is_empty());
        fields.set(Field::Note, "in press");
        assert!(!fields.is_empty());
    }

    #[test]
    fn test_field_names() {
        assert_eq!(Field::Abstract.as_str(), "abstract");
        assert_eq!(Field::Booktitle.as_str(), "booktitle");
        assert_eq!(Field::Doi.as_str(), "doi");
    }
}
