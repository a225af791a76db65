//! Per-record field extraction
//!
//! Each semantic field is pulled independently with a descendant search:
//! EndNote nests fields inconsistently across versions, so paths anchor on
//! the first matching descendant rather than a fixed depth. Individual
//! fields are best-effort; only a structural fault while walking the
//! subtree fails the record, and then the record yields zero fields rather
//! than a partial set.

use enbib_bibtex::{Field, FieldSet};
use roxmltree::Node;
use thiserror::Error;

use super::record::Record;
use super::JOURNAL_ARTICLE_LABEL;
use crate::convert::ConvertOptions;

/// Nesting bound for one record's subtree walk. Real exports stay far below
/// this; a subtree that exceeds it is treated as malformed.
const MAX_RECORD_DEPTH: usize = 64;

/// Structural fault while walking a record subtree. The whole record is
/// rejected; siblings are unaffected.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ExtractError {
    #[error("record subtree nests deeper than {} levels", MAX_RECORD_DEPTH)]
    TooDeep,
}

/// Single-value fields and the element paths they are read from.
const SINGLE_VALUE_PATHS: &[(Field, &[&str])] = &[
    (Field::Volume, &["volume"]),
    (Field::Number, &["number"]),
    (Field::Pages, &["pages"]),
    (Field::Publisher, &["publisher"]),
    (Field::Url, &["urls", "related-urls", "url"]),
    (Field::Doi, &["electronic-resource-num"]),
    (Field::Abstract, &["abstract"]),
    (Field::Isbn, &["isbn"]),
    (Field::Edition, &["edition"]),
    (Field::Address, &["address"]),
    (Field::Note, &["note"]),
    (Field::Month, &["month"]),
    (Field::Series, &["series"]),
    (Field::Chapter, &["chapter"]),
];

/// Extract every semantic field from one record.
pub fn extract_fields(
    record: &Record<'_, '_>,
    options: &ConvertOptions,
) -> Result<FieldSet, ExtractError> {
    let root = record.node();
    check_depth(root)?;

    let mut fields = FieldSet::default();

    if let Some(title) = text_at_path(root, &["titles", "title"], options) {
        fields.set(Field::Title, title);
    }

    let author_names: Vec<String> = descendant_path(root, &["contributors", "authors"])
        .map(|container| {
            container
                .descendants()
                .filter(|n| n.is_element() && n.tag_name().name() == "author")
                .filter_map(|n| resolve_text(n, options))
                .collect()
        })
        .unwrap_or_default();
    if !author_names.is_empty() {
        fields.set(Field::Author, author_names.join(" and "));
    }

    if let Some(year) = text_at_path(root, &["dates", "year"], options) {
        fields.set(Field::Year, year);
    }

    // The secondary title is the venue. Whether it lands in `journal` or
    // `booktitle` depends on the raw reference-type label, not on the
    // canonical entry type.
    if let Some(venue) = text_at_path(root, &["titles", "secondary-title"], options) {
        if record.ref_type_label() == JOURNAL_ARTICLE_LABEL {
            fields.set(Field::Journal, venue);
        } else {
            fields.set(Field::Booktitle, venue);
        }
    }

    for (field, path) in SINGLE_VALUE_PATHS {
        if let Some(value) = text_at_path(root, path, options) {
            fields.set(*field, value);
        }
    }

    let keywords: Vec<String> = descendant_path_all(root, &["keywords", "keyword"])
        .into_iter()
        .filter_map(|n| resolve_text(n, options))
        .collect();
    if !keywords.is_empty() {
        fields.set(Field::Keywords, keywords.join(", "));
    }

    Ok(fields)
}

/// Effective text of a field element.
///
/// EndNote represents character-formatted values as a run of `style`
/// sub-elements; when styled-text extraction is enabled and such a run is
/// present, the value is the concatenated run text in document order.
/// Otherwise the element's own direct text is used. Whitespace-only results
/// count as absent.
fn resolve_text(node: Node<'_, '_>, options: &ConvertOptions) -> Option<String> {
    let styled = options.extract_styled_text
        && node
            .descendants()
            .any(|n| n.is_element() && n.tag_name().name() == "style");
    let raw: String = if styled {
        node.descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == "style")
            .filter_map(|n| n.text())
            .collect()
    } else {
        node.text().unwrap_or_default().to_string()
    };

    let trimmed = raw.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn text_at_path(
    scope: Node<'_, '_>,
    path: &[&str],
    options: &ConvertOptions,
) -> Option<String> {
    descendant_path(scope, path).and_then(|n| resolve_text(n, options))
}

/// First element matching `path` under `scope`: the leading segment matches
/// at any depth, later segments as child steps, in document order.
fn descendant_path<'a, 'input>(
    scope: Node<'a, 'input>,
    path: &[&str],
) -> Option<Node<'a, 'input>> {
    let (first, rest) = path.split_first()?;
    scope
        .descendants()
        .filter(|n| n.is_element() && n.tag_name().name() == *first)
        .find_map(|n| child_path(n, rest))
}

fn child_path<'a, 'input>(node: Node<'a, 'input>, path: &[&str]) -> Option<Node<'a, 'input>> {
    match path.split_first() {
        None => Some(node),
        Some((segment, rest)) => node
            .children()
            .filter(|n| n.is_element() && n.tag_name().name() == *segment)
            .find_map(|n| child_path(n, rest)),
    }
}

/// Every element matching `path` under `scope`, in document order.
fn descendant_path_all<'a, 'input>(
    scope: Node<'a, 'input>,
    path: &[&str],
) -> Vec<Node<'a, 'input>> {
    let mut out = Vec::new();
    if let Some((first, rest)) = path.split_first() {
        for node in scope
            .descendants()
            .filter(|n| n.is_element() && n.tag_name().name() == *first)
        {
            collect_child_path(node, rest, &mut out);
        }
    }
    out
}

fn collect_child_path<'a, 'input>(
    node: Node<'a, 'input>,
    path: &[&str],
    out: &mut Vec<Node<'a, 'input>>,
) {
    match path.split_first() {
        None => out.push(node),
        Some((segment, rest)) => {
            for child in node
                .children()
                .filter(|n| n.is_element() && n.tag_name().name() == *segment)
            {
                collect_child_path(child, rest, out);
            }
        }
    }
}

fn check_depth(record: Node<'_, '_>) -> Result<(), ExtractError> {
    let base = record.ancestors().count();
    for node in record.descendants() {
        if node.ancestors().count() - base > MAX_RECORD_DEPTH {
            return Err(ExtractError::TooDeep);
        }
    }
    Ok(())
}
