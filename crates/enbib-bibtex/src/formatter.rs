//! BibTeX formatting module
//!
//! Serializes `BibTeXEntry` structures to BibTeX entry-block text.

use crate::entry::BibTeXEntry;
use crate::field::Field;

/// Format a single entry.
///
/// Required fields of the entry type come first, in the type's declared
/// order; the remaining populated fields follow in extraction order. A
/// required field that is absent emits no line at all.
pub fn format_entry(entry: &BibTeXEntry) -> String {
    let mut out = String::new();
    out.push('@');
    out.push_str(entry.entry_type.as_str());
    out.push('{');
    out.push_str(&entry.cite_key);

    let required = entry.entry_type.required_fields();
    for &field in required {
        if let Some(value) = entry.fields.get(field) {
            push_field(&mut out, field, value);
        }
    }
    for (field, value) in entry.fields.iter() {
        if !required.contains(&field) {
            push_field(&mut out, field, value);
        }
    }

    out.push_str("\n}");
    out
}

/// Format multiple entries, separated by a single blank line.
pub fn format_entries(entries: &[BibTeXEntry]) -> String {
    entries
        .iter()
        .map(format_entry)
        .collect::<Vec<_>>()
        .join("\n\n")
}

// Values pass through verbatim: no escaping or brace balancing beyond the
// single wrapping pair. See DESIGN.md for the known fidelity gap.
fn push_field(out: &mut String, field: Field, value: &str) {
    out.push_str("\n\t");
    out.push_str(field.as_str());
    out.push_str(" = {");
    out.push_str(value);
    out.push_str("},");
}
