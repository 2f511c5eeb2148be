//! Merging and deterministic ordering of parsed sections.
//!
//! Class-origin sections come first, then subclass sections in the order
//! the subclasses were requested; the combined list is then stably sorted
//! by ascending level, class-before-subclass origin on ties, and a folded
//! alphabetical title comparison on further ties.

use std::cmp::Ordering;

use super::names::fold;
use super::types::Section;

/// Concatenate class sections with per-subclass section lists (request
/// order) and sort the result deterministically.
pub fn merge(class_sections: Vec<Section>, subclass_sections: Vec<Vec<Section>>) -> Vec<Section> {
    let mut merged = class_sections;
    for sections in subclass_sections {
        merged.extend(sections);
    }
    sort_sections(&mut merged);
    merged
}

/// Stable sort: (level, origin, folded title).
///
/// Titles compare case-insensitively with diacritics stripped, which
/// matches French dictionary ordering for the corpus vocabulary.
pub fn sort_sections(sections: &mut [Section]) {
    sections.sort_by(compare);
}

fn compare(a: &Section, b: &Section) -> Ordering {
    a.level
        .cmp(&b.level)
        .then_with(|| a.origin.cmp(&b.origin))
        .then_with(|| fold(&a.title).cmp(&fold(&b.title)))
}
