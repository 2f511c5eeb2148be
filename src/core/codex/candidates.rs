//! Candidate location generation.
//!
//! The remote content hierarchy is not internally consistent: documents live
//! under different folder spellings, subclass directories use several naming
//! conventions, and filenames mix prefixes and dash glyphs. This module
//! expands a canonical class (and optionally subclass) name into the ordered
//! list of locations worth trying, deduplicated with first-seen priority.
//!
//! Both generators are pure functions: same inputs, same sequence, no I/O.
//! Priority is positional; the fetcher walks the list in order and stops at
//! the first success.

use std::collections::HashMap;

use once_cell::sync::Lazy;

use super::names::{build_name_variants, canonicalize_class, push_unique, strip_diacritics};

/// Folder naming conventions observed for subclass directories, in the
/// order they should be tried.
const SUBCLASS_DIR_NAMES: [&str; 5] = [
    "Sous-classes",
    "Sous-Classes",
    "sous-classes",
    "Archetypes",
    "Subclasses",
];

/// Preferred filename prefix for subclass documents.
const PRIMARY_PREFIX: &str = "Sous-classe";

/// Legacy filename prefixes still present in older parts of the tree.
const LEGACY_PREFIXES: [&str; 2] = ["Archétype", "Archetype"];

/// Dash glyphs used between prefix and name: hyphen, en dash, em dash.
const DASHES: [&str; 3] = ["-", "\u{2013}", "\u{2014}"];

/// Legacy folder spellings that survive alongside the canonical class
/// folder. The two historical Warlock folders both shadow "Occultiste".
static LEGACY_FOLDERS: Lazy<HashMap<&'static str, &'static [&'static str]>> = Lazy::new(|| {
    HashMap::from([
        ("Occultiste", &["Sorcier", "Warlock"][..]),
        ("Roublard", &["Voleur"][..]),
        ("Clerc", &["Prêtre"][..]),
    ])
});

/// Subclass directory conventions, in priority order.
pub fn subclass_dir_names() -> &'static [&'static str] {
    &SUBCLASS_DIR_NAMES
}

/// Folder spellings to try for a class: canonical name, known legacy
/// folders, and a diacritics-stripped variant of each. Deduplicated,
/// order-preserving.
pub fn class_folder_names(class_name: &str) -> Vec<String> {
    let canonical = canonicalize_class(class_name);
    let mut folders = vec![canonical.clone()];
    if let Some(legacy) = LEGACY_FOLDERS.get(canonical.as_str()) {
        for name in *legacy {
            push_unique(&mut folders, (*name).to_string());
        }
    }
    for i in 0..folders.len() {
        let stripped = strip_diacritics(&folders[i]);
        push_unique(&mut folders, stripped);
    }
    folders
}

/// Candidate locations for a class document.
///
/// For each root and folder variant, in priority order: the primary
/// `<folder>/<folder>.md` convention, then `README.md`, then `index.md`.
pub fn build_class_candidates(roots: &[String], class_name: &str) -> Vec<String> {
    let folders = class_folder_names(class_name);
    let mut candidates = Vec::new();
    for root in roots {
        let root = root.trim_end_matches('/');
        for folder in &folders {
            push_unique(&mut candidates, format!("{root}/{folder}/{folder}.md"));
            push_unique(&mut candidates, format!("{root}/{folder}/README.md"));
            push_unique(&mut candidates, format!("{root}/{folder}/index.md"));
        }
    }
    candidates
}

/// Candidate locations for a subclass document.
///
/// For each root x class-folder x subclass-dir x name variant, emits in
/// priority order: the primary prefix with each dash glyph, the bare name,
/// legacy prefixes with each dash glyph, nested per-name folders
/// (`<name>/README.md`, `<name>/index.md`, and primary-prefixed folder
/// variants of those), and finally a root-level `<classFolder>/<name>.md`
/// fallback once all directory conventions for that folder are exhausted.
///
/// `subclass_name` is expected to already be canonical; the caller
/// canonicalizes before generating.
pub fn build_subclass_candidates(
    roots: &[String],
    class_name: &str,
    subclass_name: &str,
) -> Vec<String> {
    let folders = class_folder_names(class_name);
    let variants = build_name_variants(subclass_name);
    let mut candidates = Vec::new();

    for root in roots {
        let root = root.trim_end_matches('/');
        for folder in &folders {
            let class_base = format!("{root}/{folder}");
            for dir in SUBCLASS_DIR_NAMES {
                let dir_base = format!("{class_base}/{dir}");
                for name in &variants {
                    for dash in DASHES {
                        push_unique(
                            &mut candidates,
                            format!("{dir_base}/{PRIMARY_PREFIX} {dash} {name}.md"),
                        );
                    }
                    push_unique(&mut candidates, format!("{dir_base}/{name}.md"));
                    for prefix in LEGACY_PREFIXES {
                        for dash in DASHES {
                            push_unique(
                                &mut candidates,
                                format!("{dir_base}/{prefix} {dash} {name}.md"),
                            );
                        }
                    }
                    push_unique(&mut candidates, format!("{dir_base}/{name}/README.md"));
                    push_unique(&mut candidates, format!("{dir_base}/{name}/index.md"));
                    for dash in DASHES {
                        push_unique(
                            &mut candidates,
                            format!("{dir_base}/{PRIMARY_PREFIX} {dash} {name}/README.md"),
                        );
                        push_unique(
                            &mut candidates,
                            format!("{dir_base}/{PRIMARY_PREFIX} {dash} {name}/index.md"),
                        );
                    }
                }
            }
            // Root-level fallback, after every directory convention.
            for name in &variants {
                push_unique(&mut candidates, format!("{class_base}/{name}.md"));
            }
        }
    }

    candidates
}
