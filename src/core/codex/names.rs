//! Name canonicalization for classes and subclasses.
//!
//! Free-form user input ("sorcier", "WARLOCK", "Rodeur (multiclasse)") is
//! mapped onto the single authoritative display form used by the content
//! hierarchy. Lookup keys are normalized first: lowercased, diacritics
//! stripped, parenthetical content removed, internal whitespace collapsed.
//!
//! The alias tables are static and loaded once. Classes carry both legacy
//! French and English names; notably the two historical Warlock names
//! ("Sorcier", "Warlock") both map onto the modern "Occultiste".
//!
//! [`build_name_variants`] generates the ordered list of textual forms the
//! candidate generator combines into filenames. First-occurrence order is
//! preserved because it governs resolution priority.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Matches parenthetical content, including the parentheses.
static PARENTHETICAL: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\([^)]*\)").expect("Invalid parenthetical regex"));

/// Apostrophe glyphs normalized to a plain `'`.
const APOSTROPHES: [char; 3] = ['\u{2019}', '\u{02BC}', '`'];

/// The one recurring corpus word spelled both with and without its accent.
/// "Protecteur Fiélon" appears as "Fielon" in older documents, so name
/// variants must cover both spellings.
const ACCENT_VARIANT_PAIRS: [(&str, &str); 2] = [("fiélon", "fielon"), ("Fiélon", "Fielon")];

/// Class alias table: normalized input -> canonical display name.
static CLASS_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("barbare", "Barbare"),
        ("barbarian", "Barbare"),
        ("barde", "Barde"),
        ("bard", "Barde"),
        ("clerc", "Clerc"),
        ("cleric", "Clerc"),
        ("pretre", "Clerc"),
        ("druide", "Druide"),
        ("druid", "Druide"),
        ("ensorceleur", "Ensorceleur"),
        ("sorcerer", "Ensorceleur"),
        ("guerrier", "Guerrier"),
        ("fighter", "Guerrier"),
        ("magicien", "Magicien"),
        ("wizard", "Magicien"),
        ("mage", "Magicien"),
        ("moine", "Moine"),
        ("monk", "Moine"),
        ("occultiste", "Occultiste"),
        // Legacy French and English Warlock names, one modern form.
        ("sorcier", "Occultiste"),
        ("warlock", "Occultiste"),
        ("paladin", "Paladin"),
        ("rodeur", "Rôdeur"),
        ("ranger", "Rôdeur"),
        ("roublard", "Roublard"),
        ("rogue", "Roublard"),
        ("voleur", "Roublard"),
    ])
});

/// Subclass alias table: normalized input -> canonical display name.
///
/// Keyed by normalized subclass text alone; subclass names are distinct
/// enough across the corpus that class qualification is unnecessary.
static SUBCLASS_ALIASES: Lazy<HashMap<&'static str, &'static str>> = Lazy::new(|| {
    HashMap::from([
        ("fielon", "Protecteur Fiélon"),
        ("le fielon", "Protecteur Fiélon"),
        ("protecteur fielon", "Protecteur Fiélon"),
        ("the fiend", "Protecteur Fiélon"),
        ("archifee", "Protecteur Archifée"),
        ("protecteur archifee", "Protecteur Archifée"),
        ("the archfey", "Protecteur Archifée"),
        ("grand ancien", "Protecteur Grand Ancien"),
        ("the great old one", "Protecteur Grand Ancien"),
        ("evocation", "École d'Évocation"),
        ("ecole d'evocation", "École d'Évocation"),
        ("school of evocation", "École d'Évocation"),
        ("vie", "Domaine de la Vie"),
        ("domaine de la vie", "Domaine de la Vie"),
        ("life domain", "Domaine de la Vie"),
        ("berserker", "Voie du Berserker"),
        ("voie du berserker", "Voie du Berserker"),
        ("totem", "Voie du Totem"),
        ("voie du totem", "Voie du Totem"),
    ])
});

// ============================================================================
// Normalization primitives
// ============================================================================

/// Strip diacritics via NFD decomposition, dropping combining marks.
pub fn strip_diacritics(s: &str) -> String {
    s.nfd().filter(|c| !is_combining_mark(*c)).collect()
}

/// Lowercase + diacritics-stripped form, used for ordering comparisons.
pub fn fold(s: &str) -> String {
    strip_diacritics(&s.to_lowercase())
}

/// Normalize a name into its alias-table lookup key: lowercase, strip
/// diacritics, drop parenthetical content, collapse internal whitespace.
pub fn normalize(s: &str) -> String {
    let without_parens = PARENTHETICAL.replace_all(s, " ");
    let folded = fold(&without_parens);
    folded.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Title-case every whitespace-separated word.
fn title_case(s: &str) -> String {
    s.split_whitespace()
        .map(capitalize)
        .collect::<Vec<_>>()
        .join(" ")
}

/// Capitalize the first letter, lowercase the rest.
fn capitalize(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => {
            first.to_uppercase().collect::<String>() + &chars.as_str().to_lowercase()
        }
        None => String::new(),
    }
}

/// Sentence case: first letter capitalized, everything else lowercased.
fn sentence_case(s: &str) -> String {
    capitalize(s.trim())
}

/// Replace curly/backtick apostrophes with a plain `'`.
fn normalize_apostrophes(s: &str) -> String {
    s.chars()
        .map(|c| if APOSTROPHES.contains(&c) { '\'' } else { c })
        .collect()
}

/// Strip parenthetical content and re-collapse whitespace, keeping case.
fn strip_parentheticals(s: &str) -> String {
    let without = PARENTHETICAL.replace_all(s, " ");
    without.split_whitespace().collect::<Vec<_>>().join(" ")
}

// ============================================================================
// Canonicalization
// ============================================================================

/// Canonicalize a free-form class name.
///
/// Alias-table hit returns the canonical display form; a miss falls back to
/// a title-cased transform of the raw input. Never fails, never empty for
/// non-empty input, and idempotent on already-canonical names.
pub fn canonicalize_class(name: &str) -> String {
    let key = normalize(name);
    match CLASS_ALIASES.get(key.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => title_case(name.trim()),
    }
}

/// Canonicalize a free-form subclass name.
///
/// The class name participates in the signature for correctness (a subclass
/// only means something inside its class), but the lookup itself is keyed
/// by the normalized subclass text alone.
pub fn canonicalize_subclass(_class_name: &str, name: &str) -> String {
    let key = normalize(name);
    match SUBCLASS_ALIASES.get(key.as_str()) {
        Some(canonical) => (*canonical).to_string(),
        None => title_case(name.trim()),
    }
}

/// Display form of a class name, for sheet headers and UI labels.
pub fn display_class_name(name: &str) -> String {
    canonicalize_class(name)
}

// ============================================================================
// Name variants
// ============================================================================

/// Generate the ordered, deduplicated list of textual forms to try for a
/// name when composing candidate filenames.
///
/// Emission order (first occurrence wins, order governs priority):
/// 1. the raw trimmed string, lowercase, title case, sentence case;
/// 2. each of the above with parenthetical content stripped;
/// 3. each prior form with apostrophes normalized to `'`;
/// 4. each prior form with the known accent-variant substitution applied;
/// 5. a diacritics-stripped counterpart of every prior form.
pub fn build_name_variants(name: &str) -> Vec<String> {
    let raw = name.trim();
    let mut variants: Vec<String> = Vec::new();

    push_unique(&mut variants, raw.to_string());
    push_unique(&mut variants, raw.to_lowercase());
    push_unique(&mut variants, title_case(raw));
    push_unique(&mut variants, sentence_case(raw));

    for i in 0..variants.len() {
        let stripped = strip_parentheticals(&variants[i]);
        push_unique(&mut variants, stripped);
    }

    for i in 0..variants.len() {
        let plain = normalize_apostrophes(&variants[i]);
        push_unique(&mut variants, plain);
    }

    for i in 0..variants.len() {
        for (accented, bare) in ACCENT_VARIANT_PAIRS {
            if variants[i].contains(accented) {
                let swapped = variants[i].replace(accented, bare);
                push_unique(&mut variants, swapped);
            } else if variants[i].contains(bare) {
                let swapped = variants[i].replace(bare, accented);
                push_unique(&mut variants, swapped);
            }
        }
    }

    for i in 0..variants.len() {
        let folded = strip_diacritics(&variants[i]);
        push_unique(&mut variants, folded);
    }

    variants
}

/// Append preserving first-seen order; empty strings are never kept.
pub(crate) fn push_unique(list: &mut Vec<String>, value: String) {
    if !value.is_empty() && !list.contains(&value) {
        list.push(value);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // -------------------------------------------------------------------------
    // Normalization tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_normalize_lowercases_and_strips_accents() {
        assert_eq!(normalize("Rôdeur"), "rodeur");
        assert_eq!(normalize("OCCULTISTE"), "occultiste");
    }

    #[test]
    fn test_normalize_drops_parentheticals() {
        assert_eq!(normalize("Magicien (multiclasse)"), "magicien");
        assert_eq!(normalize("Clerc (Domaine de la Vie) "), "clerc");
    }

    #[test]
    fn test_normalize_collapses_whitespace() {
        assert_eq!(normalize("  protecteur   fiélon "), "protecteur fielon");
    }

    // -------------------------------------------------------------------------
    // Class canonicalization tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_canonicalize_class_is_idempotent() {
        let once = canonicalize_class("Occultiste");
        assert_eq!(canonicalize_class(&once), once);
        assert_eq!(once, "Occultiste");
    }

    #[test]
    fn test_canonicalize_class_alias_equivalence() {
        // Three historical/foreign names, one modern form.
        assert_eq!(canonicalize_class("Sorcier"), "Occultiste");
        assert_eq!(canonicalize_class("Warlock"), "Occultiste");
        assert_eq!(canonicalize_class("occultiste"), "Occultiste");
    }

    #[test]
    fn test_canonicalize_class_diacritics_tolerance() {
        assert_eq!(canonicalize_class("Rodeur"), canonicalize_class("Rôdeur"));
        assert_eq!(canonicalize_class("Rodeur"), "Rôdeur");
    }

    #[test]
    fn test_canonicalize_class_miss_title_cases() {
        assert_eq!(canonicalize_class("lanceur de sorts"), "Lanceur De Sorts");
        assert_eq!(canonicalize_class("ARTIFICIER"), "Artificier");
    }

    #[test]
    fn test_canonicalize_class_never_empty_on_input() {
        assert!(!canonicalize_class("x").is_empty());
    }

    // -------------------------------------------------------------------------
    // Subclass canonicalization tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_canonicalize_subclass_aliases() {
        assert_eq!(
            canonicalize_subclass("Occultiste", "le fiélon"),
            "Protecteur Fiélon"
        );
        assert_eq!(
            canonicalize_subclass("Occultiste", "The Fiend"),
            "Protecteur Fiélon"
        );
        assert_eq!(
            canonicalize_subclass("Magicien", "école d'évocation"),
            "École d'Évocation"
        );
    }

    #[test]
    fn test_canonicalize_subclass_miss_title_cases() {
        assert_eq!(
            canonicalize_subclass("Roublard", "arnaqueur arcanique"),
            "Arnaqueur Arcanique"
        );
    }

    // -------------------------------------------------------------------------
    // Name variant tests
    // -------------------------------------------------------------------------

    #[test]
    fn test_variants_start_with_raw() {
        let variants = build_name_variants("Protecteur Fiélon");
        assert_eq!(variants[0], "Protecteur Fiélon");
    }

    #[test]
    fn test_variants_include_case_forms() {
        let variants = build_name_variants("Protecteur Fiélon");
        assert!(variants.contains(&"protecteur fiélon".to_string()));
        assert!(variants.contains(&"Protecteur fiélon".to_string()));
    }

    #[test]
    fn test_variants_cover_both_accent_spellings() {
        let accented = build_name_variants("Protecteur Fiélon");
        assert!(accented.contains(&"Protecteur Fielon".to_string()));

        let bare = build_name_variants("Protecteur Fielon");
        assert!(bare.contains(&"Protecteur Fiélon".to_string()));
    }

    #[test]
    fn test_variants_include_diacritics_stripped() {
        let variants = build_name_variants("École d'Évocation");
        assert!(variants.contains(&"Ecole d'Evocation".to_string()));
    }

    #[test]
    fn test_variants_strip_parentheticals() {
        let variants = build_name_variants("Voie du Totem (révisée)");
        assert!(variants.contains(&"Voie du Totem".to_string()));
    }

    #[test]
    fn test_variants_normalize_apostrophes() {
        let variants = build_name_variants("École d\u{2019}Évocation");
        assert!(variants.contains(&"École d'Évocation".to_string()));
    }

    #[test]
    fn test_variants_deduplicated_order_preserving() {
        let variants = build_name_variants("paladin");
        let mut seen = std::collections::HashSet::new();
        for v in &variants {
            assert!(seen.insert(v.clone()), "duplicate variant: {v}");
        }
        // All-lowercase raw input: raw and lowercase collapse to one entry.
        assert_eq!(variants[0], "paladin");
        assert_eq!(variants[1], "Paladin");
    }

    #[test]
    fn test_display_class_name() {
        assert_eq!(display_class_name("warlock"), "Occultiste");
    }
}
