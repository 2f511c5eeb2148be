//! Property tests for the section parser.

use proptest::prelude::*;

use crate::core::codex::parser::SectionParser;
use crate::core::codex::types::Origin;

proptest! {
    /// The parser is total: any input yields a section list, never a panic.
    #[test]
    fn parse_never_panics(input in ".{0,500}") {
        let _ = SectionParser::parse(&input, Origin::Class);
        let _ = SectionParser::parse(&input, Origin::Subclass);
    }

    /// Every emitted section carries a non-empty title or content.
    #[test]
    fn sections_are_never_empty(input in ".{0,500}") {
        for section in SectionParser::parse(&input, Origin::Class) {
            prop_assert!(
                !section.title.trim().is_empty() || !section.content.trim().is_empty()
            );
        }
    }

    /// A synthetic document with N leveled headings parses into exactly N
    /// sections whose levels match the embedded numbers, at either heading
    /// depth.
    #[test]
    fn synthetic_documents_round_trip(
        levels in proptest::collection::vec(1u32..20, 1..8),
        deep in proptest::bool::ANY,
    ) {
        let marker = if deep { "###" } else { "##" };
        let mut doc = String::new();
        for (i, level) in levels.iter().enumerate() {
            doc.push_str(&format!(
                "{marker} Aptitude {i} (niveau {level})\n\ncorps du texte {i}\n\n"
            ));
        }

        let sections = SectionParser::parse(&doc, Origin::Class);
        prop_assert_eq!(sections.len(), levels.len());
        for (section, level) in sections.iter().zip(&levels) {
            prop_assert_eq!(section.level, *level);
        }
    }
}
