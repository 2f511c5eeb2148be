//! Property tests for section aggregation ordering.

use proptest::prelude::*;

use crate::core::codex::aggregator::merge;
use crate::core::codex::names::fold;
use crate::core::codex::types::{Origin, Section};

fn arbitrary_section() -> impl Strategy<Value = Section> {
    (0u32..10, "[a-zéà]{1,8}", proptest::bool::ANY).prop_map(|(level, title, subclass)| {
        let origin = if subclass {
            Origin::Subclass
        } else {
            Origin::Class
        };
        Section::new(level, title, "corps", origin).expect("non-empty section")
    })
}

proptest! {
    /// Merged output is sorted by (level, origin, folded title).
    #[test]
    fn merge_output_is_sorted(
        class_sections in proptest::collection::vec(arbitrary_section(), 0..12),
        subclass_sections in proptest::collection::vec(arbitrary_section(), 0..12),
    ) {
        let merged = merge(class_sections, vec![subclass_sections]);
        for pair in merged.windows(2) {
            let a = (pair[0].level, pair[0].origin, fold(&pair[0].title));
            let b = (pair[1].level, pair[1].origin, fold(&pair[1].title));
            prop_assert!(a <= b);
        }
    }

    /// Merging never gains or loses sections.
    #[test]
    fn merge_preserves_section_count(
        class_sections in proptest::collection::vec(arbitrary_section(), 0..12),
        subclass_sections in proptest::collection::vec(arbitrary_section(), 0..12),
    ) {
        let expected = class_sections.len() + subclass_sections.len();
        let merged = merge(class_sections, vec![subclass_sections]);
        prop_assert_eq!(merged.len(), expected);
    }
}
