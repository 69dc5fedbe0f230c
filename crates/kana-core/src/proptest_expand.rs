//! Property-based tests for expansion over random rule tables.

use proptest::prelude::*;

use crate::expand::Expander;
use crate::rules::{RuleLine, RuleTable};
use crate::select::{minimal_subset, pick_representative};

const KANA: &[char] = &['あ', 'い', 'か', 'ん', 'っ', 'な', 'ア', 'ー'];

fn arb_kana(max: usize) -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(KANA.to_vec()), 0..max)
        .prop_map(|chars| chars.into_iter().collect())
}

fn arb_rule() -> impl Strategy<Value = RuleLine> {
    (
        "[a-z]{1,3}",
        arb_kana(3).prop_filter("fragment must be non-empty", |k| !k.is_empty()),
        prop::option::weighted(0.2, "[a-z]"),
    )
        .prop_map(|(romaji, kana, next_trigger)| RuleLine {
            romaji,
            kana: crate::unicode::katakana_to_hiragana(&kana),
            next_trigger,
        })
}

fn arb_table() -> impl Strategy<Value = RuleTable> {
    prop::collection::vec(arb_rule(), 0..12).prop_map(|lines| RuleTable::from_lines(lines))
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(256))]

    #[test]
    fn expansion_is_never_empty(table in arb_table(), kana in arb_kana(8)) {
        let expansion = Expander::new(&table).max_options(64).expand(&kana);
        prop_assert!(!expansion.options.is_empty());
        prop_assert!(expansion.options.len() <= 64);
    }

    #[test]
    fn expansion_is_deterministic(table in arb_table(), kana in arb_kana(8)) {
        let expander = Expander::new(&table).max_options(64);
        prop_assert_eq!(expander.expand(&kana), expander.expand(&kana));
    }

    #[test]
    fn minimal_subset_is_uniform_and_shortest(table in arb_table(), kana in arb_kana(8)) {
        let options = Expander::new(&table).max_options(64).expand(&kana).options;
        let shortest = minimal_subset(&options);
        prop_assert!(!shortest.is_empty());

        let len = shortest[0].chars().count();
        prop_assert!(shortest.iter().all(|s| s.chars().count() == len));
        prop_assert!(options.iter().all(|s| s.chars().count() >= len));
    }

    #[test]
    fn representative_is_a_member(table in arb_table(), kana in arb_kana(6), prefix in "[a-z]{0,2}") {
        let options = Expander::new(&table).max_options(64).expand(&kana).options;
        let picked = pick_representative(&options, &prefix);
        prop_assert!(picked.is_some_and(|p| options.contains(p)));
    }

    #[test]
    fn empty_table_passes_reading_through(kana in arb_kana(8)) {
        let options = Expander::new(&RuleTable::default()).expand(&kana).options;
        let folded = crate::unicode::katakana_to_hiragana(&kana);
        prop_assert_eq!(options.len(), 1);
        prop_assert_eq!(&options[0], &folded);
    }
}
