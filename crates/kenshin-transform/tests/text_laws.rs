//! Property tests for joining and legacy-byte truncation.

use kenshin_transform::text::{join, join_all, legacy_byte_cost, limit_legacy_bytes};
use kenshin_transform::width::widen_katakana;
use proptest::prelude::*;

/// Mixed ASCII, half-width katakana (with voicing marks) and kanji.
fn mixed_text() -> impl Strategy<Value = String> {
    prop::collection::vec(
        prop_oneof![
            prop::char::range('a', 'z'),
            prop::char::range('0', '9'),
            prop::char::range('\u{FF66}', '\u{FF9F}'),
            prop::char::range('ア', 'ン'),
            prop::sample::select(vec!['胃', '炎', '高', '血', '圧', ' ', 'Ⅲ', '①']),
        ],
        0..40,
    )
    .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn truncation_respects_budget(text in mixed_text(), limit in 0usize..80) {
        let limited = limit_legacy_bytes(&text, limit);
        prop_assert!(legacy_byte_cost(&limited) <= limit);
    }

    #[test]
    fn truncation_is_prefix_of_widened_text(text in mixed_text(), limit in 0usize..80) {
        let limited = limit_legacy_bytes(&text, limit);
        prop_assert!(widen_katakana(&text).starts_with(limited.as_str()));
    }

    #[test]
    fn truncation_is_idempotent(text in mixed_text(), limit in 0usize..80) {
        let once = limit_legacy_bytes(&text, limit);
        prop_assert_eq!(limit_legacy_bytes(&once, limit), once);
    }

    #[test]
    fn generous_budget_keeps_everything(text in mixed_text()) {
        let widened = widen_katakana(&text).into_owned();
        prop_assert_eq!(limit_legacy_bytes(&text, legacy_byte_cost(&widened)), widened);
    }

    #[test]
    fn join_annihilates_empties(a in "[a-z]{0,5}") {
        prop_assert_eq!(join(&a, ""), a.clone());
        prop_assert_eq!(join("", &a), a);
    }

    #[test]
    fn join_is_associative(a in "[a-z]{0,4}", b in "[a-z]{0,4}", c in "[a-z]{0,4}") {
        prop_assert_eq!(join(&join(&a, &b), &c), join(&a, &join(&b, &c)));
        prop_assert_eq!(join_all([&a, &b, &c]), join(&join(&a, &b), &c));
    }
}

#[test]
fn ten_way_join_skips_gaps() {
    let parts = ["", "a", "", "", "b", "", "c", "", "", ""];
    assert_eq!(join_all(parts), "a b c");
}
