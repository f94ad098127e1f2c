//! Joining optional fragments and truncating to a legacy-encoding budget.
//!
//! The destination file is written in a double-byte legacy encoding where
//! kana and kanji take two bytes and ASCII takes one. Budgets are enforced
//! without transcoding: after half-width katakana are widened, a character
//! that takes three bytes in UTF-8 is charged two, anything else its UTF-8
//! length.

use crate::width::widen_katakana;

/// Space-join two fragments, skipping empties.
pub fn join(a: &str, b: &str) -> String {
    match (a.is_empty(), b.is_empty()) {
        (_, true) => a.to_string(),
        (true, false) => b.to_string(),
        (false, false) => format!("{a} {b}"),
    }
}

/// Space-join every non-empty fragment, in order.
pub fn join_all<I, S>(parts: I) -> String
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut out = String::new();
    for part in parts {
        let part = part.as_ref();
        if part.is_empty() {
            continue;
        }
        if !out.is_empty() {
            out.push(' ');
        }
        out.push_str(part);
    }
    out
}

/// Legacy-encoding cost of one character.
pub fn legacy_char_cost(c: char) -> usize {
    match c.len_utf8() {
        3 => 2,
        n => n,
    }
}

/// Legacy-encoding cost of `text` as given (no widening).
pub fn legacy_byte_cost(text: &str) -> usize {
    text.chars().map(legacy_char_cost).sum()
}

/// Widen half-width katakana, then keep the longest character prefix whose
/// legacy cost does not exceed `limit`.
pub fn limit_legacy_bytes(text: &str, limit: usize) -> String {
    let widened = widen_katakana(text);
    let mut total = 0;
    let mut end = 0;
    for (index, c) in widened.char_indices() {
        total += legacy_char_cost(c);
        if total > limit {
            break;
        }
        end = index + c.len_utf8();
    }
    widened[..end].to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn join_skips_empties() {
        assert_eq!(join("", "b"), "b");
        assert_eq!(join("a", ""), "a");
        assert_eq!(join("", ""), "");
        assert_eq!(join("a", "b"), "a b");
    }

    #[test]
    fn join_all_matches_pairwise_join() {
        let parts = ["", "胃炎", "", "ポリープ", ""];
        let pairwise = parts.iter().fold(String::new(), |acc, part| join(&acc, part));
        assert_eq!(join_all(parts), pairwise);
        assert_eq!(join_all(parts), "胃炎 ポリープ");
    }

    #[test]
    fn double_byte_characters_cost_two() {
        assert_eq!(legacy_byte_cost("ABC"), 3);
        assert_eq!(legacy_byte_cost("胃炎"), 4);
        assert_eq!(legacy_byte_cost("ｱ"), 2);
    }

    #[test]
    fn truncation_stops_before_overflowing_character() {
        assert_eq!(limit_legacy_bytes("胃炎の疑い", 5), "胃炎");
        assert_eq!(limit_legacy_bytes("ab胃", 3), "ab");
        assert_eq!(limit_legacy_bytes("ab胃", 4), "ab胃");
        assert_eq!(limit_legacy_bytes("anything", 0), "");
    }

    #[test]
    fn truncation_widens_halfwidth_katakana_first() {
        assert_eq!(limit_legacy_bytes("ｶﾞﾝ", 10), "ガン");
        assert_eq!(limit_legacy_bytes("ｶﾞﾝ", 3), "ガ");
    }
}
