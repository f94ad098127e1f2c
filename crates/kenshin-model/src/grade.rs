//! Grade tokens and the two orderings defined over them.
//!
//! A grade is the single-letter clinical assessment attached to every
//! finding (`A` normal through `H` undeterminable). Two unrelated orders
//! are defined over the alphabet:
//!
//! - [`SEVERITY_RANK`] decides which of two assessments is worse. `G`
//!   (under treatment) ranks below `D`/`E`/`F` (needs further care).
//! - [`BUCKET_ORDER`] decides the order in which grouped comments are
//!   written into the overall remarks field.
//!
//! Both are used verbatim and must not be unified.

use std::fmt;

use serde::{Deserialize, Serialize};

/// A clinical grade token.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Grade {
    /// No assessment recorded.
    Blank,
    A,
    B,
    C,
    D,
    E,
    F,
    G,
    H,
}

/// Severity rank of every grade, used by pairwise merges.
pub const SEVERITY_RANK: [(Grade, u8); 9] = [
    (Grade::Blank, 0),
    (Grade::A, 1),
    (Grade::B, 2),
    (Grade::C, 3),
    (Grade::G, 4),
    (Grade::D, 5),
    (Grade::E, 6),
    (Grade::F, 7),
    (Grade::H, 9),
];

/// Order in which comment buckets are concatenated.
pub const BUCKET_ORDER: [Grade; 8] = [
    Grade::F,
    Grade::E,
    Grade::D,
    Grade::G,
    Grade::H,
    Grade::C,
    Grade::B,
    Grade::A,
];

impl Grade {
    /// Every grade, blank first.
    pub const ALL: [Grade; 9] = [
        Grade::Blank,
        Grade::A,
        Grade::B,
        Grade::C,
        Grade::D,
        Grade::E,
        Grade::F,
        Grade::G,
        Grade::H,
    ];

    /// Parse a grade token. Letters are accepted in half-width (`A`) and
    /// full-width (`Ａ`) form; the empty string is [`Grade::Blank`].
    pub fn parse(token: &str) -> Option<Self> {
        let grade = match token {
            "" => Grade::Blank,
            "A" | "Ａ" => Grade::A,
            "B" | "Ｂ" => Grade::B,
            "C" | "Ｃ" => Grade::C,
            "D" | "Ｄ" => Grade::D,
            "E" | "Ｅ" => Grade::E,
            "F" | "Ｆ" => Grade::F,
            "G" | "Ｇ" => Grade::G,
            "H" | "Ｈ" => Grade::H,
            _ => return None,
        };
        Some(grade)
    }

    /// Severity rank from [`SEVERITY_RANK`].
    pub fn rank(self) -> u8 {
        SEVERITY_RANK
            .iter()
            .find(|(grade, _)| *grade == self)
            .map_or(0, |(_, rank)| *rank)
    }

    /// Half-width letter, or the empty string for [`Grade::Blank`].
    pub fn letter(self) -> &'static str {
        match self {
            Grade::Blank => "",
            Grade::A => "A",
            Grade::B => "B",
            Grade::C => "C",
            Grade::D => "D",
            Grade::E => "E",
            Grade::F => "F",
            Grade::G => "G",
            Grade::H => "H",
        }
    }

    pub fn is_blank(self) -> bool {
        self == Grade::Blank
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.letter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn both_widths_parse_to_the_same_grade() {
        for (half, full) in [
            ("A", "Ａ"),
            ("B", "Ｂ"),
            ("C", "Ｃ"),
            ("D", "Ｄ"),
            ("E", "Ｅ"),
            ("F", "Ｆ"),
            ("G", "Ｇ"),
            ("H", "Ｈ"),
        ] {
            assert_eq!(Grade::parse(half), Grade::parse(full));
            assert!(Grade::parse(half).is_some());
        }
    }

    #[test]
    fn unknown_tokens_are_rejected() {
        assert_eq!(Grade::parse("Q"), None);
        assert_eq!(Grade::parse("a"), None);
        assert_eq!(Grade::parse(" A"), None);
        assert_eq!(Grade::parse("AB"), None);
    }

    #[test]
    fn rank_table_covers_every_grade() {
        let expected = [0, 1, 2, 3, 5, 6, 7, 4, 9];
        for (grade, rank) in Grade::ALL.iter().zip(expected) {
            assert_eq!(grade.rank(), rank, "rank of {grade:?}");
        }
    }

    #[test]
    fn under_treatment_ranks_below_needs_care() {
        assert!(Grade::G.rank() > Grade::C.rank());
        assert!(Grade::G.rank() < Grade::D.rank());
    }

    #[test]
    fn bucket_order_excludes_blank() {
        assert!(!BUCKET_ORDER.contains(&Grade::Blank));
        assert_eq!(BUCKET_ORDER.len(), Grade::ALL.len() - 1);
    }
}
