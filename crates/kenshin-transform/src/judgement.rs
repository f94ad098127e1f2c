//! Grade-derived destination codes: judgement category, finding presence,
//! finding classification and sputum cytology.

use kenshin_model::{ConvertError, Converted, Grade};

use crate::severity::parse_grade;

/// Destination judgement category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Judgement {
    pub code: &'static str,
    pub name: &'static str,
}

const NEEDS_CARE: &str = "要医療（要精検・要治療）";

impl Judgement {
    pub const EMPTY: Judgement = Judgement { code: "", name: "" };

    pub fn from_grade(grade: Grade) -> Self {
        let (code, name) = match grade {
            Grade::Blank => ("", ""),
            Grade::A => ("1", "異常なし"),
            Grade::B => ("2", "軽度異常"),
            Grade::C => ("3", "要経過観察"),
            Grade::D | Grade::E | Grade::F => ("5", NEEDS_CARE),
            Grade::G => ("7", "治療中"),
            Grade::H => ("9", "判定不能または再検"),
        };
        Judgement { code, name }
    }
}

/// Judgement category of a grade token; empty on an invalid token.
pub fn judgement(field: &'static str, token: &str) -> Converted<Judgement> {
    match parse_grade(field, token) {
        Ok(grade) => Converted::ok(Judgement::from_grade(grade)),
        Err(error) => Converted::with_issue(Judgement::EMPTY, error),
    }
}

/// Judgement of the worse of two grade tokens.
pub fn worse_judgement(field: &'static str, first: &str, second: &str) -> Converted<Judgement> {
    let grades = parse_grade(field, first).and_then(|a| Ok((a, parse_grade(field, second)?)));
    match grades {
        Ok((a, b)) => Converted::ok(Judgement::from_grade(crate::severity::pick_worse(a, b))),
        Err(error) => Converted::with_issue(Judgement::EMPTY, error),
    }
}

/// Abnormal-finding presence: `1` abnormal (C-G), `2` none (A, B).
/// `H` has no presence code and is reported.
pub fn finding_presence(field: &'static str, token: &str) -> Converted<String> {
    let code = match Grade::parse(token) {
        Some(Grade::Blank) => "",
        Some(Grade::A | Grade::B) => "2",
        Some(Grade::C | Grade::D | Grade::E | Grade::F | Grade::G) => "1",
        Some(Grade::H) | None => {
            return Converted::with_issue(String::new(), ConvertError::unrecognized(field, token));
        }
    };
    Converted::ok(code.to_string())
}

/// Finding classification: `2` finding present (C-G), `1` none (blank, A,
/// B). Any other token, `H` included, is reported and echoed.
pub fn finding_class(field: &'static str, token: &str) -> Converted<String> {
    match Grade::parse(token) {
        Some(Grade::C | Grade::D | Grade::E | Grade::F | Grade::G) => Converted::ok("2".to_string()),
        Some(Grade::Blank | Grade::A | Grade::B) => Converted::ok("1".to_string()),
        Some(Grade::H) | None => {
            Converted::with_issue(token.to_string(), ConvertError::unrecognized(field, token))
        }
    }
}

/// [`finding_class`] that leaves a blank grade blank.
pub fn finding_class_if_graded(field: &'static str, token: &str) -> Converted<String> {
    if token.is_empty() {
        return Converted::ok(String::new());
    }
    finding_class(field, token)
}

/// `0` (examination targeted) when a value is present.
pub fn target_marker(value: &str) -> &'static str {
    if value.is_empty() { "" } else { "0" }
}

/// Sputum cytology result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct SputumResult {
    pub judgement: Judgement,
    /// Cytology class code of the destination schema.
    pub class: &'static str,
}

pub fn sputum_cytology(field: &'static str, token: &str) -> Converted<SputumResult> {
    let (grade, class) = match token {
        "" => (Grade::Blank, ""),
        "Ⅰ" => (Grade::A, "2"),
        "Ⅱ" => (Grade::B, "2"),
        "Ⅲ" => (Grade::D, "3"),
        "Ⅳ" => (Grade::D, "4"),
        "Ⅴ" => (Grade::D, "5"),
        "判定不能" => (Grade::H, "1"),
        _ => {
            return Converted::with_issue(
                SputumResult::default(),
                ConvertError::unrecognized(field, token),
            );
        }
    };
    Converted::ok(SputumResult {
        judgement: Judgement::from_grade(grade),
        class,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn judgement_table() {
        let cases = [
            ("", "", ""),
            ("Ａ", "1", "異常なし"),
            ("B", "2", "軽度異常"),
            ("Ｃ", "3", "要経過観察"),
            ("Ｄ", "5", NEEDS_CARE),
            ("E", "5", NEEDS_CARE),
            ("Ｆ", "5", NEEDS_CARE),
            ("Ｇ", "7", "治療中"),
            ("Ｈ", "9", "判定不能または再検"),
        ];
        for (token, code, name) in cases {
            let converted = judgement("総合判定", token);
            assert!(converted.is_clean(), "{token}");
            assert_eq!(converted.value(), &Judgement { code, name });
        }
    }

    #[test]
    fn invalid_judgement_is_empty() {
        let (value, issue) = judgement("心電図", "Ｚ").into_parts();
        assert_eq!(value, Judgement::EMPTY);
        assert!(issue.is_some());
    }

    #[test]
    fn presence_and_class_disagree_on_h() {
        assert_eq!(finding_presence("x", "Ｂ").value(), "2");
        assert_eq!(finding_presence("x", "Ｇ").value(), "1");
        assert!(finding_presence("x", "Ｈ").issue().is_some());
        assert_eq!(finding_class("x", "").value(), "1");
        assert_eq!(finding_class("x", "Ｅ").value(), "2");
        assert_eq!(finding_class("x", "Ｈ").value(), "Ｈ");
        assert_eq!(finding_class_if_graded("x", "").value(), "");
    }

    #[test]
    fn sputum_classes() {
        let result = sputum_cytology("喀痰", "Ⅳ");
        assert_eq!(result.value().judgement.code, "5");
        assert_eq!(result.value().class, "4");
        let result = sputum_cytology("喀痰", "判定不能");
        assert_eq!(result.value().judgement.code, "9");
        assert_eq!(result.value().class, "1");
        assert!(sputum_cytology("喀痰", "Ⅵ").issue().is_some());
    }
}
