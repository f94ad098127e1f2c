//! Small derived fields: identifiers, vision, hearing, imaging method,
//! urine sediment, specimen remarks and presence flags.

use kenshin_model::{ConvertError, Converted};

use crate::judgement::finding_class;
use crate::text::join_all;
use crate::width::narrow_ascii;

const PERSONAL_ID_PREFIX: char = 'K';

/// Personal identifiers must start with `K`. The value is kept either way.
pub fn personal_id(field: &'static str, raw: &str) -> Converted<String> {
    if raw.is_empty() {
        return Converted::with_issue(String::new(), ConvertError::RequiredMissing { field });
    }
    if raw.starts_with(PERSONAL_ID_PREFIX) {
        Converted::ok(raw.to_string())
    } else {
        Converted::with_issue(
            raw.to_string(),
            ConvertError::MalformedIdentifier {
                field,
                raw: raw.to_string(),
            },
        )
    }
}

/// Visual acuity value and data attribute. A `↓` marker means "below the
/// value" and becomes attribute `1`.
pub fn acuity(raw: &str) -> (String, &'static str) {
    if raw.contains('↓') {
        (raw.replace('↓', ""), "1")
    } else {
        (raw.to_string(), "")
    }
}

/// Correction category: `3` (unknown means of correction) whenever any
/// corrected acuity was measured.
pub fn correction_category(corrected: [&str; 4]) -> &'static str {
    if corrected.iter().all(|value| value.is_empty()) {
        ""
    } else {
        "3"
    }
}

/// Hearing level in dB; `*` marks an unmeasured ear.
pub fn hearing_db(raw: &str) -> &str {
    match raw {
        "*" | "＊" => "",
        _ => raw,
    }
}

/// 4 kHz finding from the first of two grades that is present.
pub fn hearing_4k(field: &'static str, grades: [&str; 2]) -> Converted<String> {
    match grades.into_iter().find(|grade| !grade.is_empty()) {
        Some(grade) => finding_class(field, grade),
        None => Converted::ok(String::new()),
    }
}

/// Conversation-test finding, present only when a hearing remark exists.
pub fn hearing_conversation(field: &'static str, remark: &str, grade: &str) -> Converted<String> {
    if remark.is_empty() {
        return Converted::ok(String::new());
    }
    finding_class(field, grade)
}

/// Scheie classification rendered as `S:<s>/H:<h>`.
pub fn scheie(sclerosis: &str, hypertension: &str) -> String {
    if sclerosis.is_empty() && hypertension.is_empty() {
        return String::new();
    }
    format!(
        "S:{}/H:{}",
        narrow_ascii(sclerosis),
        narrow_ascii(hypertension)
    )
}

/// Imaging method: `3` digital (direct marker set) or `2` indirect.
pub fn imaging_method(indirect: &str, direct: &str) -> &'static str {
    if !direct.is_empty() {
        "3"
    } else if !indirect.is_empty() {
        "2"
    } else {
        ""
    }
}

/// Mammography views: `1` one direction, `2` two directions.
pub fn mammography_views(one_view: &str, two_views: &str) -> &'static str {
    if !one_view.is_empty() {
        "1"
    } else if !two_views.is_empty() {
        "2"
    } else {
        ""
    }
}

const BACTERIA: &str = "細菌";

fn is_bacteria(remark: &str) -> bool {
    matches!(remark, "細菌" | "ｻｲｷﾝ")
}

/// Split the three "other" sediment remarks into (bacteria, rest).
///
/// Only the first bacteria remark moves to its own column. Nothing is
/// emitted when the first remark is empty.
pub fn split_sediment(others: [&str; 3]) -> (String, String) {
    if others[0].is_empty() {
        return (String::new(), String::new());
    }
    let mut rest = others;
    let bacteria = match rest.iter().position(|remark| is_bacteria(remark)) {
        Some(index) => {
            rest[index] = "";
            BACTERIA.to_string()
        }
        None => String::new(),
    };
    (bacteria, join_all(rest))
}

/// Pregnancy code from the "pregnant" and "possibly pregnant" answers.
pub fn pregnancy(field: &'static str, pregnant: &str, suspected: &str) -> Converted<String> {
    let answers = [pregnant, suspected];
    if answers.contains(&"はい") {
        return Converted::ok("1".to_string());
    }
    if answers.contains(&"いいえ") || answers.iter().all(|answer| answer.is_empty()) {
        return Converted::ok(String::new());
    }
    let offending = answers
        .into_iter()
        .find(|answer| !answer.is_empty())
        .unwrap_or_default();
    Converted::with_issue(String::new(), ConvertError::unrecognized(field, offending))
}

/// Chyle grade from the specimen remarks.
pub fn chyle(remarks: [&str; 2]) -> &'static str {
    if remarks
        .iter()
        .any(|remark| matches!(*remark, "乳び血清" | "乳糜検体"))
    {
        "1"
    } else {
        ""
    }
}

/// Hemolysis grade from the specimen remarks.
pub fn hemolysis(remarks: [&str; 2]) -> &'static str {
    if remarks.contains(&"強溶血血清") {
        "2"
    } else if remarks
        .iter()
        .any(|remark| matches!(*remark, "溶血血清" | "溶血検体"))
    {
        "1"
    } else {
        ""
    }
}

/// `1` when there is something to note, `2` otherwise.
pub fn presence_flag(text: &str) -> &'static str {
    if text.is_empty() { "2" } else { "1" }
}

/// Subjective-symptom presence; `特になし` counts as none.
pub fn subjective_flag(text: &str) -> &'static str {
    if text == "特になし" { "2" } else { presence_flag(text) }
}

/// Objective-finding presence; `異常なし` counts as none.
pub fn objective_flag(text: &str) -> &'static str {
    if text == "異常なし" { "2" } else { presence_flag(text) }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn personal_id_prefix() {
        assert!(personal_id("個人ID", "K01234").is_clean());
        let (value, issue) = personal_id("個人ID", "01234").into_parts();
        assert_eq!(value, "01234");
        assert!(matches!(issue, Some(ConvertError::MalformedIdentifier { .. })));
        assert!(matches!(
            personal_id("個人ID", "").issue(),
            Some(ConvertError::RequiredMissing { .. })
        ));
    }

    #[test]
    fn acuity_marker_becomes_attribute() {
        assert_eq!(acuity("0.1↓"), ("0.1".to_string(), "1"));
        assert_eq!(acuity("1.2"), ("1.2".to_string(), ""));
        assert_eq!(correction_category(["", "", "", ""]), "");
        assert_eq!(correction_category(["", "0.8", "", ""]), "3");
    }

    #[test]
    fn hearing_fields() {
        assert_eq!(hearing_db("＊"), "");
        assert_eq!(hearing_db("30"), "30");
        assert_eq!(hearing_4k("聴力右4K", ["", "Ｃ"]).value(), "2");
        assert_eq!(hearing_4k("聴力右4K", ["Ａ", "Ｃ"]).value(), "1");
        assert_eq!(hearing_4k("聴力右4K", ["", ""]).value(), "");
        assert_eq!(hearing_conversation("聴力", "", "Ｃ").value(), "");
        assert_eq!(hearing_conversation("聴力", "会話法", "Ｃ").value(), "2");
    }

    #[test]
    fn scheie_narrows_digits() {
        assert_eq!(scheie("１", "０"), "S:1/H:0");
        assert_eq!(scheie("", "2"), "S:/H:2");
        assert_eq!(scheie("", ""), "");
    }

    #[test]
    fn imaging_prefers_digital() {
        assert_eq!(imaging_method("○", "○"), "3");
        assert_eq!(imaging_method("○", ""), "2");
        assert_eq!(imaging_method("", ""), "");
        assert_eq!(mammography_views("", "○"), "2");
    }

    #[test]
    fn sediment_moves_first_bacteria_remark() {
        assert_eq!(
            split_sediment(["硝子円柱", "ｻｲｷﾝ", "細菌"]),
            ("細菌".to_string(), "硝子円柱 細菌".to_string())
        );
        assert_eq!(
            split_sediment(["", "細菌", ""]),
            (String::new(), String::new())
        );
    }

    #[test]
    fn pregnancy_answers() {
        assert_eq!(pregnancy("妊娠", "いいえ", "はい").value(), "1");
        assert_eq!(pregnancy("妊娠", "いいえ", "").value(), "");
        assert!(pregnancy("妊娠", "", "").is_clean());
        let (value, issue) = pregnancy("妊娠", "不明", "").into_parts();
        assert_eq!(value, "");
        assert_eq!(issue, Some(ConvertError::unrecognized("妊娠", "不明")));
    }

    #[test]
    fn specimen_remarks() {
        assert_eq!(chyle(["", "乳糜検体"]), "1");
        assert_eq!(hemolysis(["溶血血清", "強溶血血清"]), "2");
        assert_eq!(hemolysis(["", "溶血検体"]), "1");
        assert_eq!(hemolysis(["", ""]), "");
    }

    #[test]
    fn symptom_flags() {
        assert_eq!(subjective_flag("特になし"), "2");
        assert_eq!(subjective_flag("頭痛"), "1");
        assert_eq!(objective_flag("異常なし"), "2");
        assert_eq!(objective_flag(""), "2");
        assert_eq!(presence_flag("高血圧"), "1");
    }
}
