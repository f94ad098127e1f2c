//! Tests for course classification, severity merges and comment
//! aggregation working together.

use kenshin_model::{ConvertError, ErrorKind, Grade};
use kenshin_transform::course::{COURSES, classify, convert_course};
use kenshin_transform::severity::{
    Measurement, authoritative_measurement_tokens, parse_grade, pick_worse, rank,
};
use kenshin_transform::{OVERALL_COMMENT_LIMIT, aggregate_comments, legacy_byte_cost, overall_comment};

// =========================================================================
// Course classification
// =========================================================================

#[test]
fn test_three_distinct_course_errors() {
    let unknown = classify("99999999999999", "リコー_総合Ａ", Some(35)).unwrap_err();
    assert_eq!(unknown.kind(), ErrorKind::CourseCodeUnknown);

    let mismatch = classify("98009001000011", "リコー_総合Ｂ", Some(35)).unwrap_err();
    assert_eq!(mismatch.kind(), ErrorKind::CourseNameMismatch);

    let unregistered = classify("98009001000011", "リコー_総合Ａ", Some(36)).unwrap_err();
    assert_eq!(unregistered.kind(), ErrorKind::CourseAgeUnregistered);
}

#[test]
fn test_course_error_messages() {
    let messages: Vec<String> = [
        ("99999999999999", "リコー_総合Ａ", Some(35)),
        ("98009001000011", "リコー_総合Ｂ", Some(35)),
        ("98009001000011", "リコー_総合Ａ", Some(36)),
        ("98009001000021", "リコー_定期健診", None),
    ]
    .into_iter()
    .map(|(code, name, age)| classify(code, name, age).unwrap_err().to_string())
    .collect();

    insta::assert_snapshot!(messages.join("\n"), @r#"
    unknown course code "99999999999999"
    course name "リコー_総合Ｂ" does not match code 98009001000011 (expected "リコー_総合Ａ")
    course 98009001000011 has no destination course for age 36
    course 98009001000021 has no destination course for age (unknown)
    "#);
}

#[test]
fn test_mismatch_still_yields_empty_destination() {
    let (destination, issue) = convert_course("98009001000021", "リコー定期", Some(30)).into_parts();
    assert_eq!(destination, None);
    assert!(matches!(
        issue,
        Some(ConvertError::CourseNameMismatch { expected: "リコー_定期健診", .. })
    ));
}

#[test]
fn test_regular_checkup_age_boundary() {
    let code = "98009001000021";
    assert_eq!(classify(code, "リコー_定期健診", Some(34)).unwrap().code, "21");
    assert_eq!(
        classify(code, "リコー_定期健診", Some(35)).unwrap_err().kind(),
        ErrorKind::CourseAgeUnregistered
    );
}

#[test]
fn test_unregistered_courses_never_classify() {
    for course in COURSES.iter().filter(|course| course.brackets.is_empty()) {
        for age in [20, 35, 50] {
            assert!(classify(course.code, course.names[0], Some(age)).is_err());
        }
    }
}

#[test]
fn test_overseas_assignment_is_total_over_known_ages() {
    for age in 18..=80 {
        let destination = classify("98009001000018", "リコー_海外赴任時", Some(age)).unwrap();
        let expected = if age <= 35 { "41" } else { "42" };
        assert_eq!(destination.code, expected, "age {age}");
    }
}

// =========================================================================
// Severity
// =========================================================================

#[test]
fn test_rank_rejects_tokens_outside_alphabet() {
    assert_eq!(rank("血圧", "Ｇ").unwrap(), 4);
    assert_eq!(rank("血圧", "").unwrap(), 0);
    assert!(rank("血圧", "I").is_err());
}

#[test]
fn test_pick_worse_examples() {
    let worse = |a: &str, b: &str| {
        pick_worse(parse_grade("x", a).unwrap(), parse_grade("x", b).unwrap()).letter()
    };
    assert_eq!(worse("A", "D"), "D");
    assert_eq!(worse("Ｇ", "C"), "G");
    for grade in Grade::ALL {
        assert_eq!(worse(grade.letter(), grade.letter()), grade.letter());
    }
}

#[test]
fn test_blood_pressure_reading_choice() {
    // No repeat reading.
    let choice = authoritative_measurement_tokens("血圧", ["Ｄ", "Ｃ"], ["", ""]);
    assert_eq!(choice.value(), &Measurement::First);

    // Repeat reading better on both axes is reported.
    let choice = authoritative_measurement_tokens("血圧", ["Ｄ", "Ｃ"], ["Ｂ", "Ａ"]);
    assert_eq!(choice.value(), &Measurement::Second);

    // Repeat reading worse on both axes: first stands.
    let choice = authoritative_measurement_tokens("血圧", ["Ａ", "Ａ"], ["Ｃ", "Ｂ"]);
    assert_eq!(choice.value(), &Measurement::First);

    // Split decision goes to the later reading.
    let choice = authoritative_measurement_tokens("血圧", ["Ｃ", "Ａ"], ["Ａ", "Ｃ"]);
    assert_eq!(choice.value(), &Measurement::Second);

    let (choice, issue) = authoritative_measurement_tokens("血圧", ["Ｘ", "Ａ"], ["Ａ", "Ａ"]).into_parts();
    assert_eq!(choice, Measurement::First);
    assert!(issue.is_some());
}

// =========================================================================
// Aggregation
// =========================================================================

#[test]
fn test_aggregation_discards_partial_text() {
    let error = aggregate_comments([("F", "x"), ("Q", "bad"), ("A", "y")]).unwrap_err();
    assert_eq!(
        error,
        ConvertError::AggregationFatal {
            grade: "Q".to_string(),
            comment: "bad".to_string(),
        }
    );
}

#[test]
fn test_overall_comment_is_truncated() {
    let long = "高".repeat(1000);
    let text = overall_comment([("Ｃ", long.as_str()), ("Ａ", "問題なし")]).into_parts().0;
    assert_eq!(legacy_byte_cost(&text), OVERALL_COMMENT_LIMIT);
    assert!(!text.contains("問題なし"));
}
