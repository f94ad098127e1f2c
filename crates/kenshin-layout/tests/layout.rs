//! Tests for the destination layout and whole-row conversion.

use chrono::NaiveDate;
use kenshin_layout::{COLUMN_COUNT, COLUMNS, RowBuilder, Rule, header};
use kenshin_model::{IssueCollector, Profile, SOURCE_WIDTH, SourceRecord, fields as f};

fn run_date() -> NaiveDate {
    NaiveDate::from_ymd_opt(2024, 4, 15).unwrap()
}

fn record(values: &[(usize, &str)]) -> SourceRecord {
    let mut fields = vec![String::new(); SOURCE_WIDTH];
    for (index, value) in values {
        fields[*index] = (*value).to_string();
    }
    SourceRecord::new(fields)
}

/// A complete, valid record for a 30-year-old on the regular checkup.
fn clean_values() -> Vec<(usize, &'static str)> {
    vec![
        (f::ORGANIZATION_CODE.index, "98009001"),
        (f::ORGANIZATION_NAME.index, "リコー"),
        (f::OFFICE_CODE.index, "0001"),
        (f::OFFICE_NAME.index, "本社"),
        (f::PERSONAL_ID.index, "K000123"),
        (f::NAME_KANJI.index, "山田 太郎"),
        (f::NAME_KANA.index, "ﾔﾏﾀﾞ ﾀﾛｳ"),
        (f::BIRTH_DATE.index, "S60/05/12"),
        (f::SEX.index, "男"),
        (f::AGE.index, "30"),
        (f::INSURER_NUMBER.index, "06139999"),
        (f::INSURANCE_SYMBOL.index, "12"),
        (f::INSURANCE_NUMBER.index, "345"),
        (f::COURSE_CODE.index, "98009001000021"),
        (f::COURSE_NAME.index, "リコー_定期健診"),
        (f::EXAM_DATE.index, "2024-04-01"),
        (f::RECEIPT_NUMBER.index, "20240401001"),
        (f::FACILITY.index, "所内"),
        (f::HEIGHT.index, "170.2"),
        (f::BP_FIRST_SYSTOLIC_GRADE.index, "Ａ"),
        (f::BP_FIRST_DIASTOLIC_GRADE.index, "Ｂ"),
        (f::BP_FIRST_SYSTOLIC.index, "118"),
        (f::BP_FIRST_DIASTOLIC.index, "76"),
        (f::OVERALL.grade.index, "Ｂ"),
        (f::OVERALL.comment.index, "経過観察"),
        (f::BLOOD_PRESSURE.grade.index, "Ｃ"),
        (f::BLOOD_PRESSURE.comment.index, "血圧高め"),
        (f::BLOOD_TYPE_ABO.index, "Ａ型"),
    ]
}

// =========================================================================
// Layout
// =========================================================================

#[test]
fn test_layout_has_fixed_width() {
    assert_eq!(COLUMNS.len(), COLUMN_COUNT);
    assert_eq!(header().len(), COLUMN_COUNT);
}

#[test]
fn test_position_markers() {
    for position in [131usize, 331, 382, 432, 540] {
        let column = &COLUMNS[position - 1];
        let expected = position.to_string();
        assert!(
            matches!(column.rule, Rule::Literal(text) if text == expected),
            "column {position}"
        );
    }
}

#[test]
fn test_header_titles() {
    let titles = header();
    assert_eq!(titles[0], "CSVフォーマットVer");
    assert_eq!(titles[11], "個人ID");
    assert_eq!(titles[24], "コースコード");
    assert_eq!(titles.last().copied(), Some("カンマ位置(540)"));
}

#[test]
fn test_every_source_field_is_in_range() {
    let mut record = vec![String::new(); SOURCE_WIDTH];
    record[SOURCE_WIDTH - 1] = "x".to_string();
    // Every column rule reads within the padded width; building a row from
    // an all-empty record must not panic.
    let mut sink = IssueCollector::new();
    let row = RowBuilder::new(&Profile::default(), run_date())
        .build(&SourceRecord::new(record), &mut sink);
    assert_eq!(row.len(), COLUMN_COUNT);
}

// =========================================================================
// Whole rows
// =========================================================================

#[test]
fn test_clean_record_has_no_issues() {
    let profile = Profile::default();
    let builder = RowBuilder::new(&profile, run_date());
    let mut sink = IssueCollector::new();
    let row = builder.build(&record(&clean_values()), &mut sink);

    assert!(sink.is_empty(), "{:?}", sink.issues());
    assert_eq!(row[3], "2024/04/15");
    assert_eq!(row[11], "K000123");
    assert_eq!(row[14], "1985/05/12");
    assert_eq!(row[15], "1");
    assert_eq!(row[24], "21");
    assert_eq!(row[26], "2024/04/01");
    assert_eq!(row[27], "1");
    assert_eq!(row[48], "2");
    assert_eq!(row[49], "軽度異常");
    assert_eq!(row[50], "血圧高め 経過観察");
    assert_eq!(row[131], "170.2");
    assert_eq!(row[164], "118");
    assert_eq!(row[165], "76");
    assert_eq!(row[280], "1");
    assert_eq!(row[539], "540");
}

#[test]
fn test_faulty_record_issues_in_column_order() {
    let mut values = clean_values();
    values.retain(|(index, _)| {
        ![
            f::PERSONAL_ID.index,
            f::BIRTH_DATE.index,
            f::SEX.index,
            f::COURSE_NAME.index,
        ]
        .contains(index)
    });
    values.extend([
        (f::PERSONAL_ID.index, "123"),
        (f::BIRTH_DATE.index, "S6O/05/12"),
        (f::SEX.index, "X"),
        (f::COURSE_NAME.index, "リコー定期"),
    ]);

    let profile = Profile::default();
    let mut sink = IssueCollector::new();
    let row = RowBuilder::new(&profile, run_date()).build(&record(&values), &mut sink);

    // Unrecognized sex and malformed dates keep the raw value.
    assert_eq!(row[14], "S6O/05/12");
    assert_eq!(row[15], "X");
    assert_eq!(row[24], "");
    assert_eq!(row[25], "");

    insta::assert_json_snapshot!(sink.issues(), @r#"
    [
      {
        "record": "20240401001 山田 太郎",
        "error": {
          "kind": "malformed_identifier",
          "field": "個人ID",
          "raw": "123"
        }
      },
      {
        "record": "20240401001 山田 太郎",
        "error": {
          "kind": "malformed_date",
          "field": "生年月日",
          "raw": "S6O/05/12"
        }
      },
      {
        "record": "20240401001 山田 太郎",
        "error": {
          "kind": "unrecognized_token",
          "field": "性別",
          "raw": "X"
        }
      },
      {
        "record": "20240401001 山田 太郎",
        "error": {
          "kind": "course_name_mismatch",
          "code": "98009001000021",
          "name": "リコー定期",
          "expected": "リコー_定期健診"
        }
      }
    ]
    "#);
}

#[test]
fn test_unknown_age_leaves_age_bound_course_unassigned() {
    let mut values = clean_values();
    values.retain(|(index, _)| *index != f::AGE.index);
    let mut sink = IssueCollector::new();
    let row = RowBuilder::new(&Profile::default(), run_date()).build(&record(&values), &mut sink);

    assert_eq!(row[24], "");
    let messages: Vec<String> = sink.issues().iter().map(|i| i.error.to_string()).collect();
    assert_eq!(
        messages,
        vec![
            r#"value for [年齢] is not numeric: """#.to_string(),
            "course 98009001000021 has no destination course for age (unknown)".to_string(),
        ]
    );
}
