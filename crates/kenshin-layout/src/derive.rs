//! Column values computed from several source fields.

use kenshin_model::fields::{self as f, FINDINGS, HISTORY};
use kenshin_model::{ConvertError, Converted};
use kenshin_transform::clinical::{
    self, correction_category, hearing_4k, hearing_conversation, imaging_method,
    mammography_views, objective_flag, presence_flag, scheie, split_sediment, subjective_flag,
};
use kenshin_transform::course::convert_course;
use kenshin_transform::date::{era_to_gregorian, exam_date};
use kenshin_transform::history::{HistoryEntry, HistorySummary, history_text, summarize};
use kenshin_transform::judgement::{Judgement, judgement, sputum_cytology};
use kenshin_transform::numeric::{glucose_columns, meal_timing, validate_numeric};
use kenshin_transform::overall_comment as aggregate_overall;
use kenshin_transform::severity::{Measurement, authoritative_measurement_tokens};
use kenshin_transform::text::{join_all, limit_legacy_bytes};

use crate::context::RowContext;

/// Legacy-byte budget of the examination, symptom and disease-name columns.
const SHORT_TEXT_LIMIT: usize = 100;
/// Legacy-byte budget of the specific-checkup text columns.
const CHECKUP_TEXT_LIMIT: usize = 256;
const CT_TEXT_LIMIT: usize = 240;

fn text(value: impl Into<String>) -> Converted<String> {
    Converted::ok(value.into())
}

// Identification

pub fn personal_id(ctx: &RowContext<'_>) -> Converted<String> {
    let raw = ctx.get(f::PERSONAL_ID);
    if ctx.is_exempt() {
        return text(raw);
    }
    clinical::personal_id(f::PERSONAL_ID.label, raw)
}

pub fn birth_date(ctx: &RowContext<'_>) -> Converted<String> {
    era_to_gregorian(f::BIRTH_DATE.label, ctx.get(f::BIRTH_DATE))
}

pub fn course_code(ctx: &RowContext<'_>) -> Converted<String> {
    convert_course(ctx.get(f::COURSE_CODE), ctx.get(f::COURSE_NAME), ctx.age)
        .map(|destination| destination.map_or_else(String::new, |d| d.code.to_string()))
}

pub fn course_name(ctx: &RowContext<'_>) -> Converted<String> {
    convert_course(ctx.get(f::COURSE_CODE), ctx.get(f::COURSE_NAME), ctx.age)
        .map(|destination| destination.map_or_else(String::new, |d| d.name.to_string()))
}

pub fn exam_day(ctx: &RowContext<'_>) -> Converted<String> {
    exam_date(f::EXAM_DATE.label, ctx.get(f::EXAM_DATE))
}

// Medical history

fn history_entries<'a>(ctx: &RowContext<'a>) -> [HistoryEntry<'a>; 10] {
    HISTORY.map(|slot| HistoryEntry {
        disease: ctx.get(slot.disease),
        age: ctx.get(slot.age),
        outcome: ctx.get(slot.outcome),
    })
}

fn history_summary(ctx: &RowContext<'_>) -> HistorySummary {
    summarize(&history_entries(ctx))
}

pub fn treatment_flag(ctx: &RowContext<'_>) -> Converted<String> {
    text(history_summary(ctx).treatment_flag())
}

pub fn treatment_names(ctx: &RowContext<'_>) -> Converted<String> {
    text(limit_legacy_bytes(&history_summary(ctx).treatment, SHORT_TEXT_LIMIT))
}

pub fn history_flag(ctx: &RowContext<'_>) -> Converted<String> {
    text(history_summary(ctx).history_flag())
}

pub fn history_names(ctx: &RowContext<'_>) -> Converted<String> {
    text(limit_legacy_bytes(&history_summary(ctx).history, SHORT_TEXT_LIMIT))
}

pub fn overall_comment(ctx: &RowContext<'_>) -> Converted<String> {
    aggregate_overall(
        FINDINGS
            .iter()
            .map(|slot| (ctx.get(slot.grade), ctx.get(slot.comment))),
    )
}

// Vision and hearing

pub fn acuity_correction(ctx: &RowContext<'_>) -> Converted<String> {
    let corrected = ctx.get_all([
        f::ACUITY_FAR_CORRECTED_RIGHT,
        f::ACUITY_FAR_CORRECTED_LEFT,
        f::ACUITY_NEAR_CORRECTED_RIGHT,
        f::ACUITY_NEAR_CORRECTED_LEFT,
    ]);
    text(correction_category(corrected))
}

pub fn hearing_4k_right(ctx: &RowContext<'_>) -> Converted<String> {
    let [first, _] = f::HEARING_4K_GRADE_RIGHT;
    hearing_4k(first.label, ctx.get_all(f::HEARING_4K_GRADE_RIGHT))
}

pub fn hearing_4k_left(ctx: &RowContext<'_>) -> Converted<String> {
    let [first, _] = f::HEARING_4K_GRADE_LEFT;
    hearing_4k(first.label, ctx.get_all(f::HEARING_4K_GRADE_LEFT))
}

pub fn hearing_by_conversation(ctx: &RowContext<'_>) -> Converted<String> {
    hearing_conversation(
        f::HEARING.label,
        ctx.get(f::HEARING_REMARK),
        ctx.get(f::HEARING.grade),
    )
}

// Blood pressure

fn reported_reading(ctx: &RowContext<'_>) -> Converted<Measurement> {
    authoritative_measurement_tokens(
        f::BLOOD_PRESSURE.label,
        ctx.get_all([f::BP_FIRST_SYSTOLIC_GRADE, f::BP_FIRST_DIASTOLIC_GRADE]),
        ctx.get_all([f::BP_SECOND_SYSTOLIC_GRADE, f::BP_SECOND_DIASTOLIC_GRADE]),
    )
}

pub fn reported_systolic(ctx: &RowContext<'_>) -> Converted<String> {
    reported_reading(ctx).map(|reading| {
        let field = match reading {
            Measurement::First => f::BP_FIRST_SYSTOLIC,
            Measurement::Second => f::BP_SECOND_SYSTOLIC,
        };
        ctx.get(field).to_string()
    })
}

pub fn reported_diastolic(ctx: &RowContext<'_>) -> Converted<String> {
    reported_reading(ctx).map(|reading| {
        let field = match reading {
            Measurement::First => f::BP_FIRST_DIASTOLIC,
            Measurement::Second => f::BP_SECOND_DIASTOLIC,
        };
        ctx.get(field).to_string()
    })
}

// Chest

pub fn chest_imaging(ctx: &RowContext<'_>) -> Converted<String> {
    text(imaging_method(
        ctx.get(f::CHEST_XRAY_INDIRECT),
        ctx.get(f::CHEST_XRAY_DIRECT),
    ))
}

fn ct_performed(ctx: &RowContext<'_>) -> bool {
    !ctx.get(f::CHEST_CT_PERFORMED).is_empty()
}

fn ct_judgement(ctx: &RowContext<'_>) -> Converted<Judgement> {
    if ct_performed(ctx) {
        judgement(f::CHEST_CT.label, ctx.get(f::CHEST_CT.grade))
    } else {
        Converted::ok(Judgement::EMPTY)
    }
}

pub fn ct_judgement_code(ctx: &RowContext<'_>) -> Converted<String> {
    ct_judgement(ctx).map(|j| j.code.to_string())
}

pub fn ct_judgement_name(ctx: &RowContext<'_>) -> Converted<String> {
    ct_judgement(ctx).map(|j| j.name.to_string())
}

pub fn ct_findings(ctx: &RowContext<'_>) -> Converted<String> {
    if !ct_performed(ctx) {
        return text("");
    }
    let parts = ctx.get_all(f::CHEST_CT_FINDINGS).map(str::trim);
    text(limit_legacy_bytes(&join_all(parts), CT_TEXT_LIMIT))
}

pub fn sputum_code(ctx: &RowContext<'_>) -> Converted<String> {
    sputum_cytology(f::SPUTUM_CYTOLOGY.label, ctx.get(f::SPUTUM_CYTOLOGY))
        .map(|result| result.judgement.code.to_string())
}

pub fn sputum_name(ctx: &RowContext<'_>) -> Converted<String> {
    sputum_cytology(f::SPUTUM_CYTOLOGY.label, ctx.get(f::SPUTUM_CYTOLOGY))
        .map(|result| result.judgement.name.to_string())
}

pub fn sputum_class(ctx: &RowContext<'_>) -> Converted<String> {
    sputum_cytology(f::SPUTUM_CYTOLOGY.label, ctx.get(f::SPUTUM_CYTOLOGY))
        .map(|result| result.class.to_string())
}

// Fundus

pub fn scheie_right(ctx: &RowContext<'_>) -> Converted<String> {
    let [sclerosis, hypertension] = ctx.get_all(f::FUNDUS_SCHEIE_RIGHT);
    text(scheie(sclerosis, hypertension))
}

pub fn scheie_left(ctx: &RowContext<'_>) -> Converted<String> {
    let [sclerosis, hypertension] = ctx.get_all(f::FUNDUS_SCHEIE_LEFT);
    text(scheie(sclerosis, hypertension))
}

// Urine and blood

pub fn sediment_bacteria(ctx: &RowContext<'_>) -> Converted<String> {
    text(split_sediment(ctx.get_all(f::SEDIMENT_OTHER)).0)
}

pub fn sediment_other(ctx: &RowContext<'_>) -> Converted<String> {
    text(split_sediment(ctx.get_all(f::SEDIMENT_OTHER)).1)
}

pub fn meal_timing_code(ctx: &RowContext<'_>) -> Converted<String> {
    meal_timing(
        f::HOURS_SINCE_MEAL.label,
        ctx.get(f::GLUCOSE),
        ctx.get(f::HOURS_SINCE_MEAL),
    )
}

fn glucose_split(ctx: &RowContext<'_>) -> Converted<(String, String)> {
    let timing = meal_timing_code(ctx).into_parts().0;
    validate_numeric(f::GLUCOSE.label, ctx.get(f::GLUCOSE))
        .map(|glucose| glucose_columns(&glucose, &timing))
}

pub fn fasting_glucose(ctx: &RowContext<'_>) -> Converted<String> {
    glucose_split(ctx).map(|(fasting, _)| fasting)
}

pub fn casual_glucose(ctx: &RowContext<'_>) -> Converted<String> {
    glucose_split(ctx).map(|(_, casual)| casual)
}

pub fn pregnancy(ctx: &RowContext<'_>) -> Converted<String> {
    clinical::pregnancy(
        f::PREGNANT.label,
        ctx.get(f::PREGNANT),
        ctx.get(f::PREGNANCY_SUSPECTED),
    )
}

pub fn chyle(ctx: &RowContext<'_>) -> Converted<String> {
    text(clinical::chyle(ctx.get_all(f::SPECIMEN_REMARKS)))
}

pub fn hemolysis(ctx: &RowContext<'_>) -> Converted<String> {
    text(clinical::hemolysis(ctx.get_all(f::SPECIMEN_REMARKS)))
}

// Gastric, breast and cervical

pub fn gastric_imaging(ctx: &RowContext<'_>) -> Converted<String> {
    text(imaging_method(
        ctx.get(f::GASTRIC_XRAY_INDIRECT),
        ctx.get(f::GASTRIC_XRAY_DIRECT),
    ))
}

pub fn mammography_direction(ctx: &RowContext<'_>) -> Converted<String> {
    text(mammography_views(
        ctx.get(f::MAMMOGRAPHY_ONE_VIEW),
        ctx.get(f::MAMMOGRAPHY_TWO_VIEWS),
    ))
}

// Specific health checkup

fn checkup_history(ctx: &RowContext<'_>) -> String {
    limit_legacy_bytes(&history_text(&history_entries(ctx)), CHECKUP_TEXT_LIMIT)
}

pub fn checkup_history_flag(ctx: &RowContext<'_>) -> Converted<String> {
    text(presence_flag(&checkup_history(ctx)))
}

pub fn checkup_history_text(ctx: &RowContext<'_>) -> Converted<String> {
    text(checkup_history(ctx))
}

fn symptoms(ctx: &RowContext<'_>) -> String {
    limit_legacy_bytes(&join_all(ctx.get_all(f::SYMPTOMS)), CHECKUP_TEXT_LIMIT)
}

pub fn symptoms_flag(ctx: &RowContext<'_>) -> Converted<String> {
    text(subjective_flag(&symptoms(ctx)))
}

pub fn symptoms_text(ctx: &RowContext<'_>) -> Converted<String> {
    text(symptoms(ctx))
}

fn exam_findings(ctx: &RowContext<'_>) -> String {
    limit_legacy_bytes(&join_all(ctx.get_all(f::EXAM_FINDINGS)), CHECKUP_TEXT_LIMIT)
}

pub fn exam_findings_flag(ctx: &RowContext<'_>) -> Converted<String> {
    text(objective_flag(&exam_findings(ctx)))
}

pub fn exam_findings_text(ctx: &RowContext<'_>) -> Converted<String> {
    text(exam_findings(ctx))
}

/// Record-level age check. The age itself feeds course classification.
pub fn age_issue(ctx: &RowContext<'_>) -> Option<ConvertError> {
    ctx.age
        .is_none()
        .then(|| ConvertError::malformed_numeric(f::AGE.label, ctx.get(f::AGE)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use kenshin_model::{Profile, SourceRecord};

    fn record(values: &[(usize, &str)]) -> SourceRecord {
        let mut fields = vec![String::new(); kenshin_model::SOURCE_WIDTH];
        for (index, value) in values {
            fields[*index] = (*value).to_string();
        }
        SourceRecord::new(fields)
    }

    fn with_ctx<T>(record: &SourceRecord, run: impl FnOnce(&RowContext<'_>) -> T) -> T {
        let profile = Profile::default();
        let ctx = RowContext {
            record,
            profile: &profile,
            run_date: "2024/05/01",
            age: kenshin_transform::numeric::parse_age(record.get(f::AGE)),
        };
        run(&ctx)
    }

    #[test]
    fn exempt_organization_skips_identifier_check() {
        let exempt = record(&[(0, "04019001"), (6, "12345")]);
        assert!(with_ctx(&exempt, personal_id).is_clean());
        let other = record(&[(0, "98009001"), (6, "12345")]);
        assert!(with_ctx(&other, personal_id).issue().is_some());
    }

    #[test]
    fn blood_pressure_reports_later_reading_on_tie() {
        let rec = record(&[
            (86, "Ｃ"),
            (87, "Ａ"),
            (88, "Ａ"),
            (89, "Ｃ"),
            (90, "150"),
            (91, "70"),
            (92, "120"),
            (93, "95"),
        ]);
        assert_eq!(with_ctx(&rec, reported_systolic).value(), "120");
        assert_eq!(with_ctx(&rec, reported_diastolic).value(), "95");
    }

    #[test]
    fn ct_columns_need_the_performed_marker() {
        let rec = record(&[(482, "Ｄ"), (109, " 結節 ")]);
        assert_eq!(with_ctx(&rec, ct_judgement_code).value(), "");
        assert_eq!(with_ctx(&rec, ct_findings).value(), "");

        let rec = record(&[(108, "○"), (482, "Ｄ"), (109, " 結節 "), (110, "石灰化")]);
        assert_eq!(with_ctx(&rec, ct_judgement_code).value(), "5");
        assert_eq!(with_ctx(&rec, ct_findings).value(), "結節 石灰化");
    }

    #[test]
    fn glucose_moves_to_casual_after_a_recent_meal() {
        let rec = record(&[(203, "140"), (178, "2")]);
        assert_eq!(with_ctx(&rec, meal_timing_code).value(), "4");
        assert_eq!(with_ctx(&rec, fasting_glucose).value(), "");
        assert_eq!(with_ctx(&rec, casual_glucose).value(), "140");
    }

    #[test]
    fn history_columns() {
        let rec = record(&[
            (30, "高血圧"),
            (31, "50"),
            (32, "内服治療中"),
            (33, "虫垂炎"),
            (35, "治癒"),
        ]);
        assert_eq!(with_ctx(&rec, treatment_flag).value(), "1");
        assert_eq!(with_ctx(&rec, treatment_names).value(), "高血圧");
        assert_eq!(with_ctx(&rec, history_names).value(), "虫垂炎");
        assert_eq!(
            with_ctx(&rec, checkup_history_text).value(),
            "高血圧 50才 内服治療中 虫垂炎 治癒"
        );
        assert_eq!(with_ctx(&rec, checkup_history_flag).value(), "1");
    }

    #[test]
    fn unreadable_age_is_reported_once_at_record_level() {
        let rec = record(&[(11, "四十")]);
        assert!(with_ctx(&rec, age_issue).is_some());
        let rec = record(&[(11, "")]);
        assert_eq!(
            with_ctx(&rec, age_issue),
            Some(ConvertError::malformed_numeric(f::AGE.label, ""))
        );
        let rec = record(&[(11, "42")]);
        assert!(with_ctx(&rec, age_issue).is_none());
    }
}
