//! Column descriptors: what each destination column is called, where its
//! value comes from, and which source field must not be empty.

use kenshin_model::{Converted, Field, Profile};
use kenshin_transform::clinical::{acuity, hearing_db};
use kenshin_transform::judgement::{finding_class_if_graded, finding_presence, target_marker};
use kenshin_transform::numeric::{TumorMarker, tumor_marker_sign, validate_numeric};
use kenshin_transform::text::{join_all, limit_legacy_bytes};
use kenshin_transform::{Vocabulary, judgement, worse_judgement};

use crate::context::RowContext;

/// A conversion that needs more than one source field.
pub type Derive = fn(&RowContext<'_>) -> Converted<String>;

/// Organization literals taken from the [`Profile`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Setting {
    FormatVersion,
    SubmissionTarget,
    DataCreator,
    CompletionFlag,
    GroupCode,
    FacilityName,
    FacilityNumber,
    Physician,
}

impl Setting {
    pub fn value(self, profile: &Profile) -> &str {
        match self {
            Setting::FormatVersion => &profile.format_version,
            Setting::SubmissionTarget => &profile.submission_target,
            Setting::DataCreator => &profile.data_creator,
            Setting::CompletionFlag => &profile.completion_flag,
            Setting::GroupCode => &profile.group_code,
            Setting::FacilityName => &profile.facility_name,
            Setting::FacilityNumber => &profile.facility_number,
            Setting::Physician => &profile.physician,
        }
    }
}

/// How a column's value is produced.
#[derive(Clone, Copy)]
pub enum Rule {
    Blank,
    /// Fixed text, e.g. a comma-position marker.
    Literal(&'static str),
    Setting(Setting),
    /// The run date as `YYYY/MM/DD`.
    RunDate,
    Copy(Field),
    Numeric(Field),
    Lookup(Field, &'static Vocabulary),
    JudgementCode(Field),
    JudgementName(Field),
    WorseJudgementCode(Field, Field),
    WorseJudgementName(Field, Field),
    /// Abnormal-finding presence of a grade.
    Presence(Field),
    /// Finding classification of a grade, blank when ungraded.
    FindingClass(Field),
    /// `0` when the field has a value.
    Target(Field),
    Acuity(Field),
    AcuityAttribute(Field),
    /// Hearing level; multiple fields are concatenated first.
    HearingDb(&'static [Field]),
    TumorSign(Field, TumorMarker),
    /// Fields space-joined without a budget.
    Joined(&'static [Field]),
    /// Fields space-joined and cut to a legacy-byte budget.
    Text {
        fields: &'static [Field],
        limit: usize,
        trim: bool,
    },
    Derived(Derive),
    /// Like [`Rule::Derived`], for the second column of a pair whose first
    /// column already reported the shared problem.
    Companion(Derive),
}

impl Rule {
    pub fn apply(&self, ctx: &RowContext<'_>) -> Converted<String> {
        match *self {
            Rule::Blank => Converted::ok(String::new()),
            Rule::Literal(text) => Converted::ok(text.to_string()),
            Rule::Setting(setting) => Converted::ok(setting.value(ctx.profile).to_string()),
            Rule::RunDate => Converted::ok(ctx.run_date.to_string()),
            Rule::Copy(field) => Converted::ok(ctx.get(field).to_string()),
            Rule::Numeric(field) => validate_numeric(field.label, ctx.get(field)),
            Rule::Lookup(field, vocabulary) => vocabulary.convert(field.label, ctx.get(field)),
            Rule::JudgementCode(field) => {
                judgement(field.label, ctx.get(field)).map(|j| j.code.to_string())
            }
            Rule::JudgementName(field) => {
                judgement(field.label, ctx.get(field)).map(|j| j.name.to_string())
            }
            Rule::WorseJudgementCode(a, b) => {
                worse_judgement(a.label, ctx.get(a), ctx.get(b)).map(|j| j.code.to_string())
            }
            Rule::WorseJudgementName(a, b) => {
                worse_judgement(a.label, ctx.get(a), ctx.get(b)).map(|j| j.name.to_string())
            }
            Rule::Presence(field) => finding_presence(field.label, ctx.get(field)),
            Rule::FindingClass(field) => finding_class_if_graded(field.label, ctx.get(field)),
            Rule::Target(field) => Converted::ok(target_marker(ctx.get(field)).to_string()),
            Rule::Acuity(field) => Converted::ok(acuity(ctx.get(field)).0),
            Rule::AcuityAttribute(field) => Converted::ok(acuity(ctx.get(field)).1.to_string()),
            Rule::HearingDb(fields) => {
                let joined: String = fields.iter().map(|field| ctx.get(*field)).collect();
                Converted::ok(hearing_db(&joined).to_string())
            }
            Rule::TumorSign(field, marker) => {
                let (value, issue) = validate_numeric(field.label, ctx.get(field)).into_parts();
                if issue.is_some() {
                    // Already reported by the value column.
                    Converted::ok(value)
                } else {
                    tumor_marker_sign(marker, &value)
                }
            }
            Rule::Joined(fields) => Converted::ok(join_all(fields.iter().map(|f| ctx.get(*f)))),
            Rule::Text {
                fields,
                limit,
                trim,
            } => {
                let parts = fields.iter().map(|field| {
                    let value = ctx.get(*field);
                    if trim { value.trim() } else { value }
                });
                Converted::ok(limit_legacy_bytes(&join_all(parts), limit))
            }
            Rule::Derived(derive) | Rule::Companion(derive) => derive(ctx),
        }
    }

    /// `false` for columns whose problems are reported by a sibling column.
    pub fn reports_issues(&self) -> bool {
        !matches!(
            self,
            Rule::JudgementName(_)
                | Rule::WorseJudgementName(..)
                | Rule::AcuityAttribute(_)
                | Rule::Companion(_)
        )
    }
}

/// Emptiness check applied to a source field after the column is built.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Check {
    None,
    Required(Field),
    /// Required except for records of the profile's exempt organization.
    RequiredUnlessExempt(Field),
}

/// One destination column.
#[derive(Clone, Copy)]
pub struct Column {
    pub title: &'static str,
    pub rule: Rule,
    pub check: Check,
}

impl Column {
    pub const fn new(title: &'static str, rule: Rule) -> Self {
        Self {
            title,
            rule,
            check: Check::None,
        }
    }

    pub const fn required(self, field: Field) -> Self {
        Self {
            check: Check::Required(field),
            ..self
        }
    }

    pub const fn required_unless_exempt(self, field: Field) -> Self {
        Self {
            check: Check::RequiredUnlessExempt(field),
            ..self
        }
    }

    /// Short description of the rule, for the `columns` listing.
    pub fn describe(&self) -> String {
        match &self.rule {
            Rule::Blank => String::new(),
            Rule::Literal(text) => format!("literal {text:?}"),
            Rule::Setting(setting) => format!("profile {setting:?}"),
            Rule::RunDate => "run date".to_string(),
            Rule::Copy(field) => format!("copy {}", source(*field)),
            Rule::Numeric(field) => format!("numeric {}", source(*field)),
            Rule::Lookup(field, vocabulary) => {
                format!("{} {}", vocabulary.name, source(*field))
            }
            Rule::JudgementCode(field) => format!("judgement code {}", source(*field)),
            Rule::JudgementName(field) => format!("judgement name {}", source(*field)),
            Rule::WorseJudgementCode(a, b) | Rule::WorseJudgementName(a, b) => {
                format!("worse judgement {} {}", source(*a), source(*b))
            }
            Rule::Presence(field) => format!("finding presence {}", source(*field)),
            Rule::FindingClass(field) => format!("finding class {}", source(*field)),
            Rule::Target(field) => format!("target {}", source(*field)),
            Rule::Acuity(field) => format!("acuity {}", source(*field)),
            Rule::AcuityAttribute(field) => format!("acuity attribute {}", source(*field)),
            Rule::HearingDb(fields) => format!("hearing dB {}", sources(fields)),
            Rule::TumorSign(field, marker) => {
                format!("{} sign {}", marker.label(), source(*field))
            }
            Rule::Joined(fields) => format!("join {}", sources(fields)),
            Rule::Text { fields, limit, .. } => {
                format!("text {} ({limit} bytes)", sources(fields))
            }
            Rule::Derived(_) | Rule::Companion(_) => "derived".to_string(),
        }
    }
}

fn source(field: Field) -> String {
    format!("#{} {}", field.index, field.label)
}

fn sources(fields: &[Field]) -> String {
    let indexes: Vec<String> = fields.iter().map(|field| format!("#{}", field.index)).collect();
    indexes.join(",")
}
