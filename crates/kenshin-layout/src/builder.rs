//! Builds one destination row from one source record.

use chrono::NaiveDate;
use kenshin_model::{ConvertError, IssueSink, Profile, SourceRecord, fields};
use kenshin_transform::date::format_run_date;
use kenshin_transform::numeric::parse_age;
use tracing::trace;

use crate::column::{Check, Column};
use crate::columns::{COLUMNS, COLUMN_COUNT};
use crate::context::RowContext;
use crate::derive::age_issue;

/// Header row titles, in column order.
pub fn header() -> Vec<&'static str> {
    COLUMNS.iter().map(|column| column.title).collect()
}

/// Converts records against one profile and run date.
///
/// Problems never stop a row: each column's issue is handed to the sink
/// tagged with the record identifier and the column still gets a value.
#[derive(Debug, Clone)]
pub struct RowBuilder<'p> {
    profile: &'p Profile,
    run_date: String,
}

impl<'p> RowBuilder<'p> {
    pub fn new(profile: &'p Profile, run_date: NaiveDate) -> Self {
        Self {
            profile,
            run_date: format_run_date(run_date),
        }
    }

    pub fn build(&self, record: &SourceRecord, sink: &mut dyn IssueSink) -> Vec<String> {
        let id = record.identifier();
        if let Some(shortfall) = record.shortfall() {
            sink.report(&id, &shortfall);
        }

        let ctx = RowContext {
            record,
            profile: self.profile,
            run_date: &self.run_date,
            age: parse_age(record.get(fields::AGE)),
        };
        if let Some(issue) = age_issue(&ctx) {
            sink.report(&id, &issue);
        }

        let mut row = Vec::with_capacity(COLUMN_COUNT);
        for column in &COLUMNS {
            let converted = column.rule.apply(&ctx);
            let value = if column.rule.reports_issues() {
                converted.report(sink, &id)
            } else {
                converted.into_parts().0
            };
            if let Some(issue) = check(column, &ctx) {
                sink.report(&id, &issue);
            }
            row.push(value);
        }
        trace!(record = %id, columns = row.len(), "built row");
        row
    }
}

fn check(column: &Column, ctx: &RowContext<'_>) -> Option<ConvertError> {
    let field = match column.check {
        Check::None => return None,
        Check::Required(field) => field,
        Check::RequiredUnlessExempt(field) => {
            if ctx.is_exempt() {
                return None;
            }
            field
        }
    };
    ctx.get(field)
        .is_empty()
        .then_some(ConvertError::RequiredMissing { field: field.label })
}

/// Convenience wrapper around [`RowBuilder::build`].
pub fn build_row(
    record: &SourceRecord,
    profile: &Profile,
    run_date: NaiveDate,
    sink: &mut dyn IssueSink,
) -> Vec<String> {
    RowBuilder::new(profile, run_date).build(record, sink)
}
