//! Japanese era dates and exam dates.

use chrono::NaiveDate;
use kenshin_model::{ConvertError, Converted};

/// Offset added to a two-digit era year to obtain the Gregorian year.
pub const ERA_OFFSETS: [(char, i32); 5] = [
    ('M', 1867),
    ('T', 1911),
    ('S', 1925),
    ('H', 1988),
    ('R', 2018),
];

const ERA_DATE_LEN: usize = 9;

fn era_offset(era: char) -> Option<i32> {
    ERA_OFFSETS
        .iter()
        .find(|(letter, _)| *letter == era)
        .map(|(_, offset)| *offset)
}

fn two_digits(text: &str) -> Option<u32> {
    if text.len() == 2 && text.bytes().all(|b| b.is_ascii_digit()) {
        text.parse().ok()
    } else {
        None
    }
}

const ERA_DATE_SEPARATOR: u8 = b'/';

/// Parse `EYY/MM/DD` (era letter, era year, month, day) into a calendar date.
/// Dates that do not exist on the calendar are rejected.
pub fn parse_era_date(raw: &str) -> Option<NaiveDate> {
    if raw.len() != ERA_DATE_LEN || !raw.is_ascii() {
        return None;
    }
    let bytes = raw.as_bytes();
    if bytes[3] != ERA_DATE_SEPARATOR || bytes[6] != ERA_DATE_SEPARATOR {
        return None;
    }
    let offset = era_offset(char::from(bytes[0]))?;
    let year = two_digits(&raw[1..3])?;
    let month = two_digits(&raw[4..6])?;
    let day = two_digits(&raw[7..9])?;
    NaiveDate::from_ymd_opt(offset + i32::try_from(year).ok()?, month, day)
}

/// Convert an era date to `YYYY/MM/DD`. Anything unparseable is reported
/// and passed through unchanged; an empty value stays empty.
pub fn era_to_gregorian(field: &'static str, raw: &str) -> Converted<String> {
    if raw.is_empty() {
        return Converted::ok(String::new());
    }
    match parse_era_date(raw) {
        Some(date) => Converted::ok(date.format("%Y/%m/%d").to_string()),
        None => Converted::with_issue(raw.to_string(), ConvertError::malformed_date(field, raw)),
    }
}

/// Normalize an exam date to slash separators. A value with no separator
/// at all is reported and passed through.
pub fn exam_date(field: &'static str, raw: &str) -> Converted<String> {
    if raw.is_empty() {
        return Converted::ok(String::new());
    }
    let normalized = raw.replace('-', "/");
    if normalized.contains('/') {
        Converted::ok(normalized)
    } else {
        Converted::with_issue(raw.to_string(), ConvertError::malformed_date(field, raw))
    }
}

/// Run-date stamp used for creation and submission dates.
pub fn format_run_date(date: NaiveDate) -> String {
    date.format("%Y/%m/%d").to_string()
}
