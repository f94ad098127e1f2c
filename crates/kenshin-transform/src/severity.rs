//! Severity ranking and the merges built on it.

use kenshin_model::{ConvertError, Converted, Grade};

/// Parse a grade token, reporting it against `field` when it is outside
/// the closed alphabet.
pub fn parse_grade(field: &'static str, token: &str) -> Result<Grade, ConvertError> {
    Grade::parse(token).ok_or_else(|| ConvertError::unrecognized(field, token))
}

/// Severity rank of a grade token.
pub fn rank(field: &'static str, token: &str) -> Result<u8, ConvertError> {
    parse_grade(field, token).map(Grade::rank)
}

/// The worse of two grades; ties keep the first.
pub fn pick_worse(first: Grade, second: Grade) -> Grade {
    if first.rank() < second.rank() {
        second
    } else {
        first
    }
}

/// Which of two repeated measurements is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Measurement {
    First,
    Second,
}

/// Grades of one blood-pressure reading (systolic, diastolic).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReadingGrades {
    pub high: Grade,
    pub low: Grade,
}

impl ReadingGrades {
    fn is_blank(self) -> bool {
        self.high.is_blank() && self.low.is_blank()
    }
}

/// Choose the authoritative reading of two.
///
/// Without a second reading the first is used. Otherwise each axis whose
/// ranks differ votes for the reading that is *not* worse; the second
/// reading wins unless the first collects strictly more votes. A tie
/// (including identical grades) keeps the later reading.
pub fn authoritative_measurement(first: ReadingGrades, second: ReadingGrades) -> Measurement {
    if second.is_blank() {
        return Measurement::First;
    }
    let mut first_worse = 0;
    let mut second_worse = 0;
    for (a, b) in [(first.high, second.high), (first.low, second.low)] {
        match a.rank().cmp(&b.rank()) {
            std::cmp::Ordering::Greater => first_worse += 1,
            std::cmp::Ordering::Less => second_worse += 1,
            std::cmp::Ordering::Equal => {}
        }
    }
    if first_worse >= second_worse {
        Measurement::Second
    } else {
        Measurement::First
    }
}

fn reading_grades(field: &'static str, tokens: [&str; 2]) -> Result<ReadingGrades, ConvertError> {
    Ok(ReadingGrades {
        high: parse_grade(field, tokens[0])?,
        low: parse_grade(field, tokens[1])?,
    })
}

/// Token-level [`authoritative_measurement`]. Any invalid token reports an
/// issue and falls back to the first reading.
pub fn authoritative_measurement_tokens(
    field: &'static str,
    first: [&str; 2],
    second: [&str; 2],
) -> Converted<Measurement> {
    if second[0].is_empty() && second[1].is_empty() {
        return Converted::ok(Measurement::First);
    }
    let grades = reading_grades(field, first)
        .and_then(|a| Ok((a, reading_grades(field, second)?)));
    match grades {
        Ok((a, b)) => Converted::ok(authoritative_measurement(a, b)),
        Err(error) => Converted::with_issue(Measurement::First, error),
    }
}
