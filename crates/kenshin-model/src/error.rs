use std::fmt;
use std::path::PathBuf;

use serde::Serialize;
use thiserror::Error;

/// A per-field problem detected while converting one record.
///
/// These never abort the record: the converter still produces a usable
/// value and the error travels beside it in a
/// [`Converted`](crate::Converted).
#[derive(Debug, Clone, PartialEq, Eq, Error, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum ConvertError {
    #[error("required field [{field}] is empty")]
    RequiredMissing { field: &'static str },

    #[error("unrecognized value for [{field}]: {raw:?}")]
    UnrecognizedToken { field: &'static str, raw: String },

    #[error("value for [{field}] is not numeric: {raw:?}")]
    MalformedNumeric { field: &'static str, raw: String },

    #[error("invalid date for [{field}]: {raw:?}")]
    MalformedDate { field: &'static str, raw: String },

    #[error("invalid identifier for [{field}]: {raw:?}")]
    MalformedIdentifier { field: &'static str, raw: String },

    #[error("unknown course code {code:?}")]
    CourseCodeUnknown { code: String },

    #[error("course name {name:?} does not match code {code} (expected {expected:?})")]
    CourseNameMismatch {
        code: String,
        name: String,
        expected: &'static str,
    },

    #[error("course {code} has no destination course for age {}", display_age(.age))]
    CourseAgeUnregistered { code: String, age: Option<u32> },

    #[error("invalid grade {grade:?} in findings, comment: {comment:?}")]
    AggregationFatal { grade: String, comment: String },

    #[error("record has {found} fields, expected {expected}")]
    ShortRecord { found: usize, expected: usize },
}

fn display_age(age: &Option<u32>) -> String {
    age.map_or_else(|| "(unknown)".to_string(), |age| age.to_string())
}

impl ConvertError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            ConvertError::RequiredMissing { .. } => ErrorKind::RequiredMissing,
            ConvertError::UnrecognizedToken { .. } => ErrorKind::UnrecognizedToken,
            ConvertError::MalformedNumeric { .. } => ErrorKind::MalformedNumeric,
            ConvertError::MalformedDate { .. } => ErrorKind::MalformedDate,
            ConvertError::MalformedIdentifier { .. } => ErrorKind::MalformedIdentifier,
            ConvertError::CourseCodeUnknown { .. } => ErrorKind::CourseCodeUnknown,
            ConvertError::CourseNameMismatch { .. } => ErrorKind::CourseNameMismatch,
            ConvertError::CourseAgeUnregistered { .. } => ErrorKind::CourseAgeUnregistered,
            ConvertError::AggregationFatal { .. } => ErrorKind::AggregationFatal,
            ConvertError::ShortRecord { .. } => ErrorKind::ShortRecord,
        }
    }

    pub fn unrecognized(field: &'static str, raw: &str) -> Self {
        ConvertError::UnrecognizedToken {
            field,
            raw: raw.to_string(),
        }
    }

    pub fn malformed_numeric(field: &'static str, raw: &str) -> Self {
        ConvertError::MalformedNumeric {
            field,
            raw: raw.to_string(),
        }
    }

    pub fn malformed_date(field: &'static str, raw: &str) -> Self {
        ConvertError::MalformedDate {
            field,
            raw: raw.to_string(),
        }
    }
}

/// Coarse classification of [`ConvertError`], used for counting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorKind {
    RequiredMissing,
    UnrecognizedToken,
    MalformedNumeric,
    MalformedDate,
    MalformedIdentifier,
    CourseCodeUnknown,
    CourseNameMismatch,
    CourseAgeUnregistered,
    AggregationFatal,
    ShortRecord,
}

impl ErrorKind {
    pub const ALL: [ErrorKind; 10] = [
        ErrorKind::RequiredMissing,
        ErrorKind::UnrecognizedToken,
        ErrorKind::MalformedNumeric,
        ErrorKind::MalformedDate,
        ErrorKind::MalformedIdentifier,
        ErrorKind::CourseCodeUnknown,
        ErrorKind::CourseNameMismatch,
        ErrorKind::CourseAgeUnregistered,
        ErrorKind::AggregationFatal,
        ErrorKind::ShortRecord,
    ];

    pub fn as_str(self) -> &'static str {
        match self {
            ErrorKind::RequiredMissing => "required-missing",
            ErrorKind::UnrecognizedToken => "unrecognized-token",
            ErrorKind::MalformedNumeric => "malformed-numeric",
            ErrorKind::MalformedDate => "malformed-date",
            ErrorKind::MalformedIdentifier => "malformed-identifier",
            ErrorKind::CourseCodeUnknown => "course-code-unknown",
            ErrorKind::CourseNameMismatch => "course-name-mismatch",
            ErrorKind::CourseAgeUnregistered => "course-age-unregistered",
            ErrorKind::AggregationFatal => "aggregation-fatal",
            ErrorKind::ShortRecord => "short-record",
        }
    }
}

impl fmt::Display for ErrorKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Errors raised while loading a destination profile.
#[derive(Debug, Error)]
pub enum ProfileError {
    #[error("failed to read profile {path}: {source}")]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("failed to parse profile {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },
}

pub type Result<T> = std::result::Result<T, ProfileError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn messages_name_field_and_value() {
        let error = ConvertError::unrecognized("性別", "X");
        insta::assert_snapshot!(error.to_string(), @r#"unrecognized value for [性別]: "X""#);

        let error = ConvertError::CourseAgeUnregistered {
            code: "98009001000012".to_string(),
            age: None,
        };
        insta::assert_snapshot!(
            error.to_string(),
            @"course 98009001000012 has no destination course for age (unknown)"
        );
    }

    #[test]
    fn kind_matches_variant() {
        assert_eq!(
            ConvertError::RequiredMissing { field: "受診日" }.kind(),
            ErrorKind::RequiredMissing
        );
        assert_eq!(
            ConvertError::malformed_date("生年月日", "H3/4/1").kind(),
            ErrorKind::MalformedDate
        );
        assert_eq!(ErrorKind::AggregationFatal.to_string(), "aggregation-fatal");
    }
}
