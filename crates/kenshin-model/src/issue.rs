use std::collections::BTreeMap;

use serde::Serialize;

use crate::error::{ConvertError, ErrorKind};

/// Destination for per-field problems, keyed by a human-readable record
/// identifier. Entries are only ever appended.
pub trait IssueSink {
    fn report(&mut self, record: &str, error: &ConvertError);
}

impl<S: IssueSink + ?Sized> IssueSink for &mut S {
    fn report(&mut self, record: &str, error: &ConvertError) {
        (**self).report(record, error);
    }
}

/// One problem found in one record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RecordIssue {
    pub record: String,
    pub error: ConvertError,
}

impl RecordIssue {
    pub fn kind(&self) -> ErrorKind {
        self.error.kind()
    }
}

/// In-memory sink that keeps every issue in arrival order.
#[derive(Debug, Clone, Default)]
pub struct IssueCollector {
    issues: Vec<RecordIssue>,
}

impl IssueCollector {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn issues(&self) -> &[RecordIssue] {
        &self.issues
    }

    pub fn len(&self) -> usize {
        self.issues.len()
    }

    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    pub fn kinds(&self) -> Vec<ErrorKind> {
        self.issues.iter().map(RecordIssue::kind).collect()
    }

    pub fn count_by_kind(&self) -> BTreeMap<ErrorKind, usize> {
        let mut counts = BTreeMap::new();
        for issue in &self.issues {
            *counts.entry(issue.kind()).or_insert(0) += 1;
        }
        counts
    }
}

impl IssueSink for IssueCollector {
    fn report(&mut self, record: &str, error: &ConvertError) {
        self.issues.push(RecordIssue {
            record: record.to_string(),
            error: error.clone(),
        });
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts_group_by_kind() {
        let mut sink = IssueCollector::new();
        sink.report("a", &ConvertError::RequiredMissing { field: "漢字氏名" });
        sink.report("a", &ConvertError::RequiredMissing { field: "カナ氏名" });
        sink.report("b", &ConvertError::unrecognized("性別", "?"));

        let counts = sink.count_by_kind();
        assert_eq!(counts.get(&ErrorKind::RequiredMissing), Some(&2));
        assert_eq!(counts.get(&ErrorKind::UnrecognizedToken), Some(&1));
        assert_eq!(sink.kinds().len(), 3);
    }

    #[test]
    fn issues_serialize_with_kind_tag() {
        let issue = RecordIssue {
            record: "20240101 山田 太郎".to_string(),
            error: ConvertError::unrecognized("血液型ABO", "Ｘ型"),
        };
        insta::assert_json_snapshot!(issue, @r#"
        {
          "record": "20240101 山田 太郎",
          "error": {
            "kind": "unrecognized_token",
            "field": "血液型ABO",
            "raw": "Ｘ型"
          }
        }
        "#);
    }
}
