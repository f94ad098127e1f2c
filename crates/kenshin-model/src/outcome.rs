use crate::error::ConvertError;
use crate::issue::IssueSink;

/// The result of converting one field: a value that is always usable,
/// plus the problem found while producing it, if any.
///
/// The value can only be taken out together with the issue
/// ([`into_parts`](Self::into_parts)) or after routing the issue to a
/// sink ([`report`](Self::report)).
#[must_use = "a converted value carries an issue that must be reported or inspected"]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Converted<T> {
    value: T,
    issue: Option<ConvertError>,
}

impl<T> Converted<T> {
    pub fn ok(value: T) -> Self {
        Self { value, issue: None }
    }

    /// A fallback value together with the problem that forced it.
    pub fn with_issue(value: T, issue: ConvertError) -> Self {
        Self {
            value,
            issue: Some(issue),
        }
    }

    pub fn value(&self) -> &T {
        &self.value
    }

    pub fn issue(&self) -> Option<&ConvertError> {
        self.issue.as_ref()
    }

    pub fn is_clean(&self) -> bool {
        self.issue.is_none()
    }

    pub fn into_parts(self) -> (T, Option<ConvertError>) {
        (self.value, self.issue)
    }

    /// Send the issue (if any) to `sink` under `record` and return the value.
    pub fn report(self, sink: &mut dyn IssueSink, record: &str) -> T {
        if let Some(issue) = &self.issue {
            sink.report(record, issue);
        }
        self.value
    }

    pub fn map<U>(self, f: impl FnOnce(T) -> U) -> Converted<U> {
        Converted {
            value: f(self.value),
            issue: self.issue,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::issue::IssueCollector;

    #[test]
    fn report_routes_issue_and_returns_fallback() {
        let mut sink = IssueCollector::default();
        let value = Converted::with_issue("abc".to_string(), ConvertError::malformed_numeric("AST", "abc"))
            .report(&mut sink, "1001 山田");
        assert_eq!(value, "abc");
        assert_eq!(sink.len(), 1);
        assert_eq!(sink.issues()[0].record, "1001 山田");
    }

    #[test]
    fn clean_value_reports_nothing() {
        let mut sink = IssueCollector::default();
        let value = Converted::ok(42).map(|n| n + 1).report(&mut sink, "x");
        assert_eq!(value, 43);
        assert!(sink.is_empty());
    }
}
