//! Severity-grouped aggregation of finding comments.

use std::collections::BTreeMap;

use kenshin_model::{BUCKET_ORDER, ConvertError, Converted, Grade};

use crate::text::{join, limit_legacy_bytes};

/// Legacy-byte budget of the overall comment field.
pub const OVERALL_COMMENT_LIMIT: usize = 1200;

/// Group `(grade, comment)` pairs by grade and concatenate the groups in
/// [`BUCKET_ORDER`].
///
/// Blank grades are skipped. The first grade outside the alphabet aborts
/// the whole aggregation; the error carries only that pair.
pub fn aggregate_comments<'a, I>(pairs: I) -> Result<String, ConvertError>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    let mut buckets: BTreeMap<Grade, String> = BTreeMap::new();
    for (token, comment) in pairs {
        let Some(grade) = Grade::parse(token) else {
            return Err(ConvertError::AggregationFatal {
                grade: token.to_string(),
                comment: comment.to_string(),
            });
        };
        if grade.is_blank() {
            continue;
        }
        let bucket = buckets.entry(grade).or_default();
        *bucket = join(bucket, comment);
    }
    Ok(BUCKET_ORDER.iter().fold(String::new(), |acc, grade| {
        match buckets.get(grade) {
            Some(bucket) => join(&acc, bucket),
            None => acc,
        }
    }))
}

/// The overall comment field: aggregated, then truncated to
/// [`OVERALL_COMMENT_LIMIT`]. A fatal aggregation leaves the field empty.
pub fn overall_comment<'a, I>(pairs: I) -> Converted<String>
where
    I: IntoIterator<Item = (&'a str, &'a str)>,
{
    match aggregate_comments(pairs) {
        Ok(text) => Converted::ok(limit_legacy_bytes(&text, OVERALL_COMMENT_LIMIT)),
        Err(error) => {
            tracing::debug!(%error, "overall comment aggregation abandoned");
            Converted::with_issue(String::new(), error)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn buckets_follow_comment_order_not_rank() {
        let text = aggregate_comments([("F", "x"), ("A", "y"), ("D", "z")]).unwrap();
        assert_eq!(text, "x z y");

        let text = aggregate_comments([("Ｃ", "c"), ("Ｈ", "h"), ("Ｇ", "g"), ("Ｄ", "d")]).unwrap();
        assert_eq!(text, "d g h c");
    }

    #[test]
    fn blank_grades_and_empty_comments_are_skipped() {
        let text = aggregate_comments([("", "ignored"), ("Ｂ", ""), ("Ｂ", "軽度")]).unwrap();
        assert_eq!(text, "軽度");
        assert_eq!(aggregate_comments(std::iter::empty()).unwrap(), "");
    }

    #[test]
    fn members_keep_arrival_order_within_a_bucket() {
        let text = aggregate_comments([("Ｃ", "first"), ("Ａ", "a"), ("Ｃ", "second")]).unwrap();
        assert_eq!(text, "first second a");
    }

    #[test]
    fn invalid_grade_discards_everything() {
        let error = aggregate_comments([("Ａ", "ok"), ("Q", "bad comment"), ("Ｂ", "later")])
            .unwrap_err();
        assert_eq!(
            error,
            ConvertError::AggregationFatal {
                grade: "Q".to_string(),
                comment: "bad comment".to_string(),
            }
        );

        let (value, issue) = overall_comment([("Ａ", "ok"), ("Q", "bad")]).into_parts();
        assert_eq!(value, "");
        assert!(issue.is_some());
    }

    #[test]
    fn overall_comment_is_truncated() {
        let long = "あ".repeat(700);
        let text = overall_comment([("Ｃ", long.as_str())]).report(
            &mut kenshin_model::IssueCollector::new(),
            "r",
        );
        assert_eq!(text.chars().count(), 600);
    }
}
