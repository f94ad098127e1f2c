//! Numeric laboratory values: validation, meal timing, glucose routing and
//! tumor-marker signs.

use kenshin_model::{ConvertError, Converted};

/// Comparator words that may trail a numeric result.
pub const COMPARATOR_SUFFIXES: [&str; 3] = ["未満", "以上", "以下"];

/// `true` for an optionally signed integer or decimal literal.
pub fn is_decimal_literal(text: &str) -> bool {
    let unsigned = text.strip_prefix(['+', '-']).unwrap_or(text);
    let (whole, fraction) = match unsigned.split_once('.') {
        Some((whole, fraction)) => (whole, Some(fraction)),
        None => (unsigned, None),
    };
    let digits = |part: &str| part.bytes().all(|b| b.is_ascii_digit());
    let has_digits = !whole.is_empty() || fraction.is_some_and(|f| !f.is_empty());
    has_digits && digits(whole) && fraction.is_none_or(digits)
}

fn parse_decimal(text: &str) -> Option<f64> {
    if is_decimal_literal(text) {
        text.parse().ok()
    } else {
        None
    }
}

/// Validate a numeric result.
///
/// Literals pass unchanged and a trailing comparator word is dropped.
/// Anything else is reported and passed through.
pub fn validate_numeric(field: &'static str, raw: &str) -> Converted<String> {
    if raw.is_empty() || is_decimal_literal(raw) {
        return Converted::ok(raw.to_string());
    }
    let bare = COMPARATOR_SUFFIXES
        .iter()
        .find_map(|suffix| raw.strip_suffix(suffix))
        .filter(|bare| is_decimal_literal(bare));
    match bare {
        Some(bare) => Converted::ok(bare.to_string()),
        None => Converted::with_issue(raw.to_string(), ConvertError::malformed_numeric(field, raw)),
    }
}

/// Patient age, when the source value is a whole number.
pub fn parse_age(raw: &str) -> Option<u32> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

/// Meal timing code: `2` ten hours or more, `3` 3.5 to 10 hours, `4` under
/// 3.5 hours. A glucose result without a recorded time counts as fasting.
pub fn meal_timing(field: &'static str, glucose: &str, hours: &str) -> Converted<String> {
    if hours.is_empty() {
        let code = if glucose.is_empty() { "" } else { "2" };
        return Converted::ok(code.to_string());
    }
    let Some(hours_value) = parse_decimal(hours) else {
        return Converted::with_issue(hours.to_string(), ConvertError::malformed_numeric(field, hours));
    };
    let code = if hours_value < 3.5 {
        "4"
    } else if hours_value < 10.0 {
        "3"
    } else {
        "2"
    };
    Converted::ok(code.to_string())
}

/// Glucose routed to the (fasting, casual) columns by meal timing code.
pub fn glucose_columns(glucose: &str, timing: &str) -> (String, String) {
    if glucose.is_empty() {
        return (String::new(), String::new());
    }
    match timing {
        "3" | "4" => (String::new(), glucose.to_string()),
        _ => (glucose.to_string(), String::new()),
    }
}

/// Tumor markers reported with a positive/negative sign.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TumorMarker {
    Psa,
    Ca125,
    Ca19_9,
    Cea,
    Afp,
    Cyfra,
}

impl TumorMarker {
    /// Values strictly above this are positive.
    pub fn threshold(self) -> f64 {
        match self {
            TumorMarker::Psa => 4.0,
            TumorMarker::Ca125 => 35.0,
            TumorMarker::Ca19_9 => 37.0,
            TumorMarker::Cea => 5.0,
            TumorMarker::Afp => 10.0,
            TumorMarker::Cyfra => 3.5,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            TumorMarker::Psa => "PSA",
            TumorMarker::Ca125 => "CA125",
            TumorMarker::Ca19_9 => "CA19-9",
            TumorMarker::Cea => "CEA",
            TumorMarker::Afp => "AFP",
            TumorMarker::Cyfra => "シフラ",
        }
    }
}

/// Sign of a validated marker value: `3` positive, `1` negative.
pub fn tumor_marker_sign(marker: TumorMarker, value: &str) -> Converted<String> {
    if value.is_empty() {
        return Converted::ok(String::new());
    }
    match parse_decimal(value) {
        Some(number) if number > marker.threshold() => Converted::ok("3".to_string()),
        Some(_) => Converted::ok("1".to_string()),
        None => Converted::with_issue(
            value.to_string(),
            ConvertError::malformed_numeric(marker.label(), value),
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn decimal_literals() {
        for text in ["0", "120", "4.25", "-1", "+3", ".5", "5."] {
            assert!(is_decimal_literal(text), "{text}");
        }
        for text in ["", ".", "-", "1.2.3", "1e5", "NaN", "１２", " 1"] {
            assert!(!is_decimal_literal(text), "{text}");
        }
    }

    #[test]
    fn comparator_suffix_is_stripped() {
        assert_eq!(validate_numeric("尿酸", "120未満").value(), "120");
        assert_eq!(validate_numeric("尿酸", "0.5以下").value(), "0.5");
        assert_eq!(validate_numeric("尿酸", "1000以上").value(), "1000");
        assert!(validate_numeric("尿酸", "120未満").is_clean());
    }

    #[test]
    fn text_is_reported_and_echoed() {
        let (value, issue) = validate_numeric("AST", "abc").into_parts();
        assert_eq!(value, "abc");
        assert_eq!(issue, Some(ConvertError::malformed_numeric("AST", "abc")));
        assert!(validate_numeric("AST", "未満").issue().is_some());
        assert!(validate_numeric("AST", "").is_clean());
    }

    #[test]
    fn meal_timing_brackets() {
        assert_eq!(meal_timing("食後時間", "", "").value(), "");
        assert_eq!(meal_timing("食後時間", "95", "").value(), "2");
        assert_eq!(meal_timing("食後時間", "95", "3").value(), "4");
        assert_eq!(meal_timing("食後時間", "95", "3.5").value(), "3");
        assert_eq!(meal_timing("食後時間", "95", "10").value(), "2");
        assert!(meal_timing("食後時間", "95", "朝").issue().is_some());
    }

    #[test]
    fn glucose_follows_timing() {
        assert_eq!(glucose_columns("95", "2"), ("95".into(), String::new()));
        assert_eq!(glucose_columns("95", "3"), (String::new(), "95".into()));
        assert_eq!(glucose_columns("95", ""), ("95".into(), String::new()));
        assert_eq!(glucose_columns("", "4"), (String::new(), String::new()));
    }

    #[test]
    fn marker_threshold_is_exclusive() {
        assert_eq!(tumor_marker_sign(TumorMarker::Psa, "4.0").value(), "1");
        assert_eq!(tumor_marker_sign(TumorMarker::Psa, "4.01").value(), "3");
        assert_eq!(tumor_marker_sign(TumorMarker::Cyfra, "3.6").value(), "3");
        assert_eq!(tumor_marker_sign(TumorMarker::Ca125, "").value(), "");
        assert!(tumor_marker_sign(TumorMarker::Cea, "多い").issue().is_some());
    }

    #[test]
    fn age_is_a_whole_number() {
        assert_eq!(parse_age("45"), Some(45));
        assert_eq!(parse_age(""), None);
        assert_eq!(parse_age("45歳"), None);
    }
}
