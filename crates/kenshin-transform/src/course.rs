//! Course classification: source course code and name, cross-checked, plus
//! the patient's age, mapped to a destination course.

use std::fmt;

use kenshin_model::{ConvertError, Converted};

/// A destination course.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Destination {
    pub code: &'static str,
    pub name: &'static str,
}

const fn dest(code: &'static str, name: &'static str) -> Destination {
    Destination { code, name }
}

/// Age condition of one bracket.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AgeMatch {
    /// Any age, known or not.
    Any,
    AtMost(u32),
    AtLeast(u32),
    OneOf(&'static [u32]),
    /// At least the bound and not a multiple of five.
    AtLeastOffMilestone(u32),
}

impl AgeMatch {
    fn matches(self, age: Option<u32>) -> bool {
        match (self, age) {
            (AgeMatch::Any, _) => true,
            (_, None) => false,
            (AgeMatch::AtMost(limit), Some(age)) => age <= limit,
            (AgeMatch::AtLeast(limit), Some(age)) => age >= limit,
            (AgeMatch::OneOf(ages), Some(age)) => ages.contains(&age),
            (AgeMatch::AtLeastOffMilestone(limit), Some(age)) => age >= limit && age % 5 != 0,
        }
    }
}

impl fmt::Display for AgeMatch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            AgeMatch::Any => f.write_str("any age"),
            AgeMatch::AtMost(limit) => write!(f, "age <= {limit}"),
            AgeMatch::AtLeast(limit) => write!(f, "age >= {limit}"),
            AgeMatch::OneOf(ages) => {
                let ages: Vec<String> = ages.iter().map(ToString::to_string).collect();
                write!(f, "age in {{{}}}", ages.join(", "))
            }
            AgeMatch::AtLeastOffMilestone(limit) => {
                write!(f, "age >= {limit}, not a multiple of 5")
            }
        }
    }
}

/// One age bracket and the course it selects.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Bracket {
    pub age: AgeMatch,
    pub destination: Destination,
}

const fn bracket(age: AgeMatch, destination: Destination) -> Bracket {
    Bracket { age, destination }
}

/// A registered source course.
///
/// An empty bracket list means the course is known but has no destination
/// course; every record on it is reported as unregistered.
#[derive(Debug, Clone, Copy)]
pub struct Course {
    pub code: &'static str,
    /// Accepted spellings of the course name.
    pub names: &'static [&'static str],
    pub brackets: &'static [Bracket],
}

const MILESTONES: &[u32] = &[40, 45, 50, 55, 60, 65, 70];
const RETURN_MILESTONES: &[u32] = &[35, 40, 45, 50, 55, 60, 65, 70];
const REGULAR_YOUNG: Destination = dest("21", "定期健診(34歳以下)");

pub const COURSES: &[Course] = &[
    Course {
        code: "98009001000001",
        names: &["リコー_人間ドック"],
        brackets: &[],
    },
    Course {
        code: "98009001000002",
        names: &["リコー_ミニドック"],
        brackets: &[],
    },
    Course {
        code: "98009001000011",
        names: &["リコー_総合Ａ"],
        brackets: &[
            bracket(AgeMatch::OneOf(&[35]), dest("31", "総合健診A(35歳)")),
            bracket(AgeMatch::OneOf(MILESTONES), dest("32", "総合健診A(節目年齢)")),
        ],
    },
    Course {
        code: "98009001000012",
        names: &["リコー_総合Ｂ"],
        brackets: &[bracket(
            AgeMatch::AtLeastOffMilestone(36),
            dest("33", "総合健診B"),
        )],
    },
    Course {
        code: "98009001000013",
        names: &["リコー_事業主Ａ"],
        brackets: &[bracket(AgeMatch::AtMost(34), REGULAR_YOUNG)],
    },
    Course {
        code: "98009001000014",
        names: &["リコー_事業主Ｂ"],
        brackets: &[],
    },
    Course {
        code: "98009001000015",
        names: &["リコー_家族健診"],
        brackets: &[],
    },
    Course {
        code: "98009001000016",
        names: &["リコー_婦人科"],
        brackets: &[],
    },
    Course {
        code: "98009001000017",
        names: &["リコー_基本(ｽﾏｲﾙ)健診", "リコー_基本(ｽﾏｲﾙ）健診"],
        brackets: &[bracket(AgeMatch::Any, dest("60", "スマイル健診"))],
    },
    Course {
        code: "98009001000018",
        names: &["リコー_海外赴任時"],
        brackets: &[
            bracket(AgeMatch::AtMost(35), dest("41", "海外赴任時(35歳以下)")),
            bracket(AgeMatch::AtLeast(36), dest("42", "海外赴任時(36歳以上)")),
        ],
    },
    Course {
        code: "98009001000019",
        names: &["リコー_海外一時帰国"],
        brackets: &[
            bracket(AgeMatch::AtMost(34), dest("45", "海外一時帰国(34歳以下)")),
            bracket(
                AgeMatch::OneOf(RETURN_MILESTONES),
                dest("46", "海外一時帰国(節目年齢)"),
            ),
            bracket(
                AgeMatch::AtLeast(35),
                dest("47", "海外一時帰国(節目年齢以外)"),
            ),
        ],
    },
    Course {
        code: "98009001000020",
        names: &["リコー_海外完全帰国"],
        brackets: &[bracket(AgeMatch::Any, dest("49", "完全帰国時(全年齢)"))],
    },
    Course {
        code: "98009001000021",
        names: &["リコー_定期健診"],
        brackets: &[bracket(AgeMatch::AtMost(34), REGULAR_YOUNG)],
    },
    Course {
        code: "98009001000023",
        names: &["リコー_海外赴任時(被扶養配偶者)"],
        brackets: &[bracket(AgeMatch::Any, dest("51", "海外赴任時(全年齢)"))],
    },
    Course {
        code: "98009001000024",
        names: &["リコー_海外一時帰国（被扶養配偶者）"],
        brackets: &[bracket(AgeMatch::Any, dest("52", "海外一時帰国(全年齢)"))],
    },
    Course {
        code: "98009001000025",
        names: &["リコー_海外完全帰国（被扶養配偶者）"],
        brackets: &[bracket(AgeMatch::Any, dest("53", "完全帰国時(全年齢)"))],
    },
    Course {
        code: "04019001000001",
        names: &["リコー定期"],
        brackets: &[bracket(AgeMatch::Any, REGULAR_YOUNG)],
    },
    Course {
        code: "04019001000002",
        names: &["リコー入社"],
        brackets: &[bracket(AgeMatch::Any, dest("11", "雇入れ時健診"))],
    },
];

pub fn find_course(code: &str) -> Option<&'static Course> {
    COURSES.iter().find(|course| course.code == code)
}

/// Classify a source course.
///
/// Fails with a distinct error for an unknown code, a name that does not
/// belong to the code, and an age no bracket covers. `age` is `None` when
/// the source age could not be read; only age-independent brackets match
/// then.
pub fn classify(code: &str, name: &str, age: Option<u32>) -> Result<Destination, ConvertError> {
    let course = find_course(code).ok_or_else(|| ConvertError::CourseCodeUnknown {
        code: code.to_string(),
    })?;
    if !course.names.contains(&name) {
        return Err(ConvertError::CourseNameMismatch {
            code: code.to_string(),
            name: name.to_string(),
            expected: course.names.first().copied().unwrap_or_default(),
        });
    }
    course
        .brackets
        .iter()
        .find(|bracket| bracket.age.matches(age))
        .map(|bracket| bracket.destination)
        .ok_or_else(|| ConvertError::CourseAgeUnregistered {
            code: code.to_string(),
            age,
        })
}

/// [`classify`] as a field conversion; both outputs are empty on error.
pub fn convert_course(code: &str, name: &str, age: Option<u32>) -> Converted<Option<Destination>> {
    match classify(code, name, age) {
        Ok(destination) => Converted::ok(Some(destination)),
        Err(error) => Converted::with_issue(None, error),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn course_codes_are_unique() {
        for (i, course) in COURSES.iter().enumerate() {
            assert!(
                COURSES[i + 1..].iter().all(|other| other.code != course.code),
                "duplicate {}",
                course.code
            );
        }
    }

    #[test]
    fn milestone_brackets() {
        let a = |age| classify("98009001000011", "リコー_総合Ａ", Some(age));
        assert_eq!(a(35).unwrap().code, "31");
        assert_eq!(a(50).unwrap().code, "32");
        assert!(matches!(a(41), Err(ConvertError::CourseAgeUnregistered { .. })));

        let b = |age| classify("98009001000012", "リコー_総合Ｂ", Some(age));
        assert_eq!(b(41).unwrap().code, "33");
        assert!(b(45).is_err());
        assert!(b(35).is_err());
    }

    #[test]
    fn overseas_return_brackets() {
        let c = |age| classify("98009001000019", "リコー_海外一時帰国", Some(age)).unwrap().code;
        assert_eq!(c(30), "45");
        assert_eq!(c(35), "46");
        assert_eq!(c(70), "46");
        assert_eq!(c(36), "47");
    }

    #[test]
    fn smile_course_accepts_both_bracket_spellings() {
        for name in ["リコー_基本(ｽﾏｲﾙ)健診", "リコー_基本(ｽﾏｲﾙ）健診"] {
            assert_eq!(classify("98009001000017", name, None).unwrap().code, "60");
        }
    }

    #[test]
    fn unknown_age_only_matches_age_independent_courses() {
        assert!(classify("98009001000018", "リコー_海外赴任時", None).is_err());
        assert_eq!(
            classify("04019001000002", "リコー入社", None).unwrap(),
            dest("11", "雇入れ時健診")
        );
    }

    #[test]
    fn display_describes_brackets() {
        assert_eq!(AgeMatch::AtMost(34).to_string(), "age <= 34");
        assert_eq!(AgeMatch::OneOf(&[35, 40]).to_string(), "age in {35, 40}");
    }
}
