//! The fixed vocabularies of the destination schema.

use crate::vocabulary::{Fallback, Term, Vocabulary};

const fn term(code: &'static str, tokens: &'static [&'static str]) -> Term {
    Term { code, tokens }
}

pub const SEX: Vocabulary = Vocabulary {
    name: "sex",
    terms: &[term("1", &["男"]), term("2", &["女"])],
    fallback: Fallback::Raw,
};

pub const FACILITY: Vocabulary = Vocabulary {
    name: "facility",
    terms: &[term("1", &["所内"]), term("2", &["巡回"])],
    fallback: Fallback::Raw,
};

/// Qualitative test result (`-` through `5+`).
pub const QUALITATIVE: Vocabulary = Vocabulary {
    name: "qualitative",
    terms: &[
        term("1", &["-", "－"]),
        term("2", &["+-"]),
        term("3", &["+", "＋"]),
        term("4", &["2+"]),
        term("5", &["3+"]),
        term("6", &["4+"]),
        term("7", &["5+"]),
    ],
    fallback: Fallback::Empty,
};

pub const SCOTT: Vocabulary = Vocabulary {
    name: "scott",
    terms: &[
        term("", &["０"]),
        term("Ⅰ(a)", &["Ⅰ", "Ⅰａ"]),
        term("Ⅰ(b)", &["Ⅰｂ"]),
        term("Ⅱ", &["Ⅱ"]),
        term("Ⅲ(a)", &["Ⅲ", "Ⅲａ"]),
        term("Ⅲ(b)", &["Ⅲｂ"]),
        term("Ⅳ", &["Ⅳ"]),
        term("Ⅴ(a)", &["Ⅴ", "Ⅴａ"]),
        term("Ⅴ(b)", &["Ⅴｂ"]),
        term("Ⅵ", &["Ⅵ"]),
    ],
    fallback: Fallback::Empty,
};

pub const KEITH_WAGENER: Vocabulary = Vocabulary {
    name: "keith-wagener",
    terms: &[
        term("０", &["０"]),
        term("Ⅰ", &["Ⅰ"]),
        term("Ⅱ", &["Ⅱ"]),
        term("Ⅱ(a)", &["Ⅱａ"]),
        term("Ⅱ(b)", &["Ⅱｂ"]),
        term("Ⅲ", &["Ⅲ"]),
        term("Ⅳ", &["Ⅳ"]),
    ],
    fallback: Fallback::Empty,
};

pub const BLOOD_TYPE_ABO: Vocabulary = Vocabulary {
    name: "abo",
    terms: &[
        term("1", &["Ａ型"]),
        term("2", &["Ｂ型"]),
        term("3", &["ＡＢ型"]),
        term("4", &["Ｏ型"]),
    ],
    fallback: Fallback::Empty,
};

pub const BLOOD_TYPE_RH: Vocabulary = Vocabulary {
    name: "rh",
    terms: &[term("1", &["（＋）"]), term("2", &["（－）"])],
    fallback: Fallback::Empty,
};

pub const MENSTRUATION: Vocabulary = Vocabulary {
    name: "menstruation",
    terms: &[term("1", &["はい"]), term("", &["いいえ"])],
    fallback: Fallback::Empty,
};

/// Gastric cancer risk (ABC) classification.
pub const GASTRIC_ABC: Vocabulary = Vocabulary {
    name: "gastric-abc",
    terms: &[
        term("1", &["A群"]),
        term("2", &["B群"]),
        term("3", &["C群"]),
        term("4", &["D群"]),
        term("6", &["E群"]),
    ],
    fallback: Fallback::Empty,
};

/// Cervical cytology, Bethesda system.
pub const BETHESDA: Vocabulary = Vocabulary {
    name: "bethesda",
    terms: &[
        term("1", &["NILM"]),
        term("2", &["ASC-US"]),
        term("3", &["ASC-H"]),
        term("4", &["LSIL"]),
        term("5", &["HSIL"]),
        term("6", &["SCC"]),
        term("7", &["AGC"]),
        term("8", &["AIS"]),
        term("9", &["Adeno.ca"]),
        term("10", &["Other"]),
    ],
    fallback: Fallback::Empty,
};

/// Cervical cytology, JSOG class.
pub const JSOG_CLASS: Vocabulary = Vocabulary {
    name: "jsog-class",
    terms: &[
        term("1", &["Ⅰ"]),
        term("2", &["Ⅱ"]),
        term("3", &["Ⅲａ"]),
        term("4", &["Ⅲｂ"]),
        term("5", &["Ⅳ"]),
        term("6", &["Ⅴ"]),
    ],
    fallback: Fallback::Empty,
};

pub const YES_NO: Vocabulary = Vocabulary {
    name: "yes-no",
    terms: &[term("1", &["はい"]), term("2", &["いいえ"])],
    fallback: Fallback::Empty,
};

pub const CHEWING: Vocabulary = Vocabulary {
    name: "chewing",
    terms: &[
        term("1", &["何でも"]),
        term("2", &["かみにくい"]),
        term("3", &["ほとんどかめない"]),
    ],
    fallback: Fallback::Empty,
};

pub const EATING_SPEED: Vocabulary = Vocabulary {
    name: "eating-speed",
    terms: &[
        term("1", &["速い"]),
        term("2", &["普通"]),
        term("3", &["遅い"]),
    ],
    fallback: Fallback::Empty,
};

pub const SNACKING: Vocabulary = Vocabulary {
    name: "snacking",
    terms: &[
        term("1", &["毎日"]),
        term("2", &["時々"]),
        term("3", &["ほとんど摂取しない"]),
    ],
    fallback: Fallback::Empty,
};

pub const DRINKING_FREQUENCY: Vocabulary = Vocabulary {
    name: "drinking-frequency",
    terms: &[
        term("1", &["毎日"]),
        term("2", &["時々"]),
        term("3", &["飲まない"]),
    ],
    fallback: Fallback::Empty,
};

pub const DRINKING_AMOUNT: Vocabulary = Vocabulary {
    name: "drinking-amount",
    terms: &[
        term("1", &["１合未満"]),
        term("2", &["１～２合未満"]),
        term("3", &["２～３合未満"]),
        term("4", &["３合以上"]),
    ],
    fallback: Fallback::Empty,
};

pub const LIFESTYLE_INTENTION: Vocabulary = Vocabulary {
    name: "lifestyle-intention",
    terms: &[
        term("1", &["しない"]),
        term("2", &["思う"]),
        term("3", &["始めた"]),
        term("4", &["６ヶ月経過"]),
        term("5", &["６ヶ月以上"]),
    ],
    fallback: Fallback::Empty,
};

pub const GUIDANCE_LEVEL: Vocabulary = Vocabulary {
    name: "guidance-level",
    terms: &[
        term("1", &["積極的支援レベル"]),
        term("2", &["動機づけ支援レベル"]),
        term("3", &["情報提供レベル"]),
        term("4", &["判定不能"]),
    ],
    fallback: Fallback::Empty,
};

pub const METABOLIC_SYNDROME: Vocabulary = Vocabulary {
    name: "metabolic-syndrome",
    terms: &[
        term("1", &["基準該当"]),
        term("2", &["予備群該当"]),
        term("3", &["非該当"]),
        term("4", &["判定不能"]),
    ],
    fallback: Fallback::Empty,
};

/// Every table.
pub const ALL: [&Vocabulary; 20] = [
    &SEX,
    &FACILITY,
    &QUALITATIVE,
    &SCOTT,
    &KEITH_WAGENER,
    &BLOOD_TYPE_ABO,
    &BLOOD_TYPE_RH,
    &MENSTRUATION,
    &GASTRIC_ABC,
    &BETHESDA,
    &JSOG_CLASS,
    &YES_NO,
    &CHEWING,
    &EATING_SPEED,
    &SNACKING,
    &DRINKING_FREQUENCY,
    &DRINKING_AMOUNT,
    &LIFESTYLE_INTENTION,
    &GUIDANCE_LEVEL,
    &METABOLIC_SYNDROME,
];

#[cfg(test)]
mod tests {
    use super::*;
    use kenshin_model::ConvertError;

    #[test]
    fn empty_token_maps_to_empty_code_everywhere() {
        for vocabulary in ALL {
            let converted = vocabulary.convert("field", "");
            assert!(converted.is_clean(), "{}", vocabulary.name);
            assert_eq!(converted.value(), "", "{}", vocabulary.name);
        }
    }

    #[test]
    fn every_spelling_reaches_its_own_code() {
        for vocabulary in ALL {
            for term in vocabulary.terms {
                for token in term.tokens {
                    assert_eq!(vocabulary.lookup(token), Some(term.code), "{} {token}", vocabulary.name);
                }
            }
        }
    }

    #[test]
    fn unknown_token_follows_the_table_fallback() {
        for vocabulary in ALL {
            let (value, issue) = vocabulary.convert("field", "??").into_parts();
            let expected = match vocabulary.fallback {
                Fallback::Raw => "??",
                Fallback::Empty => "",
            };
            assert_eq!(value, expected, "{}", vocabulary.name);
            assert_eq!(issue, Some(ConvertError::unrecognized("field", "??")));
        }
    }

    #[test]
    fn table_names_are_unique() {
        let mut names: Vec<&str> = ALL.iter().map(|vocabulary| vocabulary.name).collect();
        names.sort_unstable();
        names.dedup();
        assert_eq!(names.len(), ALL.len());
    }
}
