//! Width normalization between half-width and full-width forms.

use std::borrow::Cow;

const HALFWIDTH_KATAKANA_START: u32 = 0xFF61;

/// Full-width counterparts of U+FF61..=U+FF9F, in code point order.
const FULLWIDTH_KATAKANA: [char; 63] = [
    '。', '「', '」', '、', '・', 'ヲ', 'ァ', 'ィ', 'ゥ', 'ェ', 'ォ', 'ャ', 'ュ', 'ョ', 'ッ', 'ー',
    'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', 'サ', 'シ', 'ス', 'セ', 'ソ', 'タ',
    'チ', 'ツ', 'テ', 'ト', 'ナ', 'ニ', 'ヌ', 'ネ', 'ノ', 'ハ', 'ヒ', 'フ', 'ヘ', 'ホ', 'マ', 'ミ',
    'ム', 'メ', 'モ', 'ヤ', 'ユ', 'ヨ', 'ラ', 'リ', 'ル', 'レ', 'ロ', 'ワ', 'ン', '゛', '゜',
];

const VOICED_MARK: char = 'ﾞ';
const SEMI_VOICED_MARK: char = 'ﾟ';

fn is_halfwidth_katakana(c: char) -> bool {
    ('\u{FF61}'..='\u{FF9F}').contains(&c)
}

fn widen(c: char) -> Option<char> {
    if !is_halfwidth_katakana(c) {
        return None;
    }
    let offset = (u32::from(c) - HALFWIDTH_KATAKANA_START) as usize;
    FULLWIDTH_KATAKANA.get(offset).copied()
}

/// Voiced form of a full-width base (`カ` + `ﾞ` = `ガ`).
fn voiced(base: char) -> Option<char> {
    match base {
        'ウ' => Some('ヴ'),
        'カ' | 'キ' | 'ク' | 'ケ' | 'コ' | 'サ' | 'シ' | 'ス' | 'セ' | 'ソ' | 'タ' | 'チ' | 'ツ'
        | 'テ' | 'ト' | 'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(u32::from(base) + 1),
        _ => None,
    }
}

/// Semi-voiced form of a full-width base (`ハ` + `ﾟ` = `パ`).
fn semi_voiced(base: char) -> Option<char> {
    match base {
        'ハ' | 'ヒ' | 'フ' | 'ヘ' | 'ホ' => char::from_u32(u32::from(base) + 2),
        _ => None,
    }
}

/// Replace half-width katakana with full-width katakana, folding a
/// following voiced or semi-voiced mark into its base character.
pub fn widen_katakana(text: &str) -> Cow<'_, str> {
    if !text.chars().any(is_halfwidth_katakana) {
        return Cow::Borrowed(text);
    }
    let mut out = String::with_capacity(text.len());
    let mut chars = text.chars().peekable();
    while let Some(c) = chars.next() {
        let Some(wide) = widen(c) else {
            out.push(c);
            continue;
        };
        let combined = match chars.peek() {
            Some(&VOICED_MARK) => voiced(wide),
            Some(&SEMI_VOICED_MARK) => semi_voiced(wide),
            _ => None,
        };
        if let Some(combined) = combined {
            chars.next();
            out.push(combined);
        } else {
            out.push(wide);
        }
    }
    Cow::Owned(out)
}

/// Replace full-width ASCII variants (U+FF01..=U+FF5E) with ASCII and the
/// ideographic space with a plain space.
pub fn narrow_ascii(text: &str) -> String {
    text.chars()
        .map(|c| match c {
            '\u{3000}' => ' ',
            '\u{FF01}'..='\u{FF5E}' => char::from_u32(u32::from(c) - 0xFEE0).unwrap_or(c),
            other => other,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn plain_text_is_borrowed() {
        assert!(matches!(widen_katakana("血圧 高値"), Cow::Borrowed(_)));
    }

    #[test]
    fn voiced_pairs_fold() {
        assert_eq!(widen_katakana("ｶﾞｷﾞｸﾞｹﾞｺﾞ"), "ガギグゲゴ");
        assert_eq!(widen_katakana("ﾀﾞﾁﾞﾂﾞﾃﾞﾄﾞ"), "ダヂヅデド");
        assert_eq!(widen_katakana("ﾊﾟﾋﾟﾌﾟﾍﾟﾎﾟ"), "パピプペポ");
        assert_eq!(widen_katakana("ｳﾞｧｲｵﾘﾝ"), "ヴァイオリン");
    }

    #[test]
    fn small_kana_and_marks_widen() {
        assert_eq!(widen_katakana("ｪｫｯｰ"), "ェォッー");
        assert_eq!(widen_katakana("ｱﾞ"), "ア゛");
        assert_eq!(widen_katakana("ﾟ"), "゜");
    }

    #[test]
    fn narrow_maps_fullwidth_ascii() {
        assert_eq!(narrow_ascii("Ｓ１　Ｈ２"), "S1 H2");
        assert_eq!(narrow_ascii("Ⅱａ"), "Ⅱa");
    }
}
