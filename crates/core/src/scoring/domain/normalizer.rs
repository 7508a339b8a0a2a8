use std::ops::RangeInclusive;

use unicode_normalization::char::is_combining_mark;
use unicode_normalization::UnicodeNormalization;

/// Combining diacritical marks left behind by canonical decomposition.
const COMBINING_MARKS: RangeInclusive<char> = '\u{0300}'..='\u{036F}';

/// Canonicalizes raw text into comparable word tokens.
///
/// Lower-cases, folds accented letters to their base letter, drops
/// punctuation and splits on whitespace. Combining marks outside the Latin
/// diacritics block (kana voicing, Indic vowel signs) are kept and recomposed.
/// Both the reference and the transcript go through this so comparison
/// ignores case, accents and punctuation.
pub fn normalize(text: &str) -> Vec<String> {
    let folded: String = text
        .to_lowercase()
        .nfd()
        .filter(|c| !COMBINING_MARKS.contains(c))
        .filter(|c| is_word_char(*c) || is_combining_mark(*c) || c.is_whitespace())
        .nfc()
        .collect();

    folded.split_whitespace().map(str::to_string).collect()
}

fn is_word_char(c: char) -> bool {
    c.is_alphanumeric() || c == '_'
}
