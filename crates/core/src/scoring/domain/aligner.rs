/// One reference word paired with the transcript word at the same position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct AlignedPair<'a> {
    pub expected: &'a str,
    pub spoken: Option<&'a str>,
}

/// Pairs reference tokens with transcript tokens by position.
///
/// The output always has one pair per expected token. Transcript tokens
/// past the end of the reference are ignored. No re-alignment is attempted,
/// so one dropped or inserted word shifts every later comparison.
pub fn align<'a>(expected: &'a [String], spoken: &'a [String]) -> Vec<AlignedPair<'a>> {
    expected
        .iter()
        .enumerate()
        .map(|(idx, word)| AlignedPair {
            expected: word.as_str(),
            spoken: spoken.get(idx).map(String::as_str),
        })
        .collect()
}
