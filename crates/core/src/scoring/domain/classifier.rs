use crate::shared::constants::SIMILAR_THRESHOLD;

use super::aligner::AlignedPair;
use super::similarity::similarity;
use super::word_judgment::{WordJudgment, WordStatus};

/// Maps a reference word and its paired transcript word to a status and
/// confidence percentage.
///
/// Evaluated in order: absent → `Missing`/0, exact match → `Correct`/100,
/// similarity strictly above [`SIMILAR_THRESHOLD`] → `Similar`, else `Wrong`.
pub fn classify(expected: &str, spoken: Option<&str>) -> (WordStatus, u8) {
    let Some(spoken) = spoken else {
        return (WordStatus::Missing, 0);
    };

    if expected == spoken {
        return (WordStatus::Correct, 100);
    }

    let score = similarity(expected, spoken);
    let confidence = to_percent(score);
    if score > SIMILAR_THRESHOLD {
        (WordStatus::Similar, confidence)
    } else {
        (WordStatus::Wrong, confidence)
    }
}

/// Builds the judgment for one aligned pair.
pub fn judge(pair: &AlignedPair<'_>) -> WordJudgment {
    let (status, confidence) = classify(pair.expected, pair.spoken);
    WordJudgment {
        expected_token: pair.expected.to_string(),
        spoken_token: pair.spoken.map(str::to_string),
        status,
        confidence,
    }
}

fn to_percent(score: f64) -> u8 {
    (score * 100.0).round().clamp(0.0, 100.0) as u8
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[test]
    fn test_absent_word_is_missing() {
        assert_eq!(classify("here", None), (WordStatus::Missing, 0));
    }

    #[test]
    fn test_exact_match_is_correct() {
        assert_eq!(classify("hello", Some("hello")), (WordStatus::Correct, 100));
    }

    #[rstest]
    #[case::one_letter_off_in_six("thanks", "thank", WordStatus::Similar, 83)]
    #[case::one_letter_off_in_nine("wonderful", "wonderfol", WordStatus::Similar, 89)]
    #[case::exactly_at_threshold_is_wrong("hello", "helo", WordStatus::Wrong, 80)]
    #[case::scenario_hello_halo("hello", "halo", WordStatus::Wrong, 60)]
    #[case::scenario_are_r("are", "r", WordStatus::Wrong, 33)]
    #[case::scenario_you_u("you", "u", WordStatus::Wrong, 33)]
    #[case::nothing_shared("cat", "dog", WordStatus::Wrong, 0)]
    fn test_similarity_bands(
        #[case] expected: &str,
        #[case] spoken: &str,
        #[case] status: WordStatus,
        #[case] confidence: u8,
    ) {
        assert_eq!(classify(expected, Some(spoken)), (status, confidence));
    }

    #[test]
    fn test_near_match_on_long_token_rounds_to_full_confidence() {
        let expected = "a".repeat(201);
        let spoken = format!("b{}", "a".repeat(200));
        // 1 - 1/201 rounds to 100 but the tokens differ
        assert_eq!(
            classify(&expected, Some(&spoken)),
            (WordStatus::Similar, 100)
        );
    }

    #[test]
    fn test_judge_copies_tokens() {
        let judgment = judge(&AlignedPair {
            expected: "morning",
            spoken: Some("mornin"),
        });
        assert_eq!(judgment.expected_token, "morning");
        assert_eq!(judgment.spoken_token.as_deref(), Some("mornin"));
        assert_eq!(judgment.status, WordStatus::Similar);
        assert_eq!(judgment.confidence, 86);
    }

    #[test]
    fn test_judge_missing_has_no_spoken_token() {
        let judgment = judge(&AlignedPair {
            expected: "here",
            spoken: None,
        });
        assert_eq!(judgment.spoken_token, None);
        assert_eq!(judgment.status, WordStatus::Missing);
        assert_eq!(judgment.confidence, 0);
    }
}
