use serde::Serialize;

use super::aggregator::{aggregate, OverallStatus};
use super::aligner::align;
use super::classifier::judge;
use super::normalizer::normalize;
use super::scoring_error::ScoringError;
use super::word_judgment::WordJudgment;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct AnalysisResult {
    pub expected_text: String,
    pub user_text: String,
    pub accuracy: u8,
    pub overall_status: OverallStatus,
    /// One judgment per reference word, in reference order.
    pub judgments: Vec<WordJudgment>,
}

/// Scores a transcript against a reference phrase.
///
/// Returns [`ScoringError::InvalidInput`] when the reference has no words
/// after normalization. An empty transcript is valid and marks every
/// reference word as missing.
pub fn analyze(expected_text: &str, spoken_text: &str) -> Result<AnalysisResult, ScoringError> {
    let expected = normalize(expected_text);
    if expected.is_empty() {
        return Err(ScoringError::InvalidInput(
            "reference text contains no words".to_string(),
        ));
    }
    let spoken = normalize(spoken_text);
    log::debug!(
        "Analyzing {} reference words against {} spoken words",
        expected.len(),
        spoken.len()
    );

    let judgments: Vec<WordJudgment> = align(&expected, &spoken).iter().map(judge).collect();
    let (accuracy, overall_status) = aggregate(&judgments);
    log::debug!("Accuracy {accuracy}% ({overall_status})");

    Ok(AnalysisResult {
        expected_text: expected_text.to_string(),
        user_text: spoken_text.to_string(),
        accuracy,
        overall_status,
        judgments,
    })
}
