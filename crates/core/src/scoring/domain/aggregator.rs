use serde::Serialize;

use crate::shared::constants::{
    EXCELLENT_MIN_ACCURACY, GOOD_MIN_ACCURACY, NEEDS_PRACTICE_MIN_ACCURACY,
};

use super::word_judgment::{WordJudgment, WordStatus};

/// Qualitative band for an accuracy percentage.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum OverallStatus {
    Excellent,
    Good,
    NeedsPractice,
    Poor,
}

impl OverallStatus {
    pub fn from_accuracy(accuracy: u8) -> Self {
        if accuracy >= EXCELLENT_MIN_ACCURACY {
            OverallStatus::Excellent
        } else if accuracy >= GOOD_MIN_ACCURACY {
            OverallStatus::Good
        } else if accuracy >= NEEDS_PRACTICE_MIN_ACCURACY {
            OverallStatus::NeedsPractice
        } else {
            OverallStatus::Poor
        }
    }
}

impl std::fmt::Display for OverallStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OverallStatus::Excellent => write!(f, "Excellent"),
            OverallStatus::Good => write!(f, "Good"),
            OverallStatus::NeedsPractice => write!(f, "Needs practice"),
            OverallStatus::Poor => write!(f, "Poor"),
        }
    }
}

/// Percentage of judgments that are `Correct`, rounded to the nearest integer.
///
/// An empty slice yields 0.
pub fn accuracy(judgments: &[WordJudgment]) -> u8 {
    if judgments.is_empty() {
        return 0;
    }
    let correct = judgments
        .iter()
        .filter(|j| j.status == WordStatus::Correct)
        .count();
    (100.0 * correct as f64 / judgments.len() as f64).round() as u8
}

pub fn aggregate(judgments: &[WordJudgment]) -> (u8, OverallStatus) {
    let accuracy = accuracy(judgments);
    (accuracy, OverallStatus::from_accuracy(accuracy))
}
