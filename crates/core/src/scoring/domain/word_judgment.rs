use serde::Serialize;

/// Outcome for one reference word.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum WordStatus {
    Correct,
    Similar,
    Wrong,
    Missing,
}

impl std::fmt::Display for WordStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            WordStatus::Correct => write!(f, "correct"),
            WordStatus::Similar => write!(f, "similar"),
            WordStatus::Wrong => write!(f, "wrong"),
            WordStatus::Missing => write!(f, "missing"),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct WordJudgment {
    pub expected_token: String,
    pub spoken_token: Option<String>,
    pub status: WordStatus,
    /// Percentage in `0..=100`.
    pub confidence: u8,
}
