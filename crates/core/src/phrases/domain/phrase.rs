use std::str::FromStr;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Difficulty {
    Beginner,
    Intermediate,
    Advanced,
}

impl Difficulty {
    pub const ALL: &[Difficulty] = &[
        Difficulty::Beginner,
        Difficulty::Intermediate,
        Difficulty::Advanced,
    ];
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Difficulty::Beginner => write!(f, "beginner"),
            Difficulty::Intermediate => write!(f, "intermediate"),
            Difficulty::Advanced => write!(f, "advanced"),
        }
    }
}

impl FromStr for Difficulty {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Difficulty::ALL
            .iter()
            .copied()
            .find(|d| d.to_string().eq_ignore_ascii_case(s.trim()))
            .ok_or_else(|| {
                format!("Difficulty must be one of: beginner, intermediate, advanced, got '{s}'")
            })
    }
}

/// A reference phrase the learner is asked to read aloud.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Phrase {
    pub id: String,
    pub text: String,
    pub difficulty: Difficulty,
    /// Situation the phrase belongs to, e.g. "restaurant" or "travel".
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub environment: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub ipa: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub translation: Option<String>,
}

/// Selection criteria for phrases. Unset fields match everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PhraseFilter {
    pub difficulty: Option<Difficulty>,
    pub environment: Option<String>,
}

impl PhraseFilter {
    pub fn matches(&self, phrase: &Phrase) -> bool {
        if let Some(difficulty) = self.difficulty {
            if phrase.difficulty != difficulty {
                return false;
            }
        }
        match (&self.environment, &phrase.environment) {
            (None, _) => true,
            (Some(wanted), Some(actual)) => wanted.eq_ignore_ascii_case(actual),
            (Some(_), None) => false,
        }
    }
}
