use std::collections::HashMap;

use serde::Serialize;

use crate::shared::constants::MAX_TIPS;

use super::word_judgment::{WordJudgment, WordStatus};

pub const GENERIC_ADVICE: &str = "Focus on pronouncing each sound clearly.";
pub const MISSING_WORD_ADVICE: &str =
    "Slow down a little and make sure every word is spoken clearly.";

/// Built-in phonetic hints, keyed by lowercased word.
const BUILTIN_HINTS: &[(&str, &str)] = &[
    ("hello", "Stress the second syllable: heh-LOH."),
    ("how", "Open into a rounded 'ow', like 'now': HOW."),
    ("are", "One smooth sound with a clear 'r' at the end: AR."),
    ("you", "Start with a 'y' glide before the long 'oo': YOO."),
    ("the", "Place the tongue tip between the teeth for a voiced 'th'."),
    ("this", "Voiced 'th': tongue between the teeth, then a short 'i'."),
    ("that", "Voiced 'th' followed by an open 'a', as in 'cat'."),
    ("thank", "Unvoiced 'th': blow air over the tongue between the teeth."),
    ("thanks", "Unvoiced 'th', then end crisply on 'ks'."),
    ("three", "Unvoiced 'th' straight into a rolled-back 'r': THREE."),
    ("think", "Unvoiced 'th', short 'i', and a nasal 'nk'."),
    ("through", "Unvoiced 'th' then 'roo'; the 'gh' is silent."),
    ("world", "Curl the tongue for 'r', then touch the ridge for 'l': WURLD."),
    ("water", "Stress the first syllable: WAW-ter."),
    ("very", "Touch the upper teeth to the lower lip for 'v', not 'b'."),
    ("right", "Start the 'r' with the tongue pulled back, not touching."),
    ("light", "Touch the tongue tip to the ridge behind the teeth for 'l'."),
    ("would", "The 'l' is silent: WOOD."),
    ("could", "The 'l' is silent: KOOD."),
    ("here", "Long 'ee' gliding into a soft 'r': HEER."),
    ("where", "Start with rounded lips for 'w': WAIR."),
    ("please", "Long 'ee' and end on a buzzing 'z': PLEEZ."),
    ("morning", "Stress the first syllable and keep the final 'g' light: MOR-ning."),
    ("good", "Short 'oo' as in 'book', not 'food'."),
    ("name", "Long 'a' sound: NAYM."),
    ("comfortable", "Three syllables are common: KUMF-ter-bul."),
    ("vegetable", "Usually three syllables: VEJ-tuh-bul."),
    ("restaurant", "Stress the first syllable: RES-tuh-ront."),
    ("schedule", "Start with 'sk' or 'sh' and stress the first syllable."),
    ("question", "End with 'chun': KWES-chun."),
    ("people", "Stress the first syllable: PEE-pul."),
    ("little", "Light taps in the middle: LIT-tul."),
];

/// Phonetic hint table: the built-in entries plus optional overrides.
///
/// Overrides are consulted first, so a loaded hint file can replace or
/// extend the built-in advice.
#[derive(Debug, Clone, Default)]
pub struct PhoneticHints {
    overrides: HashMap<String, String>,
}

impl PhoneticHints {
    pub fn builtin() -> Self {
        Self::default()
    }

    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        let overrides = overrides
            .into_iter()
            .map(|(word, hint)| (word.to_lowercase(), hint))
            .collect();
        Self { overrides }
    }

    pub fn override_count(&self) -> usize {
        self.overrides.len()
    }

    pub fn lookup(&self, word: &str) -> Option<&str> {
        let key = word.to_lowercase();
        if let Some(hint) = self.overrides.get(&key) {
            return Some(hint.as_str());
        }
        BUILTIN_HINTS
            .iter()
            .find(|(w, _)| *w == key)
            .map(|(_, hint)| *hint)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Tip {
    pub word: String,
    pub issue: String,
    pub advice: String,
}

/// Turns the worst-judged words into at most [`MAX_TIPS`] remediation hints.
#[derive(Debug, Clone, Default)]
pub struct TipGenerator {
    hints: PhoneticHints,
}

impl TipGenerator {
    pub fn new(hints: PhoneticHints) -> Self {
        Self { hints }
    }

    /// Tips in original word order, stopping after [`MAX_TIPS`].
    pub fn generate(&self, judgments: &[WordJudgment]) -> Vec<Tip> {
        let mut tips = Vec::with_capacity(MAX_TIPS);
        for judgment in judgments {
            if tips.len() == MAX_TIPS {
                break;
            }
            if let Some(tip) = self.tip_for(judgment) {
                tips.push(tip);
            }
        }
        tips
    }

    fn tip_for(&self, judgment: &WordJudgment) -> Option<Tip> {
        let word = &judgment.expected_token;
        match judgment.status {
            WordStatus::Correct => None,
            WordStatus::Wrong | WordStatus::Similar => {
                let heard = judgment.spoken_token.as_deref().unwrap_or_default();
                let advice = self.hints.lookup(word).unwrap_or(GENERIC_ADVICE);
                Some(Tip {
                    word: word.clone(),
                    issue: format!("Heard \"{heard}\" instead of \"{word}\""),
                    advice: advice.to_string(),
                })
            }
            WordStatus::Missing => Some(Tip {
                word: word.clone(),
                issue: format!("\"{word}\" was not detected"),
                advice: MISSING_WORD_ADVICE.to_string(),
            }),
        }
    }
}

/// Tips using only the built-in hint table.
pub fn generate_tips(judgments: &[WordJudgment]) -> Vec<Tip> {
    TipGenerator::default().generate(judgments)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn judgment(expected: &str, spoken: Option<&str>, status: WordStatus) -> WordJudgment {
        WordJudgment {
            expected_token: expected.to_string(),
            spoken_token: spoken.map(str::to_string),
            status,
            confidence: 0,
        }
    }

    #[test]
    fn test_correct_words_produce_no_tips() {
        let judgments = vec![
            judgment("hello", Some("hello"), WordStatus::Correct),
            judgment("world", Some("world"), WordStatus::Correct),
        ];
        assert!(generate_tips(&judgments).is_empty());
    }

    #[test]
    fn test_wrong_word_uses_phonetic_hint() {
        let tips = generate_tips(&[judgment("hello", Some("halo"), WordStatus::Wrong)]);
        assert_eq!(tips.len(), 1);
        assert_eq!(tips[0].word, "hello");
        assert!(tips[0].issue.contains("halo"));
        assert!(tips[0].issue.contains("hello"));
        assert_eq!(tips[0].advice, "Stress the second syllable: heh-LOH.");
    }

    #[test]
    fn test_similar_word_without_hint_uses_generic_advice() {
        let tips = generate_tips(&[judgment("zebra", Some("zebre"), WordStatus::Similar)]);
        assert_eq!(tips[0].advice, GENERIC_ADVICE);
    }

    #[test]
    fn test_missing_word_gets_pacing_advice() {
        let tips = generate_tips(&[judgment("here", None, WordStatus::Missing)]);
        assert_eq!(tips[0].issue, "\"here\" was not detected");
        assert_eq!(tips[0].advice, MISSING_WORD_ADVICE);
    }

    #[test]
    fn test_caps_at_three_in_word_order() {
        let judgments = vec![
            judgment("one", Some("won"), WordStatus::Wrong),
            judgment("two", Some("two"), WordStatus::Correct),
            judgment("three", Some("tree"), WordStatus::Similar),
            judgment("four", None, WordStatus::Missing),
            judgment("five", None, WordStatus::Missing),
        ];
        let tips = generate_tips(&judgments);
        let words: Vec<&str> = tips.iter().map(|t| t.word.as_str()).collect();
        assert_eq!(words, vec!["one", "three", "four"]);
    }

    #[test]
    fn test_does_not_reorder_by_severity() {
        let judgments = vec![
            judgment("thanks", Some("thank"), WordStatus::Similar),
            judgment("very", None, WordStatus::Missing),
        ];
        let tips = generate_tips(&judgments);
        assert_eq!(tips[0].word, "thanks");
        assert_eq!(tips[1].word, "very");
    }

    #[test]
    fn test_lookup_is_case_insensitive() {
        let hints = PhoneticHints::builtin();
        assert_eq!(hints.lookup("WATER"), hints.lookup("water"));
        assert!(hints.lookup("water").is_some());
    }

    #[test]
    fn test_overrides_take_precedence_over_builtin() {
        let mut overrides = HashMap::new();
        overrides.insert("Hello".to_string(), "Custom hello hint".to_string());
        overrides.insert("zebra".to_string(), "ZEE-bruh".to_string());
        let generator = TipGenerator::new(PhoneticHints::with_overrides(overrides));

        let tips = generator.generate(&[
            judgment("hello", Some("halo"), WordStatus::Wrong),
            judgment("zebra", Some("zebre"), WordStatus::Similar),
            judgment("world", Some("word"), WordStatus::Similar),
        ]);
        assert_eq!(tips[0].advice, "Custom hello hint");
        assert_eq!(tips[1].advice, "ZEE-bruh");
        assert!(tips[2].advice.contains("WURLD"));
    }

    #[test]
    fn test_builtin_keys_are_lowercase_and_unique() {
        let mut seen = std::collections::HashSet::new();
        for (word, _) in BUILTIN_HINTS {
            assert_eq!(*word, word.to_lowercase());
            assert!(seen.insert(*word), "duplicate hint for {word}");
        }
    }
}
