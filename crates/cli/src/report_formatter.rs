use std::fmt::Write;

use pronunciation_core::phrases::domain::phrase::Phrase;
use pronunciation_core::pipeline::score_pronunciation_use_case::PronunciationReport;

/// Human-readable rendering of a pronunciation report.
pub fn format_report(report: &PronunciationReport) -> String {
    let mut out = String::new();
    let analysis = &report.analysis;

    match &report.phrase {
        Some(phrase) => {
            let _ = writeln!(out, "Phrase {} ({}): {}", phrase.id, phrase.difficulty, phrase.text);
            if let Some(ipa) = &phrase.ipa {
                let _ = writeln!(out, "  IPA: /{ipa}/");
            }
        }
        None => {
            let _ = writeln!(out, "Expected: {}", analysis.expected_text);
        }
    }
    let _ = writeln!(out, "Heard:    {}", analysis.user_text);
    if let Some(confidence) = report.transcription_confidence {
        let _ = writeln!(out, "Transcription confidence: {:.0}%", confidence * 100.0);
    }
    let _ = writeln!(
        out,
        "Accuracy: {}% ({})",
        analysis.accuracy, analysis.overall_status
    );

    let _ = writeln!(out);
    let width = analysis
        .judgments
        .iter()
        .map(|j| j.expected_token.chars().count())
        .max()
        .unwrap_or(0);
    for j in &analysis.judgments {
        let heard = j.spoken_token.as_deref().unwrap_or("-");
        let _ = writeln!(
            out,
            "  {:width$}  {:8} {:>3}%  {heard}",
            j.expected_token,
            j.status.to_string(),
            j.confidence
        );
    }

    if !report.tips.is_empty() {
        let _ = writeln!(out);
        let _ = writeln!(out, "Tips:");
        for tip in &report.tips {
            let _ = writeln!(out, "  - {}: {}. {}", tip.word, tip.issue, tip.advice);
        }
    }

    out
}

pub fn format_phrases(phrases: &[Phrase]) -> String {
    if phrases.is_empty() {
        return "No phrases match the given filters.\n".to_string();
    }
    let mut out = String::new();
    for phrase in phrases {
        let environment = phrase.environment.as_deref().unwrap_or("general");
        let _ = writeln!(
            out,
            "{:12} {:12} {:10} {}",
            phrase.id, phrase.difficulty.to_string(), environment, phrase.text
        );
        if let Some(translation) = &phrase.translation {
            let _ = writeln!(out, "{:36}{translation}", "");
        }
    }
    out
}
