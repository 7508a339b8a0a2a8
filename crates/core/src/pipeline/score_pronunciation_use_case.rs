use serde::Serialize;
use thiserror::Error;

use crate::phrases::domain::phrase::{Phrase, PhraseFilter};
use crate::phrases::domain::phrase_store::{PhraseStore, PhraseStoreError};
use crate::scoring::domain::analysis::{analyze, AnalysisResult};
use crate::scoring::domain::scoring_error::ScoringError;
use crate::scoring::domain::tip_generator::{Tip, TipGenerator};
use crate::transcription::domain::transcription_provider::{
    TranscriptionError, TranscriptionProvider,
};

#[derive(Error, Debug)]
pub enum ScorePronunciationError {
    #[error(transparent)]
    Scoring(#[from] ScoringError),
    #[error(transparent)]
    PhraseStore(#[from] PhraseStoreError),
    #[error(transparent)]
    Transcription(#[from] TranscriptionError),
    #[error("phrase not found: {0}")]
    PhraseNotFound(String),
    #[error("no transcription provider configured")]
    NoTranscriber,
    #[error("transcription provider could not recognize the recording")]
    TranscriptionUnsuccessful,
}

/// Analysis plus tips, with the phrase record when one was looked up.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct PronunciationReport {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub phrase: Option<Phrase>,
    pub analysis: AnalysisResult,
    pub tips: Vec<Tip>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub transcription_confidence: Option<f32>,
}

/// Resolves the reference phrase and transcript, then runs the scoring engine.
pub struct ScorePronunciationUseCase {
    store: Box<dyn PhraseStore>,
    transcriber: Option<Box<dyn TranscriptionProvider>>,
    tips: TipGenerator,
}

impl ScorePronunciationUseCase {
    pub fn new(
        store: Box<dyn PhraseStore>,
        transcriber: Option<Box<dyn TranscriptionProvider>>,
        tips: TipGenerator,
    ) -> Self {
        Self {
            store,
            transcriber,
            tips,
        }
    }

    /// Scores free-form reference text, bypassing the phrase store.
    pub fn score_text(
        &self,
        expected_text: &str,
        spoken_text: &str,
    ) -> Result<PronunciationReport, ScorePronunciationError> {
        self.report(None, expected_text, spoken_text, None)
    }

    /// Scores a transcript against a stored phrase.
    pub fn score_phrase(
        &self,
        phrase_id: &str,
        spoken_text: &str,
    ) -> Result<PronunciationReport, ScorePronunciationError> {
        let phrase = self.find_phrase(phrase_id)?;
        let expected_text = phrase.text.clone();
        self.report(Some(phrase), &expected_text, spoken_text, None)
    }

    /// Transcribes a recording, then scores it against a stored phrase.
    ///
    /// The provider adapter is supplied by the host application; without one
    /// this returns [`ScorePronunciationError::NoTranscriber`].
    pub fn score_audio(
        &self,
        phrase_id: &str,
        audio: &[u8],
    ) -> Result<PronunciationReport, ScorePronunciationError> {
        let transcriber = self
            .transcriber
            .as_ref()
            .ok_or(ScorePronunciationError::NoTranscriber)?;
        let phrase = self.find_phrase(phrase_id)?;

        let transcription = transcriber.transcribe(audio)?;
        if !transcription.success {
            log::warn!(
                "Transcription unsuccessful for phrase {phrase_id} ({} bytes of audio)",
                audio.len()
            );
            return Err(ScorePronunciationError::TranscriptionUnsuccessful);
        }

        let expected_text = phrase.text.clone();
        self.report(
            Some(phrase),
            &expected_text,
            &transcription.text,
            Some(transcription.confidence),
        )
    }

    pub fn select_phrases(
        &self,
        filter: &PhraseFilter,
    ) -> Result<Vec<Phrase>, ScorePronunciationError> {
        Ok(self.store.select(filter)?)
    }

    fn find_phrase(&self, phrase_id: &str) -> Result<Phrase, ScorePronunciationError> {
        self.store
            .find_by_id(phrase_id)?
            .ok_or_else(|| ScorePronunciationError::PhraseNotFound(phrase_id.to_string()))
    }

    fn report(
        &self,
        phrase: Option<Phrase>,
        expected_text: &str,
        spoken_text: &str,
        transcription_confidence: Option<f32>,
    ) -> Result<PronunciationReport, ScorePronunciationError> {
        let analysis = analyze(expected_text, spoken_text)?;
        let tips = self.tips.generate(&analysis.judgments);
        log::info!(
            "Scored {} words: {}% ({}), {} tips",
            analysis.judgments.len(),
            analysis.accuracy,
            analysis.overall_status,
            tips.len()
        );
        Ok(PronunciationReport {
            phrase,
            analysis,
            tips,
            transcription_confidence,
        })
    }
}
