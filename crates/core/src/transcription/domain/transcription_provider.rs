use thiserror::Error;

use super::transcription::Transcription;

#[derive(Error, Debug)]
pub enum TranscriptionError {
    #[error("transcription failed: {0}")]
    Failed(String),
}

/// Domain interface for speech-to-text.
///
/// Implementations own their transport, retry and timeout policy; callers
/// only see the resulting text.
pub trait TranscriptionProvider: Send + Sync {
    fn transcribe(&self, audio: &[u8]) -> Result<Transcription, TranscriptionError>;
}
