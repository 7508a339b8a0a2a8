/// Text returned by a speech-to-text provider for one recording.
#[derive(Clone, Debug, PartialEq)]
pub struct Transcription {
    pub text: String,
    pub success: bool,
    /// Provider's own estimate in `[0.0, 1.0]`.
    pub confidence: f32,
}

impl Transcription {
    pub fn succeeded(text: impl Into<String>, confidence: f32) -> Self {
        Self {
            text: text.into(),
            success: true,
            confidence: confidence.clamp(0.0, 1.0),
        }
    }

    pub fn failed() -> Self {
        Self {
            text: String::new(),
            success: false,
            confidence: 0.0,
        }
    }
}
