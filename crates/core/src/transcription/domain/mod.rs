pub mod transcription;
pub mod transcription_provider;
