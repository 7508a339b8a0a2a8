pub mod phrases;
pub mod pipeline;
pub mod scoring;
pub mod shared;
pub mod transcription;
