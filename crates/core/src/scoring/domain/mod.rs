pub mod aggregator;
pub mod aligner;
pub mod analysis;
pub mod classifier;
pub mod normalizer;
pub mod scoring_error;
pub mod similarity;
pub mod tip_generator;
pub mod word_judgment;
