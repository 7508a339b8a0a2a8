/// Similarity above which a non-exact word is judged `similar` rather than `wrong`.
pub const SIMILAR_THRESHOLD: f64 = 0.8;

/// Upper bound on tips returned for one analysis.
pub const MAX_TIPS: usize = 3;

/// Accuracy lower bounds (inclusive) for each overall status.
pub const EXCELLENT_MIN_ACCURACY: u8 = 80;
pub const GOOD_MIN_ACCURACY: u8 = 60;
pub const NEEDS_PRACTICE_MIN_ACCURACY: u8 = 40;

pub const APP_DIR_NAME: &str = "Pronunciation Coach";
pub const SETTINGS_FILE_NAME: &str = "settings.json";
