use strsim::levenshtein;

/// Normalized edit-distance similarity between two tokens, in `[0.0, 1.0]`.
///
/// `1 - levenshtein(a, b) / max(len(a), len(b))`, with lengths counted in
/// code points. Two empty tokens are a vacuous match.
pub fn similarity(a: &str, b: &str) -> f64 {
    let longest = a.chars().count().max(b.chars().count());
    if longest == 0 {
        return 1.0;
    }
    1.0 - levenshtein(a, b) as f64 / longest as f64
}
