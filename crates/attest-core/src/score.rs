//! The weighted trust-score formula.
//!
//! Structural layout and signature/seal comparison are the two strongest
//! forgery signals (40% each); typographic consistency is a secondary,
//! noisier signal (20%). The pipeline always recomputes the trust score from
//! the sub-scores rather than trusting the value in the oracle's raw output.

/// Weight of the structural layout sub-score.
pub const STRUCTURAL_WEIGHT: f64 = 0.4;
/// Weight of the signature/seal sub-score.
pub const SIGNATURE_WEIGHT: f64 = 0.4;
/// Weight of the typographical sub-score.
pub const TYPOGRAPHICAL_WEIGHT: f64 = 0.2;

/// Compute the weighted trust score from the three sub-scores.
#[must_use]
pub fn weighted_trust_score(structural: f64, signature: f64, typographical: f64) -> f64 {
    STRUCTURAL_WEIGHT * structural
        + SIGNATURE_WEIGHT * signature
        + TYPOGRAPHICAL_WEIGHT * typographical
}

/// Whether `value` is a valid sub-score, i.e. a finite number in `[0.0, 1.0]`.
#[must_use]
pub fn in_unit_range(value: f64) -> bool {
    value.is_finite() && (0.0..=1.0).contains(&value)
}
