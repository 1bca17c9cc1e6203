//! Conversion constants.

/// Scale factor 180/π, rounded to the nearest binary32 value.
///
/// The quotient is formed in `f64` and rounded once. This is not the same value as
/// `180.0_f32 / core::f32::consts::PI`, which rounds π first and the quotient second and lands one
/// ULP low; the single-rounded constant is what keeps conversion results within one relative
/// epsilon of the double-precision reference.
pub const RAD2DEG: f32 = (180.0_f64 / core::f64::consts::PI) as f32;

/// Largest input magnitude whose conversion is still finite.
///
/// Derived from `f32::MAX / RAD2DEG` (≈ 5.939e36) rather than written as a literal, so it stays
/// correct if the constant ever changes. Inputs strictly greater in magnitude overflow to ±∞ under
/// ordinary IEEE-754 multiplication.
///
/// ```rust
/// use rad2degf::{rad2degf, OVERFLOW_THRESHOLD};
///
/// assert!(rad2degf(OVERFLOW_THRESHOLD).is_finite());
/// assert_eq!(rad2degf(6.0e36), f32::INFINITY);
/// ```
pub const OVERFLOW_THRESHOLD: f32 = f32::MAX / RAD2DEG;
