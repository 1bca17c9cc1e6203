//! Radians-to-degrees conversion.

use crate::constants::RAD2DEG;

/// Converts an angle from radians to degrees in binary32 arithmetic.
///
/// The input is multiplied by [`RAD2DEG`] (180/π rounded to binary32) and the product is rounded
/// to binary32. The function is total over every `f32` bit pattern and has no failure path.
///
/// Callers holding an `f64` angle must narrow it themselves (`x as f32`); the computation happens
/// entirely in single precision.
///
/// IEEE-754 note: `NaN` propagates, `±∞` map to themselves, the sign of zero is preserved, and
/// finite inputs with magnitude above [`crate::OVERFLOW_THRESHOLD`] overflow to `±∞`.
///
/// # Examples
///
/// ```rust
/// use rad2degf::rad2degf;
///
/// let d = rad2degf(core::f32::consts::PI);
/// assert!((d - 180.0).abs() <= 180.0 * f32::EPSILON);
/// ```
#[inline]
pub const fn rad2degf(x: f32) -> f32 {
    x * RAD2DEG
}
