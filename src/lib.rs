//! Single-precision radians-to-degrees conversion.
//!
//! `rad2degf` converts an angle measured in radians to the equivalent angle measured in degrees,
//! entirely in IEEE-754 binary32 (`f32`) arithmetic. It is a leaf primitive meant to sit inside
//! larger numeric code (graphics, trigonometry, signal processing) where single-precision rounding
//! and edge-case fidelity matter more than double precision.
//!
//! The whole crate is one multiplication plus its numeric contract: the scale factor 180/π is
//! computed in `f64` and rounded *once* to the nearest binary32 value ([`RAD2DEG`]), and the input
//! is multiplied by it in binary32. The special-value behavior (infinity and NaN propagation,
//! signed-zero preservation, natural overflow to ±∞) falls out of ordinary IEEE-754 multiplication
//! and is pinned down by the test suite rather than by branches in the code.
//!
//! # What this crate solves
//!
//! - A total, branch-free `f32 -> f32` conversion with bit-level special-value guarantees.
//! - A single-rounded conversion constant; rounding the constant late gives different last-bit
//!   results (see [`RAD2DEG`]).
//! - A derived, non-hardcoded overflow boundary ([`OVERFLOW_THRESHOLD`]).
//!
//! # What this crate does not try to solve
//!
//! - Batch or vectorized conversion; map [`rad2degf`] over your data yourself.
//! - A double-precision variant (`f64::to_degrees` already exists).
//! - The inverse degree-to-radian conversion.
//! - Angle normalization (wrapping into `[0, 360)`).
//!
//! # Quick start
//!
//! ```rust
//! use rad2degf::rad2degf;
//!
//! let d = rad2degf(core::f32::consts::FRAC_PI_2);
//! assert!((d - 90.0).abs() <= 90.0 * f32::EPSILON);
//! ```
//!
//! Special values propagate bit-for-bit:
//!
//! ```rust
//! use rad2degf::rad2degf;
//!
//! assert_eq!(rad2degf(f32::INFINITY), f32::INFINITY);
//! assert!(rad2degf(f32::NAN).is_nan());
//! assert!(rad2degf(-0.0).is_sign_negative());
//! ```
//!
//! # `no_std`
//!
//! The conversion needs nothing outside `core`. Disable default features to build without `std`:
//!
//! ```toml
//! [dependencies]
//! rad2degf = { version = "0.1.0", default-features = false }
//! ```
//!
//! # Feature flags
//!
//! - `std` (default): enables `std` support. No API differences; the flag only controls whether
//!   the crate links the standard library.
//!
//! # Panics and errors
//!
//! This crate does not define an error type and does not return `Result`. The conversion is a pure
//! binary32 computation; it never panics and follows IEEE-754 behavior (NaN and infinities
//! propagate, finite results beyond `f32::MAX` overflow to ±∞).
//!
//! # SemVer and stability
//!
//! This crate is currently `0.x`. Expect breaking changes between minor versions until `1.0`.

#![deny(missing_docs)]
#![cfg_attr(not(feature = "std"), no_std)]
#![forbid(unsafe_code)]

mod constants;
mod rad2deg;

pub use constants::{OVERFLOW_THRESHOLD, RAD2DEG};
pub use rad2deg::rad2degf;
