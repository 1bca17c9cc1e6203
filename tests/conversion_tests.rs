//! Integration-level tests for the public conversion API, driven by fixture data.
//!
//! The fixture pairs binary32-exact inputs with the double-precision reference product
//! `x * (180/π)`; results must match the binary32 rounding of the reference exactly or within one
//! relative epsilon of it.

use rad2degf::{rad2degf, OVERFLOW_THRESHOLD, RAD2DEG};
use serde::Deserialize;

#[derive(Deserialize)]
struct Fixture {
    x: Vec<f64>,
    expected: Vec<f64>,
}

fn load_fixture() -> Fixture {
    serde_json::from_str(include_str!("fixtures/data.json")).expect("fixture data parses")
}

#[test]
fn fixture_arrays_are_paired() {
    let fixture = load_fixture();
    assert_eq!(fixture.x.len(), fixture.expected.len());
    assert!(!fixture.x.is_empty());
}

#[test]
fn converts_fixture_values() {
    let fixture = load_fixture();
    for (&x, &expected) in fixture.x.iter().zip(fixture.expected.iter()) {
        let r = rad2degf(x as f32);
        let e = expected as f32;
        if r == e {
            continue;
        }
        let delta = (r - e).abs();
        let tol = f32::EPSILON * e.abs();
        assert!(
            delta <= tol,
            "x: {x}, got: {r}, expected: {e}, delta: {delta}, tol: {tol}"
        );
    }
}

#[test]
fn smoke_test_special_values() {
    assert_eq!(rad2degf(f32::INFINITY), f32::INFINITY);
    assert_eq!(rad2degf(f32::NEG_INFINITY), f32::NEG_INFINITY);
    assert!(rad2degf(f32::NAN).is_nan());
    assert_eq!(rad2degf(0.0).to_bits(), 0.0_f32.to_bits());
    assert_eq!(rad2degf(-0.0).to_bits(), (-0.0_f32).to_bits());
}

#[test]
fn smoke_test_overflow() {
    assert_eq!(rad2degf(6.0e36), f32::INFINITY);
    assert_eq!(rad2degf(-6.0e36), f32::NEG_INFINITY);
    assert!(6.0e36 > OVERFLOW_THRESHOLD);
}

#[test]
fn smoke_test_straight_angle() {
    let r = rad2degf(core::f32::consts::PI);
    assert!((r - 180.0).abs() <= 180.0 * f32::EPSILON, "got {r}");
}

#[test]
fn exported_constant_is_single_rounded() {
    assert_eq!(RAD2DEG, (180.0_f64 / core::f64::consts::PI) as f32);
}
