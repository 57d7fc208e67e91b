//! Tests for normal synthesis.

use super::conversion::{bump_strength, unit_normal};
use super::*;
use crate::gradient::sobel_gradient;

fn vec_norm(v: [f64; 3]) -> f64 {
    (v[0] * v[0] + v[1] * v[1] + v[2] * v[2]).sqrt()
}

fn bumpy_field(width: u32, height: u32) -> ScalarField {
    ScalarField::from_fn(width, height, |x, y| {
        let fx = x as f64 * 0.37;
        let fy = y as f64 * 0.21;
        (fx.sin() * fy.cos() + 1.0) * 0.5
    })
}

#[test]
fn test_flat_field_gives_reference_normal() {
    let field = ScalarField::new(32, 32, 0.5);
    let grad = sobel_gradient(&field);
    let map = normal_map_from_gradient(&grad, 1.0);

    assert_eq!(map.width, 32);
    assert_eq!(map.height, 32);
    assert!(map.data.iter().all(|n| *n == FLAT_NORMAL));
}

#[test]
fn test_unpacked_vectors_have_unit_length() {
    let field = bumpy_field(40, 24);
    let grad = sobel_gradient(&field);
    for intensity in [0.25, 1.0, 3.0] {
        let map = normal_map_from_gradient(&grad, intensity);
        for y in 0..map.height {
            for x in 0..map.width {
                let n = map.unpacked(x, y);
                assert!(
                    (vec_norm(n) - 1.0).abs() < 1e-5,
                    "normal at ({}, {}) has length {}",
                    x,
                    y,
                    vec_norm(n)
                );
            }
        }
    }
}

#[test]
fn test_packed_components_within_unit_range() {
    let field = bumpy_field(16, 16);
    let map = normal_map_from_gradient(&sobel_gradient(&field), 2.0);
    for n in &map.data {
        for c in n {
            assert!((0.0..=1.0).contains(c));
        }
    }
}

#[test]
fn test_strength_reduces_to_intensity() {
    for max_value in [0.001, 1.0, -3.5, 250.0] {
        for intensity in [0.5, 1.0, 4.0] {
            let s = bump_strength(max_value, intensity);
            assert!((s - intensity).abs() < 1e-12);
        }
    }
}

#[test]
fn test_higher_intensity_tilts_more() {
    // Same gradient, larger intensity => smaller z component.
    let soft = unit_normal(1.0, 0.0, 1.0, 1.0);
    let hard = unit_normal(1.0, 0.0, 1.0, 4.0);
    assert!(hard[2] < soft[2]);
    assert!(hard[0] > soft[0]);
}

#[test]
fn test_uses_signed_maximum() {
    // gx is all negative and gy all zero: signed max is 0 => flat map,
    // even though |gx| is large.
    let gx = ScalarField::new(4, 4, -2.0);
    let gy = ScalarField::new(4, 4, 0.0);
    let map = build_normal_map(&gx, &gy, 1.0);
    assert!(map.data.iter().all(|n| *n == FLAT_NORMAL));
}

#[test]
fn test_negative_maximum_inverts_tilt() {
    let gx = ScalarField::from_data(2, 1, vec![-1.0, -2.0]);
    let gy = ScalarField::from_data(2, 1, vec![-1.0, -1.0]);
    // max(max(gx), max(gy)) = -1, so -2 / -1 = 2 tilts towards +x.
    let map = build_normal_map(&gx, &gy, 1.0);
    let n = map.unpacked(1, 0);
    assert!(n[0] > 0.0);
    assert!((vec_norm(n) - 1.0).abs() < 1e-9);
}

#[test]
fn test_ramp_tilts_towards_positive_x() {
    let field = ScalarField::from_fn(16, 16, |x, _| x as f64 / 16.0);
    let map = normal_map_from_gradient(&sobel_gradient(&field), 1.0);
    let n = map.unpacked(8, 8);
    // gx equals the maximum here, gy is zero: n = normalize(1, 0, 1).
    let expected = std::f64::consts::FRAC_1_SQRT_2;
    assert!((n[0] - expected).abs() < 1e-9);
    assert!(n[1].abs() < 1e-9);
    assert!((n[2] - expected).abs() < 1e-9);
}

#[test]
fn test_empty_field() {
    let gx = ScalarField::new(0, 0, 0.0);
    let gy = ScalarField::new(0, 0, 0.0);
    let map = build_normal_map(&gx, &gy, 1.0);
    assert!(map.data.is_empty());
}

#[test]
#[should_panic(expected = "dimensions")]
fn test_mismatched_gradients_panic() {
    let gx = ScalarField::new(4, 4, 0.0);
    let gy = ScalarField::new(4, 5, 0.0);
    let _ = build_normal_map(&gx, &gy, 1.0);
}
