//! Normal synthesis: gradient pair to packed tangent-space normal map.
//!
//! Gradients are scaled by their joint maximum, given a constant z
//! component of `1 / strength`, normalized to unit length and packed into
//! `[0, 1]` with `n * 0.5 + 0.5`.
//!
//! The joint maximum is `max(max(gx), max(gy))` over *signed* samples, not
//! absolute values. For a field whose gradients are net-negative this can
//! be smaller than the true dynamic range, or negative, which inverts the
//! tilt of every normal. When it is exactly zero the whole map is emitted
//! as the flat normal `(0.5, 0.5, 1.0)` instead of dividing by zero.

mod conversion;

#[cfg(test)]
mod tests;

pub use conversion::FLAT_NORMAL;

use conversion::{bump_strength, pack, unit_normal};

use crate::field::{NormalMap, ScalarField};
use crate::gradient::Gradient;

/// Convert a gradient pair into a packed normal map.
///
/// `intensity` must be strictly positive; higher values flatten the
/// z component and exaggerate the bumps.
///
/// # Panics
/// Panics if `gx` and `gy` differ in dimensions.
pub fn build_normal_map(gx: &ScalarField, gy: &ScalarField, intensity: f64) -> NormalMap {
    gx.assert_same_dimensions(gy);

    let width = gx.width;
    let height = gx.height;
    if gx.is_empty() {
        return NormalMap::new(width, height, FLAT_NORMAL);
    }

    let max_value = gx.max().max(gy.max());
    if max_value == 0.0 {
        return NormalMap::new(width, height, FLAT_NORMAL);
    }

    let strength = bump_strength(max_value, intensity);
    let data = gx
        .data
        .iter()
        .zip(&gy.data)
        .map(|(&x, &y)| pack(unit_normal(x, y, max_value, strength)))
        .collect();

    NormalMap {
        width,
        height,
        data,
    }
}

/// [`build_normal_map`] taking a [`Gradient`].
pub fn normal_map_from_gradient(gradient: &Gradient, intensity: f64) -> NormalMap {
    build_normal_map(&gradient.gx, &gradient.gy, intensity)
}
