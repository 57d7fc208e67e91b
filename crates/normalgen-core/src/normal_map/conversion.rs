//! Per-pixel gradient to normal vector conversion.

/// Packed normal of a flat surface: `(0, 0, 1)` remapped to `[0, 1]`.
pub const FLAT_NORMAL: [f64; 3] = [0.5, 0.5, 1.0];

/// Bump strength derived from the gradient maximum and the user intensity.
///
/// Kept in its literal form `max / (max * (1 / intensity))`, which equals
/// `intensity` for any non-zero `max`. Callers must not pass `max == 0`.
#[inline]
pub(crate) fn bump_strength(max_value: f64, intensity: f64) -> f64 {
    let inverse_intensity = 1.0 / intensity;
    max_value / (max_value * inverse_intensity)
}

/// Build the unit normal for one pixel, before range packing.
///
/// The unnormalized vector is `(gx / max, gy / max, 1 / strength)`.
#[inline]
pub(crate) fn unit_normal(gx: f64, gy: f64, max_value: f64, strength: f64) -> [f64; 3] {
    let nx = gx / max_value;
    let ny = gy / max_value;
    let nz = 1.0 / strength;

    let len = (nx * nx + ny * ny + nz * nz).sqrt();
    [nx / len, ny / len, nz / len]
}

/// Remap a unit vector from `[-1, 1]` to `[0, 1]` per component.
#[inline]
pub(crate) fn pack(n: [f64; 3]) -> [f64; 3] {
    [n[0] * 0.5 + 0.5, n[1] * 0.5 + 0.5, n[2] * 0.5 + 0.5]
}
