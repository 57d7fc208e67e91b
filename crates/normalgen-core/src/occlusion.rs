//! Occlusion synthesis from multi-scale luminance differences.
//!
//! Four copies of the luminance field are box-blurred for 0, 2, 16 and 32
//! iterations and each scaled to unit Euclidean norm. Near-scale structure
//! minus far-scale structure,
//!
//! ```text
//! shadow = 2 * blur2 + blur0 - 2 * blur32 - blur16
//! ```
//!
//! is renormalized and clipped to `[mean - 2 * rmse, mean + 0.5 * rmse]`,
//! where `rmse` is the root-mean-square deviation scaled by
//! `1 / SHADOW_STRENGTH`. The clip leaves more headroom for dark pixels than
//! for bright ones.

use crate::field::ScalarField;
use crate::smooth::repeated_box_blur;

/// Box-blur iteration counts for the four scales, finest first.
pub const BLUR_ITERATIONS: [u32; 4] = [0, 2, 16, 32];

/// Divisor applied to the RMS deviation before clipping.
pub const SHADOW_STRENGTH: f64 = 0.5;

/// Multiple of the scaled RMS deviation kept below the mean.
pub const DARK_CLIP: f64 = 2.0;

/// Multiple of the scaled RMS deviation kept above the mean.
pub const BRIGHT_CLIP: f64 = 0.5;

/// The four unit-normalized blur scales of one luminance field.
#[derive(Debug, Clone)]
pub struct BlurScales {
    /// Unblurred luminance.
    pub base: ScalarField,
    /// After 2 box-blur iterations.
    pub near: ScalarField,
    /// After 16 box-blur iterations.
    pub mid: ScalarField,
    /// After 32 box-blur iterations.
    pub far: ScalarField,
}

impl BlurScales {
    /// Blur `luminance` at every scale and normalize each copy.
    ///
    /// Coarser scales continue from the finer ones, so the field is blurred
    /// 32 times in total rather than 50.
    pub fn from_luminance(luminance: &ScalarField) -> Self {
        let [_, near_iters, mid_iters, far_iters] = BLUR_ITERATIONS;
        let near = repeated_box_blur(luminance, near_iters);
        let mid = repeated_box_blur(&near, mid_iters - near_iters);
        let far = repeated_box_blur(&mid, far_iters - mid_iters);

        Self {
            base: luminance.normalized(),
            near: near.normalized(),
            mid: mid.normalized(),
            far: far.normalized(),
        }
    }
}

/// Statistics used to clip the combined field.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ClipStats {
    /// Mean of the combined field.
    pub mean: f64,
    /// RMS deviation from the mean, scaled by `1 / SHADOW_STRENGTH`.
    pub rmse: f64,
    /// Lower clip bound.
    pub lo: f64,
    /// Upper clip bound.
    pub hi: f64,
}

impl ClipStats {
    /// Compute the clip window of `field`.
    pub fn of(field: &ScalarField) -> Self {
        let mean = field.mean();
        let variance = if field.is_empty() {
            0.0
        } else {
            field.data.iter().map(|v| (v - mean).powi(2)).sum::<f64>() / field.len() as f64
        };
        let rmse = variance.sqrt() * (1.0 / SHADOW_STRENGTH);
        Self {
            mean,
            rmse,
            lo: mean - rmse * DARK_CLIP,
            hi: mean + rmse * BRIGHT_CLIP,
        }
    }
}

/// Combine the four scales into the renormalized shadow field.
///
/// # Panics
/// Panics if the scales differ in dimensions.
pub fn combine_scales(scales: &BlurScales) -> ScalarField {
    let BlurScales {
        base,
        near,
        mid,
        far,
    } = scales;
    base.assert_same_dimensions(near);
    base.assert_same_dimensions(mid);
    base.assert_same_dimensions(far);

    let data = (0..base.len())
        .map(|i| near.data[i] * 2.0 + base.data[i] - far.data[i] * 2.0 - mid.data[i])
        .collect();
    ScalarField::from_data(base.width, base.height, data).normalized()
}

/// Build the occlusion field for a luminance field.
///
/// The output range is not normalized; it is centered near the field mean
/// and must be remapped before encoding.
pub fn build_occlusion_map(luminance: &ScalarField) -> ScalarField {
    let scales = BlurScales::from_luminance(luminance);
    let shadow = combine_scales(&scales);
    let stats = ClipStats::of(&shadow);
    shadow.clipped(stats.lo, stats.hi)
}
