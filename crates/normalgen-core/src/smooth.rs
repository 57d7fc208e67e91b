//! Smoothing stage: Gaussian blur and the uniform box blur used for occlusion.

use crate::convolve::{convolve_separable, padded_line, BoundaryMode};
use crate::field::ScalarField;
use crate::kernel::Kernel1D;

/// Window size of the uniform filter used by occlusion synthesis.
pub const BOX_WINDOW: usize = 20;

/// Gaussian smoothing with the unnormalized kernel from [`Kernel1D::gaussian`].
///
/// `sigma == 0` returns the input unchanged; no kernel is built in that
/// case. Callers validate `sigma >= 0` before reaching this stage.
pub fn smooth_gaussian(field: &ScalarField, sigma: f64) -> ScalarField {
    if sigma == 0.0 {
        return field.clone();
    }
    let kernel = Kernel1D::gaussian(sigma);
    convolve_separable(field, &kernel, BoundaryMode::Reflect)
}

/// Unweighted moving average over a `window`-sample span on both axes.
///
/// The window covering pixel `x` spans `x - window/2 ..= x + (window - 1) - window/2`,
/// so even windows reach one sample further back than forward. Each line is
/// swept with a running sum updated by `incoming - outgoing`; equal samples
/// leave the sum untouched, so a constant field stays exactly constant.
pub fn box_blur(field: &ScalarField, window: usize) -> ScalarField {
    assert!(window > 0, "box window must be non-empty");
    let width = field.width as usize;
    let height = field.height as usize;
    let mut out = field.clone();
    if out.is_empty() {
        return out;
    }

    for row in out.data.chunks_exact_mut(width) {
        let blurred = box_line(row, window);
        row.copy_from_slice(&blurred);
    }

    let mut column = vec![0.0; height];
    for x in 0..width {
        for (y, v) in column.iter_mut().enumerate() {
            *v = out.data[y * width + x];
        }
        for (y, v) in box_line(&column, window).into_iter().enumerate() {
            out.data[y * width + x] = v;
        }
    }
    out
}

/// Moving average of one line with reflected edges.
fn box_line(line: &[f64], window: usize) -> Vec<f64> {
    let back = window / 2;
    let padded = padded_line(line, back, window - 1 - back, BoundaryMode::Reflect);
    let scale = 1.0 / window as f64;

    let mut sum: f64 = padded[..window].iter().sum();
    let mut out = Vec::with_capacity(line.len());
    out.push(sum * scale);
    for x in 1..line.len() {
        sum += padded[x + window - 1] - padded[x - 1];
        out.push(sum * scale);
    }
    out
}

/// Apply [`box_blur`] with [`BOX_WINDOW`] `iterations` times.
///
/// Zero iterations returns a copy of the input.
pub fn repeated_box_blur(field: &ScalarField, iterations: u32) -> ScalarField {
    let mut current = field.clone();
    for _ in 0..iterations {
        current = box_blur(&current, BOX_WINDOW);
    }
    current
}
