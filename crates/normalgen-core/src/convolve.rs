//! Convolution of scalar fields with 1D and 2D kernels.
//!
//! Output fields always have the dimensions of the input. Samples outside the
//! field are synthesized according to a [`BoundaryMode`].

use crate::field::ScalarField;
use crate::kernel::{Kernel1D, Kernel2D};

/// How samples beyond the field edge are synthesized.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum BoundaryMode {
    /// Mirror about the edge, repeating the edge sample: `d c b a | a b c d | d c b a`.
    #[default]
    Reflect,
    /// Repeat the nearest edge sample: `a a a a | a b c d | d d d d`.
    Nearest,
    /// Tile the field: `a b c d | a b c d | a b c d`.
    Wrap,
    /// Use a fixed value outside the field.
    Constant(f64),
}

impl BoundaryMode {
    /// Resolve a possibly out-of-range index along an axis of length `len`.
    ///
    /// Returns `None` when the sample should take the constant fill value.
    #[inline]
    pub fn resolve(self, index: isize, len: usize) -> Option<usize> {
        let n = len as isize;
        if (0..n).contains(&index) {
            return Some(index as usize);
        }
        match self {
            BoundaryMode::Reflect => {
                let m = index.rem_euclid(2 * n);
                Some(if m < n { m } else { 2 * n - 1 - m } as usize)
            }
            BoundaryMode::Nearest => Some(index.clamp(0, n - 1) as usize),
            BoundaryMode::Wrap => Some(index.rem_euclid(n) as usize),
            BoundaryMode::Constant(_) => None,
        }
    }

    #[inline]
    fn fill(self) -> f64 {
        match self {
            BoundaryMode::Constant(value) => value,
            _ => 0.0,
        }
    }
}

/// Sample `field` at a possibly out-of-range coordinate.
#[inline]
pub(crate) fn sample(field: &ScalarField, x: isize, y: isize, mode: BoundaryMode) -> f64 {
    match (
        mode.resolve(x, field.width as usize),
        mode.resolve(y, field.height as usize),
    ) {
        (Some(sx), Some(sy)) => field.data[sy * field.width as usize + sx],
        _ => mode.fill(),
    }
}

/// Copy `line` with `before` synthesized samples in front and `after` behind.
pub(crate) fn padded_line(
    line: &[f64],
    before: usize,
    after: usize,
    mode: BoundaryMode,
) -> Vec<f64> {
    let start = -(before as isize);
    let end = (line.len() + after) as isize;
    (start..end)
        .map(|i| match mode.resolve(i, line.len()) {
            Some(idx) => line[idx],
            None => mode.fill(),
        })
        .collect()
}

/// Correlate every row with a 1D kernel (horizontal pass).
pub fn convolve_rows(field: &ScalarField, kernel: &Kernel1D, mode: BoundaryMode) -> ScalarField {
    let radius = kernel.radius() as isize;
    let taps = kernel.taps();
    ScalarField::from_fn(field.width, field.height, |x, y| {
        let mut acc = 0.0;
        for (k, &weight) in taps.iter().enumerate() {
            let sx = x as isize + k as isize - radius;
            acc += sample(field, sx, y as isize, mode) * weight;
        }
        acc
    })
}

/// Correlate every column with a 1D kernel (vertical pass).
pub fn convolve_cols(field: &ScalarField, kernel: &Kernel1D, mode: BoundaryMode) -> ScalarField {
    let radius = kernel.radius() as isize;
    let taps = kernel.taps();
    ScalarField::from_fn(field.width, field.height, |x, y| {
        let mut acc = 0.0;
        for (k, &weight) in taps.iter().enumerate() {
            let sy = y as isize + k as isize - radius;
            acc += sample(field, x as isize, sy, mode) * weight;
        }
        acc
    })
}

/// Apply a separable kernel as a row pass followed by a column pass.
pub fn convolve_separable(
    field: &ScalarField,
    kernel: &Kernel1D,
    mode: BoundaryMode,
) -> ScalarField {
    let rows = convolve_rows(field, kernel, mode);
    convolve_cols(&rows, kernel, mode)
}

/// Correlate with a non-separable 2D kernel.
///
/// Each kernel row is accumulated on its own before the rows are summed, so
/// antisymmetric kernels cancel exactly on constant regions.
pub fn convolve_2d(field: &ScalarField, kernel: &Kernel2D, mode: BoundaryMode) -> ScalarField {
    let rx = (kernel.width() / 2) as isize;
    let ry = (kernel.height() / 2) as isize;
    ScalarField::from_fn(field.width, field.height, |x, y| {
        let mut acc = 0.0;
        for ky in 0..kernel.height() {
            let sy = y as isize + ky as isize - ry;
            let mut row_acc = 0.0;
            for (kx, &weight) in kernel.row(ky).iter().enumerate() {
                let sx = x as isize + kx as isize - rx;
                row_acc += sample(field, sx, sy, mode) * weight;
            }
            acc += row_acc;
        }
        acc
    })
}
