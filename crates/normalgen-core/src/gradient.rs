//! Gradient stage: horizontal and vertical derivative fields.

use crate::convolve::{convolve_2d, convolve_cols, convolve_rows, BoundaryMode};
use crate::field::ScalarField;
use crate::kernel::{Kernel1D, Kernel2D};

/// A pair of derivative fields with the dimensions of their source.
#[derive(Debug, Clone, PartialEq)]
pub struct Gradient {
    /// Change along x (positive when luminance increases to the right).
    pub gx: ScalarField,
    /// Change along y (positive when luminance increases downwards).
    pub gy: ScalarField,
}

/// Which derivative operator to use.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GradientOperator {
    /// 3x3 Sobel operators (the production path).
    #[default]
    Sobel,
    /// 3-tap central difference along each axis.
    CentralDifference,
}

impl GradientOperator {
    /// Compute the gradient of `field` with this operator.
    pub fn apply(self, field: &ScalarField) -> Gradient {
        match self {
            GradientOperator::Sobel => sobel_gradient(field),
            GradientOperator::CentralDifference => central_difference_gradient(field),
        }
    }
}

/// Central-difference gradient: the 1D kernel along x for `gx`, along y for `gy`.
pub fn central_difference_gradient(field: &ScalarField) -> Gradient {
    let kernel = Kernel1D::central_difference();
    Gradient {
        gx: convolve_rows(field, &kernel, BoundaryMode::Reflect),
        gy: convolve_cols(field, &kernel, BoundaryMode::Reflect),
    }
}

/// Sobel gradient using the two 3x3 operators.
pub fn sobel_gradient(field: &ScalarField) -> Gradient {
    Gradient {
        gx: convolve_2d(field, &Kernel2D::sobel_x(), BoundaryMode::Reflect),
        gy: convolve_2d(field, &Kernel2D::sobel_y(), BoundaryMode::Reflect),
    }
}
