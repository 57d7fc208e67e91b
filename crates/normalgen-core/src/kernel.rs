//! Convolution kernel construction.
//!
//! Kernels are applied as correlations by [`crate::convolve`]: tap `k` of a
//! kernel with radius `r` weighs the sample at offset `k - r`. Under that
//! convention both gradient operators respond positively to luminance that
//! increases towards +x (right) or +y (down).

/// Sobel operator responding to horizontal change.
pub const SOBEL_X: [[f64; 3]; 3] = [[-1.0, 0.0, 1.0], [-2.0, 0.0, 2.0], [-1.0, 0.0, 1.0]];

/// Sobel operator responding to vertical change (transpose of [`SOBEL_X`]).
pub const SOBEL_Y: [[f64; 3]; 3] = [[-1.0, -2.0, -1.0], [0.0, 0.0, 0.0], [1.0, 2.0, 1.0]];

/// Central difference taps: `[1, 0, -1]` negated and halved.
pub const CENTRAL_DIFFERENCE: [f64; 3] = [-0.5, 0.0, 0.5];

/// Gaussian support in multiples of sigma on each side of the center tap.
const GAUSSIAN_EXTENT: f64 = 3.0;

/// Largest sigma accepted by [`Kernel1D::gaussian`]; keeps the tap count bounded.
pub const MAX_GAUSSIAN_SIGMA: f64 = 1024.0;

/// A 1D kernel of odd length.
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel1D {
    taps: Vec<f64>,
}

impl Kernel1D {
    /// Wrap explicit taps.
    ///
    /// # Panics
    /// Panics if `taps` is empty or has even length.
    pub fn new(taps: Vec<f64>) -> Self {
        assert!(
            taps.len() % 2 == 1,
            "kernel length must be odd (got {})",
            taps.len()
        );
        Self { taps }
    }

    /// Unnormalized Gaussian sampled at every integer offset in
    /// `[-3σ, 3σ]`, with tap value `exp(-x² / 2σ²)`.
    ///
    /// Taps are not scaled to unit sum.
    ///
    /// # Panics
    /// Panics if `sigma` is not in `(0, MAX_GAUSSIAN_SIGMA]`.
    pub fn gaussian(sigma: f64) -> Self {
        assert!(
            sigma > 0.0 && sigma <= MAX_GAUSSIAN_SIGMA,
            "sigma must be in (0, {}], got {}",
            MAX_GAUSSIAN_SIGMA,
            sigma
        );
        let radius = (GAUSSIAN_EXTENT * sigma).floor() as isize;
        let two_sigma_sq = 2.0 * sigma * sigma;
        let taps = (-radius..=radius)
            .map(|x| {
                let xf = x as f64;
                (-(xf * xf) / two_sigma_sq).exp()
            })
            .collect();
        Self { taps }
    }

    /// The 3-tap central difference `[-0.5, 0, 0.5]`.
    pub fn central_difference() -> Self {
        Self {
            taps: CENTRAL_DIFFERENCE.to_vec(),
        }
    }

    /// Kernel taps.
    pub fn taps(&self) -> &[f64] {
        &self.taps
    }

    /// Number of taps on each side of the center.
    pub fn radius(&self) -> usize {
        self.taps.len() / 2
    }

    /// Sum of all taps.
    pub fn sum(&self) -> f64 {
        self.taps.iter().sum()
    }
}

/// A 2D kernel with odd width and height (row-major taps).
#[derive(Debug, Clone, PartialEq)]
pub struct Kernel2D {
    width: usize,
    height: usize,
    taps: Vec<f64>,
}

impl Kernel2D {
    /// Wrap explicit row-major taps.
    ///
    /// # Panics
    /// Panics on even dimensions or a tap count that does not match them.
    pub fn new(width: usize, height: usize, taps: Vec<f64>) -> Self {
        assert!(
            width % 2 == 1 && height % 2 == 1,
            "kernel dimensions must be odd (got {}x{})",
            width,
            height
        );
        assert_eq!(taps.len(), width * height, "tap count does not match");
        Self {
            width,
            height,
            taps,
        }
    }

    /// Build from a fixed 3x3 array.
    pub fn from_3x3(rows: [[f64; 3]; 3]) -> Self {
        Self::new(3, 3, rows.iter().flatten().copied().collect())
    }

    /// Horizontal Sobel operator.
    pub fn sobel_x() -> Self {
        Self::from_3x3(SOBEL_X)
    }

    /// Vertical Sobel operator.
    pub fn sobel_y() -> Self {
        Self::from_3x3(SOBEL_Y)
    }

    /// Swap rows and columns.
    pub fn transposed(&self) -> Self {
        let mut taps = Vec::with_capacity(self.taps.len());
        for x in 0..self.width {
            for y in 0..self.height {
                taps.push(self.taps[y * self.width + x]);
            }
        }
        Self {
            width: self.height,
            height: self.width,
            taps,
        }
    }

    /// Kernel width in taps.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Kernel height in taps.
    pub fn height(&self) -> usize {
        self.height
    }

    /// One row of taps.
    pub fn row(&self, y: usize) -> &[f64] {
        &self.taps[y * self.width..(y + 1) * self.width]
    }

    /// Sum of all taps.
    pub fn sum(&self) -> f64 {
        self.taps.iter().sum()
    }
}
