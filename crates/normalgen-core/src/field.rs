//! Scalar and vector fields flowing between pipeline stages.
//!
//! Fields are value types: every stage consumes borrowed fields and returns a
//! freshly allocated one. Nothing in the pipeline mutates a field after the
//! stage that produced it has returned.

/// A 2D grid of real samples (luminance, gradient component, blurred
/// luminance or occlusion value).
#[derive(Debug, Clone, PartialEq)]
pub struct ScalarField {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Sample data (row-major).
    pub data: Vec<f64>,
}

impl ScalarField {
    /// Create a new field filled with a value.
    pub fn new(width: u32, height: u32, fill: f64) -> Self {
        let size = width as usize * height as usize;
        Self {
            width,
            height,
            data: vec![fill; size],
        }
    }

    /// Wrap existing row-major samples.
    ///
    /// # Panics
    /// Panics if `data.len() != width * height`.
    pub fn from_data(width: u32, height: u32, data: Vec<f64>) -> Self {
        assert_eq!(
            data.len(),
            width as usize * height as usize,
            "sample count does not match {}x{} field",
            width,
            height
        );
        Self {
            width,
            height,
            data,
        }
    }

    /// Build a field by evaluating `f(x, y)` at every pixel.
    pub fn from_fn(width: u32, height: u32, mut f: impl FnMut(u32, u32) -> f64) -> Self {
        let mut data = Vec::with_capacity(width as usize * height as usize);
        for y in 0..height {
            for x in 0..width {
                data.push(f(x, y));
            }
        }
        Self {
            width,
            height,
            data,
        }
    }

    /// Get a sample at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> f64 {
        self.data[self.index(x, y)]
    }

    /// Set a sample at the given coordinates.
    #[inline]
    pub fn set(&mut self, x: u32, y: u32, value: f64) {
        let idx = self.index(x, y);
        self.data[idx] = value;
    }

    #[inline]
    fn index(&self, x: u32, y: u32) -> usize {
        y as usize * self.width as usize + x as usize
    }

    /// Number of samples.
    pub fn len(&self) -> usize {
        self.data.len()
    }

    /// True for a zero-sized field.
    pub fn is_empty(&self) -> bool {
        self.data.is_empty()
    }

    /// `(width, height)`.
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Assert that `other` has the same dimensions as `self`.
    ///
    /// Two-field operations call this before touching any sample.
    #[track_caller]
    pub fn assert_same_dimensions(&self, other: &ScalarField) {
        assert_eq!(
            self.dimensions(),
            other.dimensions(),
            "field dimensions differ"
        );
    }

    /// Apply `f` to every sample, producing a new field.
    pub fn map(&self, f: impl Fn(f64) -> f64) -> ScalarField {
        ScalarField {
            width: self.width,
            height: self.height,
            data: self.data.iter().map(|&v| f(v)).collect(),
        }
    }

    /// Largest sample (signed). `f64::NEG_INFINITY` for an empty field.
    pub fn max(&self) -> f64 {
        self.data.iter().copied().fold(f64::NEG_INFINITY, f64::max)
    }

    /// Smallest sample (signed). `f64::INFINITY` for an empty field.
    pub fn min(&self) -> f64 {
        self.data.iter().copied().fold(f64::INFINITY, f64::min)
    }

    /// Arithmetic mean of all samples. Zero for an empty field.
    pub fn mean(&self) -> f64 {
        if self.data.is_empty() {
            return 0.0;
        }
        self.data.iter().sum::<f64>() / self.data.len() as f64
    }

    /// Euclidean norm of the field treated as one flat vector.
    pub fn norm(&self) -> f64 {
        self.data.iter().map(|v| v * v).sum::<f64>().sqrt()
    }

    /// Scale the field to unit Euclidean norm.
    ///
    /// A field whose norm is zero (all samples zero) is returned unchanged so
    /// that no NaN enters the pipeline.
    pub fn normalized(&self) -> ScalarField {
        let norm = self.norm();
        if norm == 0.0 {
            return self.clone();
        }
        let factor = 1.0 / norm;
        self.map(|v| v * factor)
    }

    /// Clamp every sample into `[lo, hi]`.
    pub fn clipped(&self, lo: f64, hi: f64) -> ScalarField {
        self.map(|v| v.max(lo).min(hi))
    }

    /// Linearly remap `[min, max]` to `[0, 1]` and quantize to 8-bit gray.
    ///
    /// A constant field has no range to stretch and maps to 0.
    pub fn to_gray8_autoscaled(&self) -> Vec<u8> {
        let lo = self.min();
        let hi = self.max();
        let range = hi - lo;
        self.data
            .iter()
            .map(|&v| {
                let t = if range > 0.0 { (v - lo) / range } else { 0.0 };
                quantize(t)
            })
            .collect()
    }
}

/// Map a `[0, 1]` value to a byte, clamping out-of-range input.
#[inline]
pub(crate) fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}

/// A packed normal map: per-pixel 3-vectors already remapped to `[0, 1]`.
#[derive(Debug, Clone, PartialEq)]
pub struct NormalMap {
    /// Width in pixels.
    pub width: u32,
    /// Height in pixels.
    pub height: u32,
    /// Packed `(x, y, z)` per pixel (row-major).
    pub data: Vec<[f64; 3]>,
}

impl NormalMap {
    /// Create a normal map filled with one packed vector.
    pub fn new(width: u32, height: u32, fill: [f64; 3]) -> Self {
        Self {
            width,
            height,
            data: vec![fill; width as usize * height as usize],
        }
    }

    /// Get the packed vector at the given coordinates.
    #[inline]
    pub fn get(&self, x: u32, y: u32) -> [f64; 3] {
        self.data[y as usize * self.width as usize + x as usize]
    }

    /// Unpack a stored vector from `[0, 1]` back to `[-1, 1]`.
    #[inline]
    pub fn unpacked(&self, x: u32, y: u32) -> [f64; 3] {
        let [r, g, b] = self.get(x, y);
        [r * 2.0 - 1.0, g * 2.0 - 1.0, b * 2.0 - 1.0]
    }

    /// Convert to interleaved 8-bit RGB bytes.
    pub fn to_rgb8(&self) -> Vec<u8> {
        let mut bytes = Vec::with_capacity(self.data.len() * 3);
        for [r, g, b] in &self.data {
            bytes.extend_from_slice(&[quantize(*r), quantize(*g), quantize(*b)]);
        }
        bytes
    }
}
