//! Reduction of color samples to a single luminance field.

use crate::field::ScalarField;

/// Red, green and blue weights of the luminance reduction.
///
/// These are intentionally not the Rec. 601/709 luma coefficients.
pub const LUMINANCE_WEIGHTS: [f64; 3] = [0.3, 0.6, 0.1];

/// Weighted luminance of one RGB sample.
#[inline]
pub fn luminance(r: f64, g: f64, b: f64) -> f64 {
    r * LUMINANCE_WEIGHTS[0] + g * LUMINANCE_WEIGHTS[1] + b * LUMINANCE_WEIGHTS[2]
}

/// Reduce interleaved RGB samples in `[0, 1]` to a luminance field.
///
/// # Panics
/// Panics if `rgb.len() != width * height * 3`.
pub fn luminance_from_rgb(width: u32, height: u32, rgb: &[f64]) -> ScalarField {
    reduce(width, height, rgb, 3)
}

/// Reduce interleaved RGBA samples in `[0, 1]` to a luminance field.
///
/// Alpha does not contribute.
///
/// # Panics
/// Panics if `rgba.len() != width * height * 4`.
pub fn luminance_from_rgba(width: u32, height: u32, rgba: &[f64]) -> ScalarField {
    reduce(width, height, rgba, 4)
}

fn reduce(width: u32, height: u32, samples: &[f64], channels: usize) -> ScalarField {
    let pixels = width as usize * height as usize;
    assert_eq!(
        samples.len(),
        pixels * channels,
        "expected {} samples for {}x{} with {} channels",
        pixels * channels,
        width,
        height,
        channels
    );
    let data = samples
        .chunks_exact(channels)
        .map(|px| luminance(px[0], px[1], px[2]))
        .collect();
    ScalarField::from_data(width, height, data)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weights_are_applied() {
        let field = luminance_from_rgb(3, 1, &[1.0, 0.0, 0.0, 0.0, 1.0, 0.0, 0.0, 0.0, 1.0]);
        assert!((field.data[0] - 0.3).abs() < 1e-12);
        assert!((field.data[1] - 0.6).abs() < 1e-12);
        assert!((field.data[2] - 0.1).abs() < 1e-12);
    }

    #[test]
    fn gray_input_keeps_its_value() {
        let field = luminance_from_rgb(1, 1, &[0.5, 0.5, 0.5]);
        assert!((field.data[0] - 0.5).abs() < 1e-12);
    }

    #[test]
    fn alpha_is_ignored() {
        let opaque = luminance_from_rgba(1, 1, &[0.2, 0.4, 0.6, 1.0]);
        let clear = luminance_from_rgba(1, 1, &[0.2, 0.4, 0.6, 0.0]);
        assert_eq!(opaque, clear);
    }

    #[test]
    #[should_panic(expected = "samples")]
    fn wrong_sample_count_panics() {
        let _ = luminance_from_rgb(2, 2, &[0.0; 11]);
    }
}
