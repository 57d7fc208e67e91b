//! Optional output resizing.

use anyhow::{Context, Result};
use image::imageops::{self, FilterType};
use image::RgbImage;

/// Requested output size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResizeTarget {
    /// Keep the source dimensions.
    Original,
    /// Scale so that the plan width equals this size.
    Size(u32),
}

impl ResizeTarget {
    /// Interpret the `--size` argument; zero or negative keeps the original size.
    pub fn from_size(size: i64) -> Self {
        if size <= 0 {
            ResizeTarget::Original
        } else {
            ResizeTarget::Size(u32::try_from(size).unwrap_or(u32::MAX))
        }
    }
}

/// Dimensions computed for one resize.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ResizePlan {
    /// `size`.
    pub new_width: u32,
    /// `trunc(size * width / height)`, at least 1.
    pub new_height: u32,
}

impl ResizePlan {
    /// Plan a resize of a `width` x `height` image to `size`.
    pub fn for_image(size: u32, width: u32, height: u32) -> Self {
        let ratio = width as f64 / height as f64;
        let new_height = (size as f64 * ratio).trunc() as u32;
        Self {
            new_width: size,
            new_height: new_height.max(1),
        }
    }

    /// Dimensions handed to the resampler, as `(width, height)`.
    ///
    /// The pair is swapped relative to the plan: the resampled image is
    /// `new_height` pixels wide and `new_width` pixels tall.
    pub fn resample_dimensions(&self) -> (u32, u32) {
        (self.new_height, self.new_width)
    }
}

/// Resize interleaved RGB bytes according to `target`.
///
/// Returns the (possibly unchanged) bytes with their width and height.
pub fn resize_rgb(
    rgb: Vec<u8>,
    width: u32,
    height: u32,
    target: ResizeTarget,
) -> Result<(Vec<u8>, u32, u32)> {
    let size = match target {
        ResizeTarget::Original => return Ok((rgb, width, height)),
        ResizeTarget::Size(size) => size,
    };

    let image = RgbImage::from_raw(width, height, rgb)
        .with_context(|| format!("Pixel buffer does not match {}x{}", width, height))?;
    let (out_width, out_height) = ResizePlan::for_image(size, width, height).resample_dimensions();
    let resized = imageops::resize(&image, out_width, out_height, FilterType::Triangle);
    Ok((resized.into_raw(), out_width, out_height))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_from_size() {
        assert_eq!(ResizeTarget::from_size(-1), ResizeTarget::Original);
        assert_eq!(ResizeTarget::from_size(0), ResizeTarget::Original);
        assert_eq!(ResizeTarget::from_size(512), ResizeTarget::Size(512));
    }

    #[test]
    fn test_plan_for_wide_image() {
        let plan = ResizePlan::for_image(32, 100, 50);
        assert_eq!(
            plan,
            ResizePlan {
                new_width: 32,
                new_height: 64
            }
        );
        assert_eq!(plan.resample_dimensions(), (64, 32));
    }

    #[test]
    fn test_plan_truncates() {
        let plan = ResizePlan::for_image(10, 3, 4);
        assert_eq!(plan.new_height, 7);
    }

    #[test]
    fn test_resize_original_is_passthrough() {
        let rgb = vec![7u8; 4 * 2 * 3];
        let (out, w, h) = resize_rgb(rgb.clone(), 4, 2, ResizeTarget::Original).unwrap();
        assert_eq!((w, h), (4, 2));
        assert_eq!(out, rgb);
    }

    #[test]
    fn test_resize_uses_swapped_dimensions() {
        let rgb = vec![200u8; 100 * 50 * 3];
        let (out, w, h) = resize_rgb(rgb, 100, 50, ResizeTarget::Size(32)).unwrap();
        assert_eq!((w, h), (64, 32));
        assert_eq!(out.len(), 64 * 32 * 3);
        assert!(out.iter().all(|v| v.abs_diff(200) <= 1));
    }

    #[test]
    fn test_resize_rejects_short_buffer() {
        assert!(resize_rgb(vec![0u8; 5], 4, 4, ResizeTarget::Size(2)).is_err());
    }
}
