//! Decoding albedo inputs and encoding map outputs.

use anyhow::{bail, Context, Result};
use image::codecs::jpeg::JpegEncoder;
use image::ExtendedColorType;
use normalgen_core::png::{hash_bytes, PixelLayout};
use normalgen_core::{luminance_from_rgb, save_png, MapError, ScalarField};
use std::fs;
use std::path::Path;

/// JPEG quality used for `.jpg` outputs.
pub const JPEG_QUALITY: u8 = 95;

/// Image container of an output file, chosen by extension.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Png,
    Jpeg,
}

impl OutputFormat {
    /// Pick the format for `path` from its extension.
    pub fn from_path(path: &Path) -> Result<Self> {
        let ext = path
            .extension()
            .map(|e| e.to_string_lossy().to_ascii_lowercase())
            .unwrap_or_default();
        match ext.as_str() {
            "png" => Ok(OutputFormat::Png),
            "jpg" | "jpeg" => Ok(OutputFormat::Jpeg),
            _ => bail!("Unsupported output extension: {}", path.display()),
        }
    }
}

/// Decode an albedo image and reduce it to luminance.
pub fn load_luminance(path: &Path) -> Result<ScalarField> {
    let image = image::open(path)
        .with_context(|| format!("Failed to decode image: {}", path.display()))?
        .to_rgb32f();
    let (width, height) = image.dimensions();
    let samples: Vec<f64> = image.into_raw().into_iter().map(f64::from).collect();
    Ok(luminance_from_rgb(width, height, &samples))
}

/// Encode interleaved RGB bytes as JPEG.
pub fn encode_jpeg(rgb: &[u8], width: u32, height: u32) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    JpegEncoder::new_with_quality(&mut bytes, JPEG_QUALITY)
        .encode(rgb, width, height, ExtendedColorType::Rgb8)
        .context("Failed to encode JPEG")?;
    Ok(bytes)
}

/// Encode and write an RGB map in the format implied by `path`, returning
/// the BLAKE3 hash of the file.
pub fn write_rgb(path: &Path, rgb: &[u8], width: u32, height: u32) -> Result<String> {
    match OutputFormat::from_path(path)? {
        OutputFormat::Png => save_png(path, rgb, width, height, PixelLayout::Rgb)
            .with_context(|| format!("Failed to write output: {}", path.display())),
        OutputFormat::Jpeg => {
            let bytes = encode_jpeg(rgb, width, height)?;
            fs::write(path, &bytes)
                .with_context(|| format!("Failed to write output: {}", path.display()))?;
            Ok(hash_bytes(&bytes))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_format_from_path() {
        assert_eq!(
            OutputFormat::from_path(Path::new("a_normal.png")).unwrap(),
            OutputFormat::Png
        );
        assert_eq!(
            OutputFormat::from_path(Path::new("a_ao.JPG")).unwrap(),
            OutputFormat::Jpeg
        );
        assert!(OutputFormat::from_path(Path::new("a_ao.bmp")).is_err());
    }

    #[test]
    fn test_png_output_is_deterministic() {
        let tmp = tempfile::tempdir().unwrap();
        let rgb: Vec<u8> = (0..8 * 8 * 3).map(|i| (i % 251) as u8).collect();
        let a = write_rgb(&tmp.path().join("a.png"), &rgb, 8, 8).unwrap();
        let b = write_rgb(&tmp.path().join("b.png"), &rgb, 8, 8).unwrap();
        assert_eq!(a, b);
        assert_eq!(
            fs::read(tmp.path().join("a.png")).unwrap(),
            fs::read(tmp.path().join("b.png")).unwrap()
        );
    }

    #[test]
    fn test_luminance_round_trip_through_png() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("gray_albedo.png");
        let rgb = vec![51u8; 4 * 3 * 3];
        write_rgb(&path, &rgb, 4, 3).unwrap();

        let luminance = load_luminance(&path).unwrap();
        assert_eq!(luminance.dimensions(), (4, 3));
        for v in &luminance.data {
            assert!((v - 0.2).abs() < 1e-6);
        }
    }

    #[test]
    fn test_jpeg_output_decodes() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("map_ao.jpg");
        let rgb = vec![180u8; 16 * 16 * 3];
        let hash = write_rgb(&path, &rgb, 16, 16).unwrap();
        assert_eq!(hash.len(), 64);

        let decoded = image::open(&path).unwrap().to_rgb8();
        assert_eq!(decoded.dimensions(), (16, 16));
    }

    #[test]
    fn test_png_write_failure_keeps_map_error() {
        let tmp = tempfile::tempdir().unwrap();
        let path = tmp.path().join("missing").join("rock_normal.png");
        let err = write_rgb(&path, &[0u8; 12], 2, 2).unwrap_err();
        assert!(err.to_string().contains("rock_normal.png"));

        let map_err = err.downcast_ref::<MapError>().unwrap();
        assert_eq!(map_err.code(), "MAP_002");
        assert_eq!(map_err.category(), "io");
    }
}
