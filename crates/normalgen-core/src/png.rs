//! Deterministic PNG writer.
//!
//! Uses fixed compression settings so that identical pixel data always
//! encodes to identical bytes, and therefore to an identical BLAKE3 hash.

use std::io::Write;

use png::{BitDepth, ColorType, Compression, Encoder, FilterType};
use thiserror::Error;

/// Errors from PNG operations.
#[derive(Debug, Error)]
pub enum PngError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("PNG encoding error: {0}")]
    Encoding(#[from] png::EncodingError),

    #[error("Invalid dimensions: {0}")]
    InvalidDimensions(String),
}

/// PNG export configuration.
#[derive(Debug, Clone)]
pub struct PngConfig {
    /// Compression level.
    pub compression: Compression,
    /// Row filter.
    pub filter: FilterType,
}

impl Default for PngConfig {
    fn default() -> Self {
        Self {
            compression: Compression::Default,
            filter: FilterType::NoFilter,
        }
    }
}

impl PngConfig {
    /// Faster encode, larger files.
    pub fn fast() -> Self {
        Self {
            compression: Compression::Fast,
            filter: FilterType::NoFilter,
        }
    }
}

/// Pixel layout of raw 8-bit data handed to the writer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PixelLayout {
    /// One byte per pixel.
    Gray,
    /// Three bytes per pixel.
    Rgb,
}

impl PixelLayout {
    fn channels(self) -> usize {
        match self {
            PixelLayout::Gray => 1,
            PixelLayout::Rgb => 3,
        }
    }

    fn color_type(self) -> ColorType {
        match self {
            PixelLayout::Gray => ColorType::Grayscale,
            PixelLayout::Rgb => ColorType::Rgb,
        }
    }
}

/// Encode raw 8-bit pixels to any writer.
pub fn write_to_writer<W: Write>(
    data: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    writer: W,
    config: &PngConfig,
) -> Result<(), PngError> {
    let expected = width as usize * height as usize * layout.channels();
    if data.len() != expected {
        return Err(PngError::InvalidDimensions(format!(
            "Expected {} bytes for {}x{} {:?}, got {}",
            expected,
            width,
            height,
            layout,
            data.len()
        )));
    }

    let mut encoder = Encoder::new(writer, width, height);
    encoder.set_color(layout.color_type());
    encoder.set_depth(BitDepth::Eight);
    encoder.set_compression(config.compression);
    encoder.set_filter(config.filter);

    let mut png_writer = encoder.write_header()?;
    png_writer.write_image_data(data)?;

    Ok(())
}

/// Compute the BLAKE3 hash of encoded data.
pub fn hash_bytes(data: &[u8]) -> String {
    blake3::hash(data).to_hex().to_string()
}

/// Encode to a `Vec<u8>` and return it with its hash.
pub fn encode_with_hash(
    data: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
    config: &PngConfig,
) -> Result<(Vec<u8>, String), PngError> {
    let mut out = Vec::new();
    write_to_writer(data, width, height, layout, &mut out, config)?;
    let hash = hash_bytes(&out);
    Ok((out, hash))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn gradient_rgb(width: u32, height: u32) -> Vec<u8> {
        let mut data = Vec::new();
        for y in 0..height {
            for x in 0..width {
                data.extend_from_slice(&[(x * 4) as u8, (y * 4) as u8, 128]);
            }
        }
        data
    }

    #[test]
    fn test_rgb_deterministic() {
        let data = gradient_rgb(64, 64);
        let config = PngConfig::default();

        let (data1, hash1) = encode_with_hash(&data, 64, 64, PixelLayout::Rgb, &config).unwrap();
        let (data2, hash2) = encode_with_hash(&data, 64, 64, PixelLayout::Rgb, &config).unwrap();

        assert_eq!(data1, data2, "PNG data should be identical");
        assert_eq!(hash1, hash2, "PNG hashes should be identical");
    }

    #[test]
    fn test_gray_has_png_signature() {
        let data = vec![200u8; 16 * 8];
        let (png, hash) =
            encode_with_hash(&data, 16, 8, PixelLayout::Gray, &PngConfig::fast()).unwrap();
        assert_eq!(&png[..8], &[0x89, b'P', b'N', b'G', 0x0D, 0x0A, 0x1A, 0x0A]);
        assert_eq!(hash.len(), 64);
    }

    #[test]
    fn test_wrong_length_rejected() {
        let err = encode_with_hash(&[0u8; 10], 2, 2, PixelLayout::Rgb, &PngConfig::default())
            .unwrap_err();
        assert!(matches!(err, PngError::InvalidDimensions(_)));
    }
}
