//! Pipeline orchestration: one path per output map.
//!
//! ```text
//! luminance -> smooth(sigma) -> sobel -> normal synthesis   (normal map)
//! luminance -> four box-blur scales -> occlusion synthesis  (AO map)
//! ```

use std::fs;
use std::path::Path;

use crate::error::{MapError, ParamError};
use crate::field::{NormalMap, ScalarField};
use crate::gradient::sobel_gradient;
use crate::kernel::MAX_GAUSSIAN_SIGMA;
use crate::normal_map::normal_map_from_gradient;
use crate::occlusion::build_occlusion_map;
use crate::png::{encode_with_hash, PixelLayout, PngConfig};
use crate::smooth::smooth_gaussian;

/// Which auxiliary map to derive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MapKind {
    /// Tangent-space normal map.
    Normal,
    /// Ambient occlusion map.
    Ao,
}

impl MapKind {
    /// All map kinds in conversion order.
    pub const ALL: [MapKind; 2] = [MapKind::Normal, MapKind::Ao];

    /// Name used in output file names (`<stem>_<suffix>.<ext>`).
    pub fn suffix(self) -> &'static str {
        match self {
            MapKind::Normal => "normal",
            MapKind::Ao => "ao",
        }
    }
}

impl std::fmt::Display for MapKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.suffix())
    }
}

/// Tunables of the normal-map path.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PipelineParams {
    /// Gaussian smoothing sigma; `0` disables smoothing.
    pub sigma: f64,
    /// Bump intensity; must be positive.
    pub intensity: f64,
}

impl Default for PipelineParams {
    fn default() -> Self {
        Self {
            sigma: 0.0,
            intensity: 1.0,
        }
    }
}

impl PipelineParams {
    /// Set the smoothing sigma.
    pub fn with_sigma(mut self, sigma: f64) -> Self {
        self.sigma = sigma;
        self
    }

    /// Set the bump intensity.
    pub fn with_intensity(mut self, intensity: f64) -> Self {
        self.intensity = intensity;
        self
    }

    /// Reject parameters the numeric stages cannot handle.
    pub fn validate(&self) -> Result<(), ParamError> {
        if !(0.0..=MAX_GAUSSIAN_SIGMA).contains(&self.sigma) {
            return Err(ParamError::InvalidSigma(self.sigma));
        }
        if !self.intensity.is_finite() || self.intensity <= 0.0 {
            return Err(ParamError::InvalidIntensity(self.intensity));
        }
        Ok(())
    }
}

fn validate_resolution(field: &ScalarField) -> Result<(), ParamError> {
    if field.width == 0 || field.height == 0 {
        return Err(ParamError::InvalidResolution {
            width: field.width,
            height: field.height,
        });
    }
    Ok(())
}

/// Derive the packed normal map of a luminance field.
pub fn convert_normal_map(
    luminance: &ScalarField,
    params: &PipelineParams,
) -> Result<NormalMap, MapError> {
    params.validate()?;
    validate_resolution(luminance)?;

    let smoothed = smooth_gaussian(luminance, params.sigma);
    let gradient = sobel_gradient(&smoothed);
    Ok(normal_map_from_gradient(&gradient, params.intensity))
}

/// Derive the occlusion field of a luminance field.
pub fn convert_ao_map(luminance: &ScalarField) -> Result<ScalarField, MapError> {
    validate_resolution(luminance)?;
    Ok(build_occlusion_map(luminance))
}

/// Encode 8-bit pixels as a deterministic PNG at `path`, returning the
/// BLAKE3 hash of the written bytes.
pub fn save_png(
    path: &Path,
    data: &[u8],
    width: u32,
    height: u32,
    layout: PixelLayout,
) -> Result<String, MapError> {
    let (bytes, hash) = encode_with_hash(data, width, height, layout, &PngConfig::default())?;
    fs::write(path, &bytes)?;
    Ok(hash)
}
