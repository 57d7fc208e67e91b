//! Error types for map generation.

use thiserror::Error;

use crate::kernel::MAX_GAUSSIAN_SIGMA;
use crate::png::PngError;

/// Invalid pipeline parameters, rejected before any numeric stage runs.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ParamError {
    #[error("sigma must be in [0, {max}], got {0}", max = MAX_GAUSSIAN_SIGMA)]
    InvalidSigma(f64),

    #[error("intensity must be finite and > 0, got {0}")]
    InvalidIntensity(f64),

    #[error("resolution must be non-zero, got {width}x{height}")]
    InvalidResolution { width: u32, height: u32 },
}

impl ParamError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            ParamError::InvalidSigma(_) => "PARAM_001",
            ParamError::InvalidIntensity(_) => "PARAM_002",
            ParamError::InvalidResolution { .. } => "PARAM_003",
        }
    }
}

/// Errors from map generation and encoding.
#[derive(Debug, Error)]
pub enum MapError {
    #[error("Invalid parameter: {0}")]
    InvalidParameter(#[from] ParamError),

    #[error("PNG error: {0}")]
    Png(#[from] PngError),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl MapError {
    /// Stable machine-readable code.
    pub fn code(&self) -> &'static str {
        match self {
            MapError::InvalidParameter(e) => e.code(),
            MapError::Png(_) => "MAP_001",
            MapError::Io(_) => "MAP_002",
        }
    }

    /// Error category, for grouping in reports.
    pub fn category(&self) -> &'static str {
        match self {
            MapError::InvalidParameter(_) => "parameter",
            MapError::Png(_) | MapError::Io(_) => "io",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn codes_are_stable() {
        assert_eq!(ParamError::InvalidSigma(-1.0).code(), "PARAM_001");
        let err: MapError = ParamError::InvalidIntensity(0.0).into();
        assert_eq!(err.code(), "PARAM_002");
        assert_eq!(err.category(), "parameter");
        assert!(err.to_string().contains("intensity"));
    }
}
