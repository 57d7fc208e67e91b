//! Normalgen Core
//!
//! Derives a tangent-space normal map and an ambient occlusion map from the
//! luminance of an albedo texture.
//!
//! # Features
//!
//! - **Convolution**: separable and 2D correlation with selectable boundary handling
//! - **Smoothing**: Gaussian smoothing and repeated box blur
//! - **Gradients**: Sobel and central-difference operators
//! - **Normal maps**: intensity-controlled normal synthesis packed to `[0, 1]`
//! - **AO maps**: multi-scale blur-difference occlusion with an asymmetric clip
//! - **Deterministic PNG**: fixed compression settings for byte-identical output
//!
//! # Example
//!
//! ```
//! use normalgen_core::{convert_ao_map, convert_normal_map, luminance_from_rgb, PipelineParams};
//!
//! let rgb = vec![0.5; 16 * 16 * 3];
//! let luminance = luminance_from_rgb(16, 16, &rgb);
//!
//! let normal = convert_normal_map(&luminance, &PipelineParams::default()).unwrap();
//! assert_eq!(normal.get(3, 3), [0.5, 0.5, 1.0]);
//!
//! let ao = convert_ao_map(&luminance).unwrap();
//! assert_eq!(ao.to_gray8_autoscaled().len(), 16 * 16);
//! ```
//!
//! # Determinism
//!
//! Every stage is a pure function of its inputs. No stage draws randomness or
//! depends on thread scheduling, so the same albedo and parameters always yield
//! the same bytes.

pub mod convolve;
pub mod error;
pub mod field;
pub mod gradient;
pub mod kernel;
pub mod luminance;
pub mod normal_map;
pub mod occlusion;
pub mod pipeline;
pub mod png;
pub mod smooth;

// Re-export main types for convenience
pub use convolve::{convolve_2d, convolve_separable, BoundaryMode};
pub use error::{MapError, ParamError};
pub use field::{NormalMap, ScalarField};
pub use gradient::{central_difference_gradient, sobel_gradient, Gradient, GradientOperator};
pub use kernel::{Kernel1D, Kernel2D};
pub use luminance::{luminance_from_rgb, luminance_from_rgba};
pub use normal_map::{build_normal_map, FLAT_NORMAL};
pub use occlusion::build_occlusion_map;
pub use pipeline::{convert_ao_map, convert_normal_map, save_png, MapKind, PipelineParams};
pub use png::{PixelLayout, PngConfig, PngError};
pub use smooth::{box_blur, repeated_box_blur, smooth_gaussian};
