//! Normalgen CLI library.
//!
//! This crate provides the batch front end of the `normalgen` binary:
//! albedo discovery, output naming, image decoding and encoding, and the
//! post-processing applied to the maps computed by `normalgen-core`.

pub mod commands;
pub mod discover;
pub mod output;
pub mod paths;
pub mod postprocess;
pub mod resize;
