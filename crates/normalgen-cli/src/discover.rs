//! Albedo discovery for batch conversion.

use anyhow::{bail, Result};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

use crate::paths::is_albedo;

/// Collect the albedo textures named by `input`.
///
/// A folder yields every `*_albedo.png|jpg` directly inside it, or at any
/// depth with `recursive`. A file yields itself. Results are sorted.
pub fn discover(input: &Path, recursive: bool) -> Result<Vec<PathBuf>> {
    if !input.exists() {
        bail!("Input does not exist: {}", input.display());
    }

    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let mut walker = WalkDir::new(input).min_depth(1);
    if !recursive {
        walker = walker.max_depth(1);
    }

    let mut files: Vec<PathBuf> = walker
        .into_iter()
        .filter_map(|e| e.ok())
        .filter(|e| e.file_type().is_file() && is_albedo(e.path()))
        .map(|e| e.into_path())
        .collect();

    // Sort for deterministic order
    files.sort();
    Ok(files)
}
