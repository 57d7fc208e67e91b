//! Input classification and output naming.

use std::path::{Path, PathBuf};

use normalgen_core::MapKind;

/// Stem suffix that marks an albedo texture.
pub const ALBEDO_SUFFIX: &str = "_albedo";

/// Extensions accepted as albedo input.
pub const ALBEDO_EXTENSIONS: &[&str] = &["png", "jpg"];

/// True if `path` names an albedo texture (`*_albedo.png` or `*_albedo.jpg`).
pub fn is_albedo(path: &Path) -> bool {
    let Some(stem) = path.file_stem().map(|s| s.to_string_lossy()) else {
        return false;
    };
    let ext_ok = path
        .extension()
        .is_some_and(|ext| ALBEDO_EXTENSIONS.iter().any(|e| ext == *e));
    ext_ok && stem.ends_with(ALBEDO_SUFFIX)
}

/// Base name shared by all maps of one texture: the stem minus `_albedo`.
pub fn base_name(path: &Path) -> String {
    let stem = path
        .file_stem()
        .map(|s| s.to_string_lossy().into_owned())
        .unwrap_or_default();
    match stem.strip_suffix(ALBEDO_SUFFIX) {
        Some(base) => base.to_string(),
        None => stem,
    }
}

/// Output path for one map kind: `<dir>/<base>_<kind>.<ext>`.
///
/// The extension is carried over from the input, so a JPEG albedo yields
/// JPEG maps.
pub fn output_path(input: &Path, kind: MapKind) -> PathBuf {
    let mut name = format!("{}_{}", base_name(input), kind.suffix());
    if let Some(ext) = input.extension() {
        name.push('.');
        name.push_str(&ext.to_string_lossy());
    }
    match input.parent() {
        Some(dir) => dir.join(name),
        None => PathBuf::from(name),
    }
}
