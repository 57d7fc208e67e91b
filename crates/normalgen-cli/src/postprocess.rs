//! Byte-level post-processing of encoded maps.

/// AO values below this threshold are lifted into `[100, 255)`.
pub const AO_TINT_THRESHOLD: u8 = 180;

/// Floor of the lifted AO range.
pub const AO_TINT_FLOOR: u8 = 100;

/// Invert the green channel of interleaved RGB bytes in place.
///
/// Converts between the +Y and -Y normal map conventions.
pub fn flip_green(rgb: &mut [u8]) {
    for px in rgb.chunks_exact_mut(3) {
        px[1] = 255 - px[1];
    }
}

/// Tint one AO byte: values below the threshold are compressed into
/// `[100, 255)`, values at or above it saturate to white.
#[inline]
pub fn tint_ao(v: u8) -> u8 {
    if v < AO_TINT_THRESHOLD {
        let lifted = AO_TINT_FLOOR as u32 + v as u32 * 155 / AO_TINT_THRESHOLD as u32;
        lifted as u8
    } else {
        255
    }
}

/// Tint 8-bit AO gray values and replicate them to interleaved RGB.
pub fn colorize_ao(gray: &[u8]) -> Vec<u8> {
    let mut rgb = Vec::with_capacity(gray.len() * 3);
    for &v in gray {
        let t = tint_ao(v);
        rgb.extend_from_slice(&[t, t, t]);
    }
    rgb
}
