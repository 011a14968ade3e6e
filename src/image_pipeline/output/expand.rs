use crate::image_pipeline::color::RgbaImage;
use crate::image_pipeline::edge::EdgeMask;

/// Maps each mask value `m` to the opaque pixel `(m, m, m, 255)`.
pub fn expand_to_rgba(mask: &EdgeMask) -> Vec<u8> {
    let mut out = Vec::with_capacity(mask.as_bytes().len() * RgbaImage::CHANNELS);
    for &m in mask.as_bytes() {
        out.extend_from_slice(&[m, m, m, u8::MAX]);
    }
    out
}
