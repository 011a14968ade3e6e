use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::yuv::types::PlanarYuvFrame;

/// Number of bytes an I420 frame of the given size occupies, or `None` if
/// the size overflows `usize`.
pub fn i420_len(width: usize, height: usize) -> Option<usize> {
    width.checked_mul(height)?.checked_mul(3).map(|n| n / 2)
}

/// Validates `buffer` as an I420 frame and returns a borrowed view over it.
///
/// Fails with [`PipelineError::InvalidInput`] when either dimension is not
/// positive, when either dimension is odd, or when the buffer length is not
/// `width * height * 3 / 2`. Nothing is copied.
pub fn wrap(buffer: &[u8], width: i32, height: i32) -> Result<PlanarYuvFrame<'_>> {
    if width <= 0 || height <= 0 {
        return Err(PipelineError::InvalidInput(format!(
            "dimensions must be positive, got {}x{}",
            width, height
        )));
    }
    if height % 2 != 0 {
        return Err(PipelineError::InvalidInput(format!(
            "height must be even for 4:2:0 chroma, got {}",
            height
        )));
    }
    if width % 2 != 0 {
        return Err(PipelineError::InvalidInput(format!(
            "width must be even for 4:2:0 chroma, got {}",
            width
        )));
    }

    let (width, height) = (width as usize, height as usize);
    let expected = i420_len(width, height).ok_or_else(|| {
        PipelineError::InvalidInput(format!("frame {}x{} is too large", width, height))
    })?;
    if buffer.len() != expected {
        return Err(PipelineError::InvalidInput(format!(
            "buffer holds {} bytes, a {}x{} I420 frame needs {}",
            buffer.len(),
            width,
            height,
            expected
        )));
    }

    debug!("Wrapped I420 frame {}x{} ({} bytes)", width, height, expected);
    Ok(PlanarYuvFrame::new_unchecked(buffer, width, height))
}
