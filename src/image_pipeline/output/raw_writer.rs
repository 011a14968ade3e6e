use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::color::RgbaImage;
use crate::image_pipeline::output::types::OutputConfig;
use crate::image_pipeline::output::writer::FrameWriter;

/// Writes the interleaved RGBA bytes with no header, exactly as the
/// in-memory pipeline returns them.
pub struct RawRgbaWriter;

impl FrameWriter for RawRgbaWriter {
    fn write_frame(&self, image: &RgbaImage, output: &mut dyn Write, _config: &OutputConfig) -> Result<()> {
        debug!("Writing raw RGBA frame: {}x{}", image.width(), image.height());
        output.write_all(image.as_bytes())?;
        Ok(())
    }
}
