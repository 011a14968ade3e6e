use std::io::Write;
use crate::image_pipeline::common::error::Result;
use crate::image_pipeline::color::RgbaImage;
use crate::image_pipeline::output::types::OutputConfig;

pub trait FrameWriter {
    fn write_frame(&self, image: &RgbaImage, output: &mut dyn Write, config: &OutputConfig) -> Result<()>;
}
