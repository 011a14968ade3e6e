//! Output module
//!
//! Expands edge masks back to RGBA and writes finished frames to disk.

mod expand;
mod writer;
mod tiff_writer;
mod raw_writer;
pub mod types;

pub use expand::expand_to_rgba;
pub use writer::FrameWriter;
pub use tiff_writer::TiffFrameWriter;
pub use raw_writer::RawRgbaWriter;
pub use types::{OutputConfig, OutputConfigBuilder, TiffCompression};
