//! Camera frame edge visualization.
//!
//! Takes a planar YUV 4:2:0 (I420) frame, converts it to RGBA and grayscale,
//! runs a Canny-style edge detector and hands back the edge mask as an RGBA
//! buffer ready for display.

pub mod image_pipeline;
pub mod logger;

pub use image_pipeline::{PipelineError, Result, process_frame};
