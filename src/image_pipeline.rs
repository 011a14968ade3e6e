//! Frame processing pipeline module
//!
//! Each stage lives in its own module: planar YUV input views, color
//! conversion, edge detection and RGBA output. The `conversions` module
//! strings them together.

pub mod common;
pub mod yuv;
pub mod color;
pub mod edge;
pub mod output;
pub mod conversions;

pub use common::{
    PipelineError,
    Result,
    PipelineTimings,
    StepTiming,
    Timer,
};

pub use yuv::{
    Plane,
    PlanarYuvFrame,
    wrap,
};

pub use color::{
    GrayImage,
    RgbaImage,
    rgba_to_gray,
    yuv_to_rgba,
};

pub use edge::{
    EdgeMask,
    EdgeThresholds,
    detect_edges,
};

pub use output::{
    expand_to_rgba,
    OutputConfig,
    OutputConfigBuilder,
    TiffCompression,
    FrameWriter,
    TiffFrameWriter,
    RawRgbaWriter,
};

pub use conversions::{
    FrameFileConverter,
    FrameProcessor,
    ProcessingConfig,
    ProcessingConfigBuilder,
    process_frame,
};
