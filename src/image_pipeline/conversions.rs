//! Pipeline conversions module
//!
//! Orchestrates the stages into the per-frame transform and the file-level
//! converter built on top of it.

mod frame_processor;
mod file_converter;
pub mod types;


pub use frame_processor::{FrameProcessor, process_frame};
pub use file_converter::FrameFileConverter;
pub use types::{ProcessingConfig, ProcessingConfigBuilder};
