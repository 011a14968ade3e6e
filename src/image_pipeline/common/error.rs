use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// The frame buffer does not describe a valid I420 image. This is the
    /// only failure `process_frame` can report.
    #[error("Invalid input frame: {0}")]
    InvalidInput(String),

    #[error("Failed to read input file: {0}")]
    InputReadError(String),

    #[error("Failed to write output file: {0}")]
    OutputWriteError(String),

    #[error("Failed to encode output image: {0}")]
    EncodeError(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

impl PipelineError {
    pub fn is_invalid_input(&self) -> bool {
        matches!(self, PipelineError::InvalidInput(_))
    }
}

pub type Result<T> = std::result::Result<T, PipelineError>;
