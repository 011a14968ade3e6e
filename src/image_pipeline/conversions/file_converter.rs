use tracing::{info, instrument};
use std::io::Write;
use std::path::Path;

use crate::image_pipeline::{
    color::RgbaImage,
    common::{
        error::{PipelineError, Result},
        timing::{PipelineTimings, Timer},
    },
    conversions::{frame_processor::FrameProcessor, types::ProcessingConfig},
    output::{FrameWriter, OutputConfig, TiffFrameWriter},
};

/// Reads raw I420 frames from disk and writes the edge visualization back.
pub struct FrameFileConverter<W: FrameWriter> {
    processor: FrameProcessor,
    writer: W,
    output_config: OutputConfig,
}

impl FrameFileConverter<TiffFrameWriter> {
    pub fn new(config: ProcessingConfig, output_config: OutputConfig) -> Self {
        Self {
            processor: FrameProcessor::new(config),
            writer: TiffFrameWriter,
            output_config,
        }
    }
}

impl<W: FrameWriter> FrameFileConverter<W> {
    pub fn with_custom(writer: W, config: ProcessingConfig, output_config: OutputConfig) -> Self {
        Self {
            processor: FrameProcessor::new(config),
            writer,
            output_config,
        }
    }

    fn emit(&self, rgba: Vec<u8>, width: i32, height: i32, output: &mut dyn Write) -> Result<()> {
        // `rgba` came out of a successful `process`, so both dimensions are positive.
        let image = RgbaImage::new(width as usize, height as usize, rgba);
        let _span = tracing::info_span!("write_output").entered();
        self.writer.write_frame(&image, output, &self.output_config)
    }

    #[instrument(skip(self, input_data, output), fields(input_size = input_data.len()))]
    pub fn convert(&self, input_data: &[u8], width: i32, height: i32, output: &mut dyn Write) -> Result<()> {
        let rgba = self.processor.process(input_data, width, height)?;
        self.emit(rgba, width, height, output)?;

        info!(width, height, "Conversion complete");
        Ok(())
    }

    fn read_input(path: &Path) -> Result<Vec<u8>> {
        std::fs::read(path).map_err(|e| {
            PipelineError::InputReadError(format!("{}: {}", path.display(), e))
        })
    }

    fn create_output(path: &Path) -> Result<std::fs::File> {
        std::fs::File::create(path).map_err(|e| {
            PipelineError::OutputWriteError(format!("{}: {}", path.display(), e))
        })
    }

    /// Processes `input_path` and writes the result to `output_path`.
    ///
    /// The output file is only created once the frame has been processed, so
    /// an invalid input leaves nothing behind.
    #[instrument(skip(self, input_path, output_path))]
    pub fn convert_file<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        width: i32,
        height: i32,
    ) -> Result<()> {
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        info!(
            input = %input_path.display(),
            output = %output_path.display(),
            "Converting file"
        );

        let input_data = {
            let _span = tracing::info_span!("read_input_file").entered();
            Self::read_input(input_path)?
        };

        let rgba = self.processor.process(&input_data, width, height)?;

        let mut output_file = {
            let _span = tracing::info_span!("create_output_file").entered();
            Self::create_output(output_path)?
        };

        self.emit(rgba, width, height, &mut output_file)?;
        Ok(())
    }

    pub fn convert_file_with_timings<P: AsRef<Path>, Q: AsRef<Path>>(
        &self,
        input_path: P,
        output_path: Q,
        width: i32,
        height: i32,
    ) -> Result<PipelineTimings> {
        let mut timings = PipelineTimings::new();
        let input_path = input_path.as_ref();
        let output_path = output_path.as_ref();

        let timer = Timer::start("read_input_file");
        let input_data = Self::read_input(input_path)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let (rgba, frame_timings) = self.processor.process_with_timings(&input_data, width, height)?;
        for step in frame_timings.steps() {
            timings.add_step(step.name.clone(), step.duration);
        }

        let timer = Timer::start("write_output_file");
        let mut output_file = Self::create_output(output_path)?;
        self.emit(rgba, width, height, &mut output_file)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok(timings)
    }

    pub fn processor(&self) -> &FrameProcessor {
        &self.processor
    }

    pub fn output_config(&self) -> &OutputConfig {
        &self.output_config
    }
}
