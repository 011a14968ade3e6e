use tracing::{debug, instrument};

use crate::image_pipeline::{
    color::{rgba_to_gray, yuv_to_rgba},
    common::{
        error::Result,
        timing::{PipelineTimings, Timer},
    },
    conversions::types::ProcessingConfig,
    edge::detect_edges,
    output::expand_to_rgba,
    yuv::wrap,
};

/// Converts one I420 camera frame into an RGBA edge visualization.
///
/// Holds no per-frame state; a single processor can be shared across
/// threads and called with independent buffers.
#[derive(Debug, Clone, Default)]
pub struct FrameProcessor {
    config: ProcessingConfig,
}

impl FrameProcessor {
    pub fn new(config: ProcessingConfig) -> Self {
        Self { config }
    }

    /// Runs the whole pipeline on `input`.
    ///
    /// `input` must hold `width * height * 3 / 2` bytes of I420 data with
    /// positive, even dimensions; anything else fails with
    /// [`PipelineError::InvalidInput`](crate::image_pipeline::PipelineError::InvalidInput)
    /// before any conversion work. On success the returned buffer holds
    /// `width * height * 4` bytes: opaque white for edges, opaque black
    /// elsewhere.
    #[instrument(skip(self, input), fields(input_size = input.len()))]
    pub fn process(&self, input: &[u8], width: i32, height: i32) -> Result<Vec<u8>> {
        let frame = {
            let _span = tracing::info_span!("wrap_input").entered();
            wrap(input, width, height)?
        };

        let rgba = {
            let _span = tracing::info_span!("yuv_to_rgba").entered();
            yuv_to_rgba(&frame)
        };

        let gray = {
            let _span = tracing::info_span!("rgba_to_gray").entered();
            rgba_to_gray(&rgba)
        };
        drop(rgba);

        let mask = {
            let _span = tracing::info_span!("detect_edges").entered();
            detect_edges(&gray, self.config.thresholds)
        };

        let output = {
            let _span = tracing::info_span!("expand_to_rgba").entered();
            expand_to_rgba(&mask)
        };

        debug!(
            width,
            height,
            edges = mask.edge_count(),
            "Frame processed"
        );
        Ok(output)
    }

    /// Same as [`process`](Self::process), also reporting how long each stage took.
    pub fn process_with_timings(
        &self,
        input: &[u8],
        width: i32,
        height: i32,
    ) -> Result<(Vec<u8>, PipelineTimings)> {
        let mut timings = PipelineTimings::new();

        let timer = Timer::start("wrap_input");
        let frame = wrap(input, width, height)?;
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("yuv_to_rgba");
        let rgba = yuv_to_rgba(&frame);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("rgba_to_gray");
        let gray = rgba_to_gray(&rgba);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("detect_edges");
        let mask = detect_edges(&gray, self.config.thresholds);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        let timer = Timer::start("expand_to_rgba");
        let output = expand_to_rgba(&mask);
        let (name, duration) = timer.stop();
        timings.add_step(name, duration);

        Ok((output, timings))
    }

    pub fn config(&self) -> &ProcessingConfig {
        &self.config
    }

    pub fn set_config(&mut self, config: ProcessingConfig) {
        self.config = config;
    }
}

/// Processes one frame with the default thresholds (80, 200).
pub fn process_frame(input: &[u8], width: i32, height: i32) -> Result<Vec<u8>> {
    FrameProcessor::default().process(input, width, height)
}
