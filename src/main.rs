mod args;

use anyhow::Context;
use clap::Parser;
use yuv_edges::image_pipeline::{
    FrameFileConverter, FrameWriter, OutputConfig, PipelineTimings, ProcessingConfig,
    RawRgbaWriter, TiffFrameWriter,
};
use yuv_edges::logger;

use args::{Args, OutputFormat};
use tracing::info;

fn run<W: FrameWriter>(
    converter: FrameFileConverter<W>,
    args: &Args,
    (width, height): (i32, i32),
) -> anyhow::Result<Option<PipelineTimings>> {
    if args.timings {
        let timings = converter.convert_file_with_timings(&args.input, &args.output, width, height)?;
        Ok(Some(timings))
    } else {
        converter.convert_file(&args.input, &args.output, width, height)?;
        Ok(None)
    }
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    logger::init();

    info!("Starting yuv-edges...");

    let size = args.frame_size()?;

    let config = ProcessingConfig::builder()
        .low_threshold(args.low)
        .high_threshold(args.high)
        .build();
    let output_config = OutputConfig::builder()
        .compression(args.compression.into())
        .predictor(args.predictor.then_some(2))
        .build();

    info!("Frame size: {}x{}", size.0, size.1);
    info!(
        "Thresholds: low={} high={}",
        config.thresholds.low(),
        config.thresholds.high()
    );
    info!("Output format: {:?}", args.format);

    let timings = match args.format {
        OutputFormat::Tiff => run(FrameFileConverter::<TiffFrameWriter>::new(config, output_config), &args, size),
        OutputFormat::Raw => run(FrameFileConverter::with_custom(RawRgbaWriter, config, output_config), &args, size),
    }
    .with_context(|| format!("converting {}", args.input.display()))?;

    info!("Conversion successful!");
    if let Some(timings) = timings {
        println!("{}", timings.summary());
    }

    Ok(())
}
