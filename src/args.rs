use clap::Parser;
use std::path::PathBuf;
use yuv_edges::image_pipeline::TiffCompression;

/// Output container for the processed frame.
#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Copy)]
pub enum OutputFormat {
    /// RGBA8 TIFF image
    Tiff,
    /// Headerless RGBA bytes, width * height * 4
    Raw,
}

/// TIFF compression choices.
#[derive(clap::ValueEnum, Clone, Debug, PartialEq, Copy)]
pub enum CompressionSetting {
    None,
    Lzw,
    DeflateFast,
    DeflateBalanced,
    DeflateBest,
}

impl From<CompressionSetting> for TiffCompression {
    fn from(value: CompressionSetting) -> Self {
        match value {
            CompressionSetting::None => TiffCompression::None,
            CompressionSetting::Lzw => TiffCompression::Lzw,
            CompressionSetting::DeflateFast => TiffCompression::DeflateFast,
            CompressionSetting::DeflateBalanced => TiffCompression::DeflateBalanced,
            CompressionSetting::DeflateBest => TiffCompression::DeflateBest,
        }
    }
}

/// Runs edge detection over a raw I420 frame dump.
///
/// # Example
///
/// ```bash
/// yuv-edges frame.yuv edges.tiff --size 640 480
/// LOW_THRESHOLD=40 yuv-edges frame.yuv edges.rgba --size 640 480 --format raw
/// ```
#[derive(Parser, Debug, Clone)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Raw I420 input file (Y plane, then U, then V)
    pub input: PathBuf,

    /// Destination for the edge visualization
    pub output: PathBuf,

    /// Frame size in pixels (width height)
    #[arg(
        long,
        env = "FRAME_SIZE",
        default_value = "640 480",
        value_delimiter = ' ',
        num_args = 2
    )]
    pub size: Vec<i32>,

    /// Lower hysteresis threshold
    #[arg(long, env = "LOW_THRESHOLD", default_value = "80")]
    pub low: u32,

    /// Upper hysteresis threshold
    #[arg(long, env = "HIGH_THRESHOLD", default_value = "200")]
    pub high: u32,

    /// Output format
    #[arg(long, default_value = "tiff", value_enum)]
    pub format: OutputFormat,

    /// TIFF compression
    #[arg(long, default_value = "none", value_enum)]
    pub compression: CompressionSetting,

    /// Enable horizontal differencing predictor for compressed TIFF output
    #[arg(long)]
    pub predictor: bool,

    /// Print per-stage timings after conversion
    #[arg(long)]
    pub timings: bool,
}

impl Args {
    /// `(width, height)` from `--size`. The value count is only enforced by
    /// clap on the command line, so `FRAME_SIZE` is checked here.
    pub fn frame_size(&self) -> anyhow::Result<(i32, i32)> {
        match self.size.as_slice() {
            &[width, height] => Ok((width, height)),
            other => anyhow::bail!(
                "frame size needs exactly two values (width height), got {:?}",
                other
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_frame_size_from_flag() {
        let args = Args::try_parse_from(["yuv-edges", "in.yuv", "out.tiff", "--size", "320", "240"]).unwrap();
        assert_eq!(args.frame_size().unwrap(), (320, 240));
    }

    #[test]
    fn test_frame_size_wrong_count_is_error() {
        let mut args = Args::try_parse_from(["yuv-edges", "in.yuv", "out.tiff"]).unwrap();

        // What a single-value FRAME_SIZE=4 parses to.
        args.size = vec![4];
        let err = args.frame_size().unwrap_err();
        assert!(err.to_string().contains("[4]"), "{err}");

        args.size = vec![4, 2, 2];
        assert!(args.frame_size().is_err());

        args.size = Vec::new();
        assert!(args.frame_size().is_err());
    }
}
