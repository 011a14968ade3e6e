use std::io::Write;
use tracing::debug;
use crate::image_pipeline::common::error::{Result, PipelineError};
use crate::image_pipeline::color::RgbaImage;
use crate::image_pipeline::output::types::{OutputConfig, TiffCompression};
use crate::image_pipeline::output::writer::FrameWriter;

pub struct TiffFrameWriter;

impl FrameWriter for TiffFrameWriter {
    fn write_frame(&self, image: &RgbaImage, output: &mut dyn Write, config: &OutputConfig) -> Result<()> {
        debug!("Encoding RGBA TIFF image: {}x{}", image.width(), image.height());

        let width = u32::try_from(image.width())
            .map_err(|_| PipelineError::EncodeError(format!("width {} exceeds TIFF limits", image.width())))?;
        let height = u32::try_from(image.height())
            .map_err(|_| PipelineError::EncodeError(format!("height {} exceeds TIFF limits", image.height())))?;

        let mut buffer = Vec::new();

        let compression = match config.compression {
            TiffCompression::None => tiff::encoder::Compression::Uncompressed,
            TiffCompression::Lzw => tiff::encoder::Compression::Lzw,
            TiffCompression::DeflateFast => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Fast),
            TiffCompression::DeflateBalanced => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Balanced),
            TiffCompression::DeflateBest => tiff::encoder::Compression::Deflate(tiff::encoder::compression::DeflateLevel::Best),
        };

        let mut encoder = tiff::encoder::TiffEncoder::new(std::io::Cursor::new(&mut buffer))
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(compression);

        if let Some(predictor_val) = config.predictor {
            let predictor = match predictor_val {
                2 => tiff::tags::Predictor::Horizontal,
                _ => tiff::tags::Predictor::None,
            };
            encoder = encoder.with_predictor(predictor);
        }

        encoder.write_image::<tiff::encoder::colortype::RGBA8>(
            width,
            height,
            image.as_bytes(),
        ).map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF encoding complete ({} bytes)", buffer.len());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn checkerboard(width: usize, height: usize) -> RgbaImage {
        let data = (0..width * height)
            .flat_map(|i| {
                let v = if (i % width + i / width) % 2 == 0 { 0 } else { 255 };
                [v, v, v, 255]
            })
            .collect();
        RgbaImage::from_raw(width, height, data).unwrap()
    }

    fn decode(bytes: &[u8]) -> (u32, u32, Vec<u8>) {
        let mut decoder = tiff::decoder::Decoder::new(std::io::Cursor::new(bytes)).unwrap();
        let (w, h) = decoder.dimensions().unwrap();
        match decoder.read_image().unwrap() {
            tiff::decoder::DecodingResult::U8(data) => (w, h, data),
            other => panic!("unexpected sample type: {:?}", std::mem::discriminant(&other)),
        }
    }

    #[test]
    fn test_uncompressed_roundtrip() {
        let image = checkerboard(6, 4);
        let mut out = Vec::new();
        TiffFrameWriter.write_frame(&image, &mut out, &OutputConfig::default()).unwrap();

        let (w, h, data) = decode(&out);
        assert_eq!((w, h), (6, 4));
        assert_eq!(data, image.as_bytes());
    }

    #[test]
    fn test_compressed_with_predictor_decodes() {
        let image = checkerboard(16, 8);
        let config = OutputConfig::builder()
            .compression(TiffCompression::Lzw)
            .predictor(Some(2))
            .build();
        let mut out = Vec::new();
        TiffFrameWriter.write_frame(&image, &mut out, &config).unwrap();

        let (_, _, data) = decode(&out);
        assert_eq!(data, image.as_bytes());
    }
}
