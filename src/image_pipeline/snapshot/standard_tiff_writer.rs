use std::io::{Cursor, Write};

use tiff::encoder::colortype::RGB8;
use tiff::encoder::compression::DeflateLevel;
use tiff::encoder::{Compression, TiffEncoder};
use tiff::tags::Predictor;
use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::common::frame::ArgbFrame;
use crate::image_pipeline::snapshot::types::{SnapshotConfig, TiffCompression};
use crate::image_pipeline::snapshot::writer::SnapshotWriter;

/// Encodes frames as 8-bit RGB TIFF; alpha is dropped.
pub struct StandardTiffWriter;

impl SnapshotWriter for StandardTiffWriter {
    fn write_snapshot(&self, frame: &ArgbFrame, output: &mut dyn Write, config: &SnapshotConfig) -> Result<()> {
        frame.validate()?;
        let too_large = || PipelineError::InvalidDimensions(frame.width, frame.height);
        if frame.is_empty() {
            return Err(too_large());
        }
        let width = u32::try_from(frame.width).map_err(|_| too_large())?;
        let height = u32::try_from(frame.height).map_err(|_| too_large())?;

        let predictor = if config.horizontal_predictor {
            Predictor::Horizontal
        } else {
            Predictor::None
        };
        debug!(
            width,
            height,
            compression = ?config.compression,
            ?predictor,
            "Encoding TIFF snapshot"
        );

        // The encoder needs `Seek`, so encode in memory and copy out.
        let mut buffer = Vec::new();
        TiffEncoder::new(Cursor::new(&mut buffer))
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?
            .with_compression(encoder_compression(config.compression))
            .with_predictor(predictor)
            .write_image::<RGB8>(width, height, &frame.to_rgb_bytes())
            .map_err(|e| PipelineError::EncodeError(e.to_string()))?;

        output.write_all(&buffer)?;

        debug!("TIFF snapshot complete, {} bytes", buffer.len());
        Ok(())
    }
}

fn encoder_compression(compression: TiffCompression) -> Compression {
    match compression {
        TiffCompression::None => Compression::Uncompressed,
        TiffCompression::Lzw => Compression::Lzw,
        TiffCompression::Deflate => Compression::Deflate(DeflateLevel::Balanced),
    }
}
