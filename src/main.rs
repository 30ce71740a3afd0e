use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::PathBuf;

use anyhow::{Context, Result};
use clap::{Parser, ValueEnum};
use tracing::{debug, info};

use frame_classify_rs::image_pipeline::{
    DisplayRotation, FrameGeometry, FramePreprocessor, PipelineConfig, PlanarYuvFrame,
    SnapshotConfig, SnapshotWriter, StandardTiffWriter, TiffCompression,
};
use frame_classify_rs::logger;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FrameFormat {
    /// Planar Y, U, V
    I420,
    /// Y plane followed by interleaved VU
    Nv21,
    /// Y plane followed by interleaved UV
    Nv12,
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum SnapshotCompression {
    None,
    Lzw,
    Deflate,
}

impl From<SnapshotCompression> for TiffCompression {
    fn from(compression: SnapshotCompression) -> Self {
        match compression {
            SnapshotCompression::None => TiffCompression::None,
            SnapshotCompression::Lzw => TiffCompression::Lzw,
            SnapshotCompression::Deflate => TiffCompression::Deflate,
        }
    }
}

/// Runs classifier preprocessing on a raw YUV 4:2:0 frame dump
#[derive(Parser, Debug)]
#[command(name = "frame_classify_rs", version, long_about = None)]
struct Args {
    /// Raw frame file, tightly packed
    #[arg(short, long)]
    input: PathBuf,

    #[arg(long)]
    width: usize,

    #[arg(long)]
    height: usize,

    #[arg(long, value_enum, default_value_t = FrameFormat::Nv21)]
    format: FrameFormat,

    /// Clockwise rotation of the sensor relative to the device, in degrees
    #[arg(long, default_value_t = 90, allow_negative_numbers = true)]
    sensor_rotation: i32,

    /// Display rotation in degrees (0, 90, 180 or 270)
    #[arg(long, default_value_t = 0, allow_negative_numbers = true)]
    display_rotation: i32,

    /// Side of the square classifier input
    #[arg(long, default_value_t = 224)]
    input_size: usize,

    /// Stretch the frame onto the input instead of center-cropping
    #[arg(long, default_value_t = false)]
    stretch: bool,

    /// Write the cropped classifier input to this TIFF file
    #[arg(long)]
    snapshot: Option<PathBuf>,

    #[arg(long, value_enum, default_value_t = SnapshotCompression::None)]
    compression: SnapshotCompression,

    /// Enable debug logging and per-step span timings
    #[arg(short, long, default_value_t = false)]
    verbose: bool,
}

fn main() -> Result<()> {
    let args = Args::parse();
    if args.verbose {
        logger::init_with_default("debug");
    } else {
        logger::init();
    }

    info!("Starting frame_classify_rs...");

    let data = {
        let _span = tracing::info_span!("read_input_file").entered();
        std::fs::read(&args.input)
            .with_context(|| format!("Failed to read {}", args.input.display()))?
    };

    let frame = match args.format {
        FrameFormat::I420 => PlanarYuvFrame::i420(&data, args.width, args.height),
        FrameFormat::Nv21 => PlanarYuvFrame::nv21(&data, args.width, args.height),
        FrameFormat::Nv12 => PlanarYuvFrame::nv12(&data, args.width, args.height),
    }
    .context("Input does not hold a complete frame")?;

    let config = PipelineConfig::builder()
        .input_size(args.input_size)
        .maintain_aspect_ratio(!args.stretch)
        .build();
    let geometry = FrameGeometry::new(args.width, args.height, args.sensor_rotation);
    let display_rotation = DisplayRotation::from_degrees(args.display_rotation)?;
    let mut preprocessor = FramePreprocessor::new(geometry, display_rotation, config)?;

    let (tensor, timings) = preprocessor.preprocess_with_timings(&frame)?;

    let (min, max, sum) = tensor
        .iter()
        .fold((f32::INFINITY, f32::NEG_INFINITY, 0.0f64), |(min, max, sum), &v| {
            (min.min(v), max.max(v), sum + f64::from(v))
        });
    let mean = sum / tensor.len().max(1) as f64;
    info!(len = tensor.len(), min, max, mean, "Tensor ready");

    timings.log_summary();
    info!(
        "Preprocessing took {:.3}ms",
        timings.total_duration().as_secs_f64() * 1000.0
    );

    if let Some(path) = &args.snapshot {
        let _span = tracing::info_span!("write_snapshot").entered();
        let config = SnapshotConfig::compressed(args.compression.into());
        let file = File::create(path)
            .with_context(|| format!("Failed to create {}", path.display()))?;
        let mut writer = BufWriter::new(file);
        StandardTiffWriter.write_snapshot(preprocessor.cropped_frame(), &mut writer, &config)?;
        writer.flush()?;
        debug!("Snapshot config: {:?}", config);
        info!("Wrote snapshot to {}", path.display());
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_negative_rotations_parse() {
        let args = Args::try_parse_from([
            "frame_classify_rs",
            "--input",
            "frame.yuv",
            "--width",
            "640",
            "--height",
            "480",
            "--sensor-rotation",
            "-90",
            "--display-rotation",
            "-90",
        ])
        .unwrap();

        assert_eq!(args.sensor_rotation, -90);
        assert_eq!(args.display_rotation, -90);
        assert_eq!(
            DisplayRotation::from_degrees(args.display_rotation).unwrap(),
            DisplayRotation::Rotation270
        );
    }

    #[test]
    fn test_compression_flag_enables_predictor() {
        let args = Args::try_parse_from([
            "frame_classify_rs",
            "--input",
            "frame.yuv",
            "--width",
            "640",
            "--height",
            "480",
            "--compression",
            "deflate",
        ])
        .unwrap();

        let config = SnapshotConfig::compressed(args.compression.into());
        assert_eq!(config.compression, TiffCompression::Deflate);
        assert!(config.horizontal_predictor);
    }
}
