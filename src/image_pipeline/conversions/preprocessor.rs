use tracing::{info, instrument};

use crate::image_pipeline::{
    ArgbFrame, PipelineError, Result,
    conversions::{FrameGeometry, FrameTimings, PipelineConfig, Timer},
    tensor::{CHANNELS, argb_to_tensor_into},
    transform::{AffineTransform2D, DisplayRotation, TransformBuilder, combined_rotation, warp_affine_into},
    yuv::{PlanarYuvFrame, convert_yuv420_to_argb8888},
};

/// Turns camera frames of one geometry into classifier input tensors.
///
/// The frame-sized ARGB buffer, the square cropped buffer and the tensor are
/// allocated once and overwritten by every frame. The transform is built
/// when the geometry becomes known and reused until it changes.
#[derive(Debug)]
pub struct FramePreprocessor {
    geometry: FrameGeometry,
    display_rotation: DisplayRotation,
    config: PipelineConfig,
    transform: AffineTransform2D,
    frame: ArgbFrame,
    cropped: ArgbFrame,
    tensor: Vec<f32>,
}

impl FramePreprocessor {
    pub fn new(
        geometry: FrameGeometry,
        display_rotation: DisplayRotation,
        config: PipelineConfig,
    ) -> Result<Self> {
        let transform = build_transform(&geometry, display_rotation, &config)?;
        let size = config.input_size;

        Ok(Self {
            geometry,
            display_rotation,
            transform,
            frame: ArgbFrame::new(geometry.width, geometry.height),
            cropped: ArgbFrame::new(size, size),
            tensor: vec![0.0; size * size * CHANNELS],
            config,
        })
    }

    /// Adopts a new camera geometry or display rotation. Buffers are only
    /// reallocated when the frame size changes.
    pub fn reconfigure(&mut self, geometry: FrameGeometry, display_rotation: DisplayRotation) -> Result<()> {
        let transform = build_transform(&geometry, display_rotation, &self.config)?;

        if geometry.width != self.geometry.width || geometry.height != self.geometry.height {
            self.frame = ArgbFrame::new(geometry.width, geometry.height);
        }
        self.geometry = geometry;
        self.display_rotation = display_rotation;
        self.transform = transform;
        Ok(())
    }

    /// Converts, crops and normalizes `frame`, returning the tensor.
    pub fn preprocess(&mut self, frame: &PlanarYuvFrame<'_>) -> Result<&[f32]> {
        let mut timings = FrameTimings::new();
        self.run(frame, &mut timings)?;
        Ok(&self.tensor)
    }

    pub fn preprocess_with_timings(&mut self, frame: &PlanarYuvFrame<'_>) -> Result<(&[f32], FrameTimings)> {
        let mut timings = FrameTimings::new();
        self.run(frame, &mut timings)?;
        Ok((&self.tensor, timings))
    }

    #[instrument(skip_all, fields(width = frame.width, height = frame.height))]
    fn run(&mut self, frame: &PlanarYuvFrame<'_>, timings: &mut FrameTimings) -> Result<()> {
        if frame.width != self.geometry.width || frame.height != self.geometry.height {
            return Err(PipelineError::InvalidFrameGeometry(format!(
                "frame is {}x{}, pipeline is configured for {}x{}",
                frame.width, frame.height, self.geometry.width, self.geometry.height
            )));
        }

        {
            let _span = tracing::info_span!("convert_yuv").entered();
            let timer = Timer::start("convert_yuv");
            convert_yuv420_to_argb8888(frame, &mut self.frame.pixels)?;
            timings.record(timer);
        }

        {
            let _span = tracing::info_span!("warp_affine").entered();
            let timer = Timer::start("warp_affine");
            warp_affine_into(&self.frame, &mut self.cropped, &self.transform)?;
            timings.record(timer);
        }

        {
            let _span = tracing::info_span!("normalize").entered();
            let timer = Timer::start("normalize");
            argb_to_tensor_into(&self.cropped, &mut self.tensor)?;
            timings.record(timer);
        }

        Ok(())
    }

    pub fn geometry(&self) -> &FrameGeometry {
        &self.geometry
    }

    pub fn display_rotation(&self) -> DisplayRotation {
        self.display_rotation
    }

    pub fn config(&self) -> &PipelineConfig {
        &self.config
    }

    pub fn transform(&self) -> &AffineTransform2D {
        &self.transform
    }

    /// Full-size ARGB conversion of the last frame.
    pub fn frame(&self) -> &ArgbFrame {
        &self.frame
    }

    /// Square classifier input of the last frame.
    pub fn cropped_frame(&self) -> &ArgbFrame {
        &self.cropped
    }

    pub fn tensor(&self) -> &[f32] {
        &self.tensor
    }
}

fn build_transform(
    geometry: &FrameGeometry,
    display_rotation: DisplayRotation,
    config: &PipelineConfig,
) -> Result<AffineTransform2D> {
    let rotation = combined_rotation(geometry.sensor_rotation, display_rotation)?;
    let plan = TransformBuilder::new(geometry.width, geometry.height, config.input_size, config.input_size)
        .rotation(rotation)
        .maintain_aspect_ratio(config.maintain_aspect_ratio)
        .plan()?;

    info!(
        width = geometry.width,
        height = geometry.height,
        input_size = config.input_size,
        rotation,
        transpose = plan.transpose,
        "Frame transform ready"
    );
    Ok(plan.transform)
}
