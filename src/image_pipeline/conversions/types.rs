use crate::image_pipeline::classify::{INPUT_SIZE, MAX_RESULTS, THRESHOLD};

/// Output geometry of the camera, known once the capture session starts.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameGeometry {
    pub width: usize,
    pub height: usize,
    /// Clockwise rotation of the sensor relative to the device, in degrees
    pub sensor_rotation: i32,
}

impl FrameGeometry {
    pub fn new(width: usize, height: usize, sensor_rotation: i32) -> Self {
        Self {
            width,
            height,
            sensor_rotation,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PipelineConfig {
    /// Side length of the square classifier input
    pub input_size: usize,
    /// Crop to fill the input (true) or stretch the whole frame into it (false)
    pub maintain_aspect_ratio: bool,
    /// Results must score strictly above this
    pub threshold: f32,
    pub max_results: usize,
}

impl Default for PipelineConfig {
    fn default() -> Self {
        Self {
            input_size: INPUT_SIZE,
            maintain_aspect_ratio: true,
            threshold: THRESHOLD,
            max_results: MAX_RESULTS,
        }
    }
}

impl PipelineConfig {
    pub fn builder() -> PipelineConfigBuilder {
        PipelineConfigBuilder::default()
    }
}

#[derive(Default)]
pub struct PipelineConfigBuilder {
    input_size: Option<usize>,
    maintain_aspect_ratio: Option<bool>,
    threshold: Option<f32>,
    max_results: Option<usize>,
}

impl PipelineConfigBuilder {
    pub fn input_size(mut self, size: usize) -> Self {
        self.input_size = Some(size);
        self
    }

    pub fn maintain_aspect_ratio(mut self, maintain: bool) -> Self {
        self.maintain_aspect_ratio = Some(maintain);
        self
    }

    pub fn threshold(mut self, threshold: f32) -> Self {
        self.threshold = Some(threshold);
        self
    }

    pub fn max_results(mut self, max: usize) -> Self {
        self.max_results = Some(max);
        self
    }

    pub fn build(self) -> PipelineConfig {
        let default = PipelineConfig::default();
        PipelineConfig {
            input_size: self.input_size.unwrap_or(default.input_size),
            maintain_aspect_ratio: self.maintain_aspect_ratio.unwrap_or(default.maintain_aspect_ratio),
            threshold: self.threshold.unwrap_or(default.threshold),
            max_results: self.max_results.unwrap_or(default.max_results),
        }
    }
}
