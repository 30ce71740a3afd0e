use crate::image_pipeline::common::error::Result;

pub trait Classifier {
    /// Runs the model on an `INPUT_SIZE × INPUT_SIZE × 3` tensor and returns
    /// one confidence per class, in label order.
    fn classify(&self, tensor: &[f32]) -> Result<Vec<f32>>;
}
