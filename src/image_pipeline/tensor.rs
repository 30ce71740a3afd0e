//! Classifier input tensor
//!
//! Flattens packed ARGB pixels into an `HWC` float tensor, R, G, B per pixel
//! in row-major order, each channel mapped through `(c - mean) / std`.

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::common::frame::ArgbFrame;

pub const IMAGE_MEAN: f32 = 0.0;
pub const IMAGE_STD: f32 = 255.0;
pub const CHANNELS: usize = 3;

#[inline]
pub fn normalize_channel(value: u8) -> f32 {
    (f32::from(value) - IMAGE_MEAN) / IMAGE_STD
}

/// Writes the tensor for `frame` into `out`, which must hold
/// `width * height * 3` floats.
pub fn argb_to_tensor_into(frame: &ArgbFrame, out: &mut [f32]) -> Result<()> {
    frame.validate()?;

    let expected = frame.len() * CHANNELS;
    if out.len() != expected {
        return Err(PipelineError::InvalidBufferSize {
            expected,
            actual: out.len(),
        });
    }

    for (&argb, rgb) in frame.pixels.iter().zip(out.chunks_exact_mut(CHANNELS)) {
        rgb[0] = normalize_channel((argb >> 16) as u8);
        rgb[1] = normalize_channel((argb >> 8) as u8);
        rgb[2] = normalize_channel(argb as u8);
    }

    Ok(())
}

pub fn argb_to_tensor(frame: &ArgbFrame) -> Result<Vec<f32>> {
    let mut tensor = vec![0.0; frame.len() * CHANNELS];
    argb_to_tensor_into(frame, &mut tensor)?;
    Ok(tensor)
}
