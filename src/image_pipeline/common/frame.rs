//! Packed 32-bit ARGB frame

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Opaque alpha in the top byte of a packed pixel.
pub const OPAQUE_ALPHA: u32 = 0xFF00_0000;

/// Row-major frame of `0xAARRGGBB` pixels.
///
/// The pipeline allocates these once per camera geometry and overwrites them
/// for every frame.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArgbFrame {
    /// Width of the frame in pixels
    pub width: usize,
    /// Height of the frame in pixels
    pub height: usize,
    /// `width * height` packed pixels
    pub pixels: Vec<u32>,
}

impl ArgbFrame {
    /// Allocates a zeroed (transparent black) frame.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            width,
            height,
            pixels: vec![0; width * height],
        }
    }

    pub fn from_pixels(width: usize, height: usize, pixels: Vec<u32>) -> Result<Self> {
        let expected = width * height;
        if pixels.len() != expected {
            return Err(PipelineError::InvalidBufferSize {
                expected,
                actual: pixels.len(),
            });
        }
        Ok(Self {
            width,
            height,
            pixels,
        })
    }

    pub fn len(&self) -> usize {
        self.pixels.len()
    }

    pub fn is_empty(&self) -> bool {
        self.pixels.is_empty()
    }

    pub fn pixel(&self, x: usize, y: usize) -> Option<u32> {
        if x >= self.width || y >= self.height {
            return None;
        }
        self.pixels.get(y * self.width + x).copied()
    }

    /// Checks that the pixel buffer still matches the declared dimensions.
    pub fn validate(&self) -> Result<()> {
        let expected = self.width * self.height;
        if self.pixels.len() != expected {
            return Err(PipelineError::InvalidBufferSize {
                expected,
                actual: self.pixels.len(),
            });
        }
        Ok(())
    }

    /// Drops alpha and returns interleaved `[R, G, B, ...]` bytes.
    pub fn to_rgb_bytes(&self) -> Vec<u8> {
        self.pixels
            .iter()
            .flat_map(|&argb| {
                [
                    ((argb >> 16) & 0xFF) as u8,
                    ((argb >> 8) & 0xFF) as u8,
                    (argb & 0xFF) as u8,
                ]
            })
            .collect()
    }
}
