use crate::image_pipeline::common::error::{PipelineError, Result};

/// Current rotation of the display relative to its natural orientation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DisplayRotation {
    #[default]
    Rotation0,
    Rotation90,
    Rotation180,
    Rotation270,
}

impl DisplayRotation {
    pub fn degrees(self) -> i32 {
        match self {
            DisplayRotation::Rotation0 => 0,
            DisplayRotation::Rotation90 => 90,
            DisplayRotation::Rotation180 => 180,
            DisplayRotation::Rotation270 => 270,
        }
    }

    pub fn from_degrees(degrees: i32) -> Result<Self> {
        match normalize_rotation(degrees)? {
            0 => Ok(DisplayRotation::Rotation0),
            90 => Ok(DisplayRotation::Rotation90),
            180 => Ok(DisplayRotation::Rotation180),
            _ => Ok(DisplayRotation::Rotation270),
        }
    }
}

/// Reduces a multiple of 90 into `[0, 360)`.
pub fn normalize_rotation(degrees: i32) -> Result<i32> {
    if degrees % 90 != 0 {
        return Err(PipelineError::InvalidRotation(degrees));
    }
    Ok(degrees.rem_euclid(360))
}

/// Rotation to apply to sensor frames so they appear upright on the display.
pub fn combined_rotation(sensor_rotation: i32, display: DisplayRotation) -> Result<i32> {
    let sensor = normalize_rotation(sensor_rotation)?;
    Ok((sensor + display.degrees()) % 360)
}
