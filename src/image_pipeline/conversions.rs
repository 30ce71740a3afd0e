//! Per-frame pipeline module
//!
//! Orchestrates the camera frame → classifier input conversion and the
//! classification cycle on top of it.

mod types;
mod timing;
mod preprocessor;
mod frame_classifier;


pub use types::{FrameGeometry, PipelineConfig, PipelineConfigBuilder};
pub use timing::{FrameTimings, StepTiming, Timer};
pub use preprocessor::FramePreprocessor;
pub use frame_classifier::{FrameClassifier, FrameOutcome};
