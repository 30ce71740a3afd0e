//! Common utilities module
//!
//! Error types and the packed ARGB frame shared by every pipeline stage.

pub mod error;
pub mod frame;

pub use error::{PipelineError, Result};
pub use frame::ArgbFrame;
