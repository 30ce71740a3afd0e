//! Classification module
//!
//! The model itself is opaque behind [`Classifier`]; this module pairs its
//! scores with the label table and selects the top results.

mod classifier;
mod labels;
mod ranking;

pub use classifier::Classifier;
pub use labels::LabelTable;
pub use ranking::{Recognition, select_top};

/// Side length of the square classifier input.
pub const INPUT_SIZE: usize = 224;
/// Minimum confidence a result needs to be reported.
pub const THRESHOLD: f32 = 0.1;
/// Maximum number of reported results.
pub const MAX_RESULTS: usize = 3;
