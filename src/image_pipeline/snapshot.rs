//! Frame snapshot module
//!
//! Writes pipeline frames (typically the cropped classifier input) to TIFF so
//! the exact pixels the model sees can be inspected.

mod writer;
mod standard_tiff_writer;
pub mod types;

pub use writer::SnapshotWriter;
pub use standard_tiff_writer::StandardTiffWriter;
pub use types::{SnapshotConfig, TiffCompression};
