//! Camera frame pipeline module
//!
//! This module turns camera YUV frames into classifier input: color
//! conversion, crop/rotate/scale into the square model input, tensor
//! normalization, and ranking of the model's scores.

pub mod common;
pub mod yuv;
pub mod transform;
pub mod tensor;
pub mod classify;
pub mod snapshot;
pub mod conversions;

pub use common::{
    ArgbFrame,
    PipelineError,
    Result,
};

pub use yuv::{
    ChromaLayout,
    PlanarYuvFrame,
    convert_yuv420_to_argb8888,
    yuv420_to_argb,
};

pub use transform::{
    AffineTransform2D,
    DisplayRotation,
    TransformBuilder,
    TransformPlan,
    transformation_matrix,
    warp_affine_into,
};

pub use tensor::{
    argb_to_tensor,
    argb_to_tensor_into,
};

pub use classify::{
    Classifier,
    LabelTable,
    Recognition,
    select_top,
};

pub use snapshot::{
    SnapshotConfig,
    SnapshotWriter,
    StandardTiffWriter,
    TiffCompression,
};

pub use conversions::{
    FrameClassifier,
    FrameGeometry,
    FrameOutcome,
    FramePreprocessor,
    FrameTimings,
    PipelineConfig,
};
