//! YUV 4:2:0 camera frame module
//!
//! Frame descriptors for planar and semi-planar camera buffers, and the
//! fixed-point conversion to packed ARGB.

mod convert;
pub mod types;

pub use convert::{convert_yuv420_to_argb8888, yuv420_to_argb, yuv_to_argb_pixel};
pub use types::{ChromaLayout, PlanarYuvFrame};
