//! Frame geometry module
//!
//! Builds the affine transform that crops, rotates and scales a camera frame
//! into the classifier's square input, and resamples frames through it.

mod affine;
mod builder;
mod rotation;
mod warp;

pub use affine::AffineTransform2D;
pub use builder::{TransformBuilder, TransformPlan, transformation_matrix};
pub use rotation::{DisplayRotation, combined_rotation, normalize_rotation};
pub use warp::warp_affine_into;
