use tracing::debug;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::transform::affine::AffineTransform2D;
use crate::image_pipeline::transform::rotation::normalize_rotation;

/// Transform from a source frame into a destination frame, together with the
/// decisions taken while building it.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TransformPlan {
    pub transform: AffineTransform2D,
    /// Rotation is an odd multiple of 90°, so width and height swap.
    pub transpose: bool,
    /// Source width after rotation
    pub in_width: usize,
    /// Source height after rotation
    pub in_height: usize,
    /// Scale applied on each axis, `None` when the sizes already matched
    pub scale: Option<(f32, f32)>,
}

/// Builds the crop/rotate/scale transform of a source frame into a
/// destination frame.
///
/// The build order is fixed: center the source on the origin, rotate, scale,
/// then move the origin to the destination center. Centering only happens
/// when there is a rotation.
#[derive(Debug, Clone, Copy)]
pub struct TransformBuilder {
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
    rotation_degrees: i32,
    maintain_aspect_ratio: bool,
}

impl TransformBuilder {
    pub fn new(src_width: usize, src_height: usize, dst_width: usize, dst_height: usize) -> Self {
        Self {
            src_width,
            src_height,
            dst_width,
            dst_height,
            rotation_degrees: 0,
            maintain_aspect_ratio: false,
        }
    }

    /// Rotation applied between the frames. Must be a multiple of 90.
    pub fn rotation(mut self, degrees: i32) -> Self {
        self.rotation_degrees = degrees;
        self
    }

    /// Keep x and y scale equal, cropping whatever overflows the destination.
    pub fn maintain_aspect_ratio(mut self, maintain: bool) -> Self {
        self.maintain_aspect_ratio = maintain;
        self
    }

    pub fn build(self) -> Result<AffineTransform2D> {
        self.plan().map(|plan| plan.transform)
    }

    pub fn plan(self) -> Result<TransformPlan> {
        if self.src_width == 0 || self.src_height == 0 {
            return Err(PipelineError::InvalidDimensions(self.src_width, self.src_height));
        }
        if self.dst_width == 0 || self.dst_height == 0 {
            return Err(PipelineError::InvalidDimensions(self.dst_width, self.dst_height));
        }
        normalize_rotation(self.rotation_degrees)?;

        let rotation = self.rotation_degrees;
        let mut transform = AffineTransform2D::IDENTITY;

        if rotation != 0 {
            transform = transform
                .post_translate(-(self.src_width as f32) / 2.0, -(self.src_height as f32) / 2.0)
                .post_rotate(rotation);
        }

        let transpose = (rotation.unsigned_abs() + 90) % 180 == 0;
        let (in_width, in_height) = if transpose {
            (self.src_height, self.src_width)
        } else {
            (self.src_width, self.src_height)
        };

        let mut scale = None;
        if in_width != self.dst_width || in_height != self.dst_height {
            let scale_x = self.dst_width as f32 / in_width as f32;
            let scale_y = self.dst_height as f32 / in_height as f32;

            let (sx, sy) = if self.maintain_aspect_ratio {
                // Fill the destination completely; the overflow is cropped.
                let uniform = scale_x.max(scale_y);
                (uniform, uniform)
            } else {
                (scale_x, scale_y)
            };
            transform = transform.post_scale(sx, sy);
            scale = Some((sx, sy));
        }

        if rotation != 0 {
            transform =
                transform.post_translate(self.dst_width as f32 / 2.0, self.dst_height as f32 / 2.0);
        }

        debug!(
            src_width = self.src_width,
            src_height = self.src_height,
            dst_width = self.dst_width,
            dst_height = self.dst_height,
            rotation,
            transpose,
            ?scale,
            "Built frame transform"
        );

        Ok(TransformPlan {
            transform,
            transpose,
            in_width,
            in_height,
            scale,
        })
    }
}

/// Returns the transform mapping a `src` frame into a `dst` frame.
///
/// `rotation_degrees` must be a multiple of 90 (negative values allowed).
/// With `maintain_aspect_ratio` the scale is uniform and the source is
/// cropped to fill the destination; otherwise each axis is stretched
/// independently.
pub fn transformation_matrix(
    src_width: usize,
    src_height: usize,
    dst_width: usize,
    dst_height: usize,
    rotation_degrees: i32,
    maintain_aspect_ratio: bool,
) -> Result<AffineTransform2D> {
    TransformBuilder::new(src_width, src_height, dst_width, dst_height)
        .rotation(rotation_degrees)
        .maintain_aspect_ratio(maintain_aspect_ratio)
        .build()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn approx(a: f32, b: f32) -> bool {
        (a - b).abs() < 1e-4
    }

    #[test]
    fn test_same_size_without_rotation_is_identity() {
        let m = transformation_matrix(224, 224, 224, 224, 0, true).unwrap();
        assert!(m.is_identity());

        let m = transformation_matrix(640, 480, 640, 480, 0, false).unwrap();
        assert!(m.is_identity());
    }

    #[test]
    fn test_quarter_turn_transposes_before_scaling() {
        let plan = TransformBuilder::new(640, 480, 224, 224)
            .rotation(90)
            .maintain_aspect_ratio(true)
            .plan()
            .unwrap();

        assert!(plan.transpose);
        assert_eq!((plan.in_width, plan.in_height), (480, 640));

        let expected = 224.0 / 480.0;
        let (sx, sy) = plan.scale.unwrap();
        assert!(approx(sx, expected));
        assert!(approx(sy, expected));
    }

    #[test]
    fn test_quarter_turn_centers_source_on_destination() {
        let m = transformation_matrix(640, 480, 224, 224, 90, true).unwrap();

        let (cx, cy) = m.map_point(320.0, 240.0);
        assert!(approx(cx, 112.0) && approx(cy, 112.0));

        // The short source side lands on the x axis and spans it exactly.
        let (left, _) = m.map_point(320.0, 480.0);
        let (right, _) = m.map_point(320.0, 0.0);
        assert!(approx(left, 0.0) && approx(right, 224.0));
    }

    #[test]
    fn test_stretch_without_rotation_scales_axes_independently() {
        let m = transformation_matrix(640, 480, 224, 112, 0, false).unwrap();

        assert!(approx(m.scale_x(), 224.0 / 640.0));
        assert!(approx(m.scale_y(), 112.0 / 480.0));
        assert_eq!(m.skew_x(), 0.0);
        assert_eq!(m.skew_y(), 0.0);
        assert_eq!(m.translate_x(), 0.0);
        assert_eq!(m.translate_y(), 0.0);
    }

    #[test]
    fn test_maintain_aspect_ratio_uses_larger_factor() {
        let plan = TransformBuilder::new(640, 480, 224, 224)
            .maintain_aspect_ratio(true)
            .plan()
            .unwrap();

        assert!(!plan.transpose);
        let (sx, sy) = plan.scale.unwrap();
        assert!(approx(sx, 224.0 / 480.0));
        assert_eq!(sx, sy);
    }

    #[test]
    fn test_half_turn_does_not_transpose() {
        let plan = TransformBuilder::new(640, 480, 320, 240)
            .rotation(180)
            .plan()
            .unwrap();

        assert!(!plan.transpose);
        let (x, y) = plan.transform.map_point(0.0, 0.0);
        assert!(approx(x, 320.0) && approx(y, 240.0));
    }

    #[test]
    fn test_negative_quarter_turn_transposes() {
        let plan = TransformBuilder::new(640, 480, 480, 640)
            .rotation(-90)
            .plan()
            .unwrap();

        assert!(plan.transpose);
        // Sizes already match after the swap.
        assert!(plan.scale.is_none());
    }

    #[test]
    fn test_multi_turn_rotation_is_accepted() {
        let plan = TransformBuilder::new(640, 480, 224, 224)
            .rotation(450)
            .plan()
            .unwrap();
        assert!(plan.transpose);
    }

    #[test]
    fn test_rotation_must_be_multiple_of_90() {
        let result = transformation_matrix(640, 480, 224, 224, 45, true);
        assert!(matches!(result, Err(PipelineError::InvalidRotation(45))));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let result = transformation_matrix(0, 480, 224, 224, 0, true);
        assert!(matches!(result, Err(PipelineError::InvalidDimensions(0, 480))));

        let result = transformation_matrix(640, 480, 224, 0, 0, true);
        assert!(matches!(result, Err(PipelineError::InvalidDimensions(224, 0))));
    }
}
