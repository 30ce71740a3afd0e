use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::common::frame::ArgbFrame;
use crate::image_pipeline::transform::affine::AffineTransform2D;

/// Draws `src` through `transform` into `dst` with nearest-neighbor sampling.
///
/// Each destination pixel center is mapped back into the source. Pixels whose
/// source position falls outside `src` keep their current value, the same way
/// drawing a bitmap onto a canvas leaves uncovered pixels alone.
pub fn warp_affine_into(
    src: &ArgbFrame,
    dst: &mut ArgbFrame,
    transform: &AffineTransform2D,
) -> Result<()> {
    src.validate()?;
    dst.validate()?;
    if src.is_empty() {
        return Err(PipelineError::InvalidDimensions(src.width, src.height));
    }
    if dst.is_empty() {
        return Err(PipelineError::InvalidDimensions(dst.width, dst.height));
    }

    let inverse = transform.invert().ok_or(PipelineError::InvalidTransform)?;
    let src_width = src.width as f32;
    let src_height = src.height as f32;

    for (row, dst_row) in dst.pixels.chunks_exact_mut(dst.width).enumerate() {
        let center_y = row as f32 + 0.5;
        for (col, pixel) in dst_row.iter_mut().enumerate() {
            let (x, y) = inverse.map_point(col as f32 + 0.5, center_y);
            // Written so that NaN coordinates are skipped too.
            if !(x >= 0.0 && x < src_width && y >= 0.0 && y < src_height) {
                continue;
            }
            *pixel = src.pixels[y as usize * src.width + x as usize];
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::image_pipeline::transform::builder::transformation_matrix;

    fn gradient(width: usize, height: usize) -> ArgbFrame {
        let pixels = (0..width * height).map(|i| 0xFF00_0000 | i as u32).collect();
        ArgbFrame::from_pixels(width, height, pixels).unwrap()
    }

    #[test]
    fn test_identity_copies_frame() {
        let src = gradient(4, 3);
        let mut dst = ArgbFrame::new(4, 3);

        warp_affine_into(&src, &mut dst, &AffineTransform2D::IDENTITY).unwrap();

        assert_eq!(dst, src);
    }

    #[test]
    fn test_downscale_by_two_samples_every_other_pixel() {
        let src = gradient(4, 4);
        let mut dst = ArgbFrame::new(2, 2);
        let m = transformation_matrix(4, 4, 2, 2, 0, false).unwrap();

        warp_affine_into(&src, &mut dst, &m).unwrap();

        // Destination centers (0.5, 0.5) map to source (1, 1).
        assert_eq!(dst.pixel(0, 0), src.pixel(1, 1));
        assert_eq!(dst.pixel(1, 0), src.pixel(3, 1));
        assert_eq!(dst.pixel(0, 1), src.pixel(1, 3));
    }

    #[test]
    fn test_quarter_turn_moves_left_column_to_top_row() {
        // 3x2 source rotated 90° clockwise becomes 2x3.
        let src = gradient(3, 2);
        let mut dst = ArgbFrame::new(2, 3);
        let m = transformation_matrix(3, 2, 2, 3, 90, false).unwrap();

        warp_affine_into(&src, &mut dst, &m).unwrap();

        // Bottom-left source pixel ends up top-left.
        assert_eq!(dst.pixel(0, 0), src.pixel(0, 1));
        assert_eq!(dst.pixel(1, 0), src.pixel(0, 0));
        assert_eq!(dst.pixel(1, 2), src.pixel(2, 0));
    }

    #[test]
    fn test_uncovered_pixels_keep_their_value() {
        let src = gradient(2, 2);
        let mut dst = ArgbFrame::from_pixels(4, 4, vec![7; 16]).unwrap();

        warp_affine_into(&src, &mut dst, &AffineTransform2D::IDENTITY).unwrap();

        assert_eq!(dst.pixel(1, 1), src.pixel(1, 1));
        assert_eq!(dst.pixel(3, 3), Some(7));
    }

    #[test]
    fn test_singular_transform_is_rejected() {
        let src = gradient(2, 2);
        let mut dst = ArgbFrame::new(2, 2);
        let m = AffineTransform2D::IDENTITY.post_scale(0.0, 0.0);

        let result = warp_affine_into(&src, &mut dst, &m);
        assert!(matches!(result, Err(PipelineError::InvalidTransform)));
    }
}
