//! YUV frame descriptor types

use crate::image_pipeline::common::error::{PipelineError, Result};

/// Byte layout of one chroma plane.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChromaLayout {
    /// Bytes between the starts of consecutive chroma rows
    pub row_stride: usize,
    /// Bytes between consecutive chroma samples within a row
    /// (1 for planar, 2 for interleaved semi-planar)
    pub pixel_stride: usize,
}

impl ChromaLayout {
    pub fn new(row_stride: usize, pixel_stride: usize) -> Self {
        Self {
            row_stride,
            pixel_stride,
        }
    }
}

/// Borrowed view of a YUV 4:2:0 camera frame.
///
/// `width` and `height` describe the luma plane. Chroma is subsampled by two
/// in both directions, so a chroma plane has `ceil(width / 2)` samples per row
/// and `ceil(height / 2)` rows.
#[derive(Debug, Clone, Copy)]
pub struct PlanarYuvFrame<'a> {
    pub y: &'a [u8],
    pub u: &'a [u8],
    pub v: &'a [u8],
    pub width: usize,
    pub height: usize,
    pub y_row_stride: usize,
    pub u_layout: ChromaLayout,
    pub v_layout: ChromaLayout,
}

impl<'a> PlanarYuvFrame<'a> {
    /// Describes a frame whose U and V planes share one stride layout, which
    /// is what camera HALs deliver for YUV_420_888.
    #[allow(clippy::too_many_arguments)]
    pub fn new(
        y: &'a [u8],
        u: &'a [u8],
        v: &'a [u8],
        width: usize,
        height: usize,
        y_row_stride: usize,
        uv_row_stride: usize,
        uv_pixel_stride: usize,
    ) -> Self {
        let layout = ChromaLayout::new(uv_row_stride, uv_pixel_stride);
        Self::with_chroma_layouts(y, u, v, width, height, y_row_stride, layout, layout)
    }

    #[allow(clippy::too_many_arguments)]
    pub fn with_chroma_layouts(
        y: &'a [u8],
        u: &'a [u8],
        v: &'a [u8],
        width: usize,
        height: usize,
        y_row_stride: usize,
        u_layout: ChromaLayout,
        v_layout: ChromaLayout,
    ) -> Self {
        Self {
            y,
            u,
            v,
            width,
            height,
            y_row_stride,
            u_layout,
            v_layout,
        }
    }

    /// Fully planar buffer: `Y` plane, then `U`, then `V`, no padding.
    pub fn i420(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
        let (luma_len, chroma_len) = contiguous_lengths(data, width, height)?;
        let chroma_width = width.div_ceil(2);
        let u_start = luma_len;
        let v_start = luma_len + chroma_len;
        let layout = ChromaLayout::new(chroma_width, 1);

        Ok(Self::with_chroma_layouts(
            &data[..luma_len],
            &data[u_start..v_start],
            &data[v_start..v_start + chroma_len],
            width,
            height,
            width,
            layout,
            layout,
        ))
    }

    /// Semi-planar buffer with interleaved `VU` chroma (Android camera default).
    pub fn nv21(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
        Self::semi_planar(data, width, height, false)
    }

    /// Semi-planar buffer with interleaved `UV` chroma.
    pub fn nv12(data: &'a [u8], width: usize, height: usize) -> Result<Self> {
        Self::semi_planar(data, width, height, true)
    }

    fn semi_planar(data: &'a [u8], width: usize, height: usize, u_first: bool) -> Result<Self> {
        let (luma_len, chroma_len) = contiguous_lengths(data, width, height)?;
        let interleaved = &data[luma_len..luma_len + 2 * chroma_len];
        let (first, second) = (&interleaved[..], &interleaved[1..]);
        let (u, v) = if u_first { (first, second) } else { (second, first) };

        Ok(Self::new(
            &data[..luma_len],
            u,
            v,
            width,
            height,
            width,
            2 * width.div_ceil(2),
            2,
        ))
    }

    pub fn chroma_width(&self) -> usize {
        self.width.div_ceil(2)
    }

    pub fn chroma_height(&self) -> usize {
        self.height.div_ceil(2)
    }

    pub fn pixel_count(&self) -> usize {
        self.width * self.height
    }

    /// Checks every plane against its strides so that conversion never
    /// indexes past the end of a plane.
    pub fn validate(&self) -> Result<()> {
        if self.width == 0 || self.height == 0 {
            return Err(PipelineError::InvalidFrameGeometry(format!(
                "empty frame {}x{}",
                self.width, self.height
            )));
        }

        if self.y_row_stride < self.width {
            return Err(PipelineError::InvalidFrameGeometry(format!(
                "luma row stride {} is smaller than width {}",
                self.y_row_stride, self.width
            )));
        }

        // The last row may omit its trailing padding.
        let luma_needed = plane_span(self.y_row_stride, self.height, self.width).ok_or_else(|| {
            PipelineError::InvalidFrameGeometry(format!(
                "luma row stride {} overflows a {}-row plane",
                self.y_row_stride, self.height
            ))
        })?;
        if self.y.len() < luma_needed {
            return Err(PipelineError::InvalidFrameGeometry(format!(
                "luma plane holds {} bytes, {} required",
                self.y.len(),
                luma_needed
            )));
        }

        self.validate_chroma("U", self.u, self.u_layout)?;
        self.validate_chroma("V", self.v, self.v_layout)
    }

    fn validate_chroma(&self, name: &str, plane: &[u8], layout: ChromaLayout) -> Result<()> {
        if layout.pixel_stride == 0 {
            return Err(PipelineError::InvalidFrameGeometry(format!(
                "{name} plane has zero pixel stride"
            )));
        }

        let row_span = plane_span(layout.pixel_stride, self.chroma_width(), 1).ok_or_else(|| {
            PipelineError::InvalidFrameGeometry(format!(
                "{name} pixel stride {} overflows a chroma row",
                layout.pixel_stride
            ))
        })?;
        if layout.row_stride < row_span {
            return Err(PipelineError::InvalidFrameGeometry(format!(
                "{name} row stride {} is smaller than the {row_span} bytes a row spans",
                layout.row_stride
            )));
        }

        let needed = plane_span(layout.row_stride, self.chroma_height(), row_span).ok_or_else(|| {
            PipelineError::InvalidFrameGeometry(format!(
                "{name} row stride {} overflows a {}-row plane",
                layout.row_stride,
                self.chroma_height()
            ))
        })?;
        if plane.len() < needed {
            return Err(PipelineError::InvalidFrameGeometry(format!(
                "{name} plane holds {} bytes, {needed} required",
                plane.len()
            )));
        }

        Ok(())
    }
}

/// Bytes from the first sample of row 0 to the last sample of row `rows - 1`,
/// or `None` on overflow. `rows` must be non-zero.
fn plane_span(row_stride: usize, rows: usize, row_bytes: usize) -> Option<usize> {
    row_stride.checked_mul(rows - 1)?.checked_add(row_bytes)
}

/// Luma and per-plane chroma byte counts of a tightly packed 4:2:0 buffer.
fn contiguous_lengths(data: &[u8], width: usize, height: usize) -> Result<(usize, usize)> {
    if width == 0 || height == 0 {
        return Err(PipelineError::InvalidFrameGeometry(format!(
            "empty frame {width}x{height}"
        )));
    }

    let lengths = width.checked_mul(height).and_then(|luma_len| {
        let chroma_len = width.div_ceil(2).checked_mul(height.div_ceil(2))?;
        let expected = chroma_len.checked_mul(2)?.checked_add(luma_len)?;
        Some((luma_len, chroma_len, expected))
    });
    let Some((luma_len, chroma_len, expected)) = lengths else {
        return Err(PipelineError::InvalidFrameGeometry(format!(
            "a {width}x{height} 4:2:0 frame does not fit in memory"
        )));
    };
    if data.len() < expected {
        return Err(PipelineError::InvalidFrameGeometry(format!(
            "buffer holds {} bytes, a {width}x{height} 4:2:0 frame needs {expected}",
            data.len()
        )));
    }

    Ok((luma_len, chroma_len))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_i420_splits_planes() {
        // 4x2 luma, 2x1 chroma
        let data: Vec<u8> = (0..12).collect();
        let frame = PlanarYuvFrame::i420(&data, 4, 2).unwrap();

        assert_eq!(frame.y, &data[..8]);
        assert_eq!(frame.u, &[8, 9]);
        assert_eq!(frame.v, &[10, 11]);
        assert_eq!(frame.u_layout, ChromaLayout::new(2, 1));
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_nv21_interleaves_v_first() {
        let data: Vec<u8> = vec![0, 0, 0, 0, 0, 0, 0, 0, 200, 50, 201, 51];
        let frame = PlanarYuvFrame::nv21(&data, 4, 2).unwrap();

        assert_eq!(frame.v[0], 200);
        assert_eq!(frame.u[0], 50);
        assert_eq!(frame.v[2], 201);
        assert_eq!(frame.u[2], 51);
        assert_eq!(frame.u_layout, ChromaLayout::new(4, 2));
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_nv12_interleaves_u_first() {
        let data: Vec<u8> = vec![0, 0, 0, 0, 10, 20];
        let frame = PlanarYuvFrame::nv12(&data, 2, 2).unwrap();

        assert_eq!(frame.u[0], 10);
        assert_eq!(frame.v[0], 20);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_odd_dimensions_round_chroma_up() {
        // 3x3 luma needs 2x2 chroma per plane
        let data = vec![0u8; 9 + 4 + 4];
        let frame = PlanarYuvFrame::i420(&data, 3, 3).unwrap();

        assert_eq!(frame.chroma_width(), 2);
        assert_eq!(frame.chroma_height(), 2);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_short_buffer_is_rejected() {
        let data = vec![0u8; 10];
        let result = PlanarYuvFrame::i420(&data, 4, 2);
        assert!(matches!(result, Err(PipelineError::InvalidFrameGeometry(_))));
    }

    #[test]
    fn test_zero_dimensions_are_rejected() {
        let frame = PlanarYuvFrame::new(&[], &[], &[], 0, 4, 0, 0, 1);
        assert!(matches!(frame.validate(), Err(PipelineError::InvalidFrameGeometry(_))));
    }

    #[test]
    fn test_row_stride_smaller_than_width_is_rejected() {
        let y = vec![0u8; 16];
        let uv = vec![0u8; 4];
        let frame = PlanarYuvFrame::new(&y, &uv, &uv, 4, 4, 3, 2, 1);
        assert!(matches!(frame.validate(), Err(PipelineError::InvalidFrameGeometry(_))));
    }

    #[test]
    fn test_padded_last_row_may_be_short() {
        // Row stride 8, width 4: the final row only needs 4 bytes.
        let y = vec![0u8; 8 + 4];
        let uv = vec![0u8; 2];
        let frame = PlanarYuvFrame::new(&y, &uv, &uv, 4, 2, 8, 2, 1);
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_truncated_chroma_plane_is_rejected() {
        let y = vec![0u8; 16];
        let u = vec![0u8; 4];
        let v = vec![0u8; 3];
        let frame = PlanarYuvFrame::new(&y, &u, &v, 4, 4, 4, 2, 1);
        assert!(matches!(frame.validate(), Err(PipelineError::InvalidFrameGeometry(_))));
    }

    #[test]
    fn test_independent_chroma_layouts() {
        let y = vec![0u8; 16];
        let u = vec![0u8; 4];
        let v = vec![0u8; 8];
        let frame = PlanarYuvFrame::with_chroma_layouts(
            &y,
            &u,
            &v,
            4,
            4,
            4,
            ChromaLayout::new(2, 1),
            ChromaLayout::new(4, 2),
        );
        assert!(frame.validate().is_ok());
    }

    #[test]
    fn test_huge_luma_stride_is_rejected_not_wrapped() {
        let y = vec![0u8; 64];
        let uv = vec![0u8; 4];
        let frame = PlanarYuvFrame::new(&y, &uv, &uv, 2, 3, usize::MAX / 2 + 1, 2, 1);
        assert!(matches!(frame.validate(), Err(PipelineError::InvalidFrameGeometry(_))));
    }

    #[test]
    fn test_huge_chroma_strides_are_rejected_not_wrapped() {
        let y = vec![0u8; 12];
        let uv = vec![0u8; 16];

        // 2x6 luma: three chroma rows, so the row stride is multiplied by 2.
        let frame = PlanarYuvFrame::new(&y, &uv, &uv, 2, 6, 2, usize::MAX / 2 + 1, 1);
        assert!(matches!(frame.validate(), Err(PipelineError::InvalidFrameGeometry(_))));

        // 6x2 luma: three chroma samples per row, so the pixel stride is too.
        let frame = PlanarYuvFrame::new(&y, &uv, &uv, 6, 2, 6, usize::MAX, usize::MAX / 2 + 1);
        assert!(matches!(frame.validate(), Err(PipelineError::InvalidFrameGeometry(_))));
    }

    #[test]
    fn test_contiguous_size_overflow_is_rejected() {
        let data = vec![0u8; 16];
        let result = PlanarYuvFrame::i420(&data, usize::MAX, 2);
        assert!(matches!(result, Err(PipelineError::InvalidFrameGeometry(_))));
    }
}
