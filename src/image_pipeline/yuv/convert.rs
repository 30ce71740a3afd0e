use tracing::trace;

use crate::image_pipeline::common::error::{PipelineError, Result};
use crate::image_pipeline::common::frame::{ArgbFrame, OPAQUE_ALPHA};
use crate::image_pipeline::yuv::types::PlanarYuvFrame;

/// Upper clamp of a channel before the 10-bit fixed-point shift (2^18 - 1).
const MAX_CHANNEL_VALUE: i32 = 262_143;

/// Converts one YUV sample triple to a packed opaque ARGB pixel.
///
/// BT.601 video-range coefficients scaled by 1024:
/// - R = 1.164 (Y - 16) + 1.596 (V - 128)
/// - G = 1.164 (Y - 16) - 0.813 (V - 128) - 0.391 (U - 128)
/// - B = 1.164 (Y - 16) + 2.018 (U - 128)
#[inline]
pub fn yuv_to_argb_pixel(y: u8, u: u8, v: u8) -> u32 {
    let y = (i32::from(y) - 16).max(0);
    let u = i32::from(u) - 128;
    let v = i32::from(v) - 128;

    let r = 1192 * y + 1634 * v;
    let g = 1192 * y - 833 * v - 400 * u;
    let b = 1192 * y + 2066 * u;

    let r = ((r.clamp(0, MAX_CHANNEL_VALUE) >> 10) & 0xFF) as u32;
    let g = ((g.clamp(0, MAX_CHANNEL_VALUE) >> 10) & 0xFF) as u32;
    let b = ((b.clamp(0, MAX_CHANNEL_VALUE) >> 10) & 0xFF) as u32;

    OPAQUE_ALPHA | (r << 16) | (g << 8) | b
}

/// Converts a YUV 4:2:0 frame into `out`, one packed pixel per luma sample.
///
/// The frame is validated and `out` must hold exactly `width * height`
/// pixels; nothing is written when either check fails.
pub fn convert_yuv420_to_argb8888(frame: &PlanarYuvFrame<'_>, out: &mut [u32]) -> Result<()> {
    frame.validate()?;

    let expected = frame.pixel_count();
    if out.len() != expected {
        return Err(PipelineError::InvalidBufferSize {
            expected,
            actual: out.len(),
        });
    }

    trace!("Converting {}x{} YUV frame", frame.width, frame.height);

    let u_layout = frame.u_layout;
    let v_layout = frame.v_layout;

    for (row, out_row) in out.chunks_exact_mut(frame.width).enumerate() {
        let luma_start = frame.y_row_stride * row;
        let luma_row = &frame.y[luma_start..luma_start + frame.width];
        let u_row = u_layout.row_stride * (row >> 1);
        let v_row = v_layout.row_stride * (row >> 1);

        for (col, (pixel, &luma)) in out_row.iter_mut().zip(luma_row).enumerate() {
            let half = col >> 1;
            let u = frame.u[u_row + half * u_layout.pixel_stride];
            let v = frame.v[v_row + half * v_layout.pixel_stride];
            *pixel = yuv_to_argb_pixel(luma, u, v);
        }
    }

    Ok(())
}

/// Allocating variant of [`convert_yuv420_to_argb8888`].
pub fn yuv420_to_argb(frame: &PlanarYuvFrame<'_>) -> Result<ArgbFrame> {
    frame.validate()?;
    let mut argb = ArgbFrame::new(frame.width, frame.height);
    convert_yuv420_to_argb8888(frame, &mut argb.pixels)?;
    Ok(argb)
}
