//! Grey filter.
//!
//! Uses the plain channel mean `(R + G + B) / 3` as luminance, then darkens it
//! by the intensity factor. At intensity 0 the result is pure luminance grey;
//! the intensity is capped at 0.5 so the image never goes fully black.

use tracing::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::error::FilterResult;
use crate::filters::core::{
    attenuate, clamp_channel, clamp_intensity, ensure_non_empty, luminance, map_rgb,
};

/// Convert to grey and darken.
///
/// Output is R=G=B=`trunc(luminance * (1 - intensity))`, A preserved.
///
/// # Arguments
/// * `input` - Source buffer, not modified
/// * `intensity` - Darkening factor, clamped to 0.0-0.5
///
/// # Errors
/// `InvalidBuffer` for a zero-area buffer, `InvalidParameter` for NaN.
pub fn apply_grey(input: &PixelBuffer, intensity: f64) -> FilterResult<PixelBuffer> {
    ensure_non_empty(input, "apply_grey")?;
    let factor = clamp_intensity(intensity)?;

    trace!(width = input.width(), height = input.height(), intensity, factor, "apply_grey");
    debug!(factor, "Applying grey");

    map_rgb(input, |px| {
        let grey = clamp_channel(attenuate(luminance(px), factor));
        [grey, grey, grey]
    })
}
