//! Colour adjustment filters: Contrast, Brightness, Channel amplify.
//!
//! These are pixel-wise operations that don't require spatial context,
//! apart from the whole-image channel averages used by [`amplify_channel`].
//! All arithmetic is integer and every result is clamped to 0-255.
//!
//! Alpha is always preserved unchanged.

use tracing::{debug, trace};

use crate::buffer::PixelBuffer;
use crate::error::{FilterError, FilterResult};
use crate::filters::core::{clamp_channel, ensure_non_empty, map_rgb};
use crate::filters::statistics::{average_channels, Channel};

/// Contrast value that zeroes the denominator of the gain formula.
pub const CONTRAST_SINGULARITY: i32 = 259;

/// Midpoint the contrast gain pivots around.
const CONTRAST_PIVOT: i64 = 128;

// ============================================================================
// Contrast
// ============================================================================

/// Integer contrast gain for `contrast`.
///
/// `259 * (contrast + 255) / (255 * (259 - contrast))`, truncated. This is 1
/// for `contrast == 0` and grows to 103 at `contrast == 254`.
///
/// # Errors
/// `InvalidParameter` when `contrast == 259`.
pub fn contrast_factor(contrast: i32) -> FilterResult<i64> {
    if contrast == CONTRAST_SINGULARITY {
        return Err(FilterError::InvalidParameter(format!(
            "contrast {} divides by zero",
            contrast
        )));
    }
    let c = contrast as i64;
    Ok((259 * (c + 255)) / (255 * (259 - c)))
}

/// Stretch every colour channel away from 128.
///
/// # Arguments
/// * `input` - Source buffer, not modified
/// * `contrast` - Expected range 0-254; 0 = no change
///
/// # Returns
/// New buffer with `factor * (v - 128) + 128` in each colour channel, where
/// the factor comes from [`contrast_factor`] and is fixed for the whole pass.
///
/// Repeating the filter is not idempotent: each pass multiplies the distance
/// from 128 again, until channels pin at 0 or 255.
pub fn amplify_contrast(input: &PixelBuffer, contrast: i32) -> FilterResult<PixelBuffer> {
    ensure_non_empty(input, "amplify_contrast")?;
    let factor = contrast_factor(contrast)?;

    trace!(width = input.width(), height = input.height(), contrast, factor, "amplify_contrast");
    debug!(contrast, "Applying contrast");

    let adjust = |v: u8| clamp_channel(factor * (v as i64 - CONTRAST_PIVOT) + CONTRAST_PIVOT);
    map_rgb(input, |px| [adjust(px.r), adjust(px.g), adjust(px.b)])
}

// ============================================================================
// Brightness
// ============================================================================

/// Shift every colour channel by a constant.
///
/// # Arguments
/// * `input` - Source buffer, not modified
/// * `amount` - Expected range -254 to 254; 0 = no change
///
/// # Returns
/// New buffer with `v + amount` in each colour channel, clamped
pub fn amplify_brightness(input: &PixelBuffer, amount: i32) -> FilterResult<PixelBuffer> {
    ensure_non_empty(input, "amplify_brightness")?;

    trace!(width = input.width(), height = input.height(), amount, "amplify_brightness");
    debug!(amount, "Applying brightness");

    let amount = amount as i64;
    let adjust = |v: u8| clamp_channel(v as i64 + amount);
    map_rgb(input, |px| [adjust(px.r), adjust(px.g), adjust(px.b)])
}

// ============================================================================
// Channel amplify
// ============================================================================

/// Boost (or suppress) one colour where it is above the image average.
///
/// The channel averages are computed once over `input` before any pixel is
/// touched. For each pixel, `diff = v - average`; if `diff > 0` the channel
/// becomes `average + diff * amount`, or `average + diff / amount` when
/// `reverse` is set. Pixels at or below the average keep their value, so
/// the effect pushes an already dominant hue further instead of shifting
/// the whole image.
///
/// # Arguments
/// * `input` - Source buffer, not modified
/// * `channel` - Channel to amplify; the other two are copied through
/// * `amount` - Multiplier (or divisor when `reverse`), expected positive
/// * `reverse` - Divide the excess instead of multiplying it
///
/// # Errors
/// `InvalidBuffer` for a zero-area buffer, `InvalidParameter` when `reverse`
/// is set and `amount == 0`.
pub fn amplify_channel(
    input: &PixelBuffer,
    channel: Channel,
    amount: i32,
    reverse: bool,
) -> FilterResult<PixelBuffer> {
    ensure_non_empty(input, "amplify_channel")?;
    if reverse && amount == 0 {
        return Err(FilterError::InvalidParameter(
            "reverse channel amplify by 0 divides by zero".into(),
        ));
    }

    let average = average_channels(input)?.get(channel);
    let index = channel.index();
    let amount = amount as i64;

    trace!(
        width = input.width(),
        height = input.height(),
        %channel,
        amount,
        reverse,
        average,
        "amplify_channel"
    );
    debug!(%channel, amount, reverse, "Amplifying channel");

    map_rgb(input, |px| {
        let mut rgb = [px.r, px.g, px.b];
        let diff = rgb[index] as i64 - average;
        if diff > 0 {
            let scaled = if reverse { diff / amount } else { diff * amount };
            rgb[index] = clamp_channel(average + scaled);
        }
        rgb
    })
}
