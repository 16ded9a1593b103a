//! Stylize filters: Sepia, Sketch.
//!
//! These are artistic effect filters working on 8-bit RGBA buffers.
//! Both take an intensity factor that is clamped to 0.0-0.5 and darkens the
//! result by `(1 - intensity)`. Alpha is always preserved.

use tracing::{debug, trace};

use crate::buffer::{Pixel, PixelBuffer};
use crate::error::FilterResult;
use crate::filters::core::{
    attenuate, clamp_channel, clamp_intensity, ensure_non_empty, luminance, map_rgb,
};

// ============================================================================
// Sepia
// ============================================================================

/// Sepia tone matrix; row = output channel, column = input R, G, B.
pub const SEPIA_MATRIX: [[f64; 3]; 3] = [
    [0.393, 0.769, 0.189],
    [0.349, 0.686, 0.168],
    [0.272, 0.534, 0.131],
];

#[inline]
fn sepia_channel(weights: &[f64; 3], px: Pixel, factor: f64) -> u8 {
    // Each weighted term is truncated before summing
    let sum = (weights[0] * px.r as f64) as i64
        + (weights[1] * px.g as f64) as i64
        + (weights[2] * px.b as f64) as i64;
    clamp_channel(attenuate(sum, factor))
}

/// Apply a sepia tone.
///
/// All three output channels are computed from the source pixel's R, G and
/// B, never from a partially updated pixel.
///
/// # Arguments
/// * `input` - Source buffer, not modified
/// * `intensity` - Darkening factor, clamped to 0.0-0.5
///
/// # Errors
/// `InvalidBuffer` for a zero-area buffer, `InvalidParameter` for NaN.
pub fn apply_sepia(input: &PixelBuffer, intensity: f64) -> FilterResult<PixelBuffer> {
    ensure_non_empty(input, "apply_sepia")?;
    let factor = clamp_intensity(intensity)?;

    trace!(width = input.width(), height = input.height(), intensity, factor, "apply_sepia");
    debug!(factor, "Applying sepia");

    map_rgb(input, |px| {
        [
            sepia_channel(&SEPIA_MATRIX[0], px, factor),
            sepia_channel(&SEPIA_MATRIX[1], px, factor),
            sepia_channel(&SEPIA_MATRIX[2], px, factor),
        ]
    })
}

// ============================================================================
// Sketch
// ============================================================================

/// Adjusted luminance above this becomes white.
pub const SKETCH_WHITE_THRESHOLD: i64 = 120;
/// Adjusted luminance above this (and not above the white threshold) becomes grey.
pub const SKETCH_GREY_THRESHOLD: i64 = 100;

pub const SKETCH_WHITE: [u8; 3] = [255, 255, 255];
pub const SKETCH_GREY: [u8; 3] = [150, 150, 150];
pub const SKETCH_BLACK: [u8; 3] = [0, 0, 0];

/// Posterize into a flat three-tone sketch.
///
/// `adjusted = trunc(((R + G + B) / 3) * (1 - intensity))`, then:
/// - `adjusted > 120` → white (255, 255, 255)
/// - `adjusted > 100` → grey (150, 150, 150)
/// - otherwise → black (0, 0, 0)
///
/// # Arguments
/// * `input` - Source buffer, not modified
/// * `intensity` - Darkening factor, clamped to 0.0-0.5
///
/// # Errors
/// `InvalidBuffer` for a zero-area buffer, `InvalidParameter` for NaN.
pub fn apply_sketch(input: &PixelBuffer, intensity: f64) -> FilterResult<PixelBuffer> {
    ensure_non_empty(input, "apply_sketch")?;
    let factor = clamp_intensity(intensity)?;

    trace!(width = input.width(), height = input.height(), intensity, factor, "apply_sketch");
    debug!(factor, "Applying sketch");

    map_rgb(input, |px| {
        let adjusted = attenuate(luminance(px), factor);
        if adjusted > SKETCH_WHITE_THRESHOLD {
            SKETCH_WHITE
        } else if adjusted > SKETCH_GREY_THRESHOLD {
            SKETCH_GREY
        } else {
            SKETCH_BLACK
        }
    })
}
