//! Core utilities shared by the per-pixel filters.
//!
//! This module provides:
//! - Buffer and parameter validation
//! - Channel clamping
//! - The row-parallel pixel pass every filter is built on

use crate::buffer::{Pixel, PixelBuffer, CHANNELS};
use crate::error::{FilterError, FilterResult};

#[cfg(feature = "parallel")]
use rayon::prelude::*;

/// Lowest intensity accepted by grey, sepia and sketch.
pub const INTENSITY_MIN: f64 = 0.0;
/// Highest intensity accepted by grey, sepia and sketch; larger values are clamped here.
pub const INTENSITY_MAX: f64 = 0.5;

/// Reject zero-area buffers before a pass.
pub fn ensure_non_empty(input: &PixelBuffer, op: &str) -> FilterResult<()> {
    if input.is_empty() {
        return Err(FilterError::InvalidBuffer(format!(
            "{}: {}x{} buffer has no pixels",
            op,
            input.width(),
            input.height()
        )));
    }
    Ok(())
}

/// Clamp an intermediate channel value into 0..=255.
#[inline]
pub fn clamp_channel(v: i64) -> u8 {
    v.clamp(0, 255) as u8
}

/// Clamp an intensity factor into [0, 0.5].
///
/// Out-of-band values are clamped rather than rejected. NaN has no place in
/// the band and is rejected.
pub fn clamp_intensity(factor: f64) -> FilterResult<f64> {
    if factor.is_nan() {
        return Err(FilterError::InvalidParameter(
            "intensity factor is NaN".into(),
        ));
    }
    Ok(factor.clamp(INTENSITY_MIN, INTENSITY_MAX))
}

/// Scale an integer by `(1 - factor)`, truncating toward zero.
#[inline]
pub fn attenuate(value: i64, factor: f64) -> i64 {
    (value as f64 * (1.0 - factor)) as i64
}

/// Integer mean of R, G and B (truncating).
#[inline]
pub fn luminance(px: Pixel) -> i64 {
    (px.r as i64 + px.g as i64 + px.b as i64) / 3
}

/// Run `f` over every pixel of `input` and collect the results into a new buffer.
///
/// `f` returns the new R, G, B; alpha is copied through. Rows are processed
/// in parallel when the `parallel` feature is enabled; there is no
/// cross-pixel dependency so the result is identical either way.
pub fn map_rgb<F>(input: &PixelBuffer, f: F) -> FilterResult<PixelBuffer>
where
    F: Fn(Pixel) -> [u8; 3] + Send + Sync,
{
    let (width, height) = (input.width(), input.height());
    let row_len = width * CHANNELS;
    let src = input.as_raw();
    if src.is_empty() {
        return Ok(PixelBuffer::new(width, height));
    }
    let mut dst = vec![0u8; src.len()];

    #[cfg(feature = "parallel")]
    dst.par_chunks_mut(row_len)
        .zip(src.par_chunks(row_len))
        .for_each(|(dst_row, src_row)| map_row(dst_row, src_row, &f));

    #[cfg(not(feature = "parallel"))]
    dst.chunks_mut(row_len)
        .zip(src.chunks(row_len))
        .for_each(|(dst_row, src_row)| map_row(dst_row, src_row, &f));

    PixelBuffer::from_raw(width, height, dst)
}

#[inline]
fn map_row<F>(dst: &mut [u8], src: &[u8], f: &F)
where
    F: Fn(Pixel) -> [u8; 3],
{
    for (d, s) in dst.chunks_exact_mut(CHANNELS).zip(src.chunks_exact(CHANNELS)) {
        let [r, g, b] = f(Pixel::new(s[0], s[1], s[2], s[3]));
        d[0] = r;
        d[1] = g;
        d[2] = b;
        d[3] = s[3];
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_channel() {
        assert_eq!(clamp_channel(-40), 0);
        assert_eq!(clamp_channel(0), 0);
        assert_eq!(clamp_channel(128), 128);
        assert_eq!(clamp_channel(255), 255);
        assert_eq!(clamp_channel(10_000), 255);
    }

    #[test]
    fn test_clamp_intensity() {
        assert_eq!(clamp_intensity(0.25).unwrap(), 0.25);
        assert_eq!(clamp_intensity(0.7).unwrap(), 0.5);
        assert_eq!(clamp_intensity(-1.0).unwrap(), 0.0);
        assert_eq!(clamp_intensity(f64::INFINITY).unwrap(), 0.5);
        assert!(matches!(
            clamp_intensity(f64::NAN),
            Err(FilterError::InvalidParameter(_))
        ));
    }

    #[test]
    fn test_attenuate_truncates() {
        // 255 * 0.5 = 127.5 -> 127
        assert_eq!(attenuate(255, 0.5), 127);
        assert_eq!(attenuate(85, 0.0), 85);
    }

    #[test]
    fn test_luminance_truncates() {
        // (1 + 1 + 2) / 3 = 1
        assert_eq!(luminance(Pixel::new(1, 1, 2, 0)), 1);
        assert_eq!(luminance(Pixel::new(255, 255, 255, 0)), 255);
    }

    #[test]
    fn test_map_rgb_preserves_alpha_and_order() {
        let pixels: Vec<Pixel> = (0..6u8).map(|i| Pixel::new(i, 0, 0, 100 + i)).collect();
        let input = PixelBuffer::from_pixels(3, 2, pixels).unwrap();

        let out = map_rgb(&input, |px| [px.r * 2, 1, 2]).unwrap();

        assert_eq!(out.width(), 3);
        assert_eq!(out.height(), 2);
        for (i, px) in out.pixels().enumerate() {
            let i = i as u8;
            assert_eq!(px, Pixel::new(i * 2, 1, 2, 100 + i));
        }
    }

    #[test]
    fn test_ensure_non_empty() {
        assert!(ensure_non_empty(&PixelBuffer::new(1, 1), "op").is_ok());
        assert!(matches!(
            ensure_non_empty(&PixelBuffer::new(0, 3), "op"),
            Err(FilterError::InvalidBuffer(_))
        ));
        assert!(matches!(
            ensure_non_empty(&PixelBuffer::new(3, 0), "op"),
            Err(FilterError::InvalidBuffer(_))
        ));
    }
}
