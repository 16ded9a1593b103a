//! Filter modules for photo editing effects.
//!
//! ## Buffer Format
//!
//! Every filter reads a [`PixelBuffer`]: row-major RGBA, u8 per channel.
//! Filters never modify their input; each call returns a newly allocated
//! buffer with the same dimensions.
//!
//! ## Architecture
//!
//! All filters follow these principles:
//! - **Pure** - Deterministic, no shared state, safe to call concurrently
//! - **Integer math** - Intermediate values are truncated toward zero at
//!   fixed points in each formula, then clamped to 0-255
//! - **Alpha preservation** - Alpha is always copied through unchanged
//! - **Row-parallel** - Pixel passes use rayon when the `parallel` feature is on
//!
//! ## Filters
//!
//! | Filter | Parameter | Domain |
//! |--------|-----------|--------|
//! | [`amplify_contrast`] | `i32` | 0-254, 259 rejected |
//! | [`amplify_brightness`] | `i32` | -254-254 |
//! | [`apply_grey`] | `f64` | 0.0-0.5, clamped |
//! | [`apply_sepia`] | `f64` | 0.0-0.5, clamped |
//! | [`apply_sketch`] | `f64` | 0.0-0.5, clamped |
//! | [`amplify_channel`] | `i32` + channel + reverse | positive; 0 rejected when reversed |
//!
//! [`Filter`] bundles a filter with its parameter so callers can dispatch
//! through a single value.

pub mod core;
pub mod statistics;
pub mod color_adjust;
pub mod grayscale;
pub mod stylize;

use std::fmt;
use std::ops::RangeInclusive;

use crate::buffer::PixelBuffer;
use crate::error::{FilterError, FilterResult};

pub use self::color_adjust::{amplify_brightness, amplify_channel, amplify_contrast, contrast_factor};
pub use self::core::{INTENSITY_MAX, INTENSITY_MIN};
pub use self::grayscale::apply_grey;
pub use self::statistics::{average_channels, Channel, ChannelAverages};
pub use self::stylize::{apply_sepia, apply_sketch};

/// Documented contrast domain.
pub const CONTRAST_RANGE: RangeInclusive<i32> = 0..=254;
/// Documented brightness domain.
pub const BRIGHTNESS_RANGE: RangeInclusive<i32> = -254..=254;
/// Intensity band for grey, sepia and sketch; values outside are clamped.
pub const INTENSITY_RANGE: RangeInclusive<f64> = INTENSITY_MIN..=INTENSITY_MAX;

/// A filter together with its parameter.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Filter {
    Contrast(i32),
    Brightness(i32),
    Grey(f64),
    Sepia(f64),
    Sketch(f64),
    AmplifyChannel {
        channel: Channel,
        amount: i32,
        reverse: bool,
    },
}

impl Filter {
    pub fn name(&self) -> &'static str {
        match self {
            Filter::Contrast(_) => "contrast",
            Filter::Brightness(_) => "brightness",
            Filter::Grey(_) => "grey",
            Filter::Sepia(_) => "sepia",
            Filter::Sketch(_) => "sketch",
            Filter::AmplifyChannel { .. } => "amplify_channel",
        }
    }

    /// Check the parameter without touching any pixels.
    ///
    /// Only values that would make the arithmetic undefined are rejected;
    /// everything else is handled by clamping inside the filter.
    pub fn validate(&self) -> FilterResult<()> {
        match *self {
            Filter::Contrast(contrast) => contrast_factor(contrast).map(|_| ()),
            Filter::Brightness(_) => Ok(()),
            Filter::Grey(f) | Filter::Sepia(f) | Filter::Sketch(f) => {
                self::core::clamp_intensity(f).map(|_| ())
            }
            Filter::AmplifyChannel { amount, reverse, .. } => {
                if reverse && amount == 0 {
                    Err(FilterError::InvalidParameter(
                        "reverse channel amplify by 0 divides by zero".into(),
                    ))
                } else {
                    Ok(())
                }
            }
        }
    }

    /// Run the filter on `input`, returning a new buffer.
    pub fn apply(&self, input: &PixelBuffer) -> FilterResult<PixelBuffer> {
        match *self {
            Filter::Contrast(contrast) => amplify_contrast(input, contrast),
            Filter::Brightness(amount) => amplify_brightness(input, amount),
            Filter::Grey(f) => apply_grey(input, f),
            Filter::Sepia(f) => apply_sepia(input, f),
            Filter::Sketch(f) => apply_sketch(input, f),
            Filter::AmplifyChannel { channel, amount, reverse } => {
                amplify_channel(input, channel, amount, reverse)
            }
        }
    }
}

impl fmt::Display for Filter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match *self {
            Filter::Contrast(v) | Filter::Brightness(v) => write!(f, "{}({})", self.name(), v),
            Filter::Grey(v) | Filter::Sepia(v) | Filter::Sketch(v) => {
                write!(f, "{}({})", self.name(), v)
            }
            Filter::AmplifyChannel { channel, amount, reverse } => {
                let op = if reverse { "/" } else { "*" };
                write!(f, "{}({} {} {})", self.name(), channel, op, amount)
            }
        }
    }
}

/// The filters an editor exposes on a single value slider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum FilterKind {
    Contrast,
    Brightness,
    Grey,
    Sepia,
    Sketch,
}

impl FilterKind {
    pub const ALL: [FilterKind; 5] = [
        FilterKind::Contrast,
        FilterKind::Brightness,
        FilterKind::Grey,
        FilterKind::Sepia,
        FilterKind::Sketch,
    ];

    /// Parameter domain as `(min, max)`.
    pub fn range(self) -> (f64, f64) {
        match self {
            FilterKind::Contrast => (*CONTRAST_RANGE.start() as f64, *CONTRAST_RANGE.end() as f64),
            FilterKind::Brightness => {
                (*BRIGHTNESS_RANGE.start() as f64, *BRIGHTNESS_RANGE.end() as f64)
            }
            FilterKind::Grey | FilterKind::Sepia | FilterKind::Sketch => {
                (*INTENSITY_RANGE.start(), *INTENSITY_RANGE.end())
            }
        }
    }

    /// Build a [`Filter`] from a slider value.
    ///
    /// Integer filters truncate the value toward zero.
    pub fn with_value(self, value: f64) -> Filter {
        match self {
            FilterKind::Contrast => Filter::Contrast(value as i32),
            FilterKind::Brightness => Filter::Brightness(value as i32),
            FilterKind::Grey => Filter::Grey(value),
            FilterKind::Sepia => Filter::Sepia(value),
            FilterKind::Sketch => Filter::Sketch(value),
        }
    }
}
