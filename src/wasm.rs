//! WebAssembly exports for photofilter.
//!
//! These functions are exposed to JavaScript via wasm-bindgen.
//!
//! Every export takes a flat RGBA byte array (length = width * height * 4,
//! row-major, e.g. `ImageData.data`) and returns a new array of the same
//! length. Filter errors surface as thrown JavaScript `Error`s.

use wasm_bindgen::prelude::*;

use crate::buffer::PixelBuffer;
use crate::filters::{self, Channel};

fn to_buffer(data: &[u8], width: usize, height: usize) -> Result<PixelBuffer, JsError> {
    Ok(PixelBuffer::from_raw(width, height, data.to_vec())?)
}

// ============================================================================
// Colour Adjustment Filters
// ============================================================================

/// Stretch RGB away from 128.
///
/// # Arguments
/// * `data` - Flat array of RGBA bytes (length = width * height * 4)
/// * `width` - Image width in pixels
/// * `height` - Image height in pixels
/// * `contrast` - 0-254; 259 is rejected
#[wasm_bindgen]
pub fn amplify_contrast_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    contrast: i32,
) -> Result<Vec<u8>, JsError> {
    let input = to_buffer(data, width, height)?;
    Ok(filters::amplify_contrast(&input, contrast)?.into_raw())
}

/// Add `amount` (-254 to 254) to each colour channel.
#[wasm_bindgen]
pub fn amplify_brightness_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    amount: i32,
) -> Result<Vec<u8>, JsError> {
    let input = to_buffer(data, width, height)?;
    Ok(filters::amplify_brightness(&input, amount)?.into_raw())
}

/// Amplify one channel above its image average.
///
/// # Arguments
/// * `channel` - "red", "green" or "blue" (or "r", "g", "b")
/// * `amount` - Multiplier, or divisor when `reverse` is set
/// * `reverse` - Suppress the channel instead of boosting it
#[wasm_bindgen]
pub fn amplify_channel_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    channel: &str,
    amount: i32,
    reverse: bool,
) -> Result<Vec<u8>, JsError> {
    let channel: Channel = channel.parse()?;
    let input = to_buffer(data, width, height)?;
    Ok(filters::amplify_channel(&input, channel, amount, reverse)?.into_raw())
}

// ============================================================================
// Grey & Stylize Filters
// ============================================================================

/// Grey with darkening factor 0.0-0.5.
#[wasm_bindgen]
pub fn apply_grey_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    intensity: f64,
) -> Result<Vec<u8>, JsError> {
    let input = to_buffer(data, width, height)?;
    Ok(filters::apply_grey(&input, intensity)?.into_raw())
}

/// Sepia tone with darkening factor 0.0-0.5.
#[wasm_bindgen]
pub fn apply_sepia_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    intensity: f64,
) -> Result<Vec<u8>, JsError> {
    let input = to_buffer(data, width, height)?;
    Ok(filters::apply_sepia(&input, intensity)?.into_raw())
}

/// Three-tone sketch with darkening factor 0.0-0.5.
#[wasm_bindgen]
pub fn apply_sketch_wasm(
    data: &[u8],
    width: usize,
    height: usize,
    intensity: f64,
) -> Result<Vec<u8>, JsError> {
    let input = to_buffer(data, width, height)?;
    Ok(filters::apply_sketch(&input, intensity)?.into_raw())
}
