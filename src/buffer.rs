//! RGBA pixel storage shared by every filter.
//!
//! A [`PixelBuffer`] is a fixed-size raster stored as an `(height, width, 4)`
//! u8 array in row-major order, so the pixel at `(x, y)` lives at flat index
//! `y * width + x`. The buffer never changes size after construction; only
//! its contents can be written.
//!
//! Decoding a source image into a buffer, and encoding one back for display,
//! is left to the caller: [`PixelBuffer::from_raw`] and
//! [`PixelBuffer::into_raw`] are the hand-off points.

use ndarray::{Array3, ArrayView3};

use crate::error::{FilterError, FilterResult};

/// Number of interleaved channels per pixel (R, G, B, A).
pub const CHANNELS: usize = 4;

/// A single RGBA pixel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Pixel {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Pixel {
    pub const fn new(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    /// Opaque pixel with the given colour.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn to_array(self) -> [u8; 4] {
        [self.r, self.g, self.b, self.a]
    }
}

impl From<[u8; 4]> for Pixel {
    fn from([r, g, b, a]: [u8; 4]) -> Self {
        Self { r, g, b, a }
    }
}

impl From<Pixel> for [u8; 4] {
    fn from(p: Pixel) -> Self {
        p.to_array()
    }
}

/// Fixed-size RGBA raster.
///
/// Filters take a buffer by reference and always return a new one, so a
/// decoded original can be filtered any number of times from the same
/// baseline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PixelBuffer {
    // Always (height, width, 4) in standard layout.
    data: Array3<u8>,
}

impl PixelBuffer {
    /// Create a transparent black buffer.
    ///
    /// Zero-sized buffers are allowed here; filters reject them.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            data: Array3::<u8>::zeros((height, width, CHANNELS)),
        }
    }

    /// Create a buffer with every pixel set to `pixel`.
    pub fn filled(width: usize, height: usize, pixel: Pixel) -> Self {
        let raw = pixel.to_array().repeat(width * height);
        Self {
            data: Array3::from_shape_vec((height, width, CHANNELS), raw)
                .expect("Shape mismatch in PixelBuffer::filled"),
        }
    }

    /// Wrap flat row-major RGBA bytes (length `width * height * 4`).
    pub fn from_raw(width: usize, height: usize, data: Vec<u8>) -> FilterResult<Self> {
        let expected = width
            .checked_mul(height)
            .and_then(|n| n.checked_mul(CHANNELS))
            .ok_or_else(|| {
                FilterError::InvalidBuffer(format!("{}x{} overflows", width, height))
            })?;

        if data.len() != expected {
            return Err(FilterError::InvalidBuffer(format!(
                "expected {} bytes for {}x{} RGBA, got {}",
                expected,
                width,
                height,
                data.len()
            )));
        }

        let data = Array3::from_shape_vec((height, width, CHANNELS), data)
            .map_err(|e| FilterError::InvalidBuffer(e.to_string()))?;
        Ok(Self { data })
    }

    /// Build a buffer from row-major pixels (length `width * height`).
    pub fn from_pixels(width: usize, height: usize, pixels: Vec<Pixel>) -> FilterResult<Self> {
        let expected = width.checked_mul(height).ok_or_else(|| {
            FilterError::InvalidBuffer(format!("{}x{} overflows", width, height))
        })?;

        if pixels.len() != expected {
            return Err(FilterError::InvalidBuffer(format!(
                "expected {} pixels for {}x{}, got {}",
                expected,
                width,
                height,
                pixels.len()
            )));
        }

        let raw = pixels.into_iter().flat_map(Pixel::to_array).collect();
        Self::from_raw(width, height, raw)
    }

    /// Wrap an `(height, width, 4)` array.
    pub fn from_array(array: Array3<u8>) -> FilterResult<Self> {
        let (_, _, channels) = array.dim();
        if channels != CHANNELS {
            return Err(FilterError::InvalidBuffer(format!(
                "expected {} channels, got {}",
                CHANNELS, channels
            )));
        }

        // Copy in logical order so the storage is contiguous from offset 0
        let (height, width, _) = array.dim();
        let raw: Vec<u8> = array.iter().copied().collect();
        Self::from_raw(width, height, raw)
    }

    pub fn width(&self) -> usize {
        self.data.dim().1
    }

    pub fn height(&self) -> usize {
        self.data.dim().0
    }

    /// `width * height`.
    pub fn pixel_count(&self) -> usize {
        self.width() * self.height()
    }

    /// True for a zero-area raster.
    pub fn is_empty(&self) -> bool {
        self.pixel_count() == 0
    }

    /// Read the pixel at `(x, y)`.
    pub fn get(&self, x: usize, y: usize) -> FilterResult<Pixel> {
        self.check_bounds(x, y)?;
        Ok(Pixel::new(
            self.data[[y, x, 0]],
            self.data[[y, x, 1]],
            self.data[[y, x, 2]],
            self.data[[y, x, 3]],
        ))
    }

    /// Overwrite the pixel at `(x, y)`.
    pub fn set(&mut self, x: usize, y: usize, pixel: Pixel) -> FilterResult<()> {
        self.check_bounds(x, y)?;
        self.data[[y, x, 0]] = pixel.r;
        self.data[[y, x, 1]] = pixel.g;
        self.data[[y, x, 2]] = pixel.b;
        self.data[[y, x, 3]] = pixel.a;
        Ok(())
    }

    fn check_bounds(&self, x: usize, y: usize) -> FilterResult<()> {
        if x >= self.width() || y >= self.height() {
            return Err(FilterError::IndexOutOfRange {
                x,
                y,
                width: self.width(),
                height: self.height(),
            });
        }
        Ok(())
    }

    /// Iterate pixels in row-major order.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel> + '_ {
        self.as_raw()
            .chunks_exact(CHANNELS)
            .map(|c| Pixel::new(c[0], c[1], c[2], c[3]))
    }

    /// Flat row-major RGBA bytes.
    pub fn as_raw(&self) -> &[u8] {
        self.data
            .as_slice()
            .expect("pixel storage is always in standard layout")
    }

    /// Consume the buffer, returning flat row-major RGBA bytes.
    pub fn into_raw(self) -> Vec<u8> {
        self.data.into_raw_vec_and_offset().0
    }

    /// `(height, width, 4)` view of the pixels.
    pub fn view(&self) -> ArrayView3<'_, u8> {
        self.data.view()
    }

    pub fn into_array(self) -> Array3<u8> {
        self.data
    }
}
