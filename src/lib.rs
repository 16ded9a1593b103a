//! photofilter
//!
//! Pixel-level photo filters over RGBA buffers: contrast, brightness, grey,
//! sepia, sketch and single-channel amplify, with Python bindings via PyO3
//! and WASM bindings for JavaScript.
//!
//! ## Image Format
//! Every filter works on a [`PixelBuffer`]: width × height RGBA pixels, u8 per
//! channel, row-major (`index = y * width + x`). Bindings accept the same
//! layout as a flat byte slice (WASM) or a `(height, width, 4)` array (Python).
//!
//! ## Filter Architecture
//! Filters are pure: they read the input buffer and return a new one of the
//! same size, so a caller can keep the decoded original and re-filter it for
//! every edit. [`EditSession`] packages that pattern with an undo stack.
//!
//! ## Features
//! - `parallel` (default): row-parallel pixel passes with rayon
//! - `python`: PyO3 extension module `photofilter`
//! - `wasm`: wasm-bindgen exports

pub mod buffer;
pub mod error;
pub mod filters;
pub mod session;

#[cfg(feature = "wasm")]
pub mod wasm;

pub use buffer::{Pixel, PixelBuffer};
pub use error::{FilterError, FilterResult};
pub use filters::{
    amplify_brightness, amplify_channel, amplify_contrast, apply_grey, apply_sepia, apply_sketch,
    average_channels, Channel, ChannelAverages, Filter, FilterKind,
};
pub use session::EditSession;

// Python bindings (only when python feature is enabled)
#[cfg(feature = "python")]
mod python {
    use numpy::{IntoPyArray, PyArray3, PyReadonlyArray3};
    use pyo3::exceptions::PyValueError;
    use pyo3::prelude::*;

    use crate::buffer::PixelBuffer;
    use crate::error::FilterError;
    use crate::filters::{self, Channel};

    impl From<FilterError> for PyErr {
        fn from(err: FilterError) -> PyErr {
            PyValueError::new_err(err.to_string())
        }
    }

    fn to_buffer(image: PyReadonlyArray3<'_, u8>) -> PyResult<PixelBuffer> {
        Ok(PixelBuffer::from_array(image.as_array().to_owned())?)
    }

    // ========================================================================
    // Colour Adjustment Filters
    // ========================================================================

    /// Stretch RGB away from 128. Expects a (H, W, 4) u8 array; contrast 0-254.
    #[pyfunction]
    pub fn amplify_contrast<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        contrast: i32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::amplify_contrast(&to_buffer(image)?, contrast)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Add `amount` (-254 to 254) to each colour channel.
    #[pyfunction]
    pub fn amplify_brightness<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        amount: i32,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::amplify_brightness(&to_buffer(image)?, amount)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Amplify one channel ("red", "green" or "blue") above its image average.
    #[pyfunction]
    #[pyo3(signature = (image, channel, amount, reverse=false))]
    pub fn amplify_channel<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        channel: &str,
        amount: i32,
        reverse: bool,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let channel: Channel = channel.parse()?;
        let result = filters::amplify_channel(&to_buffer(image)?, channel, amount, reverse)?;
        Ok(result.into_array().into_pyarray(py))
    }

    // ========================================================================
    // Grey & Stylize Filters
    // ========================================================================

    /// Grey with darkening factor 0.0-0.5.
    #[pyfunction]
    #[pyo3(signature = (image, intensity=0.0))]
    pub fn apply_grey<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        intensity: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::apply_grey(&to_buffer(image)?, intensity)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Sepia tone with darkening factor 0.0-0.5.
    #[pyfunction]
    #[pyo3(signature = (image, intensity=0.0))]
    pub fn apply_sepia<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        intensity: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::apply_sepia(&to_buffer(image)?, intensity)?;
        Ok(result.into_array().into_pyarray(py))
    }

    /// Three-tone sketch with darkening factor 0.0-0.5.
    #[pyfunction]
    #[pyo3(signature = (image, intensity=0.0))]
    pub fn apply_sketch<'py>(
        py: Python<'py>,
        image: PyReadonlyArray3<'py, u8>,
        intensity: f64,
    ) -> PyResult<Bound<'py, PyArray3<u8>>> {
        let result = filters::apply_sketch(&to_buffer(image)?, intensity)?;
        Ok(result.into_array().into_pyarray(py))
    }

    // ========================================================================
    // Statistics
    // ========================================================================

    /// Integer mean (red, green, blue) over the whole image.
    #[pyfunction]
    pub fn average_channels<'py>(image: PyReadonlyArray3<'py, u8>) -> PyResult<(i64, i64, i64)> {
        let avg = filters::average_channels(&to_buffer(image)?)?;
        Ok((avg.red, avg.green, avg.blue))
    }

    /// photofilter extension module
    #[pymodule]
    pub fn photofilter(m: &Bound<'_, PyModule>) -> PyResult<()> {
        // Colour adjustment filters
        m.add_function(wrap_pyfunction!(amplify_contrast, m)?)?;
        m.add_function(wrap_pyfunction!(amplify_brightness, m)?)?;
        m.add_function(wrap_pyfunction!(amplify_channel, m)?)?;

        // Grey & stylize filters
        m.add_function(wrap_pyfunction!(apply_grey, m)?)?;
        m.add_function(wrap_pyfunction!(apply_sepia, m)?)?;
        m.add_function(wrap_pyfunction!(apply_sketch, m)?)?;

        // Statistics
        m.add_function(wrap_pyfunction!(average_channels, m)?)?;

        Ok(())
    }
}

#[cfg(feature = "python")]
pub use python::photofilter;
