//! Error types for the driver and canvas
//!
//! This module defines error types for configuration building ([`BuilderError`]),
//! display operations ([`Error`]) and raw font identifiers ([`UnknownFont`]).
//!
//! ## Error Types
//!
//! - [`BuilderError`] - Errors during configuration construction
//! - [`Error`] - Runtime errors during display and canvas operations
//! - [`InterfaceError`](crate::interface::InterfaceError) - Low-level hardware communication errors
//! - [`UnknownFont`] - A raw font id outside the supported set
//!
//! ## Example
//!
//! ```
//! use st7565_canvas::{Builder, BuilderError, Dimensions, Font};
//!
//! // Missing dimensions
//! let result = Builder::new().build();
//! assert!(matches!(result, Err(BuilderError::MissingDimensions)));
//!
//! // Rows must be whole pages
//! assert!(Dimensions::new(60, 128).is_err());
//!
//! // Only three fonts exist
//! assert!(Font::try_from(3u8).is_err());
//! ```

use crate::interface::DisplayInterface;

/// Maximum common outputs (rows) addressable as full pages
///
/// The ST7565 drives 65 commons; the 65th is a separate icon row
/// that is not part of the page-addressed graphics area.
pub const MAX_ROWS: u16 = 64;

/// Maximum segment outputs (columns) supported by the ST7565
pub const MAX_COLUMNS: u16 = 132;

/// Errors that can occur when interacting with the display
///
/// Generic over the interface type to preserve the specific error type.
#[derive(Debug)]
pub enum Error<I: DisplayInterface> {
    /// Interface error (SPI/GPIO)
    ///
    /// Wraps the underlying hardware error from the [`DisplayInterface`] implementation.
    Interface(I::Error),
    /// Buffer is too small for the display
    ///
    /// The provided buffer must be at least `dimensions.buffer_size()` bytes.
    BufferTooSmall {
        /// Required buffer size in bytes
        required: usize,
        /// Provided buffer size in bytes
        provided: usize,
    },
}

impl<I: DisplayInterface> core::fmt::Display for Error<I> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::Interface(e) => write!(f, "Interface error: {e:?}"),
            Self::BufferTooSmall { required, provided } => {
                write!(
                    f,
                    "Buffer too small: required {required} bytes, provided {provided}"
                )
            }
        }
    }
}

impl<I: DisplayInterface + core::fmt::Debug> core::error::Error for Error<I> {}

/// Errors that can occur when building configuration
#[derive(Debug)]
pub enum BuilderError {
    /// Dimensions were not specified
    ///
    /// [`Builder::dimensions()`](crate::config::Builder::dimensions) must be called before building.
    MissingDimensions,
    /// Invalid dimensions provided
    ///
    /// See [`Dimensions::new()`](crate::config::Dimensions::new) for constraints.
    InvalidDimensions {
        /// Number of rows (height) requested
        rows: u16,
        /// Number of columns (width) requested
        cols: u16,
    },
}

impl core::fmt::Display for BuilderError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::MissingDimensions => write!(f, "Dimensions must be specified"),
            Self::InvalidDimensions { rows, cols } => write!(
                f,
                "Invalid dimensions {rows}x{cols} (max {MAX_ROWS}x{MAX_COLUMNS}, rows must be multiple of 8)"
            ),
        }
    }
}

impl core::error::Error for BuilderError {}

/// A raw font identifier that does not name one of the canvas fonts
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct UnknownFont(pub u8);

impl core::fmt::Display for UnknownFont {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "Unknown font id {}", self.0)
    }
}

impl core::error::Error for UnknownFont {}
