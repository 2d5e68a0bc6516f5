//! Draw colors for monochrome LCDs
//!
//! The ST7565 stores one bit per pixel; a set bit darkens the liquid
//! crystal. The canvas draws with one of three colors:
//!
//! | Color     | Effect on the pixel bit |
//! |-----------|-------------------------|
//! | `White`   | cleared                 |
//! | `Black`   | set                     |
//! | `Inverse` | toggled                 |
//!
//! ## Example
//!
//! ```
//! use st7565_canvas::Color;
//!
//! assert!(Color::Black.apply(false));
//! assert!(!Color::White.apply(true));
//! assert!(Color::Inverse.apply(false));
//! assert!(!Color::Inverse.apply(true));
//! ```

/// Draw color of a monochrome panel
#[derive(Clone, Copy, PartialEq, Eq, Debug, Default)]
#[repr(u8)]
pub enum Color {
    /// Clear pixels
    White = 0,
    /// Set pixels
    #[default]
    Black = 1,
    /// Toggle pixels (XOR)
    Inverse = 2,
}

impl embedded_graphics_core::prelude::PixelColor for Color {
    type Raw = embedded_graphics_core::pixelcolor::raw::RawU8;
}

impl Color {
    /// Resulting pixel state when drawing over a pixel that is `current`
    pub fn apply(self, current: bool) -> bool {
        match self {
            Self::White => false,
            Self::Black => true,
            Self::Inverse => !current,
        }
    }

    /// Color used for the unset bits of a solid bitmap
    ///
    /// ```
    /// use st7565_canvas::Color;
    ///
    /// assert_eq!(Color::Black.background(), Color::White);
    /// assert_eq!(Color::White.background(), Color::Black);
    /// assert_eq!(Color::Inverse.background(), Color::White);
    /// ```
    pub fn background(self) -> Self {
        match self {
            Self::White => Self::Black,
            Self::Black | Self::Inverse => Self::White,
        }
    }
}

impl From<embedded_graphics_core::pixelcolor::BinaryColor> for Color {
    fn from(color: embedded_graphics_core::pixelcolor::BinaryColor) -> Self {
        match color {
            embedded_graphics_core::pixelcolor::BinaryColor::On => Self::Black,
            embedded_graphics_core::pixelcolor::BinaryColor::Off => Self::White,
        }
    }
}
