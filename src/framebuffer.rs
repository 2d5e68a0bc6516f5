//! In-memory pixel buffer
//!
//! This module provides the [`FrameBuffer`] struct, a page-organized 1bpp
//! buffer laid out exactly like ST7565 display RAM. It implements the
//! [`DrawTarget`] trait from the embedded-graphics ecosystem so every
//! embedded-graphics primitive and font renderer can draw into it.
//!
//! Pixels outside the panel are discarded.
//!
//! ## Example
//!
//! ```
//! use embedded_graphics::{
//!     prelude::*,
//!     primitives::{Line, PrimitiveStyle},
//! };
//! use st7565_canvas::{Color, Dimensions, FrameBuffer, Rotation};
//!
//! let mut fb = FrameBuffer::new([0u8; 1024], Dimensions::ERC12864, Rotation::Rotate0);
//!
//! let _ = Line::new(Point::new(0, 0), Point::new(127, 63))
//!     .into_styled(PrimitiveStyle::with_stroke(Color::Black, 1))
//!     .draw(&mut fb);
//!
//! assert!(fb.pixel(0, 0));
//! assert!(fb.pixel(127, 63));
//! ```

use core::convert::Infallible;
use embedded_graphics_core::{
    draw_target::DrawTarget,
    geometry::{OriginDimensions, Point, Size},
    prelude::Pixel,
};

use crate::color::Color;
use crate::config::{Dimensions, Rotation};
use crate::rotation::apply_rotation;

/// Page-organized monochrome pixel buffer
///
/// ## Type Parameters
///
/// * `B` - Buffer type implementing `AsMut<[u8]>` and `AsRef<[u8]>`
pub struct FrameBuffer<B>
where
    B: AsMut<[u8]> + AsRef<[u8]>,
{
    /// Pixel memory
    buffer: B,
    /// Native panel dimensions
    dimensions: Dimensions,
    /// Logical rotation applied to every pixel
    rotation: Rotation,
}

impl<B> FrameBuffer<B>
where
    B: AsMut<[u8]> + AsRef<[u8]>,
{
    /// Create a new FrameBuffer
    ///
    /// # Panics
    ///
    /// Panics if the buffer is smaller than `dimensions.buffer_size()`.
    pub fn new(buffer: B, dimensions: Dimensions, rotation: Rotation) -> Self {
        let required = dimensions.buffer_size();
        assert!(
            buffer.as_ref().len() >= required,
            "buffer too small: required {} bytes, got {}",
            required,
            buffer.as_ref().len()
        );
        Self {
            buffer,
            dimensions,
            rotation,
        }
    }

    /// Try to create a new FrameBuffer
    ///
    /// This is the fallible version of [`new`](Self::new); on failure the
    /// buffer is handed back together with the required size in bytes.
    pub fn try_new(
        buffer: B,
        dimensions: Dimensions,
        rotation: Rotation,
    ) -> Result<Self, (B, usize)> {
        if buffer.as_ref().len() < dimensions.buffer_size() {
            return Err((buffer, dimensions.buffer_size()));
        }
        Ok(Self {
            buffer,
            dimensions,
            rotation,
        })
    }

    /// Blank every pixel
    pub fn clear(&mut self) {
        self.buffer.as_mut().fill(0x00);
    }

    /// Raw buffer contents, one byte per column per page
    pub fn buffer(&self) -> &[u8] {
        &self.buffer.as_ref()[..self.dimensions.buffer_size()]
    }

    /// Native panel dimensions
    pub fn dimensions(&self) -> Dimensions {
        self.dimensions
    }

    /// Current rotation
    pub fn rotation(&self) -> Rotation {
        self.rotation
    }

    /// Give back the pixel memory
    pub fn release(self) -> B {
        self.buffer
    }

    /// Whether the pixel at logical `(x, y)` is set
    ///
    /// Coordinates outside the buffer read as unset.
    pub fn pixel(&self, x: u32, y: u32) -> bool {
        let sz = self.size();
        if x >= sz.width || y >= sz.height {
            return false;
        }
        let (index, bit) = self.locate(x, y);
        self.buffer
            .as_ref()
            .get(index)
            .is_some_and(|byte| byte & bit != 0)
    }

    /// Draw a single pixel in `color`
    ///
    /// Coordinates outside the buffer are ignored.
    pub fn set_pixel(&mut self, x: u32, y: u32, color: Color) {
        let sz = self.size();
        if x >= sz.width || y >= sz.height {
            return;
        }
        let (index, bit) = self.locate(x, y);
        let Some(byte) = self.buffer.as_mut().get_mut(index) else {
            return;
        };
        if color.apply(*byte & bit != 0) {
            *byte |= bit;
        } else {
            *byte &= !bit;
        }
    }

    fn locate(&self, x: u32, y: u32) -> (usize, u8) {
        apply_rotation(
            x,
            y,
            self.dimensions.cols as u32,
            self.dimensions.rows as u32,
            self.rotation,
        )
    }
}

impl<B> DrawTarget for FrameBuffer<B>
where
    B: AsMut<[u8]> + AsRef<[u8]>,
{
    type Color = Color;
    type Error = Infallible;

    fn draw_iter<Iter>(&mut self, pixels: Iter) -> Result<(), Self::Error>
    where
        Iter: IntoIterator<Item = Pixel<Self::Color>>,
    {
        for Pixel(Point { x, y }, color) in pixels {
            if x < 0 || y < 0 {
                continue;
            }
            self.set_pixel(x as u32, y as u32, color);
        }

        Ok(())
    }
}

impl<B> OriginDimensions for FrameBuffer<B>
where
    B: AsMut<[u8]> + AsRef<[u8]>,
{
    fn size(&self) -> Size {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => {
                Size::new(self.dimensions.cols as u32, self.dimensions.rows as u32)
            }
            Rotation::Rotate90 | Rotation::Rotate270 => {
                Size::new(self.dimensions.rows as u32, self.dimensions.cols as u32)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn test_fb(rotation: Rotation) -> FrameBuffer<[u8; 1024]> {
        FrameBuffer::new([0u8; 1024], Dimensions::ERC12864, rotation)
    }

    #[test]
    fn test_set_pixel_page_layout() {
        let mut fb = test_fb(Rotation::Rotate0);
        fb.set_pixel(3, 10, Color::Black);
        assert_eq!(fb.buffer()[128 + 3], 0x04);
        assert!(fb.pixel(3, 10));
    }

    #[test]
    fn test_white_clears_pixel() {
        let mut fb = test_fb(Rotation::Rotate0);
        fb.set_pixel(5, 5, Color::Black);
        fb.set_pixel(5, 5, Color::White);
        assert!(!fb.pixel(5, 5));
    }

    #[test]
    fn test_inverse_toggles_pixel() {
        let mut fb = test_fb(Rotation::Rotate0);
        fb.set_pixel(1, 1, Color::Inverse);
        assert!(fb.pixel(1, 1));
        fb.set_pixel(1, 1, Color::Inverse);
        assert!(!fb.pixel(1, 1));
    }

    #[test]
    fn test_out_of_bounds_is_discarded() {
        let mut fb = test_fb(Rotation::Rotate0);
        fb.set_pixel(128, 0, Color::Black);
        fb.set_pixel(0, 64, Color::Black);
        let _ = fb.draw_iter([Pixel(Point::new(-1, 3), Color::Black)]);
        assert!(fb.buffer().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_clear_blanks_buffer() {
        let mut fb = FrameBuffer::new([0xFFu8; 1024], Dimensions::ERC12864, Rotation::Rotate0);
        fb.clear();
        assert!(fb.buffer().iter().all(|byte| *byte == 0));
    }

    #[test]
    fn test_rotated_size() {
        assert_eq!(test_fb(Rotation::Rotate0).size(), Size::new(128, 64));
        assert_eq!(test_fb(Rotation::Rotate90).size(), Size::new(64, 128));
    }

    #[test]
    fn test_rotate180_origin_is_last_pixel() {
        let mut fb = test_fb(Rotation::Rotate180);
        fb.set_pixel(0, 0, Color::Black);
        assert_eq!(fb.buffer()[1023], 0x80);
    }

    #[test]
    fn test_try_new_small_buffer_returns_buffer() {
        let result = FrameBuffer::try_new([0u8; 10], Dimensions::ERC12864, Rotation::Rotate0);
        assert!(matches!(result, Err((_, 1024))));
    }

    #[test]
    #[should_panic(expected = "buffer too small")]
    fn test_new_panics_on_small_buffer() {
        let _ = FrameBuffer::new([0u8; 10], Dimensions::ERC12864, Rotation::Rotate0);
    }
}
