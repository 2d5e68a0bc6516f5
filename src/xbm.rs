//! XBM bitmaps
//!
//! XBM stores one bit per pixel, rows top to bottom, each row padded to a
//! whole number of bytes, least significant bit leftmost. Bitmaps are drawn
//! solid: set bits use the draw color and clear bits use its
//! [`background`](crate::Color::background).

use embedded_graphics_core::{
    Drawable,
    draw_target::DrawTarget,
    geometry::{Dimensions, Point, Size},
    prelude::Pixel,
    primitives::Rectangle,
};

use crate::color::Color;

/// A positioned XBM bitmap
///
/// ```
/// use embedded_graphics::prelude::*;
/// use st7565_canvas::{Color, Dimensions, FrameBuffer, Rotation, Xbm};
///
/// let mut fb = FrameBuffer::new([0u8; 1024], Dimensions::ERC12864, Rotation::Rotate0);
///
/// // 3x2 bitmap: top row X.X, bottom row .X.
/// let xbm = Xbm::new(&[0b101, 0b010], 3, 2, Point::new(10, 10), Color::Black);
/// let _ = xbm.draw(&mut fb);
///
/// assert!(fb.pixel(10, 10));
/// assert!(!fb.pixel(11, 10));
/// assert!(fb.pixel(11, 11));
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Xbm<'a> {
    data: &'a [u8],
    size: Size,
    position: Point,
    color: Color,
}

impl<'a> Xbm<'a> {
    /// Create a bitmap of `width` x `height` pixels with its top-left
    /// corner at `position`
    pub fn new(data: &'a [u8], width: u32, height: u32, position: Point, color: Color) -> Self {
        Self {
            data,
            size: Size::new(width, height),
            position,
            color,
        }
    }

    /// Bytes per row
    pub fn stride(&self) -> usize {
        self.size.width.div_ceil(8) as usize
    }

    /// Pixels of the bitmap in draw order
    ///
    /// Pixels whose row lies beyond the end of `data` are not produced.
    pub fn pixels(&self) -> impl Iterator<Item = Pixel<Color>> + '_ {
        let stride = self.stride();
        let foreground = self.color;
        let background = self.color.background();
        (0..self.size.height).flat_map(move |row| {
            (0..self.size.width).filter_map(move |col| {
                let byte = self
                    .data
                    .get(row as usize * stride + col as usize / 8)?;
                let color = if byte & (1 << (col % 8)) != 0 {
                    foreground
                } else {
                    background
                };
                Some(Pixel(
                    self.position + Point::new(col as i32, row as i32),
                    color,
                ))
            })
        })
    }
}

impl Drawable for Xbm<'_> {
    type Color = Color;
    type Output = ();

    fn draw<D>(&self, target: &mut D) -> Result<Self::Output, D::Error>
    where
        D: DrawTarget<Color = Self::Color>,
    {
        target.draw_iter(self.pixels())
    }
}

impl Dimensions for Xbm<'_> {
    fn bounding_box(&self) -> Rectangle {
        Rectangle::new(self.position, self.size)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::vec::Vec;

    #[test]
    fn test_rows_are_byte_padded() {
        // 9 pixels wide needs two bytes per row
        let data = [0x00, 0x01, 0x01, 0x00];
        let xbm = Xbm::new(&data, 9, 2, Point::zero(), Color::Black);
        assert_eq!(xbm.stride(), 2);

        let set: Vec<Point> = xbm
            .pixels()
            .filter(|Pixel(_, color)| *color == Color::Black)
            .map(|Pixel(point, _)| point)
            .collect();
        assert_eq!(set, [Point::new(8, 0), Point::new(0, 1)]);
    }

    #[test]
    fn test_clear_bits_use_background() {
        let xbm = Xbm::new(&[0b01], 2, 1, Point::new(4, 4), Color::Inverse);
        let pixels: Vec<Pixel<Color>> = xbm.pixels().collect();
        assert_eq!(
            pixels,
            [
                Pixel(Point::new(4, 4), Color::Inverse),
                Pixel(Point::new(5, 4), Color::White),
            ]
        );
    }

    #[test]
    fn test_short_data_stops_early() {
        let xbm = Xbm::new(&[0xFF], 8, 4, Point::zero(), Color::Black);
        assert_eq!(xbm.pixels().count(), 8);
    }

    #[test]
    fn test_bounding_box() {
        let xbm = Xbm::new(&[], 10, 12, Point::new(1, 2), Color::Black);
        assert_eq!(
            xbm.bounding_box(),
            Rectangle::new(Point::new(1, 2), Size::new(10, 12))
        );
    }
}
