//! Icon resources

use embedded_graphics_core::geometry::Point;

use crate::color::Color;
use crate::xbm::Xbm;

/// A named XBM bitmap with fixed dimensions
///
/// ```
/// use st7565_canvas::Icon;
///
/// static CHECK: Icon = Icon::new(8, 2, &[0x80, 0x40]);
/// assert_eq!(CHECK.width(), 8);
/// assert_eq!(CHECK.height(), 2);
/// assert_eq!(CHECK.data(), &[0x80, 0x40]);
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Icon {
    width: u8,
    height: u8,
    data: &'static [u8],
}

impl Icon {
    /// Create an icon from XBM data
    pub const fn new(width: u8, height: u8, data: &'static [u8]) -> Self {
        Self {
            width,
            height,
            data,
        }
    }

    /// Width in pixels
    pub const fn width(&self) -> u8 {
        self.width
    }

    /// Height in pixels
    pub const fn height(&self) -> u8 {
        self.height
    }

    /// Raw XBM bytes
    pub const fn data(&self) -> &'static [u8] {
        self.data
    }

    /// Bitmap of this icon placed at `position`
    pub fn xbm(&self, position: Point, color: Color) -> Xbm<'static> {
        Xbm::new(
            self.data,
            self.width.into(),
            self.height.into(),
            position,
            color,
        )
    }
}
