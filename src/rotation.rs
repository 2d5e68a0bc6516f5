//! Coordinate rotation utilities
//!
//! The ST7565 stores pixels in pages: each byte holds a vertical strip of
//! 8 pixels from one column, least significant bit at the top. Byte `n` of
//! page `p` is column `n`. When the canvas is rotated, logical coordinates
//! are first mapped back to native panel coordinates and then to a byte
//! index and bit mask.
//!
//! ## Rotation Modes
//!
//! - **Rotate0**: Native orientation
//! - **Rotate90**: 90° clockwise, width and height swapped
//! - **Rotate180**: 180° rotation, origin at bottom-right
//! - **Rotate270**: 270° clockwise (or 90° counter-clockwise)
//!
//! ## Example
//!
//! ```
//! use st7565_canvas::{rotation::apply_rotation, Rotation};
//!
//! // On a 128x64 panel pixel (0,0) is byte 0, bit 0
//! assert_eq!(apply_rotation(0, 0, 128, 64, Rotation::Rotate0), (0, 0x01));
//!
//! // Pixel (0,9) sits in the second page
//! assert_eq!(apply_rotation(0, 9, 128, 64, Rotation::Rotate0), (128, 0x02));
//! ```

use crate::config::Rotation;

/// Apply rotation transformation to get buffer index and bit mask
///
/// # Arguments
///
/// * `x` - Logical X coordinate
/// * `y` - Logical Y coordinate
/// * `width` - Native panel width in pixels (columns)
/// * `height` - Native panel height in pixels (rows, multiple of 8)
/// * `rotation` - Rotation mode
///
/// The caller must keep `(x, y)` within the rotated bounds.
///
/// # Returns
///
/// `(byte_index, bit_mask)` into a page-organized buffer.
pub fn apply_rotation(x: u32, y: u32, width: u32, height: u32, rotation: Rotation) -> (usize, u8) {
    let (px, py) = match rotation {
        Rotation::Rotate0 => (x, y),
        Rotation::Rotate90 => (width - 1 - y, x),
        Rotation::Rotate180 => (width - 1 - x, height - 1 - y),
        Rotation::Rotate270 => (y, height - 1 - x),
    };
    let index = ((py / 8) * width + px) as usize;
    let bit = 0x01 << (py % 8);
    (index, bit)
}
