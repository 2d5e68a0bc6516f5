//! ST7565 Canvas Driver
//!
//! A small 2D drawing canvas for monochrome LCD panels driven by the ST7565
//! controller over SPI, tuned for the ERC12864 128x64 module.
//!
//! ## Features
//!
//! - `no_std` compatible
//! - `embedded-hal` v1.0 support
//! - `embedded-graphics` integration
//! - Offset frames for drawing into a sub-region of the panel
//! - u8g2 fonts for text and symbols
//! - XBM bitmaps and icons
//! - Rotation support
//!
//! ## Usage
//!
//! ```rust,no_run
//! use core::convert::Infallible;
//! use embedded_hal::delay::DelayNs;
//! use embedded_hal::digital::OutputPin;
//! use embedded_hal::spi::{Operation, SpiDevice};
//! use st7565_canvas::{Builder, Canvas, Dimensions, Display, Font, Interface, Rotation};
//!
//! # struct MockSpi;
//! # impl embedded_hal::spi::ErrorType for MockSpi { type Error = Infallible; }
//! # impl SpiDevice for MockSpi {
//! #     fn transaction(
//! #         &mut self,
//! #         _operations: &mut [Operation<'_, u8>],
//! #     ) -> Result<(), Self::Error> {
//! #         Ok(())
//! #     }
//! # }
//! # struct MockPin;
//! # impl embedded_hal::digital::ErrorType for MockPin { type Error = Infallible; }
//! # impl OutputPin for MockPin {
//! #     fn set_low(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn set_high(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! # }
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let spi = MockSpi;
//! # let dc = MockPin;
//! # let rst = MockPin;
//! # let mut delay = MockDelay;
//! let interface = Interface::new(spi, dc, rst);
//! let config = match Builder::new()
//!     .dimensions(Dimensions::ERC12864)
//!     .rotation(Rotation::Rotate0)
//!     .build()
//! {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//!
//! let display = Display::new(interface, config);
//! let mut canvas = match Canvas::new(display, [0u8; 1024], &mut delay) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//!
//! canvas.set_font(Font::Primary);
//! canvas.draw_str(0, 10, Some("Hello"));
//! let _ = canvas.commit();
//! ```

#![no_std]

#[cfg(test)]
extern crate alloc;

/// Offset-aware drawing canvas
pub mod canvas;
/// Monochrome draw colors
pub mod color;
/// ST7565 command definitions
pub mod command;
/// Display configuration types and builder
pub mod config;
/// Core display operations
pub mod display;
/// Error types for the driver
pub mod error;
/// Canvas fonts
pub mod font;
/// Page-organized pixel buffer
pub mod framebuffer;
/// Icon resources
pub mod icon;
/// Hardware interface abstraction
pub mod interface;
/// Coordinate rotation utilities
pub mod rotation;
/// XBM bitmaps
pub mod xbm;

pub use canvas::Canvas;
pub use color::Color;
pub use config::{
    Bias, Builder, Config, DEFAULT_CONTRAST, Dimensions, MAX_COLUMNS, MAX_ROWS, Rotation,
};
pub use display::Display;
pub use error::{BuilderError, Error, UnknownFont};
pub use font::Font;
pub use framebuffer::FrameBuffer;
pub use icon::Icon;
pub use interface::InterfaceError;
pub use interface::{DisplayInterface, Interface, RESET_DELAY_MS};
pub use xbm::Xbm;
