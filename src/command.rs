//! ST7565 command definitions
//!
//! This module defines the command bytes used to control the ST7565 LCD
//! controller. Commands are sent over SPI with the DC (A0) pin low, display
//! RAM data with DC high.
//!
//! Most commands are a single byte with the argument folded into the low
//! bits (page address, start line, column nibbles). Only the electronic
//! volume and booster ratio take a second command byte.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7565_canvas::{command, DisplayInterface, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::digital::OutputPin;
//! # use embedded_hal::spi::{Operation, SpiDevice};
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
//! # let mut interface = Interface::new(MockSpi, MockPin, MockPin);
//! # let page_data = [0x00u8; 128];
//! // Address page 3, column 0
//! let _ = interface.send_commands(&[
//!     command::set_page_address(3),
//!     command::SET_COLUMN_HIGH,
//!     command::SET_COLUMN_LOW,
//! ]);
//!
//! // Write one page of pixels
//! let _ = interface.send_data(&page_data);
//! ```

// Display control

/// Display off (0xAE)
pub const DISPLAY_OFF: u8 = 0xAE;

/// Display on (0xAF)
pub const DISPLAY_ON: u8 = 0xAF;

/// Set display start line (0x40 | line)
///
/// Low 6 bits select the RAM line shown at the top of the panel.
pub const SET_START_LINE: u8 = 0x40;

/// Set page address (0xB0 | page)
///
/// Low 4 bits select the 8-row page written by subsequent data bytes.
pub const SET_PAGE_ADDRESS: u8 = 0xB0;

/// Set column address upper nibble (0x10 | high)
pub const SET_COLUMN_HIGH: u8 = 0x10;

/// Set column address lower nibble (0x00 | low)
pub const SET_COLUMN_LOW: u8 = 0x00;

// Orientation

/// ADC select, normal segment order (0xA0)
pub const ADC_NORMAL: u8 = 0xA0;

/// ADC select, reversed segment order (0xA1)
pub const ADC_REVERSE: u8 = 0xA1;

/// COM output scan direction, normal (0xC0)
pub const COM_NORMAL: u8 = 0xC0;

/// COM output scan direction, reversed (0xC8)
pub const COM_REVERSE: u8 = 0xC8;

/// Normal display, RAM bit 1 turns the pixel on (0xA6)
pub const DISPLAY_NORMAL: u8 = 0xA6;

/// Show RAM contents (0xA4)
pub const ALL_POINTS_NORMAL: u8 = 0xA4;

/// Force every pixel on regardless of RAM (0xA5)
///
/// Issued after [`DISPLAY_OFF`] this puts the controller into sleep mode.
pub const ALL_POINTS_ON: u8 = 0xA5;

// Power

/// LCD bias 1/9 (0xA2)
pub const BIAS_1_9: u8 = 0xA2;

/// LCD bias 1/7 (0xA3)
pub const BIAS_1_7: u8 = 0xA3;

/// Power control (0x28 | mode)
///
/// Bit 2 booster, bit 1 voltage regulator, bit 0 voltage follower.
pub const POWER_CONTROL: u8 = 0x28;

/// All internal power circuits on
pub const POWER_ALL_ON: u8 = 0x07;

/// V0 voltage regulator internal resistor ratio (0x20 | ratio)
pub const REGULATION_RATIO: u8 = 0x20;

/// Electronic volume mode set (0x81), followed by a 6-bit contrast value
pub const SET_CONTRAST: u8 = 0x81;

/// Booster ratio select (0xF8), followed by the ratio byte
///
/// 0x00 = 2x/3x/4x, 0x01 = 5x, 0x03 = 6x.
pub const SET_BOOSTER_RATIO: u8 = 0xF8;

// System

/// Internal reset (0xE2)
pub const SOFT_RESET: u8 = 0xE2;

/// Build a page address command
///
/// ```
/// use st7565_canvas::command::set_page_address;
///
/// assert_eq!(set_page_address(0), 0xB0);
/// assert_eq!(set_page_address(7), 0xB7);
/// ```
pub const fn set_page_address(page: u8) -> u8 {
    SET_PAGE_ADDRESS | (page & 0x0F)
}

/// Build the two column address commands for `column`
///
/// ```
/// use st7565_canvas::command::set_column_address;
///
/// assert_eq!(set_column_address(0), [0x10, 0x00]);
/// assert_eq!(set_column_address(0x84), [0x18, 0x04]);
/// ```
pub const fn set_column_address(column: u8) -> [u8; 2] {
    [
        SET_COLUMN_HIGH | ((column >> 4) & 0x0F),
        SET_COLUMN_LOW | (column & 0x0F),
    ]
}

/// Build a start line command
pub const fn set_start_line(line: u8) -> u8 {
    SET_START_LINE | (line & 0x3F)
}

/// Map an 8-bit contrast level onto the 6-bit electronic volume register
///
/// ```
/// use st7565_canvas::command::contrast_register;
///
/// assert_eq!(contrast_register(36), 9);
/// assert_eq!(contrast_register(255), 63);
/// ```
pub const fn contrast_register(level: u8) -> u8 {
    level >> 2
}
