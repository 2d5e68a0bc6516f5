//! Offset-aware drawing canvas
//!
//! [`Canvas`] owns the controller driver and the pixel buffer, and exposes a
//! small drawing API in the coordinate space of the active *frame*: a
//! sub-region of the panel described by an offset and a logical size. Every
//! coordinate passed to a drawing call is translated by the frame offset
//! before it reaches the buffer. Coordinates and offsets are bytes and the
//! sum wraps at 256, so a large offset acts as a negative one. The canvas
//! does not clip against the frame size; only pixels falling off the panel
//! itself are discarded.
//!
//! Drawing only touches memory. [`Canvas::commit`] is the single call that
//! moves pixels to the panel.
//!
//! ## Example
//!
//! ```rust,no_run
//! use st7565_canvas::{Builder, Canvas, Color, Dimensions, Display, Font, Interface};
//! # use core::convert::Infallible;
//! # use embedded_hal::delay::DelayNs;
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
//! # struct MockDelay;
//! # impl DelayNs for MockDelay { fn delay_ns(&mut self, _ns: u32) {} }
//! # let mut delay = MockDelay;
//! let interface = Interface::new(MockSpi, MockPin, MockPin);
//! let config = match Builder::new().dimensions(Dimensions::ERC12864).build() {
//!     Ok(config) => config,
//!     Err(_) => return,
//! };
//! let display = Display::new(interface, config);
//!
//! let mut canvas = match Canvas::new(display, [0u8; 1024], &mut delay) {
//!     Ok(canvas) => canvas,
//!     Err(_) => return,
//! };
//!
//! // Status bar occupies the top 10 rows, draw below it
//! canvas.set_frame(0, 10, 128, 54);
//! canvas.reset();
//! canvas.clear();
//! canvas.set_font(Font::Primary);
//! canvas.draw_str(2, 10, Some("Settings"));
//! canvas.draw_frame(0, 0, canvas.width(), canvas.height());
//! canvas.set_color(Color::Inverse);
//! canvas.draw_box(0, 12, 128, 11);
//!
//! let _ = canvas.commit();
//! ```

use embedded_graphics::{
    Drawable,
    draw_target::{DrawTargetExt, Translated},
    geometry::{Point, Size},
    prelude::Pixel,
    primitives::{Line, Primitive, PrimitiveStyle, PrimitiveStyleBuilder, Rectangle, StrokeAlignment},
};
use embedded_hal::delay::DelayNs;
use u8g2_fonts::types::{FontColor, VerticalPosition};

use crate::color::Color;
use crate::display::Display;
use crate::error::Error;
use crate::font::Font;
use crate::framebuffer::FrameBuffer;
use crate::icon::Icon;
use crate::interface::DisplayInterface;
use crate::xbm::Xbm;

type CanvasResult<I> = core::result::Result<(), Error<I>>;

/// Drawing handle over an ST7565 panel
///
/// ## Type Parameters
///
/// * `I` - Interface type implementing [`DisplayInterface`]
/// * `B` - Pixel memory implementing `AsMut<[u8]>` and `AsRef<[u8]>`,
///   at least `dimensions.buffer_size()` bytes
pub struct Canvas<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]> + AsRef<[u8]>,
{
    /// Controller driver
    display: Display<I>,
    /// In-memory pixels
    framebuffer: FrameBuffer<B>,
    /// Frame origin
    offset_x: u8,
    offset_y: u8,
    /// Frame size reported to callers
    width: u8,
    height: u8,
    /// Current draw color
    color: Color,
    /// Current font
    font: Font,
}

impl<I, B> Canvas<I, B>
where
    I: DisplayInterface,
    B: AsMut<[u8]> + AsRef<[u8]>,
{
    /// Bring up the panel and create a canvas over it
    ///
    /// Runs the controller power-on sequence, applies the configured
    /// contrast, wakes the panel and pushes a blank buffer. The frame
    /// starts out covering the whole panel, with the default color and
    /// font selected.
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `buffer` cannot hold the panel, or
    /// `Error::Interface` if the bus fails during start-up.
    pub fn new<D: DelayNs>(display: Display<I>, buffer: B, delay: &mut D) -> Result<Self, Error<I>> {
        let framebuffer = FrameBuffer::try_new(buffer, *display.dimensions(), display.rotation())
            .map_err(|(buffer, required)| Error::BufferTooSmall {
                required,
                provided: buffer.as_ref().len(),
            })?;
        let size = display.config().rotated_dimensions();

        let mut canvas = Self {
            display,
            framebuffer,
            offset_x: 0,
            offset_y: 0,
            width: u8::try_from(size.cols).unwrap_or(u8::MAX),
            height: u8::try_from(size.rows).unwrap_or(u8::MAX),
            color: Color::Black,
            font: Font::Secondary,
        };

        canvas.display.init(delay)?;
        let contrast = canvas.display.config().contrast;
        canvas.display.set_contrast(contrast)?;
        canvas.display.set_power_save(false)?;
        canvas.framebuffer.clear();
        canvas.display.send_buffer(canvas.framebuffer.buffer())?;

        Ok(canvas)
    }

    /// Restore the default draw state: black color, secondary font
    pub fn reset(&mut self) {
        self.set_color(Color::Black);
        self.set_font(Font::Secondary);
    }

    /// Wake the panel and transfer the buffer to it
    pub fn commit(&mut self) -> CanvasResult<I> {
        self.display.set_power_save(false)?;
        self.display.send_buffer(self.framebuffer.buffer())
    }

    /// Set the active frame
    ///
    /// No validation is done against the panel size.
    pub fn set_frame(&mut self, offset_x: u8, offset_y: u8, width: u8, height: u8) {
        self.offset_x = offset_x;
        self.offset_y = offset_y;
        self.width = width;
        self.height = height;
    }

    /// Frame width
    pub fn width(&self) -> u8 {
        self.width
    }

    /// Frame height
    pub fn height(&self) -> u8 {
        self.height
    }

    /// Frame origin on the panel
    pub fn offset(&self) -> (u8, u8) {
        (self.offset_x, self.offset_y)
    }

    /// Blank the in-memory buffer
    ///
    /// The panel keeps showing the old contents until [`commit`](Self::commit).
    pub fn clear(&mut self) {
        self.framebuffer.clear();
    }

    /// Select the color used by subsequent drawing calls
    pub fn set_color(&mut self, color: Color) {
        self.color = color;
    }

    /// Current draw color
    pub fn color(&self) -> Color {
        self.color
    }

    /// Select the font used by text and glyph drawing
    ///
    /// Glyphs are drawn with a transparent background.
    pub fn set_font(&mut self, font: Font) {
        self.font = font;
    }

    /// Current font
    pub fn font(&self) -> Font {
        self.font
    }

    /// Draw a string with its baseline at `y`
    ///
    /// `None` draws nothing.
    pub fn draw_str(&mut self, x: u8, y: u8, text: Option<&str>) {
        let Some(text) = text else {
            return;
        };
        let position = self.translate(x, y);
        if let Err(e) = self.font.renderer().render(
            text,
            position,
            VerticalPosition::Baseline,
            FontColor::Transparent(self.color),
            &mut self.framebuffer,
        ) {
            log::warn!("canvas: text render failed: {e:?}");
        }
    }

    /// Draw an icon with its top-left corner at `(x, y)`
    ///
    /// `None` draws nothing.
    pub fn draw_icon(&mut self, x: u8, y: u8, icon: Option<&Icon>) {
        let Some(icon) = icon else {
            return;
        };
        let position = self.translate(x, y);
        self.draw(&icon.xbm(position, self.color));
    }

    /// Draw a single pixel
    pub fn draw_dot(&mut self, x: u8, y: u8) {
        let position = self.translate(x, y);
        self.draw(&Pixel(position, self.color));
    }

    /// Draw a filled rectangle
    pub fn draw_box(&mut self, x: u8, y: u8, width: u8, height: u8) {
        let area = Rectangle::new(self.translate(x, y), Size::new(width.into(), height.into()));
        self.draw(&area.into_styled(PrimitiveStyle::with_fill(self.color)));
    }

    /// Draw a one pixel rectangle outline inside the given box
    pub fn draw_frame(&mut self, x: u8, y: u8, width: u8, height: u8) {
        let area = Rectangle::new(self.translate(x, y), Size::new(width.into(), height.into()));
        let style = PrimitiveStyleBuilder::new()
            .stroke_color(self.color)
            .stroke_width(1)
            .stroke_alignment(StrokeAlignment::Inside)
            .build();
        self.draw(&area.into_styled(style));
    }

    /// Draw a line between two points, both ends included
    pub fn draw_line(&mut self, x1: u8, y1: u8, x2: u8, y2: u8) {
        let line = Line::new(self.translate(x1, y1), self.translate(x2, y2));
        self.draw(&line.into_styled(PrimitiveStyle::with_stroke(self.color, 1)));
    }

    /// Draw an XBM bitmap of `width` x `height` pixels
    pub fn draw_xbm(&mut self, x: u8, y: u8, width: u8, height: u8, bitmap: &[u8]) {
        let position = self.translate(x, y);
        self.draw(&Xbm::new(
            bitmap,
            width.into(),
            height.into(),
            position,
            self.color,
        ));
    }

    /// Draw a single glyph from the current font with its baseline at `y`
    ///
    /// Code points that are not Unicode scalar values draw nothing.
    pub fn draw_glyph(&mut self, x: u8, y: u8, code: u16) {
        let Some(glyph) = char::from_u32(u32::from(code)) else {
            log::trace!("canvas: skipping invalid code point {code:#06x}");
            return;
        };
        let position = self.translate(x, y);
        if let Err(e) = self.font.renderer().render(
            glyph,
            position,
            VerticalPosition::Baseline,
            FontColor::Transparent(self.color),
            &mut self.framebuffer,
        ) {
            log::warn!("canvas: glyph render failed: {e:?}");
        }
    }

    /// Draw target in frame coordinates for arbitrary embedded-graphics items
    ///
    /// embedded-graphics points are signed, so this target shifts by the
    /// offset without wrapping. Points that stay within a byte land where
    /// the canvas primitives would put them.
    pub fn frame_target(&mut self) -> Translated<'_, FrameBuffer<B>> {
        let origin = self.translate(0, 0);
        self.framebuffer.translated(origin)
    }

    /// Access the pixel buffer
    pub fn framebuffer(&self) -> &FrameBuffer<B> {
        &self.framebuffer
    }

    /// Access the underlying Display
    pub fn display(&self) -> &Display<I> {
        &self.display
    }

    /// Access the underlying Display mutably
    pub fn display_mut(&mut self) -> &mut Display<I> {
        &mut self.display
    }

    /// Tear down the canvas, giving back the driver and pixel memory
    ///
    /// The bus is left as it is.
    pub fn release(self) -> (Display<I>, B) {
        (self.display, self.framebuffer.release())
    }

    fn translate(&self, x: u8, y: u8) -> Point {
        Point::new(
            i32::from(x.wrapping_add(self.offset_x)),
            i32::from(y.wrapping_add(self.offset_y)),
        )
    }

    fn draw<T>(&mut self, item: &T)
    where
        T: Drawable<Color = Color>,
    {
        let Ok(_) = item.draw(&mut self.framebuffer);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::{Builder, Dimensions};
    use alloc::vec::Vec;

    #[derive(Debug)]
    struct MockInterface {
        commands: Vec<u8>,
        data: Vec<Vec<u8>>,
    }

    impl DisplayInterface for MockInterface {
        type Error = core::convert::Infallible;

        fn send_commands(&mut self, commands: &[u8]) -> Result<(), Self::Error> {
            self.commands.extend_from_slice(commands);
            Ok(())
        }

        fn send_data(&mut self, data: &[u8]) -> Result<(), Self::Error> {
            self.data.push(data.to_vec());
            Ok(())
        }

        fn reset<D: DelayNs>(&mut self, _delay: &mut D) {}
    }

    struct MockDelay;
    impl DelayNs for MockDelay {
        fn delay_ns(&mut self, _ns: u32) {}
    }

    type TestCanvas = Canvas<MockInterface, [u8; 1024]>;

    fn test_canvas() -> TestCanvas {
        let config = Builder::new()
            .dimensions(Dimensions::ERC12864)
            .build()
            .unwrap();
        let interface = MockInterface {
            commands: Vec::new(),
            data: Vec::new(),
        };
        Canvas::new(Display::new(interface, config), [0u8; 1024], &mut MockDelay).unwrap()
    }

    fn transfers(canvas: &TestCanvas) -> (usize, usize) {
        let interface = canvas.display().interface();
        (interface.commands.len(), interface.data.len())
    }

    fn is_blank(canvas: &TestCanvas) -> bool {
        canvas.framebuffer().buffer().iter().all(|byte| *byte == 0)
    }

    fn set_pixels(canvas: &TestCanvas) -> usize {
        canvas
            .framebuffer()
            .buffer()
            .iter()
            .map(|byte| byte.count_ones() as usize)
            .sum()
    }

    #[test]
    fn test_new_brings_panel_up() {
        let canvas = test_canvas();
        let interface = canvas.display().interface();

        // init ends in power save, then contrast 36 >> 2 and wake
        let tail = &interface.commands[13..21];
        assert_eq!(tail, &[0xAE, 0xA5, 0x81, 9, 0xA4, 0xAF, 0xB0, 0x10]);
        assert!(!canvas.display().is_power_save());

        assert_eq!(interface.data.len(), 8);
        assert!(interface.data.iter().flatten().all(|byte| *byte == 0));
    }

    #[test]
    fn test_new_rejects_small_buffer() {
        let config = Builder::new()
            .dimensions(Dimensions::ERC12864)
            .build()
            .unwrap();
        let interface = MockInterface {
            commands: Vec::new(),
            data: Vec::new(),
        };
        let result = Canvas::new(Display::new(interface, config), [0u8; 512], &mut MockDelay);
        assert!(matches!(
            result,
            Err(Error::BufferTooSmall {
                required: 1024,
                provided: 512
            })
        ));
    }

    #[test]
    fn test_initial_frame_covers_panel() {
        let canvas = test_canvas();
        assert_eq!(canvas.offset(), (0, 0));
        assert_eq!(canvas.width(), 128);
        assert_eq!(canvas.height(), 64);
    }

    #[test]
    fn test_reset_restores_black_and_secondary() {
        let mut canvas = test_canvas();
        canvas.set_color(Color::White);
        canvas.set_font(Font::Glyph);

        canvas.reset();
        assert_eq!(canvas.color(), Color::Black);
        assert_eq!(canvas.font(), Font::Secondary);

        canvas.draw_dot(3, 3);
        assert!(canvas.framebuffer().pixel(3, 3));
    }

    #[test]
    fn test_set_frame_is_not_clamped() {
        let mut canvas = test_canvas();
        canvas.set_frame(250, 200, 255, 180);
        assert_eq!(canvas.offset(), (250, 200));
        assert_eq!(canvas.width(), 255);
        assert_eq!(canvas.height(), 180);
    }

    #[test]
    fn test_dot_is_translated() {
        let mut canvas = test_canvas();
        canvas.set_frame(10, 20, 50, 30);
        canvas.draw_dot(1, 2);
        assert!(canvas.framebuffer().pixel(11, 22));
        assert_eq!(set_pixels(&canvas), 1);
    }

    #[test]
    fn test_box_is_translated_and_filled() {
        let mut canvas = test_canvas();
        canvas.set_frame(4, 8, 20, 20);
        canvas.draw_box(1, 1, 3, 2);

        assert_eq!(set_pixels(&canvas), 6);
        for x in 5..8 {
            for y in 9..11 {
                assert!(canvas.framebuffer().pixel(x, y));
            }
        }
    }

    #[test]
    fn test_frame_is_translated_outline() {
        let mut canvas = test_canvas();
        canvas.set_frame(2, 3, 20, 20);
        canvas.draw_frame(0, 0, 4, 4);

        // 4x4 outline has 12 pixels and a hollow 2x2 centre
        assert_eq!(set_pixels(&canvas), 12);
        assert!(canvas.framebuffer().pixel(2, 3));
        assert!(canvas.framebuffer().pixel(5, 6));
        assert!(!canvas.framebuffer().pixel(3, 4));
    }

    #[test]
    fn test_line_is_translated() {
        let mut canvas = test_canvas();
        canvas.set_frame(10, 10, 20, 20);
        canvas.draw_line(0, 0, 4, 0);

        assert_eq!(set_pixels(&canvas), 5);
        assert!(canvas.framebuffer().pixel(10, 10));
        assert!(canvas.framebuffer().pixel(14, 10));
    }

    #[test]
    fn test_xbm_is_translated() {
        let mut canvas = test_canvas();
        canvas.set_frame(16, 0, 20, 20);
        canvas.draw_xbm(0, 8, 2, 1, &[0b10]);

        assert!(!canvas.framebuffer().pixel(16, 8));
        assert!(canvas.framebuffer().pixel(17, 8));
        assert_eq!(set_pixels(&canvas), 1);
    }

    #[test]
    fn test_icon_is_translated() {
        static DOT: Icon = Icon::new(1, 1, &[0x01]);

        let mut canvas = test_canvas();
        canvas.set_frame(7, 9, 20, 20);
        canvas.draw_icon(1, 1, Some(&DOT));
        assert!(canvas.framebuffer().pixel(8, 10));
        assert_eq!(set_pixels(&canvas), 1);
    }

    #[test]
    fn test_absent_icon_draws_nothing() {
        let mut canvas = test_canvas();
        canvas.draw_icon(0, 0, None);
        assert!(is_blank(&canvas));
    }

    #[test]
    fn test_str_is_translated() {
        let mut reference = test_canvas();
        reference.draw_str(15, 27, Some("Ab"));
        assert!(!is_blank(&reference));

        let mut canvas = test_canvas();
        canvas.set_frame(5, 7, 40, 40);
        canvas.draw_str(10, 20, Some("Ab"));

        assert_eq!(
            canvas.framebuffer().buffer(),
            reference.framebuffer().buffer()
        );
    }

    #[test]
    fn test_str_draws_above_baseline() {
        let mut canvas = test_canvas();
        canvas.draw_str(0, 20, Some("H"));

        assert!(!is_blank(&canvas));
        for x in 0..128 {
            for y in 21..64 {
                assert!(!canvas.framebuffer().pixel(x, y));
            }
        }
    }

    #[test]
    fn test_absent_str_draws_nothing() {
        let mut canvas = test_canvas();
        let before = transfers(&canvas);
        canvas.draw_str(0, 10, None);
        assert!(is_blank(&canvas));
        assert_eq!(transfers(&canvas), before);
    }

    #[test]
    fn test_glyph_is_translated() {
        let mut reference = test_canvas();
        reference.draw_glyph(12, 30, u16::from(b'x'));
        assert!(!is_blank(&reference));

        let mut canvas = test_canvas();
        canvas.set_frame(2, 10, 40, 40);
        canvas.draw_glyph(10, 20, u16::from(b'x'));

        assert_eq!(
            canvas.framebuffer().buffer(),
            reference.framebuffer().buffer()
        );
    }

    #[test]
    fn test_surrogate_glyph_draws_nothing() {
        let mut canvas = test_canvas();
        canvas.draw_glyph(10, 20, 0xD800);
        assert!(is_blank(&canvas));
    }

    #[test]
    fn test_fonts_select_distinct_typefaces() {
        let mut rendered = Vec::new();
        for font in [Font::Primary, Font::Secondary, Font::Glyph] {
            let mut canvas = test_canvas();
            canvas.set_font(font);
            canvas.draw_str(0, 20, Some("Ag"));
            rendered.push(canvas.framebuffer().buffer().to_vec());
        }

        assert_ne!(rendered[0], rendered[1]);
        assert_ne!(rendered[0], rendered[2]);
        assert_ne!(rendered[1], rendered[2]);
    }

    #[test]
    fn test_text_background_is_transparent() {
        let mut canvas = test_canvas();
        canvas.draw_box(0, 0, 64, 32);
        let filled = set_pixels(&canvas);

        canvas.draw_str(2, 20, Some("Hi"));
        assert_eq!(set_pixels(&canvas), filled);
    }

    #[test]
    fn test_inverse_box_twice_restores_buffer() {
        let mut canvas = test_canvas();
        canvas.draw_dot(5, 5);
        canvas.set_color(Color::Inverse);

        canvas.draw_box(0, 0, 10, 10);
        assert!(!canvas.framebuffer().pixel(5, 5));
        assert!(canvas.framebuffer().pixel(4, 4));

        canvas.draw_box(0, 0, 10, 10);
        assert_eq!(set_pixels(&canvas), 1);
        assert!(canvas.framebuffer().pixel(5, 5));
    }

    #[test]
    fn test_white_erases() {
        let mut canvas = test_canvas();
        canvas.draw_box(0, 0, 8, 8);
        canvas.set_color(Color::White);
        canvas.draw_line(0, 0, 7, 7);
        assert_eq!(set_pixels(&canvas), 64 - 8);
    }

    #[test]
    fn test_offset_wraps_at_byte_boundary() {
        let mut canvas = test_canvas();
        canvas.set_frame(250, 0, 10, 10);
        canvas.draw_dot(10, 0);
        // 250 + 10 wraps to 4
        assert!(canvas.framebuffer().pixel(4, 0));
        assert_eq!(set_pixels(&canvas), 1);
    }

    #[test]
    fn test_line_endpoints_wrap_independently() {
        let mut canvas = test_canvas();
        canvas.set_frame(0, 252, 10, 10);
        canvas.draw_line(3, 4, 3, 6);
        // rows 256 and 258 wrap to 0 and 2
        assert!(canvas.framebuffer().pixel(3, 0));
        assert!(canvas.framebuffer().pixel(3, 1));
        assert!(canvas.framebuffer().pixel(3, 2));
        assert_eq!(set_pixels(&canvas), 3);
    }

    #[test]
    fn test_initial_frame_follows_rotation() {
        let config = Builder::new()
            .dimensions(Dimensions::ERC12864)
            .rotation(crate::config::Rotation::Rotate90)
            .build()
            .unwrap();
        let interface = MockInterface {
            commands: Vec::new(),
            data: Vec::new(),
        };
        let canvas =
            Canvas::new(Display::new(interface, config), [0u8; 1024], &mut MockDelay).unwrap();
        assert_eq!(canvas.width(), 64);
        assert_eq!(canvas.height(), 128);
    }

    #[test]
    fn test_clear_without_commit_touches_memory_only() {
        let mut canvas = test_canvas();
        canvas.draw_box(0, 0, 128, 64);
        canvas.commit().unwrap();
        let before = transfers(&canvas);

        canvas.clear();

        assert!(is_blank(&canvas));
        assert_eq!(transfers(&canvas), before);
        let pages = &canvas.display().interface().data;
        assert!(pages[pages.len() - 8..].iter().flatten().all(|b| *b == 0xFF));
    }

    #[test]
    fn test_clear_then_commit_sends_blank_buffer() {
        let mut canvas = test_canvas();
        canvas.draw_box(0, 0, 128, 64);
        canvas.commit().unwrap();

        canvas.clear();
        canvas.commit().unwrap();

        let pages = &canvas.display().interface().data;
        assert!(pages[pages.len() - 8..].iter().flatten().all(|b| *b == 0));
    }

    #[test]
    fn test_commit_wakes_panel() {
        let mut canvas = test_canvas();
        canvas.display_mut().set_power_save(true).unwrap();
        let (commands_before, _) = transfers(&canvas);

        canvas.commit().unwrap();

        assert!(!canvas.display().is_power_save());
        let commands = &canvas.display().interface().commands;
        assert_eq!(&commands[commands_before..commands_before + 2], &[0xA4, 0xAF]);
    }

    #[test]
    fn test_frame_target_uses_offset() {
        let mut canvas = test_canvas();
        canvas.set_frame(30, 40, 10, 10);
        let _ = Pixel(Point::new(1, 1), Color::Black).draw(&mut canvas.frame_target());
        assert!(canvas.framebuffer().pixel(31, 41));
    }

    #[test]
    fn test_release_returns_parts() {
        let mut canvas = test_canvas();
        canvas.draw_dot(0, 0);
        let (display, buffer) = canvas.release();
        assert_eq!(buffer[0], 0x01);
        assert_eq!(display.dimensions(), &Dimensions::ERC12864);
    }
}
