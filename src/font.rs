//! Canvas fonts
//!
//! The canvas exposes three logical fonts, each backed by a u8g2 typeface
//! from the `u8g2-fonts` crate:
//!
//! | Font        | Typeface                       |
//! |-------------|--------------------------------|
//! | `Primary`   | `u8g2_font_helvB08_tf`         |
//! | `Secondary` | `u8g2_font_haxrcorp4089_tr`    |
//! | `Glyph`     | `u8g2_font_unifont_t_symbols`  |

use u8g2_fonts::{FontRenderer, fonts};

use crate::error::UnknownFont;

/// Logical font identifier
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
#[repr(u8)]
pub enum Font {
    /// Bold headline font
    Primary = 0,
    /// Small body font
    #[default]
    Secondary = 1,
    /// Symbol font for single glyphs
    Glyph = 2,
}

impl Font {
    /// Renderer for this font
    ///
    /// Characters missing from the typeface are skipped.
    pub fn renderer(self) -> FontRenderer {
        let renderer = match self {
            Self::Primary => FontRenderer::new::<fonts::u8g2_font_helvB08_tf>(),
            Self::Secondary => FontRenderer::new::<fonts::u8g2_font_haxrcorp4089_tr>(),
            Self::Glyph => FontRenderer::new::<fonts::u8g2_font_unifont_t_symbols>(),
        };
        renderer.with_ignore_unknown_chars(true)
    }
}

impl TryFrom<u8> for Font {
    type Error = UnknownFont;

    /// ```
    /// use st7565_canvas::{Font, UnknownFont};
    ///
    /// assert_eq!(Font::try_from(0u8), Ok(Font::Primary));
    /// assert_eq!(Font::try_from(7u8), Err(UnknownFont(7)));
    /// ```
    fn try_from(id: u8) -> Result<Self, Self::Error> {
        match id {
            0 => Ok(Self::Primary),
            1 => Ok(Self::Secondary),
            2 => Ok(Self::Glyph),
            other => Err(UnknownFont(other)),
        }
    }
}
