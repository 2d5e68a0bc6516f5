//! Display configuration types and builder
//!
//! The defaults describe the ERC12864 128x64 panel: reversed segment and
//! common scan direction, 1/7 bias, 4x booster and a contrast level of 36.

pub use crate::error::{BuilderError, MAX_COLUMNS, MAX_ROWS};

/// Contrast level applied when the canvas starts up
pub const DEFAULT_CONTRAST: u8 = 36;

/// Display dimensions
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Dimensions {
    /// Number of rows (height in pixels, corresponds to common outputs)
    pub rows: u16,
    /// Number of columns (width in pixels, corresponds to segment outputs)
    pub cols: u16,
}

impl Dimensions {
    /// Dimensions of the ERC12864 panel
    pub const ERC12864: Self = Self {
        rows: 64,
        cols: 128,
    };

    /// Create new dimensions with validation
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::InvalidDimensions` if:
    /// - rows == 0 or rows > MAX_ROWS
    /// - cols == 0 or cols > MAX_COLUMNS
    /// - rows % 8 != 0 (RAM is written a page of 8 rows at a time)
    pub fn new(rows: u16, cols: u16) -> Result<Self, BuilderError> {
        if rows == 0 || rows > MAX_ROWS || !rows.is_multiple_of(8) {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        if cols == 0 || cols > MAX_COLUMNS {
            return Err(BuilderError::InvalidDimensions { rows, cols });
        }
        Ok(Self { rows, cols })
    }

    /// Number of 8-row pages
    pub fn pages(&self) -> usize {
        self.rows as usize / 8
    }

    /// Calculate required buffer size in bytes
    pub fn buffer_size(&self) -> usize {
        self.pages() * self.cols as usize
    }
}

/// Display rotation relative to native orientation
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Rotation {
    /// No rotation
    #[default]
    Rotate0,
    /// Rotate 90 degrees clockwise
    Rotate90,
    /// Rotate 180 degrees
    Rotate180,
    /// Rotate 270 degrees clockwise
    Rotate270,
}

/// LCD bias ratio
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub enum Bias {
    /// 1/9 bias
    OneNinth,
    /// 1/7 bias
    #[default]
    OneSeventh,
}

/// Display configuration
///
/// This struct holds all configurable parameters for the ST7565 controller.
/// Use `Builder` to create a Config.
#[derive(Clone, Debug)]
pub struct Config {
    /// Display dimensions
    pub dimensions: Dimensions,
    /// Display rotation
    pub rotation: Rotation,
    /// Contrast level (0-255) applied at start-up
    pub contrast: u8,
    /// Contrast level written by the init sequence, before start-up contrast
    pub init_contrast: u8,
    /// LCD bias
    pub bias: Bias,
    /// Reverse segment (column) scan order
    pub adc_reverse: bool,
    /// Reverse common (row) scan order
    pub com_reverse: bool,
    /// Booster ratio select byte
    pub booster_ratio: u8,
    /// V0 regulator resistor ratio (0-7)
    pub regulation_ratio: u8,
    /// First RAM column wired to the panel
    pub column_offset: u8,
}

impl Config {
    /// Get the rotated dimensions based on rotation setting
    pub fn rotated_dimensions(&self) -> Dimensions {
        match self.rotation {
            Rotation::Rotate0 | Rotation::Rotate180 => self.dimensions,
            Rotation::Rotate90 | Rotation::Rotate270 => Dimensions {
                rows: self.dimensions.cols,
                cols: self.dimensions.rows,
            },
        }
    }
}

/// Builder for constructing display configuration
///
/// # Example
///
/// ```rust,no_run
/// use st7565_canvas::{Builder, Dimensions, Rotation};
///
/// let config = match Builder::new()
///     .dimensions(Dimensions::ERC12864)
///     .rotation(Rotation::Rotate180)
///     .contrast(48)
///     .build()
/// {
///     Ok(config) => config,
///     Err(_) => return,
/// };
/// let _ = config;
/// ```
#[must_use]
pub struct Builder {
    /// Display dimensions (required)
    dimensions: Option<Dimensions>,
    /// Display rotation
    rotation: Rotation,
    /// Contrast level applied at start-up
    contrast: u8,
    /// Contrast register value written by the init sequence
    init_contrast: u8,
    /// LCD bias
    bias: Bias,
    /// Reverse segment scan order
    adc_reverse: bool,
    /// Reverse common scan order
    com_reverse: bool,
    /// Booster ratio select byte
    booster_ratio: u8,
    /// V0 regulator resistor ratio
    regulation_ratio: u8,
    /// First RAM column wired to the panel
    column_offset: u8,
}

impl Default for Builder {
    fn default() -> Self {
        Self {
            dimensions: None,
            rotation: Rotation::Rotate0,
            contrast: DEFAULT_CONTRAST,
            // Raw electronic volume, panel vendor default
            init_contrast: 0x1E,
            bias: Bias::OneSeventh,
            adc_reverse: true,
            com_reverse: true,
            // 4x
            booster_ratio: 0x00,
            regulation_ratio: 4,
            column_offset: 0,
        }
    }
}

impl Builder {
    /// Create a new Builder with default values
    pub fn new() -> Self {
        Self::default()
    }

    /// Set display dimensions (required)
    pub fn dimensions(mut self, dims: Dimensions) -> Self {
        self.dimensions = Some(dims);
        self
    }

    /// Set display rotation
    pub fn rotation(mut self, rotation: Rotation) -> Self {
        self.rotation = rotation;
        self
    }

    /// Set the contrast level applied when the canvas starts up
    pub fn contrast(mut self, value: u8) -> Self {
        self.contrast = value;
        self
    }

    /// Set the raw electronic volume written by the init sequence
    pub fn init_contrast(mut self, value: u8) -> Self {
        self.init_contrast = value & 0x3F;
        self
    }

    /// Set LCD bias
    pub fn bias(mut self, bias: Bias) -> Self {
        self.bias = bias;
        self
    }

    /// Set whether segment scan order is reversed
    pub fn adc_reverse(mut self, value: bool) -> Self {
        self.adc_reverse = value;
        self
    }

    /// Set whether common scan order is reversed
    pub fn com_reverse(mut self, value: bool) -> Self {
        self.com_reverse = value;
        self
    }

    /// Set booster ratio select byte
    pub fn booster_ratio(mut self, value: u8) -> Self {
        self.booster_ratio = value;
        self
    }

    /// Set V0 regulator resistor ratio (masked to 3 bits)
    pub fn regulation_ratio(mut self, value: u8) -> Self {
        self.regulation_ratio = value & 0x07;
        self
    }

    /// Set the first RAM column wired to the panel
    ///
    /// Panels narrower than 132 columns mounted with reversed ADC usually
    /// need an offset of `132 - cols`.
    pub fn column_offset(mut self, value: u8) -> Self {
        self.column_offset = value;
        self
    }

    /// Build the configuration
    ///
    /// # Errors
    ///
    /// Returns `BuilderError::MissingDimensions` if dimensions were not set,
    /// or `BuilderError::InvalidDimensions` if they are out of range
    pub fn build(self) -> Result<Config, BuilderError> {
        let dims = self.dimensions.ok_or(BuilderError::MissingDimensions)?;
        Ok(Config {
            dimensions: Dimensions::new(dims.rows, dims.cols)?,
            rotation: self.rotation,
            contrast: self.contrast,
            init_contrast: self.init_contrast,
            bias: self.bias,
            adc_reverse: self.adc_reverse,
            com_reverse: self.com_reverse,
            booster_ratio: self.booster_ratio,
            regulation_ratio: self.regulation_ratio,
            column_offset: self.column_offset,
        })
    }
}
