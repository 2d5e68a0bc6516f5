//! Core display operations

use embedded_hal::delay::DelayNs;

use crate::command::{
    ADC_NORMAL, ADC_REVERSE, ALL_POINTS_NORMAL, ALL_POINTS_ON, BIAS_1_7, BIAS_1_9, COM_NORMAL,
    COM_REVERSE, DISPLAY_NORMAL, DISPLAY_OFF, DISPLAY_ON, POWER_ALL_ON, POWER_CONTROL,
    REGULATION_RATIO, SET_BOOSTER_RATIO, SET_CONTRAST, SOFT_RESET, contrast_register,
    set_column_address, set_page_address, set_start_line,
};
use crate::config::{Bias, Config};
use crate::error::Error;
use crate::interface::DisplayInterface;

type DisplayResult<I> = core::result::Result<(), Error<I>>;

/// Core display driver for the ST7565
///
/// This struct provides the controller operations the canvas needs:
/// power-on sequence, contrast, power save and buffer transfer.
pub struct Display<I>
where
    I: DisplayInterface,
{
    /// Hardware interface
    interface: I,
    /// Display configuration
    config: Config,
    /// Whether the controller is in power save (sleep) mode
    power_save: bool,
}

impl<I> Display<I>
where
    I: DisplayInterface,
{
    /// Create a new Display instance
    pub fn new(interface: I, config: Config) -> Self {
        Self {
            interface,
            config,
            power_save: true,
        }
    }

    /// Perform hardware reset and run the power-on sequence
    ///
    /// The controller is left in power save mode; call
    /// [`set_power_save(false)`](Self::set_power_save) to show RAM contents.
    pub fn init<D: DelayNs>(&mut self, delay: &mut D) -> DisplayResult<I> {
        log::debug!(
            "st7565: init {}x{}",
            self.config.dimensions.cols,
            self.config.dimensions.rows
        );
        self.interface.reset(delay);

        let adc = if self.config.adc_reverse {
            ADC_REVERSE
        } else {
            ADC_NORMAL
        };
        let com = if self.config.com_reverse {
            COM_REVERSE
        } else {
            COM_NORMAL
        };
        let bias = match self.config.bias {
            Bias::OneNinth => BIAS_1_9,
            Bias::OneSeventh => BIAS_1_7,
        };

        self.send_commands(&[
            SOFT_RESET,
            DISPLAY_OFF,
            set_start_line(0),
            adc,
            com,
            DISPLAY_NORMAL,
            bias,
            POWER_CONTROL | POWER_ALL_ON,
            SET_BOOSTER_RATIO,
            self.config.booster_ratio,
            REGULATION_RATIO | self.config.regulation_ratio,
            SET_CONTRAST,
            self.config.init_contrast,
        ])?;
        self.enter_power_save()
    }

    /// Set contrast level (0-255, scaled to the 6-bit electronic volume)
    pub fn set_contrast(&mut self, level: u8) -> DisplayResult<I> {
        log::debug!("st7565: contrast {level}");
        self.send_commands(&[SET_CONTRAST, contrast_register(level)])
    }

    /// Enter or leave power save mode
    ///
    /// In power save the panel is blanked and the controller sleeps, RAM
    /// contents are kept.
    pub fn set_power_save(&mut self, enable: bool) -> DisplayResult<I> {
        if enable {
            self.enter_power_save()
        } else {
            if self.power_save {
                log::debug!("st7565: wake");
            }
            self.send_commands(&[ALL_POINTS_NORMAL, DISPLAY_ON])?;
            self.power_save = false;
            Ok(())
        }
    }

    fn enter_power_save(&mut self) -> DisplayResult<I> {
        self.send_commands(&[DISPLAY_OFF, ALL_POINTS_ON])?;
        self.power_save = true;
        Ok(())
    }

    /// Whether the controller was last put into power save mode
    pub fn is_power_save(&self) -> bool {
        self.power_save
    }

    /// Transfer a page-organized buffer into display RAM
    ///
    /// # Errors
    ///
    /// Returns `Error::BufferTooSmall` if `buffer` is shorter than
    /// `dimensions.buffer_size()`.
    pub fn send_buffer(&mut self, buffer: &[u8]) -> DisplayResult<I> {
        let required = self.config.dimensions.buffer_size();
        if buffer.len() < required {
            return Err(Error::BufferTooSmall {
                required,
                provided: buffer.len(),
            });
        }

        log::trace!("st7565: send buffer ({required} bytes)");
        let cols = self.config.dimensions.cols as usize;
        let [col_high, col_low] = set_column_address(self.config.column_offset);
        for (page, bytes) in buffer[..required].chunks_exact(cols).enumerate() {
            self.send_commands(&[set_page_address(page as u8), col_high, col_low])?;
            self.send_data(bytes)?;
        }
        Ok(())
    }

    /// Send a run of commands to the display controller
    fn send_commands(&mut self, cmds: &[u8]) -> DisplayResult<I> {
        self.interface.send_commands(cmds).map_err(Error::Interface)
    }

    /// Send data to the display controller
    fn send_data(&mut self, data: &[u8]) -> DisplayResult<I> {
        self.interface.send_data(data).map_err(Error::Interface)
    }

    /// Get display dimensions
    pub fn dimensions(&self) -> &crate::config::Dimensions {
        &self.config.dimensions
    }

    /// Get display rotation
    pub fn rotation(&self) -> crate::config::Rotation {
        self.config.rotation
    }

    /// Access the underlying configuration
    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Access the underlying interface
    pub fn interface(&self) -> &I {
        &self.interface
    }

    /// Give back the interface
    pub fn release(self) -> I {
        self.interface
    }
}
