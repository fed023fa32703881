//! Panel power rails: reset, power-enable and backlight-enable lines plus the LDO supply.

use embedded_hal::digital::OutputPin;

use crate::interface::DisplayError;

/// Nominal output of the LCM LDO (VGP), in microvolts.
pub const VGP_MICROVOLTS: u32 = 1_800_000;

/// Control lines owned by the panel.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Line {
    /// Active-low controller reset
    Reset,
    /// Panel power enable (ENP)
    PowerEnable,
    /// Backlight enable (ENN on this board)
    Backlight,
}

/// A switchable voltage supply feeding the panel logic.
pub trait Regulator {
    /// `false` for a stand-in with no supply behind it; the supply steps are skipped.
    const PRESENT: bool = true;

    fn enable(&mut self) -> Result<(), DisplayError>;

    fn disable(&mut self) -> Result<(), DisplayError>;

    fn is_enabled(&mut self) -> bool;

    /// Current output setting in microvolts.
    fn voltage_uv(&mut self) -> Result<u32, DisplayError>;
}

/// Boards with the panel logic tied to an always-on rail.
#[derive(Clone, Copy, Debug, Default)]
pub struct NoRegulator;

impl Regulator for NoRegulator {
    const PRESENT: bool = false;

    fn enable(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn disable(&mut self) -> Result<(), DisplayError> {
        Ok(())
    }

    fn is_enabled(&mut self) -> bool {
        false
    }

    fn voltage_uv(&mut self) -> Result<u32, DisplayError> {
        Ok(VGP_MICROVOLTS)
    }
}

/// What the power sequences need from the board.
pub trait PanelRails {
    fn set_line(&mut self, line: Line, high: bool) -> Result<(), DisplayError>;

    /// Report the supply's current setting in microvolts.
    fn supply_voltage(&mut self) -> Result<u32, DisplayError>;

    fn enable_supply(&mut self) -> Result<(), DisplayError>;

    fn disable_supply(&mut self) -> Result<(), DisplayError>;
}

/// Delays of the power-on and power-off sequences, in milliseconds.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PowerTiming {
    /// After power-enable goes high
    pub power_settle_ms: u32,
    /// After the supply is enabled
    pub supply_settle_ms: u32,
    /// Before the reset pulse starts
    pub pre_reset_ms: u32,
    pub reset_high_ms: u32,
    pub reset_low_ms: u32,
    /// After reset is released, before the first command
    pub reset_release_ms: u32,

    /// After the backlight is switched off, lets the image fade
    pub backlight_off_ms: u32,
    pub reset_assert_ms: u32,
    pub power_off_ms: u32,
    /// After the supply is disabled
    pub supply_off_ms: u32,
}

impl PowerTiming {
    /// Vendor timing for the k710 board.
    pub const VENDOR: PowerTiming = PowerTiming {
        power_settle_ms: 50,
        supply_settle_ms: 30,
        pre_reset_ms: 50,
        reset_high_ms: 50,
        reset_low_ms: 50,
        reset_release_ms: 80,

        backlight_off_ms: 250,
        reset_assert_ms: 10,
        power_off_ms: 20,
        supply_off_ms: 80,
    };
}

impl Default for PowerTiming {
    fn default() -> Self {
        Self::VENDOR
    }
}

/// The panel's GPIO lines and supply.
pub struct PowerRails<RST, PWR, BL, REG> {
    rst: RST,
    pwr: PWR,
    bl: BL,
    reg: REG,
}

impl<RST, PWR, BL> PowerRails<RST, PWR, BL, NoRegulator>
where
    RST: OutputPin,
    PWR: OutputPin,
    BL: OutputPin,
{
    pub fn without_regulator(rst: RST, pwr: PWR, bl: BL) -> Self {
        PowerRails::new(rst, pwr, bl, NoRegulator)
    }
}

impl<RST, PWR, BL, REG> PowerRails<RST, PWR, BL, REG>
where
    RST: OutputPin,
    PWR: OutputPin,
    BL: OutputPin,
    REG: Regulator,
{
    pub fn new(rst: RST, pwr: PWR, bl: BL, reg: REG) -> Self {
        PowerRails { rst, pwr, bl, reg }
    }

    /// Consume the rails and return the pins and regulator
    pub fn release(self) -> (RST, PWR, BL, REG) {
        (self.rst, self.pwr, self.bl, self.reg)
    }

    pub fn reset(&mut self, high: bool) -> Result<(), DisplayError> {
        self.set_line(Line::Reset, high)
    }

    pub fn power_enable(&mut self, high: bool) -> Result<(), DisplayError> {
        self.set_line(Line::PowerEnable, high)
    }

    pub fn backlight(&mut self, high: bool) -> Result<(), DisplayError> {
        self.set_line(Line::Backlight, high)
    }
}

impl<RST, PWR, BL, REG> PanelRails for PowerRails<RST, PWR, BL, REG>
where
    RST: OutputPin,
    PWR: OutputPin,
    BL: OutputPin,
    REG: Regulator,
{
    fn set_line(&mut self, line: Line, high: bool) -> Result<(), DisplayError> {
        match line {
            Line::Reset => set(&mut self.rst, high).map_err(|_| DisplayError::ResetError),
            Line::PowerEnable => set(&mut self.pwr, high).map_err(|_| DisplayError::PowerEnableError),
            Line::Backlight => set(&mut self.bl, high).map_err(|_| DisplayError::BacklightError),
        }
    }

    fn supply_voltage(&mut self) -> Result<u32, DisplayError> {
        let volt = self.reg.voltage_uv()?;
        info!("lcm LDO voltage = {} uV", volt);
        Ok(volt)
    }

    /// Turn the logic supply on.
    ///
    /// A supply not at 1.8V is reported but still enabled.
    fn enable_supply(&mut self) -> Result<(), DisplayError> {
        if !REG::PRESENT {
            return Ok(());
        }

        match self.reg.voltage_uv() {
            Ok(VGP_MICROVOLTS) => {
                debug!("check voltage=1.8V pass");
            }
            Ok(_volt) => {
                warn!("check voltage=1.8V fail (voltage: {} uV)", _volt);
            }
            Err(_e) => {
                warn!("failed to read lcm supply voltage: {}", _e);
            }
        }

        self.reg.enable().map_err(|e| {
            error!("failed to enable lcm supply: {}", e);
            e
        })
    }

    /// Turn the logic supply off if it is on.
    fn disable_supply(&mut self) -> Result<(), DisplayError> {
        if !REG::PRESENT {
            return Ok(());
        }

        let enabled = self.reg.is_enabled();
        debug!("lcm regulator enable status: {}", enabled);
        if !enabled {
            return Ok(());
        }

        self.reg.disable().map_err(|e| {
            error!("failed to disable lcm supply: {}", e);
            e
        })?;

        if self.reg.is_enabled() {
            warn!("lcm regulator still enabled, shared with another consumer?");
        } else {
            debug!("lcm regulator disable pass");
        }
        Ok(())
    }
}

fn set<P: OutputPin>(pin: &mut P, high: bool) -> Result<(), P::Error> {
    if high {
        pin.set_high()
    } else {
        pin.set_low()
    }
}
