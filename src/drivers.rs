use embedded_hal::delay::DelayNs;

use crate::interface::{DisplayError, DsiHost};
use crate::params::PanelParams;
use crate::power::{Line, PanelRails, PowerTiming};
use crate::table::{push_table, Table};

pub use self::jd9366::*;

mod jd9366;

/// A panel model: its tables, its timing and its power sequencing.
pub trait Driver {
    /// Name the display subsystem matches the panel against
    const NAME: &'static str;

    const PARAMS: PanelParams;

    const INIT_TABLE: Table;

    const SUSPEND_TABLE: Table;

    const TIMING: PowerTiming = PowerTiming::VENDOR;

    /// Power up, reset and init. Used for both first init and resume.
    ///
    /// A supply failure is logged and the sequence carries on; its error is
    /// returned only after the panel has been lit.
    fn wake_up<DI: DsiHost, R: PanelRails, DELAY: DelayNs>(
        di: &mut DI,
        rails: &mut R,
        delay: &mut DELAY,
    ) -> Result<(), DisplayError> {
        let t = Self::TIMING;

        rails.set_line(Line::PowerEnable, true)?;
        delay.delay_ms(t.power_settle_ms);
        rails.set_line(Line::Backlight, true)?;

        let supply = rails.enable_supply();
        delay.delay_ms(t.supply_settle_ms);
        delay.delay_ms(t.pre_reset_ms);

        // HW reset
        rails.set_line(Line::Reset, true)?;
        delay.delay_ms(t.reset_high_ms);
        rails.set_line(Line::Reset, false)?;
        delay.delay_ms(t.reset_low_ms);
        rails.set_line(Line::Reset, true)?;
        delay.delay_ms(t.reset_release_ms);

        push_table(di, rails, delay, &Self::INIT_TABLE)?;

        rails.set_line(Line::Backlight, true)?;
        supply
    }

    /// Display off, sleep in, then drop reset, power and supply.
    ///
    /// Like `wake_up`, a supply failure does not cut the sequence short.
    fn sleep<DI: DsiHost, R: PanelRails, DELAY: DelayNs>(
        di: &mut DI,
        rails: &mut R,
        delay: &mut DELAY,
    ) -> Result<(), DisplayError> {
        let t = Self::TIMING;

        rails.set_line(Line::Backlight, false)?;
        delay.delay_ms(t.backlight_off_ms);

        push_table(di, rails, delay, &Self::SUSPEND_TABLE)?;

        rails.set_line(Line::Reset, false)?;
        delay.delay_ms(t.reset_assert_ms);
        rails.set_line(Line::PowerEnable, false)?;
        delay.delay_ms(t.power_off_ms);
        rails.set_line(Line::Backlight, false)?;

        let supply = rails.disable_supply();
        delay.delay_ms(t.supply_off_ms);
        supply
    }
}
