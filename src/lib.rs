#![no_std]

#[macro_use]
mod log;

pub mod command;
pub mod drivers;
pub mod interface;
pub mod params;
pub mod power;
pub mod table;

use core::marker::PhantomData;

use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_hal::delay::DelayNs;
use params::PanelParams;

pub use drivers::{Driver, Jd9366BoeWxga};
pub use interface::{DisplayError, DsiHost};
pub use power::{NoRegulator, PanelRails, PowerRails, Regulator};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PanelState {
    /// Constructed, never initialized
    Off,
    On,
    Suspended,
}

/// An LCD panel on a DSI link.
///
/// Holds what the display subsystem would hand over through `set_util_funcs`:
/// the DSI host and a delay source. `D` selects the panel model.
pub struct Panel<DI: DsiHost, R: PanelRails, DELAY: DelayNs, D: Driver> {
    pub host: DI,
    pub rails: R,
    delay: DELAY,
    state: PanelState,
    _phantom: PhantomData<D>,
}

impl<DI: DsiHost, R: PanelRails, DELAY: DelayNs, D: Driver> Panel<DI, R, DELAY, D> {
    pub fn new(host: DI, rails: R, delay: DELAY) -> Self {
        Self {
            host,
            rails,
            delay,
            state: PanelState::Off,
            _phantom: PhantomData,
        }
    }

    /// Check and enable the logic supply. Call once after construction.
    pub fn probe(&mut self) -> Result<(), DisplayError> {
        self.rails.supply_voltage()?;
        self.rails.enable_supply()
    }

    pub fn name(&self) -> &'static str {
        D::NAME
    }

    pub fn params(&self) -> PanelParams {
        D::PARAMS
    }

    pub fn state(&self) -> PanelState {
        self.state
    }

    pub fn init(&mut self) -> Result<(), DisplayError> {
        info!("{} init", D::NAME);
        self.wake_up()
    }

    pub fn resume(&mut self) -> Result<(), DisplayError> {
        info!("{} resume", D::NAME);
        self.wake_up()
    }

    pub fn suspend(&mut self) -> Result<(), DisplayError> {
        info!("{} suspend", D::NAME);
        let result = D::sleep(&mut self.host, &mut self.rails, &mut self.delay);
        self.settle(result, PanelState::Suspended)
    }

    /// Consume the panel and return the host, rails and delay.
    pub fn release(self) -> (DI, R, DELAY) {
        (self.host, self.rails, self.delay)
    }

    fn wake_up(&mut self) -> Result<(), DisplayError> {
        let result = D::wake_up(&mut self.host, &mut self.rails, &mut self.delay);
        self.settle(result, PanelState::On)
    }

    // Supply errors surface only after the whole sequence ran, so the panel
    // did reach `state` even though the call fails.
    fn settle(
        &mut self,
        result: Result<(), DisplayError>,
        state: PanelState,
    ) -> Result<(), DisplayError> {
        if matches!(result, Ok(()) | Err(DisplayError::RegulatorError(_))) {
            self.state = state;
        }
        result
    }
}

impl<DI: DsiHost, R: PanelRails, DELAY: DelayNs, D: Driver> OriginDimensions
    for Panel<DI, R, DELAY, D>
{
    fn size(&self) -> Size {
        D::PARAMS.size()
    }
}
