//! The display serial interface seam.
//!
//! The driver never touches DSI hardware directly. The display subsystem hands it a
//! host that accepts command-queue words, the same way the platform's LCM utility
//! table exposes `dsi_set_cmdq`.

use crate::command::ShortPacket;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DisplayError {
    /// DSI host refused a command-queue write
    BusWriteError,
    ResetError,
    PowerEnableError,
    BacklightError,
    /// Regulator framework error code, passed through
    RegulatorError(i32),
}

/// Trait implemented by DSI hosts that can queue command words for the panel.
pub trait DsiHost {
    /// Queue raw command-queue words.
    ///
    /// `force_update` asks the host to flush the queue to the panel right away
    /// instead of waiting for the next frame.
    fn set_cmdq(&mut self, words: &[u32], force_update: bool) -> Result<(), DisplayError>;

    /// Send a single short packet, flushed immediately.
    fn write_short(&mut self, packet: ShortPacket) -> Result<(), DisplayError> {
        self.set_cmdq(&[packet.to_word()], true)
    }
}

impl<T: DsiHost + ?Sized> DsiHost for &mut T {
    fn set_cmdq(&mut self, words: &[u32], force_update: bool) -> Result<(), DisplayError> {
        (**self).set_cmdq(words, force_update)
    }
}
