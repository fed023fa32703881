//! Vendor command tables and the interpreter that plays them back.

use embedded_hal::delay::DelayNs;

use crate::command::ShortPacket;
use crate::interface::{DisplayError, DsiHost};
use crate::power::{Line, PanelRails};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TableEntry {
    /// Raw command-queue word, see [`ShortPacket`] for the layout
    SetCmdq(u32),
    /// Delay in milliseconds
    Delay(u32),
    /// Drive a panel control line high (`true`) or low
    SetLine(Line, bool),
    /// Stop. Entries after this one are never executed.
    End,
}

/// A named, static command table.
#[derive(Clone, Copy, Debug)]
pub struct Table {
    pub name: &'static str,
    entries: &'static [TableEntry],
}

impl Table {
    pub const fn new(name: &'static str, entries: &'static [TableEntry]) -> Self {
        Table { name, entries }
    }

    /// Entries up to, not including, the first `End`.
    pub fn entries(&self) -> impl Iterator<Item = &'static TableEntry> {
        self.entries
            .iter()
            .take_while(|entry| **entry != TableEntry::End)
    }

    /// Decoded packets, in execution order. Words that are not short packets are skipped.
    pub fn commands(&self) -> impl Iterator<Item = ShortPacket> {
        self.entries().filter_map(|entry| match *entry {
            TableEntry::SetCmdq(word) => ShortPacket::from_word(word),
            _ => None,
        })
    }

    /// Sum of all delays, i.e. the minimum time a push takes.
    pub fn total_delay_ms(&self) -> u32 {
        self.entries()
            .map(|entry| match *entry {
                TableEntry::Delay(ms) => ms,
                _ => 0,
            })
            .sum()
    }
}

/// Execute `table` top to bottom.
///
/// Every word goes out as a single-word queue with `force_update` set, so each
/// register write reaches the panel before the following delay starts.
pub fn push_table<DI, R, DELAY>(
    di: &mut DI,
    rails: &mut R,
    delay: &mut DELAY,
    table: &Table,
) -> Result<(), DisplayError>
where
    DI: DsiHost,
    R: PanelRails,
    DELAY: DelayNs,
{
    debug!("push table {}", table.name);

    for entry in table.entries() {
        match *entry {
            TableEntry::SetCmdq(word) => di.set_cmdq(&[word], true)?,
            TableEntry::Delay(ms) => delay.delay_ms(ms),
            TableEntry::SetLine(line, high) => rails.set_line(line, high)?,
            TableEntry::End => break,
        }
    }

    Ok(())
}
