//! Command Table

/// DCS and JD9366 opcodes used by the init and suspend tables.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Command {
    /// Enter Sleep Mode
    ///
    /// Wait 5ms before sending the next command.
    SleepIn = 0x10,
    /// Exit Sleep Mode
    ///
    /// The booster and gate drivers need 120ms to settle afterwards.
    SleepOut = 0x11,
    DisplayOff = 0x28,
    DisplayOn = 0x29,
    /// Select register page
    ///
    /// <<0:b5, A:b3>>
    ///
    /// ## A
    /// - 0, user command set [POR]
    /// - 1, power and timing control
    /// - 2, GIP (gate in panel) mapping
    /// - 3, GIP timing
    /// - 4, MIPI control and ESD
    PageSelect = 0xe0,
    /// Password to unlock the page registers: 0x93, 0x65, 0xf8
    Password1 = 0xe1,
    Password2 = 0xe2,
    Password3 = 0xe3,
}

/// MIPI-DSI data types found in MediaTek command-queue words.
#[repr(u8)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DataType {
    /// DCS short write, no parameters
    DcsShortWrite0 = 0x05,
    /// DCS short write, 1 parameter
    DcsShortWrite1 = 0x15,
    /// Generic short write, 2 parameters
    GenericShortWrite2 = 0x23,
}

impl DataType {
    pub fn from_u8(value: u8) -> Option<Self> {
        match value {
            0x05 => Some(DataType::DcsShortWrite0),
            0x15 => Some(DataType::DcsShortWrite1),
            0x23 => Some(DataType::GenericShortWrite2),
            _ => None,
        }
    }
}

/// One MediaTek command-queue word.
///
/// <<data1:u8, data0:u8, data_type:u8, config:u8>>, most significant byte first.
/// The config byte carries long-packet and BTA flags which short writes never set,
/// so it is always zero here.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct ShortPacket {
    pub data_type: DataType,
    pub data0: u8,
    pub data1: u8,
}

impl ShortPacket {
    pub const fn dcs(command: u8) -> Self {
        ShortPacket {
            data_type: DataType::DcsShortWrite0,
            data0: command,
            data1: 0,
        }
    }

    pub const fn dcs_param(command: u8, param: u8) -> Self {
        ShortPacket {
            data_type: DataType::DcsShortWrite1,
            data0: command,
            data1: param,
        }
    }

    pub const fn generic(data0: u8, data1: u8) -> Self {
        ShortPacket {
            data_type: DataType::GenericShortWrite2,
            data0,
            data1,
        }
    }

    pub const fn to_word(self) -> u32 {
        (self.data1 as u32) << 24 | (self.data0 as u32) << 16 | (self.data_type as u32) << 8
    }

    pub fn from_word(word: u32) -> Option<Self> {
        let [config, data_type, data0, data1] = word.to_le_bytes();
        if config != 0 {
            return None;
        }
        Some(ShortPacket {
            data_type: DataType::from_u8(data_type)?,
            data0,
            data1,
        })
    }

    /// The parameter byte, if this packet type carries one.
    pub fn param(&self) -> Option<u8> {
        match self.data_type {
            DataType::DcsShortWrite0 => None,
            _ => Some(self.data1),
        }
    }
}

impl From<Command> for ShortPacket {
    fn from(command: Command) -> Self {
        ShortPacket::dcs(command as u8)
    }
}
