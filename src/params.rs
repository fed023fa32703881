//! Timing and geometry the display subsystem needs to drive the panel in video mode.

use embedded_graphics::geometry::Size;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LcmType {
    Dbi,
    Dpi,
    Dsi,
}

/// DSI operating mode.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum DsiMode {
    Command,
    /// Video mode with explicit sync start and end packets
    SyncPulseVideo,
    SyncEventVideo,
    BurstVideo,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LaneCount {
    One = 1,
    Two = 2,
    Three = 3,
    Four = 4,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PixelFormat {
    Rgb565,
    Rgb666,
    Rgb888,
}

impl PixelFormat {
    pub const fn bits_per_pixel(self) -> u32 {
        match self {
            PixelFormat::Rgb565 => 16,
            PixelFormat::Rgb666 => 18,
            PixelFormat::Rgb888 => 24,
        }
    }
}

/// Packed pixel stream format on the link.
#[allow(non_camel_case_types)]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum PackedPixelStream {
    Rgb565_16Bit,
    Rgb666_18Bit,
    Rgb666_Loosely24Bit,
    Rgb888_24Bit,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DsiParams {
    pub mode: DsiMode,
    pub lanes: LaneCount,
    pub format: PixelFormat,
    pub packed_pixel_stream: PackedPixelStream,

    pub vertical_sync_active: u32,
    pub vertical_backporch: u32,
    pub vertical_frontporch: u32,
    pub vertical_active_line: u32,

    pub horizontal_sync_active: u32,
    pub horizontal_backporch: u32,
    pub horizontal_frontporch: u32,
    pub horizontal_active_pixel: u32,

    /// DSI PLL clock in MHz
    pub pll_clock_mhz: u32,
}

impl DsiParams {
    /// Total line length in pixel clocks, blanking included.
    pub const fn htotal(&self) -> u32 {
        self.horizontal_sync_active
            + self.horizontal_backporch
            + self.horizontal_active_pixel
            + self.horizontal_frontporch
    }

    /// Total frame height in lines, blanking included.
    pub const fn vtotal(&self) -> u32 {
        self.vertical_sync_active
            + self.vertical_backporch
            + self.vertical_active_line
            + self.vertical_frontporch
    }

    /// Pixel clock the PLL can sustain, in Hz.
    ///
    /// The link is DDR, so every lane moves two bits per PLL cycle.
    pub fn max_pixel_clock_hz(&self) -> u32 {
        let bits_per_second = u64::from(self.pll_clock_mhz) * 1_000_000 * 2 * self.lanes as u64;
        u32::try_from(bits_per_second / u64::from(self.format.bits_per_pixel())).unwrap_or(u32::MAX)
    }

    /// Frame rate in millihertz for a given pixel clock.
    pub fn refresh_rate_millihz(&self, pixel_clock_hz: u32) -> u32 {
        let frame = u64::from(self.htotal()) * u64::from(self.vtotal());
        if frame == 0 {
            return 0;
        }
        u32::try_from(u64::from(pixel_clock_hz) * 1000 / frame).unwrap_or(u32::MAX)
    }
}

/// Parameters reported through `get_params`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct PanelParams {
    pub lcm_type: LcmType,
    pub width: u32,
    pub height: u32,
    pub dsi: DsiParams,
}

impl PanelParams {
    pub const fn size(&self) -> Size {
        Size::new(self.width, self.height)
    }
}
