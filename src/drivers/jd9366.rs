//! JD9366 driver, BOE 10.1" WXGA IPS module on the k710 board.

use crate::params::{
    DsiMode, DsiParams, LaneCount, LcmType, PackedPixelStream, PanelParams, PixelFormat,
};
use crate::table::{Table, TableEntry, TableEntry::*};

use super::Driver;

/// 800 x 1280, 3 lane MIPI-DSI, RGB888 video mode
pub struct Jd9366BoeWxga;

impl Driver for Jd9366BoeWxga {
    const NAME: &'static str = "k710_hz_jd9366_boe_wxga_ips_101";

    const PARAMS: PanelParams = PanelParams {
        lcm_type: LcmType::Dsi,
        width: 800,
        height: 1280,
        dsi: DsiParams {
            mode: DsiMode::SyncPulseVideo,
            lanes: LaneCount::Three,
            format: PixelFormat::Rgb888,
            packed_pixel_stream: PackedPixelStream::Rgb888_24Bit,

            vertical_sync_active: 4,
            vertical_backporch: 8,
            vertical_frontporch: 24,
            vertical_active_line: 1280,

            horizontal_sync_active: 18,
            horizontal_backporch: 18,
            horizontal_frontporch: 18,
            horizontal_active_pixel: 800,

            pll_clock_mhz: 280,
        },
    };

    const INIT_TABLE: Table = Table::new("jd9366 init", JD9366_INIT);

    const SUSPEND_TABLE: Table = Table::new("jd9366 suspend", JD9366_SUSPEND);
}

// Vendor register values. Page 0 register 0x80 selects the lane count (0x02: 3 lanes),
// E1..E3 is the password that unlocks pages 1-4.
#[rustfmt::skip]
const JD9366_INIT: &[TableEntry] = &[
    // page 0: user command set
    SetCmdq(0x00e0_1500), Delay(1),
    SetCmdq(0x93e1_1500), Delay(1),
    SetCmdq(0x65e2_1500), Delay(1),
    SetCmdq(0xf8e3_1500), Delay(1),
    SetCmdq(0x0280_1500), Delay(1),
    // page 1: power, VCOM and gamma
    SetCmdq(0x01e0_1500), Delay(1),
    SetCmdq(0x0000_1500), Delay(1),
    SetCmdq(0x6601_1500), Delay(1),
    SetCmdq(0x010e_1500), Delay(1),
    SetCmdq(0x0017_1500), Delay(1),
    SetCmdq(0xbf18_1500), Delay(1),
    SetCmdq(0x0019_1500), Delay(1),
    SetCmdq(0x001a_1500), Delay(1),
    SetCmdq(0xbf1b_1500), Delay(1),
    SetCmdq(0x001c_1500), Delay(1),
    SetCmdq(0x3e1f_1500), Delay(1),
    SetCmdq(0x2820_1500), Delay(1),
    SetCmdq(0x2821_1500), Delay(1),
    SetCmdq(0x0e22_1500), Delay(1),
    SetCmdq(0x0937_1500), Delay(1),
    SetCmdq(0x0438_1500), Delay(1),
    SetCmdq(0x0839_1500), Delay(1),
    SetCmdq(0x123a_1500), Delay(1),
    SetCmdq(0x783c_1500), Delay(1),
    SetCmdq(0xff3d_1500), Delay(1),
    SetCmdq(0xff3e_1500), Delay(1),
    SetCmdq(0x7f3f_1500), Delay(1),
    SetCmdq(0x0640_1500), Delay(1),
    SetCmdq(0xa041_1500), Delay(1),
    SetCmdq(0x0155_1500), Delay(1),
    SetCmdq(0x0156_1500), Delay(1),
    SetCmdq(0x6957_1500), Delay(1),
    SetCmdq(0x0a58_1500), Delay(1),
    SetCmdq(0x0a59_1500), Delay(1),
    SetCmdq(0x295a_1500), Delay(1),
    SetCmdq(0x155b_1500), Delay(1),
    SetCmdq(0x7c5d_1500), Delay(1),
    SetCmdq(0x655e_1500), Delay(1),
    SetCmdq(0x555f_1500), Delay(1),
    SetCmdq(0x4960_1500), Delay(1),
    SetCmdq(0x4461_1500), Delay(1),
    SetCmdq(0x3562_1500), Delay(1),
    SetCmdq(0x3a63_1500), Delay(1),
    SetCmdq(0x2364_1500), Delay(1),
    SetCmdq(0x3d65_1500), Delay(1),
    SetCmdq(0x3c66_1500), Delay(1),
    SetCmdq(0x3d67_1500), Delay(1),
    SetCmdq(0x5d68_1500), Delay(1),
    SetCmdq(0x4d69_1500), Delay(1),
    SetCmdq(0x566a_1500), Delay(1),
    SetCmdq(0x486b_1500), Delay(1),
    SetCmdq(0x456c_1500), Delay(1),
    SetCmdq(0x386d_1500), Delay(1),
    SetCmdq(0x256e_1500), Delay(1),
    SetCmdq(0x006f_1500), Delay(1),
    SetCmdq(0x7c70_1500), Delay(1),
    SetCmdq(0x6571_1500), Delay(1),
    SetCmdq(0x5572_1500), Delay(1),
    SetCmdq(0x4973_1500), Delay(1),
    SetCmdq(0x4474_1500), Delay(1),
    SetCmdq(0x3575_1500), Delay(1),
    SetCmdq(0x3a76_1500), Delay(1),
    SetCmdq(0x2377_1500), Delay(1),
    SetCmdq(0x3d78_1500), Delay(1),
    SetCmdq(0x3c79_1500), Delay(1),
    SetCmdq(0x3d7a_1500), Delay(1),
    SetCmdq(0x5d7b_1500), Delay(1),
    SetCmdq(0x4d7c_1500), Delay(1),
    SetCmdq(0x567d_1500), Delay(1),
    SetCmdq(0x487e_1500), Delay(1),
    SetCmdq(0x457f_1500), Delay(1),
    SetCmdq(0x3880_1500), Delay(1),
    SetCmdq(0x2581_1500), Delay(1),
    SetCmdq(0x0082_1500), Delay(1),
    // page 2: GIP mapping and timing
    SetCmdq(0x02e0_1500), Delay(1),
    SetCmdq(0x1e00_1500), Delay(1),
    SetCmdq(0x1e01_1500), Delay(1),
    SetCmdq(0x4102_1500), Delay(1),
    SetCmdq(0x4103_1500), Delay(1),
    SetCmdq(0x4304_1500), Delay(1),
    SetCmdq(0x4305_1500), Delay(1),
    SetCmdq(0x1f06_1500), Delay(1),
    SetCmdq(0x1f07_1500), Delay(1),
    SetCmdq(0x1f08_1500), Delay(1),
    SetCmdq(0x1f09_1500), Delay(1),
    SetCmdq(0x1e0a_1500), Delay(1),
    SetCmdq(0x1e0b_1500), Delay(1),
    SetCmdq(0x1f0c_1500), Delay(1),
    SetCmdq(0x470d_1500), Delay(1),
    SetCmdq(0x470e_1500), Delay(1),
    SetCmdq(0x450f_1500), Delay(1),
    SetCmdq(0x4510_1500), Delay(1),
    SetCmdq(0x4b11_1500), Delay(1),
    SetCmdq(0x4b12_1500), Delay(1),
    SetCmdq(0x4913_1500), Delay(1),
    SetCmdq(0x4914_1500), Delay(1),
    SetCmdq(0x1f15_1500), Delay(1),
    SetCmdq(0x1e16_1500), Delay(1),
    SetCmdq(0x1e17_1500), Delay(1),
    SetCmdq(0x4018_1500), Delay(1),
    SetCmdq(0x4019_1500), Delay(1),
    SetCmdq(0x421a_1500), Delay(1),
    SetCmdq(0x421b_1500), Delay(1),
    SetCmdq(0x1f1c_1500), Delay(1),
    SetCmdq(0x1f1d_1500), Delay(1),
    SetCmdq(0x1f1e_1500), Delay(1),
    SetCmdq(0x1f1f_1500), Delay(1),
    SetCmdq(0x1e20_1500), Delay(1),
    SetCmdq(0x1e21_1500), Delay(1),
    SetCmdq(0x1f22_1500), Delay(1),
    SetCmdq(0x4623_1500), Delay(1),
    SetCmdq(0x4624_1500), Delay(1),
    SetCmdq(0x4425_1500), Delay(1),
    SetCmdq(0x4426_1500), Delay(1),
    SetCmdq(0x4a27_1500), Delay(1),
    SetCmdq(0x4a28_1500), Delay(1),
    SetCmdq(0x4829_1500), Delay(1),
    SetCmdq(0x482a_1500), Delay(1),
    SetCmdq(0x1f2b_1500), Delay(1),
    SetCmdq(0x1058_1500), Delay(1),
    SetCmdq(0x0059_1500), Delay(1),
    SetCmdq(0x005a_1500), Delay(1),
    SetCmdq(0x305b_1500), Delay(1),
    SetCmdq(0x025c_1500), Delay(1),
    SetCmdq(0x405d_1500), Delay(1),
    SetCmdq(0x015e_1500), Delay(1),
    SetCmdq(0x025f_1500), Delay(1),
    SetCmdq(0x3060_1500), Delay(1),
    SetCmdq(0x0161_1500), Delay(1),
    SetCmdq(0x0262_1500), Delay(1),
    SetCmdq(0x6a63_1500), Delay(1),
    SetCmdq(0x6a64_1500), Delay(1),
    SetCmdq(0x0565_1500), Delay(1),
    SetCmdq(0x1266_1500), Delay(1),
    SetCmdq(0x7467_1500), Delay(1),
    SetCmdq(0x0468_1500), Delay(1),
    SetCmdq(0x6a69_1500), Delay(1),
    SetCmdq(0x6a6a_1500), Delay(1),
    SetCmdq(0x086b_1500), Delay(1),
    SetCmdq(0x006c_1500), Delay(1),
    SetCmdq(0x066d_1500), Delay(1),
    SetCmdq(0x006e_1500), Delay(1),
    SetCmdq(0x886f_1500), Delay(1),
    SetCmdq(0x0070_1500), Delay(1),
    SetCmdq(0x0071_1500), Delay(1),
    SetCmdq(0x0672_1500), Delay(1),
    SetCmdq(0x7b73_1500), Delay(1),
    SetCmdq(0x0074_1500), Delay(1),
    SetCmdq(0x0775_1500), Delay(1),
    SetCmdq(0x0076_1500), Delay(1),
    SetCmdq(0x5d77_1500), Delay(1),
    SetCmdq(0x1778_1500), Delay(1),
    SetCmdq(0x1f79_1500), Delay(1),
    SetCmdq(0x007a_1500), Delay(1),
    SetCmdq(0x007b_1500), Delay(1),
    SetCmdq(0x007c_1500), Delay(1),
    SetCmdq(0x037d_1500), Delay(1),
    SetCmdq(0x7b7e_1500), Delay(1),
    // page 4: MIPI and ESD control
    SetCmdq(0x04e0_1500), Delay(1),
    SetCmdq(0x032d_1500), Delay(1),
    SetCmdq(0x442e_1500), Delay(1),
    SetCmdq(0x1109_1500), Delay(1),
    SetCmdq(0x032d_1500), Delay(1),
    // page 3: GIP timing
    SetCmdq(0x03e0_1500), Delay(1),
    SetCmdq(0x3f98_1500), Delay(1),
    // page 0: user command set
    SetCmdq(0x00e0_1500), Delay(1),
    SetCmdq(0x02e6_1500), Delay(1),
    SetCmdq(0x02e7_1500), Delay(1),
    SetCmdq(0x0011_0500), Delay(120),
    SetCmdq(0x0029_0500), Delay(20),
    Delay(100),
    End,
];

#[rustfmt::skip]
const JD9366_SUSPEND: &[TableEntry] = &[
    // display off, sleep in
    SetCmdq(0x0028_0500), Delay(5),
    SetCmdq(0x0010_0500), Delay(5),
    End,
];
