//! Power-on / power-off ordering, checked against one shared event log.
//!
//! Run with: cargo test --test sequence

use std::cell::RefCell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_graphics::geometry::{OriginDimensions, Size};
use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType, OutputPin};

use jd9366::command::{Command, ShortPacket};
use jd9366::params::PanelParams;
use jd9366::power::{Line, PowerTiming};
use jd9366::table::{Table, TableEntry};
use jd9366::{
    DisplayError, Driver, DsiHost, Jd9366BoeWxga, Panel, PanelState, PowerRails, Regulator,
};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum Event {
    Line(Line, bool),
    DelayMs(u32),
    Cmdq(u32, bool),
    SupplyOn,
    SupplyOff,
}

type Log = Rc<RefCell<Vec<Event>>>;

struct Pin {
    line: Line,
    log: Log,
}

impl ErrorType for Pin {
    type Error = Infallible;
}

struct BrokenPin;

#[derive(Debug)]
struct PinError;

impl embedded_hal::digital::Error for PinError {
    fn kind(&self) -> embedded_hal::digital::ErrorKind {
        embedded_hal::digital::ErrorKind::Other
    }
}

impl ErrorType for BrokenPin {
    type Error = PinError;
}

impl OutputPin for BrokenPin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        Err(PinError)
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        Err(PinError)
    }
}

impl OutputPin for Pin {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Line(self.line, false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.log.borrow_mut().push(Event::Line(self.line, true));
        Ok(())
    }
}

struct Ldo {
    log: Log,
    uv: u32,
    on: bool,
    /// Error code returned by enable and disable
    fail_with: Option<i32>,
}

impl Regulator for Ldo {
    fn enable(&mut self) -> Result<(), DisplayError> {
        if let Some(code) = self.fail_with {
            return Err(DisplayError::RegulatorError(code));
        }
        self.on = true;
        self.log.borrow_mut().push(Event::SupplyOn);
        Ok(())
    }

    fn disable(&mut self) -> Result<(), DisplayError> {
        if let Some(code) = self.fail_with {
            return Err(DisplayError::RegulatorError(code));
        }
        self.on = false;
        self.log.borrow_mut().push(Event::SupplyOff);
        Ok(())
    }

    fn is_enabled(&mut self) -> bool {
        self.on
    }

    fn voltage_uv(&mut self) -> Result<u32, DisplayError> {
        Ok(self.uv)
    }
}

struct Host {
    log: Log,
    /// Reject the nth word, counting from 0
    fail_at: Option<usize>,
    sent: usize,
}

impl DsiHost for Host {
    fn set_cmdq(&mut self, words: &[u32], force_update: bool) -> Result<(), DisplayError> {
        if self.fail_at == Some(self.sent) {
            return Err(DisplayError::BusWriteError);
        }
        self.sent += 1;
        let mut log = self.log.borrow_mut();
        for &word in words {
            log.push(Event::Cmdq(word, force_update));
        }
        Ok(())
    }
}

struct Delay {
    log: Log,
}

impl DelayNs for Delay {
    fn delay_ns(&mut self, _ns: u32) {
        panic!("sequences only wait in whole milliseconds");
    }

    fn delay_ms(&mut self, ms: u32) {
        self.log.borrow_mut().push(Event::DelayMs(ms));
    }
}

type Rails = PowerRails<Pin, Pin, Pin, Ldo>;

fn pin(line: Line, log: &Log) -> Pin {
    Pin {
        line,
        log: log.clone(),
    }
}

fn rails(log: &Log, supply_on: bool) -> Rails {
    PowerRails::new(
        pin(Line::Reset, log),
        pin(Line::PowerEnable, log),
        pin(Line::Backlight, log),
        Ldo {
            log: log.clone(),
            uv: 1_800_000,
            on: supply_on,
            fail_with: None,
        },
    )
}

fn host(log: &Log) -> Host {
    Host {
        log: log.clone(),
        fail_at: None,
        sent: 0,
    }
}

fn panel<D: Driver>(log: &Log) -> Panel<Host, Rails, Delay, D> {
    Panel::new(host(log), rails(log, false), Delay { log: log.clone() })
}

fn take(log: &Log) -> Vec<Event> {
    std::mem::take(&mut *log.borrow_mut())
}

#[test]
fn init_powers_up_before_reset_and_commands() {
    let log = Log::default();
    let mut panel = panel::<Jd9366BoeWxga>(&log);
    panel.init().unwrap();
    let events = take(&log);

    assert_eq!(
        events[..13],
        [
            Event::Line(Line::PowerEnable, true),
            Event::DelayMs(50),
            Event::Line(Line::Backlight, true),
            Event::SupplyOn,
            Event::DelayMs(30),
            Event::DelayMs(50),
            Event::Line(Line::Reset, true),
            Event::DelayMs(50),
            Event::Line(Line::Reset, false),
            Event::DelayMs(50),
            Event::Line(Line::Reset, true),
            Event::DelayMs(80),
            Event::Cmdq(0x00e0_1500, true),
        ]
    );
    assert_eq!(events.last(), Some(&Event::Line(Line::Backlight, true)));

    // the whole table goes out, word by word, in order
    let words: Vec<u32> = events
        .iter()
        .filter_map(|e| match *e {
            Event::Cmdq(word, force) => {
                assert!(force);
                Some(word)
            }
            _ => None,
        })
        .collect();
    let expected: Vec<u32> = Jd9366BoeWxga::INIT_TABLE
        .commands()
        .map(|p| p.to_word())
        .collect();
    assert_eq!(words.len(), 170);
    assert_eq!(words, expected);

    let waited: u32 = events
        .iter()
        .map(|e| match *e {
            Event::DelayMs(ms) => ms,
            _ => 0,
        })
        .sum();
    assert_eq!(waited, 310 + Jd9366BoeWxga::INIT_TABLE.total_delay_ms());

    assert_eq!(panel.state(), PanelState::On);
}

#[test]
fn suspend_reverses_the_sequence() {
    let log = Log::default();
    let mut panel = Panel::<_, _, _, Jd9366BoeWxga>::new(
        host(&log),
        rails(&log, true),
        Delay { log: log.clone() },
    );
    panel.suspend().unwrap();

    assert_eq!(
        take(&log),
        [
            Event::Line(Line::Backlight, false),
            Event::DelayMs(250),
            Event::Cmdq(word(Command::DisplayOff), true),
            Event::DelayMs(5),
            Event::Cmdq(word(Command::SleepIn), true),
            Event::DelayMs(5),
            Event::Line(Line::Reset, false),
            Event::DelayMs(10),
            Event::Line(Line::PowerEnable, false),
            Event::DelayMs(20),
            Event::Line(Line::Backlight, false),
            Event::SupplyOff,
            Event::DelayMs(80),
        ]
    );
    assert_eq!(panel.state(), PanelState::Suspended);
}

fn word(command: Command) -> u32 {
    ShortPacket::from(command).to_word()
}

#[test]
fn suspend_leaves_disabled_supply_alone() {
    let log = Log::default();
    let mut panel = panel::<Jd9366BoeWxga>(&log);
    panel.suspend().unwrap();
    assert!(!take(&log).contains(&Event::SupplyOff));
}

#[test]
fn resume_repeats_init() {
    let log = Log::default();
    let mut panel = panel::<Jd9366BoeWxga>(&log);

    panel.init().unwrap();
    let first = take(&log);
    panel.suspend().unwrap();
    take(&log);
    panel.resume().unwrap();

    assert_eq!(take(&log), first);
    assert_eq!(panel.state(), PanelState::On);
}

#[test]
fn bus_error_aborts_init() {
    let log = Log::default();
    let mut panel = Panel::<_, _, _, Jd9366BoeWxga>::new(
        Host {
            fail_at: Some(4),
            ..host(&log)
        },
        rails(&log, false),
        Delay { log: log.clone() },
    );

    assert_eq!(panel.init(), Err(DisplayError::BusWriteError));
    assert_eq!(panel.state(), PanelState::Off);

    let events = take(&log);
    let sent = events
        .iter()
        .filter(|e| matches!(e, Event::Cmdq(..)))
        .count();
    assert_eq!(sent, 4);
    // nothing after the failed write
    assert_eq!(events.last(), Some(&Event::DelayMs(1)));
}

fn busy_supply(rails: Rails) -> Rails {
    let (rst, pwr, bl, mut ldo) = rails.release();
    ldo.fail_with = Some(-16);
    PowerRails::new(rst, pwr, bl, ldo)
}

#[test]
fn supply_failure_does_not_stop_init() {
    let log = Log::default();
    let mut panel = Panel::<_, _, _, Jd9366BoeWxga>::new(
        host(&log),
        busy_supply(rails(&log, false)),
        Delay { log: log.clone() },
    );

    assert_eq!(panel.init(), Err(DisplayError::RegulatorError(-16)));
    // the panel is lit regardless
    assert_eq!(panel.state(), PanelState::On);

    let events = take(&log);
    assert!(!events.contains(&Event::SupplyOn));
    let lines: Vec<(Line, bool)> = events
        .iter()
        .filter_map(|e| match *e {
            Event::Line(line, high) => Some((line, high)),
            _ => None,
        })
        .collect();
    assert_eq!(
        lines,
        [
            (Line::PowerEnable, true),
            (Line::Backlight, true),
            (Line::Reset, true),
            (Line::Reset, false),
            (Line::Reset, true),
            (Line::Backlight, true),
        ]
    );
    let sent = events
        .iter()
        .filter(|e| matches!(e, Event::Cmdq(..)))
        .count();
    assert_eq!(sent, 170);
}

#[test]
fn supply_failure_still_suspends() {
    let log = Log::default();
    let rails = busy_supply(rails(&log, true));
    let mut panel =
        Panel::<_, _, _, Jd9366BoeWxga>::new(host(&log), rails, Delay { log: log.clone() });

    assert_eq!(panel.suspend(), Err(DisplayError::RegulatorError(-16)));
    assert_eq!(panel.state(), PanelState::Suspended);

    let events = take(&log);
    assert!(!events.contains(&Event::SupplyOff));
    // every line dropped and the final settle delay still honoured
    assert_eq!(
        events[events.len() - 6..],
        [
            Event::Line(Line::Reset, false),
            Event::DelayMs(10),
            Event::Line(Line::PowerEnable, false),
            Event::DelayMs(20),
            Event::Line(Line::Backlight, false),
            Event::DelayMs(80),
        ]
    );
}

#[test]
fn broken_reset_line() {
    let log = Log::default();
    let rails = PowerRails::new(
        BrokenPin,
        pin(Line::PowerEnable, &log),
        pin(Line::Backlight, &log),
        Ldo {
            log: log.clone(),
            uv: 1_800_000,
            on: false,
            fail_with: None,
        },
    );
    let mut panel =
        Panel::<_, _, _, Jd9366BoeWxga>::new(host(&log), rails, Delay { log: log.clone() });

    assert_eq!(panel.init(), Err(DisplayError::ResetError));
    assert!(!take(&log).iter().any(|e| matches!(e, Event::Cmdq(..))));
}

#[test]
fn probe_enables_supply_even_off_nominal() {
    let log = Log::default();
    let mut rails = rails(&log, false);
    let (rst, pwr, bl, mut ldo) = rails.release();
    ldo.uv = 2_800_000;
    rails = PowerRails::new(rst, pwr, bl, ldo);

    let mut panel =
        Panel::<_, _, _, Jd9366BoeWxga>::new(host(&log), rails, Delay { log: log.clone() });
    panel.probe().unwrap();

    assert_eq!(take(&log), [Event::SupplyOn]);
    assert_eq!(panel.state(), PanelState::Off);
}

#[test]
fn reports_fixed_params() {
    let log = Log::default();
    let panel = panel::<Jd9366BoeWxga>(&log);

    assert_eq!(panel.name(), "k710_hz_jd9366_boe_wxga_ips_101");
    assert_eq!(panel.size(), Size::new(800, 1280));

    let params = panel.params();
    assert_eq!(params.dsi.lanes as u8, 3);
    assert_eq!(params.dsi.pll_clock_mhz, 280);
    assert_eq!(params.dsi.vertical_frontporch, 24);
    assert!(take(&log).is_empty());
}

/// A board variant that toggles the backlight from its table and needs no settle time.
struct Bench;

#[rustfmt::skip]
const BENCH_INIT: &[TableEntry] = &[
    TableEntry::SetLine(Line::Backlight, false),
    TableEntry::SetCmdq(0x0011_0500), TableEntry::Delay(120),
    TableEntry::SetCmdq(0x0029_0500),
    TableEntry::End,
    TableEntry::SetCmdq(0xdead_0500),
];

impl Driver for Bench {
    const NAME: &'static str = "bench";
    const PARAMS: PanelParams = Jd9366BoeWxga::PARAMS;
    const INIT_TABLE: Table = Table::new("bench init", BENCH_INIT);
    const SUSPEND_TABLE: Table = Table::new("bench suspend", &[]);
    const TIMING: PowerTiming = PowerTiming {
        power_settle_ms: 0,
        supply_settle_ms: 0,
        pre_reset_ms: 0,
        reset_high_ms: 1,
        reset_low_ms: 1,
        reset_release_ms: 5,
        backlight_off_ms: 0,
        reset_assert_ms: 0,
        power_off_ms: 0,
        supply_off_ms: 0,
    };
}

#[test]
fn table_lines_and_custom_timing() {
    let log = Log::default();
    let mut panel = panel::<Bench>(&log);
    panel.init().unwrap();

    let events = take(&log);
    let tail = &events[events.len() - 6..];
    assert_eq!(
        tail,
        [
            Event::DelayMs(5),
            Event::Line(Line::Backlight, false),
            Event::Cmdq(0x0011_0500, true),
            Event::DelayMs(120),
            Event::Cmdq(0x0029_0500, true),
            Event::Line(Line::Backlight, true),
        ]
    );
    assert!(!events.contains(&Event::Cmdq(0xdead_0500, true)));
}
