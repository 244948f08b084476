//! Fuzz target: `Controller::tick`
//!
//! Feeds the controller an arbitrary stream of sensor levels and clock
//! jumps (including jumps across the `u32` wrap) and verifies:
//! - No panics
//! - Every servo write stays within one sweep step of the physical range
//! - The dwell always ends once its duration has elapsed
//!
//! cargo fuzz run fuzz_controller

#![no_main]

use embedded_hal::delay::DelayNs;
use firewatch::app::events::AppEvent;
use firewatch::app::ports::{ActuatorPort, EventSink, LedColor, SensorPort, ServoId, TimePort};
use firewatch::app::service::Controller;
use firewatch::config::SystemConfig;
use libfuzzer_sys::fuzz_target;

struct FuzzBoard<'a> {
    data: &'a [u8],
    pos: usize,
    now: u32,
    servo_writes: Vec<i32>,
}

impl FuzzBoard<'_> {
    fn next_u16(&mut self) -> u16 {
        let lo = self.data.get(self.pos).copied().unwrap_or(0);
        let hi = self.data.get(self.pos + 1).copied().unwrap_or(0);
        self.pos += 2;
        u16::from_le_bytes([lo, hi]) & 0x03ff
    }
}

impl SensorPort for FuzzBoard<'_> {
    fn read_flame_raw(&mut self) -> u16 {
        self.next_u16()
    }

    fn read_smoke_raw(&mut self) -> u16 {
        self.next_u16()
    }
}

impl ActuatorPort for FuzzBoard<'_> {
    fn set_led(&mut self, _led: LedColor, _on: bool) {}
    fn set_pump(&mut self, _on: bool) {}
    fn set_buzzer(&mut self, _on: bool) {}
    fn write_servo(&mut self, _servo: ServoId, angle: i32) {
        self.servo_writes.push(angle);
    }
    fn all_off(&mut self) {}
}

impl TimePort for FuzzBoard<'_> {
    fn now_ms(&self) -> u32 {
        self.now
    }
}

impl DelayNs for FuzzBoard<'_> {
    fn delay_ns(&mut self, ns: u32) {
        self.now = self.now.wrapping_add(ns / 1_000_000);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.now = self.now.wrapping_add(ms);
    }
}

struct NullSink;

impl EventSink for NullSink {
    fn emit(&mut self, _event: &AppEvent) {}
}

fuzz_target!(|data: &[u8]| {
    if data.len() < 5 {
        return;
    }

    let config = SystemConfig::default();
    let start = u32::from_le_bytes([data[0], data[1], data[2], data[3]]);
    let ticks = data[4] as usize;
    let mut board = FuzzBoard {
        data: &data[5..],
        pos: 0,
        now: start,
        servo_writes: Vec::new(),
    };
    let mut app = Controller::new(config.clone());
    let mut sink = NullSink;

    for _ in 0..ticks {
        let jump = board.next_u16() as u32 * 8;
        board.now = board.now.wrapping_add(jump);
        app.tick(&mut board, &mut sink);
    }

    // A dwell in progress must end once its duration has passed.
    if app.context().is_dwelling() {
        board.now = board.now.wrapping_add(config.dwell_duration_ms);
        app.tick(&mut board, &mut sink);
        assert!(!app.context().is_dwelling(), "dwell outlived its duration");
    }

    let lo = config.min_angle - config.dwell_half_window - 2 * config.sweep_step;
    let hi = config.max_angle
        + config.dwell_target_offset
        + config.dwell_half_window
        + 2 * config.sweep_step;
    for angle in &board.servo_writes {
        assert!((lo..=hi).contains(angle), "servo angle {} out of range", angle);
    }
});
