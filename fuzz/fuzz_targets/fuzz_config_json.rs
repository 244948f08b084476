//! Fuzz target: `SystemConfig` JSON decoding and validation
//!
//! Arbitrary bytes are parsed as a config document.  Whatever parses must
//! either validate or be rejected cleanly; a validated config must boot a
//! controller and survive a run of flame, smoke and clear ticks.
//!
//! cargo fuzz run fuzz_config_json

#![no_main]

use embedded_hal::delay::DelayNs;
use firewatch::app::events::AppEvent;
use firewatch::app::ports::{ActuatorPort, EventSink, LedColor, SensorPort, ServoId, TimePort};
use firewatch::app::service::Controller;
use firewatch::config::SystemConfig;
use libfuzzer_sys::fuzz_target;

/// Board with fixed sensor levels and a clock that only delays move.
struct NullBoard {
    now: u32,
    flame: [u16; 2],
    flame_pos: usize,
    smoke: u16,
}

impl SensorPort for NullBoard {
    fn read_flame_raw(&mut self) -> u16 {
        self.flame_pos += 1;
        self.flame[self.flame_pos % 2]
    }

    fn read_smoke_raw(&mut self) -> u16 {
        self.smoke
    }
}

impl ActuatorPort for NullBoard {
    fn set_led(&mut self, _led: LedColor, _on: bool) {}
    fn set_pump(&mut self, _on: bool) {}
    fn set_buzzer(&mut self, _on: bool) {}
    fn write_servo(&mut self, _servo: ServoId, _angle: i32) {}
    fn all_off(&mut self) {}
}

impl TimePort for NullBoard {
    fn now_ms(&self) -> u32 {
        self.now
    }
}

impl DelayNs for NullBoard {
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
    let Ok(config) = serde_json::from_slice::<SystemConfig>(data) else {
        return;
    };
    if config.validate().is_err() {
        return;
    }
    assert!(config.flicker_samples <= firewatch::sensors::flame::MAX_FLICKER_SAMPLES);

    let step_ms = config.dwell_duration_ms;
    let mut app = Controller::new(config);
    let mut board = NullBoard {
        now: 0,
        flame: [1023, 1023],
        flame_pos: 0,
        smoke: 0,
    };
    let mut sink = NullSink;

    app.boot(&mut board, &mut sink);

    let phases: [([u16; 2], u16); 4] = [
        ([1023, 1023], 0),
        ([0, 1023], 0),
        ([0, 1023], 1023),
        ([1023, 1023], 1023),
    ];
    for (flame, smoke) in phases {
        board.flame = flame;
        board.smoke = smoke;
        for _ in 0..4 {
            app.tick(&mut board, &mut sink);
            board.now = board.now.wrapping_add(step_ms);
        }
    }
});
