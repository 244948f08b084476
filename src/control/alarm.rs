//! Buzzer tone pacing.
//!
//! Each alert kind owns a gate and a toggle flag.  Every time its gate
//! fires the flag flips and the new level goes to the buzzer, giving a
//! square wave whose period is twice the gate interval (smoke 500 ms,
//! fire 200 ms).  [`AlertKind::Off`] forces the buzzer low and leaves the
//! toggle state alone.

use serde::Serialize;

use crate::config::SystemConfig;
use crate::scheduler::IntervalGate;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum AlertKind {
    /// Slow pulse.
    Smoke,
    /// Fast pulse.
    Fire,
    /// Silence.
    Off,
}

/// One alert kind's pacing state.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ToneChannel {
    pub gate: IntervalGate<u32>,
    pub level: bool,
}

impl ToneChannel {
    pub fn new(interval_ms: u32) -> Self {
        Self {
            gate: IntervalGate::new(interval_ms),
            level: false,
        }
    }

    fn toggle(&mut self, now: u32) -> Option<bool> {
        if self.gate.fire(now) {
            self.level = !self.level;
            Some(self.level)
        } else {
            None
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BuzzerPacer {
    pub smoke: ToneChannel,
    pub fire: ToneChannel,
}

impl BuzzerPacer {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            smoke: ToneChannel::new(config.smoke_tone_interval_ms),
            fire: ToneChannel::new(config.fire_tone_interval_ms),
        }
    }

    /// Level to write to the buzzer this tick, if any.
    pub fn pulse(&mut self, kind: AlertKind, now: u32) -> Option<bool> {
        match kind {
            AlertKind::Smoke => self.smoke.toggle(now),
            AlertKind::Fire => self.fire.toggle(now),
            AlertKind::Off => Some(false),
        }
    }
}
