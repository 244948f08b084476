//! Sensor subsystem: flame and smoke detectors and the sampling [`SensorHub`].
//!
//! The hub runs once per control tick and returns both readings.  Order
//! is fixed: the flame channel (including its flicker burst) is sampled
//! first, then the ADC is given a settle delay before the smoke channel
//! is read, so the multiplexer does not bleed one channel into the other.

pub mod flame;
pub mod smoke;

use embedded_hal::delay::DelayNs;
use serde::Serialize;

use crate::app::ports::SensorPort;
use crate::config::SystemConfig;
use flame::FlameDetector;
use smoke::SmokeDetector;

/// One channel's raw level and its verdict for this tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SensorReading {
    pub raw_level: u16,
    pub detected: bool,
}

/// Both channels, sampled in the same tick.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct SensorSnapshot {
    pub flame: SensorReading,
    pub smoke: SensorReading,
}

/// Owns both detectors and the inter-channel settle delay.
pub struct SensorHub {
    pub flame: FlameDetector,
    pub smoke: SmokeDetector,
    settle_ms: u32,
}

impl SensorHub {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            flame: FlameDetector::new(config),
            smoke: SmokeDetector::new(config),
            settle_ms: config.adc_settle_ms,
        }
    }

    /// Sample flame, settle, then sample smoke.
    pub fn sample(&self, hw: &mut (impl SensorPort + DelayNs)) -> SensorSnapshot {
        let flame_level = self.flame.read_level(hw);
        let flame_detected = self.flame.is_present(flame_level, hw);

        hw.delay_ms(self.settle_ms);

        let smoke_level = self.smoke.read_level(hw);
        let smoke_detected = self.smoke.is_present(smoke_level);

        SensorSnapshot {
            flame: SensorReading {
                raw_level: flame_level,
                detected: flame_detected,
            },
            smoke: SensorReading {
                raw_level: smoke_level,
                detected: smoke_detected,
            },
        }
    }
}
