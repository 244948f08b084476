//! MQ-2 gas/smoke sensor threshold.
//!
//! Single strict threshold, no hysteresis: `> 280` reports smoke,
//! `== 280` does not.

use crate::app::ports::SensorPort;
use crate::config::SystemConfig;

#[derive(Debug, Clone, Copy)]
pub struct SmokeDetector {
    threshold: u16,
}

impl SmokeDetector {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            threshold: config.smoke_threshold,
        }
    }

    pub fn read_level(&self, hw: &mut impl SensorPort) -> u16 {
        hw.read_smoke_raw()
    }

    pub fn is_present(&self, level: u16) -> bool {
        level > self.threshold
    }
}
