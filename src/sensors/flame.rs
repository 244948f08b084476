//! Flame detection with flicker analysis.
//!
//! The IR flame sensor reads *lower* as IR intensity rises.  A level at
//! or above the threshold means no flame signature at all.  Below it the
//! reading is ambiguous: a lamp or sunlight can pull the level down as far
//! as a flame does.  Real flame flickers, so the detector takes a short
//! burst of samples and looks at their spread.
//!
//! ```text
//!   level >= 1000 ──▶ no flame (no sampling)
//!   level <  1000 ──▶ 15 samples, 3 ms apart ──▶ σ > 10.0 ? flame : no flame
//! ```
//!
//! The burst blocks for roughly `samples × interval` (~45 ms), which is
//! small against the control cadence.

use embedded_hal::delay::DelayNs;
use heapless::Vec;

use crate::app::ports::SensorPort;
use crate::config::SystemConfig;

/// Capacity of the flicker sample buffer.
pub const MAX_FLICKER_SAMPLES: usize = 64;

/// Population statistics over one flicker burst.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FlickerStats {
    pub mean: f32,
    pub variance: f32,
    pub std_dev: f32,
}

impl FlickerStats {
    /// Mean, population variance (`Σ(x-μ)²/N`) and standard deviation.
    /// `None` for an empty burst.
    pub fn from_samples(samples: &[u16]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let n = samples.len() as f32;
        let mean = samples.iter().map(|&s| s as f32).sum::<f32>() / n;
        let variance = samples
            .iter()
            .map(|&s| {
                let diff = s as f32 - mean;
                diff * diff
            })
            .sum::<f32>()
            / n;
        Some(Self {
            mean,
            variance,
            std_dev: variance.sqrt(),
        })
    }
}

#[derive(Debug, Clone, Copy)]
pub struct FlameDetector {
    threshold: u16,
    samples: usize,
    sample_interval_ms: u32,
    sd_threshold: f32,
}

impl FlameDetector {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            threshold: config.flame_threshold,
            samples: config.flicker_samples.min(MAX_FLICKER_SAMPLES),
            sample_interval_ms: config.flicker_sample_interval_ms,
            sd_threshold: config.flicker_sd_threshold,
        }
    }

    /// One raw read of the flame channel.
    pub fn read_level(&self, hw: &mut impl SensorPort) -> u16 {
        hw.read_flame_raw()
    }

    /// Flame verdict for a level already read this tick.
    pub fn is_present(&self, level: u16, hw: &mut (impl SensorPort + DelayNs)) -> bool {
        if level >= self.threshold {
            return false;
        }
        self.flicker_analysis(hw)
    }

    /// Sample the flame channel in a burst and report whether it flickers.
    ///
    /// A constant burst (saturated or disconnected sensor) has zero spread
    /// and reports no flame.
    pub fn flicker_analysis(&self, hw: &mut (impl SensorPort + DelayNs)) -> bool {
        let burst = self.collect(hw);
        match FlickerStats::from_samples(&burst) {
            Some(stats) => {
                log::trace!(
                    "flicker: mean={:.1} var={:.1} sd={:.2}",
                    stats.mean,
                    stats.variance,
                    stats.std_dev
                );
                stats.std_dev > self.sd_threshold
            }
            None => false,
        }
    }

    fn collect(&self, hw: &mut (impl SensorPort + DelayNs)) -> Vec<u16, MAX_FLICKER_SAMPLES> {
        let mut burst = Vec::new();
        for _ in 0..self.samples {
            if burst.push(hw.read_flame_raw()).is_err() {
                break;
            }
            hw.delay_ms(self.sample_interval_ms);
        }
        burst
    }
}
