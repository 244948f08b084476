//! System configuration parameters
//!
//! Every fixed constant of the FireWatch controller lives here: sweep
//! geometry, detection thresholds, flicker-analysis parameters and the
//! cadence of each paced behaviour.  The values are compiled in; there is
//! no runtime reconfiguration and nothing is persisted.

use serde::{Deserialize, Serialize};

use crate::app::ports::ConfigError;
use crate::sensors::flame::MAX_FLICKER_SAMPLES;

/// Core system configuration
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SystemConfig {
    // --- Servo sweep ---
    /// Lower bound of the nominal sweep (degrees)
    pub min_angle: i32,
    /// Upper bound of the nominal sweep (degrees)
    pub max_angle: i32,
    /// Angle change per sweep step (degrees)
    pub sweep_step: i32,
    /// Secondary servo rest angle while no hazard is present (degrees)
    pub neutral_angle: i32,
    /// Starting angle of both servos (degrees)
    pub initial_angle: i32,

    // --- Flame ---
    /// Raw level at or above which the flame channel is treated as ambient light
    pub flame_threshold: u16,
    /// Number of samples taken by the flicker test
    pub flicker_samples: usize,
    /// Pause between flicker samples (milliseconds)
    pub flicker_sample_interval_ms: u32,
    /// Standard deviation above which the samples count as flicker
    pub flicker_sd_threshold: f32,

    // --- Smoke ---
    /// Raw level strictly above which smoke is reported
    pub smoke_threshold: u16,
    /// Settle delay between the flame and smoke ADC reads (milliseconds)
    pub adc_settle_ms: u32,

    // --- Cadences (milliseconds) ---
    /// Status report period
    pub debug_interval_ms: u32,
    /// Primary servo idle sweep period
    pub idle_sweep_interval_ms: u32,
    /// Secondary servo sweep period while smoke is present
    pub defensive_sweep_interval_ms: u32,
    /// Secondary servo sweep period during the flame dwell
    pub dwell_sweep_interval_ms: u32,
    /// Buzzer toggle period for smoke alerts
    pub smoke_tone_interval_ms: u32,
    /// Buzzer toggle period for fire alerts
    pub fire_tone_interval_ms: u32,

    // --- Flame dwell ---
    /// Length of the flame lockout (milliseconds)
    pub dwell_duration_ms: u32,
    /// Offset from the primary servo angle to the dwell target (degrees)
    pub dwell_target_offset: i32,
    /// Half-width of the dwell sweep window around the target (degrees)
    pub dwell_half_window: i32,

    // --- Boot ---
    pub boot_settle_ms: u32,
    pub boot_blink_count: u8,
    pub boot_blink_interval_ms: u32,
    pub boot_ready_delay_ms: u32,

    // --- Supervision ---
    /// Task watchdog timeout (milliseconds)
    pub watchdog_timeout_ms: u32,
}

impl Default for SystemConfig {
    fn default() -> Self {
        Self {
            // Servo sweep
            min_angle: 40,
            max_angle: 150,
            sweep_step: 5,
            neutral_angle: 100,
            initial_angle: 90,

            // Flame
            flame_threshold: 1000,
            flicker_samples: 15,
            flicker_sample_interval_ms: 3,
            flicker_sd_threshold: 10.0,

            // Smoke
            smoke_threshold: 280,
            adc_settle_ms: 50,

            // Cadences
            debug_interval_ms: 250,
            idle_sweep_interval_ms: 30,
            defensive_sweep_interval_ms: 50,
            dwell_sweep_interval_ms: 30,
            smoke_tone_interval_ms: 250,
            fire_tone_interval_ms: 100,

            // Flame dwell
            dwell_duration_ms: 5000,
            dwell_target_offset: 10,
            dwell_half_window: 20,

            // Boot
            boot_settle_ms: 250,
            boot_blink_count: 2,
            boot_blink_interval_ms: 250,
            boot_ready_delay_ms: 500,

            // Supervision
            watchdog_timeout_ms: 10_000,
        }
    }
}

impl SystemConfig {
    /// Blocking time spent inside one sensing tick: the flicker burst plus
    /// the ADC settle delay.
    pub fn sensing_pause_ms(&self) -> u32 {
        (self.flicker_samples as u32)
            .saturating_mul(self.flicker_sample_interval_ms)
            .saturating_add(self.adc_settle_ms)
    }

    /// Reject parameter sets the controller cannot run with.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.min_angle >= self.max_angle {
            return Err(ConfigError::ValidationFailed("min_angle must be below max_angle"));
        }
        if !(0..=180).contains(&self.min_angle) || !(0..=180).contains(&self.max_angle) {
            return Err(ConfigError::ValidationFailed("sweep bounds outside 0-180"));
        }
        if !(1..=self.max_angle - self.min_angle).contains(&self.sweep_step) {
            return Err(ConfigError::ValidationFailed("sweep_step must be within 1..=sweep span"));
        }
        if !(0..=180).contains(&self.neutral_angle) || !(0..=180).contains(&self.initial_angle) {
            return Err(ConfigError::ValidationFailed("neutral/initial angle outside 0-180"));
        }
        if !(-180..=180).contains(&self.dwell_target_offset) {
            return Err(ConfigError::ValidationFailed("dwell_target_offset outside -180..=180"));
        }
        if self.flicker_samples == 0 {
            return Err(ConfigError::ValidationFailed("flicker_samples must be non-zero"));
        }
        if self.flicker_samples > MAX_FLICKER_SAMPLES {
            return Err(ConfigError::ValidationFailed("flicker_samples exceeds buffer capacity"));
        }
        if !self.flicker_sd_threshold.is_finite() || self.flicker_sd_threshold < 0.0 {
            return Err(ConfigError::ValidationFailed("flicker_sd_threshold must be finite and >= 0"));
        }
        let cadences = [
            self.debug_interval_ms,
            self.idle_sweep_interval_ms,
            self.defensive_sweep_interval_ms,
            self.dwell_sweep_interval_ms,
            self.smoke_tone_interval_ms,
            self.fire_tone_interval_ms,
            self.dwell_duration_ms,
            self.watchdog_timeout_ms,
        ];
        if cadences.contains(&0) {
            return Err(ConfigError::ValidationFailed("cadences must be non-zero"));
        }
        if self.watchdog_timeout_ms <= self.sensing_pause_ms() {
            return Err(ConfigError::ValidationFailed("watchdog_timeout_ms shorter than one sensing tick"));
        }
        if !(1..=180).contains(&self.dwell_half_window) {
            return Err(ConfigError::ValidationFailed("dwell_half_window must be within 1..=180"));
        }
        Ok(())
    }
}
