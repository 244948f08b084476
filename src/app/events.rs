//! Outbound application events.
//!
//! The [`Controller`](super::service::Controller) emits these through the
//! [`EventSink`](super::ports::EventSink) port.  The serial log adapter
//! renders them; the status lines keep the exact wording operators grep
//! for, including the historical "Dectected" spelling.

use core::fmt;

use serde::Serialize;

use super::hazard::HazardClass;
use crate::sensors::SensorReading;

/// Structured events emitted by the application core.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub enum AppEvent {
    /// Boot sequence started.
    Booting,

    /// Boot sequence finished; the control loop is about to run.
    Ready,

    /// Periodic status report (debug cadence).
    Status(StatusReport),

    /// The hazard classification differs from the previous sensing tick.
    HazardChanged {
        from: Option<HazardClass>,
        to: HazardClass,
    },

    /// Flame confirmed; the dwell lockout has begun.
    DwellStarted { target_angle: i32, flame: SensorReading },

    /// The dwell lockout has elapsed.
    DwellFinished { target_angle: i32 },
}

/// Readings of one sensing tick, as reported on the debug cadence.
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct StatusReport {
    pub uptime_ms: u32,
    pub flame: SensorReading,
    pub smoke: SensorReading,
    pub hazard: HazardClass,
}

impl StatusReport {
    pub fn flame_status(&self) -> FlameStatus {
        FlameStatus(self.flame)
    }

    pub fn smoke_status(&self) -> SmokeStatus {
        SmokeStatus(self.smoke)
    }
}

/// `Flame Value: <n> Status: ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FlameStatus(pub SensorReading);

impl fmt::Display for FlameStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.0.detected {
            "Flame Detected!!!"
        } else {
            "No Flame Detected"
        };
        write!(f, "Flame Value: {} Status: {}", self.0.raw_level, status)
    }
}

/// `Smoke Value: <n> Status: ...`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SmokeStatus(pub SensorReading);

impl fmt::Display for SmokeStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let status = if self.0.detected {
            "Smoke Dectected!!!"
        } else {
            "No Smoke Detected"
        };
        write!(f, "Smoke Value: {} Status: {}", self.0.raw_level, status)
    }
}
