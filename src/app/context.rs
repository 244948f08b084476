//! Controller context: every piece of mutable state the control loop owns.
//!
//! Gate references, sweep positions, buzzer toggle state and the current
//! mode all live here as plain fields, created once at startup and mutated
//! only by [`Controller`](super::service::Controller).  Tests inspect them
//! directly.

use crate::config::SystemConfig;
use crate::control::alarm::BuzzerPacer;
use crate::control::sweep::ServoSweep;
use crate::scheduler::IntervalGate;
use crate::sensors::SensorSnapshot;

use super::hazard::HazardClass;

/// Top-level control mode.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Sense every tick and respond.
    Monitoring,
    /// Flame lockout: sensing suspended, suppression continues until the
    /// dwell elapses.  `smoke_pending` carries the smoke verdict from the
    /// tick that entered the dwell; its response runs when the dwell ends.
    Dwelling {
        target_angle: i32,
        smoke_pending: bool,
    },
}

pub struct ControllerContext {
    pub mode: Mode,

    // -- Gates --
    /// Paces the idle sweep; its reference also times the flame dwell.
    pub primary_gate: IntervalGate<u32>,
    /// Paces the secondary sweep (defensive and dwell cadences).
    pub secondary_gate: IntervalGate<u32>,
    /// Paces the status report.
    pub debug_gate: IntervalGate<u32>,

    // -- Servos --
    pub primary: ServoSweep,
    pub secondary: ServoSweep,

    // -- Buzzer --
    pub buzzer: BuzzerPacer,

    // -- Last sensing tick --
    pub snapshot: SensorSnapshot,
    pub hazard: Option<HazardClass>,
}

impl ControllerContext {
    pub fn new(config: &SystemConfig) -> Self {
        Self {
            mode: Mode::Monitoring,
            primary_gate: IntervalGate::new(config.idle_sweep_interval_ms),
            secondary_gate: IntervalGate::new(config.defensive_sweep_interval_ms),
            debug_gate: IntervalGate::new(config.debug_interval_ms),
            primary: ServoSweep::new(config.initial_angle),
            secondary: ServoSweep::new(config.initial_angle),
            buzzer: BuzzerPacer::new(config),
            snapshot: SensorSnapshot::default(),
            hazard: None,
        }
    }

    pub fn is_dwelling(&self) -> bool {
        matches!(self.mode, Mode::Dwelling { .. })
    }
}
