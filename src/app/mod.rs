//! Application core: pure domain logic, zero I/O.
//!
//! This module contains the hazard policy for the FireWatch controller:
//! sensing order, hazard classification, the flame dwell, and the pacing
//! of every actuator.  All interaction with hardware happens through
//! **port traits** defined in [`ports`], keeping this layer fully testable
//! without real peripherals.

pub mod context;
pub mod events;
pub mod hazard;
pub mod ports;
pub mod service;
