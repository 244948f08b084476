//! Port traits: the hexagonal boundary between domain logic and the outside world.
//!
//! ```text
//!   Adapter ──▶ Port trait ──▶ Controller (domain)
//! ```
//!
//! Driven adapters (sensors, actuators, clock, event sinks) implement these
//! traits.  The [`Controller`](super::service::Controller) consumes them via
//! generics, so the domain core never touches hardware directly.
//!
//! ## Failure posture
//!
//! Sensing and actuation ports are infallible by signature.  A faulty
//! sensor shows up as an implausible raw level that the thresholds
//! classify; a failed pin write is logged by the adapter and dropped.
//! Nothing propagates out of the control loop.

use embedded_hal::delay::DelayNs;
use serde::Serialize;

// ───────────────────────────────────────────────────────────────
// Output vocabulary
// ───────────────────────────────────────────────────────────────

/// Indicator LEDs on the front panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum LedColor {
    Blue,
    Red,
    Orange,
}

impl LedColor {
    pub const ALL: [LedColor; 3] = [LedColor::Blue, LedColor::Red, LedColor::Orange];
}

/// The two pan servos.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum ServoId {
    /// Scans the room while no hazard is present.
    Primary,
    /// Aims the nozzle while suppressing.
    Secondary,
}

// ───────────────────────────────────────────────────────────────
// Sensor port (driven adapter: hardware → domain)
// ───────────────────────────────────────────────────────────────

/// Read-side port: one raw analog read per call, no filtering.
pub trait SensorPort {
    /// Raw flame-sensor level (10-bit scale).
    fn read_flame_raw(&mut self) -> u16;

    /// Raw gas/smoke-sensor level (10-bit scale).
    fn read_smoke_raw(&mut self) -> u16;
}

// ───────────────────────────────────────────────────────────────
// Actuator port (driven adapter: domain → hardware)
// ───────────────────────────────────────────────────────────────

/// Write-side port: the domain calls this to command actuators.
pub trait ActuatorPort {
    /// Switch one indicator LED.
    fn set_led(&mut self, led: LedColor, on: bool);

    /// Start (`true`) or stop the water pump.  The relay polarity is the
    /// adapter's concern.
    fn set_pump(&mut self, on: bool);

    /// Drive the buzzer output high or low.
    fn set_buzzer(&mut self, on: bool);

    /// Command a servo angle in degrees.  Every call moves the servo.
    fn write_servo(&mut self, servo: ServoId, angle: i32);

    /// Pump off, all LEDs off, buzzer off.
    fn all_off(&mut self);
}

// ───────────────────────────────────────────────────────────────
// Time port
// ───────────────────────────────────────────────────────────────

/// Monotonic millisecond clock.  Wraps at `u32::MAX`.
pub trait TimePort {
    fn now_ms(&self) -> u32;
}

// ───────────────────────────────────────────────────────────────
// Board bundle
// ───────────────────────────────────────────────────────────────

/// Everything the controller needs from the hardware side, including the
/// blocking micro-pauses (flicker sampling, ADC settle, boot sequence).
pub trait Board: SensorPort + ActuatorPort + TimePort + DelayNs {}

impl<T: SensorPort + ActuatorPort + TimePort + DelayNs> Board for T {}

// ───────────────────────────────────────────────────────────────
// Event sink port (driven adapter: domain → logging)
// ───────────────────────────────────────────────────────────────

/// The domain emits structured [`AppEvent`](super::events::AppEvent)s
/// through this port.  Adapters decide where they go (serial log today).
pub trait EventSink {
    fn emit(&mut self, event: &super::events::AppEvent);
}

// ───────────────────────────────────────────────────────────────
// Error types
// ───────────────────────────────────────────────────────────────

/// Errors from [`SystemConfig::validate`](crate::config::SystemConfig::validate).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigError {
    /// A config field failed range validation.
    /// The `&'static str` describes which field and why.
    ValidationFailed(&'static str),
}

impl core::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Self::ValidationFailed(msg) => write!(f, "validation failed: {}", msg),
        }
    }
}
