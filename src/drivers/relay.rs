//! Water-pump relay driver.
//!
//! The relay module is active-low: driving the input LOW energises the
//! coil and starts the pump, HIGH releases it.  Boot code must stop the
//! pump explicitly before anything else runs.
//!
//! Write failures are logged and the commanded state is still recorded;
//! the control loop re-asserts the relay on every tick that cares.

use embedded_hal::digital::OutputPin;
use log::warn;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PumpState {
    Stopped,
    Running,
}

pub struct PumpRelay<P: OutputPin> {
    pin: P,
    state: PumpState,
}

impl<P: OutputPin> PumpRelay<P> {
    /// Wrap the relay pin.  Does not drive it.
    pub fn new(pin: P) -> Self {
        Self {
            pin,
            state: PumpState::Stopped,
        }
    }

    pub fn start(&mut self) {
        if let Err(e) = self.pin.set_low() {
            warn!("pump relay: set_low failed ({:?})", e);
        }
        self.state = PumpState::Running;
    }

    pub fn stop(&mut self) {
        if let Err(e) = self.pin.set_high() {
            warn!("pump relay: set_high failed ({:?})", e);
        }
        self.state = PumpState::Stopped;
    }

    pub fn set(&mut self, on: bool) {
        if on {
            self.start();
        } else {
            self.stop();
        }
    }

    pub fn state(&self) -> PumpState {
        self.state
    }

    pub fn is_running(&self) -> bool {
        self.state == PumpState::Running
    }
}
