//! Piezo buzzer output.  The tone itself comes from toggling this pin on
//! a paced schedule (see `control::alarm`).

use embedded_hal::digital::OutputPin;
use log::warn;

pub struct Buzzer<P: OutputPin> {
    pin: P,
    on: bool,
}

impl<P: OutputPin> Buzzer<P> {
    pub fn new(pin: P) -> Self {
        Self { pin, on: false }
    }

    pub fn set(&mut self, on: bool) {
        let result = if on {
            self.pin.set_high()
        } else {
            self.pin.set_low()
        };
        if let Err(e) = result {
            warn!("buzzer: write failed ({:?})", e);
        }
        self.on = on;
    }

    pub fn is_on(&self) -> bool {
        self.on
    }
}
