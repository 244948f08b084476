//! Actuator drivers, hardware initialisation, and peripheral helpers.

pub mod buzzer;
pub mod hw_init;
pub mod io;
pub mod leds;
pub mod relay;
pub mod servo;
pub mod watchdog;
