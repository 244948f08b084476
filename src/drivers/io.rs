//! `embedded-hal` views over the raw peripheral helpers in [`hw_init`].
//!
//! The drivers are generic over `OutputPin` / `SetDutyCycle`; these
//! types are what the device build plugs in.  The ADC has no
//! `embedded-hal` 1.0 trait, so [`AnalogInput`] fills that seam.

use core::convert::Infallible;

use embedded_hal::digital::{ErrorType as DigitalErrorType, OutputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};

use crate::drivers::hw_init;

/// One analog channel, scaled to 10 bits.
pub trait AnalogInput {
    fn read_raw(&mut self) -> u16;
}

// ── ADC ───────────────────────────────────────────────────────

/// ADC1 oneshot channel.  The ESP32-S3 converts at 12 bits; readings are
/// shifted down to the 10-bit scale the detection thresholds use.
#[derive(Debug, Clone, Copy)]
pub struct AdcInput {
    channel: u32,
}

impl AdcInput {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }
}

impl AnalogInput for AdcInput {
    fn read_raw(&mut self) -> u16 {
        hw_init::adc1_read(self.channel) >> 2
    }
}

// ── GPIO ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct GpioOutput {
    gpio: i32,
}

impl GpioOutput {
    pub fn new(gpio: i32) -> Self {
        Self { gpio }
    }
}

impl DigitalErrorType for GpioOutput {
    type Error = Infallible;
}

impl OutputPin for GpioOutput {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, false);
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        hw_init::gpio_write(self.gpio, true);
        Ok(())
    }
}

// ── LEDC ──────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy)]
pub struct LedcPwm {
    channel: u32,
}

impl LedcPwm {
    pub fn new(channel: u32) -> Self {
        Self { channel }
    }
}

impl PwmErrorType for LedcPwm {
    type Error = Infallible;
}

impl SetDutyCycle for LedcPwm {
    fn max_duty_cycle(&self) -> u16 {
        hw_init::SERVO_MAX_DUTY
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        hw_init::ledc_set(self.channel, duty as u32);
        Ok(())
    }
}
