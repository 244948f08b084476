//! Hobby servo driver on a 50 Hz PWM channel.
//!
//! Angles are clamped to the mechanical 0–180° range, mapped linearly to
//! a 544–2400 µs pulse and written as a duty cycle of the 20 ms frame.
//! The sweep logic may hand this driver angles slightly outside its
//! nominal window; only the physical range is enforced here.

use embedded_hal::pwm::SetDutyCycle;
use log::warn;

/// Pulse width at 0°.
pub const MIN_PULSE_US: u32 = 544;
/// Pulse width at 180°.
pub const MAX_PULSE_US: u32 = 2400;
/// 50 Hz frame.
pub const PERIOD_US: u32 = 20_000;

/// Pulse width for an angle, clamped to 0–180°.
pub fn angle_to_pulse_us(angle: i32) -> u32 {
    let angle = angle.clamp(0, 180) as u32;
    MIN_PULSE_US + (MAX_PULSE_US - MIN_PULSE_US) * angle / 180
}

/// Duty value for a pulse width, given the channel's full-scale duty.
pub fn pulse_to_duty(pulse_us: u32, max_duty: u16) -> u16 {
    (pulse_us.min(PERIOD_US) * max_duty as u32 / PERIOD_US) as u16
}

pub struct Servo<P: SetDutyCycle> {
    pwm: P,
    angle: Option<i32>,
}

impl<P: SetDutyCycle> Servo<P> {
    pub fn new(pwm: P) -> Self {
        Self { pwm, angle: None }
    }

    pub fn write_angle(&mut self, angle: i32) {
        let duty = pulse_to_duty(angle_to_pulse_us(angle), self.pwm.max_duty_cycle());
        if let Err(e) = self.pwm.set_duty_cycle(duty) {
            warn!("servo: duty write failed ({:?})", e);
        }
        self.angle = Some(angle);
    }

    /// Last commanded angle (unclamped), `None` before the first write.
    pub fn angle(&self) -> Option<i32> {
        self.angle
    }
}
