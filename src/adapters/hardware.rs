//! Hardware adapter: bridges real peripherals to domain port traits.
//!
//! Owns both analog channels and every actuator driver, exposing them
//! through [`SensorPort`], [`ActuatorPort`], [`TimePort`] and
//! `DelayNs`.  This is the only module in the system that touches
//! actual hardware.  It is generic over the pin, PWM, delay and clock
//! types so the device build plugs in the ESP-IDF views from
//! [`drivers::io`](crate::drivers::io) and host tests plug in recorders.

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::OutputPin;
use embedded_hal::pwm::SetDutyCycle;

use crate::app::ports::{ActuatorPort, LedColor, SensorPort, ServoId, TimePort};
use crate::drivers::buzzer::Buzzer;
use crate::drivers::io::AnalogInput;
use crate::drivers::leds::IndicatorLeds;
use crate::drivers::relay::PumpRelay;
use crate::drivers::servo::Servo;

/// Analog inputs, in the order the sensing tick reads them.
pub struct AnalogChannels<A: AnalogInput> {
    pub flame: A,
    pub smoke: A,
}

/// Every output the controller drives.
pub struct Outputs<O: OutputPin, S: SetDutyCycle> {
    pub relay: PumpRelay<O>,
    pub leds: IndicatorLeds<O>,
    pub buzzer: Buzzer<O>,
    pub primary_servo: Servo<S>,
    pub secondary_servo: Servo<S>,
}

/// Concrete adapter that combines all hardware behind port traits.
pub struct HardwareAdapter<A, O, S, D, C>
where
    A: AnalogInput,
    O: OutputPin,
    S: SetDutyCycle,
    D: DelayNs,
    C: TimePort,
{
    analog: AnalogChannels<A>,
    outputs: Outputs<O, S>,
    delay: D,
    clock: C,
}

impl<A, O, S, D, C> HardwareAdapter<A, O, S, D, C>
where
    A: AnalogInput,
    O: OutputPin,
    S: SetDutyCycle,
    D: DelayNs,
    C: TimePort,
{
    pub fn new(analog: AnalogChannels<A>, outputs: Outputs<O, S>, delay: D, clock: C) -> Self {
        Self {
            analog,
            outputs,
            delay,
            clock,
        }
    }

    pub fn outputs(&self) -> &Outputs<O, S> {
        &self.outputs
    }
}

// ── SensorPort implementation ─────────────────────────────────

impl<A, O, S, D, C> SensorPort for HardwareAdapter<A, O, S, D, C>
where
    A: AnalogInput,
    O: OutputPin,
    S: SetDutyCycle,
    D: DelayNs,
    C: TimePort,
{
    fn read_flame_raw(&mut self) -> u16 {
        self.analog.flame.read_raw()
    }

    fn read_smoke_raw(&mut self) -> u16 {
        self.analog.smoke.read_raw()
    }
}

// ── ActuatorPort implementation ───────────────────────────────

impl<A, O, S, D, C> ActuatorPort for HardwareAdapter<A, O, S, D, C>
where
    A: AnalogInput,
    O: OutputPin,
    S: SetDutyCycle,
    D: DelayNs,
    C: TimePort,
{
    fn set_led(&mut self, led: LedColor, on: bool) {
        self.outputs.leds.set(led, on);
    }

    fn set_pump(&mut self, on: bool) {
        self.outputs.relay.set(on);
    }

    fn set_buzzer(&mut self, on: bool) {
        self.outputs.buzzer.set(on);
    }

    fn write_servo(&mut self, servo: ServoId, angle: i32) {
        match servo {
            ServoId::Primary => self.outputs.primary_servo.write_angle(angle),
            ServoId::Secondary => self.outputs.secondary_servo.write_angle(angle),
        }
    }

    fn all_off(&mut self) {
        self.outputs.relay.stop();
        self.outputs.leds.off();
        self.outputs.buzzer.set(false);
    }
}

// ── Time and delay ────────────────────────────────────────────

impl<A, O, S, D, C> TimePort for HardwareAdapter<A, O, S, D, C>
where
    A: AnalogInput,
    O: OutputPin,
    S: SetDutyCycle,
    D: DelayNs,
    C: TimePort,
{
    fn now_ms(&self) -> u32 {
        self.clock.now_ms()
    }
}

impl<A, O, S, D, C> DelayNs for HardwareAdapter<A, O, S, D, C>
where
    A: AnalogInput,
    O: OutputPin,
    S: SetDutyCycle,
    D: DelayNs,
    C: TimePort,
{
    fn delay_ns(&mut self, ns: u32) {
        self.delay.delay_ns(ns);
    }

    fn delay_us(&mut self, us: u32) {
        self.delay.delay_us(us);
    }

    fn delay_ms(&mut self, ms: u32) {
        self.delay.delay_ms(ms);
    }
}
