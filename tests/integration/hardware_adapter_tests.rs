//! Pin-level tests for [`HardwareAdapter`]: relay polarity, LED and
//! buzzer lines, and servo duty cycles as seen by the peripherals.

use std::cell::Cell;
use std::convert::Infallible;
use std::rc::Rc;

use embedded_hal::delay::DelayNs;
use embedded_hal::digital::{ErrorType as DigitalErrorType, OutputPin};
use embedded_hal::pwm::{ErrorType as PwmErrorType, SetDutyCycle};

use firewatch::adapters::hardware::{AnalogChannels, HardwareAdapter, Outputs};
use firewatch::app::ports::{ActuatorPort, LedColor, SensorPort, ServoId, TimePort};
use firewatch::app::service::Controller;
use firewatch::config::SystemConfig;
use firewatch::drivers::buzzer::Buzzer;
use firewatch::drivers::io::AnalogInput;
use firewatch::drivers::leds::IndicatorLeds;
use firewatch::drivers::relay::PumpRelay;
use firewatch::drivers::servo::{Servo, angle_to_pulse_us, pulse_to_duty};

use crate::mock_hw::RecordingSink;

// ── Peripheral doubles ────────────────────────────────────────

/// Output line whose last level the test can read after the pin moves
/// into the adapter.
#[derive(Clone, Default)]
struct Line(Rc<Cell<Option<bool>>>);

impl Line {
    fn level(&self) -> Option<bool> {
        self.0.get()
    }
}

impl DigitalErrorType for Line {
    type Error = Infallible;
}

impl OutputPin for Line {
    fn set_low(&mut self) -> Result<(), Self::Error> {
        self.0.set(Some(false));
        Ok(())
    }

    fn set_high(&mut self) -> Result<(), Self::Error> {
        self.0.set(Some(true));
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Duty(Rc<Cell<u16>>);

impl PwmErrorType for Duty {
    type Error = Infallible;
}

impl SetDutyCycle for Duty {
    fn max_duty_cycle(&self) -> u16 {
        16_383
    }

    fn set_duty_cycle(&mut self, duty: u16) -> Result<(), Self::Error> {
        self.0.set(duty);
        Ok(())
    }
}

#[derive(Clone, Default)]
struct Level(Rc<Cell<u16>>);

impl AnalogInput for Level {
    fn read_raw(&mut self) -> u16 {
        self.0.get()
    }
}

#[derive(Clone, Default)]
struct Clock(Rc<Cell<u32>>);

impl TimePort for Clock {
    fn now_ms(&self) -> u32 {
        self.0.get()
    }
}

struct StepDelay(Clock);

impl DelayNs for StepDelay {
    fn delay_ns(&mut self, ns: u32) {
        let clock = &self.0.0;
        clock.set(clock.get().wrapping_add(ns / 1_000_000));
    }

    fn delay_ms(&mut self, ms: u32) {
        let clock = &self.0.0;
        clock.set(clock.get().wrapping_add(ms));
    }
}

struct Rig {
    relay: Line,
    blue: Line,
    red: Line,
    orange: Line,
    buzzer: Line,
    primary: Duty,
    secondary: Duty,
    flame: Level,
    smoke: Level,
    clock: Clock,
}

type Adapter = HardwareAdapter<Level, Line, Duty, StepDelay, Clock>;

fn rig() -> (Rig, Adapter) {
    let rig = Rig {
        relay: Line::default(),
        blue: Line::default(),
        red: Line::default(),
        orange: Line::default(),
        buzzer: Line::default(),
        primary: Duty::default(),
        secondary: Duty::default(),
        flame: Level::default(),
        smoke: Level::default(),
        clock: Clock::default(),
    };
    let adapter = HardwareAdapter::new(
        AnalogChannels {
            flame: rig.flame.clone(),
            smoke: rig.smoke.clone(),
        },
        Outputs {
            relay: PumpRelay::new(rig.relay.clone()),
            leds: IndicatorLeds::new(rig.blue.clone(), rig.red.clone(), rig.orange.clone()),
            buzzer: Buzzer::new(rig.buzzer.clone()),
            primary_servo: Servo::new(rig.primary.clone()),
            secondary_servo: Servo::new(rig.secondary.clone()),
        },
        StepDelay(rig.clock.clone()),
        rig.clock.clone(),
    );
    (rig, adapter)
}

// ── Tests ─────────────────────────────────────────────────────

#[test]
fn pump_relay_is_active_low() {
    let (rig, mut hw) = rig();

    hw.set_pump(true);
    assert_eq!(rig.relay.level(), Some(false));
    assert!(hw.outputs().relay.is_running());

    hw.set_pump(false);
    assert_eq!(rig.relay.level(), Some(true));
}

#[test]
fn leds_and_buzzer_are_active_high() {
    let (rig, mut hw) = rig();

    hw.set_led(LedColor::Red, true);
    hw.set_led(LedColor::Orange, true);
    hw.set_buzzer(true);
    assert_eq!(rig.red.level(), Some(true));
    assert_eq!(rig.orange.level(), Some(true));
    assert_eq!(rig.blue.level(), None, "untouched");
    assert_eq!(rig.buzzer.level(), Some(true));
    assert!(hw.outputs().leds.is_on(LedColor::Red));
    assert!(!hw.outputs().leds.is_on(LedColor::Blue));
    assert!(hw.outputs().buzzer.is_on());

    hw.all_off();
    assert_eq!(rig.relay.level(), Some(true));
    assert_eq!(rig.red.level(), Some(false));
    assert_eq!(rig.orange.level(), Some(false));
    assert_eq!(rig.blue.level(), Some(false));
    assert_eq!(rig.buzzer.level(), Some(false));
    assert!(!hw.outputs().buzzer.is_on());
    assert!(LedColor::ALL.iter().all(|&led| !hw.outputs().leds.is_on(led)));
}

#[test]
fn servo_writes_route_to_their_channel() {
    let (rig, mut hw) = rig();

    hw.write_servo(ServoId::Primary, 0);
    hw.write_servo(ServoId::Secondary, 180);

    assert_eq!(rig.primary.0.get(), pulse_to_duty(angle_to_pulse_us(0), 16_383));
    assert_eq!(rig.secondary.0.get(), pulse_to_duty(angle_to_pulse_us(180), 16_383));
    assert!(rig.secondary.0.get() > rig.primary.0.get());
    assert_eq!(hw.outputs().primary_servo.angle(), Some(0));
}

#[test]
fn sensors_clock_and_delay_pass_through() {
    let (rig, mut hw) = rig();
    rig.flame.0.set(512);
    rig.smoke.0.set(300);

    assert_eq!(hw.read_flame_raw(), 512);
    assert_eq!(hw.read_smoke_raw(), 300);

    hw.delay_ms(40);
    assert_eq!(hw.now_ms(), 40);
}

#[test]
fn controller_leaves_relay_high_when_clear() {
    let (rig, mut hw) = rig();
    rig.flame.0.set(1023);
    rig.smoke.0.set(90);
    let mut sink = RecordingSink::new();
    let mut app = Controller::new(SystemConfig::default());

    app.boot(&mut hw, &mut sink);
    assert_eq!(rig.relay.level(), Some(true), "boot parks the pump off");

    app.tick(&mut hw, &mut sink);
    assert_eq!(rig.relay.level(), Some(true));
    assert_eq!(rig.buzzer.level(), Some(false));
    assert_eq!(hw.outputs().secondary_servo.angle(), Some(100));
    assert_eq!(hw.outputs().primary_servo.angle(), Some(95));
}

#[test]
fn controller_opens_relay_on_smoke() {
    let (rig, mut hw) = rig();
    rig.flame.0.set(1023);
    rig.smoke.0.set(600);
    rig.clock.0.set(1000);
    let mut sink = RecordingSink::new();
    let mut app = Controller::new(SystemConfig::default());

    app.tick(&mut hw, &mut sink);

    assert_eq!(rig.relay.level(), Some(false));
    assert_eq!(rig.orange.level(), Some(true));
}
