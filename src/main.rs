//! FireWatch Firmware: Main Entry Point
//!
//! Hexagonal architecture with a single cooperative control loop.
//!
//! ```text
//! ┌────────────────────────────────────────────────────────────────┐
//! │                      Adapters (outer ring)                     │
//! │                                                                │
//! │  HardwareAdapter            LogEventSink     Esp32Clock        │
//! │  (Sensor+Actuator+Delay)    (EventSink)      (TimePort)        │
//! │                                                                │
//! │  ──────────────── Port Trait Boundary ───────────────────      │
//! │                                                                │
//! │  ┌────────────────────────────────────────────────────────┐    │
//! │  │              Controller (pure logic)                   │    │
//! │  │  Sensing · Hazard policy · Sweep · Alarm · Gates       │    │
//! │  └────────────────────────────────────────────────────────┘    │
//! │                                                                │
//! │  Task watchdog (fed once per tick)                             │
//! └────────────────────────────────────────────────────────────────┘
//! ```
#![deny(unused_must_use)]

use anyhow::Result;
use log::info;

use firewatch::adapters::hardware::{AnalogChannels, HardwareAdapter, Outputs};
use firewatch::adapters::log_sink::LogEventSink;
use firewatch::adapters::time::{BoardDelay, Esp32Clock};
use firewatch::app::service::Controller;
use firewatch::config::SystemConfig;
use firewatch::drivers::buzzer::Buzzer;
use firewatch::drivers::hw_init;
use firewatch::drivers::io::{AdcInput, GpioOutput, LedcPwm};
use firewatch::drivers::leds::IndicatorLeds;
use firewatch::drivers::relay::PumpRelay;
use firewatch::drivers::servo::Servo;
use firewatch::drivers::watchdog::Watchdog;
use firewatch::pins;

fn main() -> Result<()> {
    // ── 1. ESP-IDF bootstrap ──────────────────────────────────
    esp_idf_svc::sys::link_patches();
    esp_idf_logger::init()?;

    info!("╔══════════════════════════════════════╗");
    info!("║  FireWatch v{}                       ║", env!("CARGO_PKG_VERSION"));
    info!("╚══════════════════════════════════════╝");

    // ── 2. Configuration ──────────────────────────────────────
    let config = SystemConfig::default();
    config.validate().map_err(firewatch::Error::from)?;
    info!(
        "Config: flame<{} smoke>{} dwell={}ms sweep {}..{} step {}",
        config.flame_threshold,
        config.smoke_threshold,
        config.dwell_duration_ms,
        config.min_angle,
        config.max_angle,
        config.sweep_step,
    );

    // ── 3. Peripherals ────────────────────────────────────────
    hw_init::init_peripherals().map_err(firewatch::Error::from)?;

    let analog = AnalogChannels {
        flame: AdcInput::new(hw_init::ADC1_CH_FLAME),
        smoke: AdcInput::new(hw_init::ADC1_CH_SMOKE),
    };
    let outputs = Outputs {
        relay: PumpRelay::new(GpioOutput::new(pins::PUMP_RELAY_GPIO)),
        leds: IndicatorLeds::new(
            GpioOutput::new(pins::LED_BLUE_GPIO),
            GpioOutput::new(pins::LED_RED_GPIO),
            GpioOutput::new(pins::LED_ORANGE_GPIO),
        ),
        buzzer: Buzzer::new(GpioOutput::new(pins::BUZZER_GPIO)),
        primary_servo: Servo::new(LedcPwm::new(hw_init::LEDC_CH_SERVO_PRIMARY)),
        secondary_servo: Servo::new(LedcPwm::new(hw_init::LEDC_CH_SERVO_SECONDARY)),
    };
    let mut board = HardwareAdapter::new(analog, outputs, BoardDelay::new(), Esp32Clock::new());
    let mut sink = LogEventSink::new();

    // ── 4. Boot sequence ──────────────────────────────────────
    let mut controller = Controller::new(config);
    controller.boot(&mut board, &mut sink);

    let watchdog = Watchdog::new(controller.config().watchdog_timeout_ms);

    // ── 5. Control loop ───────────────────────────────────────
    info!("System ready. Entering control loop.");
    loop {
        controller.tick(&mut board, &mut sink);
        watchdog.feed();
    }
}
