//! Integration tests for the Controller → sensors → actuators pipeline.
//!
//! These run on the host (x86_64) and drive whole control ticks against
//! [`MockBoard`], checking the actuator history and emitted events.

use crate::mock_hw::{ActuatorCall, MockBoard, RecordingSink};

use firewatch::app::context::Mode;
use firewatch::app::events::AppEvent;
use firewatch::app::hazard::HazardClass;
use firewatch::app::ports::{LedColor, ServoId};
use firewatch::app::service::Controller;
use firewatch::config::SystemConfig;
use firewatch::sensors::SensorReading;

fn make_controller(now: u32) -> (Controller, MockBoard, RecordingSink) {
    (
        Controller::new(SystemConfig::default()),
        MockBoard::new(now),
        RecordingSink::new(),
    )
}

fn is_status(e: &AppEvent) -> bool {
    matches!(e, AppEvent::Status(_))
}

fn is_dwell_finished(e: &AppEvent) -> bool {
    matches!(e, AppEvent::DwellFinished { .. })
}

// ── Boot ──────────────────────────────────────────────────────

#[test]
fn boot_parks_outputs_blinks_and_reports_ready() {
    let (mut app, mut hw, mut sink) = make_controller(0);

    app.boot(&mut hw, &mut sink);

    assert_eq!(hw.calls.first(), Some(&ActuatorCall::SetPump(false)));
    assert_eq!(hw.servo(ServoId::Primary), Some(90));
    assert_eq!(hw.servo(ServoId::Secondary), Some(90));

    let lit = hw
        .calls
        .iter()
        .filter(|c| matches!(c, ActuatorCall::SetLed { on: true, .. }))
        .count();
    assert_eq!(lit, 6, "two blinks of three LEDs");
    for led in LedColor::ALL {
        assert!(!hw.led(led), "{:?} must end dark", led);
    }

    // settle 250 + 2 × (250 + 250) + ready 500
    assert_eq!(hw.now, 1750);
    assert_eq!(hw.flame_reads, 0);
    assert_eq!(sink.events.first(), Some(&AppEvent::Booting));
    assert_eq!(sink.events.last(), Some(&AppEvent::Ready));
}

// ── Clear ─────────────────────────────────────────────────────

#[test]
fn clear_tick_sweeps_scanner_and_parks_nozzle() {
    let (mut app, mut hw, mut sink) = make_controller(0);
    app.boot(&mut hw, &mut sink);
    hw.clear_calls();

    app.tick(&mut hw, &mut sink);

    assert_eq!(app.last_hazard(), Some(HazardClass::Clear));
    assert_eq!(hw.servo_writes(ServoId::Primary), vec![95]);
    assert_eq!(hw.servo(ServoId::Secondary), Some(100));
    assert!(!hw.pump_on());
    assert!(!hw.buzzer_on());
    assert!(!hw.led(LedColor::Red));
    assert!(!hw.led(LedColor::Orange));

    // One flame read (no flicker burst above the threshold), one smoke read,
    // and only the settle delay in between.
    assert_eq!(hw.flame_reads, 1);
    assert_eq!(hw.smoke_reads, 1);
    assert_eq!(hw.now, 1800);

    assert!(sink.events.contains(&AppEvent::HazardChanged {
        from: None,
        to: HazardClass::Clear,
    }));
    assert_eq!(sink.count(is_status), 1);
}

#[test]
fn idle_sweep_reverses_at_max_angle() {
    let (mut app, mut hw, mut sink) = make_controller(1000);

    for _ in 0..13 {
        app.tick(&mut hw, &mut sink);
    }

    let writes = hw.servo_writes(ServoId::Primary);
    assert_eq!(
        writes,
        vec![95, 100, 105, 110, 115, 120, 125, 130, 135, 140, 145, 150, 145]
    );
}

#[test]
fn steady_light_below_threshold_is_not_a_flame() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.steady_lamp();

    app.tick(&mut hw, &mut sink);

    assert_eq!(app.last_hazard(), Some(HazardClass::Clear));
    assert_eq!(hw.flame_reads, 16, "level read plus a 15-sample burst");
    assert_eq!(hw.now, 1000 + 15 * 3 + 50);
    assert_eq!(app.mode(), Mode::Monitoring);
}

#[test]
fn status_report_follows_debug_cadence() {
    let (mut app, mut hw, mut sink) = make_controller(1000);

    // Clear ticks advance the clock by the 50 ms settle each.
    for _ in 0..10 {
        app.tick(&mut hw, &mut sink);
    }

    assert_eq!(sink.count(is_status), 2, "fires at 1000 and 1250");
    let changes = sink.count(|e| matches!(e, AppEvent::HazardChanged { .. }));
    assert_eq!(changes, 1, "hazard only reported on transition");
}

// ── Smoke ─────────────────────────────────────────────────────

#[test]
fn smoke_only_runs_pump_and_defensive_sweep() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.smoke(400);

    app.tick(&mut hw, &mut sink);

    assert_eq!(app.last_hazard(), Some(HazardClass::SmokeOnly));
    assert!(hw.pump_on());
    assert!(hw.led(LedColor::Orange));
    assert!(!hw.led(LedColor::Red));
    assert!(hw.buzzer_on(), "smoke tone starts high");
    assert_eq!(hw.servo_writes(ServoId::Secondary), vec![95]);
    assert!(hw.servo_writes(ServoId::Primary).is_empty());

    // 50 ms later: sweep steps again, tone is still inside its 250 ms half-period.
    hw.clear_calls();
    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.servo_writes(ServoId::Secondary), vec![100]);
    assert!(!hw.calls.iter().any(|c| matches!(c, ActuatorCall::SetBuzzer(_))));
}

#[test]
fn smoke_at_threshold_is_clear() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.smoke(280);

    app.tick(&mut hw, &mut sink);

    assert_eq!(app.last_hazard(), Some(HazardClass::Clear));
    assert!(!hw.pump_on());
}

#[test]
fn clearing_after_smoke_silences_everything() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.smoke(400);
    app.tick(&mut hw, &mut sink);
    assert!(hw.pump_on());

    hw.clear();
    app.tick(&mut hw, &mut sink);

    assert!(!hw.pump_on());
    assert!(!hw.buzzer_on());
    assert!(!hw.led(LedColor::Orange));
    assert_eq!(hw.servo(ServoId::Secondary), Some(100));
    assert!(sink.events.contains(&AppEvent::HazardChanged {
        from: Some(HazardClass::SmokeOnly),
        to: HazardClass::Clear,
    }));
}

// ── Flame ─────────────────────────────────────────────────────

#[test]
fn flame_enters_dwell_and_aims_nozzle() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.flame();

    app.tick(&mut hw, &mut sink);

    assert_eq!(app.last_hazard(), Some(HazardClass::FlameOnly));
    assert_eq!(
        app.mode(),
        Mode::Dwelling {
            target_angle: 100,
            smoke_pending: false,
        }
    );
    assert!(sink.events.contains(&AppEvent::DwellStarted {
        target_angle: 100,
        flame: SensorReading {
            raw_level: 480,
            detected: true,
        },
    }));
    assert!(hw.pump_on());
    assert!(hw.led(LedColor::Red));
    assert!(hw.buzzer_on(), "fire tone starts high");
    assert_eq!(hw.servo_writes(ServoId::Secondary), vec![95]);
}

#[test]
fn dwell_suspends_sensing_until_it_elapses() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.flame();
    app.tick(&mut hw, &mut sink);
    let reads = hw.flame_reads;

    // Primary reference is still 0: the dwell ends at 5000.
    hw.now = 4999;
    app.tick(&mut hw, &mut sink);
    assert!(app.context().is_dwelling());
    assert_eq!(hw.flame_reads, reads);
    assert_eq!(hw.smoke_reads, 1);

    hw.now = 5000;
    app.tick(&mut hw, &mut sink);
    assert_eq!(app.mode(), Mode::Monitoring);
    assert_eq!(sink.count(is_dwell_finished), 1);
    assert_eq!(hw.flame_reads, reads, "exit tick does not sense");

    hw.clear();
    app.tick(&mut hw, &mut sink);
    assert_eq!(hw.flame_reads, reads + 1);
    assert_eq!(app.last_hazard(), Some(HazardClass::Clear));
    assert!(!hw.pump_on());
}

#[test]
fn dwell_times_from_last_idle_sweep() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    app.tick(&mut hw, &mut sink); // idle sweep moves the primary reference to 1000

    hw.flame();
    app.tick(&mut hw, &mut sink);
    assert!(app.context().is_dwelling());

    hw.now = 5999;
    app.tick(&mut hw, &mut sink);
    assert!(app.context().is_dwelling());

    hw.now = 6000;
    app.tick(&mut hw, &mut sink);
    assert!(!app.context().is_dwelling());
}

#[test]
fn stale_reference_ends_dwell_on_entry() {
    let (mut app, mut hw, mut sink) = make_controller(6000);
    hw.flame();

    app.tick(&mut hw, &mut sink);

    assert_eq!(app.mode(), Mode::Monitoring);
    assert_eq!(sink.count(is_dwell_finished), 1);
    assert!(hw.pump_on());
    assert!(!hw.led(LedColor::Red), "no dwell iteration ran");
}

#[test]
fn dwell_sweep_stays_in_target_window() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.flame();
    app.tick(&mut hw, &mut sink);

    for _ in 0..100 {
        hw.advance(30);
        app.tick(&mut hw, &mut sink);
    }
    assert!(app.context().is_dwelling());

    let writes = hw.servo_writes(ServoId::Secondary);
    assert!(writes.len() > 90);
    assert!(writes.iter().all(|a| (80..=120).contains(a)), "{:?}", writes);
    assert!(writes.contains(&80) && writes.contains(&120));
}

#[test]
fn fire_tone_toggles_every_100ms() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.flame();
    app.tick(&mut hw, &mut sink);
    let start = hw.now;

    let mut levels = Vec::new();
    for step in 1..=4 {
        hw.now = start + step * 100;
        hw.clear_calls();
        app.tick(&mut hw, &mut sink);
        levels.extend(hw.calls.iter().filter_map(|c| match c {
            ActuatorCall::SetBuzzer(on) => Some(*on),
            _ => None,
        }));
    }
    assert_eq!(levels, vec![false, true, false, true]);
}

// ── Flame and smoke ───────────────────────────────────────────

#[test]
fn flame_and_smoke_suppresses_then_resumes_smoke_response() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.flame();
    hw.smoke(400);

    app.tick(&mut hw, &mut sink);

    assert_eq!(app.last_hazard(), Some(HazardClass::FlameAndSmoke));
    assert!(hw.led(LedColor::Red));
    assert!(hw.led(LedColor::Orange));
    assert!(hw.pump_on());
    assert_eq!(
        app.mode(),
        Mode::Dwelling {
            target_angle: 100,
            smoke_pending: true,
        }
    );
    // Defensive sweep ran; the dwell sweep shares its gate and waits.
    assert_eq!(hw.servo_writes(ServoId::Secondary), vec![95]);

    hw.now = 5000;
    hw.clear_calls();
    app.tick(&mut hw, &mut sink);

    assert_eq!(app.mode(), Mode::Monitoring);
    assert_eq!(sink.count(is_dwell_finished), 1);
    assert!(hw.calls.contains(&ActuatorCall::SetLed {
        led: LedColor::Orange,
        on: true,
    }));
    assert!(hw.pump_on());
    assert_eq!(hw.servo_writes(ServoId::Secondary), vec![100]);
}

// ── Config limits ─────────────────────────────────────────────

#[test]
fn widest_accepted_config_runs_without_overflow() {
    let config = SystemConfig {
        min_angle: 0,
        max_angle: 180,
        sweep_step: 180,
        neutral_angle: 180,
        initial_angle: 0,
        dwell_target_offset: 180,
        dwell_half_window: 180,
        ..SystemConfig::default()
    };
    assert!(config.validate().is_ok());

    let mut app = Controller::new(config);
    let mut hw = MockBoard::new(1000);
    let mut sink = RecordingSink::new();

    for round in 0..20u32 {
        if round % 2 == 0 {
            hw.flame();
            hw.smoke(400);
        } else {
            hw.clear();
        }
        app.tick(&mut hw, &mut sink);
        hw.advance(6000);
        app.tick(&mut hw, &mut sink);
    }

    assert_eq!(app.tick_count(), 40);
    assert!(hw.servo_writes(ServoId::Secondary).iter().all(|a| a.abs() < 1000));
}

#[test]
fn flame_and_smoke_paces_smoke_tone_across_dwells() {
    let (mut app, mut hw, mut sink) = make_controller(1000);
    hw.flame();
    hw.smoke(400);

    let smoke_tone = |app: &Controller| {
        let ch = app.context().buzzer.smoke;
        (ch.gate.reference(), ch.level)
    };
    let fire_tone = |app: &Controller| {
        let ch = app.context().buzzer.fire;
        (ch.gate.reference(), ch.level)
    };

    app.tick(&mut hw, &mut sink);
    assert_eq!(smoke_tone(&app), (1000, true));
    assert_eq!(fire_tone(&app), (1000, true));

    // Inside the dwell only the fire tone moves.
    hw.now = 1200;
    app.tick(&mut hw, &mut sink);
    assert_eq!(smoke_tone(&app), (1000, true));
    assert_eq!(fire_tone(&app), (1200, false));
    assert!(!hw.buzzer_on());

    // Dwell exit runs the deferred smoke response.
    hw.now = 5000;
    app.tick(&mut hw, &mut sink);
    assert_eq!(smoke_tone(&app), (5000, false));

    // Same instant, second flame+smoke tick: smoke tone holds.
    app.tick(&mut hw, &mut sink);
    assert!(app.context().is_dwelling());
    assert_eq!(smoke_tone(&app), (5000, false));
    assert_eq!(fire_tone(&app), (5000, true));

    hw.now = 5249;
    app.tick(&mut hw, &mut sink);
    assert_eq!(smoke_tone(&app), (5000, false));

    hw.now = 10_000;
    app.tick(&mut hw, &mut sink);
    assert!(!app.context().is_dwelling());
    assert_eq!(smoke_tone(&app), (10_000, true));
    assert!(hw.buzzer_on());
}
