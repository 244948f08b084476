//! Hazard policy: the control loop of the hexagonal core.
//!
//! [`Controller`] owns the sensor hub and the [`ControllerContext`].  Each
//! call to [`Controller::tick`] is one pass of the cooperative loop: it
//! never blocks beyond the sensor micro-pauses, and every periodic
//! behaviour is paced by its own elapsed-time gate.
//!
//! ```text
//!  SensorPort ──▶ ┌──────────────────────────┐ ──▶ EventSink
//!                 │        Controller        │
//! ActuatorPort ◀──│ sense · classify · act   │
//!                 └──────────────────────────┘
//! ```
//!
//! ## Response blocks
//!
//! The four responses are evaluated in a fixed order and are **not**
//! mutually exclusive; more than one can run in a tick.
//!
//! 1. clear: idle sweep, secondary to neutral, pump/LEDs/buzzer off
//! 2. flame and smoke: red+orange, smoke tone, pump on, defensive sweep
//! 3. flame: pump on, enter the dwell lockout
//! 4. smoke: orange, smoke tone, pump on, defensive sweep
//!
//! Block 3 hands over to [`Mode::Dwelling`].  While dwelling, ticks skip
//! sensing and keep the red LED, fire tone and aimed sweep going until
//! the dwell elapses on the primary servo's gate; block 4 then runs with
//! the smoke verdict captured before the dwell.

use log::{debug, info};

use crate::config::SystemConfig;
use crate::control::alarm::AlertKind;
use crate::sensors::{SensorHub, SensorSnapshot};

use super::context::{ControllerContext, Mode};
use super::events::{AppEvent, StatusReport};
use super::hazard::HazardClass;
use super::ports::{ActuatorPort, Board, EventSink, LedColor, ServoId};

// ───────────────────────────────────────────────────────────────
// Controller
// ───────────────────────────────────────────────────────────────

pub struct Controller {
    config: SystemConfig,
    sensors: SensorHub,
    ctx: ControllerContext,
    tick_count: u64,
}

impl Controller {
    /// Construct the controller.  Does **not** touch hardware; call
    /// [`boot`](Self::boot) once before the first [`tick`](Self::tick).
    pub fn new(config: SystemConfig) -> Self {
        let sensors = SensorHub::new(&config);
        let ctx = ControllerContext::new(&config);
        Self {
            config,
            sensors,
            ctx,
            tick_count: 0,
        }
    }

    // ── Lifecycle ─────────────────────────────────────────────

    /// One-time start-up indication.  Blocking delays are fine here.
    pub fn boot(&mut self, board: &mut impl Board, sink: &mut impl EventSink) {
        sink.emit(&AppEvent::Booting);

        board.set_pump(false);
        board.write_servo(ServoId::Primary, self.ctx.primary.angle());
        board.write_servo(ServoId::Secondary, self.ctx.secondary.angle());

        set_all_leds(board, false);
        board.delay_ms(self.config.boot_settle_ms);

        for _ in 0..self.config.boot_blink_count {
            set_all_leds(board, true);
            board.delay_ms(self.config.boot_blink_interval_ms);
            set_all_leds(board, false);
            board.delay_ms(self.config.boot_blink_interval_ms);
        }

        board.delay_ms(self.config.boot_ready_delay_ms);
        sink.emit(&AppEvent::Ready);
        info!("Controller ready");
    }

    // ── Per-tick orchestration ────────────────────────────────

    /// One pass of the control loop.
    pub fn tick(&mut self, board: &mut impl Board, sink: &mut impl EventSink) {
        self.tick_count += 1;
        let now = board.now_ms();

        if self.ctx.is_dwelling() {
            self.dwell_step(now, board, sink);
            return;
        }

        // 1. Sense (flame, settle, smoke)
        let snapshot = self.sensors.sample(board);
        let hazard = HazardClass::classify(snapshot.flame.detected, snapshot.smoke.detected);
        self.record(now, snapshot, hazard, sink);

        // 2. Respond
        if hazard == HazardClass::Clear {
            self.respond_clear(now, board);
        }

        if hazard == HazardClass::FlameAndSmoke {
            self.respond_flame_and_smoke(now, board);
        }

        if hazard.has_flame() {
            self.enter_dwell(now, snapshot, board, sink);
            return;
        }

        if hazard.has_smoke() {
            self.respond_smoke(now, board);
        }
    }

    // ── Queries ───────────────────────────────────────────────

    pub fn mode(&self) -> Mode {
        self.ctx.mode
    }

    pub fn context(&self) -> &ControllerContext {
        &self.ctx
    }

    /// Classification from the most recent sensing tick.
    pub fn last_hazard(&self) -> Option<HazardClass> {
        self.ctx.hazard
    }

    /// Total control ticks executed since startup.
    pub fn tick_count(&self) -> u64 {
        self.tick_count
    }

    pub fn config(&self) -> &SystemConfig {
        &self.config
    }

    // ── Response blocks ───────────────────────────────────────

    fn respond_clear(&mut self, now: u32, board: &mut impl ActuatorPort) {
        let cfg = &self.config;
        if self.ctx.primary_gate.fire(now) {
            let angle = self.ctx.primary.step(cfg.min_angle, cfg.max_angle, cfg.sweep_step);
            board.write_servo(ServoId::Primary, angle);
        }

        board.write_servo(ServoId::Secondary, cfg.neutral_angle);
        board.set_pump(false);
        board.set_led(LedColor::Red, false);
        board.set_led(LedColor::Orange, false);
        self.sound(AlertKind::Off, now, board);
    }

    fn respond_flame_and_smoke(&mut self, now: u32, board: &mut impl ActuatorPort) {
        board.set_led(LedColor::Red, true);
        board.set_led(LedColor::Orange, true);
        self.sound(AlertKind::Smoke, now, board);
        board.set_pump(true);
        self.defensive_sweep(now, board);
    }

    fn enter_dwell(
        &mut self,
        now: u32,
        snapshot: SensorSnapshot,
        board: &mut impl ActuatorPort,
        sink: &mut impl EventSink,
    ) {
        let target_angle = self.ctx.primary.angle() + self.config.dwell_target_offset;
        board.set_pump(true);
        sink.emit(&AppEvent::DwellStarted {
            target_angle,
            flame: snapshot.flame,
        });

        self.ctx.mode = Mode::Dwelling {
            target_angle,
            smoke_pending: snapshot.smoke.detected,
        };
        self.dwell_step(now, board, sink);
    }

    fn respond_smoke(&mut self, now: u32, board: &mut impl ActuatorPort) {
        board.set_led(LedColor::Orange, true);
        self.sound(AlertKind::Smoke, now, board);
        board.set_pump(true);
        self.defensive_sweep(now, board);
    }

    // ── Dwell ─────────────────────────────────────────────────

    /// One iteration of the flame lockout.  The exit check comes first,
    /// so a dwell whose time is already up performs no iteration at all.
    fn dwell_step(&mut self, now: u32, board: &mut impl ActuatorPort, sink: &mut impl EventSink) {
        let Mode::Dwelling {
            target_angle,
            smoke_pending,
        } = self.ctx.mode
        else {
            return;
        };

        if self
            .ctx
            .primary_gate
            .fire_after(now, self.config.dwell_duration_ms)
        {
            self.ctx.mode = Mode::Monitoring;
            sink.emit(&AppEvent::DwellFinished { target_angle });
            if smoke_pending {
                self.respond_smoke(now, board);
            }
            return;
        }

        board.set_led(LedColor::Red, true);
        self.sound(AlertKind::Fire, now, board);

        let cfg = &self.config;
        if self
            .ctx
            .secondary_gate
            .fire_after(now, cfg.dwell_sweep_interval_ms)
        {
            let angle = self.ctx.secondary.step(
                target_angle - cfg.dwell_half_window,
                target_angle + cfg.dwell_half_window,
                cfg.sweep_step,
            );
            board.write_servo(ServoId::Secondary, angle);
        }
    }

    // ── Helpers ───────────────────────────────────────────────

    fn defensive_sweep(&mut self, now: u32, board: &mut impl ActuatorPort) {
        let cfg = &self.config;
        if self
            .ctx
            .secondary_gate
            .fire_after(now, cfg.defensive_sweep_interval_ms)
        {
            let angle = self.ctx.secondary.step(cfg.min_angle, cfg.max_angle, cfg.sweep_step);
            board.write_servo(ServoId::Secondary, angle);
        }
    }

    fn sound(&mut self, kind: AlertKind, now: u32, board: &mut impl ActuatorPort) {
        if let Some(level) = self.ctx.buzzer.pulse(kind, now) {
            board.set_buzzer(level);
        }
    }

    fn record(
        &mut self,
        now: u32,
        snapshot: SensorSnapshot,
        hazard: HazardClass,
        sink: &mut impl EventSink,
    ) {
        self.ctx.snapshot = snapshot;

        if self.ctx.hazard != Some(hazard) {
            debug!("hazard {:?} -> {:?}", self.ctx.hazard, hazard);
            sink.emit(&AppEvent::HazardChanged {
                from: self.ctx.hazard,
                to: hazard,
            });
            self.ctx.hazard = Some(hazard);
        }

        if self.ctx.debug_gate.fire(now) {
            sink.emit(&AppEvent::Status(StatusReport {
                uptime_ms: now,
                flame: snapshot.flame,
                smoke: snapshot.smoke,
                hazard,
            }));
        }
    }
}

fn set_all_leds(board: &mut impl ActuatorPort, on: bool) {
    for led in LedColor::ALL {
        board.set_led(led, on);
    }
}
