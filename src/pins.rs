//! GPIO / peripheral pin assignments for the FireWatch controller board.
//!
//! Single source of truth: every driver references this module rather than
//! hard-coding pin numbers.  Change a pin here and it propagates everywhere.

// ---------------------------------------------------------------------------
// Sensors: Analog (ADC1)
// ---------------------------------------------------------------------------

/// MQ-2 gas/smoke sensor, analog output.
/// ADC1 channel 0 (GPIO 1 on ESP32-S3).
pub const SMOKE_ADC_GPIO: i32 = 1;
/// IR flame sensor, analog output.  Lower reading = stronger flame.
/// ADC1 channel 1 (GPIO 2 on ESP32-S3).
pub const FLAME_ADC_GPIO: i32 = 2;

// ---------------------------------------------------------------------------
// Pump relay (active-LOW module)
// ---------------------------------------------------------------------------

/// Digital output: LOW = pump running, HIGH = pump stopped.
pub const PUMP_RELAY_GPIO: i32 = 11;

// ---------------------------------------------------------------------------
// Indicators
// ---------------------------------------------------------------------------

pub const LED_ORANGE_GPIO: i32 = 12;
pub const LED_RED_GPIO: i32 = 13;
pub const LED_BLUE_GPIO: i32 = 14;

/// Active buzzer, driven HIGH to sound.
pub const BUZZER_GPIO: i32 = 15;

// ---------------------------------------------------------------------------
// Servos (LEDC PWM)
// ---------------------------------------------------------------------------

/// Nozzle servo, swept while suppressing.
pub const SERVO_SECONDARY_GPIO: i32 = 16;
/// Scanner servo, swept while the room is clear.
pub const SERVO_PRIMARY_GPIO: i32 = 17;

/// Standard hobby-servo frame rate (20 ms period).
pub const SERVO_PWM_FREQ_HZ: u32 = 50;
