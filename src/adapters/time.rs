//! ESP32 clock and delay adapters.
//!
//! - **`target_os = "espidf"`**: the clock wraps `esp_timer_get_time()`
//!   (microsecond, monotonic) truncated to a wrapping `u32` millisecond
//!   counter; delays use `esp_idf_hal::delay::Delay`, which busy-waits
//!   short pauses and yields to FreeRTOS for long ones.
//! - **`not(target_os = "espidf")`**: `std::time::Instant` and
//!   `std::thread::sleep` for host-side simulation.

use embedded_hal::delay::DelayNs;

use crate::app::ports::TimePort;

/// Monotonic millisecond clock.
pub struct Esp32Clock {
    #[cfg(not(target_os = "espidf"))]
    start: std::time::Instant,
}

impl Default for Esp32Clock {
    fn default() -> Self {
        Self::new()
    }
}

impl Esp32Clock {
    pub fn new() -> Self {
        Self {
            #[cfg(not(target_os = "espidf"))]
            start: std::time::Instant::now(),
        }
    }

    /// Microseconds since boot (monotonic).
    #[cfg(target_os = "espidf")]
    pub fn uptime_us(&self) -> u64 {
        // SAFETY: esp_timer_get_time reads a free-running hardware counter.
        (unsafe { esp_idf_svc::sys::esp_timer_get_time() }) as u64
    }

    /// Microseconds since the adapter was created (monotonic).
    #[cfg(not(target_os = "espidf"))]
    pub fn uptime_us(&self) -> u64 {
        self.start.elapsed().as_micros() as u64
    }
}

impl TimePort for Esp32Clock {
    /// Truncation to `u32` is the wrap point; elapsed-time gates use
    /// wrapping arithmetic, so the rollover is harmless.
    fn now_ms(&self) -> u32 {
        (self.uptime_us() / 1000) as u32
    }
}

/// Blocking delay for sensor micro-pauses and the boot sequence.
pub struct BoardDelay {
    #[cfg(target_os = "espidf")]
    inner: esp_idf_hal::delay::Delay,
}

impl Default for BoardDelay {
    fn default() -> Self {
        Self::new()
    }
}

impl BoardDelay {
    pub fn new() -> Self {
        Self {
            #[cfg(target_os = "espidf")]
            inner: esp_idf_hal::delay::Delay::new_default(),
        }
    }
}

impl DelayNs for BoardDelay {
    #[cfg(target_os = "espidf")]
    fn delay_ns(&mut self, ns: u32) {
        self.inner.delay_ns(ns);
    }

    #[cfg(not(target_os = "espidf"))]
    fn delay_ns(&mut self, ns: u32) {
        std::thread::sleep(std::time::Duration::from_nanos(ns as u64));
    }
}
