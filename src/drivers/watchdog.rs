//! Task Watchdog Timer (TWDT) driver.
//!
//! Resets the device if the control loop stops ticking.  The loop feeds
//! it once per tick; since the flame dwell is a mode rather than a nested
//! loop, feeding continues through a dwell as well.

#[cfg(target_os = "espidf")]
use esp_idf_svc::sys::*;

use log::info;
#[cfg(target_os = "espidf")]
use log::warn;

pub struct Watchdog {
    timeout_ms: u32,
    subscribed: bool,
}

impl Watchdog {
    /// Initialise and subscribe the current task to the TWDT.
    #[cfg(target_os = "espidf")]
    pub fn new(timeout_ms: u32) -> Self {
        // SAFETY: single call from main() before the control loop starts.
        let subscribed = unsafe {
            let cfg = esp_task_wdt_config_t {
                timeout_ms,
                idle_core_mask: 0,
                trigger_panic: true,
            };
            let ret = esp_task_wdt_reconfigure(&cfg);
            if ret != ESP_OK {
                warn!("TWDT reconfigure returned {} (may already be configured)", ret);
            }
            esp_task_wdt_add(core::ptr::null_mut()) == ESP_OK
        };

        if subscribed {
            info!("Watchdog: subscribed ({} ms timeout, panic on trigger)", timeout_ms);
        } else {
            warn!("Watchdog: failed to subscribe control task");
        }
        Self { timeout_ms, subscribed }
    }

    #[cfg(not(target_os = "espidf"))]
    pub fn new(timeout_ms: u32) -> Self {
        info!("Watchdog(sim): {} ms timeout, no-op", timeout_ms);
        Self {
            timeout_ms,
            subscribed: false,
        }
    }

    /// Feed the watchdog.  Must be called at least once per timeout.
    pub fn feed(&self) {
        #[cfg(target_os = "espidf")]
        if self.subscribed {
            // SAFETY: resets this task's TWDT entry; no shared state.
            unsafe {
                esp_task_wdt_reset();
            }
        }
    }

    pub fn timeout_ms(&self) -> u32 {
        self.timeout_ms
    }

    pub fn is_subscribed(&self) -> bool {
        self.subscribed
    }
}
