//! Log-based event sink adapter.
//!
//! Implements [`EventSink`] by writing application events to the serial
//! logger.  Status reports come out as the two fixed-format lines the
//! bench tooling parses; a structured JSON `TELEM` line follows at debug
//! level.

use log::{debug, info, warn};

use crate::app::events::{AppEvent, FlameStatus};
use crate::app::ports::EventSink;

/// Adapter that logs every [`AppEvent`] to the serial console.
pub struct LogEventSink;

impl Default for LogEventSink {
    fn default() -> Self {
        Self::new()
    }
}

impl LogEventSink {
    pub fn new() -> Self {
        Self
    }
}

impl EventSink for LogEventSink {
    fn emit(&mut self, event: &AppEvent) {
        match event {
            AppEvent::Booting => info!("Device Starting"),
            AppEvent::Ready => info!("Set-up is complete and ready!!!"),
            AppEvent::Status(report) => {
                info!("{}", report.flame_status());
                info!("{}", report.smoke_status());
                match serde_json::to_string(report) {
                    Ok(json) => debug!("TELEM {}", json),
                    Err(e) => warn!("TELEM encode failed: {}", e),
                }
            }
            AppEvent::HazardChanged { from, to } => {
                info!("HAZARD | {:?} -> {:?}", from, to);
            }
            AppEvent::DwellStarted { target_angle, flame } => {
                info!("{}", target_angle);
                info!("{}", FlameStatus(*flame));
            }
            AppEvent::DwellFinished { target_angle } => {
                info!("DWELL | finished (target={})", target_angle);
            }
        }
    }
}
