//! Adapters: concrete implementations of the hexagonal port traits.
//!
//! | Adapter    | Implements                    | Connects to                |
//! |------------|-------------------------------|----------------------------|
//! | `hardware` | SensorPort, ActuatorPort,     | ADC1, GPIO, LEDC, delay,   |
//! |            | TimePort, DelayNs             | clock                      |
//! | `log_sink` | EventSink                     | Serial log output          |
//! | `time`     | TimePort, DelayNs             | ESP32 system timer, RTOS   |

pub mod hardware;
pub mod log_sink;
pub mod time;
