//! Actuation pacing: servo sweep state and buzzer tone generation.

pub mod alarm;
pub mod sweep;
