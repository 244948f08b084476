//! Hazard classification.
//!
//! Derived each tick from the two detector verdicts; never stored as the
//! source of truth.

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum HazardClass {
    Clear,
    SmokeOnly,
    FlameOnly,
    FlameAndSmoke,
}

impl HazardClass {
    pub fn classify(flame: bool, smoke: bool) -> Self {
        match (flame, smoke) {
            (false, false) => Self::Clear,
            (false, true) => Self::SmokeOnly,
            (true, false) => Self::FlameOnly,
            (true, true) => Self::FlameAndSmoke,
        }
    }

    pub fn has_flame(self) -> bool {
        matches!(self, Self::FlameOnly | Self::FlameAndSmoke)
    }

    pub fn has_smoke(self) -> bool {
        matches!(self, Self::SmokeOnly | Self::FlameAndSmoke)
    }
}
