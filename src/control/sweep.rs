//! Back-and-forth servo sweep state.
//!
//! The angle is stepped, then compared against the bound it was heading
//! for.  Reaching or passing the bound flips the direction; the angle is
//! not clamped, so it can overshoot a bound by up to one step before it
//! turns around (148 → 153 against a 150 maximum).

use serde::Serialize;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum SweepDirection {
    Ascending,
    Descending,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ServoSweep {
    angle: i32,
    direction: SweepDirection,
}

impl ServoSweep {
    pub fn new(angle: i32) -> Self {
        Self {
            angle,
            direction: SweepDirection::Ascending,
        }
    }

    pub fn with_direction(angle: i32, direction: SweepDirection) -> Self {
        Self { angle, direction }
    }

    /// Advance one step within `[min, max]` and return the new angle.
    pub fn step(&mut self, min: i32, max: i32, step: i32) -> i32 {
        match self.direction {
            SweepDirection::Ascending => {
                self.angle += step;
                if self.angle >= max {
                    self.direction = SweepDirection::Descending;
                }
            }
            SweepDirection::Descending => {
                self.angle -= step;
                if self.angle <= min {
                    self.direction = SweepDirection::Ascending;
                }
            }
        }
        self.angle
    }

    pub fn angle(&self) -> i32 {
        self.angle
    }

    pub fn direction(&self) -> SweepDirection {
        self.direction
    }
}
