//! Indicator LED bank (blue, red, orange), one GPIO each, active high.

use embedded_hal::digital::OutputPin;
use log::warn;

use crate::app::ports::LedColor;

pub struct IndicatorLeds<P: OutputPin> {
    blue: P,
    red: P,
    orange: P,
    lit: [bool; 3],
}

impl<P: OutputPin> IndicatorLeds<P> {
    pub fn new(blue: P, red: P, orange: P) -> Self {
        Self {
            blue,
            red,
            orange,
            lit: [false; 3],
        }
    }

    pub fn set(&mut self, led: LedColor, on: bool) {
        let pin = match led {
            LedColor::Blue => &mut self.blue,
            LedColor::Red => &mut self.red,
            LedColor::Orange => &mut self.orange,
        };
        let result = if on { pin.set_high() } else { pin.set_low() };
        if let Err(e) = result {
            warn!("led {:?}: write failed ({:?})", led, e);
        }
        self.lit[Self::slot(led)] = on;
    }

    pub fn off(&mut self) {
        for led in LedColor::ALL {
            self.set(led, false);
        }
    }

    pub fn is_on(&self, led: LedColor) -> bool {
        self.lit[Self::slot(led)]
    }

    fn slot(led: LedColor) -> usize {
        match led {
            LedColor::Blue => 0,
            LedColor::Red => 1,
            LedColor::Orange => 2,
        }
    }
}
