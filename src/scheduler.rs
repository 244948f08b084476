//! Elapsed-time gates: the pacing primitive behind every periodic behaviour.
//!
//! The control loop never sleeps to pace itself.  Each paced behaviour
//! (idle sweep, defensive sweep, buzzer tones, status report) owns an
//! [`IntervalGate`] and polls it once per tick with the current clock
//! reading.  A gate fires when at least its interval has elapsed since it
//! last fired, and firing moves its reference point to `now`.
//!
//! ```text
//!   tick ──▶ now ──▶ gate.fire(now)? ──yes──▶ behaviour step
//!                         │                   reference = now
//!                         └──no──▶ skip (state untouched)
//! ```
//!
//! Elapsed time is computed with wrapping subtraction, so a clock that
//! rolls over (a `u32` millisecond counter wraps after ~49.7 days) still
//! yields the correct distance.  This holds for every width implementing
//! [`Tick`].

// ═══════════════════════════════════════════════════════════════
//  Timestamp arithmetic
// ═══════════════════════════════════════════════════════════════

/// An unsigned timestamp from a free-running, wrapping clock.
pub trait Tick: Copy + Ord + Default + core::fmt::Debug {
    /// Distance from `earlier` to `self`, modulo the clock width.
    fn elapsed_since(self, earlier: Self) -> Self;
}

macro_rules! impl_tick {
    ($($t:ty),* $(,)?) => {
        $(
            impl Tick for $t {
                #[inline]
                fn elapsed_since(self, earlier: Self) -> Self {
                    self.wrapping_sub(earlier)
                }
            }
        )*
    };
}

impl_tick!(u8, u16, u32, u64, usize);

// ═══════════════════════════════════════════════════════════════
//  IntervalGate
// ═══════════════════════════════════════════════════════════════

/// "Has at least `interval` passed since I last fired?"
///
/// Each gate owns its reference timestamp; gates never share one.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct IntervalGate<T: Tick = u32> {
    reference: T,
    interval: T,
}

impl<T: Tick> IntervalGate<T> {
    /// A gate whose reference point is the zero timestamp.
    pub fn new(interval: T) -> Self {
        Self {
            reference: T::default(),
            interval,
        }
    }

    /// A gate with an explicit starting reference.
    pub fn starting_at(reference: T, interval: T) -> Self {
        Self { reference, interval }
    }

    /// Fire against the gate's own interval.
    ///
    /// Returns `true` and moves the reference to `now` iff
    /// `now - reference >= interval`; otherwise leaves the gate untouched.
    #[inline]
    pub fn fire(&mut self, now: T) -> bool {
        self.fire_after(now, self.interval)
    }

    /// Fire against an explicit interval, sharing this gate's reference.
    ///
    /// Used where one timer paces several behaviours at different rates
    /// (the secondary servo sweeps at 50 ms defensively and 30 ms while
    /// dwelling; the flame dwell runs off the primary servo's reference).
    #[inline]
    pub fn fire_after(&mut self, now: T, interval: T) -> bool {
        if now.elapsed_since(self.reference) >= interval {
            self.reference = now;
            true
        } else {
            false
        }
    }

    /// Time elapsed since the last fire, as seen at `now`.
    pub fn elapsed(&self, now: T) -> T {
        now.elapsed_since(self.reference)
    }

    /// Move the reference point without firing.
    pub fn reset(&mut self, now: T) {
        self.reference = now;
    }

    pub fn reference(&self) -> T {
        self.reference
    }

    pub fn interval(&self) -> T {
        self.interval
    }
}
