//! Wall-clock access for the impure conversion cells.
//!
//! Almost every cell of the conversion matrix is a pure function. The two
//! exceptions (timestamp → bool, timestamp → duration) compare against
//! "now", so the clock is a capability the [`Coercer`](crate::Coercer) is
//! constructed with rather than an ambient global. Tests supply a
//! [`FixedClock`] to keep those cells deterministic.

use std::time::SystemTime;

/// Source of the current wall-clock time.
pub trait Clock {
    fn now(&self) -> SystemTime;
}

/// The real system clock.
#[derive(Clone, Copy, Debug, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> SystemTime {
        SystemTime::now()
    }
}

/// A clock pinned to a fixed instant.
#[derive(Clone, Copy, Debug)]
pub struct FixedClock(pub SystemTime);

impl Clock for FixedClock {
    fn now(&self) -> SystemTime {
        self.0
    }
}
