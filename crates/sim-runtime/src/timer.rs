//! Cancellable fixed-period timer for the passive-income tick.
//!
//! The timer never sleeps; the host advances simulated time and the timer
//! reports how many ticks came due. Tests drive it directly.

/// Fixed period of the passive-income tick, in simulated time units.
pub const PASSIVE_TICK_UNITS: u64 = 5;

/// A cancellable periodic tick source.
///
/// At most one timer exists per session; once cancelled it stays cancelled
/// and reports no further due ticks.
#[derive(Debug)]
pub struct TickTimer {
    interval: u64,
    carry: u64,
    cancelled: bool,
}

impl TickTimer {
    /// Timer with the given period. A zero interval is treated as 1.
    pub fn new(interval: u64) -> Self {
        Self {
            interval: interval.max(1),
            carry: 0,
            cancelled: false,
        }
    }

    /// Configured period in time units.
    pub fn interval(&self) -> u64 {
        self.interval
    }

    /// Advance simulated time and return how many ticks came due.
    ///
    /// Fractional remainders carry over to the next call, so driving the
    /// timer in small steps fires the same ticks as one large step.
    pub fn advance(&mut self, units: u64) -> u64 {
        if self.cancelled {
            return 0;
        }
        self.carry += units;
        let due = self.carry / self.interval;
        self.carry %= self.interval;
        due
    }

    /// Stop the timer permanently. Idempotent.
    pub fn cancel(&mut self) {
        self.cancelled = true;
    }

    /// Whether the timer has been cancelled.
    pub fn is_cancelled(&self) -> bool {
        self.cancelled
    }
}

impl Default for TickTimer {
    fn default() -> Self {
        Self::new(PASSIVE_TICK_UNITS)
    }
}
