//! Fixed-rate tick scheduling
//!
//! Mirrors a single `setInterval` timer: ticks are due every `period`
//! seconds, at most one tick fires per poll, and a poll that arrives late
//! does not queue catch-up ticks. When the schedule has fallen a full period
//! behind, the next deadline is measured from the late poll instead.
//!
//! Time is passed in as seconds so the clock works with `Instant` natively
//! and with `performance.now()` in the browser.

/// Single-timer fixed-rate scheduler.
#[derive(Debug, Clone)]
pub struct FixedRateClock {
    period: f64,
    next_tick: Option<f64>,
}

impl FixedRateClock {
    /// Create a clock firing `hz` times per second.
    pub fn from_hz(hz: f32) -> Self {
        Self {
            period: 1.0 / hz.max(f32::EPSILON) as f64,
            next_tick: None,
        }
    }

    /// Arm the clock; the first tick is due one period after `now`.
    pub fn start(&mut self, now: f64) {
        self.next_tick = Some(now + self.period);
    }

    /// When the next tick is due, if armed.
    pub fn next_deadline(&self) -> Option<f64> {
        self.next_tick
    }

    /// Returns `true` if a tick is due at `now` and advances the schedule.
    pub fn poll(&mut self, now: f64) -> bool {
        let Some(deadline) = self.next_tick else {
            return false;
        };
        if now < deadline {
            return false;
        }
        let next = deadline + self.period;
        self.next_tick = Some(if next <= now { now + self.period } else { next });
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const EPSILON: f64 = 1e-9;

    #[test]
    fn test_unarmed_clock_never_ticks() {
        let mut clock = FixedRateClock::from_hz(60.0);
        assert!(!clock.poll(100.0));
    }

    #[test]
    fn test_ticks_on_schedule() {
        let mut clock = FixedRateClock::from_hz(10.0);
        clock.start(0.0);
        assert!(!clock.poll(0.05));
        assert!(clock.poll(0.1));
        assert!(!clock.poll(0.15));
        assert!(clock.poll(0.2));
    }

    #[test]
    fn test_one_tick_per_poll_when_late() {
        let mut clock = FixedRateClock::from_hz(10.0);
        clock.start(0.0);
        // 5 periods late: one tick, no backlog
        assert!(clock.poll(0.5));
        assert!(!clock.poll(0.5));
        let next = clock.next_deadline().unwrap();
        assert!((next - 0.6).abs() < EPSILON);
    }

    #[test]
    fn test_slightly_late_keeps_cadence() {
        let mut clock = FixedRateClock::from_hz(10.0);
        clock.start(0.0);
        assert!(clock.poll(0.13));
        let next = clock.next_deadline().unwrap();
        assert!((next - 0.2).abs() < EPSILON);
    }

    #[test]
    fn test_start_arms_one_period_out() {
        let mut clock = FixedRateClock::from_hz(4.0);
        assert_eq!(clock.next_deadline(), None);
        clock.start(1.0);
        assert_eq!(clock.next_deadline(), Some(1.25));
    }
}
