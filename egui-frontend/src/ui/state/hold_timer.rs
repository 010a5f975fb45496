//! # Hold Timer Module
//!
//! An owned, cancellable one-shot timer for long-press detection. Time is
//! supplied by the host as a `Duration` since any fixed epoch (egui's input
//! clock in the app, plain values in tests); the host polls the timer every
//! frame and it fires at most once per arming.

use std::time::Duration;
use shared::TouchPoint;

#[derive(Debug, Clone, Copy, PartialEq)]
struct PendingHold {
    deadline: Duration,
    point: TouchPoint,
}

/// One-shot hold timer carrying the touch point it was armed with
#[derive(Debug, Clone, Default, PartialEq)]
pub struct HoldTimer {
    pending: Option<PendingHold>,
}

impl HoldTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Schedule the timer `delay` after `now`, replacing any pending one
    pub fn arm(&mut self, now: Duration, delay: Duration, point: TouchPoint) {
        self.pending = Some(PendingHold { deadline: now + delay, point });
    }

    /// Cancel the pending timer.
    ///
    /// Safe to call any number of times, including after the timer fired.
    /// Returns whether a pending timer was actually cancelled.
    pub fn cancel(&mut self) -> bool {
        self.pending.take().is_some()
    }

    pub fn is_pending(&self) -> bool {
        self.pending.is_some()
    }

    pub fn deadline(&self) -> Option<Duration> {
        self.pending.map(|pending| pending.deadline)
    }

    /// Time left before the timer fires
    pub fn remaining(&self, now: Duration) -> Option<Duration> {
        self.pending.map(|pending| pending.deadline.saturating_sub(now))
    }

    /// Fire if the deadline has passed, consuming the timer
    pub fn fire_if_due(&mut self, now: Duration) -> Option<TouchPoint> {
        match self.pending {
            Some(pending) if now >= pending.deadline => {
                self.pending = None;
                Some(pending.point)
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn test_fires_once_at_deadline() {
        let mut timer = HoldTimer::new();
        let point = TouchPoint::new(10.0, 20.0);
        timer.arm(ms(100), ms(500), point);

        assert_eq!(timer.fire_if_due(ms(599)), None);
        assert_eq!(timer.remaining(ms(550)), Some(ms(50)));
        assert_eq!(timer.fire_if_due(ms(600)), Some(point));
        assert_eq!(timer.fire_if_due(ms(900)), None);
        assert!(!timer.is_pending());
    }

    #[test]
    fn test_cancel_is_idempotent() {
        let mut timer = HoldTimer::new();
        assert!(!timer.cancel());

        timer.arm(ms(0), ms(500), TouchPoint::default());
        assert!(timer.cancel());
        assert!(!timer.cancel());
        assert_eq!(timer.fire_if_due(ms(1000)), None);

        // cancelling after firing is also a no-op
        timer.arm(ms(0), ms(500), TouchPoint::default());
        assert!(timer.fire_if_due(ms(500)).is_some());
        assert!(!timer.cancel());
    }

    #[test]
    fn test_rearm_replaces_pending() {
        let mut timer = HoldTimer::new();
        timer.arm(ms(0), ms(500), TouchPoint::new(1.0, 1.0));
        timer.arm(ms(300), ms(500), TouchPoint::new(2.0, 2.0));

        assert_eq!(timer.deadline(), Some(ms(800)));
        assert_eq!(timer.fire_if_due(ms(500)), None);
        assert_eq!(timer.fire_if_due(ms(800)), Some(TouchPoint::new(2.0, 2.0)));
    }
}
