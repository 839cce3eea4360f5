use std::time::{Duration, Instant};

/// Periodic deadline tracker polled from the UI event loop.
///
/// The timer never fires in bursts: if several periods were missed between
/// two polls it fires once and re-anchors on the current instant.
#[derive(Debug, Clone, Default)]
pub struct IntervalTimer {
    interval: Duration,
    next_due: Option<Instant>,
}

impl IntervalTimer {
    pub fn new() -> Self {
        Self::default()
    }

    /// Arm the timer; the first deadline is one `interval` after `now`.
    ///
    /// Returns `false` and leaves the timer untouched when that deadline is
    /// not representable.
    pub fn start(&mut self, interval: Duration, now: Instant) -> bool {
        let Some(due) = now.checked_add(interval) else {
            return false;
        };
        self.interval = interval;
        self.next_due = Some(due);
        true
    }

    /// Disarm the timer. Pending deadlines are dropped.
    pub fn stop(&mut self) {
        self.next_due = None;
    }

    pub fn is_active(&self) -> bool {
        self.next_due.is_some()
    }

    /// Returns `true` when a deadline has passed at `now`, and schedules the
    /// next one.
    pub fn fire_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if now >= due => {
                // Disarms once the next deadline no longer fits in an `Instant`.
                self.next_due = due
                    .checked_add(self.interval)
                    .filter(|next| *next > now)
                    .or_else(|| now.checked_add(self.interval));
                true
            }
            _ => false,
        }
    }

    /// Time left until the next deadline, `None` when disarmed.
    pub fn time_until_due(&self, now: Instant) -> Option<Duration> {
        self.next_due.map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn fires_once_per_interval() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new();
        assert!(timer.start(Duration::from_millis(100), t0));
        assert!(!timer.fire_due(t0 + Duration::from_millis(99)));
        assert!(timer.fire_due(t0 + Duration::from_millis(100)));
        assert!(!timer.fire_due(t0 + Duration::from_millis(150)));
        assert!(timer.fire_due(t0 + Duration::from_millis(200)));
    }

    #[test]
    fn missed_deadlines_do_not_burst() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new();
        timer.start(Duration::from_millis(100), t0);
        let late = t0 + Duration::from_millis(550);
        assert!(timer.fire_due(late));
        assert!(!timer.fire_due(late));
        assert_eq!(timer.time_until_due(late), Some(Duration::from_millis(100)));
    }

    #[test]
    fn unrepresentable_deadline_is_refused() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new();
        assert!(!timer.start(Duration::MAX, t0));
        assert!(!timer.is_active());
        assert!(!timer.fire_due(t0));
    }

    #[test]
    fn stopped_timer_never_fires() {
        let t0 = Instant::now();
        let mut timer = IntervalTimer::new();
        timer.start(Duration::from_millis(100), t0);
        timer.stop();
        assert!(!timer.is_active());
        assert!(!timer.fire_due(t0 + Duration::from_secs(10)));
        assert_eq!(timer.time_until_due(t0), None);
    }
}
