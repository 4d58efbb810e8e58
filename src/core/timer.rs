use std::time::{Duration, Instant};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum TimerState {
    Armed,
    Fired,
    Cancelled,
}

/// A one-shot timer polled by the owning view.
///
/// `poll` returns `true` exactly once, on the first poll at or after the
/// deadline. A cancelled timer never fires.
#[derive(Debug, Clone)]
pub struct OneShot {
    deadline: Instant,
    state: TimerState,
}

impl OneShot {
    pub fn start(now: Instant, after: Duration) -> Self {
        Self {
            deadline: now + after,
            state: TimerState::Armed,
        }
    }

    pub fn poll(&mut self, now: Instant) -> bool {
        if self.state == TimerState::Armed && now >= self.deadline {
            self.state = TimerState::Fired;
            return true;
        }
        false
    }

    pub fn cancel(&mut self) {
        if self.state == TimerState::Armed {
            self.state = TimerState::Cancelled;
        }
    }

    /// Still waiting to fire.
    pub fn is_armed(&self) -> bool {
        self.state == TimerState::Armed
    }

    pub fn deadline(&self) -> Instant {
        self.deadline
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_after_deadline() {
        let start = Instant::now();
        let mut timer = OneShot::start(start, Duration::from_millis(100));

        assert!(!timer.poll(start + Duration::from_millis(99)));
        assert!(timer.poll(start + Duration::from_millis(100)));
        assert!(!timer.poll(start + Duration::from_millis(500)));
        assert!(!timer.is_armed());
    }

    #[test]
    fn test_cancelled_never_fires() {
        let start = Instant::now();
        let mut timer = OneShot::start(start, Duration::from_millis(100));
        timer.cancel();

        assert!(!timer.poll(start + Duration::from_secs(10)));
        assert!(!timer.is_armed());
    }
}
