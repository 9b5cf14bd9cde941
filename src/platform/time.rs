//! Blocking fixed-rate frame limiter

use std::time::{Duration, Instant};

/// Caps the loop to a target number of ticks per second
///
/// Deadlines advance by exactly one period so the average rate holds even when
/// individual sleeps overshoot. If the loop falls more than a period behind, the
/// schedule restarts from now instead of running a burst of catch-up ticks.
#[derive(Debug, Clone)]
pub struct FrameLimiter {
    period: Duration,
    next: Instant,
}

impl FrameLimiter {
    pub fn new(tick_rate: u32) -> Self {
        Self::starting_at(tick_rate, Instant::now())
    }

    /// Limiter whose first deadline is `start`
    pub fn starting_at(tick_rate: u32, start: Instant) -> Self {
        Self {
            period: Duration::from_secs(1) / tick_rate.max(1),
            next: start,
        }
    }

    pub fn period(&self) -> Duration {
        self.period
    }

    /// Time to sleep if the current instant is `now`; schedules the next deadline
    pub fn delay_at(&mut self, now: Instant) -> Duration {
        if now < self.next {
            let delay = self.next - now;
            self.next += self.period;
            return delay;
        }

        if now - self.next > self.period {
            log::trace!("Frame limiter fell behind by {:?}", now - self.next);
            self.next = now + self.period;
        } else {
            self.next += self.period;
        }
        Duration::ZERO
    }

    /// Block until the next tick is due
    pub fn wait(&mut self) {
        let delay = self.delay_at(Instant::now());
        if !delay.is_zero() {
            std::thread::sleep(delay);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_period_from_rate() {
        let limiter = FrameLimiter::new(50);
        assert_eq!(limiter.period(), Duration::from_millis(20));
    }

    #[test]
    fn test_zero_rate_does_not_panic() {
        let limiter = FrameLimiter::new(0);
        assert_eq!(limiter.period(), Duration::from_secs(1));
    }

    #[test]
    fn test_steady_schedule() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::starting_at(50, start);

        // First deadline is the start itself
        assert_eq!(limiter.delay_at(start), Duration::ZERO);
        // Work took 5ms of the 20ms budget
        let now = start + Duration::from_millis(5);
        assert_eq!(limiter.delay_at(now), Duration::from_millis(15));
        // Deadline after that is 40ms in
        let now = start + Duration::from_millis(30);
        assert_eq!(limiter.delay_at(now), Duration::from_millis(10));
    }

    #[test]
    fn test_slightly_late_keeps_schedule() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::starting_at(50, start);
        limiter.delay_at(start);

        // 5ms late for the 20ms deadline: no sleep, next deadline still at 40ms
        assert_eq!(limiter.delay_at(start + Duration::from_millis(25)), Duration::ZERO);
        let now = start + Duration::from_millis(35);
        assert_eq!(limiter.delay_at(now), Duration::from_millis(5));
    }

    #[test]
    fn test_far_behind_resets() {
        let start = Instant::now();
        let mut limiter = FrameLimiter::starting_at(50, start);
        limiter.delay_at(start);

        // A one second stall: no burst, next deadline is one period from now
        let now = start + Duration::from_secs(1);
        assert_eq!(limiter.delay_at(now), Duration::ZERO);
        let later = now + Duration::from_millis(4);
        assert_eq!(limiter.delay_at(later), Duration::from_millis(16));
    }
}
