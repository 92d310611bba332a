//! Repeating timer driven by host frame time.
//!
//! The host owns the clock. Each frame it passes the elapsed time to
//! [`Ticker::advance`], which reports how many times the ticker fired.

use std::time::Duration;

const NANOS_PER_SEC: u128 = 1_000_000_000;

/// A cancellable repeating timer whose first firing is immediate.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    /// Time left until the next firing.
    until_next: Duration,
    running: bool,
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            until_next: Duration::ZERO,
            running: false,
        }
    }

    /// (Re)start the ticker. The first firing is due at elapsed time zero.
    pub fn start(&mut self) {
        self.until_next = Duration::ZERO;
        self.running = true;
    }

    pub fn cancel(&mut self) {
        self.running = false;
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Let `dt` pass and return the number of firings that fell due.
    ///
    /// A zero interval fires once per call so a misconfigured ticker can't
    /// spin forever.
    pub fn advance(&mut self, dt: Duration) -> u32 {
        if !self.running {
            return 0;
        }
        if self.interval.is_zero() {
            return 1;
        }

        if dt < self.until_next {
            self.until_next -= dt;
            return 0;
        }

        let interval = self.interval.as_nanos();
        let past_first = (dt - self.until_next).as_nanos();
        let rest = past_first % interval;
        self.until_next = self.interval
            - Duration::new((rest / NANOS_PER_SEC) as u64, (rest % NANOS_PER_SEC) as u32);
        u32::try_from(1 + past_first / interval).unwrap_or(u32::MAX)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const STEP: Duration = Duration::from_millis(100);

    #[test]
    fn test_first_fire_is_immediate() {
        let mut ticker = Ticker::new(STEP);
        ticker.start();
        assert_eq!(ticker.advance(Duration::ZERO), 1);
        assert_eq!(ticker.advance(Duration::ZERO), 0);
    }

    #[test]
    fn test_fires_once_per_interval() {
        let mut ticker = Ticker::new(STEP);
        ticker.start();
        ticker.advance(Duration::ZERO);

        assert_eq!(ticker.advance(Duration::from_millis(50)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(50)), 1);
        assert_eq!(ticker.advance(Duration::from_millis(350)), 3);
        assert_eq!(ticker.advance(Duration::from_millis(50)), 1);
    }

    #[test]
    fn test_cancelled_ticker_never_fires() {
        let mut ticker = Ticker::new(STEP);
        ticker.start();
        ticker.cancel();
        assert!(!ticker.is_running());
        assert_eq!(ticker.advance(Duration::from_secs(5)), 0);
    }

    #[test]
    fn test_restart_resets_phase() {
        let mut ticker = Ticker::new(STEP);
        ticker.start();
        ticker.advance(Duration::from_millis(30));
        ticker.start();
        assert_eq!(ticker.advance(Duration::ZERO), 1);
    }

    #[test]
    fn test_tiny_interval_counts_without_looping() {
        let mut ticker = Ticker::new(Duration::from_nanos(1));
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_secs(5)), u32::MAX);
        assert_eq!(ticker.advance(Duration::ZERO), 0);
        assert_eq!(ticker.advance(Duration::from_nanos(3)), 3);
    }

    #[test]
    fn test_carries_partial_interval() {
        let mut ticker = Ticker::new(STEP);
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_millis(250)), 3);
        assert_eq!(ticker.advance(Duration::from_millis(49)), 0);
        assert_eq!(ticker.advance(Duration::from_millis(1)), 1);
    }

    #[test]
    fn test_zero_interval_fires_once_per_advance() {
        let mut ticker = Ticker::new(Duration::ZERO);
        ticker.start();
        assert_eq!(ticker.advance(Duration::from_secs(1)), 1);
    }
}
