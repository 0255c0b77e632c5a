//! Fixed-window rate limiting for the contact form.
//!
//! An explicit component held in application state rather than an opaque
//! middleware, so it can be constructed and exercised on its own. Windows
//! are tracked per source IP and start at the first request seen.

use std::collections::HashMap;
use std::net::IpAddr;
use std::time::{Duration, Instant};

use parking_lot::Mutex;

/// Outcome of recording one request against the limit.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RateLimitDecision {
    Allowed,
    /// Rejected; the current window has this long left to run.
    Limited { retry_after: Duration },
}

#[derive(Debug)]
struct Window {
    started: Instant,
    count: u32,
}

/// Counter gate allowing at most `max_requests` per `window` per source IP.
#[derive(Debug)]
pub struct RateLimiter {
    max_requests: u32,
    window: Duration,
    windows: Mutex<HashMap<IpAddr, Window>>,
}

impl RateLimiter {
    pub fn new(max_requests: u32, window: Duration) -> Self {
        Self {
            max_requests,
            window,
            windows: Mutex::new(HashMap::new()),
        }
    }

    /// Record a request from `source` and decide whether it may proceed.
    pub fn check(&self, source: IpAddr) -> RateLimitDecision {
        self.check_at(source, Instant::now())
    }

    fn check_at(&self, source: IpAddr, now: Instant) -> RateLimitDecision {
        let mut windows = self.windows.lock();

        // Fully-elapsed windows are dropped on every check; the map only
        // ever holds sources seen within the last window.
        windows.retain(|_, w| now.duration_since(w.started) < self.window);

        let window = windows.entry(source).or_insert(Window {
            started: now,
            count: 0,
        });

        if window.count < self.max_requests {
            window.count += 1;
            RateLimitDecision::Allowed
        } else {
            let elapsed = now.duration_since(window.started);
            RateLimitDecision::Limited {
                retry_after: self.window.saturating_sub(elapsed),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ip(last: u8) -> IpAddr {
        IpAddr::from([203, 0, 113, last])
    }

    #[test]
    fn allows_up_to_the_limit_then_rejects() {
        let limiter = RateLimiter::new(5, Duration::from_secs(900));
        let now = Instant::now();

        for _ in 0..5 {
            assert_eq!(limiter.check_at(ip(1), now), RateLimitDecision::Allowed);
        }
        assert!(matches!(
            limiter.check_at(ip(1), now),
            RateLimitDecision::Limited { .. }
        ));
    }

    #[test]
    fn sources_are_limited_independently() {
        let limiter = RateLimiter::new(1, Duration::from_secs(900));
        let now = Instant::now();

        assert_eq!(limiter.check_at(ip(1), now), RateLimitDecision::Allowed);
        assert!(matches!(
            limiter.check_at(ip(1), now),
            RateLimitDecision::Limited { .. }
        ));
        assert_eq!(limiter.check_at(ip(2), now), RateLimitDecision::Allowed);
    }

    #[test]
    fn window_expiry_resets_the_counter() {
        let limiter = RateLimiter::new(2, Duration::from_secs(900));
        let start = Instant::now();

        assert_eq!(limiter.check_at(ip(1), start), RateLimitDecision::Allowed);
        assert_eq!(limiter.check_at(ip(1), start), RateLimitDecision::Allowed);
        assert!(matches!(
            limiter.check_at(ip(1), start),
            RateLimitDecision::Limited { .. }
        ));

        let later = start + Duration::from_secs(901);
        assert_eq!(limiter.check_at(ip(1), later), RateLimitDecision::Allowed);
        assert_eq!(limiter.check_at(ip(1), later), RateLimitDecision::Allowed);
        assert!(matches!(
            limiter.check_at(ip(1), later),
            RateLimitDecision::Limited { .. }
        ));
    }

    #[test]
    fn retry_after_counts_down_as_the_window_ages() {
        let limiter = RateLimiter::new(1, Duration::from_secs(900));
        let start = Instant::now();

        assert_eq!(limiter.check_at(ip(1), start), RateLimitDecision::Allowed);

        let after = limiter.check_at(ip(1), start + Duration::from_secs(600));
        match after {
            RateLimitDecision::Limited { retry_after } => {
                assert_eq!(retry_after, Duration::from_secs(300));
            }
            RateLimitDecision::Allowed => panic!("second request should be limited"),
        }
    }
}
