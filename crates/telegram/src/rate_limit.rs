//! Simple rate limiting for button presses
//!
//! Drops callback bursts by limiting how often one user is served.

use std::collections::HashMap;
use std::sync::RwLock;
use std::time::{Duration, Instant};

use crate::constants::RATE_LIMIT_SECONDS;

/// Thread-safe rate limiter keyed by user ID
pub struct RateLimiter {
    /// Map of user ID to last accepted press
    last_seen: RwLock<HashMap<u64, Instant>>,
    /// Minimum interval between accepted presses
    interval: Duration,
}

impl Default for RateLimiter {
    fn default() -> Self {
        Self::new(Duration::from_secs(RATE_LIMIT_SECONDS))
    }
}

impl RateLimiter {
    pub fn new(interval: Duration) -> Self {
        Self {
            last_seen: RwLock::new(HashMap::new()),
            interval,
        }
    }

    /// Returns `true` if the user can proceed, `false` if rate limited.
    /// Records the press when it is accepted.
    pub fn check(&self, user_id: u64) -> bool {
        let now = Instant::now();

        {
            let last = self.last_seen.read().unwrap_or_else(|e| e.into_inner());
            if let Some(&last_time) = last.get(&user_id) {
                if now.duration_since(last_time) < self.interval {
                    return false;
                }
            }
        }

        let mut last = self.last_seen.write().unwrap_or_else(|e| e.into_inner());
        last.insert(user_id, now);
        true
    }

    /// Forget users idle for longer than `max_idle`
    pub fn cleanup(&self, max_idle: Duration) -> usize {
        let now = Instant::now();
        let mut last = self.last_seen.write().unwrap_or_else(|e| e.into_inner());
        let before = last.len();
        last.retain(|_, &mut instant| now.duration_since(instant) < max_idle);
        before - last.len()
    }

    pub fn tracked_users(&self) -> usize {
        self.last_seen.read().unwrap_or_else(|e| e.into_inner()).len()
    }
}

/// Global rate limiter instance
static RATE_LIMITER: std::sync::OnceLock<RateLimiter> = std::sync::OnceLock::new();

/// Get the global rate limiter
pub fn rate_limiter() -> &'static RateLimiter {
    RATE_LIMITER.get_or_init(RateLimiter::default)
}

/// Check a user against the global limiter
pub fn check_rate_limit(user_id: u64) -> bool {
    let limiter = rate_limiter();
    if limiter.tracked_users() > 1024 {
        limiter.cleanup(Duration::from_secs(60));
    }
    limiter.check(user_id)
}
