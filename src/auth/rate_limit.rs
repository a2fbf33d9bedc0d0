use std::collections::HashMap;
use std::net::IpAddr;
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

/// Failed-login throttle keyed by client IP over a sliding window.
#[derive(Clone)]
pub struct LoginThrottle {
    max_attempts: usize,
    window: Duration,
    attempts: Arc<Mutex<HashMap<IpAddr, Vec<Instant>>>>,
}

impl LoginThrottle {
    pub fn new(max_attempts: usize, window: Duration) -> Self {
        Self {
            max_attempts,
            window,
            attempts: Arc::new(Mutex::new(HashMap::new())),
        }
    }

    /// True once `max_attempts` failures fall inside the window.
    /// Drops expired entries for the checked IP.
    pub fn is_blocked(&self, ip: IpAddr) -> bool {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        let Some(timestamps) = map.get_mut(&ip) else {
            return false;
        };
        timestamps.retain(|t| now.duration_since(*t) < self.window);
        if timestamps.is_empty() {
            map.remove(&ip);
            return false;
        }
        timestamps.len() >= self.max_attempts
    }

    /// Record a failure for `ip`. Also sweeps expired failures of every IP,
    /// so addresses that never come back do not stay in the map.
    pub fn record_failure(&self, ip: IpAddr) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        let now = Instant::now();
        map.retain(|_, timestamps| {
            timestamps.retain(|t| now.duration_since(*t) < self.window);
            !timestamps.is_empty()
        });
        map.entry(ip).or_default().push(now);
    }

    /// Forget the IP's failures (after a successful login).
    pub fn clear(&self, ip: IpAddr) {
        let mut map = self.attempts.lock().unwrap_or_else(|e| e.into_inner());
        map.remove(&ip);
    }
}
