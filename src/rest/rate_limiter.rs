use governor::{
    clock::{Clock, DefaultClock},
    state::{InMemoryState, NotKeyed},
    Quota, RateLimiter as GovernorRateLimiter,
};
use std::num::NonZeroU32;
use std::sync::Arc;
use tokio::time::sleep;
use tracing::debug;

/// Client-side throttle applied before every catalog request
#[derive(Clone)]
pub struct RateLimiter {
    limiter: Arc<GovernorRateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    requests_per_second: NonZeroU32,
}

impl RateLimiter {
    /// Create a new rate limiter
    pub fn new(requests_per_second: NonZeroU32) -> Self {
        let limiter = GovernorRateLimiter::direct(Quota::per_second(requests_per_second));

        Self {
            limiter: Arc::new(limiter),
            requests_per_second,
        }
    }

    /// Wait until we're allowed to make a request
    pub async fn acquire(&self) {
        loop {
            match self.limiter.check() {
                Ok(_) => return,
                Err(not_until) => {
                    let wait_time = not_until.wait_time_from(DefaultClock::default().now());
                    debug!("Rate limit exceeded, waiting {:?}", wait_time);
                    sleep(wait_time).await;
                }
            }
        }
    }

    /// Get the configured requests per second
    pub fn requests_per_second(&self) -> u32 {
        self.requests_per_second.get()
    }
}
