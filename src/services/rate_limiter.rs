use governor::{Quota, RateLimiter, Jitter};
use governor::clock::DefaultClock;
use governor::state::{InMemoryState, NotKeyed};
use std::num::NonZeroU32;
use std::sync::Arc;
use nonzero_ext::*;
use std::time::Duration;

#[derive(Clone)]
pub struct ApiRateLimiter {
    limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
    burst_limiter: Arc<RateLimiter<NotKeyed, InMemoryState, DefaultClock>>,
}

impl ApiRateLimiter {
    pub fn new() -> Self {
        Self::with_quotas(nonzero!(50u32), nonzero!(5u32))
    }

    pub fn with_quotas(per_minute: NonZeroU32, per_second: NonZeroU32) -> Self {
        Self {
            limiter: Arc::new(RateLimiter::direct(Quota::per_minute(per_minute))),
            burst_limiter: Arc::new(RateLimiter::direct(Quota::per_second(per_second))),
        }
    }

    /// Zero quotas fall back to the defaults.
    pub fn from_limits(per_minute: u32, per_second: u32) -> Self {
        Self::with_quotas(
            NonZeroU32::new(per_minute).unwrap_or(nonzero!(50u32)),
            NonZeroU32::new(per_second).unwrap_or(nonzero!(5u32)),
        )
    }

    pub async fn acquire(&self) {
        self.burst_limiter.until_ready().await;
        self.limiter.until_ready_with_jitter(Jitter::up_to(Duration::from_millis(100))).await;
    }
}

impl Default for ApiRateLimiter {
    fn default() -> Self {
        Self::new()
    }
}
