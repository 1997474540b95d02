use crate::utils::debounce::Callback;
use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::time::Instant;

/// Runs a callback at most once per `limit`.
///
/// The first call goes through immediately; calls arriving before `limit` has
/// elapsed are dropped, and the first call after that goes through again.
pub struct Throttler<A = ()> {
    limit: Duration,
    callback: Callback<A>,
    reopens_at: Mutex<Option<Instant>>,
}

impl<A> Throttler<A> {
    pub fn new<F>(limit: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            limit,
            callback: Arc::new(callback),
            reopens_at: Mutex::new(None),
        }
    }

    /// Returns `true` when the callback ran for this call.
    pub fn call(&self, args: A) -> bool {
        let now = Instant::now();
        {
            let mut reopens_at = self.reopens_at.lock().unwrap_or_else(PoisonError::into_inner);
            if reopens_at.is_some_and(|at| now < at) {
                return false;
            }
            *reopens_at = Some(now + self.limit);
        }

        (self.callback)(args);
        true
    }

    pub fn limit(&self) -> Duration {
        self.limit
    }
}
