use std::sync::{Arc, Mutex, PoisonError};
use std::time::Duration;
use tokio::runtime::Handle;
use tokio::task::JoinHandle;

pub(crate) type Callback<A> = Arc<dyn Fn(A) + Send + Sync>;

/// Defers a callback until `wait` has elapsed without another call.
///
/// Every call aborts the previously scheduled run, so only the arguments of
/// the last call inside a burst ever reach the callback. The single pending
/// timer is a tokio task on the current runtime.
pub struct Debouncer<A = ()> {
    wait: Duration,
    callback: Callback<A>,
    pending: Mutex<Option<JoinHandle<()>>>,
}

impl<A: Send + 'static> Debouncer<A> {
    pub fn new<F>(wait: Duration, callback: F) -> Self
    where
        F: Fn(A) + Send + Sync + 'static,
    {
        Self {
            wait,
            callback: Arc::new(callback),
            pending: Mutex::new(None),
        }
    }

    pub fn call(&self, args: A) {
        let Ok(runtime) = Handle::try_current() else {
            tracing::warn!("Debounced call dropped: no async runtime is running");
            return;
        };

        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        if let Some(previous) = pending.take() {
            previous.abort();
        }

        let callback = Arc::clone(&self.callback);
        let wait = self.wait;
        *pending = Some(runtime.spawn(async move {
            tokio::time::sleep(wait).await;
            callback(args);
        }));
    }

    /// Drops the scheduled run, if any. Returns whether one was pending.
    pub fn cancel(&self) -> bool {
        let mut pending = self.pending.lock().unwrap_or_else(PoisonError::into_inner);
        match pending.take() {
            Some(handle) => {
                let was_pending = !handle.is_finished();
                handle.abort();
                was_pending
            }
            None => false,
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    pub fn wait(&self) -> Duration {
        self.wait
    }
}

impl<A> Drop for Debouncer<A> {
    fn drop(&mut self) {
        let pending = self.pending.get_mut().unwrap_or_else(PoisonError::into_inner);
        if let Some(handle) = pending.take() {
            handle.abort();
        }
    }
}
