//! Cancellable debounce timer for coalescing rapid criteria changes: only
//! the last value scheduled within the window is delivered.

use std::future::Future;
use std::time::Duration;

use tokio::task::JoinHandle;

use crate::constants::DEBOUNCE_MS;

#[derive(Debug)]
pub struct Debouncer {
    window: Duration,
    pending: Option<JoinHandle<()>>,
}

impl Debouncer {
    pub fn new(window: Duration) -> Self {
        Self {
            window,
            pending: None,
        }
    }

    /// The fixed production window (300 ms).
    pub fn with_default_window() -> Self {
        Self::new(Duration::from_millis(DEBOUNCE_MS))
    }

    /// Cancels any pending delivery and arms a fresh timer for `value`.
    /// `deliver` runs once the window elapses without a superseding call.
    pub fn schedule<T, F, Fut>(&mut self, value: T, deliver: F)
    where
        T: Send + 'static,
        F: FnOnce(T) -> Fut + Send + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
        let window = self.window;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(window).await;
            deliver(value).await;
        }));
    }

    /// Drops any pending delivery without replacing it.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for Debouncer {
    fn drop(&mut self) {
        self.cancel();
    }
}
