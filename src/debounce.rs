//! Trailing-edge debouncing for async actions.
//!
//! Each [`Debouncer`] owns at most one scheduled call. Triggering again
//! replaces it, so only the last trigger inside a quiet window ever runs.

use std::future::Future;
use std::pin::Pin;
use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;

pub const DEFAULT_DELAY: Duration = Duration::from_millis(2000);

type BoxFuture = Pin<Box<dyn Future<Output = ()> + Send + 'static>>;
type Action<T> = Arc<dyn Fn(T) -> BoxFuture + Send + Sync>;

pub struct Debouncer<T> {
    delay: Duration,
    action: Action<T>,
    pending: Option<JoinHandle<()>>,
}

impl<T: Send + 'static> Debouncer<T> {
    pub fn new<F, Fut>(action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self::with_delay(DEFAULT_DELAY, action)
    }

    pub fn with_delay<F, Fut>(delay: Duration, action: F) -> Self
    where
        F: Fn(T) -> Fut + Send + Sync + 'static,
        Fut: Future<Output = ()> + Send + 'static,
    {
        Self {
            delay,
            action: Arc::new(move |args| Box::pin(action(args)) as BoxFuture),
            pending: None,
        }
    }

    pub fn delay(&self) -> Duration {
        self.delay
    }

    /// Schedules the action with `args` after the delay, superseding any
    /// call that hasn't fired yet. Must be called inside a tokio runtime.
    pub fn trigger(&mut self, args: T) {
        self.cancel();

        let action = Arc::clone(&self.action);
        let delay = self.delay;
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // Once fired, the action runs detached: aborting this task only
            // drops the join handle below.
            if let Err(err) = tokio::spawn(action(args)).await {
                if err.is_panic() {
                    tracing::error!("debounced action panicked");
                }
            }
        }));
    }

    /// Drops the scheduled call, if any. An action already running is left alone.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }

    pub fn is_pending(&self) -> bool {
        self.pending
            .as_ref()
            .is_some_and(|handle| !handle.is_finished())
    }

    /// Waits for the last scheduled call, and its action, to finish.
    pub async fn settle(&mut self) {
        if let Some(handle) = self.pending.take() {
            // The scheduling task only fails by being aborted.
            let _ = handle.await;
        }
    }
}
