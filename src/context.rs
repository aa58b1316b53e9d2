//! Per-call cancellation and deadline context
//!
//! A [`Context`] is created by the caller for one conversion and threaded
//! into every store lookup. Cloning it shares the cancellation state, so the
//! caller can keep a clone and cancel an in-flight conversion.

use std::future::Future;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::time::Duration;

use tokio::sync::Notify;
use tokio::time::Instant;

use crate::error::StoreError;

#[derive(Debug, Default)]
struct CancelState {
    cancelled: AtomicBool,
    notify: Notify,
}

/// Cancellation flag plus optional deadline for one call tree
#[derive(Debug, Clone, Default)]
pub struct Context {
    cancel: Arc<CancelState>,
    deadline: Option<Instant>,
}

impl Context {
    /// A context that is never cancelled and has no deadline
    pub fn background() -> Self {
        Self::default()
    }

    /// Same cancellation state, with the given absolute deadline
    pub fn with_deadline(&self, deadline: Instant) -> Self {
        let deadline = match self.deadline {
            Some(existing) if existing < deadline => existing,
            _ => deadline,
        };
        Self {
            cancel: Arc::clone(&self.cancel),
            deadline: Some(deadline),
        }
    }

    /// Same cancellation state, with a deadline `timeout` from now
    pub fn with_timeout(&self, timeout: Duration) -> Self {
        self.with_deadline(Instant::now() + timeout)
    }

    pub fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Cancel this context and every clone of it
    pub fn cancel(&self) {
        self.cancel.cancelled.store(true, Ordering::Release);
        self.cancel.notify.notify_waiters();
    }

    pub fn is_cancelled(&self) -> bool {
        self.cancel.cancelled.load(Ordering::Acquire)
    }

    /// Fail fast if the context is already cancelled or expired
    pub fn check(&self) -> Result<(), StoreError> {
        if self.is_cancelled() {
            return Err(StoreError::Cancelled);
        }
        if let Some(deadline) = self.deadline {
            if Instant::now() >= deadline {
                return Err(StoreError::DeadlineExceeded);
            }
        }
        Ok(())
    }

    /// Await `fut` unless the context is cancelled or its deadline passes first
    pub async fn guard<T, F>(&self, fut: F) -> Result<T, StoreError>
    where
        F: Future<Output = Result<T, StoreError>>,
    {
        self.check()?;

        match self.deadline {
            Some(deadline) => {
                tokio::select! {
                    biased;
                    _ = self.cancelled() => Err(StoreError::Cancelled),
                    _ = tokio::time::sleep_until(deadline) => Err(StoreError::DeadlineExceeded),
                    result = fut => result,
                }
            }
            None => {
                tokio::select! {
                    biased;
                    _ = self.cancelled() => Err(StoreError::Cancelled),
                    result = fut => result,
                }
            }
        }
    }

    /// Resolves once [`Context::cancel`] has been called
    pub async fn cancelled(&self) {
        loop {
            // Register before checking the flag so a concurrent cancel is not missed.
            let notified = self.cancel.notify.notified();
            if self.is_cancelled() {
                return;
            }
            notified.await;
        }
    }
}
