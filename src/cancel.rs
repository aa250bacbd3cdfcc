//! Cancellation primitive for background tasks.
//!
//! A [`CancelSource`] is held by the owner of a task; the task itself holds a
//! [`CancelHandle`]. Signalling is one-shot and idempotent: once cancelled, a
//! source stays cancelled.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use tokio::sync::Notify;

/// Owner side of a cancellation token.
pub struct CancelSource {
    flag: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancelSource {
    pub fn new() -> Self {
        Self {
            flag: Arc::new(AtomicBool::new(false)),
            notify: Arc::new(Notify::new()),
        }
    }

    /// Signal cancellation and wake every waiting task. Idempotent.
    pub fn signal(&self) {
        if !self.flag.swap(true, Ordering::SeqCst) {
            self.notify.notify_waiters();
        }
    }

    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Handle for the task side. Cheap to clone into spawned futures.
    pub fn handle(&self) -> CancelHandle {
        CancelHandle {
            flag: Arc::clone(&self.flag),
            notify: Arc::clone(&self.notify),
        }
    }
}

impl Default for CancelSource {
    fn default() -> Self {
        Self::new()
    }
}

/// Task side of a cancellation token.
#[derive(Clone)]
pub struct CancelHandle {
    flag: Arc<AtomicBool>,
    notify: Arc<Notify>,
}

impl CancelHandle {
    pub fn is_cancelled(&self) -> bool {
        self.flag.load(Ordering::SeqCst)
    }

    /// Wait until the source signals.
    ///
    /// The waiter is registered before the flag check; `notify_waiters` does
    /// not store a permit, so checking first would lose a signal that fires
    /// between the check and the await.
    pub async fn cancelled(&self) {
        let notified = self.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();
        if self.is_cancelled() {
            return;
        }
        notified.await;
    }
}
