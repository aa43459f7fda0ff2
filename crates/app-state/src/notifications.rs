//! Toast notification state with scheduled auto-dismissal.
//!
//! Each pushed toast schedules its own delayed removal; an explicit
//! early `dismiss` cancels the pending task. The only guarantee on the
//! scheduled path is "removed eventually, no earlier than the configured
//! duration".

use std::collections::HashMap;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

/// Severity/styling class of a toast.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ToastKind {
    Info,
    Success,
    Error,
}

/// A transient notification entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub id: u64,
    pub kind: ToastKind,
    pub message: String,
}

struct Inner {
    tx: watch::Sender<Vec<Toast>>,
    next_id: AtomicU64,
    /// Pending auto-dismiss tasks, keyed by toast id.
    pending: Mutex<HashMap<u64, JoinHandle<()>>>,
}

/// Holds the visible toasts and their dismissal schedule.
///
/// Clonable handle over shared state, because the spawned dismissal
/// tasks need to reach back into the store. `push` must be called from
/// within a Tokio runtime.
#[derive(Clone)]
pub struct Notifications {
    inner: Arc<Inner>,
}

impl Notifications {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            inner: Arc::new(Inner {
                tx,
                next_id: AtomicU64::new(1),
                pending: Mutex::new(HashMap::new()),
            }),
        }
    }

    /// Show a toast and schedule its removal after `duration`.
    ///
    /// Returns the toast id, usable for early dismissal.
    pub fn push(&self, kind: ToastKind, message: impl Into<String>, duration: Duration) -> u64 {
        let id = self.inner.next_id.fetch_add(1, Ordering::Relaxed);
        let toast = Toast {
            id,
            kind,
            message: message.into(),
        };
        debug!(id, ?kind, "toast shown");
        self.inner.tx.send_modify(|toasts| toasts.push(toast));

        let store = self.clone();
        let handle = tokio::spawn(async move {
            tokio::time::sleep(duration).await;
            store.expire(id);
        });
        self.pending_lock().insert(id, handle);
        id
    }

    /// Dismiss a toast before its timer fires. No-op for unknown ids.
    pub fn dismiss(&self, id: u64) {
        if let Some(handle) = self.pending_lock().remove(&id) {
            handle.abort();
        }
        self.remove(id);
    }

    /// Snapshot of the currently visible toasts, oldest first.
    pub fn active(&self) -> Vec<Toast> {
        self.inner.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<Toast>> {
        self.inner.tx.subscribe()
    }

    /// Scheduled removal path (timer fired).
    fn expire(&self, id: u64) {
        self.pending_lock().remove(&id);
        debug!(id, "toast expired");
        self.remove(id);
    }

    fn remove(&self, id: u64) {
        self.inner
            .tx
            .send_modify(|toasts| toasts.retain(|t| t.id != id));
    }

    fn pending_lock(&self) -> std::sync::MutexGuard<'_, HashMap<u64, JoinHandle<()>>> {
        // A panic while holding this lock is a bug in this module.
        self.inner
            .pending
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl Default for Notifications {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::task::yield_now;
    use tokio::time::advance;

    async fn settle() {
        // Give woken dismissal tasks a chance to run.
        for _ in 0..4 {
            yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_toast_is_removed_no_earlier_than_its_duration() {
        let notifications = Notifications::new();
        notifications.push(ToastKind::Info, "saved", Duration::from_secs(5));
        assert_eq!(notifications.active().len(), 1);

        advance(Duration::from_secs(4)).await;
        settle().await;
        assert_eq!(notifications.active().len(), 1, "must outlive 4 of 5 seconds");

        advance(Duration::from_secs(2)).await;
        settle().await;
        assert!(notifications.active().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_early_dismiss_cancels_the_timer() {
        let notifications = Notifications::new();
        let id = notifications.push(ToastKind::Error, "failed", Duration::from_secs(5));

        notifications.dismiss(id);
        assert!(notifications.active().is_empty());

        // The timer must not resurrect or double-remove anything.
        advance(Duration::from_secs(6)).await;
        settle().await;
        assert!(notifications.active().is_empty());
        assert!(notifications.pending_lock().is_empty());
    }

    #[tokio::test(start_paused = true)]
    async fn test_independent_timers() {
        let notifications = Notifications::new();
        notifications.push(ToastKind::Info, "short", Duration::from_secs(1));
        notifications.push(ToastKind::Success, "long", Duration::from_secs(10));

        advance(Duration::from_secs(2)).await;
        settle().await;

        let active = notifications.active();
        assert_eq!(active.len(), 1);
        assert_eq!(active[0].message, "long");
    }

    #[tokio::test]
    async fn test_dismiss_unknown_id_is_a_noop() {
        let notifications = Notifications::new();
        notifications.dismiss(42);
        assert!(notifications.active().is_empty());
    }
}
