//! Authentication session state.

use place_data::UserProfile;
use tokio::sync::watch;
use tracing::info;

/// Holds the currently signed-in user, if any.
///
/// The watch channel is the single source of truth; getters read the
/// current value and `subscribe` hands out a receiver that observes
/// every change.
pub struct SessionState {
    tx: watch::Sender<Option<UserProfile>>,
}

impl SessionState {
    /// Start with no signed-in user.
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(None);
        Self { tx }
    }

    /// Replace the session with the given user.
    pub fn log_in(&self, user: UserProfile) {
        info!(user = %user.id, "user logged in");
        self.tx.send_replace(Some(user));
    }

    /// Clear the session.
    pub fn log_out(&self) {
        info!("user logged out");
        self.tx.send_replace(None);
    }

    pub fn is_authenticated(&self) -> bool {
        self.tx.borrow().is_some()
    }

    pub fn current_user(&self) -> Option<UserProfile> {
        self.tx.borrow().clone()
    }

    /// Observe session changes.
    pub fn subscribe(&self) -> watch::Receiver<Option<UserProfile>> {
        self.tx.subscribe()
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new()
    }
}
