//! Chat transcript state.

use place_data::{ChatMessage, ChatRole};
use std::sync::atomic::{AtomicU64, Ordering};
use tokio::sync::watch;

/// Holds the ordered chat transcript.
///
/// Message ids are assigned monotonically by the store; timestamps come
/// from the caller (the shell owns the clock).
pub struct ChatState {
    tx: watch::Sender<Vec<ChatMessage>>,
    next_id: AtomicU64,
}

impl ChatState {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(Vec::new());
        Self {
            tx,
            next_id: AtomicU64::new(1),
        }
    }

    /// Append a visitor message; returns its id.
    pub fn push_user(&self, content: impl Into<String>, timestamp: i64) -> u64 {
        self.push(ChatRole::User, content.into(), timestamp)
    }

    /// Append an assistant reply; returns its id.
    pub fn push_assistant(&self, content: impl Into<String>, timestamp: i64) -> u64 {
        self.push(ChatRole::Assistant, content.into(), timestamp)
    }

    /// Drop the whole transcript.
    pub fn clear(&self) {
        self.tx.send_replace(Vec::new());
    }

    /// Snapshot of the transcript, oldest first.
    pub fn messages(&self) -> Vec<ChatMessage> {
        self.tx.borrow().clone()
    }

    pub fn subscribe(&self) -> watch::Receiver<Vec<ChatMessage>> {
        self.tx.subscribe()
    }

    fn push(&self, role: ChatRole, content: String, timestamp: i64) -> u64 {
        let id = self.next_id.fetch_add(1, Ordering::Relaxed);
        self.tx.send_modify(|messages| {
            messages.push(ChatMessage {
                id,
                role,
                content,
                timestamp,
            })
        });
        id
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self::new()
    }
}
