//! User-visible message log.
//!
//! `HeroService` reports every outcome as a display string through a
//! `MessageSink`. `MessageService` is the stock sink: a shared, append-only
//! list that a UI or CLI can render, mirrored into `tracing`.

use std::sync::{Arc, Mutex, MutexGuard};

/// Accepts human-readable status messages.
pub trait MessageSink: Send + Sync {
    fn add(&self, message: String);
}

/// Process-wide message log. Clones share the same underlying list.
#[derive(Debug, Clone, Default)]
pub struct MessageService {
    messages: Arc<Mutex<Vec<String>>>,
}

impl MessageService {
    pub fn new() -> Self {
        Self::default()
    }

    /// Snapshot of the log, oldest first.
    pub fn messages(&self) -> Vec<String> {
        self.lock().clone()
    }

    pub fn clear(&self) {
        self.lock().clear();
    }

    pub fn len(&self) -> usize {
        self.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    // A panic while holding the lock cannot leave a Vec<String> half-written.
    fn lock(&self) -> MutexGuard<'_, Vec<String>> {
        self.messages.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}

impl MessageSink for MessageService {
    fn add(&self, message: String) {
        tracing::info!(target: "hero_core::message", "{message}");
        self.lock().push(message);
    }
}

impl<S: MessageSink + ?Sized> MessageSink for Arc<S> {
    fn add(&self, message: String) {
        (**self).add(message);
    }
}
