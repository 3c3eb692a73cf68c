//! Shared context: one counter owned by a provider, read and changed through handles.
//!
//! A [`CountContext`] can only be obtained from [`CountProvider::use_count`],
//! so there is no way to hold a handle that is not backed by a live value.
//!
//! ```
//! use splash::context::CountProvider;
//!
//! let provider = CountProvider::new();
//! let header = provider.use_count();
//! let page = provider.use_count();
//!
//! page.increment();
//! assert_eq!(header.count(), 1);
//! ```

use crate::counter::CounterState;
use std::sync::Arc;
use tokio::sync::watch;

/// Owner of the shared counter
#[derive(Debug, Clone)]
pub struct CountProvider {
    sender: Arc<watch::Sender<CounterState>>,
}

impl CountProvider {
    /// Create a provider holding a counter at zero
    #[must_use]
    pub fn new() -> Self {
        Self::with_initial(CounterState::default())
    }

    /// Create a provider holding `initial`
    #[must_use]
    pub fn with_initial(initial: CounterState) -> Self {
        let (sender, _) = watch::channel(initial);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Hand out a handle onto the shared counter
    #[must_use]
    pub fn use_count(&self) -> CountContext {
        CountContext {
            sender: Arc::clone(&self.sender),
            receiver: self.sender.subscribe(),
        }
    }

    /// Number of live handles
    #[must_use]
    pub fn consumers(&self) -> usize {
        self.sender.receiver_count()
    }
}

impl Default for CountProvider {
    fn default() -> Self {
        Self::new()
    }
}

/// A consumer's view of the shared counter plus its two mutators
#[derive(Debug)]
pub struct CountContext {
    sender: Arc<watch::Sender<CounterState>>,
    receiver: watch::Receiver<CounterState>,
}

impl CountContext {
    /// Current value
    #[must_use]
    pub fn count(&self) -> u64 {
        self.sender.borrow().value
    }

    /// Add one and notify every handle
    pub fn increment(&self) {
        self.sender.send_modify(CounterState::increment);
        tracing::debug!(value = self.count(), "Context incremented");
    }

    /// Subtract one (stopping at zero) and notify every handle
    pub fn decrement(&self) {
        self.sender.send_modify(CounterState::decrement);
        tracing::debug!(value = self.count(), "Context decremented");
    }

    /// Wait until any handle changes the counter, returning the new value
    ///
    /// Several changes made since the last call are reported once, with the
    /// latest value.
    pub async fn changed(&mut self) -> u64 {
        // The sender lives as long as this handle, so the channel cannot close
        let _ = self.receiver.changed().await;
        self.receiver.borrow_and_update().value
    }

    /// Whether the counter changed since this handle last looked
    #[must_use]
    pub fn has_changed(&self) -> bool {
        self.receiver.has_changed().unwrap_or(false)
    }
}

impl Clone for CountContext {
    fn clone(&self) -> Self {
        Self {
            sender: Arc::clone(&self.sender),
            receiver: self.sender.subscribe(),
        }
    }
}
