//! Bounded log of the actions a store has reduced.
//!
//! Every action that passes through [`Store::send`](crate::Store::send) is
//! recorded together with the state revision it produced and the time it was
//! reduced. The log keeps the most recent entries only; once full, the oldest
//! entry is dropped.
//!
//! # Example
//!
//! ```ignore
//! let history = store.history();
//! for record in history.entries() {
//!     println!("#{} {:?} -> revision {}", record.sequence, record.action, record.revision);
//! }
//! ```

use chrono::{DateTime, Utc};
use serde::Serialize;
use splash_core::environment::Clock;
use std::collections::VecDeque;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex, PoisonError};

/// One reduced action
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ActionRecord<A> {
    /// Position of this action among all actions the store has reduced
    pub sequence: u64,

    /// The action itself
    pub action: A,

    /// State revision after the reducer ran
    pub revision: u64,

    /// When the reducer ran
    pub recorded_at: DateTime<Utc>,
}

/// Shared, bounded action log
///
/// Cloning yields another handle onto the same log.
pub struct ActionLog<A> {
    entries: Arc<Mutex<VecDeque<ActionRecord<A>>>>,
    next_sequence: Arc<AtomicU64>,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl<A> ActionLog<A> {
    /// Create an empty log holding at most `capacity` records
    ///
    /// A capacity of zero disables recording.
    #[must_use]
    pub fn new(capacity: usize, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Arc::new(Mutex::new(VecDeque::with_capacity(capacity.min(1024)))),
            next_sequence: Arc::new(AtomicU64::new(0)),
            capacity,
            clock,
        }
    }

    /// Record an action reduced into `revision`
    pub fn record(&self, action: A, revision: u64) {
        let sequence = self.next_sequence.fetch_add(1, Ordering::SeqCst);
        if self.capacity == 0 {
            return;
        }

        let mut entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);

        if entries.len() >= self.capacity {
            entries.pop_front();
            metrics::counter!("store.history.dropped").increment(1);
            tracing::trace!(capacity = self.capacity, "Action history full, dropping oldest entry");
        }

        entries.push_back(ActionRecord {
            sequence,
            action,
            revision,
            recorded_at: self.clock.now(),
        });
    }

    /// Number of records currently held
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    /// Whether the log holds no records
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Total number of actions ever recorded, including dropped ones
    #[must_use]
    pub fn total_recorded(&self) -> u64 {
        self.next_sequence.load(Ordering::SeqCst)
    }

    /// Maximum number of records held
    #[must_use]
    pub const fn capacity(&self) -> usize {
        self.capacity
    }

    /// Snapshot of the held records, oldest first
    #[must_use]
    pub fn entries(&self) -> Vec<ActionRecord<A>>
    where
        A: Clone,
    {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .iter()
            .cloned()
            .collect()
    }

    /// Most recent record
    #[must_use]
    pub fn last(&self) -> Option<ActionRecord<A>>
    where
        A: Clone,
    {
        self.entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .back()
            .cloned()
    }

    /// Serialize the held records as a JSON array
    ///
    /// # Errors
    ///
    /// Returns an error if an action fails to serialize.
    pub fn export_json(&self) -> Result<String, serde_json::Error>
    where
        A: Serialize,
    {
        let entries = self
            .entries
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        serde_json::to_string_pretty(&*entries)
    }
}

impl<A> Clone for ActionLog<A> {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
            next_sequence: Arc::clone(&self.next_sequence),
            capacity: self.capacity,
            clock: Arc::clone(&self.clock),
        }
    }
}

impl<A> std::fmt::Debug for ActionLog<A> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ActionLog")
            .field("len", &self.len())
            .field("capacity", &self.capacity)
            .field("total_recorded", &self.total_recorded())
            .finish_non_exhaustive()
    }
}
