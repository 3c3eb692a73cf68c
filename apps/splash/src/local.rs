//! Local component state: a counter page that owns its counter.
//!
//! Nothing outside the page can read this value, and it is lost whenever the
//! page is unmounted (navigating away resets it to zero).

use crate::counter::{CounterAction, CounterEnvironment, CounterReducer, CounterState};
use splash_core::{effect::Effect, reducer::Reducer};
use std::sync::{Mutex, PoisonError};

/// Counter state private to one page
#[derive(Debug)]
pub struct LocalCounter {
    state: Mutex<CounterState>,
    reducer: CounterReducer,
    environment: CounterEnvironment,
}

impl LocalCounter {
    /// A page-local counter at zero
    #[must_use]
    pub fn new(environment: CounterEnvironment) -> Self {
        Self {
            state: Mutex::new(CounterState::default()),
            reducer: CounterReducer::new(),
            environment,
        }
    }

    /// Current value
    #[must_use]
    pub fn count(&self) -> u64 {
        self.state.lock().unwrap_or_else(PoisonError::into_inner).value
    }

    /// Run one action against the page's own state
    pub fn dispatch(&self, action: CounterAction) {
        let mut state = self.state.lock().unwrap_or_else(PoisonError::into_inner);
        let effects = self.reducer.reduce(&mut *state, action, &self.environment);
        debug_assert!(
            effects.iter().all(Effect::is_none),
            "local counter cannot run effects"
        );
    }

    /// Drop the page's state, as happens when the page unmounts
    pub fn reset(&self) {
        *self.state.lock().unwrap_or_else(PoisonError::into_inner) = CounterState::default();
        tracing::debug!("Local counter reset on unmount");
    }
}
