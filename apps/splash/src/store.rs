//! The centralized store: a root state with the counter slice mounted on it.

use crate::counter::{CounterAction, CounterEnvironment, CounterReducer, CounterState};
use serde::{Deserialize, Serialize};
use splash_core::composition::{scope_reducer, ScopedReducer};
use splash_runtime::{Store, StoreConfig};
use std::sync::Arc;

/// Application state held by the store
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RootState {
    /// The counter slice
    pub counter: CounterState,
}

/// Root reducer: the counter reducer mounted at [`RootState::counter`]
pub type RootReducer = ScopedReducer<RootState, CounterReducer>;

/// The application store
pub type AppStore = Store<RootState, CounterAction, CounterEnvironment, RootReducer>;

/// Build the root reducer
#[must_use]
pub fn root_reducer() -> RootReducer {
    scope_reducer(CounterReducer::new(), |root: &mut RootState| &mut root.counter)
}

/// Create the application store
///
/// History records are timestamped with the environment's clock.
#[must_use]
pub fn configure_store(config: StoreConfig, environment: CounterEnvironment) -> AppStore {
    let config = config.with_clock(Arc::clone(&environment.clock));
    Store::with_config(RootState::default(), root_reducer(), environment, config)
}

/// Selects the counter value
#[must_use]
pub const fn select_count(state: &RootState) -> u64 {
    state.counter.value
}
