//! The counter slice: state, actions and the reducer every sharing strategy uses.
//!
//! The value is a `u64`, so it can never go below zero. Decrementing at zero
//! leaves it at zero, and incrementing at `u64::MAX` leaves it there.

use serde::{Deserialize, Serialize};
use splash_core::{effect::Effect, environment::Clock, reducer::Reducer, smallvec, SmallVec};
use std::sync::Arc;

/// Counter state
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CounterState {
    /// Current count value
    pub value: u64,
}

impl CounterState {
    /// A counter holding `value`
    #[must_use]
    pub const fn new(value: u64) -> Self {
        Self { value }
    }

    /// Add one
    pub const fn increment(&mut self) {
        self.value = self.value.saturating_add(1);
    }

    /// Subtract one, stopping at zero
    pub const fn decrement(&mut self) {
        self.value = self.value.saturating_sub(1);
    }
}

/// Counter actions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum CounterAction {
    /// Increment the counter by 1
    #[serde(rename = "counter/increment")]
    Increment,
    /// Decrement the counter by 1, never below 0
    #[serde(rename = "counter/decrement")]
    Decrement,
}

impl CounterAction {
    /// Namespaced action type, as shown in the action history
    #[must_use]
    pub const fn action_type(self) -> &'static str {
        match self {
            Self::Increment => "counter/increment",
            Self::Decrement => "counter/decrement",
        }
    }
}

impl std::fmt::Display for CounterAction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.action_type())
    }
}

/// Counter environment
///
/// The clock timestamps the store's action history.
#[derive(Clone)]
pub struct CounterEnvironment {
    /// Clock for time-based operations
    pub clock: Arc<dyn Clock>,
}

impl CounterEnvironment {
    /// Create a new counter environment with the given clock
    #[must_use]
    pub fn new(clock: impl Clock + 'static) -> Self {
        Self {
            clock: Arc::new(clock),
        }
    }
}

impl std::fmt::Debug for CounterEnvironment {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CounterEnvironment").finish_non_exhaustive()
    }
}

/// Counter reducer
///
/// A pure state machine: every action returns `Effect::None`.
#[derive(Debug, Clone, Copy, Default)]
pub struct CounterReducer;

impl CounterReducer {
    /// Create a new counter reducer
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl Reducer for CounterReducer {
    type State = CounterState;
    type Action = CounterAction;
    type Environment = CounterEnvironment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        _environment: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        match action {
            CounterAction::Increment => state.increment(),
            CounterAction::Decrement => state.decrement(),
        }

        tracing::trace!(action = %action, value = state.value, "Counter reduced");

        smallvec![Effect::None]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use splash_testing::{assertions, test_clock, ReducerTest};

    fn env() -> CounterEnvironment {
        CounterEnvironment::new(test_clock())
    }

    #[test]
    fn test_increment() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::default())
            .when_action(CounterAction::Increment)
            .then_state(|state| assert_eq!(state.value, 1))
            .then_effects(|effects| assertions::assert_no_effects(effects))
            .run();
    }

    #[test]
    fn test_decrement() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::new(5))
            .when_action(CounterAction::Decrement)
            .then_state(|state| assert_eq!(state.value, 4))
            .then_effects(|effects| assertions::assert_effects_count(effects, 1))
            .run();
    }

    #[test]
    fn test_decrement_at_zero_is_noop() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::default())
            .when_action(CounterAction::Decrement)
            .then_state(|state| assert_eq!(state.value, 0))
            .then_effects(|effects| assertions::assert_no_effects(effects))
            .run();
    }

    #[test]
    fn test_increment_ten_times() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::default())
            .when_actions(std::iter::repeat_n(CounterAction::Increment, 10))
            .then_state(|state| assert_eq!(state.value, 10))
            .run();
    }

    #[test]
    fn test_increment_saturates_at_max() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::new(u64::MAX))
            .when_action(CounterAction::Increment)
            .then_state(|state| assert_eq!(state.value, u64::MAX))
            .run();
    }

    #[test]
    fn test_round_trip_at_zero_stays_zero() {
        ReducerTest::new(CounterReducer::new())
            .with_env(env())
            .given_state(CounterState::default())
            .when_actions([CounterAction::Decrement, CounterAction::Increment, CounterAction::Decrement])
            .then_state(|state| assert_eq!(state.value, 0))
            .run();
    }

    #[test]
    fn test_action_type_names() {
        assert_eq!(CounterAction::Increment.action_type(), "counter/increment");
        assert_eq!(CounterAction::Decrement.to_string(), "counter/decrement");
    }
}
