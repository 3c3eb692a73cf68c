//! # Splash Testing
//!
//! Testing utilities and helpers for reducers and stores.
//!
//! This crate provides:
//! - Deterministic implementations of Environment traits
//! - [`ReducerTest`], a Given-When-Then helper for reducers
//! - Assertion helpers for effects
//! - Property-based testing strategies
//!
//! ## Example
//!
//! ```ignore
//! use splash_testing::{test_clock, ReducerTest};
//!
//! ReducerTest::new(CounterReducer::new())
//!     .with_env(CounterEnvironment::new(test_clock()))
//!     .given_state(CounterState::default())
//!     .when_action(CounterAction::Decrement)
//!     .then_state(|state| assert_eq!(state.value, 0))
//!     .run();
//! ```

use chrono::{DateTime, Utc};
use splash_core::environment::Clock;

/// Fluent Given-When-Then reducer tests
pub mod reducer_test;

pub use reducer_test::{assertions, ReducerTest};

/// Deterministic implementations of Environment traits
pub mod mocks {
    use super::{Clock, DateTime, Utc};

    /// Fixed clock for deterministic tests
    ///
    /// Always returns the same time, making tests reproducible.
    ///
    /// # Example
    ///
    /// ```
    /// use splash_testing::mocks::FixedClock;
    /// use splash_core::environment::Clock;
    /// use chrono::Utc;
    ///
    /// let clock = FixedClock::new(Utc::now());
    /// let time1 = clock.now();
    /// let time2 = clock.now();
    /// assert_eq!(time1, time2); // Always the same!
    /// ```
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct FixedClock {
        time: DateTime<Utc>,
    }

    impl FixedClock {
        /// Create a new fixed clock with the given time
        #[must_use]
        pub const fn new(time: DateTime<Utc>) -> Self {
            Self { time }
        }
    }

    impl Clock for FixedClock {
        fn now(&self) -> DateTime<Utc> {
            self.time
        }
    }

    /// Create a default fixed clock for tests (2025-01-01 00:00:00 UTC)
    #[must_use]
    pub fn test_clock() -> FixedClock {
        FixedClock::new(DateTime::<Utc>::UNIX_EPOCH + chrono::Duration::days(20_089))
    }
}

/// Property-based testing strategies
pub mod properties {
    use proptest::collection::vec;
    use proptest::prelude::*;

    /// Sequences of up to `max_len` actions drawn from `action`
    ///
    /// # Example
    ///
    /// ```
    /// use proptest::prelude::*;
    /// use splash_testing::properties::action_sequence;
    ///
    /// let strategy = action_sequence(prop_oneof![Just(1), Just(-1)], 16);
    /// # let _ = strategy;
    /// ```
    pub fn action_sequence<A, S>(action: S, max_len: usize) -> impl Strategy<Value = Vec<A>>
    where
        S: Strategy<Value = A>,
        A: std::fmt::Debug,
    {
        vec(action, 0..=max_len)
    }
}

// Re-export commonly used items
pub use mocks::{test_clock, FixedClock};

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};

    #[test]
    fn test_fixed_clock() {
        let clock = test_clock();
        let time1 = clock.now();
        let time2 = clock.now();
        assert_eq!(time1, time2);
    }

    #[test]
    fn test_default_clock_is_new_year_2025() {
        let time = test_clock().now();
        assert_eq!((time.year(), time.month(), time.day()), (2025, 1, 1));
        assert_eq!((time.hour(), time.minute(), time.second()), (0, 0, 0));
    }
}
