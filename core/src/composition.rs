//! Reducer composition utilities
//!
//! A slice reducer written against a small state type can be mounted onto a
//! field of a larger root state with [`scope_reducer`]. The root store then
//! owns the whole tree while each slice only sees its own part.
//!
//! # Example
//!
//! ```
//! use splash_core::composition::scope_reducer;
//! use splash_core::{effect::Effect, reducer::Reducer, smallvec, SmallVec};
//!
//! #[derive(Clone, Default)]
//! struct CounterState {
//!     value: u64,
//! }
//!
//! #[derive(Clone)]
//! enum CounterAction {
//!     Increment,
//! }
//!
//! #[derive(Clone)]
//! struct CounterReducer;
//!
//! impl Reducer for CounterReducer {
//!     type State = CounterState;
//!     type Action = CounterAction;
//!     type Environment = ();
//!
//!     fn reduce(
//!         &self,
//!         state: &mut CounterState,
//!         action: CounterAction,
//!         _env: &(),
//!     ) -> SmallVec<[Effect<CounterAction>; 4]> {
//!         match action {
//!             CounterAction::Increment => state.value += 1,
//!         }
//!         smallvec![Effect::None]
//!     }
//! }
//!
//! #[derive(Default)]
//! struct RootState {
//!     counter: CounterState,
//!     title: String,
//! }
//!
//! let root = scope_reducer(CounterReducer, |root: &mut RootState| &mut root.counter);
//!
//! let mut state = RootState::default();
//! root.reduce(&mut state, CounterAction::Increment, &());
//! assert_eq!(state.counter.value, 1);
//! ```

use crate::effect::Effect;
use crate::reducer::Reducer;
use smallvec::SmallVec;
use std::marker::PhantomData;

/// Mounts a reducer onto a sub-state of a larger state.
///
/// `lens` borrows the slice out of the root state. The slice reducer runs
/// directly against that borrow, so no copy of the slice is made.
///
/// # Type Parameters
///
/// - `S`: The root state type
/// - `R`: The slice reducer; its `State` is the slice type
pub const fn scope_reducer<S, R>(
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
) -> ScopedReducer<S, R>
where
    R: Reducer,
{
    ScopedReducer {
        reducer,
        lens,
        _root: PhantomData,
    }
}

/// A reducer mounted on a slice of a root state.
///
/// Created by [`scope_reducer`].
pub struct ScopedReducer<S, R>
where
    R: Reducer,
{
    reducer: R,
    lens: fn(&mut S) -> &mut R::State,
    _root: PhantomData<fn(&mut S)>,
}

impl<S, R> Clone for ScopedReducer<S, R>
where
    R: Reducer + Clone,
{
    fn clone(&self) -> Self {
        Self {
            reducer: self.reducer.clone(),
            lens: self.lens,
            _root: PhantomData,
        }
    }
}

impl<S, R> std::fmt::Debug for ScopedReducer<S, R>
where
    R: Reducer + std::fmt::Debug,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ScopedReducer")
            .field("reducer", &self.reducer)
            .finish_non_exhaustive()
    }
}

impl<S, R> Reducer for ScopedReducer<S, R>
where
    R: Reducer,
{
    type State = S;
    type Action = R::Action;
    type Environment = R::Environment;

    fn reduce(
        &self,
        state: &mut Self::State,
        action: Self::Action,
        env: &Self::Environment,
    ) -> SmallVec<[Effect<Self::Action>; 4]> {
        let slice = (self.lens)(state);
        self.reducer.reduce(slice, action, env)
    }
}
