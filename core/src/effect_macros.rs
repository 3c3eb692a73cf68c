//! Declarative macros for effect construction

/// Create an `Effect::Future` from an async block body
///
/// The body must evaluate to `Option<Action>`. A `Some` action is fed back
/// into the store once the future resolves.
///
/// # Example
///
/// ```rust
/// use splash_core::{async_effect, effect::Effect};
///
/// #[derive(Clone, Debug)]
/// enum Action {
///     Loaded(u64),
/// }
///
/// let effect: Effect<Action> = async_effect! {
///     Some(Action::Loaded(7))
/// };
/// assert!(matches!(effect, Effect::Future(_)));
/// ```
#[macro_export]
macro_rules! async_effect {
    ($($body:tt)*) => {
        $crate::effect::Effect::Future(
            ::std::boxed::Box::pin(async move { $($body)* })
        )
    };
}
