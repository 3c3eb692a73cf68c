//! # Splash App
//!
//! One counter, shared three ways between a header and a counter page.
//!
//! - [`local`]: the counter page owns its count; the header cannot see it and
//!   leaving the page forgets it.
//! - [`context`]: a [`CountProvider`] owns the count and hands out
//!   [`CountContext`] handles to every consumer.
//! - [`store`]: the count lives in a centralized [`AppStore`], changed only by
//!   dispatching [`CounterAction`]s through the [`CounterReducer`].
//!
//! All three run the same [`CounterReducer`], so the counter never goes below
//! zero whichever way it is shared. [`App`] renders the header and pages
//! against any [`CountBinding`].
//!
//! ## Example
//!
//! ```no_run
//! use splash::{configure_store, select_count, CounterAction, CounterEnvironment};
//! use splash_core::environment::SystemClock;
//! use splash_runtime::StoreConfig;
//!
//! # async fn example() {
//! let store = configure_store(StoreConfig::default(), CounterEnvironment::new(SystemClock));
//!
//! let _ = store.send(CounterAction::Increment).await;
//! assert_eq!(store.state(select_count).await, 1);
//! # }
//! ```

pub mod app;
pub mod binding;
pub mod config;
pub mod context;
pub mod counter;
pub mod error;
pub mod local;
pub mod route;
pub mod store;
pub mod views;

pub use app::{App, LocalApp};
pub use binding::CountBinding;
pub use config::{AppConfig, ConfigError, Strategy};
pub use context::{CountContext, CountProvider};
pub use counter::{CounterAction, CounterEnvironment, CounterReducer, CounterState};
pub use error::AppError;
pub use local::LocalCounter;
pub use route::{Route, RouteError};
pub use store::{configure_store, select_count, AppStore, RootState};
pub use views::ButtonId;
