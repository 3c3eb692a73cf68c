//! Application error type.

use crate::route::{Route, RouteError};
use crate::views::ButtonId;
use splash_runtime::StoreError;
use thiserror::Error;

/// Errors surfaced by the application shell
#[derive(Error, Debug)]
pub enum AppError {
    /// The store refused an action
    #[error(transparent)]
    Store(#[from] StoreError),

    /// Navigation to an unknown path
    #[error(transparent)]
    Route(#[from] RouteError),

    /// A click on a button the current page does not render
    #[error("button {button} is not rendered on {route}")]
    ButtonNotRendered {
        /// The clicked button
        button: ButtonId,
        /// The page that was showing
        route: Route,
    },
}
