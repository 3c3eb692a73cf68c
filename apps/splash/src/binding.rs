//! How a page reaches the counter.
//!
//! The three sharing strategies differ only in where the count lives.
//! [`crate::app::App`] is written once against [`CountBinding`].

use crate::context::CountContext;
use crate::counter::CounterAction;
use crate::error::AppError;
use crate::local::LocalCounter;
use crate::store::{select_count, AppStore};

/// Read and change the counter, wherever it lives
pub trait CountBinding: Send + Sync {
    /// Whether the header can see the same value as the counter page
    const SHARED: bool;

    /// Mood line for counts that are neither zero nor a multiple of ten
    const IDLE_MOOD: Option<&'static str> = None;

    /// Current value
    async fn count(&self) -> u64;

    /// Add one
    ///
    /// # Errors
    ///
    /// Returns error if the backing store refuses the action.
    async fn increment(&self) -> Result<(), AppError>;

    /// Subtract one, stopping at zero
    ///
    /// # Errors
    ///
    /// Returns error if the backing store refuses the action.
    async fn decrement(&self) -> Result<(), AppError>;

    /// The counter page is leaving the screen
    async fn unmount(&self) {}
}

impl CountBinding for LocalCounter {
    const SHARED: bool = false;
    const IDLE_MOOD: Option<&'static str> = Some("Keep going!");

    async fn count(&self) -> u64 {
        Self::count(self)
    }

    async fn increment(&self) -> Result<(), AppError> {
        self.dispatch(CounterAction::Increment);
        Ok(())
    }

    async fn decrement(&self) -> Result<(), AppError> {
        self.dispatch(CounterAction::Decrement);
        Ok(())
    }

    async fn unmount(&self) {
        self.reset();
    }
}

impl CountBinding for CountContext {
    const SHARED: bool = true;

    async fn count(&self) -> u64 {
        Self::count(self)
    }

    async fn increment(&self) -> Result<(), AppError> {
        Self::increment(self);
        Ok(())
    }

    async fn decrement(&self) -> Result<(), AppError> {
        Self::decrement(self);
        Ok(())
    }
}

impl CountBinding for AppStore {
    const SHARED: bool = true;

    async fn count(&self) -> u64 {
        self.state(select_count).await
    }

    async fn increment(&self) -> Result<(), AppError> {
        let _ = self.send(CounterAction::Increment).await?;
        Ok(())
    }

    async fn decrement(&self) -> Result<(), AppError> {
        let _ = self.send(CounterAction::Decrement).await?;
        Ok(())
    }
}
