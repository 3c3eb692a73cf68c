//! The application shell: current page, header, and click handling.

use crate::binding::CountBinding;
use crate::error::AppError;
use crate::local::LocalCounter;
use crate::route::Route;
use crate::views::{ButtonId, CounterPage, Header, HomePage, Layout};

/// Step one: the counter page keeps its own count and the header never sees it
pub type LocalApp = App<LocalCounter>;

/// The running app
///
/// Holds the counter binding and the page being shown. Every render reads
/// the count fresh, so the header and the counter page always agree when the
/// binding is shared.
#[derive(Debug)]
pub struct App<B> {
    binding: B,
    route: Route,
}

impl<B: CountBinding> App<B> {
    /// Start on the home page
    #[must_use]
    pub const fn new(binding: B) -> Self {
        Self {
            binding,
            route: Route::Home,
        }
    }

    /// Page currently showing
    #[must_use]
    pub const fn route(&self) -> Route {
        self.route
    }

    /// The counter binding
    #[must_use]
    pub const fn binding(&self) -> &B {
        &self.binding
    }

    /// Show the page at `path`
    ///
    /// Leaving the counter page unmounts it.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Route`] if no page lives at `path`. The current
    /// page stays in place.
    #[tracing::instrument(skip(self), fields(from = %self.route))]
    pub async fn navigate(&mut self, path: &str) -> Result<Route, AppError> {
        let next = Route::from_path(path)?;

        if self.route == Route::CounterApp && next != Route::CounterApp {
            self.binding.unmount().await;
        }

        self.route = next;
        tracing::info!(to = %next, "Navigated");
        Ok(next)
    }

    /// Buttons on screen right now
    pub async fn buttons(&self) -> Vec<ButtonId> {
        let mut buttons = self.header().await.buttons().to_vec();
        if self.route == Route::CounterApp {
            buttons.extend(CounterPage::BUTTONS);
        }
        buttons
    }

    /// Click a button
    ///
    /// # Errors
    ///
    /// Returns [`AppError::ButtonNotRendered`] if the button is not on
    /// screen, or the binding's error if the counter refuses the change.
    #[tracing::instrument(skip(self), fields(route = %self.route))]
    pub async fn click(&self, button: ButtonId) -> Result<(), AppError> {
        if !self.buttons().await.contains(&button) {
            return Err(AppError::ButtonNotRendered {
                button,
                route: self.route,
            });
        }

        match button {
            ButtonId::Increment => self.binding.increment().await?,
            ButtonId::Decrement => self.binding.decrement().await?,
            ButtonId::SignIn | ButtonId::SignUp => {
                tracing::info!(%button, "Clicked");
            },
        }
        Ok(())
    }

    /// Draw the whole screen
    pub async fn render(&self) -> String {
        let header = self.header().await;
        let body = match self.route {
            Route::Home => HomePage.to_string(),
            Route::CounterApp => CounterPage {
                count: self.binding.count().await,
                idle_mood: B::IDLE_MOOD,
            }
            .to_string(),
        };
        Layout { header, body }.to_string()
    }

    async fn header(&self) -> Header {
        let count = if B::SHARED {
            Some(self.binding.count().await)
        } else {
            None
        };
        Header {
            route: self.route,
            count,
        }
    }
}

#[cfg(test)]
mod tests {
    #![allow(clippy::unwrap_used)]

    use super::*;
    use crate::context::CountProvider;
    use crate::counter::CounterEnvironment;
    use splash_testing::test_clock;

    #[tokio::test]
    async fn test_starts_home() {
        let app = App::new(CountProvider::new().use_count());
        assert_eq!(app.route(), Route::Home);
        assert!(app.render().await.contains("Welcome to Splash App"));
    }

    #[tokio::test]
    async fn test_counter_buttons_only_on_counter_page() {
        let mut app = App::new(CountProvider::new().use_count());

        let err = app.click(ButtonId::Increment).await.unwrap_err();
        assert!(matches!(err, AppError::ButtonNotRendered { .. }));

        app.navigate("/counter-app").await.unwrap();
        app.click(ButtonId::Increment).await.unwrap();
        assert_eq!(app.binding().count(), 1);
    }

    #[tokio::test]
    async fn test_sign_in_hidden_on_shared_counter_page() {
        let mut app = App::new(CountProvider::new().use_count());
        app.click(ButtonId::SignIn).await.unwrap();

        app.navigate("/counter-app").await.unwrap();

        assert!(app.click(ButtonId::SignUp).await.is_err());
    }

    #[tokio::test]
    async fn test_unknown_path_keeps_page() {
        let mut app = App::new(CountProvider::new().use_count());
        app.navigate("/counter-app").await.unwrap();

        assert!(matches!(app.navigate("/nope").await, Err(AppError::Route(_))));
        assert_eq!(app.route(), Route::CounterApp);
    }

    #[tokio::test]
    async fn test_local_header_never_shows_count() {
        let mut app: LocalApp = App::new(LocalCounter::new(CounterEnvironment::new(test_clock())));
        app.navigate("/counter-app").await.unwrap();
        app.click(ButtonId::Increment).await.unwrap();

        let screen = app.render().await;

        assert!(!screen.contains("Current count : "));
        assert!(screen.contains("[ Sign In ]"));
        assert!(screen.contains("Current count: 1 Keep going!"));
    }

    #[tokio::test]
    async fn test_shared_page_stays_quiet_between_milestones() {
        let mut app = App::new(CountProvider::new().use_count());
        app.navigate("/counter-app").await.unwrap();
        app.click(ButtonId::Increment).await.unwrap();

        let screen = app.render().await;

        assert!(screen.contains("Current count: 1\n"));
        assert!(!screen.contains("Keep going!"));
    }
}
