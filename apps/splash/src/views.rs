//! Text rendering of the header and the two pages.
//!
//! Views are plain values built from what they display; they never hold the
//! counter or its mutators. [`crate::app::App`] reads the binding and builds
//! them fresh on every render.

use crate::route::Route;
use std::fmt;

/// Brand shown at the left of the header, linking home
pub const BRAND: &str = "Splash App";

/// Every clickable button in the app
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ButtonId {
    /// Header button shown away from the counter page
    SignIn,
    /// Header button shown away from the counter page
    SignUp,
    /// Counter page button
    Increment,
    /// Counter page button
    Decrement,
}

impl ButtonId {
    /// Text on the button
    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::SignIn => "Sign In",
            Self::SignUp => "Sign Up",
            Self::Increment => "Increment",
            Self::Decrement => "Decrement",
        }
    }
}

impl fmt::Display for ButtonId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// A rendered button
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Button {
    /// Which button this is
    pub id: ButtonId,
}

impl fmt::Display for Button {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "[ {} ]", self.id.label())
    }
}

/// Top bar
///
/// Shows the count only on the counter page and only when the count is
/// shared; otherwise shows the sign-in buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Header {
    /// Page currently showing
    pub route: Route,
    /// Shared count, when the active strategy shares one
    pub count: Option<u64>,
}

impl Header {
    /// Buttons this header renders
    #[must_use]
    pub const fn buttons(&self) -> &'static [ButtonId] {
        match (self.route, self.count) {
            (Route::CounterApp, Some(_)) => &[],
            _ => &[ButtonId::SignIn, ButtonId::SignUp],
        }
    }
}

impl fmt::Display for Header {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{BRAND} <{}>", Route::Home)?;
        match (self.route, self.count) {
            (Route::CounterApp, Some(count)) => write!(f, "    Current count : {count}"),
            _ => {
                f.write_str("   ")?;
                for id in self.buttons() {
                    write!(f, " {}", Button { id: *id })?;
                }
                Ok(())
            },
        }
    }
}

/// Landing page
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct HomePage;

impl fmt::Display for HomePage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Welcome to {BRAND}")?;
        write!(f, "Counter App <{}>", Route::CounterApp)
    }
}

/// Line shown under the title for a given count
#[must_use]
pub const fn mood(count: u64) -> Option<&'static str> {
    if count == 0 {
        Some("No clicks yet!")
    } else if count % 10 == 0 {
        Some("You're on fire!")
    } else {
        None
    }
}

/// Counter page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CounterPage {
    /// Value to display
    pub count: u64,
    /// Line shown when [`mood`] has nothing to say
    pub idle_mood: Option<&'static str>,
}

impl CounterPage {
    /// Buttons this page renders, left to right
    pub const BUTTONS: [ButtonId; 2] = [ButtonId::Increment, ButtonId::Decrement];
}

impl fmt::Display for CounterPage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Counter App")?;
        write!(f, "Current count: {}", self.count)?;
        if let Some(mood) = mood(self.count).or(self.idle_mood) {
            write!(f, " {mood}")?;
        }
        writeln!(f)?;
        writeln!(f, "{}", self.count)?;
        write!(
            f,
            "{} {}",
            Button { id: Self::BUTTONS[0] },
            Button { id: Self::BUTTONS[1] }
        )
    }
}

/// Header above a page body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Layout {
    /// Rendered header
    pub header: Header,
    /// Rendered page body
    pub body: String,
}

impl fmt::Display for Layout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "{}", self.header)?;
        writeln!(f, "{}", "-".repeat(40))?;
        write!(f, "{}", self.body)
    }
}
