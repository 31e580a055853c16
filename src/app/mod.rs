//! Navigation state machine for the generator screens
//!
//! The application is modeled as:
//! ```text
//! AppState × Command → Result<Transition>
//! ```
//! A failed command leaves the state exactly as it was, so the user stays on
//! the screen they issued it from.

mod command;
mod controller;
mod state;

pub use command::{Command, Mode, Transition};
pub use controller::Controller;
pub use state::{AppMode, AppState, Screen, WifiForm};
