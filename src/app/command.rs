//! Commands accepted by the controller and the transitions they produce

use crate::app::Screen;
use crate::payload::WifiEncryption;
use image::ImageFormat;
use std::path::PathBuf;

/// Input flow chosen on the mode selection screen
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Text or URL
    Url,
    /// WiFi credentials
    Wifi,
}

/// A discrete user action
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Pick an input flow (mode selection screen)
    SelectMode(Mode),
    /// Leave the current screen
    Back,
    /// Replace the text/URL field
    SetText(String),
    /// Replace the SSID field
    SetSsid(String),
    /// Replace the password field
    SetPassword(String),
    /// Choose the security type
    SetEncryption(WifiEncryption),
    /// Toggle password visibility
    ShowPassword(bool),
    /// Build the payload and render the code
    Preview,
    /// Save the held code; `None` is a dismissed save dialog
    Save(Option<PathBuf>),
}

impl Command {
    /// Short name used in log output and error messages
    pub fn name(&self) -> &'static str {
        match self {
            Self::SelectMode(Mode::Url) => "url",
            Self::SelectMode(Mode::Wifi) => "wifi",
            Self::Back => "back",
            Self::SetText(_) => "text",
            Self::SetSsid(_) => "ssid",
            Self::SetPassword(_) => "password",
            Self::SetEncryption(_) => "security",
            Self::ShowPassword(_) => "show-password",
            Self::Preview => "preview",
            Self::Save(_) => "save",
        }
    }
}

/// Result of a successfully dispatched command
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Transition {
    /// The active screen changed
    Navigated {
        /// Screen before the command
        from: Screen,
        /// Screen after the command
        to: Screen,
    },
    /// A form field changed; the screen did not
    Updated,
    /// The held code was written to disk
    Saved {
        /// Destination path
        path: PathBuf,
        /// Format inferred from the path
        format: ImageFormat,
    },
    /// The save dialog was dismissed
    Dismissed,
}
