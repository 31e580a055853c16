//! Application state owned by the controller

use crate::payload::{WifiCredentials, WifiEncryption};
use crate::qr::GeneratedImage;
use serde::Serialize;
use std::fmt;

/// Which input flow is logically active
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum AppMode {
    /// No flow selected
    #[default]
    None,
    /// Text / URL flow
    Url,
    /// WiFi credentials flow
    Wifi,
}

/// The screen currently displayed
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Screen {
    /// Choose between text and WiFi
    #[default]
    ModeSelect,
    /// Text / URL entry
    UrlInput,
    /// WiFi credential entry
    WifiInput,
    /// Generated code preview
    Preview,
}

impl Screen {
    /// Header title shown while the screen is active
    pub fn title(self) -> &'static str {
        match self {
            Self::ModeSelect => "QR Code Generator",
            Self::UrlInput => "URL / Text Mode",
            Self::WifiInput => "WiFi Mode",
            Self::Preview => "Preview",
        }
    }
}

impl fmt::Display for Screen {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.title())
    }
}

/// Fields of the WiFi input screen
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct WifiForm {
    /// Entered credentials
    pub credentials: WifiCredentials,
    /// Whether the password is shown in clear text
    pub show_password: bool,
}

impl WifiForm {
    /// Password as it should be displayed
    pub fn display_password(&self) -> String {
        if self.show_password {
            self.credentials.password.clone()
        } else {
            "•".repeat(self.credentials.password.chars().count())
        }
    }

    /// Selected security type
    pub fn encryption(&self) -> WifiEncryption {
        self.credentials.encryption
    }
}

/// Complete navigation and form state
#[derive(Debug, Default)]
pub struct AppState {
    pub(crate) screen: Screen,
    pub(crate) mode: AppMode,
    pub(crate) url_text: String,
    pub(crate) wifi: Option<WifiForm>,
    pub(crate) generated: Option<GeneratedImage>,
    pub(crate) preview_title: Option<&'static str>,
}

impl AppState {
    /// Currently displayed screen
    pub fn screen(&self) -> Screen {
        self.screen
    }

    /// Currently active flow
    pub fn mode(&self) -> AppMode {
        self.mode
    }

    /// Text entered on the URL screen
    pub fn url_text(&self) -> &str {
        &self.url_text
    }

    /// WiFi form, present only during the WiFi flow
    pub fn wifi(&self) -> Option<&WifiForm> {
        self.wifi.as_ref()
    }

    /// Most recently generated code, if any
    pub fn generated(&self) -> Option<&GeneratedImage> {
        self.generated.as_ref()
    }

    /// Title of the preview card ("URL/Text QR Code" or "WiFi QR Code")
    pub fn preview_title(&self) -> Option<&'static str> {
        self.preview_title
    }

    pub(crate) fn enter_mode_select(&mut self) {
        self.screen = Screen::ModeSelect;
        self.mode = AppMode::None;
        self.url_text.clear();
        self.wifi = None;
        self.generated = None;
        self.preview_title = None;
    }

    pub(crate) fn enter_url_input(&mut self) {
        self.screen = Screen::UrlInput;
        self.mode = AppMode::Url;
        self.url_text.clear();
        self.wifi = None;
        self.generated = None;
        self.preview_title = None;
    }

    pub(crate) fn enter_wifi_input(&mut self) {
        self.screen = Screen::WifiInput;
        self.mode = AppMode::Wifi;
        self.url_text.clear();
        self.wifi = Some(WifiForm::default());
        self.generated = None;
        self.preview_title = None;
    }

    /// Check the structural invariants between screen, mode and form state
    pub fn is_consistent(&self) -> bool {
        let mode_matches = match self.screen {
            Screen::ModeSelect => self.mode == AppMode::None,
            Screen::UrlInput => self.mode == AppMode::Url,
            Screen::WifiInput => self.mode == AppMode::Wifi,
            Screen::Preview => self.mode != AppMode::None && self.generated.is_some(),
        };
        let wifi_scoped = self.wifi.is_none() || self.mode == AppMode::Wifi;
        mode_matches && wifi_scoped
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_state() {
        let state = AppState::default();
        assert_eq!(state.screen(), Screen::ModeSelect);
        assert_eq!(state.mode(), AppMode::None);
        assert!(state.generated().is_none());
        assert!(state.is_consistent());
    }

    #[test]
    fn test_wifi_form_masks_password() {
        let mut form = WifiForm::default();
        form.credentials.password = "abc d".into();
        assert_eq!(form.display_password(), "•••••");
        form.show_password = true;
        assert_eq!(form.display_password(), "abc d");
    }

    #[test]
    fn test_entering_wifi_resets_form() {
        let mut state = AppState::default();
        state.enter_wifi_input();
        if let Some(form) = state.wifi.as_mut() {
            form.credentials.ssid = "Home".into();
            form.credentials.encryption = WifiEncryption::Wep;
            form.show_password = true;
        }
        state.enter_wifi_input();
        assert_eq!(state.wifi(), Some(&WifiForm::default()));
        assert!(state.is_consistent());
    }
}
