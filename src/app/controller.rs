//! Single dispatch point for user commands

use crate::app::command::{Command, Mode, Transition};
use crate::app::state::{AppMode, AppState, Screen, WifiForm};
use crate::error::{Error, Result};
use crate::export;
use crate::payload::{QrPayload, build_text_payload};
use crate::qr::QrEncoder;
use tracing::{debug, info, warn};

/// Owns the application state and applies commands to it
pub struct Controller {
    state: AppState,
    encoder: QrEncoder,
}

impl Controller {
    /// Create a controller on the mode selection screen
    pub fn new() -> Self {
        Self {
            state: AppState::default(),
            encoder: QrEncoder::new(),
        }
    }

    /// Read-only view of the current state
    pub fn state(&self) -> &AppState {
        &self.state
    }

    /// Apply a command.
    ///
    /// On error nothing is changed and the caller should report the error to
    /// the user.
    pub fn dispatch(&mut self, command: Command) -> Result<Transition> {
        let from = self.state.screen;
        let result = self.apply(command);

        match &result {
            Ok(Transition::Navigated { from, to }) => {
                debug!(%from, %to, mode = ?self.state.mode, "Screen changed");
            }
            Ok(_) => {}
            Err(err) if err.is_warning() => debug!(screen = %from, "Input rejected: {err}"),
            Err(err) => warn!(screen = %from, "Command failed: {err}"),
        }
        debug_assert!(self.state.is_consistent());

        result
    }

    fn apply(&mut self, command: Command) -> Result<Transition> {
        let from = self.state.screen;

        match (from, command) {
            (Screen::ModeSelect, Command::SelectMode(Mode::Url)) => {
                self.state.enter_url_input();
                Ok(self.navigated(from))
            }
            (Screen::ModeSelect, Command::SelectMode(Mode::Wifi)) => {
                self.state.enter_wifi_input();
                Ok(self.navigated(from))
            }
            (Screen::UrlInput | Screen::WifiInput, Command::Back) => {
                self.state.enter_mode_select();
                Ok(self.navigated(from))
            }
            (Screen::Preview, Command::Back) => {
                match self.state.mode {
                    AppMode::Url => self.state.enter_url_input(),
                    AppMode::Wifi => self.state.enter_wifi_input(),
                    AppMode::None => self.state.enter_mode_select(),
                }
                Ok(self.navigated(from))
            }
            (Screen::UrlInput, Command::SetText(text)) => {
                self.state.url_text = text;
                Ok(Transition::Updated)
            }
            (Screen::WifiInput, Command::SetSsid(ssid)) => {
                self.wifi_form().credentials.ssid = ssid;
                Ok(Transition::Updated)
            }
            (Screen::WifiInput, Command::SetPassword(password)) => {
                self.wifi_form().credentials.password = password;
                Ok(Transition::Updated)
            }
            (Screen::WifiInput, Command::SetEncryption(encryption)) => {
                self.wifi_form().credentials.encryption = encryption;
                Ok(Transition::Updated)
            }
            (Screen::WifiInput, Command::ShowPassword(visible)) => {
                self.wifi_form().show_password = visible;
                Ok(Transition::Updated)
            }
            (Screen::UrlInput | Screen::WifiInput, Command::Preview) => {
                self.preview()?;
                Ok(self.navigated(from))
            }
            (Screen::Preview, Command::Save(path)) => self.save(path),
            (screen, command) => Err(Error::UnavailableCommand {
                command: command.name(),
                screen: screen.title(),
            }),
        }
    }

    fn navigated(&self, from: Screen) -> Transition {
        Transition::Navigated {
            from,
            to: self.state.screen,
        }
    }

    fn wifi_form(&mut self) -> &mut WifiForm {
        self.state.wifi.get_or_insert_with(WifiForm::default)
    }

    fn build_payload(&self) -> Result<(QrPayload, &'static str)> {
        match self.state.mode {
            AppMode::Url => Ok((build_text_payload(&self.state.url_text)?, "URL/Text QR Code")),
            AppMode::Wifi => {
                let form = self.state.wifi.clone().unwrap_or_default();
                Ok((form.credentials.to_payload()?, "WiFi QR Code"))
            }
            AppMode::None => Err(Error::UnavailableCommand {
                command: "preview",
                screen: self.state.screen.title(),
            }),
        }
    }

    fn preview(&mut self) -> Result<()> {
        let (payload, title) = self.build_payload()?;
        let generated = self.encoder.encode(&payload)?;

        info!(
            mode = ?self.state.mode,
            version = generated.version(),
            width = generated.width(),
            "Generated QR code"
        );

        self.state.generated = Some(generated);
        self.state.preview_title = Some(title);
        self.state.screen = Screen::Preview;
        Ok(())
    }

    fn save(&mut self, path: Option<std::path::PathBuf>) -> Result<Transition> {
        // The preview screen is only entered with a freshly generated image.
        let generated = self
            .state
            .generated
            .as_ref()
            .ok_or(Error::UnavailableCommand {
                command: "save",
                screen: self.state.screen.title(),
            })?;

        let Some(path) = path else {
            debug!("Save dialog dismissed");
            return Ok(Transition::Dismissed);
        };

        let format = export::save(generated, &path)?;
        Ok(Transition::Saved { path, format })
    }
}

impl Default for Controller {
    fn default() -> Self {
        Self::new()
    }
}
