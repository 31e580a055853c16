//! Payload construction for text/URL and WiFi QR codes
//!
//! The WiFi builder follows the `WIFI:T:<type>;S:<ssid>;P:<password>;;`
//! convention understood by phone camera apps. Reserved characters
//! (`;`, `:`, `,`, `\`) inside the SSID or password are passed through
//! unescaped.

use crate::error::ValidationError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// The exact string handed to the QR encoder
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QrPayload(String);

impl QrPayload {
    /// Wrap an already-built payload string
    pub fn new(text: impl Into<String>) -> Self {
        Self(text.into())
    }

    /// Get the payload text
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Get the raw bytes
    pub fn as_bytes(&self) -> &[u8] {
        self.0.as_bytes()
    }
}

impl fmt::Display for QrPayload {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Security type of a WiFi network, in selector order
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WifiEncryption {
    /// WPA or WPA2 personal
    #[default]
    Wpa,
    /// Legacy WEP
    Wep,
    /// Open network
    #[serde(rename = "nopass")]
    NoPassword,
}

impl WifiEncryption {
    /// All options in the order they are offered to the user
    pub const ALL: [WifiEncryption; 3] = [Self::Wpa, Self::Wep, Self::NoPassword];

    /// Tag written after `T:` in the payload
    pub fn tag(self) -> &'static str {
        match self {
            Self::Wpa => "WPA",
            Self::Wep => "WEP",
            Self::NoPassword => "nopass",
        }
    }

    /// Human-readable selector label
    pub fn label(self) -> &'static str {
        match self {
            Self::Wpa => "WPA/WPA2",
            Self::Wep => "WEP",
            Self::NoPassword => "No Password",
        }
    }

    /// Look up an option by its selector position
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// Parse a security identifier (case-insensitive).
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "wpa" | "wpa2" | "wpa/wpa2" => Some(Self::Wpa),
            "wep" => Some(Self::Wep),
            "nopass" | "none" | "open" | "no password" => Some(Self::NoPassword),
            _ => None,
        }
    }
}

impl FromStr for WifiEncryption {
    type Err = String;

    fn from_str(value: &str) -> std::result::Result<Self, Self::Err> {
        Self::parse(value).ok_or_else(|| {
            format!("Unsupported security type '{value}', expected 'wpa', 'wep' or 'nopass'")
        })
    }
}

impl fmt::Display for WifiEncryption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// WiFi network credentials as entered by the user
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WifiCredentials {
    /// Network name
    pub ssid: String,
    /// Network password (kept verbatim)
    pub password: String,
    /// Security type
    pub encryption: WifiEncryption,
}

impl WifiCredentials {
    /// Build the WiFi payload for these credentials
    pub fn to_payload(&self) -> Result<QrPayload, ValidationError> {
        build_wifi_payload(&self.ssid, &self.password, self.encryption)
    }
}

/// Build a payload from free-form text or a URL.
///
/// Surrounding whitespace is trimmed; the remainder is encoded as-is.
pub fn build_text_payload(input: &str) -> Result<QrPayload, ValidationError> {
    let data = input.trim();
    if data.is_empty() {
        return Err(ValidationError::EmptyInput);
    }
    Ok(QrPayload::new(data))
}

/// Build a WiFi network payload.
///
/// The SSID is trimmed, the password is not: leading and trailing spaces are
/// legal in WiFi passwords.
pub fn build_wifi_payload(
    ssid: &str,
    password: &str,
    encryption: WifiEncryption,
) -> Result<QrPayload, ValidationError> {
    let ssid = ssid.trim();
    if ssid.is_empty() {
        return Err(ValidationError::EmptySsid);
    }

    let data = match encryption {
        WifiEncryption::NoPassword => format!("WIFI:T:nopass;S:{ssid};;"),
        secured => {
            if password.is_empty() {
                return Err(ValidationError::EmptyPassword);
            }
            format!("WIFI:T:{};S:{ssid};P:{password};;", secured.tag())
        }
    };

    Ok(QrPayload::new(data))
}
