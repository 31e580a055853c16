//! Error types for qrgen operations

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias using qrgen's Error type
pub type Result<T> = std::result::Result<T, Error>;

/// Input validation failures raised by the payload builders
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValidationError {
    /// Text/URL input was empty after trimming
    #[error("Please enter text or URL for the QR code!")]
    EmptyInput,

    /// WiFi network name was empty after trimming
    #[error("Please enter WiFi network name (SSID)!")]
    EmptySsid,

    /// A secured network was given an empty password
    #[error("Please enter WiFi password!")]
    EmptyPassword,
}

/// Main error type for qrgen operations
#[derive(Error, Debug)]
pub enum Error {
    /// User input was rejected before encoding
    #[error(transparent)]
    Validation(#[from] ValidationError),

    /// QR code encoding failed (e.g. payload exceeds capacity)
    #[error("Failed to generate QR code: {0}")]
    QrEncode(String),

    /// QR code decoding failed
    #[error("Failed to decode QR code: {0}")]
    QrDecode(String),

    /// No QR code found in image
    #[error("No QR code found in image")]
    NoQrCodeFound,

    /// The command is not offered on the active screen
    #[error("'{command}' is not available on the {screen} screen")]
    UnavailableCommand {
        /// Command name
        command: &'static str,
        /// Title of the active screen
        screen: &'static str,
    },

    /// A shell line could not be parsed into a command
    #[error("Invalid command: {0}")]
    InvalidCommand(String),

    /// Writing the image file failed; the held image is kept
    #[error("Failed to save QR code: {reason}")]
    Save {
        /// Destination path
        path: PathBuf,
        /// Underlying failure
        reason: String,
    },

    /// I/O error
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Image processing error
    #[error("Image processing error: {0}")]
    Image(String),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}

impl Error {
    /// Whether the error is a user-correctable warning rather than a failure
    pub fn is_warning(&self) -> bool {
        matches!(
            self,
            Error::Validation(_) | Error::InvalidCommand(_)
        )
    }
}

impl From<image::ImageError> for Error {
    fn from(e: image::ImageError) -> Self {
        match e {
            image::ImageError::IoError(io) => Error::Io(io),
            other => Error::Image(other.to_string()),
        }
    }
}

impl From<qrcode::types::QrError> for Error {
    fn from(e: qrcode::types::QrError) -> Self {
        Error::QrEncode(e.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(e: serde_json::Error) -> Self {
        Error::Config(format!("JSON error: {}", e))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_messages() {
        let err = Error::from(ValidationError::EmptySsid);
        assert_eq!(err.to_string(), "Please enter WiFi network name (SSID)!");
        assert!(err.is_warning());
    }

    #[test]
    fn test_failures_are_not_warnings() {
        assert!(!Error::QrEncode("data too long".into()).is_warning());
        assert!(
            !Error::UnavailableCommand {
                command: "save",
                screen: "QR Code Generator",
            }
            .is_warning()
        );
        assert!(!Error::Config("bad".into()).is_warning());
    }

    #[test]
    fn test_unparsable_shell_input_is_a_warning() {
        let err = Error::InvalidCommand("unknown command 'dance'".into());
        assert!(err.is_warning());
        assert_eq!(err.to_string(), "Invalid command: unknown command 'dance'");
    }
}
