//! qrgen - QR code generator for text, URLs and WiFi credentials
//!
//! This library builds QR payloads, renders them through the `qrcode` crate
//! and saves the result as an image. A small navigation state machine models
//! the generator screens so that any front-end (the bundled terminal shell or
//! a GUI) can drive the same flow.
//!
//! # Features
//!
//! - **Payloads**: trimmed text/URL payloads and `WIFI:` network payloads
//! - **Rendering**: error correction level H, 10 px modules, 4-module quiet zone
//! - **Export**: PNG or JPEG, chosen by file extension
//! - **Navigation**: explicit commands dispatched through one [`Controller`]
//!
//! # Example
//!
//! ```no_run
//! use qrgen::{QrEncoder, WifiEncryption, build_wifi_payload, export};
//!
//! fn main() -> qrgen::Result<()> {
//!     let payload = build_wifi_payload("Home", "secret123", WifiEncryption::Wpa)?;
//!     let generated = QrEncoder::new().encode(&payload)?;
//!     export::save(&generated, std::path::Path::new("qrcode.png"))?;
//!     Ok(())
//! }
//! ```

#![warn(missing_docs, rust_2024_compatibility)]

pub mod app;
pub mod config;
pub mod error;
pub mod export;
pub mod logging;
pub mod output;
pub mod payload;
pub mod qr;
pub mod shell;

// Re-exports for convenience
pub use error::{Error, Result, ValidationError};

pub use app::{AppMode, AppState, Command, Controller, Mode, Screen, Transition};
pub use config::{LogRotation, LoggingOptions, OutputOptions, QrgenConfig};
pub use payload::{
    QrPayload, WifiCredentials, WifiEncryption, build_text_payload, build_wifi_payload,
};
pub use qr::{GeneratedImage, QrDecoder, QrEncoder};
