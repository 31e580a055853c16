//! QR code encoding and decoding
//!
//! Symbol encoding is delegated to the `qrcode` crate and rendered into an
//! `image` bitmap; decoding goes through `rqrr` and is used to verify that a
//! generated image scans back to its payload.

mod decoder;
mod encoder;

pub use decoder::QrDecoder;
pub use encoder::{BORDER_MODULES, ECC_LEVEL, MODULE_SIZE, QrEncoder};

use crate::payload::QrPayload;
use image::DynamicImage;
use std::fmt;

/// A rendered QR code held in memory until it is replaced or saved
pub struct GeneratedImage {
    payload: QrPayload,
    image: DynamicImage,
    version: i16,
    modules: usize,
    terminal: String,
}

impl GeneratedImage {
    /// The payload encoded in this image
    pub fn payload(&self) -> &QrPayload {
        &self.payload
    }

    /// The rendered bitmap
    pub fn image(&self) -> &DynamicImage {
        &self.image
    }

    /// QR symbol version (1..=40)
    pub fn version(&self) -> i16 {
        self.version
    }

    /// Symbol width in modules, excluding the quiet zone
    pub fn modules(&self) -> usize {
        self.modules
    }

    /// Bitmap width in pixels
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Bitmap height in pixels
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Unicode half-block rendering for terminal preview
    pub fn terminal(&self) -> &str {
        &self.terminal
    }
}

impl fmt::Debug for GeneratedImage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("GeneratedImage")
            .field("payload", &self.payload)
            .field("version", &self.version)
            .field("modules", &self.modules)
            .field("width", &self.width())
            .field("height", &self.height())
            .finish()
    }
}
