//! QR code encoder

use crate::error::Result;
use crate::payload::QrPayload;
use crate::qr::GeneratedImage;
use image::{DynamicImage, Luma};
use qrcode::render::unicode;
use qrcode::{EcLevel, QrCode, Version};

/// Pixel size of one QR module
pub const MODULE_SIZE: u32 = 10;

/// Quiet zone width in modules (added by the renderer on every side)
pub const BORDER_MODULES: u32 = 4;

/// Error correction level; H recovers roughly 30% symbol damage
pub const ECC_LEVEL: EcLevel = EcLevel::H;

/// QR code encoder
pub struct QrEncoder {}

impl QrEncoder {
    /// Create a new QR encoder
    pub fn new() -> Self {
        Self {}
    }

    /// Encode a payload into a QR code image.
    ///
    /// The smallest symbol version that fits the payload is chosen.
    pub fn encode(&self, payload: &QrPayload) -> Result<GeneratedImage> {
        let code = QrCode::with_error_correction_level(payload.as_bytes(), ECC_LEVEL)?;

        let image = code
            .render::<Luma<u8>>()
            .module_dimensions(MODULE_SIZE, MODULE_SIZE)
            .quiet_zone(true)
            .build();

        let terminal = code
            .render::<unicode::Dense1x2>()
            .dark_color(unicode::Dense1x2::Light)
            .light_color(unicode::Dense1x2::Dark)
            .quiet_zone(true)
            .build();

        let version = match code.version() {
            Version::Normal(v) | Version::Micro(v) => v,
        };

        tracing::debug!(
            version,
            modules = code.width(),
            bytes = payload.as_bytes().len(),
            "Encoded QR code"
        );

        Ok(GeneratedImage {
            payload: payload.clone(),
            image: DynamicImage::ImageLuma8(image),
            version,
            modules: code.width(),
            terminal,
        })
    }

    /// Encode a string into a QR code image
    pub fn encode_string(&self, data: &str) -> Result<GeneratedImage> {
        self.encode(&QrPayload::new(data))
    }
}

impl Default for QrEncoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_encode_string() {
        let encoder = QrEncoder::new();
        let generated = encoder.encode_string("Hello, QR!").unwrap();
        assert_eq!(generated.payload().as_str(), "Hello, QR!");
        assert!(generated.version() >= 1);
        assert!(!generated.terminal().is_empty());
    }

    #[test]
    fn test_image_dimensions_include_quiet_zone() {
        let encoder = QrEncoder::new();
        let generated = encoder.encode_string("WIFI:T:WPA;S:Home;P:secret123;;").unwrap();
        let expected = (generated.modules() as u32 + 2 * BORDER_MODULES) * MODULE_SIZE;
        assert_eq!(generated.width(), expected);
        assert_eq!(generated.height(), expected);
    }

    #[test]
    fn test_smallest_version_for_short_payload() {
        let generated = QrEncoder::new().encode_string("hi").unwrap();
        assert_eq!(generated.version(), 1);
        assert_eq!(generated.modules(), 21);
        assert_eq!(generated.width(), 290);
    }

    #[test]
    fn test_capacity_matches_level_h() {
        // Version 40 holds 1273 bytes at level H (2953 at level L).
        let encoder = QrEncoder::new();
        let fits = encoder.encode_string(&"a".repeat(1273)).unwrap();
        assert_eq!(fits.version(), 40);
        assert!(matches!(
            encoder.encode_string(&"a".repeat(1274)),
            Err(Error::QrEncode(_))
        ));
    }

    #[test]
    fn test_oversized_payload_fails() {
        let data = "a".repeat(3000);
        let err = QrEncoder::new().encode_string(&data).unwrap_err();
        assert!(matches!(err, Error::QrEncode(_)));
    }

    #[test]
    fn test_round_trip() {
        use crate::qr::QrDecoder;

        let encoder = QrEncoder::new();
        let decoder = QrDecoder::new();

        let original = "WIFI:T:WEP;S:Lab;P:0123456789;;";
        let generated = encoder.encode_string(original).unwrap();
        let decoded = decoder.decode(generated.image()).unwrap();

        assert_eq!(decoded.as_str(), original);
    }
}
