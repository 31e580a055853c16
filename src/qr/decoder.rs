//! QR code decoder using rqrr

use crate::error::{Error, Result};
use crate::payload::QrPayload;
use image::{DynamicImage, GrayImage};

/// QR code decoder
pub struct QrDecoder {}

impl QrDecoder {
    /// Create a new QR decoder with default settings
    pub fn new() -> Self {
        Self {}
    }

    /// Decode a QR code from an image
    pub fn decode(&self, img: &DynamicImage) -> Result<QrPayload> {
        let gray = img.to_luma8();

        self.decode_gray(gray)
    }

    /// Decode a QR code from a grayscale image
    pub fn decode_gray(&self, img: GrayImage) -> Result<QrPayload> {
        let mut prepared = rqrr::PreparedImage::prepare(img);

        let grids = prepared.detect_grids();

        // Take the first detected QR code
        let grid = grids.first().ok_or(Error::NoQrCodeFound)?;

        match grid.decode() {
            Ok((meta, content)) => {
                tracing::debug!(
                    "Decoded QR: version={:?}, ecc_level={:?}, length={}",
                    meta.version,
                    meta.ecc_level,
                    content.len()
                );

                Ok(QrPayload::new(content))
            }
            Err(e) => Err(Error::QrDecode(format!("Decode failed: {:?}", e))),
        }
    }

    /// Check that a generated image scans back to the expected payload
    pub fn verify(&self, img: &DynamicImage, expected: &QrPayload) -> Result<()> {
        let decoded = self.decode(img)?;
        if decoded != *expected {
            return Err(Error::QrDecode(format!(
                "Decoded payload does not match: expected {} bytes, got {}",
                expected.as_bytes().len(),
                decoded.as_bytes().len()
            )));
        }
        Ok(())
    }
}

impl Default for QrDecoder {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::qr::QrEncoder;

    #[test]
    fn test_blank_image_has_no_code() {
        let blank = GrayImage::from_pixel(200, 200, image::Luma([255u8]));
        let err = QrDecoder::new().decode_gray(blank).unwrap_err();
        assert!(matches!(err, Error::NoQrCodeFound));
    }

    #[test]
    fn test_verify_detects_mismatch() {
        let generated = QrEncoder::new().encode_string("first").unwrap();
        let decoder = QrDecoder::new();

        assert!(decoder.verify(generated.image(), generated.payload()).is_ok());
        let other = QrPayload::new("second");
        assert!(matches!(
            decoder.verify(generated.image(), &other),
            Err(Error::QrDecode(_))
        ));
    }
}
