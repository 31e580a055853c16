//! Persisting generated QR codes to image files

use crate::error::{Error, Result};
use crate::qr::GeneratedImage;
use image::ImageFormat;
use std::path::Path;

/// Filename suggested when the user has not chosen one
pub const DEFAULT_FILENAME: &str = "qrcode.png";

/// Work out the image format for a target path.
///
/// The format follows the file extension; a path without one is written as PNG.
pub fn format_for_path(path: &Path) -> Result<ImageFormat> {
    if path.extension().is_none() {
        return Ok(ImageFormat::Png);
    }
    Ok(ImageFormat::from_path(path)?)
}

/// Save a generated QR code to `path`, returning the format that was written.
pub fn save(generated: &GeneratedImage, path: &Path) -> Result<ImageFormat> {
    let failed = |reason: String| Error::Save {
        path: path.to_path_buf(),
        reason,
    };

    let format = format_for_path(path).map_err(|e| failed(e.to_string()))?;
    generated
        .image()
        .save_with_format(path, format)
        .map_err(|e| failed(e.to_string()))?;

    tracing::info!(
        path = %path.display(),
        ?format,
        width = generated.width(),
        "Saved QR code"
    );
    Ok(format)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;
    use crate::qr::QrEncoder;

    #[test]
    fn test_format_inferred_from_extension() {
        assert_eq!(
            format_for_path(Path::new("out/qrcode.png")).unwrap(),
            ImageFormat::Png
        );
        assert_eq!(
            format_for_path(Path::new("photo.JPG")).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(
            format_for_path(Path::new("photo.jpeg")).unwrap(),
            ImageFormat::Jpeg
        );
        assert_eq!(format_for_path(Path::new("qrcode")).unwrap(), ImageFormat::Png);
    }

    #[test]
    fn test_unknown_extension_rejected() {
        let err = format_for_path(Path::new("qrcode.notanimage")).unwrap_err();
        assert!(matches!(err, Error::Image(_)));
    }

    #[test]
    fn test_save_png_and_jpeg() {
        let dir = tempfile::tempdir().unwrap();
        let generated = QrEncoder::new().encode_string("https://example.com").unwrap();

        let png = dir.path().join(DEFAULT_FILENAME);
        assert_eq!(save(&generated, &png).unwrap(), ImageFormat::Png);
        let reloaded = image::open(&png).unwrap();
        assert_eq!(reloaded.width(), generated.width());

        let jpg = dir.path().join("qrcode.jpg");
        assert_eq!(save(&generated, &jpg).unwrap(), ImageFormat::Jpeg);
        assert!(jpg.exists());
    }

    #[test]
    fn test_save_into_missing_directory_fails() {
        let dir = tempfile::tempdir().unwrap();
        let generated = QrEncoder::new().encode_string("hello").unwrap();
        let target = dir.path().join("missing").join("qrcode.png");
        let err = save(&generated, &target).unwrap_err();
        assert!(matches!(err, Error::Save { .. }));
        assert!(err.to_string().starts_with("Failed to save QR code: "));
    }
}
