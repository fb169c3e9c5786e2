//! Profile picture loading — image file on disk to an inline data URI.
//!
//! The format is identified from magic bytes, then the bytes must actually
//! decode before anything is written to the record. Failures leave the
//! record unchanged.

use std::path::Path;

use base64::{engine::general_purpose::STANDARD, Engine as _};

use crate::errors::AppError;

const DATA_URI_PREFIX: &str = "data:";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum PictureFormat {
    Png,
    Jpeg,
    Webp,
    Gif,
}

impl PictureFormat {
    fn mime(&self) -> &'static str {
        match self {
            PictureFormat::Png => "image/png",
            PictureFormat::Jpeg => "image/jpeg",
            PictureFormat::Webp => "image/webp",
            PictureFormat::Gif => "image/gif",
        }
    }
}

fn detect_format(bytes: &[u8]) -> Option<PictureFormat> {
    // JPEG: FF D8 FF
    if bytes.len() >= 3 && bytes[0] == 0xFF && bytes[1] == 0xD8 && bytes[2] == 0xFF {
        return Some(PictureFormat::Jpeg);
    }
    // PNG: 89 50 4E 47 0D 0A 1A 0A
    if bytes.len() >= 8 && &bytes[..8] == b"\x89PNG\r\n\x1a\n" {
        return Some(PictureFormat::Png);
    }
    // WEBP: RIFF .... WEBP
    if bytes.len() >= 12 && &bytes[..4] == b"RIFF" && &bytes[8..12] == b"WEBP" {
        return Some(PictureFormat::Webp);
    }
    // GIF: GIF87a / GIF89a
    if bytes.len() >= 6 && (&bytes[..6] == b"GIF87a" || &bytes[..6] == b"GIF89a") {
        return Some(PictureFormat::Gif);
    }
    None
}

/// Encodes already-validated image bytes as a data URI.
fn encode_data_uri(mime: &str, bytes: &[u8]) -> String {
    format!("{DATA_URI_PREFIX}{mime};base64,{}", STANDARD.encode(bytes))
}

/// Reads the image at `path` and returns it as a `data:<mime>;base64,` URI.
pub fn load_picture(path: &Path) -> Result<String, AppError> {
    let bytes = std::fs::read(path)?;

    let format = detect_format(&bytes).ok_or_else(|| {
        AppError::Image(format!(
            "{} is not a supported image (PNG, JPEG, WebP, GIF)",
            path.display()
        ))
    })?;

    // The magic bytes can lie about a truncated or corrupt file.
    image::load_from_memory(&bytes)
        .map_err(|e| AppError::Image(format!("{} did not decode: {e}", path.display())))?;

    Ok(encode_data_uri(format.mime(), &bytes))
}

/// Splits a data URI into its MIME type and decoded payload.
/// Used by the preview to turn the record's picture back into pixels.
pub fn decode_data_uri(data_uri: &str) -> Result<(String, Vec<u8>), AppError> {
    let rest = data_uri
        .strip_prefix(DATA_URI_PREFIX)
        .ok_or_else(|| AppError::Image("not a data URI".to_string()))?;
    let (mime, payload) = rest
        .split_once(";base64,")
        .ok_or_else(|| AppError::Image("data URI is not base64-encoded".to_string()))?;
    let bytes = STANDARD
        .decode(payload)
        .map_err(|e| AppError::Image(format!("invalid base64 payload: {e}")))?;
    Ok((mime.to_string(), bytes))
}

#[cfg(test)]
mod tests {
    use super::*;

    // 1x1 opaque PNG, the smallest well-formed file the decoder accepts.
    fn tiny_png() -> Vec<u8> {
        let mut buf = std::io::Cursor::new(Vec::new());
        let img = image::RgbaImage::from_pixel(1, 1, image::Rgba([10, 20, 30, 255]));
        image::DynamicImage::ImageRgba8(img)
            .write_to(&mut buf, image::ImageFormat::Png)
            .unwrap();
        buf.into_inner()
    }

    #[test]
    fn test_detects_png_and_jpeg_magic_bytes() {
        assert_eq!(detect_format(&tiny_png()), Some(PictureFormat::Png));
        assert_eq!(
            detect_format(&[0xFF, 0xD8, 0xFF, 0xE0]),
            Some(PictureFormat::Jpeg)
        );
        assert_eq!(detect_format(b"GIF89a trailing"), Some(PictureFormat::Gif));
        assert_eq!(detect_format(b"not an image"), None);
    }

    #[test]
    fn test_load_picture_produces_data_uri() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("photo.png");
        std::fs::write(&path, tiny_png()).unwrap();

        let uri = load_picture(&path).unwrap();
        assert!(uri.starts_with("data:image/png;base64,"));
        assert!(uri.len() > "data:image/png;base64,".len());
    }

    #[test]
    fn test_load_picture_rejects_non_image_bytes() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, b"just text").unwrap();

        let err = load_picture(&path).unwrap_err();
        assert!(matches!(err, AppError::Image(_)));
    }

    #[test]
    fn test_load_picture_rejects_truncated_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("broken.png");
        // Valid magic bytes, garbage body.
        let mut bytes = tiny_png();
        bytes.truncate(12);
        std::fs::write(&path, bytes).unwrap();

        let err = load_picture(&path).unwrap_err();
        assert!(matches!(err, AppError::Image(_)));
    }

    #[test]
    fn test_data_uri_round_trip() {
        let bytes = tiny_png();
        let uri = encode_data_uri("image/png", &bytes);
        let (mime, decoded) = decode_data_uri(&uri).unwrap();
        assert_eq!(mime, "image/png");
        assert_eq!(decoded, bytes);
    }
}
