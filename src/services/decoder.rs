use image::RgbImage;
use thiserror::Error;

/// Errors that can occur while decoding an uploaded image
#[derive(Debug, Error)]
pub enum DecodeError {
    #[error("image decode error: {0}")]
    Decode(#[from] image::ImageError),

    #[error("empty image upload")]
    EmptyUpload,
}

/// Decode uploaded bytes into an RGB raster
///
/// Format is sniffed from the bytes (PNG, JPEG, WebP, ...); whatever the
/// source color model, the result is flattened to RGB8 before the pipeline
/// runs.
pub fn decode_rgb(bytes: &[u8]) -> Result<RgbImage, DecodeError> {
    if bytes.is_empty() {
        return Err(DecodeError::EmptyUpload);
    }

    let decoded = image::load_from_memory(bytes)?;
    Ok(decoded.to_rgb8())
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb};
    use std::io::Cursor;

    fn png_bytes(width: u32, height: u32) -> Vec<u8> {
        let image: ImageBuffer<Rgb<u8>, Vec<u8>> =
            ImageBuffer::from_pixel(width, height, Rgb([200, 100, 50]));
        let mut bytes = Vec::new();
        image
            .write_to(&mut Cursor::new(&mut bytes), image::ImageFormat::Png)
            .unwrap();
        bytes
    }

    #[test]
    fn test_decode_valid_png() {
        let raster = decode_rgb(&png_bytes(20, 10)).unwrap();
        assert_eq!(raster.dimensions(), (20, 10));
        assert_eq!(raster.get_pixel(0, 0).0, [200, 100, 50]);
    }

    #[test]
    fn test_decode_garbage_bytes_fails() {
        assert!(matches!(
            decode_rgb(b"definitely not an image"),
            Err(DecodeError::Decode(_))
        ));
    }

    #[test]
    fn test_decode_empty_upload_fails() {
        assert!(matches!(decode_rgb(&[]), Err(DecodeError::EmptyUpload)));
    }
}
