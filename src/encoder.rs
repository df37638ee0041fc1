//! 圖片壓縮：任何輸入都轉成 JPEG 再交給傳輸層做 base64

use crate::error::{Result, VisionError};
use crate::types::EncodedImage;
use image::codecs::jpeg::JpegEncoder;
use image::{DynamicImage, RgbaImage};
use std::path::Path;

/// JPEG 壓縮品質
pub const JPEG_QUALITY: u8 = 90;

/// 壓縮圖片以便傳輸
///
/// JPEG 不支援 alpha，先轉成 RGB8。
pub fn encode(image: &DynamicImage) -> Result<EncodedImage> {
    let (width, height) = (image.width(), image.height());
    if width == 0 || height == 0 {
        return Err(VisionError::EmptyImage { width, height });
    }

    let rgb = image.to_rgb8();
    let mut jpeg = Vec::new();
    JpegEncoder::new_with_quality(&mut jpeg, JPEG_QUALITY).encode_image(&rgb)?;

    Ok(EncodedImage::from_jpeg(jpeg))
}

/// 從 RGBA8 像素緩衝區壓縮
pub fn encode_rgba(width: u32, height: u32, pixels: Vec<u8>) -> Result<EncodedImage> {
    let expected = (width as usize)
        .checked_mul(height as usize)
        .and_then(|n| n.checked_mul(4))
        .unwrap_or(usize::MAX);

    if pixels.len() != expected {
        return Err(VisionError::InvalidPixelBuffer {
            width,
            height,
            expected,
            actual: pixels.len(),
        });
    }

    let buffer = RgbaImage::from_raw(width, height, pixels).ok_or(
        VisionError::InvalidPixelBuffer {
            width,
            height,
            expected,
            actual: expected,
        },
    )?;

    encode(&DynamicImage::ImageRgba8(buffer))
}

/// 讀取圖片檔（任何 image crate 支援的格式）並壓縮
pub fn encode_file(path: impl AsRef<Path>) -> Result<EncodedImage> {
    let image = image::open(path)?;
    encode(&image)
}

#[cfg(test)]
mod tests {
    use super::*;
    use image::{ImageBuffer, Rgb, Rgba};

    fn gradient(width: u32, height: u32) -> DynamicImage {
        let buffer = ImageBuffer::from_fn(width, height, |x, y| {
            Rgb([(x * 7 % 256) as u8, (y * 13 % 256) as u8, ((x + y) % 256) as u8])
        });
        DynamicImage::ImageRgb8(buffer)
    }

    #[test]
    fn test_encode_produces_jpeg() {
        let encoded = encode(&gradient(32, 24)).unwrap();

        assert!(!encoded.is_empty());
        assert_eq!(&encoded.as_bytes()[..3], &[0xFF, 0xD8, 0xFF]);

        let decoded = image::load_from_memory(encoded.as_bytes()).unwrap();
        assert_eq!((decoded.width(), decoded.height()), (32, 24));
    }

    #[test]
    fn test_encode_single_pixel() {
        let encoded = encode(&gradient(1, 1)).unwrap();
        assert!(!encoded.is_empty());
    }

    #[test]
    fn test_encode_drops_alpha() {
        let buffer = ImageBuffer::from_pixel(4, 4, Rgba([10u8, 20, 30, 0]));
        let encoded = encode(&DynamicImage::ImageRgba8(buffer)).unwrap();
        assert!(!encoded.is_empty());
    }

    #[test]
    fn test_encode_rgba() {
        let pixels = vec![200u8; 8 * 8 * 4];
        let encoded = encode_rgba(8, 8, pixels).unwrap();
        assert_eq!(&encoded.as_bytes()[..2], &[0xFF, 0xD8]);
    }

    #[test]
    fn test_encode_rgba_wrong_length() {
        let result = encode_rgba(8, 8, vec![0u8; 10]);
        assert!(matches!(
            result,
            Err(VisionError::InvalidPixelBuffer { expected: 256, actual: 10, .. })
        ));
    }

    #[test]
    fn test_encode_zero_size() {
        let result = encode_rgba(0, 5, Vec::new());
        assert!(matches!(result, Err(VisionError::EmptyImage { width: 0, height: 5 })));
    }

    #[test]
    fn test_encode_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("sample.png");
        gradient(16, 16).save(&path).unwrap();

        let encoded = encode_file(&path).unwrap();
        assert_eq!(&encoded.as_bytes()[..3], &[0xFF, 0xD8, 0xFF]);
    }

    #[test]
    fn test_encode_file_missing() {
        let result = encode_file("./definitely/not/here.png");
        assert!(result.is_err());
    }
}
