//! QR code rendering for short links.

use crate::error::AppError;
use base64::Engine as _;
use image::{DynamicImage, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// Minimum edge length of the rendered image in pixels.
const MIN_DIMENSION: u32 = 256;

/// Encodes `data` as a QR code (error correction level H) and returns the
/// PNG image as standard base64, ready for a `data:image/png;base64,` URI.
///
/// # Errors
///
/// Returns [`AppError::Internal`] if the data does not fit in a QR code or
/// PNG encoding fails.
pub fn render_png_base64(data: &str) -> Result<String, AppError> {
    let code = QrCode::with_error_correction_level(data.as_bytes(), EcLevel::H)
        .map_err(|e| AppError::internal(format!("QR code generation error: {}", e)))?;

    let image = code
        .render::<Luma<u8>>()
        .min_dimensions(MIN_DIMENSION, MIN_DIMENSION)
        .quiet_zone(true)
        .build();

    let mut png = Cursor::new(Vec::new());
    DynamicImage::ImageLuma8(image)
        .write_to(&mut png, ImageFormat::Png)
        .map_err(|e| AppError::internal(format!("PNG encoding error: {}", e)))?;

    Ok(base64::engine::general_purpose::STANDARD.encode(png.into_inner()))
}
