//! Karekod (QR) rendering
//!
//! The standard mandates the lowest error-correction level and a quiet
//! zone around the symbol. The renderer is always fed the raw encoded
//! string with real GS bytes, never the display variant.

use ebis_types::{Error, Result};
use image::{ImageBuffer, ImageFormat, Luma};
use qrcode::{EcLevel, QrCode};
use std::io::Cursor;

/// Grayscale karekod image
pub type QrImage = ImageBuffer<Luma<u8>, Vec<u8>>;

/// Render the raw wire string as a karekod
///
/// `size` is the minimum edge length in pixels; the module grid is scaled
/// up to at least that size.
pub fn render(raw: &str, size: u32) -> Result<QrImage> {
    let code = QrCode::with_error_correction_level(raw.as_bytes(), EcLevel::L)
        .map_err(|e| Error::Qr(e.to_string()))?;

    let image = code
        .render::<Luma<u8>>()
        .quiet_zone(true)
        .min_dimensions(size, size)
        .build();

    Ok(image)
}

/// Encode a karekod image as PNG bytes
pub fn png_bytes(image: &QrImage) -> Result<Vec<u8>> {
    let mut bytes = Vec::new();
    image.write_to(&mut Cursor::new(&mut bytes), ImageFormat::Png)?;
    Ok(bytes)
}
